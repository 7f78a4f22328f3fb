use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::region::{NewRegion as DomainNewRegion, Region as DomainRegion};
use crate::domain::types::{TypeConstraintError, UserId};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::regions)]
/// Diesel model for [`crate::domain::region::Region`].
pub struct Region {
    pub id: String,
    pub code: String,
    pub name: String,
    pub kana_name: String,
    pub kana_en: String,
    pub status: String,
    pub user_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::regions)]
/// Insertable form of [`Region`].
pub struct NewRegion<'a> {
    pub id: String,
    pub code: &'a str,
    pub name: &'a str,
    pub kana_name: &'a str,
    pub kana_en: &'a str,
    pub status: &'a str,
    pub user_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Region> for DomainRegion {
    type Error = TypeConstraintError;

    fn try_from(db: Region) -> Result<Self, Self::Error> {
        Ok(Self {
            id: db.id.as_str().try_into()?,
            code: db.code.try_into()?,
            name: db.name.try_into()?,
            kana_name: db.kana_name.try_into()?,
            kana_en: db.kana_en.try_into()?,
            status: db.status.as_str().try_into()?,
            user_id: db.user_id.map(UserId::try_from).transpose()?,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewRegion> for NewRegion<'a> {
    fn from(region: &'a DomainNewRegion) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: region.id.to_string(),
            code: region.code.as_str(),
            name: region.name.as_str(),
            kana_name: region.kana_name.as_str(),
            kana_en: region.kana_en.as_str(),
            status: region.status.as_str(),
            user_id: region.user_id.map(String::from),
            created_at: now,
            updated_at: now,
        }
    }
}
