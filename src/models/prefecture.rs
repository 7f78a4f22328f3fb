use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::prefecture::{
    NewPrefecture as DomainNewPrefecture, Prefecture as DomainPrefecture,
};
use crate::domain::types::{RegionId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::prefectures)]
/// Diesel model for [`crate::domain::prefecture::Prefecture`].
pub struct Prefecture {
    pub id: String,
    pub code: String,
    pub name: String,
    pub kana_name: String,
    pub kana_en: String,
    pub status: String,
    pub region_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::prefectures)]
/// Insertable form of [`Prefecture`].
pub struct NewPrefecture<'a> {
    pub id: String,
    pub code: &'a str,
    pub name: &'a str,
    pub kana_name: &'a str,
    pub kana_en: &'a str,
    pub status: &'a str,
    pub region_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Prefecture> for DomainPrefecture {
    type Error = TypeConstraintError;

    fn try_from(db: Prefecture) -> Result<Self, Self::Error> {
        Ok(Self {
            id: db.id.as_str().try_into()?,
            code: db.code.try_into()?,
            name: db.name.try_into()?,
            kana_name: db.kana_name.try_into()?,
            kana_en: db.kana_en.try_into()?,
            status: db.status.as_str().try_into()?,
            region_id: db.region_id.map(RegionId::try_from).transpose()?,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewPrefecture> for NewPrefecture<'a> {
    fn from(prefecture: &'a DomainNewPrefecture) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: prefecture.id.to_string(),
            code: prefecture.code.as_str(),
            name: prefecture.name.as_str(),
            kana_name: prefecture.kana_name.as_str(),
            kana_en: prefecture.kana_en.as_str(),
            status: prefecture.status.as_str(),
            region_id: prefecture.region_id.map(String::from),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::region::AreaStatus;

    #[test]
    fn prefecture_without_region_converts() {
        let now = Utc::now().naive_utc();
        let db = Prefecture {
            id: uuid::Uuid::new_v4().to_string(),
            code: "13".to_string(),
            name: "東京都".to_string(),
            kana_name: "トウキョウト".to_string(),
            kana_en: "tokyo".to_string(),
            status: "suspended".to_string(),
            region_id: None,
            created_at: now,
            updated_at: now,
        };
        let domain = DomainPrefecture::try_from(db).unwrap();
        assert_eq!(domain.code.as_str(), "13");
        assert_eq!(domain.status, AreaStatus::Suspended);
        assert!(domain.region_id.is_none());
    }
}
