use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::item::{Item as DomainItem, NewItem as DomainNewItem};
use crate::domain::types::{Description, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::items)]
/// Diesel model for [`crate::domain::item::Item`].
pub struct Item {
    pub id: String,
    pub name: String,
    pub price: i32,
    pub description: Option<String>,
    pub status: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::items)]
/// Insertable form of [`Item`].
pub struct NewItem<'a> {
    pub id: String,
    pub name: &'a str,
    pub price: i32,
    pub description: Option<&'a str>,
    pub status: &'a str,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Item> for DomainItem {
    type Error = TypeConstraintError;

    fn try_from(db: Item) -> Result<Self, Self::Error> {
        Ok(Self {
            id: db.id.as_str().try_into()?,
            name: db.name.try_into()?,
            price: db.price.try_into()?,
            description: db.description.map(Description::new).transpose()?,
            status: db.status.as_str().try_into()?,
            user_id: db.user_id.as_str().try_into()?,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewItem> for NewItem<'a> {
    fn from(item: &'a DomainNewItem) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: item.id.to_string(),
            name: item.name.as_str(),
            price: item.price.get(),
            description: item.description.as_ref().map(|d| d.as_str()),
            status: item.status.as_str(),
            user_id: item.user_id.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
