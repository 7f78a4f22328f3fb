use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::item::{Item, ItemStatus};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
    pub price: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ItemStatus,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.into_inner(),
            price: item.price.get(),
            description: item.description.map(|d| d.into_inner()),
            status: item.status,
            user_id: item.user_id.to_string(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
