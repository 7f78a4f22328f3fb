use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Description, ItemId, ItemName, Price, TypeConstraintError, UserId};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    OnSale,
    SoldOut,
}

impl ItemStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            ItemStatus::OnSale => "ON_SALE",
            ItemStatus::SoldOut => "SOLD_OUT",
        }
    }
}

impl Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ItemStatus {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "ON_SALE" => Ok(ItemStatus::OnSale),
            "SOLD_OUT" => Ok(ItemStatus::SoldOut),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown item status `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    pub price: Price,
    pub description: Option<Description>,
    pub status: ItemStatus,
    pub user_id: UserId,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Item about to be listed. New items always start [`ItemStatus::OnSale`].
#[derive(Clone, Debug)]
pub struct NewItem {
    pub id: ItemId,
    pub name: ItemName,
    pub price: Price,
    pub description: Option<Description>,
    pub status: ItemStatus,
    pub user_id: UserId,
}

impl NewItem {
    #[must_use]
    pub fn new(
        name: ItemName,
        price: Price,
        description: Option<Description>,
        user_id: UserId,
    ) -> Self {
        Self {
            id: ItemId::new(),
            name,
            price,
            description,
            status: ItemStatus::OnSale,
            user_id,
        }
    }
}
