use serde::Deserialize;
use validator::Validate;

use crate::domain::item::NewItem;
use crate::domain::types::{Description, ItemName, Price, UserId};
use crate::forms::{FormError, field_error, non_blank};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateItemForm {
    #[validate(length(min = 1, max = 40))]
    pub name: String,
    #[validate(range(min = 1))]
    pub price: i32,
    #[validate(length(max = 100))]
    pub description: Option<String>,
}

pub struct CreateItemPayload {
    pub name: ItemName,
    pub price: Price,
    pub description: Option<Description>,
}

impl TryFrom<CreateItemForm> for CreateItemPayload {
    type Error = FormError;

    fn try_from(form: CreateItemForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            name: ItemName::new(form.name).map_err(field_error("name"))?,
            price: Price::new(form.price).map_err(field_error("price"))?,
            description: non_blank(form.description)
                .map(Description::new)
                .transpose()
                .map_err(field_error("description"))?,
        })
    }
}

impl CreateItemPayload {
    pub fn into_domain(self, owner: UserId) -> NewItem {
        NewItem::new(self.name, self.price, self.description, owner)
    }
}
