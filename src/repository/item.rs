//! Repository implementation for listed items.

use chrono::Utc;
use diesel::prelude::*;

use crate::domain::item::{Item, ItemStatus, NewItem};
use crate::domain::types::{ItemId, UserId};
use crate::models::item::{Item as DbItem, NewItem as DbNewItem};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ItemReader, ItemWriter};

impl ItemReader for DieselRepository {
    fn list_items(&self) -> RepositoryResult<Vec<Item>> {
        use crate::schema::items;

        let mut conn = self.conn()?;
        let db_items = items::table
            .order((items::created_at.asc(), items::id.asc()))
            .load::<DbItem>(&mut conn)?;

        db_items
            .into_iter()
            .map(|db_item| Item::try_from(db_item).map_err(RepositoryError::from))
            .collect()
    }

    fn get_item_by_id(&self, id: ItemId) -> RepositoryResult<Option<Item>> {
        use crate::schema::items;

        let mut conn = self.conn()?;
        let db_item = items::table
            .find(id.to_string())
            .first::<DbItem>(&mut conn)
            .optional()?;

        db_item
            .map(|db_item| Item::try_from(db_item).map_err(RepositoryError::from))
            .transpose()
    }
}

impl ItemWriter for DieselRepository {
    fn create_item(&self, new_item: &NewItem) -> RepositoryResult<Item> {
        use crate::schema::items;

        let mut conn = self.conn()?;
        let db_new_item: DbNewItem = new_item.into();

        let db_item = diesel::insert_into(items::table)
            .values(&db_new_item)
            .get_result::<DbItem>(&mut conn)?;

        Item::try_from(db_item).map_err(RepositoryError::from)
    }

    fn update_item_status(
        &self,
        id: ItemId,
        status: ItemStatus,
    ) -> RepositoryResult<Option<Item>> {
        use crate::schema::items;

        let mut conn = self.conn()?;
        let db_item = diesel::update(items::table.find(id.to_string()))
            .set((
                items::status.eq(status.as_str()),
                items::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbItem>(&mut conn)
            .optional()?;

        db_item
            .map(|db_item| Item::try_from(db_item).map_err(RepositoryError::from))
            .transpose()
    }

    fn delete_item(&self, id: ItemId, owner: UserId) -> RepositoryResult<bool> {
        use crate::schema::items;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(
            items::table
                .filter(items::id.eq(id.to_string()))
                .filter(items::user_id.eq(owner.to_string())),
        )
        .execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
