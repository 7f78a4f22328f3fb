//! Item listing use cases.

use crate::domain::item::{Item, ItemStatus};
use crate::domain::types::ItemId;
use crate::forms::items::{CreateItemForm, CreateItemPayload};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{ItemReader, ItemWriter};
use crate::services::{ServiceError, ServiceResult};

fn item_not_found(id: ItemId) -> ServiceError {
    ServiceError::NotFound(format!("Item {id} does not exist."))
}

pub fn list_items<R>(repo: &R) -> ServiceResult<Vec<Item>>
where
    R: ItemReader + ?Sized,
{
    Ok(repo.list_items()?)
}

pub fn get_item<R>(repo: &R, id: ItemId) -> ServiceResult<Item>
where
    R: ItemReader + ?Sized,
{
    repo.get_item_by_id(id)?.ok_or_else(|| item_not_found(id))
}

/// Lists a new item owned by the caller.
pub fn create_item<R>(repo: &R, user: &AuthenticatedUser, form: CreateItemForm) -> ServiceResult<Item>
where
    R: ItemWriter + ?Sized,
{
    let payload = CreateItemPayload::try_from(form)?;
    let new_item = payload.into_domain(user.id);
    Ok(repo.create_item(&new_item)?)
}

/// Marks the item as sold.
pub fn mark_sold_out<R>(repo: &R, id: ItemId) -> ServiceResult<Item>
where
    R: ItemWriter + ?Sized,
{
    repo.update_item_status(id, ItemStatus::SoldOut)?
        .ok_or_else(|| item_not_found(id))
}

/// Deletes the item if the caller owns it. Items owned by someone else are
/// reported as missing.
pub fn delete_item<R>(repo: &R, user: &AuthenticatedUser, id: ItemId) -> ServiceResult<()>
where
    R: ItemWriter + ?Sized,
{
    if repo.delete_item(id, user.id)? {
        Ok(())
    } else {
        Err(item_not_found(id))
    }
}
