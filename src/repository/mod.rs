//! Persistence traits and their Diesel implementation.
//!
//! Services depend on the `*Reader`/`*Writer` traits only; [`DieselRepository`]
//! implements all of them over a pooled SQLite connection and
//! [`mock::MockRepository`] stands in for it in unit tests.

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::item::{Item, ItemStatus, NewItem};
use crate::domain::prefecture::{
    NewPrefecture, Prefecture, PrefectureWithStoreCount, StoreCountScope,
};
use crate::domain::region::{NewRegion, Region};
use crate::domain::store::{NewStore, Store, StoreWithPrefecture};
use crate::domain::types::{AreaCode, Email, ItemId, StoreId, UserId};
use crate::domain::user::{NewUser, User, UserCredentials};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod item;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod prefecture;
pub mod region;
pub mod store;
pub mod store_query;
pub mod user;

pub use store_query::{
    PrefectureRelationFilter, SortDirection, StoreFilter, StoreListQuery, StoreOrder,
    StorePredicate, StoreSortField,
};

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait UserReader {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
    /// Looks up a user for sign-in, including the stored password hash.
    fn get_credentials_by_email(&self, email: &Email) -> RepositoryResult<Option<UserCredentials>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}

pub trait ItemReader {
    fn list_items(&self) -> RepositoryResult<Vec<Item>>;
    fn get_item_by_id(&self, id: ItemId) -> RepositoryResult<Option<Item>>;
}

pub trait ItemWriter {
    fn create_item(&self, new_item: &NewItem) -> RepositoryResult<Item>;
    /// Returns `None` when no item has the given id.
    fn update_item_status(&self, id: ItemId, status: ItemStatus)
    -> RepositoryResult<Option<Item>>;
    /// Deletes the item only if `owner` listed it. Returns whether a row was removed.
    fn delete_item(&self, id: ItemId, owner: UserId) -> RepositoryResult<bool>;
}

pub trait RegionReader {
    fn list_regions(&self) -> RepositoryResult<Vec<Region>>;
    fn get_region_by_code(&self, code: &AreaCode) -> RepositoryResult<Option<Region>>;
}

pub trait RegionWriter {
    fn create_region(&self, new_region: &NewRegion) -> RepositoryResult<Region>;
}

pub trait PrefectureReader {
    fn list_prefectures(&self) -> RepositoryResult<Vec<Prefecture>>;
    fn get_prefecture_by_code(&self, code: &AreaCode) -> RepositoryResult<Option<Prefecture>>;
    fn list_prefectures_with_store_count(
        &self,
        scope: StoreCountScope,
    ) -> RepositoryResult<Vec<PrefectureWithStoreCount>>;
}

pub trait PrefectureWriter {
    fn create_prefecture(&self, new_prefecture: &NewPrefecture) -> RepositoryResult<Prefecture>;
}

pub trait StoreReader {
    fn get_store_by_id(&self, id: StoreId) -> RepositoryResult<Option<StoreWithPrefecture>>;
    /// Returns the total number of matching stores and the requested page.
    fn list_stores(
        &self,
        query: &StoreListQuery,
    ) -> RepositoryResult<(usize, Vec<StoreWithPrefecture>)>;
}

pub trait StoreWriter {
    fn create_store(&self, new_store: &NewStore) -> RepositoryResult<Store>;
}
