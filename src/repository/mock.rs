//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::item::{Item, ItemStatus, NewItem};
use crate::domain::prefecture::{
    NewPrefecture, Prefecture, PrefectureWithStoreCount, StoreCountScope,
};
use crate::domain::region::{NewRegion, Region};
use crate::domain::store::{NewStore, Store, StoreWithPrefecture};
use crate::domain::types::{AreaCode, Email, ItemId, StoreId, UserId};
use crate::domain::user::{NewUser, User, UserCredentials};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ItemReader, ItemWriter, PrefectureReader, PrefectureWriter, RegionReader, RegionWriter,
    StoreListQuery, StoreReader, StoreWriter, UserReader, UserWriter,
};

mock! {
    pub Repository {}

    impl UserReader for Repository {
        fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
        fn get_credentials_by_email(&self, email: &Email) -> RepositoryResult<Option<UserCredentials>>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    }

    impl ItemReader for Repository {
        fn list_items(&self) -> RepositoryResult<Vec<Item>>;
        fn get_item_by_id(&self, id: ItemId) -> RepositoryResult<Option<Item>>;
    }

    impl ItemWriter for Repository {
        fn create_item(&self, new_item: &NewItem) -> RepositoryResult<Item>;
        fn update_item_status(&self, id: ItemId, status: ItemStatus) -> RepositoryResult<Option<Item>>;
        fn delete_item(&self, id: ItemId, owner: UserId) -> RepositoryResult<bool>;
    }

    impl RegionReader for Repository {
        fn list_regions(&self) -> RepositoryResult<Vec<Region>>;
        fn get_region_by_code(&self, code: &AreaCode) -> RepositoryResult<Option<Region>>;
    }

    impl RegionWriter for Repository {
        fn create_region(&self, new_region: &NewRegion) -> RepositoryResult<Region>;
    }

    impl PrefectureReader for Repository {
        fn list_prefectures(&self) -> RepositoryResult<Vec<Prefecture>>;
        fn get_prefecture_by_code(&self, code: &AreaCode) -> RepositoryResult<Option<Prefecture>>;
        fn list_prefectures_with_store_count(
            &self,
            scope: StoreCountScope,
        ) -> RepositoryResult<Vec<PrefectureWithStoreCount>>;
    }

    impl PrefectureWriter for Repository {
        fn create_prefecture(&self, new_prefecture: &NewPrefecture) -> RepositoryResult<Prefecture>;
    }

    impl StoreReader for Repository {
        fn get_store_by_id(&self, id: StoreId) -> RepositoryResult<Option<StoreWithPrefecture>>;
        fn list_stores(
            &self,
            query: &StoreListQuery,
        ) -> RepositoryResult<(usize, Vec<StoreWithPrefecture>)>;
    }

    impl StoreWriter for Repository {
        fn create_store(&self, new_store: &NewStore) -> RepositoryResult<Store>;
    }
}
