//! Repository implementation for stores, including the filtered listing.

use std::collections::{HashMap, HashSet};
use std::thread;

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::prefecture::Prefecture;
use crate::domain::store::{NewStore, Store, StoreWithPrefecture};
use crate::domain::types::StoreId;
use crate::models::prefecture::Prefecture as DbPrefecture;
use crate::models::store::{NewStore as DbNewStore, Store as DbStore};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::store_query::like_pattern;
use crate::repository::{
    DieselRepository, SortDirection, StoreListQuery, StoreReader, StoreSortField, StoreWriter,
};

impl DieselRepository {
    /// Loads the prefectures referenced by `db_stores` with a single `IN` query
    /// and pairs each store with its prefecture.
    fn attach_prefectures(
        &self,
        db_stores: Vec<DbStore>,
    ) -> RepositoryResult<Vec<StoreWithPrefecture>> {
        use crate::schema::prefectures;

        let prefecture_ids: Vec<String> = db_stores
            .iter()
            .filter_map(|store| store.prefecture_id.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let mut prefecture_map: HashMap<String, Prefecture> = HashMap::new();
        if !prefecture_ids.is_empty() {
            let mut conn = self.conn()?;
            let db_prefectures = prefectures::table
                .filter(prefectures::id.eq_any(prefecture_ids))
                .load::<DbPrefecture>(&mut conn)?;
            for db_prefecture in db_prefectures {
                let id = db_prefecture.id.clone();
                prefecture_map.insert(id, Prefecture::try_from(db_prefecture)?);
            }
        }

        db_stores
            .into_iter()
            .map(|db_store| -> RepositoryResult<StoreWithPrefecture> {
                let prefecture = db_store
                    .prefecture_id
                    .as_ref()
                    .and_then(|id| prefecture_map.get(id).cloned());
                let store = Store::try_from(db_store)?;
                Ok(StoreWithPrefecture { store, prefecture })
            })
            .collect()
    }
}

impl StoreReader for DieselRepository {
    fn get_store_by_id(&self, id: StoreId) -> RepositoryResult<Option<StoreWithPrefecture>> {
        use crate::schema::stores;

        let db_store = {
            let mut conn = self.conn()?;
            stores::table
                .find(id.to_string())
                .first::<DbStore>(&mut conn)
                .optional()?
        };

        match db_store {
            Some(db_store) => Ok(self.attach_prefectures(vec![db_store])?.pop()),
            None => Ok(None),
        }
    }

    fn list_stores(
        &self,
        query: &StoreListQuery,
    ) -> RepositoryResult<(usize, Vec<StoreWithPrefecture>)> {
        use crate::schema::{prefectures, regions, stores};

        let predicate = &query.predicate;

        let query_builder = || {
            let mut items = stores::table
                .left_join(prefectures::table.left_join(regions::table))
                .into_boxed::<Sqlite>();

            if let Some(name) = &predicate.name_contains {
                items = items.filter(stores::name.like(like_pattern(name)).escape('\\'));
            }
            if let Some(status) = predicate.status {
                items = items.filter(stores::status.eq(status.as_str()));
            }
            if let Some(relation) = &predicate.prefecture {
                if let Some(code) = &relation.code {
                    items = items.filter(prefectures::code.eq(code.clone()));
                }
                if let Some(region_code) = &relation.region_code {
                    items = items.filter(regions::code.eq(region_code.clone()));
                }
            }
            items
        };

        let load_total = || -> RepositoryResult<usize> {
            let mut conn = self.conn()?;
            let total = query_builder().count().get_result::<i64>(&mut conn)?;
            Ok(total as usize)
        };

        let load_page = || -> RepositoryResult<Vec<DbStore>> {
            let mut conn = self.conn()?;
            let mut items = query_builder().select(stores::all_columns);

            items = match (query.order.field, query.order.direction) {
                (StoreSortField::Name, SortDirection::Asc) => items.order_by(stores::name.asc()),
                (StoreSortField::Name, SortDirection::Desc) => items.order_by(stores::name.desc()),
                (StoreSortField::KanaName, SortDirection::Asc) => {
                    items.order_by(stores::kana_name.asc())
                }
                (StoreSortField::KanaName, SortDirection::Desc) => {
                    items.order_by(stores::kana_name.desc())
                }
                (StoreSortField::CreatedAt, SortDirection::Asc) => {
                    items.order_by(stores::created_at.asc())
                }
                (StoreSortField::CreatedAt, SortDirection::Desc) => {
                    items.order_by(stores::created_at.desc())
                }
                (StoreSortField::UpdatedAt, SortDirection::Asc) => {
                    items.order_by(stores::updated_at.asc())
                }
                (StoreSortField::UpdatedAt, SortDirection::Desc) => {
                    items.order_by(stores::updated_at.desc())
                }
            };

            let window = query.window;
            let db_stores = items
                .then_order_by(stores::id.asc())
                .offset(window.offset() as i64)
                .limit(window.size() as i64)
                .load::<DbStore>(&mut conn)?;
            Ok(db_stores)
        };

        // Count and page are independent reads, each on its own pooled connection.
        let (total, db_stores) = thread::scope(|scope| {
            let total = scope.spawn(load_total);
            let page = scope.spawn(load_page);
            let total = total
                .join()
                .map_err(|_| RepositoryError::Unexpected("store count worker panicked".into()))??;
            let page = page
                .join()
                .map_err(|_| RepositoryError::Unexpected("store page worker panicked".into()))??;
            Ok::<_, RepositoryError>((total, page))
        })?;

        let stores = self.attach_prefectures(db_stores)?;
        Ok((total, stores))
    }
}

impl StoreWriter for DieselRepository {
    fn create_store(&self, new_store: &NewStore) -> RepositoryResult<Store> {
        use crate::schema::stores;

        let mut conn = self.conn()?;
        let db_new_store: DbNewStore = new_store.into();

        let db_store = diesel::insert_into(stores::table)
            .values(&db_new_store)
            .get_result::<DbStore>(&mut conn)?;

        Store::try_from(db_store).map_err(RepositoryError::from)
    }
}
