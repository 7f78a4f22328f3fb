//! Repository implementation for prefectures.

use std::collections::HashMap;

use diesel::dsl::count_star;
use diesel::prelude::*;

use crate::domain::prefecture::{
    NewPrefecture, Prefecture, PrefectureWithStoreCount, StoreCountScope,
};
use crate::domain::store::StoreStatus;
use crate::domain::types::AreaCode;
use crate::models::prefecture::{NewPrefecture as DbNewPrefecture, Prefecture as DbPrefecture};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, PrefectureReader, PrefectureWriter};

impl PrefectureReader for DieselRepository {
    fn list_prefectures(&self) -> RepositoryResult<Vec<Prefecture>> {
        use crate::schema::prefectures;

        let mut conn = self.conn()?;
        let db_prefectures = prefectures::table
            .order(prefectures::code.asc())
            .load::<DbPrefecture>(&mut conn)?;

        db_prefectures
            .into_iter()
            .map(|db_prefecture| Prefecture::try_from(db_prefecture).map_err(RepositoryError::from))
            .collect()
    }

    fn get_prefecture_by_code(&self, code: &AreaCode) -> RepositoryResult<Option<Prefecture>> {
        use crate::schema::prefectures;

        let mut conn = self.conn()?;
        let db_prefecture = prefectures::table
            .filter(prefectures::code.eq(code.as_str()))
            .first::<DbPrefecture>(&mut conn)
            .optional()?;

        db_prefecture
            .map(|db_prefecture| Prefecture::try_from(db_prefecture).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_prefectures_with_store_count(
        &self,
        scope: StoreCountScope,
    ) -> RepositoryResult<Vec<PrefectureWithStoreCount>> {
        use crate::schema::{prefectures, stores};

        let mut conn = self.conn()?;
        let db_prefectures = prefectures::table
            .order(prefectures::code.asc())
            .load::<DbPrefecture>(&mut conn)?;

        let counts: Vec<(Option<String>, i64)> = match scope {
            StoreCountScope::All => stores::table
                .group_by(stores::prefecture_id)
                .select((stores::prefecture_id, count_star()))
                .load(&mut conn)?,
            StoreCountScope::Published => stores::table
                .filter(stores::status.eq(StoreStatus::Published.as_str()))
                .group_by(stores::prefecture_id)
                .select((stores::prefecture_id, count_star()))
                .load(&mut conn)?,
        };

        let count_map: HashMap<String, usize> = counts
            .into_iter()
            .filter_map(|(prefecture_id, count)| prefecture_id.map(|id| (id, count as usize)))
            .collect();

        db_prefectures
            .into_iter()
            .map(|db_prefecture| -> RepositoryResult<PrefectureWithStoreCount> {
                let store_count = count_map.get(&db_prefecture.id).copied().unwrap_or(0);
                let prefecture = Prefecture::try_from(db_prefecture)?;
                Ok(PrefectureWithStoreCount {
                    prefecture,
                    store_count,
                })
            })
            .collect()
    }
}

impl PrefectureWriter for DieselRepository {
    fn create_prefecture(&self, new_prefecture: &NewPrefecture) -> RepositoryResult<Prefecture> {
        use crate::schema::prefectures;

        let mut conn = self.conn()?;
        let db_new_prefecture: DbNewPrefecture = new_prefecture.into();

        let db_prefecture = diesel::insert_into(prefectures::table)
            .values(&db_new_prefecture)
            .get_result::<DbPrefecture>(&mut conn)?;

        Prefecture::try_from(db_prefecture).map_err(RepositoryError::from)
    }
}
