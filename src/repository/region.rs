//! Repository implementation for regions.

use diesel::prelude::*;

use crate::domain::region::{NewRegion, Region};
use crate::domain::types::AreaCode;
use crate::models::region::{NewRegion as DbNewRegion, Region as DbRegion};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, RegionReader, RegionWriter};

impl RegionReader for DieselRepository {
    fn list_regions(&self) -> RepositoryResult<Vec<Region>> {
        use crate::schema::regions;

        let mut conn = self.conn()?;
        let db_regions = regions::table
            .order(regions::code.asc())
            .load::<DbRegion>(&mut conn)?;

        db_regions
            .into_iter()
            .map(|db_region| Region::try_from(db_region).map_err(RepositoryError::from))
            .collect()
    }

    fn get_region_by_code(&self, code: &AreaCode) -> RepositoryResult<Option<Region>> {
        use crate::schema::regions;

        let mut conn = self.conn()?;
        let db_region = regions::table
            .filter(regions::code.eq(code.as_str()))
            .first::<DbRegion>(&mut conn)
            .optional()?;

        db_region
            .map(|db_region| Region::try_from(db_region).map_err(RepositoryError::from))
            .transpose()
    }
}

impl RegionWriter for DieselRepository {
    fn create_region(&self, new_region: &NewRegion) -> RepositoryResult<Region> {
        use crate::schema::regions;

        let mut conn = self.conn()?;
        let db_new_region: DbNewRegion = new_region.into();

        let db_region = diesel::insert_into(regions::table)
            .values(&db_new_region)
            .get_result::<DbRegion>(&mut conn)?;

        Region::try_from(db_region).map_err(RepositoryError::from)
    }
}
