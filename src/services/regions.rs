//! Region use cases.

use crate::domain::region::Region;
use crate::domain::types::AreaCode;
use crate::forms::regions::{CreateRegionForm, CreateRegionPayload};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{RegionReader, RegionWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn list_regions<R>(repo: &R) -> ServiceResult<Vec<Region>>
where
    R: RegionReader + ?Sized,
{
    Ok(repo.list_regions()?)
}

pub fn get_region_by_code<R>(repo: &R, code: &str) -> ServiceResult<Region>
where
    R: RegionReader + ?Sized,
{
    let not_found = || ServiceError::NotFound(format!("Region with code {code} does not exist."));
    let code = AreaCode::new(code).map_err(|_| not_found())?;
    repo.get_region_by_code(&code)?.ok_or_else(not_found)
}

pub fn create_region<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: CreateRegionForm,
) -> ServiceResult<Region>
where
    R: RegionWriter + ?Sized,
{
    let payload = CreateRegionPayload::try_from(form)?;
    let new_region = payload.into_domain(user.id);
    Ok(repo.create_region(&new_region)?)
}
