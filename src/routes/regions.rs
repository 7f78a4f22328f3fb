use actix_web::{HttpResponse, Responder, ResponseError, get, post, web};

use crate::dto::regions::RegionResponse;
use crate::forms::regions::CreateRegionForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::regions as regions_service;

#[get("/regions")]
pub async fn list_regions(repo: web::Data<DieselRepository>) -> impl Responder {
    match regions_service::list_regions(repo.get_ref()) {
        Ok(regions) => HttpResponse::Ok().json(
            regions
                .into_iter()
                .map(RegionResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => err.error_response(),
    }
}

#[get("/regions/code/{code}")]
pub async fn show_region(
    code: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match regions_service::get_region_by_code(repo.get_ref(), &code) {
        Ok(region) => HttpResponse::Ok().json(RegionResponse::from(region)),
        Err(err) => err.error_response(),
    }
}

#[post("/regions")]
pub async fn create_region(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateRegionForm>,
) -> impl Responder {
    match regions_service::create_region(repo.get_ref(), &user, form) {
        Ok(region) => HttpResponse::Created().json(RegionResponse::from(region)),
        Err(err) => err.error_response(),
    }
}
