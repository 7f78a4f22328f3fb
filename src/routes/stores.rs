use actix_web::{HttpResponse, Responder, ResponseError, get, post, web};

use crate::domain::types::StoreId;
use crate::dto::stores::{StoreListResponse, StoreResponse};
use crate::forms::stores::{CreateStoreForm, StoreListParams};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::stores as stores_service;

#[get("/stores")]
pub async fn list_stores(
    params: web::Query<StoreListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match stores_service::list_stores(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(StoreListResponse::from(page)),
        Err(err) => err.error_response(),
    }
}

#[get("/stores/{id}")]
pub async fn show_store(
    id: web::Path<StoreId>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match stores_service::get_store(repo.get_ref(), id.into_inner()) {
        Ok(store) => HttpResponse::Ok().json(StoreResponse::from(store)),
        Err(err) => err.error_response(),
    }
}

#[post("/stores")]
pub async fn create_store(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateStoreForm>,
) -> impl Responder {
    match stores_service::create_store(repo.get_ref(), &user, form) {
        Ok(store) => HttpResponse::Created().json(StoreResponse::from(store)),
        Err(err) => err.error_response(),
    }
}
