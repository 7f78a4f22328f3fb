use actix_web::{HttpResponse, Responder, ResponseError, get, post, web};

use crate::dto::prefectures::{PrefectureResponse, PrefectureWithStoreCountResponse};
use crate::forms::prefectures::{CreatePrefectureForm, StoreCountParams};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::prefectures as prefectures_service;

#[get("/prefectures")]
pub async fn list_prefectures(repo: web::Data<DieselRepository>) -> impl Responder {
    match prefectures_service::list_prefectures(repo.get_ref()) {
        Ok(prefectures) => HttpResponse::Ok().json(
            prefectures
                .into_iter()
                .map(PrefectureResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => err.error_response(),
    }
}

#[get("/prefectures/with-store-count")]
pub async fn list_prefectures_with_store_count(
    params: web::Query<StoreCountParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match prefectures_service::list_prefectures_with_store_count(repo.get_ref(), params.scope) {
        Ok(prefectures) => HttpResponse::Ok().json(
            prefectures
                .into_iter()
                .map(PrefectureWithStoreCountResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => err.error_response(),
    }
}

#[get("/prefectures/code/{code}")]
pub async fn show_prefecture(
    code: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match prefectures_service::get_prefecture_by_code(repo.get_ref(), &code) {
        Ok(prefecture) => HttpResponse::Ok().json(PrefectureResponse::from(prefecture)),
        Err(err) => err.error_response(),
    }
}

#[post("/prefectures")]
pub async fn create_prefecture(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreatePrefectureForm>,
) -> impl Responder {
    match prefectures_service::create_prefecture(repo.get_ref(), form) {
        Ok(prefecture) => HttpResponse::Created().json(PrefectureResponse::from(prefecture)),
        Err(err) => err.error_response(),
    }
}
