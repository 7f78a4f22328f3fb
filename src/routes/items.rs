use actix_web::{HttpResponse, Responder, ResponseError, delete, get, post, put, web};

use crate::domain::types::ItemId;
use crate::dto::items::ItemResponse;
use crate::forms::items::CreateItemForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::items as items_service;

#[get("/items")]
pub async fn list_items(repo: web::Data<DieselRepository>) -> impl Responder {
    match items_service::list_items(repo.get_ref()) {
        Ok(items) => HttpResponse::Ok().json(
            items
                .into_iter()
                .map(ItemResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => err.error_response(),
    }
}

#[get("/items/{id}")]
pub async fn show_item(
    id: web::Path<ItemId>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match items_service::get_item(repo.get_ref(), id.into_inner()) {
        Ok(item) => HttpResponse::Ok().json(ItemResponse::from(item)),
        Err(err) => err.error_response(),
    }
}

#[post("/items")]
pub async fn create_item(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateItemForm>,
) -> impl Responder {
    match items_service::create_item(repo.get_ref(), &user, form) {
        Ok(item) => HttpResponse::Created().json(ItemResponse::from(item)),
        Err(err) => err.error_response(),
    }
}

#[put("/items/{id}")]
pub async fn mark_item_sold_out(
    id: web::Path<ItemId>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match items_service::mark_sold_out(repo.get_ref(), id.into_inner()) {
        Ok(item) => HttpResponse::Ok().json(ItemResponse::from(item)),
        Err(err) => err.error_response(),
    }
}

#[delete("/items/{id}")]
pub async fn delete_item(
    id: web::Path<ItemId>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match items_service::delete_item(repo.get_ref(), &user, id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => err.error_response(),
    }
}
