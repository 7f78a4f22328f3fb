use actix_web::{HttpResponse, Responder, ResponseError, post, web};

use crate::dto::auth::{TokenResponse, UserResponse};
use crate::forms::auth::{SignInForm, SignUpForm};
use crate::models::auth::JwtSettings;
use crate::repository::DieselRepository;
use crate::services::auth as auth_service;

#[post("/auth/signup")]
pub async fn sign_up(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<SignUpForm>,
) -> impl Responder {
    match auth_service::sign_up(repo.get_ref(), form) {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(err) => err.error_response(),
    }
}

#[post("/auth/signin")]
pub async fn sign_in(
    repo: web::Data<DieselRepository>,
    settings: web::Data<JwtSettings>,
    web::Json(form): web::Json<SignInForm>,
) -> impl Responder {
    match auth_service::sign_in(repo.get_ref(), form, settings.get_ref()) {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { token }),
        Err(err) => {
            log::info!("Sign-in rejected: {err}");
            err.error_response()
        }
    }
}
