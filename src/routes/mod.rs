//! HTTP handlers and the JSON error contract.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use serde::Serialize;

use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

pub mod auth;
pub mod items;
pub mod prefectures;
pub mod regions;
pub mod stores;

/// Registers every handler together with the extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(auth::sign_up)
        .service(auth::sign_in)
        .service(items::list_items)
        .service(items::show_item)
        .service(items::create_item)
        .service(items::mark_item_sold_out)
        .service(items::delete_item)
        .service(regions::list_regions)
        .service(regions::show_region)
        .service(regions::create_region)
        .service(prefectures::list_prefectures)
        .service(prefectures::list_prefectures_with_store_count)
        .service(prefectures::show_prefecture)
        .service(prefectures::create_prefecture)
        .service(stores::list_stores)
        .service(stores::show_store)
        .service(stores::create_store);
}

/// Error body shared by every non-2xx response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: serde_json::Value,
    pub error: &'static str,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: serde_json::Value) -> Self {
        Self {
            status_code: status.as_u16(),
            message,
            error: status.canonical_reason().unwrap_or("Error"),
        }
    }
}

fn error_response(status: StatusCode, message: serde_json::Value) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody::new(status, message))
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) | ServiceError::Repository(RepositoryError::NotFound) => {
                StatusCode::NOT_FOUND
            }
            ServiceError::Conflict(_) | ServiceError::Repository(RepositoryError::Conflict { .. }) => {
                StatusCode::CONFLICT
            }
            ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Repository(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            ServiceError::Validation(messages) => serde_json::json!(messages),
            _ if status.is_server_error() => {
                log::error!("Request failed: {self}");
                serde_json::json!("Internal server error")
            }
            other => serde_json::json!(other.to_string()),
        };
        error_response(status, message)
    }
}

fn bad_request(message: String) -> actix_web::Error {
    let response = error_response(StatusCode::BAD_REQUEST, serde_json::json!(message.clone()));
    actix_web::error::InternalError::from_response(message, response).into()
}

/// Rejects malformed JSON bodies with the standard error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| bad_request(err.to_string()))
}

/// Rejects unparseable query strings with the standard error body.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err: QueryPayloadError, _req: &HttpRequest| bad_request(err.to_string()))
}

/// Rejects path segments that do not parse, such as malformed UUIDs.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err: PathError, _req: &HttpRequest| bad_request(err.to_string()))
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    #[actix_web::test]
    async fn service_errors_map_to_status_and_body() {
        let cases = [
            (ServiceError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (ServiceError::Conflict("dup".into()), StatusCode::CONFLICT),
            (ServiceError::Unauthorized, StatusCode::UNAUTHORIZED),
            (
                ServiceError::Validation(vec!["name: length".into()]),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::Repository(RepositoryError::ConnectionError("down".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.status_code(), expected);
        }

        let response = ServiceError::NotFound("Store missing".into()).error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["message"], "Store missing");
        assert_eq!(json["error"], "Not Found");
    }

    #[actix_web::test]
    async fn internal_errors_hide_details() {
        let response =
            ServiceError::Internal("secret stack trace".into()).error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Internal server error");
    }
}
