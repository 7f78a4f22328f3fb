//! Bearer-token authentication.
//!
//! Tokens are HS256 JWTs carrying [`Claims`]. Handlers that require a caller
//! take an [`AuthenticatedUser`] argument; extraction fails with
//! [`ServiceError::Unauthorized`] when the header is missing or the token does
//! not verify.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;
use crate::domain::user::{User, UserStatus};
use crate::models::config::ServerConfig;
use crate::services::ServiceError;

/// Signing parameters shared by the sign-in service and the extractor.
#[derive(Clone, Debug)]
pub struct JwtSettings {
    pub secret: String,
    pub expiry_minutes: i64,
}

impl From<&ServerConfig> for JwtSettings {
    fn from(config: &ServerConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiry_minutes: config.jwt_expiry_minutes,
        }
    }
}

/// JWT payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub sub: String,
    pub user_name: String,
    pub status: UserStatus,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn for_user(user: &User, expiry_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user.id.to_string(),
            user_name: user.name.to_string(),
            status: user.status,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(expiry_minutes)).timestamp(),
        }
    }
}

pub fn encode_token(
    claims: &Claims,
    settings: &JwtSettings,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(settings.secret.as_bytes()),
    )
}

/// Verifies the signature and expiry of `token`.
pub fn decode_token(
    token: &str,
    settings: &JwtSettings,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// Caller identity resolved from a verified bearer token.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub name: String,
    pub status: UserStatus,
}

impl TryFrom<Claims> for AuthenticatedUser {
    type Error = ServiceError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let id = UserId::parse(&claims.sub).map_err(|_| ServiceError::Unauthorized)?;
        Ok(Self {
            id,
            name: claims.user_name,
            status: claims.status,
        })
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ServiceError> {
    let settings = req
        .app_data::<web::Data<JwtSettings>>()
        .ok_or_else(|| ServiceError::Internal("JWT settings are not configured".to_string()))?;

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(ServiceError::Unauthorized)?;

    let claims = decode_token(token, settings).map_err(|e| {
        log::debug!("Rejected bearer token: {e}");
        ServiceError::Unauthorized
    })?;

    AuthenticatedUser::try_from(claims)
}

impl FromRequest for AuthenticatedUser {
    type Error = ServiceError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}
