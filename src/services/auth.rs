//! Account registration and token issuance.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use validator::Validate;

use crate::domain::types::Email;
use crate::domain::user::{NewUser, User};
use crate::forms::auth::{SignInForm, SignUpForm, SignUpPayload};
use crate::models::auth::{Claims, JwtSettings, encode_token};
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Hashes a plaintext password into an Argon2id PHC string.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ServiceError::Internal(format!("Failed to hash password: {e}")))
}

/// Checks `password` against a stored PHC hash. Malformed hashes never match.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            log::warn!("Stored password hash is malformed: {e}");
            false
        }
    }
}

/// Registers a new user with a hashed password.
pub fn sign_up<R>(repo: &R, form: SignUpForm) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    let payload = SignUpPayload::try_from(form)?;
    let password_hash = hash_password(&payload.password)?;

    let new_user = NewUser::new(payload.name, payload.email, password_hash, payload.status);
    let user = repo.create_user(&new_user)?;

    log::info!("Registered user {}", user.id);
    Ok(user)
}

/// Verifies credentials and returns a signed bearer token.
pub fn sign_in<R>(repo: &R, form: SignInForm, settings: &JwtSettings) -> ServiceResult<String>
where
    R: UserReader + ?Sized,
{
    form.validate().map_err(|_| ServiceError::Unauthorized)?;
    let email = Email::new(form.email).map_err(|_| ServiceError::Unauthorized)?;

    let credentials = repo
        .get_credentials_by_email(&email)?
        .ok_or(ServiceError::Unauthorized)?;

    if !verify_password(&form.password, &credentials.password_hash) {
        return Err(ServiceError::Unauthorized);
    }

    let claims = Claims::for_user(&credentials.user, settings.expiry_minutes);
    encode_token(&claims, settings)
        .map_err(|e| ServiceError::Internal(format!("Failed to sign token: {e}")))
}
