//! Sign-up and sign-in request bodies.

use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{Email, UserName};
use crate::domain::user::UserStatus;
use crate::forms::{FormError, field_error};

#[derive(Debug, Deserialize, Validate)]
pub struct SignUpForm {
    #[validate(length(min = 1, max = 40))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6, max = 64))]
    pub password: String,
    #[serde(default)]
    pub status: UserStatus,
}

/// Validated sign-up data. The password stays plain until the service hashes it.
pub struct SignUpPayload {
    pub name: UserName,
    pub email: Email,
    pub password: String,
    pub status: UserStatus,
}

impl TryFrom<SignUpForm> for SignUpPayload {
    type Error = FormError;

    fn try_from(form: SignUpForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            name: UserName::new(form.name).map_err(field_error("name"))?,
            email: Email::new(form.email).map_err(field_error("email"))?,
            password: form.password,
            status: form.status,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignInForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}
