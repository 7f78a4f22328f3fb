use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Email, TypeConstraintError, UserId, UserName};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[default]
    Free,
    Premium,
}

impl UserStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            UserStatus::Free => "FREE",
            UserStatus::Premium => "PREMIUM",
        }
    }
}

impl Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UserStatus {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "FREE" => Ok(UserStatus::Free),
            "PREMIUM" => Ok(UserStatus::Premium),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown user status `{other}`"
            ))),
        }
    }
}

/// Registered marketplace user. The password hash never leaves the repository
/// except through [`UserCredentials`].
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: Email,
    pub status: UserStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A user together with the stored password hash, used during sign-in.
#[derive(Clone, Debug, PartialEq)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub id: UserId,
    pub name: UserName,
    pub email: Email,
    pub password_hash: String,
    pub status: UserStatus,
}

impl NewUser {
    #[must_use]
    pub fn new(name: UserName, email: Email, password_hash: String, status: UserStatus) -> Self {
        Self {
            id: UserId::new(),
            name,
            email,
            password_hash,
            status,
        }
    }
}
