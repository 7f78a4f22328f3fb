use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::types::TypeConstraintError;
use crate::domain::user::{NewUser as DomainNewUser, User as DomainUser, UserCredentials};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
/// Diesel model for [`crate::domain::user::User`].
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
/// Insertable form of [`User`].
pub struct NewUser<'a> {
    pub id: String,
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub status: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<User> for UserCredentials {
    type Error = TypeConstraintError;

    fn try_from(db: User) -> Result<Self, Self::Error> {
        let user = DomainUser {
            id: db.id.as_str().try_into()?,
            name: db.name.try_into()?,
            email: db.email.try_into()?,
            status: db.status.as_str().try_into()?,
            created_at: db.created_at,
            updated_at: db.updated_at,
        };
        Ok(Self {
            user,
            password_hash: db.password,
        })
    }
}

impl TryFrom<User> for DomainUser {
    type Error = TypeConstraintError;

    fn try_from(db: User) -> Result<Self, Self::Error> {
        UserCredentials::try_from(db).map(|credentials| credentials.user)
    }
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(user: &'a DomainNewUser) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: user.id.to_string(),
            name: user.name.as_str(),
            email: user.email.as_str(),
            password: user.password_hash.as_str(),
            status: user.status.as_str(),
            created_at: now,
            updated_at: now,
        }
    }
}
