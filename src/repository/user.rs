//! Repository implementation for marketplace users.

use diesel::prelude::*;

use crate::domain::types::{Email, UserId};
use crate::domain::user::{NewUser, User, UserCredentials};
use crate::models::user::{NewUser as DbNewUser, User as DbUser};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, UserReader, UserWriter};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let db_user = users::table
            .find(id.to_string())
            .first::<DbUser>(&mut conn)
            .optional()?;

        db_user
            .map(|db_user| User::try_from(db_user).map_err(RepositoryError::from))
            .transpose()
    }

    fn get_credentials_by_email(&self, email: &Email) -> RepositoryResult<Option<UserCredentials>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let db_user = users::table
            .filter(users::email.eq(email.as_str()))
            .first::<DbUser>(&mut conn)
            .optional()?;

        db_user
            .map(|db_user| UserCredentials::try_from(db_user).map_err(RepositoryError::from))
            .transpose()
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let db_new_user: DbNewUser = new_user.into();

        let db_user = diesel::insert_into(users::table)
            .values(&db_new_user)
            .get_result::<DbUser>(&mut conn)?;

        User::try_from(db_user).map_err(RepositoryError::from)
    }
}
