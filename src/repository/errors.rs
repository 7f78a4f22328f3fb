use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    /// A unique constraint rejected the write; `fields` names the columns.
    #[error("Unique constraint violation on {}", .fields.join(", "))]
    Conflict { fields: Vec<String> },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Database error: {0}")]
    Database(#[source] DieselError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

const UNIQUE_MESSAGE_PREFIX: &str = "UNIQUE constraint failed:";

/// Extracts the column names from a unique violation.
///
/// Backends that report the column directly are trusted first; otherwise the
/// SQLite message `UNIQUE constraint failed: table.a, table.b` is parsed.
fn conflicting_fields(info: &dyn DatabaseErrorInformation) -> Vec<String> {
    if let Some(column) = info.column_name() {
        return vec![column.to_string()];
    }

    let message = info.message();
    let Some(columns) = message
        .find(UNIQUE_MESSAGE_PREFIX)
        .map(|at| &message[at + UNIQUE_MESSAGE_PREFIX.len()..])
    else {
        return Vec::new();
    };

    columns
        .split(',')
        .map(str::trim)
        .filter(|column| !column.is_empty())
        .map(|column| {
            column
                .rsplit_once('.')
                .map_or(column, |(_, name)| name)
                .to_string()
        })
        .collect()
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info) => {
                RepositoryError::Conflict {
                    fields: conflicting_fields(info.as_ref()),
                }
            }
            other => RepositoryError::Database(other),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        RepositoryError::ConnectionError(format!("Connection error: {err}"))
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::ConnectionError(format!("Connection error: {err}"))
    }
}
