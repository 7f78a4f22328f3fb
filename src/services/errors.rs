//! Service-level error type shared by all use cases.

use thiserror::Error;
use validator::ValidationErrors;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Repository failure without a more specific meaning, carried unchanged.
    #[error(transparent)]
    Repository(RepositoryError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict { fields } => {
                let field = if fields.is_empty() {
                    "unknown field".to_string()
                } else {
                    fields.join(", ")
                };
                ServiceError::Conflict(format!("The specified {field} already exists."))
            }
            other => ServiceError::Repository(other),
        }
    }
}

/// Flattens nested validator output into `field: message` lines, sorted by
/// field name so responses are stable.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: {}", error.code),
            })
        })
        .collect();
    messages.sort();
    messages
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Validation(validation_messages(&errors))
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Validation(errors) => errors.into(),
            constraint @ FormError::Constraint { .. } => {
                ServiceError::Validation(vec![constraint.to_string()])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_names_the_fields() {
        let err = ServiceError::from(RepositoryError::Conflict {
            fields: vec!["code".to_string()],
        });
        assert_eq!(err.to_string(), "The specified code already exists.");

        let err = ServiceError::from(RepositoryError::Conflict { fields: vec![] });
        assert_eq!(err.to_string(), "The specified unknown field already exists.");
    }

    #[test]
    fn other_repository_errors_pass_through() {
        let err = ServiceError::from(RepositoryError::NotFound);
        assert!(matches!(
            err,
            ServiceError::Repository(RepositoryError::NotFound)
        ));
    }
}
