//! Request bodies and query strings accepted by the HTTP routes.
//!
//! Each form derives [`validator::Validate`] for the declarative checks and
//! converts into a payload of domain value objects with `TryFrom`.

use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::domain::types::TypeConstraintError;

pub mod auth;
pub mod items;
pub mod prefectures;
pub mod regions;
pub mod stores;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{field}: {source}")]
    Constraint {
        field: &'static str,
        #[source]
        source: TypeConstraintError,
    },
}

/// Attaches the offending field name to a value-object error.
pub(crate) fn field_error(field: &'static str) -> impl Fn(TypeConstraintError) -> FormError {
    move |source| FormError::Constraint { field, source }
}

/// Trims an optional string and drops it when nothing is left.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Rejects lists that mention the same value twice.
pub(crate) fn unique_items<T: PartialEq>(values: &[T]) -> Result<(), ValidationError> {
    for (index, value) in values.iter().enumerate() {
        if values[..index].contains(value) {
            return Err(ValidationError::new("unique")
                .with_message("all elements must be unique".into()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_drops_whitespace() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(Some(" 13 ".to_string())), Some("13".to_string()));
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn unique_items_detects_duplicates() {
        assert!(unique_items(&[1, 2, 3]).is_ok());
        assert!(unique_items::<i32>(&[]).is_ok());
        assert!(unique_items(&["a", "b", "a"]).is_err());
    }
}
