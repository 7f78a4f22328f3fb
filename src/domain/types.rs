//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., UUID identifiers,
//! normalized/validated email, bounded text lengths) so that once a value
//! reaches the domain layer it can be treated as trusted.
use std::{ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string exceeded the allowed number of characters.
    #[error("value must be at most {max} characters")]
    TooLong { max: usize },
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Provided price was zero or negative.
    #[error("price must be greater than zero")]
    NonPositivePrice,
    /// Provided uuid failed format validation.
    #[error("invalid uuid value")]
    InvalidUuid,
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Macro to generate lightweight newtypes for UUID identifiers.
macro_rules! uuid_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Parses a hyphenated UUID string.
            pub fn parse(value: &str) -> Result<Self, TypeConstraintError> {
                Uuid::parse_str(value.trim())
                    .map(Self)
                    .map_err(|_| TypeConstraintError::InvalidUuid)
            }

            /// Returns the raw UUID backing this identifier.
            pub const fn get(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0.to_string()
            }
        }
    };
}

uuid_newtype!(UserId, "Unique identifier for a marketplace user.");
uuid_newtype!(ItemId, "Unique identifier for a listed item.");
uuid_newtype!(RegionId, "Unique identifier for a region.");
uuid_newtype!(PrefectureId, "Unique identifier for a prefecture.");
uuid_newtype!(StoreId, "Unique identifier for a store.");

/// Lower-cased and validated email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Email {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

macro_rules! bounded_string_newtype {
    ($name:ident, $max:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Maximum number of characters accepted.
            pub const MAX_CHARS: usize = $max;

            /// Constructs a trimmed, non-empty value within the length bound.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                if inner.as_str().chars().count() > Self::MAX_CHARS {
                    return Err(TypeConstraintError::TooLong {
                        max: Self::MAX_CHARS,
                    });
                }
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

bounded_string_newtype!(UserName, 40, "Display name of a marketplace user.");
bounded_string_newtype!(ItemName, 40, "Listed item name.");
bounded_string_newtype!(Description, 100, "Free-form item description.");
bounded_string_newtype!(StoreName, 40, "Store display name.");
bounded_string_newtype!(KanaName, 40, "Phonetic (kana) spelling of a name.");
bounded_string_newtype!(AreaName, 40, "Name of a prefecture or region.");
bounded_string_newtype!(
    AreaCode,
    2,
    "Short code identifying a prefecture or region (e.g. `13`)."
);
bounded_string_newtype!(ZipCode, 8, "Postal code of a store.");
bounded_string_newtype!(Address, 100, "Street address of a store.");
bounded_string_newtype!(PhoneNumber, 13, "Store contact phone number.");
bounded_string_newtype!(BusinessHours, 100, "Opening hours, e.g. `10:00〜20:00`.");

/// Item price in whole yen.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i32);

impl Price {
    /// Creates a new price ensuring it is at least one.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value >= 1 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositivePrice)
        }
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Price {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let email = Email::new("  Seller@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "seller@example.com");
        assert_eq!(Email::new("not-an-email"), Err(TypeConstraintError::InvalidEmail));
    }

    #[test]
    fn bounded_strings_enforce_length_in_characters() {
        assert_eq!(AreaCode::new(" 13 ").unwrap().as_str(), "13");
        assert_eq!(
            AreaCode::new("134"),
            Err(TypeConstraintError::TooLong { max: 2 })
        );
        // Multi-byte characters count once each.
        assert!(StoreName::new("東".repeat(40)).is_ok());
        assert!(StoreName::new("東".repeat(41)).is_err());
        assert_eq!(StoreName::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn price_rejects_non_positive_values() {
        assert_eq!(Price::new(1).unwrap().get(), 1);
        assert_eq!(Price::new(0), Err(TypeConstraintError::NonPositivePrice));
        assert_eq!(Price::new(-5), Err(TypeConstraintError::NonPositivePrice));
    }

    #[test]
    fn uuid_ids_round_trip_through_strings() {
        let id = StoreId::new();
        let parsed: StoreId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert_eq!(StoreId::parse("nope"), Err(TypeConstraintError::InvalidUuid));
    }
}
