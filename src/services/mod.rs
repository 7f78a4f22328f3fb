//! Use cases invoked by the HTTP handlers.
//!
//! Each function is generic over the repository traits it needs so tests can
//! pass [`crate::repository::mock::MockRepository`].

pub mod auth;
pub mod errors;
pub mod items;
pub mod prefectures;
pub mod regions;
pub mod stores;

pub use errors::{ServiceError, ServiceResult};
