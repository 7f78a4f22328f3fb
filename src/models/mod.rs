//! Database models shared across the marketplace repository.

#[cfg(feature = "server")]
pub mod auth;
#[cfg(feature = "server")]
pub mod config;
pub mod item;
pub mod prefecture;
pub mod region;
pub mod store;
pub mod user;
