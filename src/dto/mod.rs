//! JSON response bodies.
//!
//! DTOs are camelCase on the wire and omit absent optional values instead of
//! emitting `null`.

pub mod auth;
pub mod items;
pub mod prefectures;
pub mod regions;
pub mod stores;
