//! Domain aggregates exposed by the marketplace service layer.

pub mod item;
pub mod labels;
pub mod prefecture;
pub mod region;
pub mod store;
pub mod types;
pub mod user;
