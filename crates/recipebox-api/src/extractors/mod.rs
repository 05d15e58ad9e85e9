//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod params;

pub use auth::AuthUser;
pub use json::ValidatedJson;
pub use params::{AppPath, AppQuery, LinkPath};
