//! User domain entities.

pub mod model;

pub use model::{UpsertUser, User, UserProfile};
