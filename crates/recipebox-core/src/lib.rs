//! # recipebox-core
//!
//! Core crate for RecipeBox. Contains configuration schemas, typed
//! identifiers, and the unified error system.
//!
//! This crate has **no** internal dependencies on other RecipeBox crates.

pub mod config;
pub mod error;
#[cfg(feature = "axum")]
pub mod http;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
