//! # recipebox-api
//!
//! HTTP API layer for RecipeBox built on Axum.
//!
//! Provides the REST endpoints for users, ingredients, recipes, invite
//! links and invitations, plus middleware, extractors, and DTOs.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
