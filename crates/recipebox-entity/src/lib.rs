//! # recipebox-entity
//!
//! Domain entity models for RecipeBox. Every struct in this crate
//! represents a stored document/row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`; stored entities
//! additionally derive `sqlx::FromRow`. JSON field names are camelCase to
//! match the public HTTP shapes.

pub mod ingredient;
pub mod invitation;
pub mod invite_link;
pub mod recipe;
pub mod user;
