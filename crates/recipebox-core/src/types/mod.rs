//! Core type definitions used across the RecipeBox workspace.

pub mod id;

pub use id::*;
