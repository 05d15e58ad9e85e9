//! Ingredient service.

pub mod service;

pub use service::IngredientService;
