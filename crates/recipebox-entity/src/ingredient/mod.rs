//! Ingredient domain entities.

pub mod model;

pub use model::{CreateIngredient, INGREDIENT_NAME_MAX, Ingredient};
