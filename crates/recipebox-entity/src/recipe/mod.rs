//! Recipe domain entities.

pub mod model;
pub mod unit;

pub use model::{
    IngredientLine, RECIPE_NAME_MAX, RECIPE_NOTE_MAX, Recipe, RecipeDraft, RecipeView,
    ResolvedIngredientLine,
};
pub use unit::Unit;
