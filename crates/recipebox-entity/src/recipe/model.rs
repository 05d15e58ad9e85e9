//! Recipe entity model.

use chrono::{DateTime, Utc};
use recipebox_core::AppError;
use recipebox_core::result::AppResult;
use recipebox_core::types::{IngredientId, RecipeId, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::unit::Unit;

/// Maximum recipe name length, in characters.
pub const RECIPE_NAME_MAX: usize = 30;
/// Maximum recipe note length, in characters.
pub const RECIPE_NOTE_MAX: usize = 200;

/// One line of a recipe: a reference to an ingredient plus an amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Referenced ingredient. Never a copy of the ingredient itself.
    pub id: IngredientId,
    pub quantity: f64,
    pub unit: Unit,
}

/// A stored recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Stored as a JSON array column.
    #[sqlx(json)]
    pub ingredients: Vec<IngredientLine>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Check if `user_id` owns this recipe.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.created_by == user_id
    }
}

/// Owner-supplied recipe content, used for both create and edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    pub note: Option<String>,
    pub ingredients: Vec<IngredientLine>,
}

impl RecipeDraft {
    /// Trim text fields and enforce the recipe form rules.
    ///
    /// An empty or whitespace-only note becomes `None`.
    pub fn normalized(self) -> AppResult<Self> {
        let name = self.name.trim().to_string();
        let name_len = name.chars().count();
        if name_len == 0 || name_len > RECIPE_NAME_MAX {
            return Err(AppError::validation(format!(
                "Recipe name must be between 1 and {RECIPE_NAME_MAX} characters"
            )));
        }

        let note = self
            .note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        if let Some(note) = &note {
            if note.chars().count() > RECIPE_NOTE_MAX {
                return Err(AppError::validation(format!(
                    "Recipe note must be at most {RECIPE_NOTE_MAX} characters"
                )));
            }
        }

        if self.ingredients.is_empty() {
            return Err(AppError::validation(
                "A recipe needs at least one ingredient",
            ));
        }
        for line in &self.ingredients {
            if !line.quantity.is_finite() || line.quantity < 0.0 {
                return Err(AppError::validation(format!(
                    "Quantity for ingredient {} must be a non-negative number",
                    line.id
                )));
            }
        }
        if !self.ingredients.iter().any(|line| line.quantity > 0.0) {
            return Err(AppError::validation(
                "At least one ingredient must have a quantity greater than zero",
            ));
        }

        Ok(Self {
            name,
            note,
            ingredients: self.ingredients,
        })
    }
}

/// An ingredient line joined with the ingredient's display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedIngredientLine {
    pub id: IngredientId,
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
}

/// A recipe as served to readers, with ingredient names resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView {
    pub id: RecipeId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub ingredients: Vec<ResolvedIngredientLine>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
