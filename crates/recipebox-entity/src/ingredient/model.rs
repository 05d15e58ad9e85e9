//! Ingredient entity model.

use chrono::{DateTime, Utc};
use recipebox_core::AppError;
use recipebox_core::result::AppResult;
use recipebox_core::types::{IngredientId, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Maximum ingredient name length, in characters.
pub const INGREDIENT_NAME_MAX: usize = 30;

/// An ingredient owned by its creator and referenced by recipe lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

impl Ingredient {
    /// Check if `user_id` owns this ingredient.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.created_by == user_id
    }
}

/// Data required to create or rename an ingredient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIngredient {
    pub name: String,
}

impl CreateIngredient {
    /// Trim the name and check its length.
    pub fn normalized(self) -> AppResult<Self> {
        let name = self.name.trim().to_string();
        let len = name.chars().count();
        if len == 0 || len > INGREDIENT_NAME_MAX {
            return Err(AppError::validation(format!(
                "Ingredient name must be between 1 and {INGREDIENT_NAME_MAX} characters"
            )));
        }
        Ok(Self { name })
    }
}
