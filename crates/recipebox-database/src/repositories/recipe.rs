//! Recipe repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

use recipebox_core::error::{AppError, ErrorKind};
use recipebox_core::result::AppResult;
use recipebox_core::types::{IngredientId, RecipeId, UserId};
use recipebox_entity::recipe::{Recipe, RecipeDraft};

use crate::store::RecipeStore;

/// Repository for recipe documents.
#[derive(Debug, Clone)]
pub struct RecipeRepository {
    pool: PgPool,
}

impl RecipeRepository {
    /// Create a new recipe repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeStore for RecipeRepository {
    async fn insert(&self, recipe: Recipe) -> AppResult<Recipe> {
        sqlx::query_as::<_, Recipe>(
            "INSERT INTO recipes (id, name, note, ingredients, created_by, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(recipe.id)
        .bind(&recipe.name)
        .bind(&recipe.note)
        .bind(Json(&recipe.ingredients))
        .bind(&recipe.created_by)
        .bind(recipe.created_at)
        .bind(recipe.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create recipe", e))
    }

    async fn find(&self, id: RecipeId) -> AppResult<Option<Recipe>> {
        sqlx::query_as::<_, Recipe>("SELECT * FROM recipes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find recipe", e))
    }

    async fn list_by_creator(&self, user_id: &UserId) -> AppResult<Vec<Recipe>> {
        sqlx::query_as::<_, Recipe>("SELECT * FROM recipes WHERE created_by = $1")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list recipes", e))
    }

    async fn update(
        &self,
        id: RecipeId,
        draft: &RecipeDraft,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Option<Recipe>> {
        sqlx::query_as::<_, Recipe>(
            "UPDATE recipes SET name = $2, note = $3, ingredients = $4, updated_at = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.note)
        .bind(Json(&draft.ingredients))
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update recipe", e))
    }

    async fn delete(&self, id: RecipeId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete recipe", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn any_references(&self, ingredient_id: IngredientId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM recipes \
             WHERE ingredients @> jsonb_build_array(jsonb_build_object('id', $1::text)))",
        )
        .bind(ingredient_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to check ingredient references",
                e,
            )
        })
    }
}
