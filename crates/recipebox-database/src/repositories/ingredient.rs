//! Ingredient repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use recipebox_core::error::{AppError, ErrorKind};
use recipebox_core::result::AppResult;
use recipebox_core::types::{IngredientId, UserId};
use recipebox_entity::ingredient::Ingredient;

use crate::store::IngredientStore;

/// Repository for ingredient documents.
#[derive(Debug, Clone)]
pub struct IngredientRepository {
    pool: PgPool,
}

impl IngredientRepository {
    /// Create a new ingredient repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IngredientStore for IngredientRepository {
    async fn insert(&self, ingredient: Ingredient) -> AppResult<Ingredient> {
        sqlx::query_as::<_, Ingredient>(
            "INSERT INTO ingredients (id, name, created_by, created_at) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(ingredient.id)
        .bind(&ingredient.name)
        .bind(&ingredient.created_by)
        .bind(ingredient.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create ingredient", e))
    }

    async fn find(&self, id: IngredientId) -> AppResult<Option<Ingredient>> {
        sqlx::query_as::<_, Ingredient>("SELECT * FROM ingredients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find ingredient", e))
    }

    async fn find_many(&self, ids: &[IngredientId]) -> AppResult<Vec<Ingredient>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = ids.iter().map(|id| id.into_uuid()).collect();

        sqlx::query_as::<_, Ingredient>("SELECT * FROM ingredients WHERE id = ANY($1)")
            .bind(&ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load ingredients", e)
            })
    }

    async fn list_by_creator(&self, user_id: &UserId) -> AppResult<Vec<Ingredient>> {
        sqlx::query_as::<_, Ingredient>(
            "SELECT * FROM ingredients WHERE created_by = $1 ORDER BY created_at, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list ingredients", e))
    }

    async fn rename(&self, id: IngredientId, name: &str) -> AppResult<Option<Ingredient>> {
        sqlx::query_as::<_, Ingredient>(
            "UPDATE ingredients SET name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update ingredient", e))
    }

    async fn delete(&self, id: IngredientId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM ingredients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete ingredient", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
