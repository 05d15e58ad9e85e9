//! Invitation repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use recipebox_core::error::{AppError, ErrorKind};
use recipebox_core::result::AppResult;
use recipebox_core::types::{InvitationId, RecipeId, UserId};
use recipebox_entity::invitation::{Invitation, InvitationStatus};

use crate::store::InvitationStore;

/// Repository for legacy direct invitations.
#[derive(Debug, Clone)]
pub struct InvitationRepository {
    pool: PgPool,
}

impl InvitationRepository {
    /// Create a new invitation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_pair(
        &self,
        invited_by: &UserId,
        recipe_id: RecipeId,
    ) -> AppResult<Option<Invitation>> {
        sqlx::query_as::<_, Invitation>(
            "SELECT * FROM invitations WHERE invited_by = $1 AND recipe_id = $2",
        )
        .bind(invited_by)
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find invitation", e))
    }
}

#[async_trait]
impl InvitationStore for InvitationRepository {
    async fn create_or_get(
        &self,
        invited_by: &UserId,
        recipe_id: RecipeId,
        now: DateTime<Utc>,
    ) -> AppResult<(Invitation, bool)> {
        let fresh = Invitation::pending(invited_by.clone(), recipe_id, now);

        let inserted = sqlx::query_as::<_, Invitation>(
            "INSERT INTO invitations (id, invited_by, recipe_id, status, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (invited_by, recipe_id) DO NOTHING RETURNING *",
        )
        .bind(fresh.id)
        .bind(&fresh.invited_by)
        .bind(fresh.recipe_id)
        .bind(fresh.status)
        .bind(fresh.created_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create invitation", e))?;

        if let Some(invitation) = inserted {
            return Ok((invitation, true));
        }

        let existing = self.find_pair(invited_by, recipe_id).await?.ok_or_else(|| {
            AppError::internal(format!(
                "Invitation for recipe {recipe_id} conflicted but could not be read"
            ))
        })?;
        Ok((existing, false))
    }

    async fn find(&self, id: InvitationId) -> AppResult<Option<Invitation>> {
        sqlx::query_as::<_, Invitation>("SELECT * FROM invitations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find invitation", e))
    }

    async fn list_by_inviter(&self, user_id: &UserId) -> AppResult<Vec<Invitation>> {
        sqlx::query_as::<_, Invitation>(
            "SELECT * FROM invitations WHERE invited_by = $1 ORDER BY created_at, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list invitations", e))
    }

    async fn resolve(
        &self,
        id: InvitationId,
        status: InvitationStatus,
    ) -> AppResult<Option<Invitation>> {
        sqlx::query_as::<_, Invitation>(
            "UPDATE invitations SET status = $2 \
             WHERE id = $1 AND status = 'pending' RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update invitation", e))
    }

    async fn delete(&self, id: InvitationId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM invitations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete invitation", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
