//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use recipebox_core::error::{AppError, ErrorKind};
use recipebox_core::result::AppResult;
use recipebox_core::types::UserId;
use recipebox_entity::user::User;

use crate::store::UserStore;

/// Repository for user profiles.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert_if_absent(&self, user: User) -> AppResult<(User, bool)> {
        let inserted = sqlx::query_as::<_, User>(
            "INSERT INTO users (user_id, first_name, last_name, email, avatar, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (user_id) DO NOTHING RETURNING *",
        )
        .bind(&user.user_id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.avatar)
        .bind(user.created_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert user", e))?;

        if let Some(user) = inserted {
            return Ok((user, true));
        }

        let existing = self.find(&user.user_id).await?.ok_or_else(|| {
            AppError::internal(format!("User {} conflicted but could not be read", user.user_id))
        })?;
        Ok((existing, false))
    }

    async fn find(&self, user_id: &UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at, user_id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }
}
