//! Invite link repository implementation.
//!
//! Links live in `invite_links`; rosters live in `invited_users`, one row per
//! `(invite_link_id, user_id)`. Accepting inserts a row with
//! `ON CONFLICT DO NOTHING`, and revoke/restore update a single row, so
//! concurrent roster changes never overwrite each other.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use recipebox_core::error::{AppError, ErrorKind};
use recipebox_core::result::AppResult;
use recipebox_core::types::{InviteLinkId, RecipeId, UserId};
use recipebox_entity::invite_link::{InviteLink, InvitedUser, RosterInsert};

use crate::store::InviteLinkStore;

const LINK_COLUMNS: &str = "id, recipe_id, created_by, created_at";

/// A roster row tagged with the link it belongs to.
#[derive(Debug, FromRow)]
struct RosterRow {
    invite_link_id: InviteLinkId,
    #[sqlx(flatten)]
    entry: InvitedUser,
}

/// Repository for invite links and their rosters.
#[derive(Debug, Clone)]
pub struct InviteLinkRepository {
    pool: PgPool,
}

impl InviteLinkRepository {
    /// Create a new invite link repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fill in the rosters of `links` with one query.
    async fn attach_rosters(&self, mut links: Vec<InviteLink>) -> AppResult<Vec<InviteLink>> {
        if links.is_empty() {
            return Ok(links);
        }
        let ids: Vec<Uuid> = links.iter().map(|l| l.id.into_uuid()).collect();

        let rows = sqlx::query_as::<_, RosterRow>(
            "SELECT invite_link_id, user_id, invited, access_revoked, joined_at \
             FROM invited_users WHERE invite_link_id = ANY($1) \
             ORDER BY joined_at, user_id",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load rosters", e))?;

        let mut by_link: HashMap<InviteLinkId, Vec<InvitedUser>> = HashMap::new();
        for row in rows {
            by_link.entry(row.invite_link_id).or_default().push(row.entry);
        }
        for link in &mut links {
            link.invited_users = by_link.remove(&link.id).unwrap_or_default();
        }
        Ok(links)
    }

    async fn attach_roster(&self, link: Option<InviteLink>) -> AppResult<Option<InviteLink>> {
        match link {
            Some(link) => Ok(self.attach_rosters(vec![link]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl InviteLinkStore for InviteLinkRepository {
    async fn create_or_get(
        &self,
        recipe_id: RecipeId,
        created_by: &UserId,
        now: DateTime<Utc>,
    ) -> AppResult<(InviteLink, bool)> {
        let fresh = InviteLink::new(recipe_id, created_by.clone(), now);

        let inserted = sqlx::query_as::<_, InviteLink>(&format!(
            "INSERT INTO invite_links ({LINK_COLUMNS}) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (recipe_id) DO NOTHING RETURNING {LINK_COLUMNS}"
        ))
        .bind(fresh.id)
        .bind(fresh.recipe_id)
        .bind(&fresh.created_by)
        .bind(fresh.created_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create invite link", e))?;

        if let Some(link) = inserted {
            return Ok((link, true));
        }

        let existing = self.find_by_recipe(recipe_id).await?.ok_or_else(|| {
            AppError::internal(format!(
                "Invite link for recipe {recipe_id} conflicted but could not be read"
            ))
        })?;
        Ok((existing, false))
    }

    async fn find(&self, id: InviteLinkId) -> AppResult<Option<InviteLink>> {
        let link = sqlx::query_as::<_, InviteLink>(&format!(
            "SELECT {LINK_COLUMNS} FROM invite_links WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find invite link", e))?;

        self.attach_roster(link).await
    }

    async fn find_by_recipe(&self, recipe_id: RecipeId) -> AppResult<Option<InviteLink>> {
        let link = sqlx::query_as::<_, InviteLink>(&format!(
            "SELECT {LINK_COLUMNS} FROM invite_links WHERE recipe_id = $1"
        ))
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find invite link by recipe", e)
        })?;

        self.attach_roster(link).await
    }

    async fn list_by_creator(&self, user_id: &UserId) -> AppResult<Vec<InviteLink>> {
        let links = sqlx::query_as::<_, InviteLink>(&format!(
            "SELECT {LINK_COLUMNS} FROM invite_links WHERE created_by = $1 \
             ORDER BY created_at, id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list invite links", e))?;

        self.attach_rosters(links).await
    }

    async fn list_shared_with(&self, user_id: &UserId) -> AppResult<Vec<InviteLink>> {
        let links = sqlx::query_as::<_, InviteLink>(
            "SELECT l.id, l.recipe_id, l.created_by, l.created_at \
             FROM invite_links l \
             JOIN invited_users u ON u.invite_link_id = l.id \
             WHERE u.user_id = $1 AND u.access_revoked = FALSE \
             ORDER BY l.created_at, l.id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list shared invite links", e)
        })?;

        self.attach_rosters(links).await
    }

    async fn add_invited_user(
        &self,
        id: InviteLinkId,
        entry: InvitedUser,
    ) -> AppResult<RosterInsert> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM invite_links WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to find invite link", e)
                })?;
        if !exists {
            return Err(AppError::not_found(format!("Invite link {id} not found")));
        }

        let result = sqlx::query(
            "INSERT INTO invited_users (invite_link_id, user_id, invited, access_revoked, joined_at) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (invite_link_id, user_id) DO NOTHING",
        )
        .bind(id)
        .bind(&entry.user_id)
        .bind(entry.invited)
        .bind(entry.access_revoked)
        .bind(entry.joined_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to join invite link", e))?;

        if result.rows_affected() > 0 {
            return Ok(RosterInsert::Inserted);
        }

        let revoked: bool = sqlx::query_scalar(
            "SELECT access_revoked FROM invited_users WHERE invite_link_id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(&entry.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to read roster entry", e))?;

        Ok(if revoked {
            RosterInsert::Revoked
        } else {
            RosterInsert::AlreadyActive
        })
    }

    async fn set_access_revoked(
        &self,
        id: InviteLinkId,
        user_id: &UserId,
        revoked: bool,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE invited_users SET access_revoked = $3 \
             WHERE invite_link_id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .bind(revoked)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update roster entry", e))?;

        Ok(result.rows_affected() > 0)
    }
}
