//! Invitation entity model.

use chrono::{DateTime, Utc};
use recipebox_core::types::{InvitationId, RecipeId, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::InvitationStatus;

/// A direct recipe-level invitation. One per `(invited_by, recipe_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: InvitationId,
    pub invited_by: UserId,
    pub recipe_id: RecipeId,
    pub status: InvitationStatus,
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    /// A new pending invitation.
    pub fn pending(invited_by: UserId, recipe_id: RecipeId, now: DateTime<Utc>) -> Self {
        Self {
            id: InvitationId::new(),
            invited_by,
            recipe_id,
            status: InvitationStatus::Pending,
            created_at: now,
        }
    }
}
