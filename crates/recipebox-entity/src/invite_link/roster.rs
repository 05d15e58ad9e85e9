//! Roster entries of an invite link.

use chrono::{DateTime, Utc};
use recipebox_core::types::UserId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One user on an invite link's roster.
///
/// Entries are never removed. `access_revoked = true` means the user had
/// access and the owner withdrew it; `false` means access is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InvitedUser {
    pub user_id: UserId,
    pub invited: bool,
    pub access_revoked: bool,
    pub joined_at: DateTime<Utc>,
}

impl InvitedUser {
    /// A fresh entry for a user who just accepted.
    pub fn accepted(user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            invited: true,
            access_revoked: false,
            joined_at: now,
        }
    }

    /// Whether this entry currently grants read access.
    pub fn is_active(&self) -> bool {
        !self.access_revoked
    }
}

/// Outcome of adding a user to a roster keyed by user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterInsert {
    /// No entry existed; one was added as active.
    Inserted,
    /// An active entry already existed; nothing changed.
    AlreadyActive,
    /// A revoked entry exists; nothing changed.
    Revoked,
}
