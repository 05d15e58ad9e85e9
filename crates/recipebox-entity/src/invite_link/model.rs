//! Invite link entity model.

use chrono::{DateTime, Utc};
use recipebox_core::types::{InviteLinkId, RecipeId, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::roster::InvitedUser;
use crate::user::UserProfile;

/// The per-recipe sharing handle. At most one exists per recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InviteLink {
    pub id: InviteLinkId,
    pub recipe_id: RecipeId,
    /// Roster, loaded separately from the link row.
    #[sqlx(skip)]
    pub invited_users: Vec<InvitedUser>,
    pub created_at: DateTime<Utc>,
    /// The recipe owner.
    pub created_by: UserId,
}

impl InviteLink {
    /// A new link with an empty roster.
    pub fn new(recipe_id: RecipeId, created_by: UserId, now: DateTime<Utc>) -> Self {
        Self {
            id: InviteLinkId::new(),
            recipe_id,
            invited_users: Vec::new(),
            created_at: now,
            created_by,
        }
    }

    /// Check if `user_id` created this link.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.created_by == user_id
    }

    /// The roster entry for `user_id`, if any.
    pub fn entry_for(&self, user_id: &UserId) -> Option<&InvitedUser> {
        self.invited_users.iter().find(|u| &u.user_id == user_id)
    }

    /// Whether `user_id` is on the roster with active access.
    pub fn grants_access_to(&self, user_id: &UserId) -> bool {
        self.entry_for(user_id).is_some_and(InvitedUser::is_active)
    }
}

/// An invite link shared with the caller, joined with its creator's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedInviteLink {
    #[serde(flatten)]
    pub link: InviteLink,
    pub creator: UserProfile,
}
