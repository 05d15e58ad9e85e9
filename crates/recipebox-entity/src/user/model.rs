//! User entity model.

use chrono::{DateTime, Utc};
use recipebox_core::types::UserId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user profile, created on the first authenticated visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identity-provider subject. Immutable.
    pub user_id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Primary email address.
    pub email: String,
    /// Avatar image URL.
    pub avatar: String,
    /// When the profile was first stored.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The public subset of the profile shown to other users.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            user_id: self.user_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Public profile attached to shared invite links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: String,
}

/// Data used to create a profile if none exists yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpsertUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: String,
}

impl UpsertUser {
    /// Build the stored row for `user_id` stamped with `now`.
    pub fn into_user(self, user_id: UserId, now: DateTime<Utc>) -> User {
        User {
            user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            avatar: self.avatar,
            created_at: now,
        }
    }
}
