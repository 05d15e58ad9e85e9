//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use recipebox_core::types::UserId;
use recipebox_entity::user::UpsertUser;

/// Context for the current authenticated request.
///
/// Built by the HTTP extractor from verified token claims and passed into
/// service methods so that every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated caller.
    pub user_id: UserId,
    /// Profile fields asserted by the identity provider, if any.
    pub profile: UpsertUser,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context for `user_id` with no profile claims.
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            profile: UpsertUser::default(),
            request_time: Utc::now(),
        }
    }

    /// Attach identity-provider profile fields.
    pub fn with_profile(mut self, profile: UpsertUser) -> Self {
        self.profile = profile;
        self
    }

    /// Whether the caller is `user_id`.
    pub fn is(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
