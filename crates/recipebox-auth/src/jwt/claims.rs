//! JWT claims structure carried by bearer tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use recipebox_core::types::UserId;
use recipebox_entity::user::UpsertUser;

/// Claims payload of an identity token.
///
/// Profile claims are optional; when present they seed the stored profile
/// on the first authenticated visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the identity-provider user id.
    pub sub: String,
    /// Issuer.
    pub iss: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token id.
    pub jti: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl Claims {
    /// Returns the caller's user id.
    pub fn user_id(&self) -> UserId {
        UserId::new(self.sub.clone())
    }

    /// Profile fields carried by the token, blank where absent.
    pub fn profile(&self) -> UpsertUser {
        UpsertUser {
            first_name: self.given_name.clone().unwrap_or_default(),
            last_name: self.family_name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            avatar: self.picture.clone().unwrap_or_default(),
        }
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
