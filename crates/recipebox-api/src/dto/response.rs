//! Response DTOs.

use serde::{Deserialize, Serialize};

use recipebox_core::types::{InvitationId, InviteLinkId};

/// `POST /inviteLinks` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteLinkCreatedResponse {
    pub invite_link_id: InviteLinkId,
}

/// `POST /invitations` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationCreatedResponse {
    pub invitation_id: InvitationId,
}

/// Plain acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
}

/// Detailed health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    pub status: String,
    pub version: String,
    /// `postgres` or `memory`.
    pub store: String,
    /// `connected` or `unavailable`.
    pub store_status: String,
}
