//! Legacy invitation handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use recipebox_core::error::AppError;
use recipebox_core::types::InvitationId;
use recipebox_entity::invitation::Invitation;

use crate::dto::request::{RecipeRefRequest, RespondInvitationRequest};
use crate::dto::response::{InvitationCreatedResponse, MessageResponse};
use crate::extractors::{AppPath, AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /invitations
pub async fn list_invitations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Invitation>>, AppError> {
    Ok(Json(state.invitation_service.list_mine(&auth).await?))
}

/// POST /invitations
pub async fn create_invitation(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<RecipeRefRequest>,
) -> Result<(StatusCode, Json<InvitationCreatedResponse>), AppError> {
    let (invitation, created) = state
        .invitation_service
        .create_or_get(&auth, req.recipe_id)
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        status,
        Json(InvitationCreatedResponse {
            invitation_id: invitation.id,
        }),
    ))
}

/// PATCH /invitations/{id}
pub async fn respond_invitation(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<InvitationId>,
    ValidatedJson(req): ValidatedJson<RespondInvitationRequest>,
) -> Result<Json<Invitation>, AppError> {
    let invitation = state
        .invitation_service
        .respond(&auth, id, req.status)
        .await?;
    Ok(Json(invitation))
}

/// DELETE /invitations/{id}
pub async fn delete_invitation(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<InvitationId>,
) -> Result<Json<MessageResponse>, AppError> {
    state.invitation_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Invitation deleted")))
}
