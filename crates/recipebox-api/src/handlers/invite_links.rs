//! Invite link handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use recipebox_core::error::AppError;
use recipebox_entity::invite_link::{InviteLink, SharedInviteLink};
use recipebox_service::AcceptOutcome;

use crate::dto::request::{RecipeRefRequest, UserIdQuery};
use crate::dto::response::{InviteLinkCreatedResponse, MessageResponse};
use crate::extractors::{AppQuery, AuthUser, LinkPath, ValidatedJson};
use crate::state::AppState;

/// GET /inviteLinks
pub async fn list_invite_links(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<InviteLink>>, AppError> {
    Ok(Json(state.invite_link_registry.list_mine(&auth).await?))
}

/// POST /inviteLinks
///
/// 201 when the link was created by this call, 200 when it already existed.
pub async fn create_invite_link(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<RecipeRefRequest>,
) -> Result<(StatusCode, Json<InviteLinkCreatedResponse>), AppError> {
    let (link, created) = state
        .invite_link_registry
        .create_or_get(&auth, req.recipe_id)
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        status,
        Json(InviteLinkCreatedResponse {
            invite_link_id: link.id,
        }),
    ))
}

/// GET /inviteLinks/invited?userId=
pub async fn list_invited(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(query): AppQuery<UserIdQuery>,
) -> Result<Json<Vec<SharedInviteLink>>, AppError> {
    let user_id = query.require()?;
    let links = state
        .invite_link_registry
        .list_shared_with(&auth, &user_id)
        .await?;
    Ok(Json(links))
}

/// GET /inviteLinks/{id}
pub async fn get_invite_link(
    State(state): State<AppState>,
    auth: AuthUser,
    LinkPath(id): LinkPath,
) -> Result<Json<InviteLink>, AppError> {
    Ok(Json(state.invite_link_registry.get(&auth, id).await?))
}

/// PUT /inviteLinks/{id}/accept
pub async fn accept_invite_link(
    State(state): State<AppState>,
    auth: AuthUser,
    LinkPath(id): LinkPath,
) -> Result<Json<MessageResponse>, AppError> {
    let message = match state.invite_link_registry.accept(&auth, id).await? {
        AcceptOutcome::Joined => "Invite accepted",
        AcceptOutcome::AlreadyMember => "You already have access",
        AcceptOutcome::Owner => "You own this recipe",
    };
    Ok(Json(MessageResponse::new(message)))
}

/// PUT /inviteLinks/{id}/revoke?userId=
pub async fn revoke_access(
    State(state): State<AppState>,
    auth: AuthUser,
    LinkPath(id): LinkPath,
    AppQuery(query): AppQuery<UserIdQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let target = query.require()?;
    state
        .invite_link_registry
        .revoke(&auth, id, &target)
        .await?;
    Ok(Json(MessageResponse::new("Access revoked")))
}

/// PUT /inviteLinks/{id}/restore?userId=
pub async fn restore_access(
    State(state): State<AppState>,
    auth: AuthUser,
    LinkPath(id): LinkPath,
    AppQuery(query): AppQuery<UserIdQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let target = query.require()?;
    state
        .invite_link_registry
        .restore(&auth, id, &target)
        .await?;
    Ok(Json(MessageResponse::new("Access restored")))
}
