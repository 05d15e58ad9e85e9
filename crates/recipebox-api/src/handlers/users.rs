//! User profile handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use recipebox_core::error::AppError;
use recipebox_core::types::UserId;
use recipebox_entity::user::User;

use crate::dto::request::RegisterUserRequest;
use crate::extractors::{AppPath, AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /users
///
/// Stores the caller's profile on first visit. 201 when stored, 200 when
/// a profile already existed.
pub async fn register(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Option<ValidatedJson<RegisterUserRequest>>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let supplied = body.map(|ValidatedJson(req)| req).unwrap_or_default();
    let (user, created) = state
        .user_service
        .register(&auth, supplied.into())
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(user)))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.user_service.list().await?))
}

/// GET /users/{userId}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppPath(user_id): AppPath<UserId>,
) -> Result<Json<User>, AppError> {
    Ok(Json(state.user_service.get(&user_id).await?))
}
