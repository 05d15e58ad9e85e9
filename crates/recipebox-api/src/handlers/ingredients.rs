//! Ingredient handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use recipebox_core::error::AppError;
use recipebox_core::types::IngredientId;
use recipebox_entity::ingredient::Ingredient;

use crate::dto::request::IngredientRequest;
use crate::dto::response::MessageResponse;
use crate::extractors::{AppPath, AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /ingredients
pub async fn list_ingredients(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Ingredient>>, AppError> {
    Ok(Json(state.ingredient_service.list_mine(&auth).await?))
}

/// POST /ingredients
pub async fn create_ingredient(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<IngredientRequest>,
) -> Result<(StatusCode, Json<Ingredient>), AppError> {
    let ingredient = state.ingredient_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ingredient)))
}

/// GET /ingredients/{id}
pub async fn get_ingredient(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<IngredientId>,
) -> Result<Json<Ingredient>, AppError> {
    Ok(Json(state.ingredient_service.get(&auth, id).await?))
}

/// PUT /ingredients/{id}
pub async fn update_ingredient(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<IngredientId>,
    ValidatedJson(req): ValidatedJson<IngredientRequest>,
) -> Result<Json<Ingredient>, AppError> {
    let ingredient = state
        .ingredient_service
        .rename(&auth, id, req.into())
        .await?;
    Ok(Json(ingredient))
}

/// DELETE /ingredients/{id}
pub async fn delete_ingredient(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<IngredientId>,
) -> Result<Json<MessageResponse>, AppError> {
    state.ingredient_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Ingredient deleted")))
}
