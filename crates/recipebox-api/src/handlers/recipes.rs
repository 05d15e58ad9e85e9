//! Recipe handlers.
//!
//! Reads go through the access facade; writes are owner-only and go
//! straight to the recipe service.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use recipebox_core::error::AppError;
use recipebox_core::types::RecipeId;
use recipebox_entity::recipe::{Recipe, RecipeView};

use crate::dto::request::{RecipeListQuery, RecipeRequest};
use crate::dto::response::MessageResponse;
use crate::extractors::{AppPath, AppQuery, AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /recipes?userId=&search=
pub async fn list_recipes(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(query): AppQuery<RecipeListQuery>,
) -> Result<Json<Vec<RecipeView>>, AppError> {
    let recipes = state
        .recipe_facade
        .list_recipes(&auth, query.user_id.as_ref(), query.search.as_deref())
        .await?;
    Ok(Json(recipes))
}

/// POST /recipes
pub async fn create_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<RecipeRequest>,
) -> Result<(StatusCode, Json<Recipe>), AppError> {
    let recipe = state.recipe_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// GET /recipes/{id}
pub async fn get_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<RecipeId>,
) -> Result<Json<RecipeView>, AppError> {
    Ok(Json(state.recipe_facade.get_recipe(&auth, id).await?))
}

/// PUT /recipes/{id}
pub async fn update_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<RecipeId>,
    ValidatedJson(req): ValidatedJson<RecipeRequest>,
) -> Result<Json<Recipe>, AppError> {
    let recipe = state.recipe_service.update(&auth, id, req.into()).await?;
    Ok(Json(recipe))
}

/// DELETE /recipes/{id}
pub async fn delete_recipe(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<RecipeId>,
) -> Result<Json<MessageResponse>, AppError> {
    state.recipe_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Recipe deleted")))
}
