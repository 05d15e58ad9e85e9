//! Route definitions for the RecipeBox HTTP API.
//!
//! Routes are organized by domain and mounted at the root, matching the
//! paths clients already call (`/recipes`, `/inviteLinks`, ...).

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, patch, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with every route, threading `state` through
/// `.with_state(state)`. Cross-cutting layers are added by
/// [`crate::app::build_app`].
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    Router::new()
        .merge(health_routes())
        .merge(user_routes())
        .merge(ingredient_routes())
        .merge(recipe_routes())
        .merge(invite_link_routes())
        .merge(invitation_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Liveness and store connectivity
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// User profiles
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handlers::users::list_users).post(handlers::users::register),
        )
        .route("/users/{user_id}", get(handlers::users::get_user))
}

/// Ingredient CRUD
fn ingredient_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/ingredients",
            get(handlers::ingredients::list_ingredients)
                .post(handlers::ingredients::create_ingredient),
        )
        .route(
            "/ingredients/{id}",
            get(handlers::ingredients::get_ingredient)
                .put(handlers::ingredients::update_ingredient)
                .delete(handlers::ingredients::delete_ingredient),
        )
}

/// Recipe CRUD and the shared read path
fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recipes",
            get(handlers::recipes::list_recipes).post(handlers::recipes::create_recipe),
        )
        .route(
            "/recipes/{id}",
            get(handlers::recipes::get_recipe)
                .put(handlers::recipes::update_recipe)
                .delete(handlers::recipes::delete_recipe),
        )
}

/// Invite links and roster management
fn invite_link_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/inviteLinks",
            get(handlers::invite_links::list_invite_links)
                .post(handlers::invite_links::create_invite_link),
        )
        .route(
            "/inviteLinks/invited",
            get(handlers::invite_links::list_invited),
        )
        .route(
            "/inviteLinks/{id}",
            get(handlers::invite_links::get_invite_link),
        )
        .route(
            "/inviteLinks/{id}/accept",
            put(handlers::invite_links::accept_invite_link),
        )
        .route(
            "/inviteLinks/{id}/revoke",
            put(handlers::invite_links::revoke_access),
        )
        .route(
            "/inviteLinks/{id}/restore",
            put(handlers::invite_links::restore_access),
        )
}

/// Legacy direct invitations
fn invitation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/invitations",
            get(handlers::invitations::list_invitations)
                .post(handlers::invitations::create_invitation),
        )
        .route(
            "/invitations/{id}",
            patch(handlers::invitations::respond_invitation)
                .delete(handlers::invitations::delete_invitation),
        )
}
