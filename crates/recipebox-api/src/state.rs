//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use recipebox_auth::{JwtDecoder, JwtEncoder};
use recipebox_core::config::AppConfig;
use recipebox_database::Stores;
use recipebox_service::{
    AccessEvaluator, IngredientService, InvitationService, InviteLinkRegistry, RecipeAccessFacade,
    RecipeService, UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Store handles (PostgreSQL or in-memory)
    pub stores: Stores,

    // ── Auth ─────────────────────────────────────────────────
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Only used by tooling and tests to mint tokens.
    pub jwt_encoder: Arc<JwtEncoder>,

    // ── Services ─────────────────────────────────────────────
    pub user_service: Arc<UserService>,
    pub ingredient_service: Arc<IngredientService>,
    pub recipe_service: Arc<RecipeService>,
    pub access_evaluator: Arc<AccessEvaluator>,
    pub invite_link_registry: Arc<InviteLinkRegistry>,
    pub recipe_facade: Arc<RecipeAccessFacade>,
    pub invitation_service: Arc<InvitationService>,
}

impl AppState {
    /// Wire every service on top of the given stores.
    pub fn new(config: AppConfig, stores: Stores) -> Self {
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));

        let user_service = Arc::new(UserService::new(stores.users.clone()));
        let access_evaluator = Arc::new(AccessEvaluator::new(stores.invite_links.clone()));
        let ingredient_service = Arc::new(IngredientService::new(
            stores.ingredients.clone(),
            stores.recipes.clone(),
            Arc::clone(&access_evaluator),
        ));
        let recipe_service = Arc::new(RecipeService::new(
            stores.recipes.clone(),
            stores.ingredients.clone(),
        ));
        let invite_link_registry = Arc::new(InviteLinkRegistry::new(
            stores.invite_links.clone(),
            stores.recipes.clone(),
            Arc::clone(&user_service),
        ));
        let recipe_facade = Arc::new(RecipeAccessFacade::new(
            Arc::clone(&recipe_service),
            Arc::clone(&access_evaluator),
        ));
        let invitation_service = Arc::new(InvitationService::new(
            stores.invitations.clone(),
            stores.recipes.clone(),
        ));

        Self {
            config: Arc::new(config),
            stores,
            jwt_decoder,
            jwt_encoder,
            user_service,
            ingredient_service,
            recipe_service,
            access_evaluator,
            invite_link_registry,
            recipe_facade,
            invitation_service,
        }
    }
}
