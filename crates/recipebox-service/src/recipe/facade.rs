//! The composed recipe read path: identity, access decision, fetch,
//! filter, sort, and ingredient join.

use std::sync::Arc;

use tracing::debug;

use recipebox_core::error::AppError;
use recipebox_core::result::AppResult;
use recipebox_core::types::{RecipeId, UserId};
use recipebox_entity::recipe::RecipeView;

use super::service::RecipeService;
use crate::context::RequestContext;
use crate::share::access::{AccessDecision, AccessEvaluator};

const FORBIDDEN_MESSAGE: &str = "You do not have access to these recipes";

/// Serves recipes to their owner and to invited readers.
#[derive(Debug, Clone)]
pub struct RecipeAccessFacade {
    recipes: Arc<RecipeService>,
    access: Arc<AccessEvaluator>,
}

impl RecipeAccessFacade {
    /// Creates a new recipe access facade.
    pub fn new(recipes: Arc<RecipeService>, access: Arc<AccessEvaluator>) -> Self {
        Self { recipes, access }
    }

    /// List the recipes of `target` (the caller when `None`), optionally
    /// filtered by a case-insensitive name substring, sorted by name.
    ///
    /// Denials surface as a generic `Forbidden`; the reason is only logged.
    pub async fn list_recipes(
        &self,
        ctx: &RequestContext,
        target: Option<&UserId>,
        search: Option<&str>,
    ) -> AppResult<Vec<RecipeView>> {
        let owner = target.unwrap_or(&ctx.user_id);
        if owner.is_blank() {
            return Err(AppError::validation("User ID must not be empty"));
        }

        let decision = self.access.can_read_book(&ctx.user_id, owner).await?;
        self.enforce(ctx, owner, decision)?;

        let recipes = self.recipes.search_by_owner(owner, search).await?;
        self.recipes.resolve(recipes).await
    }

    /// Fetch one recipe with ingredient names resolved.
    pub async fn get_recipe(&self, ctx: &RequestContext, id: RecipeId) -> AppResult<RecipeView> {
        let recipe = self.recipes.find(id).await?;
        let owner = recipe.created_by.clone();

        // The recipe's own link answers most shared reads in one lookup.
        let mut decision = self.access.can_read(&ctx.user_id, &owner, id).await?;
        if !decision.is_allowed() {
            decision = self.access.can_read_book(&ctx.user_id, &owner).await?;
        }
        self.enforce(ctx, &owner, decision)?;

        let mut views = self.recipes.resolve(vec![recipe]).await?;
        views
            .pop()
            .ok_or_else(|| AppError::internal("Resolved recipe disappeared"))
    }

    fn enforce(
        &self,
        ctx: &RequestContext,
        owner: &UserId,
        decision: AccessDecision,
    ) -> AppResult<()> {
        match decision {
            AccessDecision::Allow => Ok(()),
            AccessDecision::Deny(reason) => {
                debug!(
                    user_id = %ctx.user_id,
                    target_user_id = %owner,
                    ?reason,
                    "Recipe read denied"
                );
                Err(AppError::forbidden(FORBIDDEN_MESSAGE))
            }
        }
    }
}
