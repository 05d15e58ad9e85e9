//! Ingredient CRUD, owned by the creator.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use recipebox_core::error::AppError;
use recipebox_core::result::AppResult;
use recipebox_core::types::IngredientId;
use recipebox_database::store::{IngredientStore, RecipeStore};
use recipebox_entity::ingredient::{CreateIngredient, Ingredient};

use crate::context::RequestContext;
use crate::share::AccessEvaluator;

/// Manages ingredient documents.
#[derive(Debug, Clone)]
pub struct IngredientService {
    ingredients: Arc<dyn IngredientStore>,
    recipes: Arc<dyn RecipeStore>,
    access: Arc<AccessEvaluator>,
}

impl IngredientService {
    /// Creates a new ingredient service.
    pub fn new(
        ingredients: Arc<dyn IngredientStore>,
        recipes: Arc<dyn RecipeStore>,
        access: Arc<AccessEvaluator>,
    ) -> Self {
        Self {
            ingredients,
            recipes,
            access,
        }
    }

    /// Create an ingredient owned by the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateIngredient,
    ) -> AppResult<Ingredient> {
        let data = data.normalized()?;
        let ingredient = self
            .ingredients
            .insert(Ingredient {
                id: IngredientId::new(),
                name: data.name,
                created_by: ctx.user_id.clone(),
                created_at: Utc::now(),
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            ingredient_id = %ingredient.id,
            "Ingredient created"
        );
        Ok(ingredient)
    }

    /// The caller's ingredients, oldest first.
    pub async fn list_mine(&self, ctx: &RequestContext) -> AppResult<Vec<Ingredient>> {
        self.ingredients.list_by_creator(&ctx.user_id).await
    }

    /// Fetch one ingredient the caller may see.
    ///
    /// Readers of the owner's recipe book may see the owner's ingredients.
    pub async fn get(&self, ctx: &RequestContext, id: IngredientId) -> AppResult<Ingredient> {
        let ingredient = self.find(id).await?;
        if ingredient.is_owned_by(&ctx.user_id) {
            return Ok(ingredient);
        }

        let decision = self
            .access
            .can_read_book(&ctx.user_id, &ingredient.created_by)
            .await?;
        if let Some(reason) = decision.deny_reason() {
            debug!(user_id = %ctx.user_id, ingredient_id = %id, ?reason, "Ingredient read denied");
            return Err(AppError::forbidden("You do not have access to this ingredient"));
        }
        Ok(ingredient)
    }

    /// Rename an ingredient the caller owns.
    pub async fn rename(
        &self,
        ctx: &RequestContext,
        id: IngredientId,
        data: CreateIngredient,
    ) -> AppResult<Ingredient> {
        let data = data.normalized()?;
        self.find_owned(ctx, id).await?;

        let ingredient = self
            .ingredients
            .rename(id, &data.name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Ingredient {id} not found")))?;

        info!(user_id = %ctx.user_id, ingredient_id = %id, "Ingredient renamed");
        Ok(ingredient)
    }

    /// Delete an ingredient the caller owns.
    ///
    /// Refused with `Conflict` while any recipe still uses it.
    pub async fn delete(&self, ctx: &RequestContext, id: IngredientId) -> AppResult<()> {
        self.find_owned(ctx, id).await?;
        if self.recipes.any_references(id).await? {
            return Err(AppError::conflict(
                "Ingredient is used by a recipe; remove it from those recipes first",
            ));
        }
        if !self.ingredients.delete(id).await? {
            return Err(AppError::not_found(format!("Ingredient {id} not found")));
        }

        info!(user_id = %ctx.user_id, ingredient_id = %id, "Ingredient deleted");
        Ok(())
    }

    async fn find(&self, id: IngredientId) -> AppResult<Ingredient> {
        self.ingredients
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Ingredient {id} not found")))
    }

    async fn find_owned(&self, ctx: &RequestContext, id: IngredientId) -> AppResult<Ingredient> {
        let ingredient = self.find(id).await?;
        if !ingredient.is_owned_by(&ctx.user_id) {
            return Err(AppError::forbidden("Only the owner can modify this ingredient"));
        }
        Ok(ingredient)
    }
}
