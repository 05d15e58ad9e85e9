//! Recipe repository service: owner CRUD, owner-scoped search, and the
//! ingredient join used by every read.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use recipebox_core::error::AppError;
use recipebox_core::result::AppResult;
use recipebox_core::types::{IngredientId, RecipeId, UserId};
use recipebox_database::store::{IngredientStore, RecipeStore};
use recipebox_entity::ingredient::Ingredient;
use recipebox_entity::recipe::{Recipe, RecipeDraft, RecipeView, ResolvedIngredientLine};

use super::collation::{compare_names, matches_search};
use crate::context::RequestContext;

/// Owns recipe documents.
#[derive(Debug, Clone)]
pub struct RecipeService {
    recipes: Arc<dyn RecipeStore>,
    ingredients: Arc<dyn IngredientStore>,
}

impl RecipeService {
    /// Creates a new recipe service.
    pub fn new(recipes: Arc<dyn RecipeStore>, ingredients: Arc<dyn IngredientStore>) -> Self {
        Self {
            recipes,
            ingredients,
        }
    }

    /// Create a recipe owned by the caller.
    pub async fn create(&self, ctx: &RequestContext, draft: RecipeDraft) -> AppResult<Recipe> {
        let draft = draft.normalized()?;
        self.ensure_own_ingredients(ctx, &draft).await?;

        let now = Utc::now();
        let recipe = self
            .recipes
            .insert(Recipe {
                id: RecipeId::new(),
                name: draft.name,
                note: draft.note,
                ingredients: draft.ingredients,
                created_by: ctx.user_id.clone(),
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!(user_id = %ctx.user_id, recipe_id = %recipe.id, "Recipe created");
        Ok(recipe)
    }

    /// Replace the content of a recipe the caller owns.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: RecipeId,
        draft: RecipeDraft,
    ) -> AppResult<Recipe> {
        self.find_owned(ctx, id).await?;
        let draft = draft.normalized()?;
        self.ensure_own_ingredients(ctx, &draft).await?;

        let recipe = self
            .recipes
            .update(id, &draft, Utc::now())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {id} not found")))?;

        info!(user_id = %ctx.user_id, recipe_id = %id, "Recipe updated");
        Ok(recipe)
    }

    /// Delete a recipe the caller owns. Ingredients and invite links stay.
    pub async fn delete(&self, ctx: &RequestContext, id: RecipeId) -> AppResult<()> {
        self.find_owned(ctx, id).await?;
        if !self.recipes.delete(id).await? {
            return Err(AppError::not_found(format!("Recipe {id} not found")));
        }

        info!(user_id = %ctx.user_id, recipe_id = %id, "Recipe deleted");
        Ok(())
    }

    /// Fetch a recipe without any access check.
    pub async fn find(&self, id: RecipeId) -> AppResult<Recipe> {
        self.recipes
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {id} not found")))
    }

    /// Recipes of `owner` whose name contains `search`, in display order.
    pub async fn search_by_owner(
        &self,
        owner: &UserId,
        search: Option<&str>,
    ) -> AppResult<Vec<Recipe>> {
        let mut recipes = self.recipes.list_by_creator(owner).await?;
        if let Some(term) = search {
            recipes.retain(|r| matches_search(&r.name, term));
        }
        recipes.sort_by(|a, b| compare_names(&a.name, &b.name));
        Ok(recipes)
    }

    /// Attach ingredient names to every line, keeping recipe order.
    ///
    /// A line whose ingredient no longer exists is a data-integrity error.
    pub async fn resolve(&self, recipes: Vec<Recipe>) -> AppResult<Vec<RecipeView>> {
        let mut seen = HashSet::new();
        let ids: Vec<IngredientId> = recipes
            .iter()
            .flat_map(|r| r.ingredients.iter().map(|l| l.id))
            .filter(|id| seen.insert(*id))
            .collect();
        let names: HashMap<IngredientId, Ingredient> = self
            .ingredients
            .find_many(&ids)
            .await?
            .into_iter()
            .map(|i| (i.id, i))
            .collect();

        recipes
            .into_iter()
            .map(|recipe| -> AppResult<RecipeView> {
                let lines = recipe
                    .ingredients
                    .iter()
                    .map(|line| match names.get(&line.id) {
                        Some(ingredient) => Ok(ResolvedIngredientLine {
                            id: line.id,
                            name: ingredient.name.clone(),
                            quantity: line.quantity,
                            unit: line.unit,
                        }),
                        None => {
                            error!(
                                recipe_id = %recipe.id,
                                ingredient_id = %line.id,
                                "Recipe references a missing ingredient"
                            );
                            Err(AppError::data_integrity(format!(
                                "Recipe {} references missing ingredient {}",
                                recipe.id, line.id
                            )))
                        }
                    })
                    .collect::<AppResult<Vec<_>>>()?;

                Ok(RecipeView {
                    id: recipe.id,
                    name: recipe.name,
                    note: recipe.note,
                    ingredients: lines,
                    created_by: recipe.created_by,
                    created_at: recipe.created_at,
                    updated_at: recipe.updated_at,
                })
            })
            .collect()
    }

    async fn find_owned(&self, ctx: &RequestContext, id: RecipeId) -> AppResult<Recipe> {
        let recipe = self.find(id).await?;
        if !recipe.is_owned_by(&ctx.user_id) {
            return Err(AppError::forbidden("Only the owner can modify this recipe"));
        }
        Ok(recipe)
    }

    /// Reject drafts that reference ingredients that do not exist or that
    /// belong to someone else.
    async fn ensure_own_ingredients(
        &self,
        ctx: &RequestContext,
        draft: &RecipeDraft,
    ) -> AppResult<()> {
        let wanted: HashSet<IngredientId> = draft.ingredients.iter().map(|l| l.id).collect();
        let ids: Vec<IngredientId> = wanted.iter().copied().collect();
        let found: HashMap<IngredientId, Ingredient> = self
            .ingredients
            .find_many(&ids)
            .await?
            .into_iter()
            .map(|i| (i.id, i))
            .collect();

        for id in &ids {
            match found.get(id) {
                None => {
                    return Err(AppError::validation(format!(
                        "Ingredient {id} does not exist"
                    )));
                }
                Some(ingredient) if !ingredient.is_owned_by(&ctx.user_id) => {
                    return Err(AppError::validation(format!(
                        "Ingredient {id} belongs to another user"
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
