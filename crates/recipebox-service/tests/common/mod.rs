//! Shared fixtures for service tests, backed by the in-memory store.

#![allow(dead_code)]

use std::sync::Arc;

use recipebox_core::types::{IngredientId, UserId};
use recipebox_database::{MemoryStore, Stores};
use recipebox_entity::ingredient::CreateIngredient;
use recipebox_entity::recipe::{IngredientLine, Recipe, RecipeDraft, Unit};
use recipebox_entity::user::UpsertUser;
use recipebox_service::{
    AccessEvaluator, IngredientService, InvitationService, InviteLinkRegistry, RecipeAccessFacade,
    RecipeService, RequestContext, UserService,
};

/// A complete, isolated service set.
pub struct Harness {
    pub stores: Stores,
    pub users: Arc<UserService>,
    pub ingredients: Arc<IngredientService>,
    pub recipes: Arc<RecipeService>,
    pub access: Arc<AccessEvaluator>,
    pub registry: Arc<InviteLinkRegistry>,
    pub facade: Arc<RecipeAccessFacade>,
    pub invitations: Arc<InvitationService>,
}

impl Harness {
    pub fn new() -> Self {
        let stores = Stores::memory(MemoryStore::new());
        let users = Arc::new(UserService::new(stores.users.clone()));
        let access = Arc::new(AccessEvaluator::new(stores.invite_links.clone()));
        let ingredients = Arc::new(IngredientService::new(
            stores.ingredients.clone(),
            stores.recipes.clone(),
            access.clone(),
        ));
        let recipes = Arc::new(RecipeService::new(
            stores.recipes.clone(),
            stores.ingredients.clone(),
        ));
        let registry = Arc::new(InviteLinkRegistry::new(
            stores.invite_links.clone(),
            stores.recipes.clone(),
            users.clone(),
        ));
        let facade = Arc::new(RecipeAccessFacade::new(recipes.clone(), access.clone()));
        let invitations = Arc::new(InvitationService::new(
            stores.invitations.clone(),
            stores.recipes.clone(),
        ));

        Self {
            stores,
            users,
            ingredients,
            recipes,
            access,
            registry,
            facade,
            invitations,
        }
    }

    /// A caller with a stored profile.
    pub async fn user(&self, id: &str) -> RequestContext {
        let ctx = RequestContext::new(id).with_profile(UpsertUser {
            first_name: id.to_uppercase(),
            last_name: "Tester".into(),
            email: format!("{id}@example.com"),
            avatar: String::new(),
        });
        self.users
            .register(&ctx, UpsertUser::default())
            .await
            .unwrap();
        ctx
    }

    pub async fn ingredient(&self, ctx: &RequestContext, name: &str) -> IngredientId {
        self.ingredients
            .create(ctx, CreateIngredient { name: name.into() })
            .await
            .unwrap()
            .id
    }

    /// A recipe with one line of 100 g of a fresh ingredient.
    pub async fn recipe(&self, ctx: &RequestContext, name: &str) -> Recipe {
        let ingredient = self.ingredient(ctx, &format!("{name} base")).await;
        self.recipes
            .create(ctx, draft(name, vec![line(ingredient, 100.0)]))
            .await
            .unwrap()
    }
}

pub fn line(id: IngredientId, quantity: f64) -> IngredientLine {
    IngredientLine {
        id,
        quantity,
        unit: Unit::Gram,
    }
}

pub fn draft(name: &str, ingredients: Vec<IngredientLine>) -> RecipeDraft {
    RecipeDraft {
        name: name.into(),
        note: None,
        ingredients,
    }
}

pub fn uid(id: &str) -> UserId {
    UserId::new(id)
}
