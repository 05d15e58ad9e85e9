//! Store traits consumed by the service layer.
//!
//! Every mutation is a single-statement or single-entry operation. Roster
//! changes are keyed by `(invite link, user)` and never rewrite the whole
//! roster.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use recipebox_core::result::AppResult;
use recipebox_core::types::{IngredientId, InvitationId, InviteLinkId, RecipeId, UserId};
use recipebox_entity::ingredient::Ingredient;
use recipebox_entity::invitation::{Invitation, InvitationStatus};
use recipebox_entity::invite_link::{InviteLink, InvitedUser, RosterInsert};
use recipebox_entity::recipe::{Recipe, RecipeDraft};
use recipebox_entity::user::User;

/// User directory.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert `user` unless a profile with the same id exists.
    ///
    /// Returns the stored profile and `true` if it was inserted.
    async fn insert_if_absent(&self, user: User) -> AppResult<(User, bool)>;

    /// Look up one profile.
    async fn find(&self, user_id: &UserId) -> AppResult<Option<User>>;

    /// Every stored profile, oldest first.
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Ingredient documents.
#[async_trait]
pub trait IngredientStore: Send + Sync + std::fmt::Debug + 'static {
    async fn insert(&self, ingredient: Ingredient) -> AppResult<Ingredient>;

    async fn find(&self, id: IngredientId) -> AppResult<Option<Ingredient>>;

    /// Fetch every ingredient whose id is in `ids`. Missing ids are skipped.
    async fn find_many(&self, ids: &[IngredientId]) -> AppResult<Vec<Ingredient>>;

    async fn list_by_creator(&self, user_id: &UserId) -> AppResult<Vec<Ingredient>>;

    /// Rename an ingredient. Returns `None` if it does not exist.
    async fn rename(&self, id: IngredientId, name: &str) -> AppResult<Option<Ingredient>>;

    /// Returns `true` if a document was removed.
    async fn delete(&self, id: IngredientId) -> AppResult<bool>;
}

/// Recipe documents.
#[async_trait]
pub trait RecipeStore: Send + Sync + std::fmt::Debug + 'static {
    async fn insert(&self, recipe: Recipe) -> AppResult<Recipe>;

    async fn find(&self, id: RecipeId) -> AppResult<Option<Recipe>>;

    /// Every recipe with `created_by == user_id`, in no particular order.
    async fn list_by_creator(&self, user_id: &UserId) -> AppResult<Vec<Recipe>>;

    /// Replace the owner-editable content. Returns `None` if absent.
    async fn update(
        &self,
        id: RecipeId,
        draft: &RecipeDraft,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Option<Recipe>>;

    /// Returns `true` if a document was removed.
    async fn delete(&self, id: RecipeId) -> AppResult<bool>;

    /// Whether any recipe has a line referencing `ingredient_id`.
    async fn any_references(&self, ingredient_id: IngredientId) -> AppResult<bool>;
}

/// Invite links and their rosters.
#[async_trait]
pub trait InviteLinkStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the link for `recipe_id`, creating it if none exists.
    ///
    /// Concurrent callers for the same recipe observe the same link. The
    /// flag is `true` only for the caller whose insert won.
    async fn create_or_get(
        &self,
        recipe_id: RecipeId,
        created_by: &UserId,
        now: DateTime<Utc>,
    ) -> AppResult<(InviteLink, bool)>;

    /// Look up a link with its roster.
    async fn find(&self, id: InviteLinkId) -> AppResult<Option<InviteLink>>;

    /// Look up the link of a recipe with its roster.
    async fn find_by_recipe(&self, recipe_id: RecipeId) -> AppResult<Option<InviteLink>>;

    /// Links created by `user_id`, with rosters, oldest first.
    async fn list_by_creator(&self, user_id: &UserId) -> AppResult<Vec<InviteLink>>;

    /// Links whose roster holds an active entry for `user_id`, oldest first.
    async fn list_shared_with(&self, user_id: &UserId) -> AppResult<Vec<InviteLink>>;

    /// Add `entry` keyed by its user id. Existing entries are left alone.
    ///
    /// Fails with `NotFound` if the link does not exist.
    async fn add_invited_user(&self, id: InviteLinkId, entry: InvitedUser)
    -> AppResult<RosterInsert>;

    /// Set `access_revoked` on one roster entry.
    ///
    /// Returns `false` if the link or the entry does not exist.
    async fn set_access_revoked(
        &self,
        id: InviteLinkId,
        user_id: &UserId,
        revoked: bool,
    ) -> AppResult<bool>;
}

/// Legacy direct invitations.
#[async_trait]
pub trait InvitationStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the invitation for `(invited_by, recipe_id)`, creating a
    /// pending one if none exists. The flag is `true` when created.
    async fn create_or_get(
        &self,
        invited_by: &UserId,
        recipe_id: RecipeId,
        now: DateTime<Utc>,
    ) -> AppResult<(Invitation, bool)>;

    async fn find(&self, id: InvitationId) -> AppResult<Option<Invitation>>;

    async fn list_by_inviter(&self, user_id: &UserId) -> AppResult<Vec<Invitation>>;

    /// Move a pending invitation to `status`.
    ///
    /// Returns `None` if the invitation is missing or no longer pending.
    async fn resolve(
        &self,
        id: InvitationId,
        status: InvitationStatus,
    ) -> AppResult<Option<Invitation>>;

    /// Returns `true` if a document was removed.
    async fn delete(&self, id: InvitationId) -> AppResult<bool>;
}
