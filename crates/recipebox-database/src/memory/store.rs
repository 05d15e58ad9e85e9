//! In-memory implementation of every store trait, built on dashmap.
//!
//! Roster mutations take the per-entry write lock of the link they touch,
//! and create-or-get claims the recipe slot through `DashMap::entry`, so
//! concurrent callers behave like the PostgreSQL constraints.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use recipebox_core::error::AppError;
use recipebox_core::result::AppResult;
use recipebox_core::types::{IngredientId, InvitationId, InviteLinkId, RecipeId, UserId};
use recipebox_entity::ingredient::Ingredient;
use recipebox_entity::invitation::{Invitation, InvitationStatus};
use recipebox_entity::invite_link::{InviteLink, InvitedUser, RosterInsert};
use recipebox_entity::recipe::{Recipe, RecipeDraft};
use recipebox_entity::user::User;

use crate::store::{IngredientStore, InvitationStore, InviteLinkStore, RecipeStore, UserStore};

/// Process-local document store. Cloning shares the underlying maps.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    users: Arc<DashMap<UserId, User>>,
    ingredients: Arc<DashMap<IngredientId, Ingredient>>,
    recipes: Arc<DashMap<RecipeId, Recipe>>,
    invite_links: Arc<DashMap<InviteLinkId, InviteLink>>,
    link_by_recipe: Arc<DashMap<RecipeId, InviteLinkId>>,
    invitations: Arc<DashMap<InvitationId, Invitation>>,
    invitation_by_pair: Arc<DashMap<(UserId, RecipeId), InvitationId>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Collect values matching `keep`, sorted by `key`.
fn collect_sorted<K, V, F, S>(map: &DashMap<K, V>, keep: F, key: S) -> Vec<V>
where
    K: Eq + std::hash::Hash,
    V: Clone,
    F: Fn(&V) -> bool,
    S: FnMut(&V, &V) -> std::cmp::Ordering,
{
    let mut out: Vec<V> = map
        .iter()
        .filter(|e| keep(e.value()))
        .map(|e| e.value().clone())
        .collect();
    out.sort_by(key);
    out
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_if_absent(&self, user: User) -> AppResult<(User, bool)> {
        match self.users.entry(user.user_id.clone()) {
            Entry::Occupied(existing) => Ok((existing.get().clone(), false)),
            Entry::Vacant(slot) => Ok((slot.insert(user).clone(), true)),
        }
    }

    async fn find(&self, user_id: &UserId) -> AppResult<Option<User>> {
        Ok(self.users.get(user_id).map(|u| u.clone()))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(collect_sorted(&self.users, |_| true, |a, b| {
            (a.created_at, &a.user_id).cmp(&(b.created_at, &b.user_id))
        }))
    }
}

#[async_trait]
impl IngredientStore for MemoryStore {
    async fn insert(&self, ingredient: Ingredient) -> AppResult<Ingredient> {
        self.ingredients.insert(ingredient.id, ingredient.clone());
        Ok(ingredient)
    }

    async fn find(&self, id: IngredientId) -> AppResult<Option<Ingredient>> {
        Ok(self.ingredients.get(&id).map(|i| i.clone()))
    }

    async fn find_many(&self, ids: &[IngredientId]) -> AppResult<Vec<Ingredient>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.ingredients.get(id).map(|i| i.clone()))
            .collect())
    }

    async fn list_by_creator(&self, user_id: &UserId) -> AppResult<Vec<Ingredient>> {
        Ok(collect_sorted(
            &self.ingredients,
            |i| &i.created_by == user_id,
            |a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)),
        ))
    }

    async fn rename(&self, id: IngredientId, name: &str) -> AppResult<Option<Ingredient>> {
        Ok(self.ingredients.get_mut(&id).map(|mut i| {
            i.name = name.to_string();
            i.clone()
        }))
    }

    async fn delete(&self, id: IngredientId) -> AppResult<bool> {
        Ok(self.ingredients.remove(&id).is_some())
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn insert(&self, recipe: Recipe) -> AppResult<Recipe> {
        self.recipes.insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    async fn find(&self, id: RecipeId) -> AppResult<Option<Recipe>> {
        Ok(self.recipes.get(&id).map(|r| r.clone()))
    }

    async fn list_by_creator(&self, user_id: &UserId) -> AppResult<Vec<Recipe>> {
        Ok(self
            .recipes
            .iter()
            .filter(|r| &r.created_by == user_id)
            .map(|r| r.value().clone())
            .collect())
    }

    async fn update(
        &self,
        id: RecipeId,
        draft: &RecipeDraft,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Option<Recipe>> {
        Ok(self.recipes.get_mut(&id).map(|mut r| {
            r.name = draft.name.clone();
            r.note = draft.note.clone();
            r.ingredients = draft.ingredients.clone();
            r.updated_at = updated_at;
            r.clone()
        }))
    }

    async fn delete(&self, id: RecipeId) -> AppResult<bool> {
        Ok(self.recipes.remove(&id).is_some())
    }

    async fn any_references(&self, ingredient_id: IngredientId) -> AppResult<bool> {
        Ok(self
            .recipes
            .iter()
            .any(|r| r.ingredients.iter().any(|line| line.id == ingredient_id)))
    }
}

#[async_trait]
impl InviteLinkStore for MemoryStore {
    async fn create_or_get(
        &self,
        recipe_id: RecipeId,
        created_by: &UserId,
        now: DateTime<Utc>,
    ) -> AppResult<(InviteLink, bool)> {
        match self.link_by_recipe.entry(recipe_id) {
            Entry::Occupied(slot) => {
                let id = *slot.get();
                let link = self.invite_links.get(&id).map(|l| l.clone()).ok_or_else(|| {
                    AppError::internal(format!("Invite link index points at missing link {id}"))
                })?;
                Ok((link, false))
            }
            Entry::Vacant(slot) => {
                let link = InviteLink::new(recipe_id, created_by.clone(), now);
                self.invite_links.insert(link.id, link.clone());
                slot.insert(link.id);
                Ok((link, true))
            }
        }
    }

    async fn find(&self, id: InviteLinkId) -> AppResult<Option<InviteLink>> {
        Ok(self.invite_links.get(&id).map(|l| l.clone()))
    }

    async fn find_by_recipe(&self, recipe_id: RecipeId) -> AppResult<Option<InviteLink>> {
        let Some(id) = self.link_by_recipe.get(&recipe_id).map(|id| *id) else {
            return Ok(None);
        };
        InviteLinkStore::find(self, id).await
    }

    async fn list_by_creator(&self, user_id: &UserId) -> AppResult<Vec<InviteLink>> {
        Ok(collect_sorted(
            &self.invite_links,
            |l| &l.created_by == user_id,
            |a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)),
        ))
    }

    async fn list_shared_with(&self, user_id: &UserId) -> AppResult<Vec<InviteLink>> {
        Ok(collect_sorted(
            &self.invite_links,
            |l| l.grants_access_to(user_id),
            |a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)),
        ))
    }

    async fn add_invited_user(
        &self,
        id: InviteLinkId,
        entry: InvitedUser,
    ) -> AppResult<RosterInsert> {
        let mut link = self
            .invite_links
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Invite link {id} not found")))?;

        let outcome = match link.entry_for(&entry.user_id) {
            Some(existing) if existing.access_revoked => RosterInsert::Revoked,
            Some(_) => RosterInsert::AlreadyActive,
            None => RosterInsert::Inserted,
        };
        if outcome == RosterInsert::Inserted {
            link.invited_users.push(entry);
        }
        Ok(outcome)
    }

    async fn set_access_revoked(
        &self,
        id: InviteLinkId,
        user_id: &UserId,
        revoked: bool,
    ) -> AppResult<bool> {
        let Some(mut link) = self.invite_links.get_mut(&id) else {
            return Ok(false);
        };
        match link.invited_users.iter_mut().find(|u| &u.user_id == user_id) {
            Some(entry) => {
                entry.access_revoked = revoked;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl InvitationStore for MemoryStore {
    async fn create_or_get(
        &self,
        invited_by: &UserId,
        recipe_id: RecipeId,
        now: DateTime<Utc>,
    ) -> AppResult<(Invitation, bool)> {
        match self
            .invitation_by_pair
            .entry((invited_by.clone(), recipe_id))
        {
            Entry::Occupied(slot) => {
                let id = *slot.get();
                let invitation = self.invitations.get(&id).map(|i| i.clone()).ok_or_else(|| {
                    AppError::internal(format!("Invitation index points at missing {id}"))
                })?;
                Ok((invitation, false))
            }
            Entry::Vacant(slot) => {
                let invitation = Invitation::pending(invited_by.clone(), recipe_id, now);
                self.invitations.insert(invitation.id, invitation.clone());
                slot.insert(invitation.id);
                Ok((invitation, true))
            }
        }
    }

    async fn find(&self, id: InvitationId) -> AppResult<Option<Invitation>> {
        Ok(self.invitations.get(&id).map(|i| i.clone()))
    }

    async fn list_by_inviter(&self, user_id: &UserId) -> AppResult<Vec<Invitation>> {
        Ok(collect_sorted(
            &self.invitations,
            |i| &i.invited_by == user_id,
            |a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)),
        ))
    }

    async fn resolve(
        &self,
        id: InvitationId,
        status: InvitationStatus,
    ) -> AppResult<Option<Invitation>> {
        let Some(mut invitation) = self.invitations.get_mut(&id) else {
            return Ok(None);
        };
        if invitation.status != InvitationStatus::Pending {
            return Ok(None);
        }
        invitation.status = status;
        Ok(Some(invitation.clone()))
    }

    async fn delete(&self, id: InvitationId) -> AppResult<bool> {
        match self.invitations.remove(&id) {
            Some((_, invitation)) => {
                self.invitation_by_pair
                    .remove(&(invitation.invited_by, invitation.recipe_id));
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
