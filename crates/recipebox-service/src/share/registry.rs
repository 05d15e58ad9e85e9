//! Invite link registry: creation, lookup, and roster changes.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use recipebox_core::error::AppError;
use recipebox_core::result::AppResult;
use recipebox_core::types::{InviteLinkId, RecipeId, UserId};
use recipebox_database::store::{InviteLinkStore, RecipeStore};
use recipebox_entity::invite_link::{InviteLink, InvitedUser, RosterInsert, SharedInviteLink};

use crate::context::RequestContext;
use crate::user::UserService;

/// What accepting an invite link did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptOutcome {
    /// The caller was added to the roster.
    Joined,
    /// The caller already had active access.
    AlreadyMember,
    /// The caller created the link; owners are never put on the roster.
    Owner,
}

/// Owns invite links and their rosters.
#[derive(Debug, Clone)]
pub struct InviteLinkRegistry {
    links: Arc<dyn InviteLinkStore>,
    recipes: Arc<dyn RecipeStore>,
    users: Arc<UserService>,
}

impl InviteLinkRegistry {
    /// Creates a new invite link registry.
    pub fn new(
        links: Arc<dyn InviteLinkStore>,
        recipes: Arc<dyn RecipeStore>,
        users: Arc<UserService>,
    ) -> Self {
        Self {
            links,
            recipes,
            users,
        }
    }

    /// Return the invite link of a recipe the caller owns, creating it on
    /// first use. The flag is `true` when this call created the link.
    pub async fn create_or_get(
        &self,
        ctx: &RequestContext,
        recipe_id: RecipeId,
    ) -> AppResult<(InviteLink, bool)> {
        let recipe = self
            .recipes
            .find(recipe_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id} not found")))?;
        if !recipe.is_owned_by(&ctx.user_id) {
            return Err(AppError::forbidden("Only the recipe owner can share it"));
        }

        let (link, created) = self
            .links
            .create_or_get(recipe_id, &ctx.user_id, Utc::now())
            .await?;

        if created {
            info!(
                user_id = %ctx.user_id,
                recipe_id = %recipe_id,
                invite_link_id = %link.id,
                "Invite link created"
            );
        }
        Ok((link, created))
    }

    /// Join the roster of `id` as the caller.
    ///
    /// A revoked caller stays revoked: only the owner can restore access.
    pub async fn accept(&self, ctx: &RequestContext, id: InviteLinkId) -> AppResult<AcceptOutcome> {
        let link = self.find(id).await?;
        if link.is_owned_by(&ctx.user_id) {
            return Ok(AcceptOutcome::Owner);
        }

        let entry = InvitedUser::accepted(ctx.user_id.clone(), Utc::now());
        match self.links.add_invited_user(id, entry).await? {
            RosterInsert::Inserted => {
                info!(user_id = %ctx.user_id, invite_link_id = %id, "Invite link accepted");
                Ok(AcceptOutcome::Joined)
            }
            RosterInsert::AlreadyActive => Ok(AcceptOutcome::AlreadyMember),
            RosterInsert::Revoked => Err(AppError::access_revoked(
                "Your access to this invite link has been revoked",
            )),
        }
    }

    /// Withdraw `target`'s access. Owner only.
    pub async fn revoke(
        &self,
        ctx: &RequestContext,
        id: InviteLinkId,
        target: &UserId,
    ) -> AppResult<()> {
        self.set_revoked(ctx, id, target, true).await?;
        info!(
            user_id = %ctx.user_id,
            invite_link_id = %id,
            target_user_id = %target,
            "Invite link access revoked"
        );
        Ok(())
    }

    /// Give `target` their access back. Owner only.
    pub async fn restore(
        &self,
        ctx: &RequestContext,
        id: InviteLinkId,
        target: &UserId,
    ) -> AppResult<()> {
        self.set_revoked(ctx, id, target, false).await?;
        info!(
            user_id = %ctx.user_id,
            invite_link_id = %id,
            target_user_id = %target,
            "Invite link access restored"
        );
        Ok(())
    }

    /// Links on which `user_id` has active access, with creator profiles.
    ///
    /// Callers may only list their own shared links.
    pub async fn list_shared_with(
        &self,
        ctx: &RequestContext,
        user_id: &UserId,
    ) -> AppResult<Vec<SharedInviteLink>> {
        if user_id.is_blank() {
            return Err(AppError::validation("User ID is required"));
        }
        if !ctx.is(user_id) {
            return Err(AppError::forbidden(
                "You can only list invite links shared with yourself",
            ));
        }

        let links = self.links.list_shared_with(user_id).await?;
        let mut shared = Vec::with_capacity(links.len());
        for link in links {
            let creator = self.users.referenced_profile(&link.created_by).await?;
            shared.push(SharedInviteLink { link, creator });
        }
        Ok(shared)
    }

    /// Links the caller created.
    pub async fn list_mine(&self, ctx: &RequestContext) -> AppResult<Vec<InviteLink>> {
        self.links.list_by_creator(&ctx.user_id).await
    }

    /// Fetch a link for display.
    ///
    /// Any authenticated caller may look a link up before accepting it;
    /// only the owner sees the full roster, everyone else sees at most
    /// their own entry.
    pub async fn get(&self, ctx: &RequestContext, id: InviteLinkId) -> AppResult<InviteLink> {
        let mut link = self.find(id).await?;
        if !link.is_owned_by(&ctx.user_id) {
            link.invited_users.retain(|u| u.user_id == ctx.user_id);
        }
        Ok(link)
    }

    async fn find(&self, id: InviteLinkId) -> AppResult<InviteLink> {
        self.links
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Invite link {id} not found")))
    }

    async fn set_revoked(
        &self,
        ctx: &RequestContext,
        id: InviteLinkId,
        target: &UserId,
        revoked: bool,
    ) -> AppResult<()> {
        if target.is_blank() {
            return Err(AppError::validation("User ID is required"));
        }
        let link = self.find(id).await?;
        if !link.is_owned_by(&ctx.user_id) {
            return Err(AppError::forbidden(
                "Only the invite link owner can change access",
            ));
        }
        if !self.links.set_access_revoked(id, target, revoked).await? {
            return Err(AppError::not_found(format!(
                "User {target} is not on this invite link"
            )));
        }
        Ok(())
    }
}
