//! Direct recipe invitations, kept for clients that predate invite links.
//!
//! Invitations grant no read access; the access evaluator only consults
//! invite links.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use recipebox_core::error::AppError;
use recipebox_core::result::AppResult;
use recipebox_core::types::{InvitationId, RecipeId};
use recipebox_database::store::{InvitationStore, RecipeStore};
use recipebox_entity::invitation::{Invitation, InvitationStatus};

use crate::context::RequestContext;

/// Manages legacy invitations.
#[derive(Debug, Clone)]
pub struct InvitationService {
    invitations: Arc<dyn InvitationStore>,
    recipes: Arc<dyn RecipeStore>,
}

impl InvitationService {
    /// Creates a new invitation service.
    pub fn new(invitations: Arc<dyn InvitationStore>, recipes: Arc<dyn RecipeStore>) -> Self {
        Self {
            invitations,
            recipes,
        }
    }

    /// Invitations sent by the caller.
    pub async fn list_mine(&self, ctx: &RequestContext) -> AppResult<Vec<Invitation>> {
        self.invitations.list_by_inviter(&ctx.user_id).await
    }

    /// Return the caller's invitation for `recipe_id`, creating a pending
    /// one on first use. The flag is `true` when created.
    pub async fn create_or_get(
        &self,
        ctx: &RequestContext,
        recipe_id: RecipeId,
    ) -> AppResult<(Invitation, bool)> {
        if self.recipes.find(recipe_id).await?.is_none() {
            return Err(AppError::not_found(format!("Recipe {recipe_id} not found")));
        }

        let (invitation, created) = self
            .invitations
            .create_or_get(&ctx.user_id, recipe_id, Utc::now())
            .await?;
        if created {
            info!(
                user_id = %ctx.user_id,
                recipe_id = %recipe_id,
                invitation_id = %invitation.id,
                "Invitation created"
            );
        }
        Ok((invitation, created))
    }

    /// Accept or decline a pending invitation.
    pub async fn respond(
        &self,
        ctx: &RequestContext,
        id: InvitationId,
        status: InvitationStatus,
    ) -> AppResult<Invitation> {
        if status == InvitationStatus::Pending {
            return Err(AppError::validation(
                "Status must be either accepted or declined",
            ));
        }
        let current = self.find_own(ctx, id).await?;
        if current.status.is_terminal() {
            return Err(AppError::conflict(format!(
                "Invitation is already {}",
                current.status
            )));
        }

        let updated = self
            .invitations
            .resolve(id, status)
            .await?
            .ok_or_else(|| AppError::conflict("Invitation was resolved concurrently"))?;

        info!(
            user_id = %ctx.user_id,
            invitation_id = %id,
            status = %status,
            "Invitation resolved"
        );
        Ok(updated)
    }

    /// Remove one of the caller's invitations.
    pub async fn delete(&self, ctx: &RequestContext, id: InvitationId) -> AppResult<()> {
        self.find_own(ctx, id).await?;
        if !self.invitations.delete(id).await? {
            return Err(AppError::not_found(format!("Invitation {id} not found")));
        }
        info!(user_id = %ctx.user_id, invitation_id = %id, "Invitation removed");
        Ok(())
    }

    async fn find_own(&self, ctx: &RequestContext, id: InvitationId) -> AppResult<Invitation> {
        let invitation = self
            .invitations
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Invitation {id} not found")))?;
        if !ctx.is(&invitation.invited_by) {
            return Err(AppError::forbidden("Permission denied"));
        }
        Ok(invitation)
    }
}
