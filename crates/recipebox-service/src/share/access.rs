//! Read-access decisions for recipes.
//!
//! The owner always reads their own recipes. Anyone else needs an active
//! entry on an invite link created by that owner. Decisions never mutate
//! anything.

use std::sync::Arc;

use recipebox_core::result::AppResult;
use recipebox_core::types::{RecipeId, UserId};
use recipebox_database::store::InviteLinkStore;
use recipebox_entity::invite_link::InviteLink;

/// Why a read was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The owner has not shared anything through an invite link.
    NoInviteLink,
    /// A link exists but the caller never accepted it.
    NotInvited,
    /// The caller accepted and the owner later revoked access.
    AccessRevoked,
}

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny(DenyReason),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// The refusal reason, or `None` when allowed.
    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Self::Allow => None,
            Self::Deny(reason) => Some(*reason),
        }
    }
}

/// Decide from one link's roster.
pub fn decide(link: &InviteLink, caller: &UserId) -> AccessDecision {
    match link.entry_for(caller) {
        None => AccessDecision::Deny(DenyReason::NotInvited),
        Some(entry) if entry.access_revoked => AccessDecision::Deny(DenyReason::AccessRevoked),
        Some(_) => AccessDecision::Allow,
    }
}

/// Decide across several links of the same owner.
///
/// Any active entry allows. Otherwise a revoked entry outranks absence so
/// that the logged reason tells the owner's revocation apart.
pub fn decide_any<'a>(
    links: impl IntoIterator<Item = &'a InviteLink>,
    caller: &UserId,
) -> AccessDecision {
    let mut seen_link = false;
    let mut revoked = false;
    for link in links {
        seen_link = true;
        match decide(link, caller) {
            AccessDecision::Allow => return AccessDecision::Allow,
            AccessDecision::Deny(DenyReason::AccessRevoked) => revoked = true,
            AccessDecision::Deny(_) => {}
        }
    }
    match (seen_link, revoked) {
        (false, _) => AccessDecision::Deny(DenyReason::NoInviteLink),
        (true, true) => AccessDecision::Deny(DenyReason::AccessRevoked),
        (true, false) => AccessDecision::Deny(DenyReason::NotInvited),
    }
}

/// Evaluates read access against the invite-link store.
#[derive(Debug, Clone)]
pub struct AccessEvaluator {
    links: Arc<dyn InviteLinkStore>,
}

impl AccessEvaluator {
    /// Creates a new access evaluator.
    pub fn new(links: Arc<dyn InviteLinkStore>) -> Self {
        Self { links }
    }

    /// May `caller` read `recipe_id`, owned by `owner`?
    ///
    /// The link is looked up by recipe id. A link for that recipe that was
    /// created by someone other than `owner` is ignored.
    pub async fn can_read(
        &self,
        caller: &UserId,
        owner: &UserId,
        recipe_id: RecipeId,
    ) -> AppResult<AccessDecision> {
        if caller == owner {
            return Ok(AccessDecision::Allow);
        }
        match self.links.find_by_recipe(recipe_id).await? {
            Some(link) if link.is_owned_by(owner) => Ok(decide(&link, caller)),
            _ => Ok(AccessDecision::Deny(DenyReason::NoInviteLink)),
        }
    }

    /// May `caller` read the whole recipe book of `owner`?
    ///
    /// Access is granted at owner granularity: an active entry on any of
    /// the owner's links opens every recipe the owner has.
    pub async fn can_read_book(&self, caller: &UserId, owner: &UserId) -> AppResult<AccessDecision> {
        if caller == owner {
            return Ok(AccessDecision::Allow);
        }
        let links = self.links.list_by_creator(owner).await?;
        Ok(decide_any(&links, caller))
    }
}
