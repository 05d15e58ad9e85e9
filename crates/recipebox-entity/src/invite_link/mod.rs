//! Invite link domain entities.

pub mod model;
pub mod roster;

pub use model::{InviteLink, SharedInviteLink};
pub use roster::{InvitedUser, RosterInsert};
