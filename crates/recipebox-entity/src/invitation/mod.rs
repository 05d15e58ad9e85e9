//! Legacy direct-invitation entities.
//!
//! Superseded by invite links and kept for API compatibility.

pub mod model;
pub mod status;

pub use model::Invitation;
pub use status::InvitationStatus;
