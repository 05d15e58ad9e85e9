//! Invite-link sharing: the link registry and the read-access evaluator.

pub mod access;
pub mod registry;

pub use access::{AccessDecision, AccessEvaluator, DenyReason};
pub use registry::{AcceptOutcome, InviteLinkRegistry};
