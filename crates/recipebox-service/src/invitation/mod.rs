//! Legacy direct-invitation service.

pub mod service;

pub use service::InvitationService;
