//! Route handlers organized by domain.

pub mod health;
pub mod ingredients;
pub mod invitations;
pub mod invite_links;
pub mod recipes;
pub mod users;
