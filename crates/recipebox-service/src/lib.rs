//! # recipebox-service
//!
//! Business logic service layer for RecipeBox. Each service orchestrates
//! the store traits from `recipebox-database` to implement one group of
//! use cases.
//!
//! Services take their dependencies as `Arc` references at construction
//! time. Independent service sets (one per test, one per server) never
//! share state.
//!
//! The read path for recipes is [`RecipeAccessFacade`]: it consults the
//! [`AccessEvaluator`], which in turn reads invite-link rosters owned by the
//! [`InviteLinkRegistry`].

pub mod context;
pub mod ingredient;
pub mod invitation;
pub mod recipe;
pub mod share;
pub mod user;

pub use context::RequestContext;
pub use ingredient::IngredientService;
pub use invitation::InvitationService;
pub use recipe::{RecipeAccessFacade, RecipeService};
pub use share::{AccessDecision, AccessEvaluator, AcceptOutcome, DenyReason, InviteLinkRegistry};
pub use user::UserService;
