//! # recipebox-database
//!
//! The document store behind RecipeBox. Services depend only on the traits
//! in [`store`]; [`provider::Stores`] picks the PostgreSQL repositories or
//! the in-memory store according to `database.provider`.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use provider::Stores;
pub use store::{IngredientStore, InvitationStore, InviteLinkStore, RecipeStore, UserStore};
