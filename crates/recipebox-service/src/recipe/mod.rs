//! Recipe persistence and the access-checked read path.

pub mod collation;
pub mod facade;
pub mod service;

pub use facade::RecipeAccessFacade;
pub use service::RecipeService;
