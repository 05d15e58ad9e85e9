//! PostgreSQL implementations of the store traits.

pub mod ingredient;
pub mod invitation;
pub mod invite_link;
pub mod recipe;
pub mod user;

pub use ingredient::IngredientRepository;
pub use invitation::InvitationRepository;
pub use invite_link::InviteLinkRepository;
pub use recipe::RecipeRepository;
pub use user::UserRepository;
