//! # recipebox-auth
//!
//! The identity resolver. RecipeBox does not manage credentials; it trusts
//! HS256 bearer tokens issued by the identity provider and reads the
//! caller's user id from the `sub` claim.
//!
//! ## Modules
//!
//! - `jwt`: claims, verification, and token minting for development use

pub mod jwt;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, bearer_token};
