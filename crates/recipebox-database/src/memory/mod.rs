//! In-memory store used for development and tests.

pub mod store;

pub use store::MemoryStore;
