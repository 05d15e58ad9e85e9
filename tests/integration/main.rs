//! End-to-end HTTP tests against the in-memory store.

mod helpers;

mod auth_test;
mod invitation_test;
mod invite_link_test;
mod recipe_test;
mod user_test;
