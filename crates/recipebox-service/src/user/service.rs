//! User profile registration and directory lookups.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use recipebox_core::error::AppError;
use recipebox_core::result::AppResult;
use recipebox_core::types::UserId;
use recipebox_database::store::UserStore;
use recipebox_entity::user::{UpsertUser, User, UserProfile};

use crate::context::RequestContext;

/// Stores profiles on first visit and serves the user directory.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Store the caller's profile unless one exists already.
    ///
    /// Non-blank fields in `supplied` take precedence over the token's
    /// profile claims. An existing profile is returned unchanged.
    pub async fn register(
        &self,
        ctx: &RequestContext,
        supplied: UpsertUser,
    ) -> AppResult<(User, bool)> {
        let pick = |given: String, fallback: &str| {
            if given.trim().is_empty() {
                fallback.trim().to_string()
            } else {
                given.trim().to_string()
            }
        };
        let claims = &ctx.profile;
        let data = UpsertUser {
            first_name: pick(supplied.first_name, &claims.first_name),
            last_name: pick(supplied.last_name, &claims.last_name),
            email: pick(supplied.email, &claims.email),
            avatar: pick(supplied.avatar, &claims.avatar),
        };

        let (user, created) = self
            .users
            .insert_if_absent(data.into_user(ctx.user_id.clone(), Utc::now()))
            .await?;

        if created {
            info!(user_id = %user.user_id, "User profile stored");
        }
        Ok((user, created))
    }

    /// Fetch one profile.
    pub async fn get(&self, user_id: &UserId) -> AppResult<User> {
        self.users
            .find(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }

    /// Every stored profile.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    /// Public profile of a user referenced by another document.
    ///
    /// A missing profile here means a dangling reference, not a bad request.
    pub async fn referenced_profile(&self, user_id: &UserId) -> AppResult<UserProfile> {
        match self.users.find(user_id).await? {
            Some(user) => Ok(user.profile()),
            None => {
                error!(user_id = %user_id, "Referenced user profile does not exist");
                Err(AppError::data_integrity(format!(
                    "Referenced user {user_id} has no profile"
                )))
            }
        }
    }
}
