//! Request DTOs with validation.
//!
//! Length and range rules that depend on trimming live on the entity
//! drafts; the checks here reject obviously malformed bodies early.

use serde::{Deserialize, Serialize};
use validator::Validate;

use recipebox_core::types::{RecipeId, UserId};
use recipebox_entity::ingredient::CreateIngredient;
use recipebox_entity::invitation::InvitationStatus;
use recipebox_entity::recipe::{IngredientLine, RecipeDraft};
use recipebox_entity::user::UpsertUser;

/// Profile fields supplied on first visit. Blank fields fall back to the
/// token's profile claims.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[serde(default)]
    #[validate(length(max = 100, message = "First name is too long"))]
    pub first_name: Option<String>,
    #[serde(default)]
    #[validate(length(max = 100, message = "Last name is too long"))]
    pub last_name: Option<String>,
    #[serde(default)]
    #[validate(length(max = 254, message = "Email is too long"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(max = 2048, message = "Avatar URL is too long"))]
    pub avatar: Option<String>,
}

impl From<RegisterUserRequest> for UpsertUser {
    fn from(req: RegisterUserRequest) -> Self {
        Self {
            first_name: req.first_name.unwrap_or_default(),
            last_name: req.last_name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            avatar: req.avatar.unwrap_or_default(),
        }
    }
}

/// Create or rename an ingredient.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IngredientRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

impl From<IngredientRequest> for CreateIngredient {
    fn from(req: IngredientRequest) -> Self {
        Self { name: req.name }
    }
}

/// Create or replace a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub note: Option<String>,
    #[validate(length(min = 1, message = "At least one ingredient is required"))]
    pub ingredients: Vec<IngredientLine>,
}

impl From<RecipeRequest> for RecipeDraft {
    fn from(req: RecipeRequest) -> Self {
        Self {
            name: req.name,
            note: req.note,
            ingredients: req.ingredients,
        }
    }
}

/// `POST /inviteLinks` and `POST /invitations` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRefRequest {
    pub recipe_id: RecipeId,
}

/// `PATCH /invitations/{id}` body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RespondInvitationRequest {
    pub status: InvitationStatus,
}

/// `?userId=&search=` on the recipe list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeListQuery {
    pub user_id: Option<UserId>,
    pub search: Option<String>,
}

/// `?userId=` on roster and shared-link endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: Option<UserId>,
}

impl UserIdQuery {
    /// The user id, or a validation error when missing or blank.
    pub fn require(self) -> recipebox_core::AppResult<UserId> {
        self.user_id
            .filter(|id| !id.is_blank())
            .ok_or_else(|| recipebox_core::AppError::validation("User ID is required"))
    }
}
