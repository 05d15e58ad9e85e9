//! Token minting for local development and tests.
//!
//! Production tokens come from the identity provider; this encoder signs
//! tokens with the same secret and issuer the decoder expects.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use recipebox_core::config::auth::AuthConfig;
use recipebox_core::error::AppError;
use recipebox_core::types::UserId;
use recipebox_entity::user::UpsertUser;

use super::claims::Claims;

/// Upper bound on minted token lifetime: one year.
const MAX_TTL_MINUTES: u64 = 60 * 24 * 365;

/// Creates signed HS256 identity tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    issuer: String,
    ttl_minutes: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("issuer", &self.issuer)
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.issuer.clone(),
            ttl_minutes: config.access_ttl_minutes.min(MAX_TTL_MINUTES) as i64,
        }
    }

    /// Sign a token for `user_id`, embedding any non-blank profile fields.
    pub fn issue(
        &self,
        user_id: &UserId,
        profile: UpsertUser,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = now + Duration::minutes(self.ttl_minutes);
        let non_blank = |s: String| (!s.trim().is_empty()).then_some(s);

        let claims = Claims {
            sub: user_id.as_str().to_string(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
            given_name: non_blank(profile.first_name),
            family_name: non_blank(profile.last_name),
            email: non_blank(profile.email),
            picture: non_blank(profile.avatar),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok((token, exp))
    }
}
