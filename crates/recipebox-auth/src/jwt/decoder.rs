//! Bearer token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use recipebox_core::config::auth::AuthConfig;
use recipebox_core::error::AppError;

use super::claims::Claims;

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AppError> {
    let header =
        header.ok_or_else(|| AppError::unauthenticated("Missing authorization header"))?;
    let token = header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
        .map(str::trim)
        .ok_or_else(|| AppError::unauthenticated("Authorization header must use Bearer"))?;
    if token.is_empty() {
        return Err(AppError::unauthenticated("Empty bearer token"));
    }
    Ok(token)
}

/// Verifies HS256 tokens against the configured secret and issuer.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Verify `token` and return its claims.
    ///
    /// Every failure maps to `Unauthenticated`; the cause is logged at
    /// debug level only.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            debug!(error = %e, "Rejected bearer token");
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthenticated("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::unauthenticated("Invalid token signature")
                }
                jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                    AppError::unauthenticated("Unexpected token issuer")
                }
                _ => AppError::unauthenticated("Invalid token"),
            }
        })?;

        if data.claims.sub.trim().is_empty() {
            return Err(AppError::unauthenticated("Token has no subject"));
        }
        Ok(data.claims)
    }

    /// Resolve the caller from a raw `Authorization` header value.
    pub fn authenticate(&self, header: Option<&str>) -> Result<Claims, AppError> {
        self.decode(bearer_token(header)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use recipebox_core::error::ErrorKind;
    use recipebox_core::types::UserId;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".into(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn bearer_header_parsing() {
        assert_eq!(bearer_token(Some("Bearer abc")).unwrap(), "abc");
        assert!(bearer_token(None).is_err());
        assert!(bearer_token(Some("Basic abc")).is_err());
        assert!(bearer_token(Some("Bearer   ")).is_err());
    }

    #[test]
    fn issued_tokens_resolve_to_their_subject() {
        let token = JwtEncoder::new(&config())
            .issue(&UserId::new("user_a"), Default::default())
            .unwrap()
            .0;
        let claims = JwtDecoder::new(&config())
            .authenticate(Some(&format!("Bearer {token}")))
            .unwrap();
        assert_eq!(claims.user_id(), UserId::new("user_a"));
    }

    #[test]
    fn foreign_secrets_and_issuers_are_rejected() {
        let token = JwtEncoder::new(&config())
            .issue(&UserId::new("user_a"), Default::default())
            .unwrap()
            .0;

        let other_secret = AuthConfig {
            jwt_secret: "other".into(),
            ..config()
        };
        let err = JwtDecoder::new(&other_secret).decode(&token).unwrap_err();
        assert!(err.is(ErrorKind::Unauthenticated));

        let other_issuer = AuthConfig {
            issuer: "elsewhere".into(),
            ..config()
        };
        assert!(JwtDecoder::new(&other_issuer).decode(&token).is_err());
        assert!(JwtDecoder::new(&config()).decode("garbage").is_err());
    }
}
