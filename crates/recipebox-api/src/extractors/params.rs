//! Path and query extractors with 400 rejections.

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use recipebox_core::error::AppError;
use recipebox_core::types::InviteLinkId;

/// Typed path parameters. Unparseable ids are a `Validation` error.
#[derive(Debug, Clone)]
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|rejection| AppError::validation(rejection.body_text()))
    }
}

/// Invite link id from the path.
///
/// Links are shared as URLs, so an id that does not parse names a link
/// that cannot exist: `NotFound` rather than `Validation`.
#[derive(Debug, Clone, Copy)]
pub struct LinkPath(pub InviteLinkId);

impl<S> FromRequestParts<S> for LinkPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        raw.parse()
            .map(Self)
            .map_err(|_| AppError::not_found(format!("Invite link {raw} not found")))
    }
}

/// Typed query string. Bad parameters are a `Validation` error.
#[derive(Debug, Clone)]
pub struct AppQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for AppQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection| AppError::validation(rejection.body_text()))
    }
}
