//! Path extractor for user identifiers

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use tracing::debug;

use super::error::ApiError;
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Extractor for the `{id}` path segment, rejected with 400 when it is not a UUID
///
/// Runs on the request head, so a bad id is reported before any body is read.
#[derive(Debug, Clone, Copy)]
pub struct UserIdPath(pub UserId);

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!(reason = %rejection.body_text(), "Rejected path");
                ApiError::bad_request(rejection.body_text())
            })?;

        let id = UserId::parse(&raw).map_err(DomainError::from)?;

        Ok(Self(id))
    }
}
