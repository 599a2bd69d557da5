//! Extract a positive integer id from the `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// A parsed `:id` path segment, always `>= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForumId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ForumId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;
        read_id_param(&raw).map(ForumId)
    }
}

/// Non-numeric, zero and negative ids are reported as not found.
pub fn read_id_param(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id >= 1)
        .ok_or(AppError::NotFound)
}
