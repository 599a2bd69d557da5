//! Standard response envelope helpers.

use axum::{
    http::{header, StatusCode},
    Json,
};
use serde::Serialize;

/// Body of every successful forum response: `{"forum": ...}`.
#[derive(Serialize)]
pub struct ForumEnvelope<T> {
    pub forum: T,
}

pub fn created<T: Serialize>(
    location: String,
    forum: T,
) -> (StatusCode, [(header::HeaderName, String); 1], Json<ForumEnvelope<T>>) {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ForumEnvelope { forum }),
    )
}

pub fn ok<T: Serialize>(forum: T) -> (StatusCode, Json<ForumEnvelope<T>>) {
    (StatusCode::OK, Json(ForumEnvelope { forum }))
}
