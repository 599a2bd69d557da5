//! Forum handlers: create and show.

use crate::error::AppError;
use crate::extractors::{ForumId, ReadJson};
use crate::models::{Forum, ForumInput};
use crate::response;
use crate::service::validate_forum;
use crate::state::AppState;
use crate::validator::Validator;
use axum::{extract::State, response::IntoResponse};

/// POST /forums
pub async fn create(
    State(state): State<AppState>,
    ReadJson(input): ReadJson<ForumInput>,
) -> Result<impl IntoResponse, AppError> {
    let mut forum = Forum::from(input);

    let mut v = Validator::new();
    validate_forum(&mut v, &forum);
    if !v.valid() {
        return Err(AppError::ValidationFailed(v.into_errors()));
    }

    state
        .forums
        .insert(&mut forum)
        .await
        .map_err(|e| AppError::Store(e.to_string()))?;
    let location = format!("/forums/{}", forum.id);
    Ok(response::created(location, forum))
}

/// GET /forums/:id
pub async fn show(
    State(state): State<AppState>,
    ForumId(id): ForumId,
) -> Result<impl IntoResponse, AppError> {
    let forum = state.forums.get(id).await?;
    Ok(response::ok(forum))
}
