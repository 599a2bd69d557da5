//! Forum resource routes.

use crate::handlers::forum::{create, show};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn forum_routes(state: AppState) -> Router {
    Router::new()
        .route("/forums", post(create))
        .route("/forums/:id", get(show))
        .with_state(state)
}
