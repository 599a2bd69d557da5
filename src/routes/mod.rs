//! Router assembly.

mod common;
mod forum;
pub use common::common_routes;
pub use forum::forum_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Bodies above this size fail to decode and are answered with a 400 envelope.
pub const MAX_BODY_BYTES: usize = 1_048_576;

/// Full application router: common routes, forum routes, body limit and request tracing.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(forum_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
}
