//! Liveness and readiness routes for the forum service.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

/// Shared body of `/health` and `/ready`.
#[derive(Serialize)]
struct ServiceStatus {
    service: &'static str,
    version: &'static str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    store: Option<&'static str>,
}

impl ServiceStatus {
    fn new(status: &'static str, store: Option<&'static str>) -> Self {
        Self {
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            status,
            store,
        }
    }
}

async fn health() -> Json<ServiceStatus> {
    Json(ServiceStatus::new("ok", None))
}

/// 503 while the forum store cannot be reached.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ServiceStatus>) {
    match state.forums.ping().await {
        Ok(()) => (StatusCode::OK, Json(ServiceStatus::new("ok", Some("ok")))),
        Err(e) => {
            tracing::warn!(error = %e, "forum store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ServiceStatus::new("degraded", Some("unavailable"))),
            )
        }
    }
}

/// GET /health (process up, with name and version) and GET /ready (store ping).
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}
