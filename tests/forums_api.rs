//! HTTP-level tests for the forum routes against in-process stores.

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use forum_api::{app_router, AppState, Forum, ForumModel, ForumStore, MemoryForumStore, ModelError};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// A store whose backend is always down.
struct BrokenStore;

#[async_trait]
impl ForumStore for BrokenStore {
    async fn insert(&self, _forum: &mut Forum) -> Result<(), ModelError> {
        Err(ModelError::Store("connection refused".into()))
    }
    async fn get(&self, _id: i64) -> Result<Forum, ModelError> {
        Err(ModelError::Store("connection refused".into()))
    }
    async fn update(&self, _forum: &mut Forum) -> Result<(), ModelError> {
        Err(ModelError::Store("connection refused".into()))
    }
    async fn delete(&self, _id: i64) -> Result<(), ModelError> {
        Err(ModelError::Store("connection refused".into()))
    }
    async fn ping(&self) -> Result<(), ModelError> {
        Err(ModelError::Store("connection refused".into()))
    }
}

fn app_with(store: Arc<dyn ForumStore>) -> Router {
    app_router(AppState::new(ForumModel::new(store)))
}

fn app() -> Router {
    app_with(Arc::new(MemoryForumStore::new()))
}

fn valid_body() -> Value {
    json!({
        "name": "Belize Coders",
        "level": "beginner",
        "contact": "Ana Pop",
        "phone": "501-822-1234",
        "email": "ana@coders.bz",
        "website": "https://coders.bz",
        "address": "12 Hummingbird Hwy, Belmopan",
        "mode": ["in-person"]
    })
}

fn post_forum(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/forums")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, header::HeaderMap, Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let headers = res.headers().clone();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

#[tokio::test]
async fn create_returns_201_with_location_and_forum() {
    let app = app();
    let (status, headers, body) = send(&app, post_forum(valid_body().to_string())).await;

    assert_eq!(status, StatusCode::CREATED);
    let forum = &body["forum"];
    let id = forum["id"].as_i64().unwrap();
    assert!(id >= 1);
    assert_eq!(forum["version"], 1);
    assert_eq!(forum["mode"], json!(["in-person"]));
    assert!(forum.get("created_at").is_none());
    assert_eq!(headers[header::LOCATION], format!("/forums/{}", id).as_str());
}

#[tokio::test]
async fn created_forum_can_be_fetched() {
    let app = app();
    let (_, headers, created) = send(&app, post_forum(valid_body().to_string())).await;
    let location = headers[header::LOCATION].to_str().unwrap().to_string();

    let (status, _, first) = send(&app, get(&location)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["forum"], created["forum"]);

    let (_, _, second) = send(&app, get(&location)).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_mode_fails_validation() {
    let app = app();
    let mut body = valid_body();
    body["mode"] = json!([]);
    let (status, _, body) = send(&app, post_forum(body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["details"]["mode"], "must contain at least 1 entry");
}

#[tokio::test]
async fn null_or_missing_mode_must_be_provided() {
    let app = app();

    let mut body = valid_body();
    body["mode"] = Value::Null;
    let (status, _, res) = send(&app, post_forum(body.to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(res["error"]["details"]["mode"], "must be provided");

    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("mode");
    let (status, _, res) = send(&app, post_forum(body.to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = res["error"]["details"].as_object().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details["mode"], "must be provided");
}

#[tokio::test]
async fn bad_email_reports_only_email() {
    let app = app();
    let mut body = valid_body();
    body["email"] = json!("not-an-email");
    let (status, _, body) = send(&app, post_forum(body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body["error"]["details"].as_object().unwrap();
    assert_eq!(details.len(), 1);
    assert!(details.contains_key("email"));
}

#[tokio::test]
async fn every_violation_is_reported_at_once() {
    let app = app();
    let (status, _, body) = send(&app, post_forum("{}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body["error"]["details"].as_object().unwrap();
    for field in ["name", "level", "contact", "phone", "email", "website", "address", "mode"] {
        assert!(details.contains_key(field), "missing {field}");
    }
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = app();
    let (status, _, body) = send(&app, post_forum(r#"{"name": "Belize Coders","#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");

    let (status, _, _) = send(&app, post_forum(r#"{"mode": "online"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_body_is_bad_request_envelope() {
    let app = app();
    let mut body = valid_body();
    body["address"] = json!("a".repeat(2 * 1024 * 1024));
    let payload = body.to_string();
    let req = Request::builder()
        .method("POST")
        .uri("/forums")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, payload.len())
        .body(Body::from(payload))
        .unwrap();
    let (status, headers, res) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(res["error"]["code"], "bad_request");
}

#[tokio::test]
async fn client_supplied_id_is_rejected() {
    let app = app();
    let mut body = valid_body();
    body["id"] = json!(77);
    let (status, _, body) = send(&app, post_forum(body.to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn missing_forum_is_404() {
    let app = app();
    let (status, _, body) = send(&app, get("/forums/999999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn malformed_or_non_positive_id_is_404() {
    let app = app();
    for uri in ["/forums/abc", "/forums/0", "/forums/-1", "/forums/%201"] {
        let (status, _, _) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn store_failures_are_500_without_detail() {
    let app = app_with(Arc::new(BrokenStore));

    let (status, _, body) = send(&app, post_forum(valid_body().to_string())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "server_error");
    assert!(!body.to_string().contains("connection refused"));

    let (status, _, _) = send(&app, get("/forums/1")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn validation_runs_before_the_store() {
    let app = app_with(Arc::new(BrokenStore));
    let mut body = valid_body();
    body["mode"] = json!(["online", "online"]);
    let (status, _, body) = send(&app, post_forum(body.to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"]["mode"], "must not contain duplicate entries");
}

#[tokio::test]
async fn health_and_readiness() {
    let app = app();
    let (status, _, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "forum-api");
    assert!(body.get("store").is_none());

    let (status, _, body) = send(&app, get("/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"], "ok");

    let broken = app_with(Arc::new(BrokenStore));
    let (status, _, body) = send(&broken, get("/ready")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["store"], "unavailable");
}
