//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("unknown store kind: {0}")]
    UnknownStore(String),
}

/// Outcome of a store call that did not succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("record not found")]
    NotFound,
    #[error("store: {0}")]
    Store(String),
}

impl From<sqlx::Error> for ModelError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => ModelError::NotFound,
            other => ModelError::Store(other.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("failed validation")]
    ValidationFailed(BTreeMap<String, String>),
    #[error("the requested resource could not be found")]
    NotFound,
    #[error("store: {0}")]
    Store(String),
}

impl From<ModelError> for AppError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::NotFound => AppError::NotFound,
            ModelError::Store(detail) => AppError::Store(detail),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

const SERVER_ERROR_MESSAGE: &str = "the server encountered a problem and could not process your request";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            AppError::ValidationFailed(errors) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                "failed validation".to_string(),
                serde_json::to_value(errors).ok(),
            ),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "not_found",
                AppError::NotFound.to_string(),
                None,
            ),
            AppError::Store(detail) => {
                tracing::error!(error = %detail, "store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "server_error",
                    SERVER_ERROR_MESSAGE.to_string(),
                    None,
                )
            }
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
        };
        (status, Json(body)).into_response()
    }
}
