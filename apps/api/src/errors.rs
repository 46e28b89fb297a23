use std::sync::OnceLock;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::config::AppEnv;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

static ERROR_DETAIL: OnceLock<AppEnv> = OnceLock::new();

/// Records the runtime environment so 500-class responses know whether to
/// include full error detail (development) or a generic message (production).
pub fn set_error_env(env: AppEnv) {
    let _ = ERROR_DETAIL.set(env);
}

fn detail_enabled() -> bool {
    matches!(
        ERROR_DETAIL.get().copied().unwrap_or(AppEnv::Production),
        AppEnv::Development
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            // Duplicate ids report as a 400 with an explicit already-exists
            // message, matching the contract the frontend expects.
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, "ALREADY_EXISTS", msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Access denied".to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                let message = if detail_enabled() {
                    format!("A database error occurred: {e}")
                } else {
                    "A database error occurred".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR", message)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                let message = if detail_enabled() {
                    format!("An internal server error occurred: {e}")
                } else {
                    "An internal server error occurred".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
