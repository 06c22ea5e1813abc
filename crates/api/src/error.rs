use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pcshowdown_core::error::CoreError;
use pcshowdown_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for validation failures and [`StoreError`] for
/// capability-store outcomes, and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `pcshowdown_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from the capability store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Malformed or mismatched request bodies are always a client error,
/// whatever stage of decoding failed.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Capability store ---
            AppError::Store(store) => match store {
                // Unknown tokens are a bad client reference, not a server fault.
                StoreError::NotFound { .. } => (
                    StatusCode::BAD_REQUEST,
                    "NOT_FOUND",
                    "No build exists for this link".to_string(),
                ),
                StoreError::Forbidden => (
                    StatusCode::FORBIDDEN,
                    "FORBIDDEN",
                    "This link does not grant edit permission".to_string(),
                ),
                StoreError::Database(err) => {
                    tracing::error!(error = %err, "Database error");
                    internal()
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Sanitized 500 payload; storage detail stays in the logs.
fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
