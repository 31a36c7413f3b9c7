//! Relay error type mapping to HTTP responses.
//!
//! Every variant answers `500 { "error": RELAY_FAILURE_MESSAGE }`; the cause
//! goes to the log, never to the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use mindcare_types::llm::LlmError;
use mindcare_types::relay::{RELAY_FAILURE_MESSAGE, RelayErrorBody};

/// Application-level error for the relay endpoint.
#[derive(Debug)]
pub enum AppError {
    /// No upstream API key was configured at startup.
    MissingApiKey,
    /// Body was not JSON or lacked `userMessage`.
    BadPayload(String),
    /// The upstream call failed.
    Upstream(LlmError),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Upstream(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MissingApiKey => {
                tracing::error!("relay has no upstream API key configured");
            }
            AppError::BadPayload(msg) => {
                tracing::warn!(error = %msg, "rejected relay payload");
            }
            AppError::Upstream(e) => {
                tracing::error!(error = %e, "upstream completion failed");
            }
        }

        let body = RelayErrorBody {
            error: RELAY_FAILURE_MESSAGE.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
