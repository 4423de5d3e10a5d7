//! Application error type mapping message errors to HTTP responses.
//!
//! The single place where typed errors become status codes. Error body
//! shape: `{"error": "<message>"}`. Client errors (4xx) name the offending
//! field or condition; storage failures return a generic message while the
//! detail goes to the log at error level.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use postbox_types::error::MessageError;

/// Application-level error that maps to an HTTP response.
#[derive(Debug)]
pub struct AppError(pub MessageError);

impl From<MessageError> for AppError {
    fn from(e: MessageError) -> Self {
        AppError(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            e @ (MessageError::InvalidId(_)
            | MessageError::InvalidContent(_)
            | MessageError::InvalidSender(_)
            | MessageError::InvalidPagination(_)) => (StatusCode::BAD_REQUEST, e.to_string()),
            e @ MessageError::DuplicateId(_) => (StatusCode::CONFLICT, e.to_string()),
            MessageError::NotFound => (StatusCode::NOT_FOUND, "Message not found".to_string()),
            MessageError::Storage(detail) => {
                tracing::error!(%detail, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
