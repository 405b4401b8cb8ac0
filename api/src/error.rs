//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use taskman_core::StoreError;
use thiserror::Error;

/// Errors a handler can answer with. The display strings are the wire
/// messages the client sees.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Task not found")]
    TaskNotFound,

    #[error("Task text is required")]
    MissingText,

    #[error("Route not found")]
    RouteNotFound,

    /// Unexpected failure in the adapter layer. The message is chosen at
    /// construction time, where the environment mode is known.
    #[error("{0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::TaskNotFound,
            StoreError::EmptyText => ApiError::MissingText,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::TaskNotFound | ApiError::RouteNotFound => {
                (StatusCode::NOT_FOUND, json!({ "error": self.to_string() }))
            }
            ApiError::MissingText => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Something went wrong!", "message": message }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
