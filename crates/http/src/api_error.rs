//! Typed API error for the data-retrieval handlers.
//!
//! Converts service errors into the `{"error": "message"}` JSON shape with a
//! 500 status. The `/ask` handler has its own error shape (`{"answer":
//! "Error: ..."}`) and does not go through this type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use climateqa_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Use via `Result<Json<T>, ApiError>` in handlers.
#[derive(Debug)]
pub enum ApiError {
    /// 500 Internal Server Error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self::Internal(message) = self;
        tracing::error!(error = %message, "internal server error");
        let body = serde_json::json!({"error": message});
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Internal(err.to_string())
    }
}
