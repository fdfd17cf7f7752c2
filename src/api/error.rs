//! API error types with fixed JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error response body. Serializes to `{"error":"..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// API-level errors with HTTP status mapping.
///
/// A malformed request (missing or empty `text`, undecodable body) is a
/// hard error with a fixed payload. An unmatched extraction field is NOT
/// an error — it renders as `null` in a successful report.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Incorrect parameter")]
    IncorrectParameter,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::IncorrectParameter => (StatusCode::BAD_REQUEST, "Incorrect parameter"),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
