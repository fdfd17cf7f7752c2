//! Diagnostic narrative endpoint.

use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::extraction;

#[derive(Deserialize)]
pub struct DiagnosticRequest {
    /// The free-text narrative to mine. An absent field decodes to an
    /// empty string and is rejected like one.
    #[serde(default)]
    pub text: String,
}

/// `POST /api/diagnostics` — mine a free-text narrative.
///
/// An undecodable body or a missing/empty `text` field returns the fixed
/// error payload without invoking the extractor. Otherwise the
/// pretty-printed report comes back as the response body.
pub async fn analyze(payload: Result<Json<DiagnosticRequest>, JsonRejection>) -> Response {
    let Ok(Json(req)) = payload else {
        return ApiError::IncorrectParameter.into_response();
    };

    if req.text.is_empty() {
        return ApiError::IncorrectParameter.into_response();
    }

    tracing::debug!(chars = req.text.len(), "Analyzing diagnostic narrative");

    let body = extraction::process_text(&req.text);
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}
