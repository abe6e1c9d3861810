//! HTTP error mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domains::extraction::ExtractionError;

/// Error body: `{"detail": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Errors a handler may return to the client
#[derive(Debug)]
pub enum ApiError {
    /// Request body missing, not JSON, or missing required fields
    InvalidBody(JsonRejection),
    Extraction(ExtractionError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

impl From<ExtractionError> for ApiError {
    fn from(err: ExtractionError) -> Self {
        ApiError::Extraction(err)
    }
}

impl ApiError {
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            ApiError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Extraction(err @ ExtractionError::UnsupportedModel { .. }) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::Extraction(ExtractionError::MalformedResponse { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to parse LLM response as JSON".to_string(),
            ),
            ApiError::Extraction(err @ ExtractionError::Unavailable(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();

        if status.is_server_error() {
            tracing::error!(status = %status, detail = %detail, "Request failed");
        } else {
            tracing::info!(status = %status, detail = %detail, "Request rejected");
        }

        (status, Json(ErrorBody { detail })).into_response()
    }
}
