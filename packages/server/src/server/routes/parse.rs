use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use serde::Deserialize;

use crate::domains::reconciliation::{reconcile, ReconciliationResponse};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// `POST /parse` body
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
    /// Also accepted as `llm`
    #[serde(alias = "llm")]
    pub model_id: String,
}

/// Extract contact fields from free text and report whether the person is a
/// known contact.
///
/// Body rejections are taken as a `Result` so they share the JSON error shape.
pub async fn parse_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ReconciliationResponse>, ApiError> {
    let Json(request) = payload?;
    let response = reconcile(&request.text, &request.model_id, &state.deps).await?;
    Ok(Json(response))
}
