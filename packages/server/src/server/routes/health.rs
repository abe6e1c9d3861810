use std::time::Duration;

use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::server::app::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

/// Health check endpoint
///
/// The process is live whenever this answers, so `status` is always "ok" and
/// the response is always 200. `database` is "connected" after a successful
/// `SELECT 1`, otherwise "error: <cause>".
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    let database = match tokio::time::timeout(Duration::from_secs(5), state.deps.contacts.ping())
        .await
    {
        Ok(Ok(())) => "connected".to_string(),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Health check database ping failed");
            format!("error: {:#}", e)
        }
        Err(_) => "error: query timeout (>5s)".to_string(),
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        database,
    })
}
