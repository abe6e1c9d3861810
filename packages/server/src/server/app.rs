//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::extraction::ModelCatalog;
use crate::kernel::{GeminiClient, PgContactStore, ServerDeps};
use crate::server::routes::{health_handler, parse_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: ServerDeps,
}

/// Build the Axum application router around already-wired dependencies.
pub fn build_app(deps: ServerDeps) -> Router {
    let state = AppState { deps };

    Router::new()
        .route("/parse", post(parse_handler))
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

/// Create the Postgres pool.
///
/// The pool connects lazily so the server starts (and extraction keeps
/// working) while the database is unreachable.
pub fn create_pool(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .connect_lazy(&config.database_url)
        .context("Invalid database URL")
}

/// Wire production dependencies: Gemini for extraction, Postgres for contacts.
pub fn create_server_deps(config: &Config, pool: PgPool) -> Result<ServerDeps> {
    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; every extraction will fail");
    }

    let mut gemini = GeminiClient::new(config.gemini_api_key.clone().unwrap_or_default())
        .with_timeout(config.llm_timeout)
        .context("Failed to create Gemini client")?;
    if let Some(base_url) = &config.gemini_base_url {
        gemini = gemini.with_base_url(base_url.clone());
    }

    let models = ModelCatalog::from_model_ids(config.supported_models.iter().cloned());
    tracing::info!(models = ?models.model_ids(), "Model catalog loaded");

    Ok(ServerDeps::new(
        Arc::new(gemini),
        Arc::new(PgContactStore::new(pool)),
        models,
    ))
}
