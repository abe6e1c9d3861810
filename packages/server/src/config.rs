use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::domains::extraction::DEFAULT_MODELS;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: Option<String>,
    pub supported_models: Vec<String>,
    pub llm_timeout: Duration,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub run_migrations: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: database_url_from_env(),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            gemini_base_url: env::var("GEMINI_BASE_URL").ok(),
            supported_models: env::var("SUPPORTED_MODELS")
                .map(|v| parse_model_list(&v))
                .unwrap_or_else(|_| DEFAULT_MODELS.iter().map(|m| m.to_string()).collect()),
            llm_timeout: Duration::from_secs(
                env::var("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .context("LLM_TIMEOUT_SECS must be a valid number")?,
            ),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DB_MAX_CONNECTIONS must be a valid number")?,
            db_acquire_timeout: Duration::from_secs(
                env::var("DB_ACQUIRE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .context("DB_ACQUIRE_TIMEOUT_SECS must be a valid number")?,
            ),
            run_migrations: env::var("RUN_MIGRATIONS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }
}

/// `DATABASE_URL` wins; otherwise the URL is assembled from the discrete
/// `DB_*` variables.
fn database_url_from_env() -> String {
    if let Ok(url) = env::var("DATABASE_URL") {
        return url;
    }

    let var = |key: &str, default: &str| env::var(key).unwrap_or_else(|_| default.to_string());

    build_database_url(
        &var("DB_HOST", "localhost"),
        &var("DB_PORT", "5432"),
        &var("DB_NAME", "practice_db"),
        &var("DB_USER", "postgres"),
        &var("DB_PASSWORD", ""),
    )
}

fn build_database_url(host: &str, port: &str, name: &str, user: &str, password: &str) -> String {
    if password.is_empty() {
        format!("postgres://{}@{}:{}/{}", user, host, port, name)
    } else {
        format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, name)
    }
}

fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}
