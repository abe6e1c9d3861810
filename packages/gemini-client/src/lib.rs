//! Pure Google Gemini REST API client
//!
//! A small client for the Gemini `generateContent` endpoint with no
//! domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{GeminiClient, GenerateContentRequest, GenerationConfig};
//!
//! let client = GeminiClient::from_env()?;
//!
//! let response = client
//!     .generate_content(
//!         "gemini-2.5-flash",
//!         &GenerateContentRequest::new()
//!             .user_text("Say hello as JSON")
//!             .generation_config(GenerationConfig::deterministic_json()),
//!     )
//!     .await?;
//!
//! println!("{}", response.text);
//! ```
//!
//! The API key is sent in the `x-goog-api-key` header, never in the URL, so
//! transport errors (which echo the URL) cannot leak it.

pub mod error;
pub mod types;

pub use error::{GeminiError, Result};
pub use types::*;

use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Pure Gemini API client.
#[derive(Debug)]
pub struct GeminiClient {
    http_client: Client,
    api_key: SecretString,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: SecretString::from(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, regional endpoints, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Bound every request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GeminiError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(self)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single-shot content generation.
    ///
    /// Returns the concatenated text parts of the first candidate. A blocked
    /// prompt or an empty candidate list is an [`GeminiError::Api`] error.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        if self.api_key.expose_secret().is_empty() {
            return Err(GeminiError::Config("Gemini API key is empty".into()));
        }

        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/models/{}:generateContent", self.base_url, model))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");
            return Err(GeminiError::Api(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let raw: types::GenerateContentResponseRaw = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        if let Some(reason) = raw.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(GeminiError::Api(format!("Prompt blocked: {}", reason)));
        }

        let candidate = raw
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GeminiError::Api("No candidates from Gemini".into()))?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GeminiError::Api(format!(
                "Empty candidate from Gemini (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )));
        }

        debug!(
            model = %model,
            duration_ms = start.elapsed().as_millis(),
            "Gemini generateContent"
        );

        Ok(GenerateContentResponse {
            text,
            finish_reason: candidate.finish_reason,
            usage: raw.usage_metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn json_request() -> GenerateContentRequest {
        GenerateContentRequest::new()
            .user_text("Text: Jane")
            .generation_config(GenerationConfig::deterministic_json())
    }

    #[test]
    fn test_client_builder() {
        let client = GeminiClient::new("test-key").with_base_url("https://custom.api.com/");

        assert_eq!(client.base_url(), "https://custom.api.com");
        assert_eq!(client.api_key.expose_secret(), "test-key");
    }

    #[test]
    fn debug_output_redacts_key() {
        let client = GeminiClient::new("super-secret-key");
        assert!(!format!("{:?}", client).contains("super-secret-key"));
    }

    #[tokio::test]
    async fn generate_content_sends_key_header_and_config() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{"role": "user", "parts": [{"text": "Text: Jane"}]}],
                "generationConfig": {"temperature": 0.0, "responseMimeType": "application/json"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "{\"name\":"}, {"text": "\"Jane\"}"}]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 4, "totalTokenCount": 16}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiClient::new("test-key").with_base_url(server.uri());
        let response = client
            .generate_content("gemini-2.5-flash", &json_request())
            .await
            .unwrap();

        assert_eq!(response.text, r#"{"name":"Jane"}"#);
        assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
        assert_eq!(response.usage.unwrap().total_token_count, 16);
    }

    #[tokio::test]
    async fn non_success_status_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let client = GeminiClient::new("test-key").with_base_url(server.uri());
        let err = client
            .generate_content("gemini-2.5-flash", &json_request())
            .await
            .unwrap_err();

        match err {
            GeminiError::Api(msg) => assert!(msg.contains("overloaded")),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn blocked_prompt_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [],
                "promptFeedback": {"blockReason": "SAFETY"}
            })))
            .mount(&server)
            .await;

        let client = GeminiClient::new("test-key").with_base_url(server.uri());
        let err = client
            .generate_content("gemini-2.5-flash", &json_request())
            .await
            .unwrap_err();

        assert!(matches!(err, GeminiError::Api(msg) if msg.contains("SAFETY")));
    }

    #[tokio::test]
    async fn empty_key_fails_before_sending() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = GeminiClient::new("").with_base_url(server.uri());
        let err = client
            .generate_content("gemini-2.5-flash", &json_request())
            .await
            .unwrap_err();

        assert!(matches!(err, GeminiError::Config(_)));
    }
}
