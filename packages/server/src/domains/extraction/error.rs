use thiserror::Error;

/// Extraction failures. These are the only errors that leave the pipeline.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Model identifier is not in the catalog
    #[error("Unsupported LLM: {model_id}")]
    UnsupportedModel { model_id: String },

    /// Provider body was not a JSON object of string-or-null fields
    #[error("Failed to parse LLM response as JSON: {reason}")]
    MalformedResponse { reason: String },

    /// Provider call failed (transport, non-2xx, blocked, misconfigured)
    #[error("LLM extraction failed: {0}")]
    Unavailable(String),
}

impl ExtractionError {
    /// Client-side error (the request itself is wrong)
    pub fn is_client_error(&self) -> bool {
        matches!(self, ExtractionError::UnsupportedModel { .. })
    }
}
