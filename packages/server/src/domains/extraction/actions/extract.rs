use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::domains::extraction::{ExtractionError, ExtractionResult};
use crate::kernel::ServerDeps;

/// Extract name/email/phone from `text` with the model `model_id`.
///
/// The model must be in the catalog; the check happens before any provider
/// call. A single attempt is made, no retries.
pub async fn extract_contact(
    text: &str,
    model_id: &str,
    deps: &ServerDeps,
) -> Result<ExtractionResult, ExtractionError> {
    let prompt = deps.models.build_prompt(model_id, text)?;

    info!(model = %model_id, text_len = text.len(), "Extracting contact");

    let body = deps
        .ai
        .generate_json(model_id, &prompt)
        .await
        .map_err(|e| {
            warn!(model = %model_id, error = %e, "LLM extraction call failed");
            ExtractionError::Unavailable(format!("{:#}", e))
        })?;

    let result = parse_extraction(&body).map_err(|e| {
        warn!(model = %model_id, error = %e, "LLM returned malformed extraction");
        e
    })?;

    debug!(
        has_name = result.name.is_some(),
        has_email = result.email.is_some(),
        has_phone = result.phone.is_some(),
        "Extraction parsed"
    );

    Ok(result)
}

/// Parse a raw provider body into an [`ExtractionResult`].
///
/// The body must be a JSON object. Missing keys and `null` become `None`;
/// any other non-string value is a malformed response. Extra keys are ignored.
pub fn parse_extraction(body: &str) -> Result<ExtractionResult, ExtractionError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| ExtractionError::MalformedResponse {
            reason: e.to_string(),
        })?;

    let object = value
        .as_object()
        .ok_or_else(|| ExtractionError::MalformedResponse {
            reason: format!("expected a JSON object, got {}", json_kind(&value)),
        })?;

    Ok(ExtractionResult {
        name: string_field(object, "name")?,
        email: string_field(object, "email")?,
        phone: string_field(object, "phone")?,
    })
}

fn string_field(object: &Map<String, Value>, key: &str) -> Result<Option<String>, ExtractionError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ExtractionError::MalformedResponse {
            reason: format!("field `{}` must be a string or null, got {}", key, json_kind(other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
