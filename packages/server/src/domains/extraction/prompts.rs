//! LLM prompts and the allow-list of models that may run them.

use std::collections::HashMap;

use super::ExtractionError;

/// Instruction sent ahead of the caller's text.
pub const CONTACT_EXTRACTION_PROMPT: &str = r#"Extract contact information from the given text.
Return a JSON object with these fields:
- name: The person's full name (string or null)
- email: The email address (string or null)
- phone: The phone number (string or null)

Return ONLY the JSON object, no other text. If a field is not present, use null.
Example: {"name": "John Doe", "email": "john@example.com", "phone": "555-1234"}"#;

/// Models supported out of the box, all using [`CONTACT_EXTRACTION_PROMPT`].
pub const DEFAULT_MODELS: &[&str] = &["gemini-2.5-flash", "gemini-2.5-flash-preview"];

/// Allow-listed model identifiers mapped to their instruction template.
///
/// Supporting a new model is an entry in this table, nothing else.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    templates: HashMap<String, String>,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::from_model_ids(DEFAULT_MODELS.iter().copied())
    }
}

impl ModelCatalog {
    /// Empty catalog; every model is unsupported.
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Catalog where each id uses the standard extraction template.
    pub fn from_model_ids<I, S>(model_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        model_ids
            .into_iter()
            .fold(Self::empty(), |catalog, id| {
                catalog.with_model(id, CONTACT_EXTRACTION_PROMPT)
            })
    }

    /// Add or replace a model entry.
    pub fn with_model(mut self, model_id: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(model_id.into(), template.into());
        self
    }

    pub fn supports(&self, model_id: &str) -> bool {
        self.templates.contains_key(model_id)
    }

    /// Supported ids, sorted for stable output.
    pub fn model_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Full prompt for `model_id`: template, blank line, then the caller's text.
    pub fn build_prompt(&self, model_id: &str, text: &str) -> Result<String, ExtractionError> {
        let template =
            self.templates
                .get(model_id)
                .ok_or_else(|| ExtractionError::UnsupportedModel {
                    model_id: model_id.to_string(),
                })?;

        Ok(format!("{}\n\nText: {}", template, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_supports_gemini_flash_variants() {
        let catalog = ModelCatalog::default();

        assert!(catalog.supports("gemini-2.5-flash"));
        assert!(catalog.supports("gemini-2.5-flash-preview"));
        assert!(!catalog.supports("gpt-9"));
        assert_eq!(
            catalog.model_ids(),
            vec!["gemini-2.5-flash", "gemini-2.5-flash-preview"]
        );
    }

    #[test]
    fn prompt_appends_text_after_separator() {
        let prompt = ModelCatalog::default()
            .build_prompt("gemini-2.5-flash", "Call Bob at 555-0100")
            .unwrap();

        assert!(prompt.starts_with(CONTACT_EXTRACTION_PROMPT));
        assert!(prompt.ends_with("\n\nText: Call Bob at 555-0100"));
    }

    #[test]
    fn unknown_model_is_rejected() {
        let err = ModelCatalog::default()
            .build_prompt("gpt-9", "anything")
            .unwrap_err();

        assert!(matches!(
            err,
            ExtractionError::UnsupportedModel { ref model_id } if model_id == "gpt-9"
        ));
        assert_eq!(err.to_string(), "Unsupported LLM: gpt-9");
    }

    #[test]
    fn adding_a_model_is_a_data_change() {
        let catalog = ModelCatalog::empty().with_model("gemini-3-pro", "Custom template");

        assert_eq!(
            catalog.build_prompt("gemini-3-pro", "hi").unwrap(),
            "Custom template\n\nText: hi"
        );
        assert!(!catalog.supports("gemini-2.5-flash"));
    }
}
