// BaseAI adapter for the Gemini REST client
//
// The generation config is fixed: temperature 0 and a JSON-only response MIME
// type, so the model returns a bare JSON object with no surrounding prose.

use anyhow::Result;
use gemini_client::{GeminiClient, GenerateContentRequest, GenerationConfig};

use super::BaseAI;

#[async_trait::async_trait]
impl BaseAI for GeminiClient {
    async fn generate_json(&self, model: &str, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest::new()
            .user_text(prompt)
            .generation_config(GenerationConfig::deterministic_json());

        let response = self
            .generate_content(model, &request)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;

        Ok(response.text)
    }
}
