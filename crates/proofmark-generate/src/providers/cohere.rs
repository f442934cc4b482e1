// crates/proofmark-generate/src/providers/cohere.rs
//
// Cohere generate adapter (text).

use async_trait::async_trait;

use proofmark_core::{ContentKind, GenerationResult, ProviderAdapter, ProviderError};

use super::{ensure_success, http_client, non_empty_text, read_json, transport_error};
use crate::prompt::enhance_prompt;

const COHERE_BASE_URL: &str = "https://api.cohere.ai";

/// Text adapter for the Cohere `generate` API.
#[derive(Debug, Clone)]
pub struct CohereAdapter {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl CohereAdapter {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: COHERE_BASE_URL.to_string(),
            client: http_client(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl ProviderAdapter for CohereAdapter {
    fn id(&self) -> &str {
        "cohere"
    }

    fn kind(&self) -> ContentKind {
        ContentKind::Text
    }

    async fn attempt(
        &self,
        prompt: &str,
        _kind: ContentKind,
    ) -> Result<GenerationResult, ProviderError> {
        let url = format!("{}/v1/generate", self.base_url);
        let body = serde_json::json!({
            "model": "command",
            "prompt": enhance_prompt(prompt),
            "max_tokens": 200,
            "temperature": 0.7,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error("Cohere", e))?;
        let response = ensure_success("Cohere", response).await?;
        let json = read_json("Cohere", response).await?;

        let content = non_empty_text("Cohere", "generations[0].text", &json["generations"][0]["text"])?;

        Ok(GenerationResult::external("cohere-ai", "cohere-command", content))
    }
}
