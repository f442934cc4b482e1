// crates/proofmark-generate/src/providers/deepai.rs
//
// DeepAI text-to-image adapter. The API answers with a hosted image URL.

use async_trait::async_trait;

use proofmark_core::{ContentKind, GenerationResult, ProviderAdapter, ProviderError};

use super::{ensure_success, http_client, non_empty_text, read_json, transport_error};
use crate::prompt::clean_image_prompt;

const DEEPAI_BASE_URL: &str = "https://api.deepai.org";

#[derive(Debug, Clone)]
pub struct DeepAiAdapter {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl DeepAiAdapter {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEEPAI_BASE_URL.to_string(),
            client: http_client(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl ProviderAdapter for DeepAiAdapter {
    fn id(&self) -> &str {
        "deepai"
    }

    fn kind(&self) -> ContentKind {
        ContentKind::Image
    }

    async fn attempt(
        &self,
        prompt: &str,
        _kind: ContentKind,
    ) -> Result<GenerationResult, ProviderError> {
        let url = format!("{}/api/text2img", self.base_url);
        let body = serde_json::json!({ "text": clean_image_prompt(prompt) });

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error("DeepAI", e))?;
        let response = ensure_success("DeepAI", response).await?;
        let json = read_json("DeepAI", response).await?;

        let image_url = non_empty_text("DeepAI", "output_url", &json["output_url"])?;

        Ok(GenerationResult::external("deepai", "deepai", image_url)
            .with_note("AI-generated image using DeepAI"))
    }
}
