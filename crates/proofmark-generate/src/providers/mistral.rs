// crates/proofmark-generate/src/providers/mistral.rs
//
// Mistral chat-completions adapter (text).

use async_trait::async_trait;

use proofmark_core::{ContentKind, GenerationResult, ProviderAdapter, ProviderError};

use super::{ensure_success, http_client, non_empty_text, read_json, transport_error};
use crate::prompt::enhance_prompt;

const MISTRAL_BASE_URL: &str = "https://api.mistral.ai";
const DEFAULT_MODEL: &str = "mistral-tiny";

/// Text adapter for the Mistral chat-completions API.
#[derive(Debug, Clone)]
pub struct MistralAdapter {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl MistralAdapter {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: MISTRAL_BASE_URL.to_string(),
            client: http_client(),
        }
    }

    /// Point the adapter at a different API host.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl ProviderAdapter for MistralAdapter {
    fn id(&self) -> &str {
        "mistral"
    }

    fn kind(&self) -> ContentKind {
        ContentKind::Text
    }

    async fn attempt(
        &self,
        prompt: &str,
        _kind: ContentKind,
    ) -> Result<GenerationResult, ProviderError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": enhance_prompt(prompt) }
            ],
            "max_tokens": 300,
            "temperature": 0.7,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error("Mistral", e))?;
        let response = ensure_success("Mistral", response).await?;
        let json = read_json("Mistral", response).await?;

        let content = non_empty_text(
            "Mistral",
            "choices[0].message.content",
            &json["choices"][0]["message"]["content"],
        )?;

        Ok(GenerationResult::external("mistral-ai", self.model.clone(), content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::test_support::mock_server;

    #[tokio::test]
    async fn attempt_extracts_message_content() {
        let body = br#"{"choices":[{"message":{"role":"assistant","content":"  Hello from Mistral  "}}]}"#;
        let (base_url, _handle) = mock_server(200, "application/json", body).await;
        let adapter = MistralAdapter::new("key").with_base_url(&base_url);

        let result = adapter.attempt("hi", ContentKind::Text).await.unwrap();
        assert_eq!(result.payload, "Hello from Mistral");
        assert_eq!(result.source_provider, "mistral-ai");
        assert_eq!(result.model_name, "mistral-tiny");
        assert!(!result.is_fallback());
    }

    #[tokio::test]
    async fn blank_content_is_empty_response() {
        let body = br#"{"choices":[{"message":{"content":"   "}}]}"#;
        let (base_url, _handle) = mock_server(200, "application/json", body).await;
        let adapter = MistralAdapter::new("key").with_base_url(&base_url);

        let err = adapter.attempt("hi", ContentKind::Text).await.unwrap_err();
        assert_eq!(err, ProviderError::EmptyResponse);
    }

    #[tokio::test]
    async fn missing_choices_is_malformed() {
        let (base_url, _handle) = mock_server(200, "application/json", br#"{"object":"error"}"#).await;
        let adapter = MistralAdapter::new("key").with_base_url(&base_url);

        let err = adapter.attempt("hi", ContentKind::Text).await.unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn unauthorized_is_transport_error() {
        let (base_url, _handle) =
            mock_server(401, "application/json", br#"{"message":"Unauthorized"}"#).await;
        let adapter = MistralAdapter::new("FREE_TIER").with_base_url(&base_url);

        match adapter.attempt("hi", ContentKind::Text).await.unwrap_err() {
            ProviderError::Transport(msg) => assert!(msg.contains("401")),
            other => panic!("Expected Transport error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn connection_refused_is_transport_error() {
        let adapter = MistralAdapter::new("key").with_base_url("http://127.0.0.1:1");
        let err = adapter.attempt("hi", ContentKind::Text).await.unwrap_err();
        assert!(matches!(err, ProviderError::Transport(_)));
    }
}
