// crates/proofmark-generate/src/providers/pollinations.rs
//
// Pollinations adapters. The text endpoint returns a plain-text body; the
// image endpoint returns raw image bytes, which are inlined as a base64
// `data:` URI so the payload is self-contained.

use async_trait::async_trait;
use base64::Engine;

use proofmark_core::{ContentKind, GenerationResult, ProviderAdapter, ProviderError};

use super::{ensure_success, http_client, transport_error};
use crate::prompt::clean_image_prompt;

const TEXT_BASE_URL: &str = "https://text.pollinations.ai";
const IMAGE_BASE_URL: &str = "https://image.pollinations.ai";
const IMAGE_SIZE: u32 = 512;

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Text adapter for the Pollinations text endpoint.
#[derive(Debug, Clone)]
pub struct PollinationsTextAdapter {
    base_url: String,
    client: reqwest::Client,
}

impl PollinationsTextAdapter {
    pub fn new() -> Self {
        Self {
            base_url: TEXT_BASE_URL.to_string(),
            client: http_client(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

impl Default for PollinationsTextAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderAdapter for PollinationsTextAdapter {
    fn id(&self) -> &str {
        "pollinations-text"
    }

    fn kind(&self) -> ContentKind {
        ContentKind::Text
    }

    async fn attempt(
        &self,
        prompt: &str,
        _kind: ContentKind,
    ) -> Result<GenerationResult, ProviderError> {
        let url = format!("{}/prompt/{}", self.base_url, urlencoding::encode(prompt));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error("Pollinations text", e))?;
        let response = ensure_success("Pollinations text", response).await?;
        let body = response
            .text()
            .await
            .map_err(|e| transport_error("Pollinations text", e))?;

        let content = body.trim();
        if content.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        Ok(GenerationResult::external("pollinations", "pollinations-text", content))
    }
}

// ---------------------------------------------------------------------------
// Image
// ---------------------------------------------------------------------------

/// Image adapter for the Pollinations image endpoint.
#[derive(Debug, Clone)]
pub struct PollinationsImageAdapter {
    base_url: String,
    client: reqwest::Client,
}

impl PollinationsImageAdapter {
    pub fn new() -> Self {
        Self {
            base_url: IMAGE_BASE_URL.to_string(),
            client: http_client(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Endpoint URL for a (cleaned) prompt.
    pub fn image_url(&self, cleaned_prompt: &str) -> String {
        format!(
            "{}/prompt/{}?width={}&height={}",
            self.base_url,
            urlencoding::encode(cleaned_prompt),
            IMAGE_SIZE,
            IMAGE_SIZE
        )
    }
}

impl Default for PollinationsImageAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderAdapter for PollinationsImageAdapter {
    fn id(&self) -> &str {
        "pollinations-image"
    }

    fn kind(&self) -> ContentKind {
        ContentKind::Image
    }

    async fn attempt(
        &self,
        prompt: &str,
        _kind: ContentKind,
    ) -> Result<GenerationResult, ProviderError> {
        let cleaned = clean_image_prompt(prompt);
        let url = self.image_url(&cleaned);
        tracing::debug!("Calling Pollinations image endpoint for '{}'", cleaned);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error("Pollinations image", e))?;
        let response = ensure_success("Pollinations image", response).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error("Pollinations image", e))?;

        if bytes.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
        Ok(GenerationResult::external(
            "pollinations",
            "pollinations-ai",
            format!("data:image/png;base64,{}", encoded),
        )
        .with_note("AI-generated image using Pollinations AI"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::test_support::mock_server;

    #[tokio::test]
    async fn text_attempt_returns_trimmed_body() {
        let (base_url, _handle) = mock_server(200, "text/plain", b"\n  A short essay.  \n").await;
        let adapter = PollinationsTextAdapter::new().with_base_url(&base_url);

        let result = adapter.attempt("write an essay", ContentKind::Text).await.unwrap();
        assert_eq!(result.payload, "A short essay.");
        assert_eq!(result.source_provider, "pollinations");
        assert_eq!(result.model_name, "pollinations-text");
    }

    #[tokio::test]
    async fn text_blank_body_is_empty_response() {
        let (base_url, _handle) = mock_server(200, "text/plain", b"   ").await;
        let adapter = PollinationsTextAdapter::new().with_base_url(&base_url);

        let err = adapter.attempt("x", ContentKind::Text).await.unwrap_err();
        assert_eq!(err, ProviderError::EmptyResponse);
    }

    #[tokio::test]
    async fn image_attempt_inlines_bytes() {
        let png_magic = [0x89u8, b'P', b'N', b'G'];
        let (base_url, _handle) = mock_server(200, "image/png", &png_magic).await;
        let adapter = PollinationsImageAdapter::new().with_base_url(&base_url);

        let result = adapter.attempt("a cat", ContentKind::Image).await.unwrap();
        assert_eq!(result.payload, "data:image/png;base64,iVBORw==");
        assert_eq!(result.model_name, "pollinations-ai");
        assert!(result.note.is_some());
    }

    #[tokio::test]
    async fn image_empty_body_is_empty_response() {
        let (base_url, _handle) = mock_server(200, "image/png", b"").await;
        let adapter = PollinationsImageAdapter::new().with_base_url(&base_url);

        let err = adapter.attempt("a cat", ContentKind::Image).await.unwrap_err();
        assert_eq!(err, ProviderError::EmptyResponse);
    }

    #[tokio::test]
    async fn image_server_error_is_transport() {
        let (base_url, _handle) = mock_server(502, "text/plain", b"bad gateway").await;
        let adapter = PollinationsImageAdapter::new().with_base_url(&base_url);

        let err = adapter.attempt("a cat", ContentKind::Image).await.unwrap_err();
        assert!(matches!(err, ProviderError::Transport(_)));
    }

    #[test]
    fn image_url_uses_cleaned_encoded_prompt() {
        let adapter = PollinationsImageAdapter::new();
        let url = adapter.image_url(&clean_image_prompt("please a cat"));
        assert_eq!(
            url,
            "https://image.pollinations.ai/prompt/a%20cat%20digital%20art?width=512&height=512"
        );
    }
}
