// crates/proofmark-generate/src/providers/mod.rs
//
// Provider adapters: one per external generation endpoint.
//
// Each adapter shapes the prompt for its endpoint, makes exactly one HTTP
// call, and normalizes the answer into a `GenerationResult` or a
// `ProviderError`. Base URLs are overridable so tests and proxies can stand
// in for the real services.

pub mod cohere;
pub mod deepai;
pub mod mistral;
pub mod pollinations;

pub use cohere::CohereAdapter;
pub use deepai::DeepAiAdapter;
pub use mistral::MistralAdapter;
pub use pollinations::{PollinationsImageAdapter, PollinationsTextAdapter};

use std::time::Duration;

use proofmark_core::ProviderError;

/// Upper bound on a single HTTP exchange. The orchestrator applies the
/// tighter per-chain timeout on top of this.
const CLIENT_TIMEOUT: Duration = Duration::from_secs(120);

/// Shared HTTP client construction for all adapters.
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(CLIENT_TIMEOUT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Map a reqwest failure onto the provider error taxonomy.
pub(crate) fn transport_error(provider: &str, e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else if e.is_decode() {
        ProviderError::MalformedResponse(format!("{}: {}", provider, e))
    } else {
        ProviderError::Transport(format!("{} request failed: {}", provider, e))
    }
}

/// Reject non-success statuses, keeping the body for diagnostics.
pub(crate) async fn ensure_success(
    provider: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ProviderError::Transport(format!(
        "{} failed ({}): {}",
        provider, status, body
    )))
}

/// Read a JSON body, reporting unparsable bodies as malformed.
pub(crate) async fn read_json(
    provider: &str,
    response: reqwest::Response,
) -> Result<serde_json::Value, ProviderError> {
    let text = response
        .text()
        .await
        .map_err(|e| transport_error(provider, e))?;
    serde_json::from_str(&text).map_err(|e| {
        ProviderError::MalformedResponse(format!("{} returned invalid JSON: {}", provider, e))
    })
}

/// Extract a non-empty trimmed string from a JSON field.
pub(crate) fn non_empty_text(
    provider: &str,
    field: &str,
    value: &serde_json::Value,
) -> Result<String, ProviderError> {
    let text = value.as_str().ok_or_else(|| {
        ProviderError::MalformedResponse(format!("{} response missing '{}'", provider, field))
    })?;
    let text = text.trim();
    if text.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }
    Ok(text.to_string())
}
