// crates/proofmark-generate/src/settings.rs
//
// Provider chain settings (the `[providers]` table of the daemon config)
// and construction of a `FallbackOrchestrator` from them.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use proofmark_core::{ProofmarkError, ProviderAdapter};

use crate::fallback::DeterministicGenerator;
use crate::orchestrator::FallbackOrchestrator;
use crate::providers::{
    CohereAdapter, DeepAiAdapter, MistralAdapter, PollinationsImageAdapter,
    PollinationsTextAdapter,
};

/// Provider ids accepted in `text_order` / `image_order`.
pub const KNOWN_PROVIDERS: &[&str] = &[
    "mistral",
    "cohere",
    "pollinations-text",
    "pollinations-image",
    "deepai",
];

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    /// Per-provider timeout for the text chain, in seconds.
    #[serde(default = "default_text_timeout_secs")]
    pub text_timeout_secs: u64,

    /// Per-provider timeout for the image chain, in seconds.
    #[serde(default = "default_image_timeout_secs")]
    pub image_timeout_secs: u64,

    /// Text providers in attempt order. May be empty.
    #[serde(default = "default_text_order")]
    pub text_order: Vec<String>,

    /// Image providers in attempt order. May be empty.
    #[serde(default = "default_image_order")]
    pub image_order: Vec<String>,

    #[serde(default = "default_free_tier_key")]
    pub mistral_api_key: String,

    #[serde(default = "default_free_tier_key")]
    pub cohere_api_key: String,

    #[serde(default = "default_deepai_api_key")]
    pub deepai_api_key: String,

    /// Seed for fallback template selection. Random when absent.
    #[serde(default)]
    pub fallback_seed: Option<u64>,
}

fn default_text_timeout_secs() -> u64 {
    30
}

fn default_image_timeout_secs() -> u64 {
    45
}

fn default_text_order() -> Vec<String> {
    vec![
        "mistral".to_string(),
        "cohere".to_string(),
        "pollinations-text".to_string(),
    ]
}

fn default_image_order() -> Vec<String> {
    vec!["pollinations-image".to_string(), "deepai".to_string()]
}

fn default_free_tier_key() -> String {
    "FREE_TIER".to_string()
}

fn default_deepai_api_key() -> String {
    "quickstart-cred".to_string()
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            text_timeout_secs: default_text_timeout_secs(),
            image_timeout_secs: default_image_timeout_secs(),
            text_order: default_text_order(),
            image_order: default_image_order(),
            mistral_api_key: default_free_tier_key(),
            cohere_api_key: default_free_tier_key(),
            deepai_api_key: default_deepai_api_key(),
            fallback_seed: None,
        }
    }
}

impl ProviderSettings {
    fn adapter(&self, id: &str) -> Result<Arc<dyn ProviderAdapter>, ProofmarkError> {
        let adapter: Arc<dyn ProviderAdapter> = match id {
            "mistral" => Arc::new(MistralAdapter::new(self.mistral_api_key.clone())),
            "cohere" => Arc::new(CohereAdapter::new(self.cohere_api_key.clone())),
            "pollinations-text" => Arc::new(PollinationsTextAdapter::new()),
            "pollinations-image" => Arc::new(PollinationsImageAdapter::new()),
            "deepai" => Arc::new(DeepAiAdapter::new(self.deepai_api_key.clone())),
            other => {
                return Err(ProofmarkError::Validation(format!(
                    "Unknown provider '{}' (expected one of: {})",
                    other,
                    KNOWN_PROVIDERS.join(", ")
                )))
            }
        };
        Ok(adapter)
    }
}

/// Build the orchestrator described by `settings`.
///
/// An adapter listed in the wrong chain (e.g. `deepai` in `text_order`) is
/// rejected, as is any unknown id.
pub fn build_orchestrator(settings: &ProviderSettings) -> Result<FallbackOrchestrator, ProofmarkError> {
    let fallback = match settings.fallback_seed {
        Some(seed) => DeterministicGenerator::with_seed(seed),
        None => DeterministicGenerator::new(),
    };
    let mut orchestrator = FallbackOrchestrator::new(fallback);

    let chains = [
        (
            proofmark_core::ContentKind::Text,
            &settings.text_order,
            settings.text_timeout_secs,
        ),
        (
            proofmark_core::ContentKind::Image,
            &settings.image_order,
            settings.image_timeout_secs,
        ),
    ];

    for (kind, order, timeout_secs) in chains {
        for id in order {
            let adapter = settings.adapter(id.trim())?;
            if adapter.kind() != kind {
                return Err(ProofmarkError::Validation(format!(
                    "Provider '{}' produces {} content and cannot be used in the {} chain",
                    id,
                    adapter.kind(),
                    kind
                )));
            }
            orchestrator = orchestrator.with_provider(adapter, Duration::from_secs(timeout_secs));
        }
    }

    Ok(orchestrator)
}
