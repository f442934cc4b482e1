// crates/proofmark-core/src/content.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProofmarkError;

/// Provider identifier reported by the deterministic content generator.
pub const DETERMINISTIC_PROVIDER: &str = "deterministic-fallback";

/// Kind of content a caller asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Text,
    Image,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Text => write!(f, "text"),
            ContentKind::Image => write!(f, "image"),
        }
    }
}

impl FromStr for ContentKind {
    type Err = ProofmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ContentKind::Text),
            "image" => Ok(ContentKind::Image),
            other => Err(ProofmarkError::Validation(format!(
                "Unknown content kind: {}",
                other
            ))),
        }
    }
}

/// A validated request for generated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The user prompt. Never empty.
    pub prompt: String,
    /// Requested content kind.
    pub content_kind: ContentKind,
}

impl GenerationRequest {
    /// Build a request, rejecting blank prompts.
    pub fn new(prompt: impl Into<String>, content_kind: ContentKind) -> Result<Self, ProofmarkError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(ProofmarkError::Validation("Prompt is required".to_string()));
        }
        Ok(Self {
            prompt,
            content_kind,
        })
    }
}

/// Where a generation result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultOrigin {
    /// An external provider answered.
    External,
    /// Every provider failed; the local generator produced the content.
    DeterministicFallback,
}

/// Normalized outcome of a generation attempt.
///
/// A result with `succeeded == true` always carries a non-empty payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub succeeded: bool,
    /// Text body, or an image reference (URL or `data:` URI).
    pub payload: String,
    /// Provider identifier (e.g. "mistral-ai", "deterministic-fallback").
    pub source_provider: String,
    /// Model identifier reported by the provider.
    pub model_name: String,
    pub note: Option<String>,
    pub origin: ResultOrigin,
}

impl GenerationResult {
    /// Result produced by an external provider.
    pub fn external(
        source_provider: impl Into<String>,
        model_name: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            succeeded: true,
            payload: payload.into(),
            source_provider: source_provider.into(),
            model_name: model_name.into(),
            note: None,
            origin: ResultOrigin::External,
        }
    }

    /// Result produced by the deterministic content generator.
    pub fn deterministic(model_name: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            payload: payload.into(),
            source_provider: DETERMINISTIC_PROVIDER.to_string(),
            model_name: model_name.into(),
            note: None,
            origin: ResultOrigin::DeterministicFallback,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == ResultOrigin::DeterministicFallback
    }
}
