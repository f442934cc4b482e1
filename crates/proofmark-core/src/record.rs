// crates/proofmark-core/src/record.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::ContentKind;
use crate::fingerprint::Fingerprint;

/// Characters of text payload shown in a record summary.
pub const PREVIEW_CHARS: usize = 100;

/// Preview shown instead of image payloads in listings.
pub const IMAGE_PREVIEW: &str = "[Image URL]";

/// Registrar acknowledgement of a fingerprint registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Registrar transaction identifier.
    pub transaction_id: String,
    /// Fingerprint the receipt attests.
    pub fingerprint: Fingerprint,
    pub author: String,
    pub created_at: DateTime<Utc>,
    /// Block number (or equivalent) the registration landed in.
    pub block_reference: u64,
    /// Registrar-reported status (e.g. "success").
    pub status: String,
    /// Network the registrar wrote to (e.g. "local", "sepolia").
    pub network: String,
}

/// Registrar answer to a verification query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrarLookup {
    pub fingerprint: Fingerprint,
    pub exists: bool,
    pub author: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub transaction_ref: Option<String>,
    /// Metadata document registered with the attestation, when the registrar keeps it.
    #[serde(default)]
    pub metadata: Option<String>,
}

impl RegistrarLookup {
    /// A negative answer for a fingerprint the registrar has never seen.
    pub fn missing(fingerprint: Fingerprint) -> Self {
        Self {
            fingerprint,
            exists: false,
            author: None,
            created_at: None,
            transaction_ref: None,
            metadata: None,
        }
    }
}

/// A generated, fingerprinted, and registered piece of content.
///
/// Records are immutable once built; the store replaces or deletes them
/// whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Primary key.
    pub fingerprint: Fingerprint,
    pub payload: String,
    pub content_kind: ContentKind,
    pub prompt: String,
    pub author: String,
    pub receipt: Receipt,
    pub created_at: DateTime<Utc>,
    /// Where a third party can re-verify this record.
    pub verification_reference: String,
    /// Model that produced the payload.
    pub model_name: String,
    /// Provider that produced the payload.
    pub source_provider: String,
}

impl GenerationRecord {
    /// Listing view of this record with the payload truncated or redacted.
    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            fingerprint: self.fingerprint.clone(),
            prompt: self.prompt.clone(),
            content_kind: self.content_kind,
            author: self.author.clone(),
            created_at: self.created_at,
            content_preview: preview(self.content_kind, &self.payload),
            model_name: self.model_name.clone(),
            source_provider: self.source_provider.clone(),
        }
    }
}

/// Listing view of a [`GenerationRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub fingerprint: Fingerprint,
    pub prompt: String,
    pub content_kind: ContentKind,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub content_preview: String,
    pub model_name: String,
    pub source_provider: String,
}

fn preview(kind: ContentKind, payload: &str) -> String {
    match kind {
        ContentKind::Image => IMAGE_PREVIEW.to_string(),
        ContentKind::Text => {
            let head: String = payload.chars().take(PREVIEW_CHARS).collect();
            format!("{}...", head)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: ContentKind, payload: &str) -> GenerationRecord {
        let now = Utc::now();
        let fingerprint = Fingerprint::for_content(kind, "prompt", payload);
        GenerationRecord {
            fingerprint: fingerprint.clone(),
            payload: payload.to_string(),
            content_kind: kind,
            prompt: "prompt".to_string(),
            author: "alice".to_string(),
            receipt: Receipt {
                transaction_id: "tx".to_string(),
                fingerprint,
                author: "alice".to_string(),
                created_at: now,
                block_reference: 1,
                status: "success".to_string(),
                network: "local".to_string(),
            },
            created_at: now,
            verification_reference: "http://localhost/verify/x".to_string(),
            model_name: "smart-ai".to_string(),
            source_provider: "deterministic-fallback".to_string(),
        }
    }

    #[test]
    fn test_text_summary_truncates_on_char_boundary() {
        let long = "é".repeat(150);
        let summary = record(ContentKind::Text, &long).summary();
        assert_eq!(summary.content_preview.chars().count(), PREVIEW_CHARS + 3);
        assert!(summary.content_preview.ends_with("..."));
    }

    #[test]
    fn test_image_summary_is_redacted() {
        let summary = record(ContentKind::Image, "data:image/png;base64,AAAA").summary();
        assert_eq!(summary.content_preview, IMAGE_PREVIEW);
        assert_eq!(summary.author, "alice");
    }

    #[test]
    fn test_missing_lookup() {
        let lookup = RegistrarLookup::missing(Fingerprint::from("unknown"));
        assert!(!lookup.exists);
        assert!(lookup.author.is_none());
    }
}
