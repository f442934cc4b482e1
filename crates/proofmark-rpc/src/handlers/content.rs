// crates/proofmark-rpc/src/handlers/content.rs
//
// Content generation handler: GenerateContent.
//
// Generation itself cannot fail (the fallback chain always produces a
// payload). What can fail is validation before it and registration after
// it; a registration failure discards the generated content and nothing is
// stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use proofmark_core::content::{ContentKind, GenerationRequest, ResultOrigin};
use proofmark_core::error::ProofmarkError;
use proofmark_core::fingerprint::Fingerprint;
use proofmark_core::record::{GenerationRecord, Receipt};

use crate::context::ServiceContext;

// ---------------------------------------------------------------------------
// GenerateContent
// ---------------------------------------------------------------------------

/// Request to generate, fingerprint, and register a piece of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// The user prompt.
    #[serde(default)]
    pub prompt: String,
    /// Who the content is registered to.
    #[serde(default)]
    pub author: String,
    /// "text" (default) or "image".
    #[serde(default, alias = "content_type")]
    pub content_kind: ContentKind,
}

/// Which provider produced the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub source_provider: String,
    pub model_name: String,
    pub origin: ResultOrigin,
    pub note: Option<String>,
}

/// Response from a successful generation and registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    pub payload: String,
    pub fingerprint: Fingerprint,
    pub content_kind: ContentKind,
    pub prompt: String,
    pub author: String,
    pub receipt: Receipt,
    pub verification_reference: String,
    pub provider: ProviderInfo,
    pub created_at: DateTime<Utc>,
}

/// Metadata document handed to the registrar with each registration.
fn registration_metadata(
    prompt: &str,
    kind: ContentKind,
    model_name: &str,
    timestamp: DateTime<Utc>,
) -> Result<String, ProofmarkError> {
    let metadata = serde_json::json!({
        "prompt": prompt,
        "contentType": kind,
        "model": model_name,
        "timestamp": timestamp.to_rfc3339(),
    });
    Ok(serde_json::to_string(&metadata)?)
}

/// Handle a GenerateContent request.
pub async fn handle_generate_content(
    ctx: &ServiceContext,
    request: GenerateContentRequest,
) -> Result<GenerateContentResponse, ProofmarkError> {
    let generation = GenerationRequest::new(request.prompt, request.content_kind)?;
    let author = request.author;
    if author.trim().is_empty() {
        return Err(ProofmarkError::Validation("Author is required".to_string()));
    }

    let result = ctx.orchestrator.generate(&generation).await;
    let fingerprint =
        Fingerprint::for_content(generation.content_kind, &generation.prompt, &result.payload);

    let created_at = Utc::now();
    let metadata = registration_metadata(
        &generation.prompt,
        generation.content_kind,
        &result.model_name,
        created_at,
    )?;

    let receipt = match ctx.registrar.register(&fingerprint, &author, &metadata).await {
        Ok(receipt) => receipt,
        Err(e) => {
            tracing::error!(
                "Registration of {} failed after successful generation: {}",
                fingerprint,
                e
            );
            let reason = match e {
                ProofmarkError::Registrar(msg) => msg,
                other => other.to_string(),
            };
            return Err(ProofmarkError::Registrar(format!(
                "Content was generated but could not be registered: {}",
                reason
            )));
        }
    };

    let verification_reference = ctx.verification_reference(fingerprint.as_str());
    let record = GenerationRecord {
        fingerprint: fingerprint.clone(),
        payload: result.payload.clone(),
        content_kind: generation.content_kind,
        prompt: generation.prompt.clone(),
        author: author.clone(),
        receipt: receipt.clone(),
        created_at,
        verification_reference: verification_reference.clone(),
        model_name: result.model_name.clone(),
        source_provider: result.source_provider.clone(),
    };
    ctx.store.put(record)?;

    tracing::info!(
        "Generated {} content {} for '{}' via {} (tx {})",
        generation.content_kind,
        fingerprint,
        author,
        result.source_provider,
        receipt.transaction_id
    );

    Ok(GenerateContentResponse {
        payload: result.payload,
        fingerprint,
        content_kind: generation.content_kind,
        prompt: generation.prompt,
        author,
        receipt,
        verification_reference,
        provider: ProviderInfo {
            source_provider: result.source_provider,
            model_name: result.model_name,
            origin: result.origin,
            note: result.note,
        },
        created_at,
    })
}
