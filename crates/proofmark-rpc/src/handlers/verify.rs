// crates/proofmark-rpc/src/handlers/verify.rs
//
// Verification handlers: VerifyByFingerprint, VerifyByContent.
//
// An unknown fingerprint is a negative answer (`found: false`), never an
// error. Only missing input and registrar failures are errors.

use serde::{Deserialize, Serialize};

use proofmark_core::error::ProofmarkError;
use proofmark_core::fingerprint::Fingerprint;
use proofmark_core::record::{GenerationRecord, RegistrarLookup};

use crate::context::ServiceContext;

/// Outcome of a verification query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResponse {
    pub fingerprint: Fingerprint,
    /// Whether the record store holds a record for the fingerprint.
    pub found: bool,
    /// Whether the registrar attests the fingerprint.
    pub verified: bool,
    pub record: Option<GenerationRecord>,
    pub registrar: Option<RegistrarLookup>,
    pub message: String,
}

fn message(found: bool, verified: bool) -> String {
    match (found, verified) {
        (true, true) => "Content verified".to_string(),
        (true, false) => "Content found but not verified by the registrar".to_string(),
        (false, true) => "Fingerprint registered but no local record".to_string(),
        (false, false) => "Content not found".to_string(),
    }
}

// ---------------------------------------------------------------------------
// VerifyByFingerprint
// ---------------------------------------------------------------------------

/// Request to verify a fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyByFingerprintRequest {
    #[serde(default)]
    pub fingerprint: String,
}

/// Handle a VerifyByFingerprint request.
///
/// The registrar is only consulted for fingerprints the store knows.
pub async fn handle_verify_by_fingerprint(
    ctx: &ServiceContext,
    request: VerifyByFingerprintRequest,
) -> Result<VerificationResponse, ProofmarkError> {
    let raw = request.fingerprint.trim();
    if raw.is_empty() {
        return Err(ProofmarkError::Validation("Fingerprint is required".to_string()));
    }
    let fingerprint = Fingerprint::from(raw);

    let Some(record) = ctx.store.get(&fingerprint)? else {
        tracing::debug!("Verification of unknown fingerprint {}", fingerprint);
        return Ok(VerificationResponse {
            fingerprint,
            found: false,
            verified: false,
            record: None,
            registrar: None,
            message: message(false, false),
        });
    };

    let lookup = ctx.registrar.lookup(&fingerprint).await?;
    let verified = lookup.exists;
    Ok(VerificationResponse {
        fingerprint,
        found: true,
        verified,
        record: Some(record),
        registrar: Some(lookup),
        message: message(true, verified),
    })
}

// ---------------------------------------------------------------------------
// VerifyByContent
// ---------------------------------------------------------------------------

/// Request to verify raw text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyByContentRequest {
    #[serde(default)]
    pub content: String,
}

/// Handle a VerifyByContent request.
///
/// The fingerprint is recomputed from the content bytes. Image records are
/// keyed by their prompt, so passing an image prompt here finds them too.
pub async fn handle_verify_by_content(
    ctx: &ServiceContext,
    request: VerifyByContentRequest,
) -> Result<VerificationResponse, ProofmarkError> {
    if request.content.is_empty() {
        return Err(ProofmarkError::Validation("Content is required".to_string()));
    }
    let fingerprint = Fingerprint::of(request.content.as_bytes());

    let record = ctx.store.get(&fingerprint)?;
    let lookup = ctx.registrar.lookup(&fingerprint).await?;
    let found = record.is_some();
    let verified = lookup.exists;

    Ok(VerificationResponse {
        fingerprint,
        found,
        verified,
        record,
        registrar: Some(lookup),
        message: message(found, verified),
    })
}
