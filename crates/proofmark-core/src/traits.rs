// crates/proofmark-core/src/traits.rs

use async_trait::async_trait;

use crate::content::{ContentKind, GenerationResult};
use crate::error::{ProofmarkError, ProviderError};
use crate::fingerprint::Fingerprint;
use crate::record::{GenerationRecord, Receipt, RegistrarLookup};

/// One external generation endpoint.
///
/// Implemented by the adapters in proofmark-generate. Adapters make a single
/// attempt per call and never retry; the orchestrator owns retry policy.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Stable identifier used in configuration and logs (e.g. "mistral").
    fn id(&self) -> &str;

    /// Content kind this adapter produces.
    fn kind(&self) -> ContentKind;

    /// Shape the prompt for this endpoint, call it once, and normalize the answer.
    async fn attempt(
        &self,
        prompt: &str,
        kind: ContentKind,
    ) -> Result<GenerationResult, ProviderError>;
}

/// External system of record for fingerprint -> author attestations.
///
/// Implemented by proofmark-registrar (local ledger and ledger gateway client).
#[async_trait]
pub trait Registrar: Send + Sync {
    /// Short label for health output (e.g. "local", "ledger").
    fn mode(&self) -> &str;

    /// Register a fingerprint with its author and a JSON metadata document.
    async fn register(
        &self,
        fingerprint: &Fingerprint,
        author: &str,
        metadata_json: &str,
    ) -> Result<Receipt, ProofmarkError>;

    /// Ask whether a fingerprint has been registered.
    async fn lookup(&self, fingerprint: &Fingerprint) -> Result<RegistrarLookup, ProofmarkError>;
}

/// Keyed table of generation records.
///
/// Implemented by proofmark-store. All operations are synchronous and each
/// one is atomic with respect to the others.
pub trait RecordStore: Send + Sync {
    /// Short label for health output (e.g. "in-memory").
    fn store_type(&self) -> &str;

    /// Insert a record, replacing any record with the same fingerprint.
    fn put(&self, record: GenerationRecord) -> Result<(), ProofmarkError>;

    /// Point lookup by fingerprint.
    fn get(&self, fingerprint: &Fingerprint) -> Result<Option<GenerationRecord>, ProofmarkError>;

    /// Snapshot of every record.
    fn list_all(&self) -> Result<Vec<GenerationRecord>, ProofmarkError>;

    /// Remove one record. Returns whether it existed.
    fn delete_by_key(&self, fingerprint: &Fingerprint) -> Result<bool, ProofmarkError>;

    /// Remove every record. Returns how many were removed.
    fn delete_all(&self) -> Result<usize, ProofmarkError>;

    /// Remove every record whose prompt contains `keyword` (case-insensitive).
    /// Returns the count and the removed keys.
    fn delete_where_prompt_contains(
        &self,
        keyword: &str,
    ) -> Result<(usize, Vec<Fingerprint>), ProofmarkError>;

    /// Number of records currently held.
    fn len(&self) -> Result<usize, ProofmarkError>;

    fn is_empty(&self) -> Result<bool, ProofmarkError> {
        Ok(self.len()? == 0)
    }
}
