// crates/proofmark-registrar/src/local.rs
//
// LocalRegistrar: an in-process, append-only attestation ledger.
//
// Every registration is kept, including repeats of the same fingerprint.
// Lookups answer with the earliest attestation, which is the one that
// establishes authorship. Block references come from a monotonically
// increasing counter and transaction ids are derived by hashing, so two
// registrars fed the same sequence produce the same ids.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use sha2::{Digest, Sha256};

use proofmark_core::error::ProofmarkError;
use proofmark_core::fingerprint::Fingerprint;
use proofmark_core::record::{Receipt, RegistrarLookup};
use proofmark_core::traits::Registrar;

/// Network label reported in receipts.
pub const LOCAL_NETWORK: &str = "local";

#[derive(Debug, Clone)]
struct Attestation {
    receipt: Receipt,
    metadata_json: String,
}

/// In-process registrar.
#[derive(Debug)]
pub struct LocalRegistrar {
    ledger: RwLock<HashMap<Fingerprint, Vec<Attestation>>>,
    next_block: AtomicU64,
}

impl LocalRegistrar {
    /// Create an empty ledger. The first registration lands in block 1.
    pub fn new() -> Self {
        Self {
            ledger: RwLock::new(HashMap::new()),
            next_block: AtomicU64::new(1),
        }
    }
}

impl Default for LocalRegistrar {
    fn default() -> Self {
        Self::new()
    }
}

/// Transaction id of the `block`-th registration.
fn transaction_id(fingerprint: &Fingerprint, author: &str, block: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(fingerprint.as_str().as_bytes());
    hasher.update(b"|");
    hasher.update(author.as_bytes());
    hasher.update(b"|");
    hasher.update(block.to_be_bytes());
    format!("0x{}", hex::encode(hasher.finalize()))
}

#[async_trait]
impl Registrar for LocalRegistrar {
    fn mode(&self) -> &str {
        "local"
    }

    async fn register(
        &self,
        fingerprint: &Fingerprint,
        author: &str,
        metadata_json: &str,
    ) -> Result<Receipt, ProofmarkError> {
        if author.trim().is_empty() {
            return Err(ProofmarkError::Registrar(
                "Author is required for registration".to_string(),
            ));
        }

        let mut ledger = self
            .ledger
            .write()
            .map_err(|e| ProofmarkError::Registrar(format!("RwLock poisoned: {}", e)))?;

        // Allocate the block under the write lock so block order matches ledger order.
        let block = self.next_block.fetch_add(1, Ordering::SeqCst);
        let receipt = Receipt {
            transaction_id: transaction_id(fingerprint, author, block),
            fingerprint: fingerprint.clone(),
            author: author.to_string(),
            created_at: Utc::now(),
            block_reference: block,
            status: "success".to_string(),
            network: LOCAL_NETWORK.to_string(),
        };

        ledger
            .entry(fingerprint.clone())
            .or_default()
            .push(Attestation {
                receipt: receipt.clone(),
                metadata_json: metadata_json.to_string(),
            });

        tracing::debug!(
            "Registered {} for '{}' in block {}",
            fingerprint,
            author,
            block
        );
        Ok(receipt)
    }

    async fn lookup(&self, fingerprint: &Fingerprint) -> Result<RegistrarLookup, ProofmarkError> {
        let ledger = self
            .ledger
            .read()
            .map_err(|e| ProofmarkError::Registrar(format!("RwLock poisoned: {}", e)))?;

        let lookup = match ledger.get(fingerprint).and_then(|entries| entries.first()) {
            Some(first) => RegistrarLookup {
                fingerprint: fingerprint.clone(),
                exists: true,
                author: Some(first.receipt.author.clone()),
                created_at: Some(first.receipt.created_at),
                transaction_ref: Some(first.receipt.transaction_id.clone()),
                metadata: Some(first.metadata_json.clone()),
            },
            None => RegistrarLookup::missing(fingerprint.clone()),
        };
        Ok(lookup)
    }
}
