// crates/proofmark-store/src/memory.rs
//
// In-memory record store implementing the `RecordStore` trait.
//
// A single HashMap behind a RwLock. Every operation takes the lock once, so
// a put or delete is atomic with respect to every other operation and no
// record is ever partially visible. Contents are lost on restart.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use proofmark_core::error::ProofmarkError;
use proofmark_core::fingerprint::Fingerprint;
use proofmark_core::record::GenerationRecord;
use proofmark_core::traits::RecordStore;

/// In-memory table of generation records keyed by fingerprint.
#[derive(Debug)]
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<Fingerprint, GenerationRecord>>,
}

impl InMemoryRecordStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<Fingerprint, GenerationRecord>>, ProofmarkError> {
        self.records
            .read()
            .map_err(|e| ProofmarkError::Storage(format!("RwLock poisoned: {}", e)))
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<Fingerprint, GenerationRecord>>, ProofmarkError> {
        self.records
            .write()
            .map_err(|e| ProofmarkError::Storage(format!("RwLock poisoned: {}", e)))
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn store_type(&self) -> &str {
        "in-memory"
    }

    fn put(&self, record: GenerationRecord) -> Result<(), ProofmarkError> {
        let mut records = self.write()?;
        if records.insert(record.fingerprint.clone(), record).is_some() {
            tracing::debug!("Replaced existing record with the same fingerprint");
        }
        Ok(())
    }

    fn get(&self, fingerprint: &Fingerprint) -> Result<Option<GenerationRecord>, ProofmarkError> {
        Ok(self.read()?.get(fingerprint).cloned())
    }

    fn list_all(&self) -> Result<Vec<GenerationRecord>, ProofmarkError> {
        let records = self.read()?;
        let mut all: Vec<GenerationRecord> = records.values().cloned().collect();
        // HashMap iteration order is arbitrary; give callers a stable order.
        all.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.fingerprint.cmp(&b.fingerprint))
        });
        Ok(all)
    }

    fn delete_by_key(&self, fingerprint: &Fingerprint) -> Result<bool, ProofmarkError> {
        let existed = self.write()?.remove(fingerprint).is_some();
        tracing::info!("Deleted record {}: existed={}", fingerprint, existed);
        Ok(existed)
    }

    fn delete_all(&self) -> Result<usize, ProofmarkError> {
        let mut records = self.write()?;
        let count = records.len();
        records.clear();
        tracing::info!("Deleted all records: {} removed", count);
        Ok(count)
    }

    fn delete_where_prompt_contains(
        &self,
        keyword: &str,
    ) -> Result<(usize, Vec<Fingerprint>), ProofmarkError> {
        let needle = keyword.to_lowercase();
        let mut records = self.write()?;

        let mut removed: Vec<Fingerprint> = records
            .values()
            .filter(|r| r.prompt.to_lowercase().contains(&needle))
            .map(|r| r.fingerprint.clone())
            .collect();
        removed.sort();
        for fingerprint in &removed {
            records.remove(fingerprint);
        }

        tracing::info!(
            "Deleted {} records with prompt containing '{}'",
            removed.len(),
            keyword
        );
        Ok((removed.len(), removed))
    }

    fn len(&self) -> Result<usize, ProofmarkError> {
        Ok(self.read()?.len())
    }
}
