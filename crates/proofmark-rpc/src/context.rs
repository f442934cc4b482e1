// crates/proofmark-rpc/src/context.rs
//
// ServiceContext: the state every handler works against.
//
// The daemon creates one context at startup and hands it to the server;
// the record store inside it lives exactly as long as the process. Tests
// build their own contexts around mock collaborators.

use std::sync::Arc;
use std::time::Instant;

use proofmark_core::traits::{RecordStore, Registrar};
use proofmark_generate::FallbackOrchestrator;

/// Shared, owned state for request handlers.
#[derive(Clone)]
pub struct ServiceContext {
    /// Provider chains plus deterministic fallback.
    pub orchestrator: Arc<FallbackOrchestrator>,
    /// System of record for fingerprint attestations.
    pub registrar: Arc<dyn Registrar>,
    /// Generation records keyed by fingerprint.
    pub store: Arc<dyn RecordStore>,
    /// Base URL used to build verification references.
    pub public_url: String,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("registrar", &self.registrar.mode())
            .field("store", &self.store.store_type())
            .field("public_url", &self.public_url)
            .finish()
    }
}

impl ServiceContext {
    pub fn new(
        orchestrator: Arc<FallbackOrchestrator>,
        registrar: Arc<dyn Registrar>,
        store: Arc<dyn RecordStore>,
        public_url: &str,
    ) -> Self {
        Self {
            orchestrator,
            registrar,
            store,
            public_url: public_url.trim_end_matches('/').to_string(),
            start_time: Instant::now(),
        }
    }

    /// Where a third party can re-verify `fingerprint`.
    pub fn verification_reference(&self, fingerprint: &str) -> String {
        format!("{}/verify/{}", self.public_url, fingerprint)
    }
}
