// crates/proofmark-store/src/lib.rs
//
// proofmark-store: Record storage for Proofmark.
//
// Provides the in-memory record table keyed by fingerprint. Nothing is
// persisted; the table lives exactly as long as the process that owns it.

pub mod memory;

// Re-export key types for ergonomic access from downstream crates.
pub use memory::InMemoryRecordStore;
