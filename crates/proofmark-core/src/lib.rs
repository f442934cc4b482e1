// crates/proofmark-core/src/lib.rs
//
// proofmark-core: Core types, traits, and fingerprint primitives for Proofmark.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines the generation and record data model, the error taxonomy, the
// content fingerprint engine, and the trait seams for provider adapters,
// registrars, and record stores.

pub mod content;
pub mod error;
pub mod fingerprint;
pub mod record;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use proofmark_core::GenerationRecord;`

// Content types
pub use content::{ContentKind, GenerationRequest, GenerationResult, ResultOrigin};

// Record / registrar types
pub use record::{GenerationRecord, Receipt, RecordSummary, RegistrarLookup};

// Fingerprint
pub use fingerprint::Fingerprint;

// Error types
pub use error::{ProofmarkError, ProviderError, ProviderErrorKind};

// Traits
pub use traits::{ProviderAdapter, RecordStore, Registrar};
