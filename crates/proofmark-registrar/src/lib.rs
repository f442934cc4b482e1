// crates/proofmark-registrar/src/lib.rs
//
// proofmark-registrar: Registrar implementations for Proofmark.
//
// `LocalRegistrar` keeps attestations in process and is deterministic, so it
// backs tests and single-node deployments. `LedgerRegistrar` forwards
// registrations and lookups to an external ledger gateway over HTTP.

pub mod ledger;
pub mod local;

// Re-export key types for ergonomic access from downstream crates.
pub use ledger::LedgerRegistrar;
pub use local::LocalRegistrar;
