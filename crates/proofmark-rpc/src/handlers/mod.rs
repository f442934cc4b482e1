// crates/proofmark-rpc/src/handlers/mod.rs
//
// Handler modules for all RPC endpoints.
// Each module defines request/response types and handler functions
// for a specific API group.

pub mod content;
pub mod node;
pub mod records;
pub mod verify;
