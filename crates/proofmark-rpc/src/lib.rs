// crates/proofmark-rpc/src/lib.rs
//
// proofmark-rpc: JSON-RPC server and handlers for Proofmark.
//
// Exposes generation, verification, and record management as JSON-RPC
// methods served over tonic with HTTP/1 enabled, so plain HTTP clients
// can POST `{ "method", "params" }` envelopes.

pub mod context;
pub mod handlers;
pub mod middleware;
pub mod server;

// Re-export the main server types for ergonomic access.
pub use context::ServiceContext;
pub use server::{JsonRpcRequest, JsonRpcResponse, ProofmarkRpcServer, RpcConfig, RpcService};
