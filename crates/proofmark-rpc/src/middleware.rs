// crates/proofmark-rpc/src/middleware.rs
//
// Middleware for the RPC server.

use tonic::{Request, Status};

/// Logging interceptor for incoming requests.
///
/// Logs the metadata (headers) of each request using the `tracing` crate.
/// The method name lives in the body and is logged by the dispatcher.
pub fn logging_interceptor(req: Request<()>) -> Result<Request<()>, Status> {
    tracing::info!("Incoming RPC request: {:?}", req.metadata());
    Ok(req)
}
