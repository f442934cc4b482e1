// crates/proofmark-rpc/src/handlers/node.rs
//
// Node info and health handlers: GetNodeInfo, GetHealth.

use serde::{Deserialize, Serialize};

use proofmark_core::content::ContentKind;
use proofmark_core::error::ProofmarkError;

use crate::context::ServiceContext;
use crate::server::SUPPORTED_METHODS;

// ---------------------------------------------------------------------------
// GetNodeInfo
// ---------------------------------------------------------------------------

/// Request for node information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetNodeInfoRequest {}

/// Response containing node information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetNodeInfoResponse {
    pub service: String,
    /// Software version.
    pub version: String,
    /// JSON-RPC methods this node answers.
    pub methods: Vec<String>,
}

pub async fn handle_get_node_info(
    _request: GetNodeInfoRequest,
) -> Result<GetNodeInfoResponse, ProofmarkError> {
    Ok(GetNodeInfoResponse {
        service: "proofmark".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        methods: SUPPORTED_METHODS.iter().map(|m| m.to_string()).collect(),
    })
}

// ---------------------------------------------------------------------------
// GetHealth
// ---------------------------------------------------------------------------

/// Request for node health status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetHealthRequest {}

/// Response containing node health status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetHealthResponse {
    /// Overall health: "healthy" or "degraded".
    pub status: String,
    pub uptime_seconds: u64,
    pub record_count: usize,
    /// Record store backend (always "in-memory" today; not durable).
    pub store_type: String,
    /// Registrar backend: "local" or "ledger".
    pub registrar_mode: String,
    /// Text providers in attempt order.
    pub text_providers: Vec<String>,
    /// Image providers in attempt order.
    pub image_providers: Vec<String>,
    pub details: Option<String>,
}

/// Handle a GetHealth request.
///
/// A store that cannot be read reports "degraded" rather than failing the call.
pub async fn handle_get_health(
    ctx: &ServiceContext,
    _request: GetHealthRequest,
) -> Result<GetHealthResponse, ProofmarkError> {
    let (status, record_count, details) = match ctx.store.len() {
        Ok(count) => ("healthy", count, None),
        Err(e) => ("degraded", 0, Some(e.to_string())),
    };

    Ok(GetHealthResponse {
        status: status.to_string(),
        uptime_seconds: ctx.start_time.elapsed().as_secs(),
        record_count,
        store_type: ctx.store.store_type().to_string(),
        registrar_mode: ctx.registrar.mode().to_string(),
        text_providers: ctx.orchestrator.provider_ids(ContentKind::Text),
        image_providers: ctx.orchestrator.provider_ids(ContentKind::Image),
        details,
    })
}
