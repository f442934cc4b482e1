// crates/proofmark-rpc/src/server.rs
//
// RPC server setup: ProofmarkRpcServer and RpcConfig.
//
// A single tonic service accepts JSON-encoded `{ method, params }` requests,
// dispatches on the method name, and answers with a JSON envelope. HTTP/1 is
// enabled so plain HTTP clients (the CLI, curl) can call it without gRPC
// framing or proto codegen.

use std::sync::Arc;

use http_body::Body as HttpBody;
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize};
use tonic::transport::Server;
use tonic::Status;

use proofmark_core::error::ProofmarkError;

use crate::context::ServiceContext;
use crate::handlers;
use crate::middleware;

/// Every method `RpcService::dispatch` understands.
pub const SUPPORTED_METHODS: &[&str] = &[
    "content/generate",
    "verify/fingerprint",
    "verify/content",
    "records/list",
    "records/delete",
    "records/delete_all",
    "records/delete_by_prompt",
    "node/info",
    "node/health",
];

// ---------------------------------------------------------------------------
// RpcConfig
// ---------------------------------------------------------------------------

/// Configuration for the RPC server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// Host to bind to (e.g., "127.0.0.1" or "0.0.0.0").
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 50061,
        }
    }
}

// ---------------------------------------------------------------------------
// JSON-RPC Envelope
// ---------------------------------------------------------------------------

/// A JSON-RPC-style request envelope.
/// The client sends a method name and a JSON params payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// The RPC method to invoke (e.g., "content/generate").
    pub method: String,
    /// JSON-encoded parameters for the method.
    #[serde(default)]
    pub params: serde_json::Value,
}

/// A JSON-RPC-style response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Whether the request succeeded.
    pub success: bool,
    /// The result data (if success).
    pub result: Option<serde_json::Value>,
    /// Error message (if not success).
    pub error: Option<String>,
    /// Machine-readable error class (if not success), e.g. "validation".
    pub error_code: Option<String>,
}

impl JsonRpcResponse {
    pub fn ok(value: serde_json::Value) -> Self {
        Self {
            success: true,
            result: Some(value),
            error: None,
            error_code: None,
        }
    }

    pub fn err(code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(message.into()),
            error_code: Some(code.to_string()),
        }
    }
}

impl From<ProofmarkError> for JsonRpcResponse {
    fn from(e: ProofmarkError) -> Self {
        JsonRpcResponse::err(e.code(), e.to_string())
    }
}

// ---------------------------------------------------------------------------
// ProofmarkRpcServer
// ---------------------------------------------------------------------------

/// The main RPC server for Proofmark.
#[derive(Debug, Clone)]
pub struct ProofmarkRpcServer {
    config: RpcConfig,
    context: Arc<ServiceContext>,
}

impl ProofmarkRpcServer {
    pub fn new(config: RpcConfig, context: ServiceContext) -> Self {
        Self {
            config,
            context: Arc::new(context),
        }
    }

    /// The dispatcher this server serves, for in-process callers.
    pub fn service(&self) -> RpcService {
        RpcService {
            ctx: self.context.clone(),
        }
    }

    /// Start the RPC server and listen for requests.
    ///
    /// This binds to the configured address and serves requests until
    /// the process is terminated.
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = format!("{}:{}", self.config.host, self.config.port).parse()?;

        tracing::info!("Proofmark RPC server starting on {}", addr);

        Server::builder()
            .accept_http1(true)
            .add_service(tonic::service::interceptor::InterceptedService::new(
                ProofmarkJsonRpcServer::new(self.service()),
                middleware::logging_interceptor,
            ))
            .serve(addr)
            .await?;

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Method dispatcher over a shared `ServiceContext`.
#[derive(Debug, Clone)]
pub struct RpcService {
    ctx: Arc<ServiceContext>,
}

impl RpcService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx: Arc::new(ctx) }
    }

    /// Dispatch a JSON-RPC request to the appropriate handler based on the method name.
    pub async fn dispatch(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        tracing::debug!("Dispatching {}", request.method);
        let ctx = self.ctx.as_ref();
        let params = request.params;

        let result = match request.method.as_str() {
            // Generation
            "content/generate" => {
                dispatch_handler(params, |r| handlers::content::handle_generate_content(ctx, r))
                    .await
            }

            // Verification
            "verify/fingerprint" => {
                dispatch_handler(params, |r| {
                    handlers::verify::handle_verify_by_fingerprint(ctx, r)
                })
                .await
            }
            "verify/content" => {
                dispatch_handler(params, |r| handlers::verify::handle_verify_by_content(ctx, r))
                    .await
            }

            // Records
            "records/list" => {
                dispatch_handler(params, |r| handlers::records::handle_list_records(ctx, r)).await
            }
            "records/delete" => {
                dispatch_handler(params, |r| handlers::records::handle_delete_record(ctx, r)).await
            }
            "records/delete_all" => {
                dispatch_handler(params, |r| handlers::records::handle_delete_all(ctx, r)).await
            }
            "records/delete_by_prompt" => {
                dispatch_handler(params, |r| handlers::records::handle_delete_by_prompt(ctx, r))
                    .await
            }

            // Node
            "node/info" => dispatch_handler(params, handlers::node::handle_get_node_info).await,
            "node/health" => {
                dispatch_handler(params, |r| handlers::node::handle_get_health(ctx, r)).await
            }

            _ => Err(ProofmarkError::Validation(format!(
                "Unknown method: {}",
                request.method
            ))),
        };

        match result {
            Ok(value) => JsonRpcResponse::ok(value),
            Err(e) => {
                tracing::warn!("{} failed [{}]: {}", request.method, e.code(), e);
                e.into()
            }
        }
    }
}

/// Generic dispatch helper: deserialize params into a request type,
/// call the handler, and serialize the result to JSON.
///
/// Missing params are treated as an empty object.
async fn dispatch_handler<Req, Resp, F, Fut>(
    params: serde_json::Value,
    handler: F,
) -> Result<serde_json::Value, ProofmarkError>
where
    Req: serde::de::DeserializeOwned,
    Resp: serde::Serialize,
    F: FnOnce(Req) -> Fut,
    Fut: std::future::Future<Output = Result<Resp, ProofmarkError>>,
{
    let params = if params.is_null() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        params
    };
    let request: Req = serde_json::from_value(params)
        .map_err(|e| ProofmarkError::Validation(format!("Failed to deserialize request: {}", e)))?;
    let response = handler(request).await?;
    Ok(serde_json::to_value(response)?)
}

// ---------------------------------------------------------------------------
// Tonic Service Wiring
// ---------------------------------------------------------------------------
// A single service whose request and response bodies are raw JSON bytes
// (JsonRpcRequest / JsonRpcResponse). No proto codegen is involved.

/// The tonic service wrapper. Accepts bytes, deserializes them as a
/// JSON-RPC request, and dispatches.
#[derive(Clone)]
pub struct ProofmarkJsonRpcServer {
    inner: RpcService,
}

impl std::fmt::Debug for ProofmarkJsonRpcServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProofmarkJsonRpcServer").finish()
    }
}

impl ProofmarkJsonRpcServer {
    fn new(inner: RpcService) -> Self {
        Self { inner }
    }
}

impl tonic::server::NamedService for ProofmarkJsonRpcServer {
    const NAME: &'static str = "proofmark.rpc.ProofmarkService";
}

impl<B> tower_service::Service<http::Request<B>> for ProofmarkJsonRpcServer
where
    B: HttpBody + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>> + Send,
    B::Data: Send,
{
    type Response = http::Response<tonic::body::BoxBody>;
    type Error = std::convert::Infallible;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        std::task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        let inner = self.inner.clone();

        Box::pin(async move {
            let body_bytes = match collect_body(req.into_body()).await {
                Ok(b) => b,
                Err(e) => {
                    tracing::error!("Failed to read request body: {}", e);
                    let resp = JsonRpcResponse::err(
                        "validation",
                        format!("Failed to read request body: {}", e),
                    );
                    return Ok(build_response(&resp));
                }
            };

            let rpc_request: JsonRpcRequest = match serde_json::from_slice(&body_bytes) {
                Ok(r) => r,
                Err(e) => {
                    let resp = JsonRpcResponse::err(
                        "validation",
                        format!("Invalid JSON-RPC request: {}", e),
                    );
                    return Ok(build_response(&resp));
                }
            };

            let rpc_response = inner.dispatch(rpc_request).await;
            Ok(build_response(&rpc_response))
        })
    }
}

/// Collect the body of an HTTP request into bytes.
async fn collect_body<B>(body: B) -> Result<Vec<u8>, String>
where
    B: HttpBody + Send,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    B::Data: Send,
{
    let mut collected = Vec::new();
    let mut body = std::pin::pin!(body);

    loop {
        match std::future::poll_fn(|cx| HttpBody::poll_frame(body.as_mut(), cx)).await {
            Some(Ok(frame)) => {
                if let Ok(data) = frame.into_data() {
                    use bytes::Buf;
                    collected.extend_from_slice(data.chunk());
                }
            }
            Some(Err(e)) => return Err(e.into().to_string()),
            None => break,
        }
    }

    Ok(collected)
}

/// Build an HTTP 200 response carrying the JSON envelope.
fn build_response(envelope: &JsonRpcResponse) -> http::Response<tonic::body::BoxBody> {
    let json = serde_json::to_vec(envelope).unwrap_or_default();
    let body = tonic::body::BoxBody::new(
        http_body_util::Full::new(bytes::Bytes::from(json))
            .map_err(|e| Status::internal(format!("body error: {}", e))),
    );

    let mut response = http::Response::new(body);
    response.headers_mut().insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static("application/json"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_carries_code() {
        let resp: JsonRpcResponse = ProofmarkError::Registrar("down".into()).into();
        assert!(!resp.success);
        assert_eq!(resp.error_code.as_deref(), Some("registrar"));
        assert!(resp.error.unwrap().contains("down"));
    }

    #[test]
    fn test_request_params_default_to_null() {
        let req: JsonRpcRequest = serde_json::from_str(r#"{"method":"node/info"}"#).unwrap();
        assert!(req.params.is_null());
    }

    #[test]
    fn test_build_response_sets_json_content_type() {
        let resp = build_response(&JsonRpcResponse::ok(serde_json::json!({"a": 1})));
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_dispatch_handler_treats_null_as_empty_object() {
        let value = dispatch_handler(serde_json::Value::Null, handlers::node::handle_get_node_info)
            .await
            .unwrap();
        assert_eq!(value["service"], "proofmark");
        assert_eq!(value["methods"].as_array().unwrap().len(), SUPPORTED_METHODS.len());
    }
}
