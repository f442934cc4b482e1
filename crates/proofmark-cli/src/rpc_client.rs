// crates/proofmark-cli/src/rpc_client.rs
//
// Lightweight JSON-RPC client that POSTs to the proofmark-daemon HTTP endpoint.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mirrors the server's JsonRpcRequest envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub method: String,
    pub params: serde_json::Value,
}

/// Mirrors the server's JsonRpcResponse envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub success: bool,
    pub result: Option<serde_json::Value>,
    pub error: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
}

/// Failure of a daemon call, as seen by the CLI.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Could not reach daemon at {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The daemon answered with `success: false`.
    #[error("{method} failed [{code}]: {message}")]
    Remote {
        method: String,
        code: String,
        message: String,
    },

    #[error("Unexpected response to {method}: {detail}")]
    Decode { method: String, detail: String },
}

/// Send a JSON-RPC call to the daemon and return the parsed response.
pub async fn rpc_call(
    endpoint: &str,
    method: &str,
    params: serde_json::Value,
) -> Result<JsonRpcResponse, RpcError> {
    let request = JsonRpcRequest {
        method: method.to_string(),
        params,
    };

    let transport = |source| RpcError::Transport {
        endpoint: endpoint.to_string(),
        source,
    };

    let client = reqwest::Client::new();
    let resp = client
        .post(endpoint)
        .json(&request)
        .send()
        .await
        .map_err(transport)?;

    let rpc_response: JsonRpcResponse = resp.json().await.map_err(|e| RpcError::Decode {
        method: method.to_string(),
        detail: e.to_string(),
    })?;
    Ok(rpc_response)
}

/// Call `method` and decode a successful result into `T`.
pub async fn call_for<T: DeserializeOwned>(
    endpoint: &str,
    method: &str,
    params: serde_json::Value,
) -> Result<T, RpcError> {
    let response = rpc_call(endpoint, method, params).await?;
    into_result(method, response)
}

fn into_result<T: DeserializeOwned>(method: &str, response: JsonRpcResponse) -> Result<T, RpcError> {
    if !response.success {
        return Err(RpcError::Remote {
            method: method.to_string(),
            code: response.error_code.unwrap_or_else(|| "unknown".to_string()),
            message: response.error.unwrap_or_default(),
        });
    }
    let value = response.result.ok_or_else(|| RpcError::Decode {
        method: method.to_string(),
        detail: "missing result".to_string(),
    })?;
    serde_json::from_value(value).map_err(|e| RpcError::Decode {
        method: method.to_string(),
        detail: e.to_string(),
    })
}
