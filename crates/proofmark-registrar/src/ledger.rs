// crates/proofmark-registrar/src/ledger.rs
//
// LedgerRegistrar: client for an external ledger gateway.
//
// The gateway fronts the chain and speaks the same JSON envelope as the
// Proofmark daemon: POST `{ "method", "params" }` to the base URL and read
// back `{ "success", "result", "error" }`. Signing, gas and chain access
// are the gateway's concern.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use proofmark_core::error::ProofmarkError;
use proofmark_core::fingerprint::Fingerprint;
use proofmark_core::record::{Receipt, RegistrarLookup};
use proofmark_core::traits::Registrar;

#[derive(Debug, Serialize)]
struct GatewayRequest<'a, P: Serialize> {
    method: &'a str,
    params: P,
}

#[derive(Debug, Deserialize)]
struct GatewayResponse {
    success: bool,
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct RegisterParams<'a> {
    fingerprint: &'a str,
    author: &'a str,
    metadata: &'a str,
    network: &'a str,
}

#[derive(Debug, Serialize)]
struct LookupParams<'a> {
    fingerprint: &'a str,
    network: &'a str,
}

/// Registrar backed by an external ledger gateway.
#[derive(Debug, Clone)]
pub struct LedgerRegistrar {
    /// Base URL of the gateway (e.g., "http://127.0.0.1:8545").
    pub base_url: String,
    /// Network the gateway should write to (e.g., "sepolia").
    pub network: String,
    client: reqwest::Client,
}

impl LedgerRegistrar {
    pub fn new(base_url: &str, network: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            network: network.to_string(),
            client,
        }
    }

    async fn call<P: Serialize>(
        &self,
        method: &str,
        params: P,
    ) -> Result<serde_json::Value, ProofmarkError> {
        let request = GatewayRequest { method, params };
        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProofmarkError::Registrar(format!("Ledger {} request failed: {}", method, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProofmarkError::Registrar(format!(
                "Ledger {} failed ({}): {}",
                method, status, body
            )));
        }

        let envelope: GatewayResponse = response.json().await.map_err(|e| {
            ProofmarkError::Registrar(format!("Ledger {} response parse failed: {}", method, e))
        })?;

        if !envelope.success {
            return Err(ProofmarkError::Registrar(
                envelope
                    .error
                    .unwrap_or_else(|| format!("Ledger {} rejected the request", method)),
            ));
        }

        envelope.result.ok_or_else(|| {
            ProofmarkError::Registrar(format!("Ledger {} response missing 'result'", method))
        })
    }
}

#[async_trait]
impl Registrar for LedgerRegistrar {
    fn mode(&self) -> &str {
        "ledger"
    }

    async fn register(
        &self,
        fingerprint: &Fingerprint,
        author: &str,
        metadata_json: &str,
    ) -> Result<Receipt, ProofmarkError> {
        let result = self
            .call(
                "registrar/register",
                RegisterParams {
                    fingerprint: fingerprint.as_str(),
                    author,
                    metadata: metadata_json,
                    network: &self.network,
                },
            )
            .await?;

        let receipt: Receipt = serde_json::from_value(result).map_err(|e| {
            ProofmarkError::Registrar(format!("Ledger returned an invalid receipt: {}", e))
        })?;
        if receipt.fingerprint != *fingerprint {
            return Err(ProofmarkError::Registrar(format!(
                "Ledger receipt is for {} but {} was registered",
                receipt.fingerprint, fingerprint
            )));
        }

        tracing::info!(
            "Ledger registered {} in block {} (tx {})",
            fingerprint,
            receipt.block_reference,
            receipt.transaction_id
        );
        Ok(receipt)
    }

    async fn lookup(&self, fingerprint: &Fingerprint) -> Result<RegistrarLookup, ProofmarkError> {
        let result = self
            .call(
                "registrar/lookup",
                LookupParams {
                    fingerprint: fingerprint.as_str(),
                    network: &self.network,
                },
            )
            .await?;

        serde_json::from_value(result).map_err(|e| {
            ProofmarkError::Registrar(format!("Ledger returned an invalid lookup: {}", e))
        })
    }
}
