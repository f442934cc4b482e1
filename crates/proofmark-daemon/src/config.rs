// crates/proofmark-daemon/src/config.rs
//
// Runtime configuration for the Proofmark daemon.
// Loaded from a TOML file or populated with defaults.

use serde::Deserialize;
use std::fs;

use proofmark_generate::ProviderSettings;

/// Runtime configuration for the daemon.
#[derive(Debug, Clone, Deserialize)]
pub struct DaemonConfig {
    /// Host address for the RPC server.
    #[serde(default = "default_rpc_host")]
    pub rpc_host: String,

    /// Port for the RPC server.
    #[serde(default = "default_rpc_port")]
    pub rpc_port: u16,

    /// Publicly reachable base URL, used in verification references.
    /// Defaults to `http://{rpc_host}:{rpc_port}`.
    #[serde(default)]
    pub public_url: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Provider chains, timeouts, and API keys.
    #[serde(default)]
    pub providers: ProviderSettings,

    #[serde(default)]
    pub registrar: RegistrarConfig,
}

/// Registrar backend selection.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrarConfig {
    /// "local" (in-process ledger) or "ledger" (external gateway).
    #[serde(default = "default_registrar_mode")]
    pub mode: String,

    /// Gateway URL, used when `mode = "ledger"`.
    #[serde(default = "default_ledger_url")]
    pub ledger_url: String,

    /// Network name passed to the gateway.
    #[serde(default = "default_network")]
    pub network: String,

    /// Per-request timeout for gateway calls, in seconds.
    #[serde(default = "default_registrar_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_rpc_host() -> String {
    "127.0.0.1".to_string()
}

fn default_rpc_port() -> u16 {
    50061
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_registrar_mode() -> String {
    "local".to_string()
}

fn default_ledger_url() -> String {
    "http://127.0.0.1:8545".to_string()
}

fn default_network() -> String {
    "sepolia".to_string()
}

fn default_registrar_timeout_secs() -> u64 {
    10
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            mode: default_registrar_mode(),
            ledger_url: default_ledger_url(),
            network: default_network(),
            timeout_secs: default_registrar_timeout_secs(),
        }
    }
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            rpc_host: default_rpc_host(),
            rpc_port: default_rpc_port(),
            public_url: None,
            log_level: default_log_level(),
            providers: ProviderSettings::default(),
            registrar: RegistrarConfig::default(),
        }
    }
}

impl DaemonConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: DaemonConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Base URL for verification references.
    pub fn public_url(&self) -> String {
        match &self.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://{}:{}", self.rpc_host, self.rpc_port),
        }
    }
}
