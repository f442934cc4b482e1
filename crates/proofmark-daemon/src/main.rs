// crates/proofmark-daemon/src/main.rs
//
// Binary entrypoint for the Proofmark daemon.
//
// Parses CLI arguments, loads configuration, initializes tracing, builds
// the owned record store, registrar, and provider orchestrator, and serves
// the JSON-RPC API until interrupted.

mod config;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use config::{DaemonConfig, RegistrarConfig};

use proofmark_core::traits::Registrar;
use proofmark_generate::build_orchestrator;
use proofmark_registrar::{LedgerRegistrar, LocalRegistrar};
use proofmark_rpc::{ProofmarkRpcServer, RpcConfig, ServiceContext};
use proofmark_store::InMemoryRecordStore;

/// Proofmark daemon: generates, fingerprints, registers, and verifies content.
#[derive(Parser, Debug)]
#[command(name = "proofmark-daemon", version = "0.1.0", about = "Proofmark content authentication daemon")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "~/.proofmark/config.toml")]
    config: String,

    /// Override the RPC bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the RPC bind port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config_path = expand_tilde(&args.config);

    // Load before tracing is up so the configured log level applies; report
    // the outcome once the subscriber exists.
    let loaded = DaemonConfig::load(&config_path);
    let mut daemon_config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => DaemonConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&daemon_config.log_level)),
        )
        .init();

    match loaded {
        Ok(_) => tracing::info!("Loaded configuration from {}", config_path),
        Err(e) => tracing::warn!(
            "Could not load config from {}: {}. Using defaults.",
            config_path,
            e
        ),
    }

    // CLI flags override the config file values.
    if let Some(host) = args.host {
        daemon_config.rpc_host = host;
    }
    if let Some(port) = args.port {
        daemon_config.rpc_port = port;
    }

    tracing::info!("Proofmark Daemon v0.1.0");
    tracing::info!(
        "RPC endpoint: {}:{}",
        daemon_config.rpc_host,
        daemon_config.rpc_port
    );

    let orchestrator = build_orchestrator(&daemon_config.providers)?;
    tracing::info!(
        "Text providers: [{}], image providers: [{}]",
        daemon_config.providers.text_order.join(", "),
        daemon_config.providers.image_order.join(", ")
    );

    let registrar = build_registrar(&daemon_config.registrar)?;
    tracing::info!("Registrar mode: {}", registrar.mode());

    // The store is owned here and lives for the life of the process.
    let store = Arc::new(InMemoryRecordStore::new());
    tracing::warn!("Records are held in memory and will be lost on restart");

    let context = ServiceContext::new(
        Arc::new(orchestrator),
        registrar,
        store,
        &daemon_config.public_url(),
    );

    let rpc_config = RpcConfig {
        host: daemon_config.rpc_host.clone(),
        port: daemon_config.rpc_port,
    };
    let rpc_server = ProofmarkRpcServer::new(rpc_config, context);

    tokio::select! {
        result = rpc_server.start() => {
            if let Err(e) = result {
                tracing::error!("RPC server error: {}", e);
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received interrupt, shutting down");
        }
    }

    tracing::info!("Proofmark daemon shut down gracefully");
    Ok(())
}

/// Construct the registrar selected by `config.mode`.
fn build_registrar(config: &RegistrarConfig) -> Result<Arc<dyn Registrar>, Box<dyn std::error::Error>> {
    match config.mode.as_str() {
        "local" => Ok(Arc::new(LocalRegistrar::new())),
        "ledger" => {
            tracing::info!(
                "Using ledger gateway at {} (network {})",
                config.ledger_url,
                config.network
            );
            Ok(Arc::new(LedgerRegistrar::new(
                &config.ledger_url,
                &config.network,
                Duration::from_secs(config.timeout_secs),
            )))
        }
        other => Err(format!("Unknown registrar mode: {}. Use 'local' or 'ledger'.", other).into()),
    }
}

/// Expand a leading `~/` to the user's home directory.
fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}/{}", home.display(), rest);
        }
    }
    path.to_string()
}
