// crates/proofmark-cli/src/commands/status.rs
//
// `proofmark status` -- display daemon health and version info.

use serde::{Deserialize, Serialize};

use crate::output::{format_json, OutputFormat};
use crate::rpc_client::call_for;

#[derive(Debug, Serialize, Deserialize)]
struct NodeInfo {
    service: String,
    version: String,
    methods: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Health {
    status: String,
    uptime_seconds: u64,
    record_count: usize,
    store_type: String,
    registrar_mode: String,
    text_providers: Vec<String>,
    image_providers: Vec<String>,
    details: Option<String>,
}

#[derive(Debug, Serialize)]
struct Status {
    info: NodeInfo,
    health: Health,
}

/// Run the status command.
pub async fn run(rpc: &str, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let info: NodeInfo = call_for(rpc, "node/info", serde_json::json!({})).await?;
    let health: Health = call_for(rpc, "node/health", serde_json::json!({})).await?;

    if format == OutputFormat::Json {
        println!("{}", format_json(&Status { info, health }));
        return Ok(());
    }

    println!("{} v{}", info.service, info.version);
    println!();
    println!("Daemon Status");
    println!("-------------");
    println!("  RPC endpoint:     {}", rpc);
    println!("  Status:           {}", health.status);
    println!("  Uptime:           {}", format_uptime(health.uptime_seconds));
    println!("  Records:          {} ({})", health.record_count, health.store_type);
    println!("  Registrar:        {}", health.registrar_mode);
    println!("  Text providers:   {}", join_or_none(&health.text_providers));
    println!("  Image providers:  {}", join_or_none(&health.image_providers));
    if let Some(details) = &health.details {
        println!("  Details:          {}", details);
    }

    Ok(())
}

fn join_or_none(ids: &[String]) -> String {
    if ids.is_empty() {
        "(none, fallback only)".to_string()
    } else {
        ids.join(", ")
    }
}

fn format_uptime(seconds: u64) -> String {
    let (h, m, s) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    if h > 0 {
        format!("{}h {}m {}s", h, m, s)
    } else if m > 0 {
        format!("{}m {}s", m, s)
    } else {
        format!("{}s", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(42), "42s");
        assert_eq!(format_uptime(125), "2m 5s");
        assert_eq!(format_uptime(3725), "1h 2m 5s");
    }

    #[test]
    fn test_join_or_none() {
        assert_eq!(join_or_none(&[]), "(none, fallback only)");
        assert_eq!(
            join_or_none(&["mistral".to_string(), "cohere".to_string()]),
            "mistral, cohere"
        );
    }
}
