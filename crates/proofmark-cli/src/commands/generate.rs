// crates/proofmark-cli/src/commands/generate.rs
//
// `proofmark generate` -- generate, fingerprint, and register content.

use chrono::{DateTime, Utc};
use clap::Args;
use serde::{Deserialize, Serialize};

use proofmark_core::{ContentKind, Fingerprint, Receipt, ResultOrigin};

use crate::output::{format_json, truncate, OutputFormat};
use crate::rpc_client::call_for;

/// Arguments for `proofmark generate`.
#[derive(Debug, Args)]
pub struct GenerateCmd {
    /// Prompt describing the content to generate.
    pub prompt: String,

    /// Author to register the content under.
    #[arg(long)]
    pub author: String,

    /// Content kind: text or image.
    #[arg(long, default_value = "text")]
    pub kind: ContentKind,

    /// Print the full payload even when it is long.
    #[arg(long)]
    pub full: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ProviderInfo {
    source_provider: String,
    model_name: String,
    origin: ResultOrigin,
    note: Option<String>,
}

/// The subset of the `content/generate` result the CLI shows.
#[derive(Debug, Serialize, Deserialize)]
struct GeneratedContent {
    payload: String,
    fingerprint: Fingerprint,
    content_kind: ContentKind,
    prompt: String,
    author: String,
    receipt: Receipt,
    verification_reference: String,
    provider: ProviderInfo,
    created_at: DateTime<Utc>,
}

/// Run the generate command.
pub async fn run(
    cmd: &GenerateCmd,
    rpc: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let params = serde_json::json!({
        "prompt": cmd.prompt,
        "author": cmd.author,
        "content_kind": cmd.kind,
    });
    let generated: GeneratedContent = call_for(rpc, "content/generate", params).await?;

    if format == OutputFormat::Json {
        println!("{}", format_json(&generated));
        return Ok(());
    }

    println!("Generated {} content", generated.content_kind);
    println!("  Fingerprint:  {}", generated.fingerprint);
    println!("  Author:       {}", generated.author);
    println!(
        "  Provider:     {} ({})",
        generated.provider.source_provider, generated.provider.model_name
    );
    if let Some(banner) = fallback_banner(&generated) {
        println!("  Fallback:     {}", banner);
    }
    if let Some(note) = &generated.provider.note {
        println!("  Note:         {}", note);
    }
    println!("  Transaction:  {}", generated.receipt.transaction_id);
    println!(
        "  Block:        {} on {}",
        generated.receipt.block_reference, generated.receipt.network
    );
    println!("  Verify at:    {}", generated.verification_reference);
    println!();

    if cmd.full {
        println!("{}", generated.payload);
    } else {
        println!("{}", truncate(&generated.payload, 400));
    }

    Ok(())
}

/// Extra line shown when the daemon had to use its deterministic generator.
fn fallback_banner(generated: &GeneratedContent) -> Option<&'static str> {
    match generated.provider.origin {
        ResultOrigin::DeterministicFallback => {
            Some("all providers failed, deterministic content used")
        }
        ResultOrigin::External => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated(origin: &str) -> GeneratedContent {
        let body = serde_json::json!({
            "payload": "## Blockchain Technology",
            "fingerprint": "ab12",
            "content_kind": "text",
            "prompt": "tell me about blockchain",
            "author": "alice",
            "receipt": {
                "transaction_id": "0xfeed",
                "fingerprint": "ab12",
                "author": "alice",
                "created_at": "2026-03-01T12:00:00Z",
                "block_reference": 7,
                "status": "success",
                "network": "local"
            },
            "verification_reference": "http://127.0.0.1:50061/verify/ab12",
            "provider": {
                "source_provider": "deterministic-fallback",
                "model_name": "smart-ai",
                "origin": origin,
                "note": null
            },
            "created_at": "2026-03-01T12:00:00Z"
        });
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_fallback_result_shows_banner() {
        let content = generated("deterministic_fallback");
        assert_eq!(content.receipt.block_reference, 7);
        assert_eq!(
            fallback_banner(&content),
            Some("all providers failed, deterministic content used")
        );
    }

    #[test]
    fn test_external_result_has_no_banner() {
        assert_eq!(fallback_banner(&generated("external")), None);
    }
}
