// crates/proofmark-cli/src/commands/verify.rs
//
// `proofmark verify` -- check a fingerprint or a piece of content.

use clap::Args;
use serde::{Deserialize, Serialize};

use proofmark_core::{Fingerprint, GenerationRecord, RegistrarLookup};

use crate::output::{format_json, truncate, OutputFormat};
use crate::rpc_client::call_for;

/// Arguments for `proofmark verify`.
#[derive(Debug, Args)]
pub struct VerifyCmd {
    /// Fingerprint to verify.
    #[arg(required_unless_present = "content", conflicts_with = "content")]
    pub fingerprint: Option<String>,

    /// Verify raw content instead; it is hashed by the daemon.
    #[arg(long)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Verification {
    fingerprint: Fingerprint,
    found: bool,
    verified: bool,
    record: Option<GenerationRecord>,
    registrar: Option<RegistrarLookup>,
    message: String,
}

/// Run the verify command.
pub async fn run(
    cmd: &VerifyCmd,
    rpc: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let verification: Verification = match (&cmd.fingerprint, &cmd.content) {
        (_, Some(content)) => {
            call_for(rpc, "verify/content", serde_json::json!({ "content": content })).await?
        }
        (Some(fingerprint), None) => {
            call_for(
                rpc,
                "verify/fingerprint",
                serde_json::json!({ "fingerprint": fingerprint }),
            )
            .await?
        }
        (None, None) => return Err("Provide a fingerprint or --content".into()),
    };

    if format == OutputFormat::Json {
        println!("{}", format_json(&verification));
        return Ok(());
    }

    println!("Fingerprint: {}", verification.fingerprint);
    println!("  Verified:  {}", if verification.verified { "yes" } else { "no" });
    println!("  {}", verification.message);

    if let Some(lookup) = verification.registrar.as_ref().filter(|l| l.exists) {
        println!();
        println!("Registrar");
        println!("---------");
        println!("  Author:       {}", lookup.author.as_deref().unwrap_or("-"));
        if let Some(created_at) = lookup.created_at {
            println!("  Registered:   {}", created_at.to_rfc3339());
        }
        println!(
            "  Transaction:  {}",
            lookup.transaction_ref.as_deref().unwrap_or("-")
        );
        if let Some(metadata) = &lookup.metadata {
            println!("  Metadata:     {}", metadata);
        }
    }

    if let Some(record) = &verification.record {
        println!();
        println!("Record");
        println!("------");
        println!("  Kind:         {}", record.content_kind);
        println!("  Prompt:       {}", truncate(&record.prompt, 80));
        println!("  Provider:     {} ({})", record.source_provider, record.model_name);
    }

    Ok(())
}
