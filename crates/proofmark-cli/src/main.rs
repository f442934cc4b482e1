// crates/proofmark-cli/src/main.rs
//
// CLI entrypoint for the Proofmark developer tools.
//
// Talks to a running proofmark-daemon over JSON-RPC: generate content,
// verify fingerprints or content, manage stored records, and view status.

mod commands;
mod output;
mod rpc_client;

use clap::{Parser, Subcommand};
use commands::generate::GenerateCmd;
use commands::records::RecordsCmd;
use commands::verify::VerifyCmd;
use output::OutputFormat;

/// Proofmark CLI: generated-content authentication from the terminal.
#[derive(Parser, Debug)]
#[command(
    name = "proofmark",
    version = "0.1.0",
    about = "Proofmark CLI: generate, register, and verify content"
)]
struct Cli {
    /// RPC endpoint for the proofmark-daemon.
    #[arg(long, global = true, default_value = "http://127.0.0.1:50061")]
    rpc: String,

    /// Print raw JSON instead of formatted output.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate content, fingerprint it, and register it under an author.
    Generate(GenerateCmd),

    /// Verify a fingerprint, or raw content with --content.
    Verify(VerifyCmd),

    /// List stored generation records, oldest first.
    Records,

    /// Delete one record by fingerprint. The registrar entry is kept.
    Delete {
        /// Fingerprint of the record to delete.
        fingerprint: String,
    },

    /// Delete every stored record.
    DeleteAll,

    /// Delete records whose prompt contains a keyword (case-insensitive).
    DeleteByPrompt {
        /// Keyword to match against prompts.
        keyword: String,
    },

    /// Display daemon health and version info.
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let format = OutputFormat::from_flag(cli.json);

    match &cli.command {
        Commands::Generate(cmd) => commands::generate::run(cmd, &cli.rpc, format).await?,
        Commands::Verify(cmd) => commands::verify::run(cmd, &cli.rpc, format).await?,
        Commands::Records => commands::records::run(&RecordsCmd::List, &cli.rpc, format).await?,
        Commands::Delete { fingerprint } => {
            let cmd = RecordsCmd::Delete {
                fingerprint: fingerprint.clone(),
            };
            commands::records::run(&cmd, &cli.rpc, format).await?
        }
        Commands::DeleteAll => commands::records::run(&RecordsCmd::DeleteAll, &cli.rpc, format).await?,
        Commands::DeleteByPrompt { keyword } => {
            let cmd = RecordsCmd::DeleteByPrompt {
                keyword: keyword.clone(),
            };
            commands::records::run(&cmd, &cli.rpc, format).await?
        }
        Commands::Status => commands::status::run(&cli.rpc, format).await?,
    }

    Ok(())
}
