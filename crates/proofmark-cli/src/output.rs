// crates/proofmark-cli/src/output.rs
//
// Output formatting utilities for the Proofmark CLI.
// Supports table and JSON output modes.

use proofmark_core::RecordSummary;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    Table,
    /// JSON output for machine consumption.
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

/// One row of the `proofmark records list` table.
#[derive(Debug, Tabled)]
pub struct RecordRow {
    #[tabled(rename = "Fingerprint")]
    pub fingerprint: String,
    #[tabled(rename = "Kind")]
    pub kind: String,
    #[tabled(rename = "Author")]
    pub author: String,
    #[tabled(rename = "Created")]
    pub created: String,
    #[tabled(rename = "Provider")]
    pub provider: String,
    #[tabled(rename = "Prompt")]
    pub prompt: String,
}

impl From<&RecordSummary> for RecordRow {
    fn from(summary: &RecordSummary) -> Self {
        RecordRow {
            fingerprint: short_fingerprint(summary.fingerprint.as_str()),
            kind: summary.content_kind.to_string(),
            author: summary.author.clone(),
            created: summary.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            provider: summary.source_provider.clone(),
            prompt: truncate(&summary.prompt, 40),
        }
    }
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

/// First 12 hex characters of a fingerprint, for tables.
pub fn short_fingerprint(fingerprint: &str) -> String {
    truncate_chars(fingerprint, 12, "")
}

/// Truncate to `max_chars` characters, appending "..." if truncated.
pub fn truncate(s: &str, max_chars: usize) -> String {
    truncate_chars(s, max_chars, "...")
}

fn truncate_chars(s: &str, max_chars: usize, suffix: &str) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}{}", &s[..idx], suffix),
        None => s.to_string(),
    }
}
