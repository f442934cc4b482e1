// crates/proofmark-cli/src/commands/records.rs
//
// `proofmark {records, delete, delete-all, delete-by-prompt}`.

use serde::Deserialize;

use proofmark_core::{Fingerprint, RecordSummary};

use crate::output::{format_json, format_table, OutputFormat, RecordRow};
use crate::rpc_client::call_for;

/// Record operations exposed as top-level commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordsCmd {
    List,
    Delete { fingerprint: String },
    DeleteAll,
    DeleteByPrompt { keyword: String },
}

#[derive(Debug, Deserialize)]
struct RecordList {
    records: Vec<RecordSummary>,
    count: usize,
}

#[derive(Debug, Deserialize)]
struct Deleted {
    fingerprint: Fingerprint,
    deleted: bool,
}

#[derive(Debug, Deserialize)]
struct DeletedMany {
    deleted_count: usize,
    #[serde(default)]
    deleted_fingerprints: Vec<Fingerprint>,
}

/// Run a record command.
pub async fn run(
    cmd: &RecordsCmd,
    rpc: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    // JSON mode passes the daemon result through untouched.
    if format == OutputFormat::Json {
        let (method, params) = request_for(cmd);
        let value: serde_json::Value = call_for(rpc, method, params).await?;
        println!("{}", format_json(&value));
        return Ok(());
    }

    match cmd {
        RecordsCmd::List => {
            let list: RecordList = call_for(rpc, "records/list", serde_json::json!({})).await?;
            if list.count == 0 {
                println!("No records stored.");
            } else {
                let rows: Vec<RecordRow> = list.records.iter().map(RecordRow::from).collect();
                println!("{}", format_table(&rows));
                println!("{} record(s)", list.count);
            }
        }
        RecordsCmd::Delete { .. } => {
            let (method, params) = request_for(cmd);
            let result: Deleted = call_for(rpc, method, params).await?;
            if result.deleted {
                println!("Deleted record {}", result.fingerprint);
                println!("Its registrar entry is unchanged and still verifies.");
            } else {
                println!("No record stored under {}", result.fingerprint);
            }
        }
        RecordsCmd::DeleteAll | RecordsCmd::DeleteByPrompt { .. } => {
            let (method, params) = request_for(cmd);
            let result: DeletedMany = call_for(rpc, method, params).await?;
            println!("Deleted {} record(s)", result.deleted_count);
            for fingerprint in &result.deleted_fingerprints {
                println!("  {}", fingerprint);
            }
        }
    }

    Ok(())
}

fn request_for(cmd: &RecordsCmd) -> (&'static str, serde_json::Value) {
    match cmd {
        RecordsCmd::List => ("records/list", serde_json::json!({})),
        RecordsCmd::Delete { fingerprint } => (
            "records/delete",
            serde_json::json!({ "fingerprint": fingerprint }),
        ),
        RecordsCmd::DeleteAll => ("records/delete_all", serde_json::json!({})),
        RecordsCmd::DeleteByPrompt { keyword } => (
            "records/delete_by_prompt",
            serde_json::json!({ "keyword": keyword }),
        ),
    }
}
