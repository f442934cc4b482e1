// crates/proofmark-rpc/src/handlers/records.rs
//
// Record management handlers: ListRecords, DeleteRecord, DeleteAll,
// DeleteByPromptKeyword.

use serde::{Deserialize, Serialize};

use proofmark_core::error::ProofmarkError;
use proofmark_core::fingerprint::Fingerprint;
use proofmark_core::record::RecordSummary;

use crate::context::ServiceContext;

// ---------------------------------------------------------------------------
// ListRecords
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRecordsRequest {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRecordsResponse {
    /// Summaries, oldest first. Image payloads are redacted.
    pub records: Vec<RecordSummary>,
    pub count: usize,
}

pub async fn handle_list_records(
    ctx: &ServiceContext,
    _request: ListRecordsRequest,
) -> Result<ListRecordsResponse, ProofmarkError> {
    let records: Vec<RecordSummary> = ctx
        .store
        .list_all()?
        .iter()
        .map(|record| record.summary())
        .collect();
    let count = records.len();
    Ok(ListRecordsResponse { records, count })
}

// ---------------------------------------------------------------------------
// DeleteRecord
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRecordRequest {
    #[serde(default)]
    pub fingerprint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRecordResponse {
    pub fingerprint: Fingerprint,
    /// False when no record had this fingerprint.
    pub deleted: bool,
}

/// Handle a DeleteRecord request. Only the local record is removed; the
/// registrar attestation stays.
pub async fn handle_delete_record(
    ctx: &ServiceContext,
    request: DeleteRecordRequest,
) -> Result<DeleteRecordResponse, ProofmarkError> {
    let raw = request.fingerprint.trim();
    if raw.is_empty() {
        return Err(ProofmarkError::Validation("Fingerprint is required".to_string()));
    }
    let fingerprint = Fingerprint::from(raw);
    let deleted = ctx.store.delete_by_key(&fingerprint)?;
    Ok(DeleteRecordResponse {
        fingerprint,
        deleted,
    })
}

// ---------------------------------------------------------------------------
// DeleteAll
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteAllRequest {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAllResponse {
    pub deleted_count: usize,
}

pub async fn handle_delete_all(
    ctx: &ServiceContext,
    _request: DeleteAllRequest,
) -> Result<DeleteAllResponse, ProofmarkError> {
    let deleted_count = ctx.store.delete_all()?;
    Ok(DeleteAllResponse { deleted_count })
}

// ---------------------------------------------------------------------------
// DeleteByPromptKeyword
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteByPromptRequest {
    #[serde(default)]
    pub keyword: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteByPromptResponse {
    pub keyword: String,
    pub deleted_count: usize,
    pub deleted_fingerprints: Vec<Fingerprint>,
}

/// Handle a DeleteByPromptKeyword request.
///
/// A blank keyword would match every record, so it is rejected; use
/// DeleteAll for that.
pub async fn handle_delete_by_prompt(
    ctx: &ServiceContext,
    request: DeleteByPromptRequest,
) -> Result<DeleteByPromptResponse, ProofmarkError> {
    if request.keyword.trim().is_empty() {
        return Err(ProofmarkError::Validation("Keyword is required".to_string()));
    }
    let (deleted_count, deleted_fingerprints) =
        ctx.store.delete_where_prompt_contains(&request.keyword)?;
    Ok(DeleteByPromptResponse {
        keyword: request.keyword,
        deleted_count,
        deleted_fingerprints,
    })
}
