// crates/proofmark-rpc/tests/scenarios.rs
//
// End-to-end scenarios for the Proofmark service: generation through the
// fallback chain, fingerprinting, registration, storage, verification, and
// deletion, driven through the JSON-RPC dispatcher.
//
// Collaborators are in-process: mock provider adapters, the local
// registrar, and the in-memory record store. No network access.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use proofmark_core::{
    ContentKind, Fingerprint, GenerationResult, ProofmarkError, ProviderAdapter, ProviderError,
    Receipt, RecordStore, Registrar, RegistrarLookup,
};
use proofmark_generate::templates;
use proofmark_generate::{DeterministicGenerator, FallbackOrchestrator};
use proofmark_registrar::LocalRegistrar;
use proofmark_rpc::{JsonRpcRequest, JsonRpcResponse, RpcService, ServiceContext};
use proofmark_store::InMemoryRecordStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Provider that always fails with the given error.
struct FailingAdapter {
    id: &'static str,
    kind: ContentKind,
    error: ProviderError,
}

impl FailingAdapter {
    fn new(id: &'static str, kind: ContentKind, error: ProviderError) -> Self {
        Self {
            id,
            kind,
            error,
        }
    }
}

#[async_trait]
impl ProviderAdapter for FailingAdapter {
    fn id(&self) -> &str {
        self.id
    }

    fn kind(&self) -> ContentKind {
        self.kind
    }

    async fn attempt(
        &self,
        _prompt: &str,
        _kind: ContentKind,
    ) -> Result<GenerationResult, ProviderError> {
        Err(self.error.clone())
    }
}

/// Provider that answers every prompt with a fixed payload.
struct FixedAdapter {
    payload: &'static str,
}

#[async_trait]
impl ProviderAdapter for FixedAdapter {
    fn id(&self) -> &str {
        "fixed"
    }

    fn kind(&self) -> ContentKind {
        ContentKind::Text
    }

    async fn attempt(
        &self,
        _prompt: &str,
        _kind: ContentKind,
    ) -> Result<GenerationResult, ProviderError> {
        Ok(GenerationResult::external("fixed-ai", "fixed-1", self.payload))
    }
}

/// Registrar that is always unavailable.
struct UnavailableRegistrar;

#[async_trait]
impl Registrar for UnavailableRegistrar {
    fn mode(&self) -> &str {
        "unavailable"
    }

    async fn register(
        &self,
        _fingerprint: &Fingerprint,
        _author: &str,
        _metadata_json: &str,
    ) -> Result<Receipt, ProofmarkError> {
        Err(ProofmarkError::Registrar("network unreachable".to_string()))
    }

    async fn lookup(&self, _fingerprint: &Fingerprint) -> Result<RegistrarLookup, ProofmarkError> {
        Err(ProofmarkError::Registrar("network unreachable".to_string()))
    }
}

/// Orchestrator whose every external provider fails.
fn failing_orchestrator() -> FallbackOrchestrator {
    let timeout = Duration::from_millis(200);
    FallbackOrchestrator::new(DeterministicGenerator::with_seed(11))
        .with_provider(
            Arc::new(FailingAdapter::new(
                "mistral",
                ContentKind::Text,
                ProviderError::Transport("connection refused".into()),
            )),
            timeout,
        )
        .with_provider(
            Arc::new(FailingAdapter::new("cohere", ContentKind::Text, ProviderError::Timeout)),
            timeout,
        )
        .with_provider(
            Arc::new(FailingAdapter::new(
                "pollinations-text",
                ContentKind::Text,
                ProviderError::EmptyResponse,
            )),
            timeout,
        )
        .with_provider(
            Arc::new(FailingAdapter::new(
                "pollinations-image",
                ContentKind::Image,
                ProviderError::MalformedResponse("not an image".into()),
            )),
            timeout,
        )
}

struct Harness {
    service: RpcService,
    store: Arc<InMemoryRecordStore>,
}

fn harness_with(orchestrator: FallbackOrchestrator, registrar: Arc<dyn Registrar>) -> Harness {
    let store = Arc::new(InMemoryRecordStore::new());
    let ctx = ServiceContext::new(
        Arc::new(orchestrator),
        registrar,
        store.clone(),
        "http://proofmark.test/",
    );
    Harness {
        service: RpcService::new(ctx),
        store,
    }
}

fn harness() -> Harness {
    harness_with(failing_orchestrator(), Arc::new(LocalRegistrar::new()))
}

async fn call(h: &Harness, method: &str, params: serde_json::Value) -> JsonRpcResponse {
    h.service
        .dispatch(JsonRpcRequest {
            method: method.to_string(),
            params,
        })
        .await
}

async fn call_ok(h: &Harness, method: &str, params: serde_json::Value) -> serde_json::Value {
    let resp = call(h, method, params).await;
    assert!(resp.success, "{} failed: {:?}", method, resp.error);
    resp.result.expect("successful response carries a result")
}

async fn generate(h: &Harness, prompt: &str, author: &str, kind: &str) -> serde_json::Value {
    call_ok(
        h,
        "content/generate",
        json!({ "prompt": prompt, "author": author, "content_kind": kind }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_blockchain_prompt_with_all_providers_failing() {
    let h = harness();
    let result = generate(&h, "tell me about blockchain", "alice", "text").await;

    let payload = result["payload"].as_str().unwrap();
    assert_eq!(payload, templates::BLOCKCHAIN[0]);
    assert_eq!(
        result["fingerprint"].as_str().unwrap(),
        Fingerprint::of(payload.as_bytes()).as_str()
    );
    assert_eq!(result["provider"]["source_provider"], "deterministic-fallback");
    assert_eq!(result["provider"]["model_name"], "smart-ai");
    assert_eq!(result["provider"]["origin"], "deterministic_fallback");
    assert_eq!(h.store.len().unwrap(), 1);
}

#[tokio::test]
async fn test_every_prompt_yields_a_payload() {
    let h = harness();
    for prompt in ["girls", "boys", "what is ai", "the history of rome", "x"] {
        let result = generate(&h, prompt, "alice", "text").await;
        assert!(!result["payload"].as_str().unwrap().is_empty(), "prompt {}", prompt);
    }
    let result = generate(&h, "a city at night", "alice", "image").await;
    assert!(result["payload"]
        .as_str()
        .unwrap()
        .starts_with("https://source.unsplash.com/512x512/?city,skyline&sig="));
}

#[tokio::test]
async fn test_external_result_is_recorded_with_provider() {
    let orchestrator = FallbackOrchestrator::new(DeterministicGenerator::with_seed(1)).with_provider(
        Arc::new(FixedAdapter {
            payload: "An external answer.",
        }),
        Duration::from_secs(1),
    );
    let h = harness_with(orchestrator, Arc::new(LocalRegistrar::new()));

    let result = generate(&h, "anything", "dana", "text").await;
    assert_eq!(result["payload"], "An external answer.");
    assert_eq!(result["provider"]["source_provider"], "fixed-ai");

    let fp = Fingerprint::from(result["fingerprint"].as_str().unwrap());
    let record = h.store.get(&fp).unwrap().unwrap();
    assert_eq!(record.model_name, "fixed-1");
    assert_eq!(record.source_provider, "fixed-ai");
}

#[tokio::test]
async fn test_image_identity_is_the_prompt() {
    let h = harness();
    let result = generate(&h, "a sleepy cat", "erin", "image").await;
    assert_eq!(
        result["fingerprint"].as_str().unwrap(),
        Fingerprint::of(b"a sleepy cat").as_str()
    );

    let verified = call_ok(&h, "verify/content", json!({ "content": "a sleepy cat" })).await;
    assert_eq!(verified["found"], true);
    assert_eq!(verified["verified"], true);
}

#[tokio::test]
async fn test_missing_prompt_or_author_is_validation_error() {
    let h = harness();

    let resp = call(&h, "content/generate", json!({ "prompt": "   ", "author": "alice" })).await;
    assert!(!resp.success);
    assert_eq!(resp.error_code.as_deref(), Some("validation"));

    let resp = call(&h, "content/generate", json!({ "prompt": "hello" })).await;
    assert_eq!(resp.error_code.as_deref(), Some("validation"));
    assert!(resp.error.unwrap().contains("Author"));

    assert!(h.store.is_empty().unwrap());
}

#[tokio::test]
async fn test_registrar_failure_is_reported_and_nothing_stored() {
    let h = harness_with(failing_orchestrator(), Arc::new(UnavailableRegistrar));

    let resp = call(
        &h,
        "content/generate",
        json!({ "prompt": "tell me about blockchain", "author": "alice" }),
    )
    .await;
    assert!(!resp.success);
    assert_eq!(resp.error_code.as_deref(), Some("registrar"));
    assert!(resp.error.unwrap().contains("generated but could not be registered"));
    assert!(h.store.is_empty().unwrap());
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_alice_registration_verifies_by_fingerprint() {
    let h = harness();
    let generated = generate(&h, "tell me about blockchain", "Alice", "text").await;
    let fp = generated["fingerprint"].as_str().unwrap();

    let verified = call_ok(&h, "verify/fingerprint", json!({ "fingerprint": fp })).await;
    assert_eq!(verified["found"], true);
    assert_eq!(verified["verified"], true);
    assert_eq!(verified["record"]["author"], "Alice");
    assert_eq!(verified["registrar"]["author"], "Alice");
    assert!(!verified["record"]["receipt"].is_null());
    assert_eq!(
        verified["record"]["verification_reference"],
        format!("http://proofmark.test/verify/{}", fp)
    );
}

#[tokio::test]
async fn test_author_is_registered_as_sent() {
    let h = harness();
    let generated = generate(&h, "tell me about blockchain", "  Alice ", "text").await;
    assert_eq!(generated["author"], "  Alice ");
    assert_eq!(generated["receipt"]["author"], "  Alice ");

    let fp = generated["fingerprint"].as_str().unwrap();
    let verified = call_ok(&h, "verify/fingerprint", json!({ "fingerprint": fp })).await;
    assert_eq!(verified["record"]["author"], "  Alice ");
    assert_eq!(verified["registrar"]["author"], "  Alice ");
}

#[tokio::test]
async fn test_registrar_view_carries_registration_metadata() {
    let h = harness();
    let generated = generate(&h, "tell me about blockchain", "alice", "text").await;
    let fp = generated["fingerprint"].as_str().unwrap();

    let verified = call_ok(&h, "verify/fingerprint", json!({ "fingerprint": fp })).await;
    let metadata: serde_json::Value =
        serde_json::from_str(verified["registrar"]["metadata"].as_str().unwrap()).unwrap();
    assert_eq!(metadata["prompt"], "tell me about blockchain");
    assert_eq!(metadata["contentType"], "text");
    assert_eq!(metadata["model"], "smart-ai");
}

#[tokio::test]
async fn test_unknown_fingerprint_is_negative_answer() {
    let h = harness();
    let resp = call(&h, "verify/fingerprint", json!({ "fingerprint": "unknown" })).await;

    assert!(resp.success);
    let result = resp.result.unwrap();
    assert_eq!(result["verified"], false);
    assert_eq!(result["found"], false);
    assert_eq!(result["message"], "Content not found");
    assert!(result["record"].is_null());
}

#[tokio::test]
async fn test_verify_by_content_recomputes_fingerprint() {
    let h = harness();
    let generated = generate(&h, "tell me about blockchain", "bob", "text").await;
    let payload = generated["payload"].as_str().unwrap();

    let verified = call_ok(&h, "verify/content", json!({ "content": payload })).await;
    assert_eq!(verified["fingerprint"], generated["fingerprint"]);
    assert_eq!(verified["verified"], true);
    assert_eq!(verified["record"]["author"], "bob");

    let tampered = format!("{} ", payload);
    let verified = call_ok(&h, "verify/content", json!({ "content": tampered })).await;
    assert_eq!(verified["verified"], false);
    assert_eq!(verified["found"], false);

    let resp = call(&h, "verify/content", json!({ "content": "" })).await;
    assert_eq!(resp.error_code.as_deref(), Some("validation"));
}

#[tokio::test]
async fn test_deleted_record_is_still_attested_by_registrar() {
    let h = harness();
    let generated = generate(&h, "tell me about blockchain", "carol", "text").await;
    let fp = generated["fingerprint"].as_str().unwrap();
    call_ok(&h, "records/delete", json!({ "fingerprint": fp })).await;

    let by_fp = call_ok(&h, "verify/fingerprint", json!({ "fingerprint": fp })).await;
    assert_eq!(by_fp["found"], false);

    let by_content =
        call_ok(&h, "verify/content", json!({ "content": generated["payload"] })).await;
    assert_eq!(by_content["found"], false);
    assert_eq!(by_content["verified"], true);
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_records_redacts_images_and_truncates_text() {
    let h = harness();
    generate(&h, "tell me about blockchain", "alice", "text").await;
    generate(&h, "a mountain lake", "alice", "image").await;

    let listed = call_ok(&h, "records/list", json!({})).await;
    assert_eq!(listed["count"], 2);
    let records = listed["records"].as_array().unwrap();

    let image = records.iter().find(|r| r["content_kind"] == "image").unwrap();
    assert_eq!(image["content_preview"], "[Image URL]");

    let text = records.iter().find(|r| r["content_kind"] == "text").unwrap();
    let preview = text["content_preview"].as_str().unwrap();
    assert!(preview.ends_with("..."));
    assert_eq!(preview.chars().count(), 103);
}

#[tokio::test]
async fn test_delete_record_reports_existence() {
    let h = harness();
    let generated = generate(&h, "what is ai", "alice", "text").await;
    let fp = generated["fingerprint"].clone();

    let first = call_ok(&h, "records/delete", json!({ "fingerprint": fp })).await;
    assert_eq!(first["deleted"], true);
    let second = call_ok(&h, "records/delete", json!({ "fingerprint": fp })).await;
    assert_eq!(second["deleted"], false);
}

#[tokio::test]
async fn test_delete_all_empties_listing() {
    let h = harness();
    for prompt in ["one", "two", "three"] {
        generate(&h, prompt, "alice", "text").await;
    }
    let before = h.store.len().unwrap();

    let deleted = call_ok(&h, "records/delete_all", json!({})).await;
    assert_eq!(deleted["deleted_count"], before);

    let listed = call_ok(&h, "records/list", serde_json::Value::Null).await;
    assert_eq!(listed["count"], 0);
    assert!(listed["records"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_by_prompt_keyword_is_exact() {
    let h = harness();
    generate(&h, "Notes on XYZ", "alice", "text").await;
    generate(&h, "the xyz handbook", "alice", "text").await;
    generate(&h, "unrelated topic", "alice", "text").await;

    let deleted = call_ok(&h, "records/delete_by_prompt", json!({ "keyword": "xyz" })).await;
    assert_eq!(deleted["deleted_count"], 2);
    assert_eq!(deleted["deleted_fingerprints"].as_array().unwrap().len(), 2);

    let remaining: Vec<String> = h
        .store
        .list_all()
        .unwrap()
        .into_iter()
        .map(|r| r.prompt)
        .collect();
    assert_eq!(remaining, vec!["unrelated topic"]);

    let resp = call(&h, "records/delete_by_prompt", json!({ "keyword": " " })).await;
    assert_eq!(resp.error_code.as_deref(), Some("validation"));
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_health_reports_store_and_registrar() {
    let h = harness();
    generate(&h, "hello", "alice", "text").await;

    let health = call_ok(&h, "node/health", json!({})).await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["record_count"], 1);
    assert_eq!(health["store_type"], "in-memory");
    assert_eq!(health["registrar_mode"], "local");
    // The context was built moments ago.
    assert!(health["uptime_seconds"].as_u64().unwrap() < 60);
    assert_eq!(
        health["text_providers"],
        json!(["mistral", "cohere", "pollinations-text"])
    );
    assert_eq!(health["image_providers"], json!(["pollinations-image"]));
}

#[tokio::test]
async fn test_unknown_method_is_rejected() {
    let h = harness();
    let resp = call(&h, "content/publish", json!({})).await;
    assert!(!resp.success);
    assert!(resp.error.unwrap().contains("Unknown method"));
}
