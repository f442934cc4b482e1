// crates/proofmark-generate/src/orchestrator.rs
//
// Fallback orchestrator: sequential attempts across the provider chain of a
// content kind, converging on the deterministic generator.
//
// Attempts are never raced. Each one runs under its own timeout; a timeout
// aborts that attempt only and the chain moves on. Provider failures are
// logged and swallowed here, so `generate` has no error path.

use std::sync::Arc;
use std::time::Duration;

use proofmark_core::{
    ContentKind, GenerationRequest, GenerationResult, ProviderAdapter, ProviderError,
};

use crate::fallback::DeterministicGenerator;

/// One configured step of a provider chain.
#[derive(Clone)]
pub struct ProviderSlot {
    pub adapter: Arc<dyn ProviderAdapter>,
    pub timeout: Duration,
}

impl std::fmt::Debug for ProviderSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSlot")
            .field("adapter", &self.adapter.id())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Ordered provider chains per content kind, plus the terminal generator.
#[derive(Debug)]
pub struct FallbackOrchestrator {
    text_chain: Vec<ProviderSlot>,
    image_chain: Vec<ProviderSlot>,
    fallback: DeterministicGenerator,
}

impl FallbackOrchestrator {
    /// Orchestrator with empty chains; every request goes straight to `fallback`.
    pub fn new(fallback: DeterministicGenerator) -> Self {
        Self {
            text_chain: Vec::new(),
            image_chain: Vec::new(),
            fallback,
        }
    }

    /// Append `adapter` to the chain of the content kind it serves.
    pub fn with_provider(mut self, adapter: Arc<dyn ProviderAdapter>, timeout: Duration) -> Self {
        let slot = ProviderSlot { adapter, timeout };
        match slot.adapter.kind() {
            ContentKind::Text => self.text_chain.push(slot),
            ContentKind::Image => self.image_chain.push(slot),
        }
        self
    }

    fn chain(&self, kind: ContentKind) -> &[ProviderSlot] {
        match kind {
            ContentKind::Text => &self.text_chain,
            ContentKind::Image => &self.image_chain,
        }
    }

    /// Provider ids of a chain, in attempt order.
    pub fn provider_ids(&self, kind: ContentKind) -> Vec<String> {
        self.chain(kind)
            .iter()
            .map(|slot| slot.adapter.id().to_string())
            .collect()
    }

    /// Produce content for `request`. Always returns a successful result.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        for slot in self.chain(request.content_kind) {
            let id = slot.adapter.id();
            tracing::debug!("Attempting provider '{}' for {} content", id, request.content_kind);

            match self.attempt(slot, request).await {
                Ok(result) => {
                    tracing::debug!(
                        "Provider '{}' succeeded (model {})",
                        id,
                        result.model_name
                    );
                    return result;
                }
                Err(e) => {
                    tracing::warn!("Provider '{}' failed [{}]: {}", id, e.kind(), e);
                }
            }
        }

        tracing::info!(
            "All {} providers exhausted, using deterministic fallback",
            request.content_kind
        );
        self.fallback.generate(request)
    }

    async fn attempt(
        &self,
        slot: &ProviderSlot,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ProviderError> {
        let result = tokio::time::timeout(
            slot.timeout,
            slot.adapter.attempt(&request.prompt, request.content_kind),
        )
        .await
        .map_err(|_| ProviderError::Timeout)??;

        if !result.succeeded || result.payload.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::providers::test_support::silent_server;
    use crate::providers::MistralAdapter;
    use crate::templates;

    enum Behaviour {
        Succeed(&'static str),
        Fail(ProviderError),
        Blank,
        Hang,
    }

    struct MockAdapter {
        id: &'static str,
        kind: ContentKind,
        behaviour: Behaviour,
        calls: AtomicUsize,
        log: Option<Arc<Mutex<Vec<&'static str>>>>,
    }

    impl MockAdapter {
        fn new(id: &'static str, kind: ContentKind, behaviour: Behaviour) -> Self {
            Self {
                id,
                kind,
                behaviour,
                calls: AtomicUsize::new(0),
                log: None,
            }
        }

        fn logging_to(mut self, log: Arc<Mutex<Vec<&'static str>>>) -> Self {
            self.log = Some(log);
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProviderAdapter for MockAdapter {
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
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(log) = &self.log {
                log.lock().unwrap().push(self.id);
            }
            match &self.behaviour {
                Behaviour::Succeed(payload) => {
                    Ok(GenerationResult::external(self.id, "mock-model", *payload))
                }
                Behaviour::Fail(e) => Err(e.clone()),
                Behaviour::Blank => Ok(GenerationResult::external(self.id, "mock-model", "  ")),
                Behaviour::Hang => {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    Ok(GenerationResult::external(self.id, "mock-model", "too late"))
                }
            }
        }
    }

    const SHORT: Duration = Duration::from_millis(200);

    fn text_request(prompt: &str) -> GenerationRequest {
        GenerationRequest::new(prompt, ContentKind::Text).unwrap()
    }

    #[tokio::test]
    async fn test_first_success_wins_and_stops_chain() {
        let first = Arc::new(MockAdapter::new("a", ContentKind::Text, Behaviour::Succeed("from a")));
        let second = Arc::new(MockAdapter::new("b", ContentKind::Text, Behaviour::Succeed("from b")));
        let orchestrator = FallbackOrchestrator::new(DeterministicGenerator::with_seed(1))
            .with_provider(first.clone(), SHORT)
            .with_provider(second.clone(), SHORT);

        let result = orchestrator.generate(&text_request("hello")).await;
        assert_eq!(result.payload, "from a");
        assert!(!result.is_fallback());
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 0);
    }

    #[tokio::test]
    async fn test_failures_advance_in_configured_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let a = MockAdapter::new(
            "a",
            ContentKind::Text,
            Behaviour::Fail(ProviderError::Transport("down".into())),
        )
        .logging_to(log.clone());
        let b = MockAdapter::new(
            "b",
            ContentKind::Text,
            Behaviour::Fail(ProviderError::MalformedResponse("junk".into())),
        )
        .logging_to(log.clone());
        let c = MockAdapter::new("c", ContentKind::Text, Behaviour::Succeed("from c"))
            .logging_to(log.clone());

        let orchestrator = FallbackOrchestrator::new(DeterministicGenerator::with_seed(1))
            .with_provider(Arc::new(a), SHORT)
            .with_provider(Arc::new(b), SHORT)
            .with_provider(Arc::new(c), SHORT);

        let result = orchestrator.generate(&text_request("hello")).await;
        assert_eq!(result.payload, "from c");
        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_all_failing_uses_deterministic_template() {
        let orchestrator = FallbackOrchestrator::new(DeterministicGenerator::with_seed(1))
            .with_provider(
                Arc::new(MockAdapter::new("a", ContentKind::Text, Behaviour::Fail(ProviderError::Timeout))),
                SHORT,
            )
            .with_provider(
                Arc::new(MockAdapter::new("b", ContentKind::Text, Behaviour::Blank)),
                SHORT,
            );

        let result = orchestrator
            .generate(&text_request("tell me about blockchain"))
            .await;
        assert!(result.succeeded);
        assert!(result.is_fallback());
        assert_eq!(result.source_provider, "deterministic-fallback");
        assert_eq!(result.payload, templates::BLOCKCHAIN[0]);
    }

    #[tokio::test]
    async fn test_slow_provider_times_out_and_chain_continues() {
        let slow = Arc::new(MockAdapter::new("slow", ContentKind::Text, Behaviour::Hang));
        let fast = Arc::new(MockAdapter::new("fast", ContentKind::Text, Behaviour::Succeed("quick")));
        let orchestrator = FallbackOrchestrator::new(DeterministicGenerator::with_seed(1))
            .with_provider(slow.clone(), Duration::from_millis(50))
            .with_provider(fast.clone(), SHORT);

        let started = std::time::Instant::now();
        let result = orchestrator.generate(&text_request("hello")).await;
        assert_eq!(result.payload, "quick");
        assert_eq!(slow.calls(), 1);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_chains_are_routed_by_kind() {
        let text = Arc::new(MockAdapter::new("t", ContentKind::Text, Behaviour::Succeed("words")));
        let image = Arc::new(MockAdapter::new(
            "i",
            ContentKind::Image,
            Behaviour::Fail(ProviderError::EmptyResponse),
        ));
        let orchestrator = FallbackOrchestrator::new(DeterministicGenerator::with_seed(1))
            .with_provider(text.clone(), SHORT)
            .with_provider(image.clone(), SHORT);

        assert_eq!(orchestrator.provider_ids(ContentKind::Text), vec!["t"]);
        assert_eq!(orchestrator.provider_ids(ContentKind::Image), vec!["i"]);

        let request = GenerationRequest::new("a mountain", ContentKind::Image).unwrap();
        let result = orchestrator.generate(&request).await;
        assert_eq!(text.calls(), 0);
        assert_eq!(image.calls(), 1);
        assert!(result.is_fallback());
        assert!(result.payload.starts_with("https://source.unsplash.com/512x512/?landscape,nature"));
    }

    #[tokio::test]
    async fn test_empty_chain_goes_straight_to_fallback() {
        let orchestrator = FallbackOrchestrator::new(DeterministicGenerator::with_seed(3));
        let result = orchestrator.generate(&text_request("quantum gardening")).await;
        assert!(result.is_fallback());
        assert!(result.payload.contains("quantum gardening"));
    }

    #[tokio::test]
    async fn test_unresponsive_http_provider_times_out() {
        let (base_url, _handle) = silent_server().await;
        let adapter = MistralAdapter::new("key").with_base_url(&base_url);
        let orchestrator = FallbackOrchestrator::new(DeterministicGenerator::with_seed(1))
            .with_provider(Arc::new(adapter), Duration::from_millis(100));

        let result = orchestrator
            .generate(&text_request("tell me about blockchain"))
            .await;
        assert!(result.is_fallback());
        assert_eq!(result.payload, templates::BLOCKCHAIN[0]);
    }
}
