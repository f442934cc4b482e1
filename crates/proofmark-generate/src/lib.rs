// crates/proofmark-generate/src/lib.rs
//
// proofmark-generate: content generation for Proofmark.
//
// Provides one adapter per external generation endpoint, the fallback
// orchestrator that walks the configured provider chains, and the
// network-free deterministic generator that terminates every chain.

pub mod classify;
pub mod fallback;
pub mod orchestrator;
pub mod prompt;
pub mod providers;
pub mod settings;
pub mod templates;

// Re-export key types for ergonomic access from downstream crates.
pub use fallback::{prompt_seed, DeterministicGenerator, ImageReference};
pub use orchestrator::{FallbackOrchestrator, ProviderSlot};
pub use prompt::{clean_image_prompt, enhance_prompt};
pub use settings::{build_orchestrator, ProviderSettings};
