// crates/proofmark-generate/src/fallback.rs
//
// Deterministic content generator: the terminal step of every fallback
// chain. It has no network dependency and never fails.
//
// Text answers come from the topic templates. When a topic has several
// templates one is picked uniformly at random, so text fallback is not
// reproducible unless the generator is built with a fixed seed. Image
// answers are fully deterministic: the same prompt always maps to the same
// themed stock image reference.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use proofmark_core::{ContentKind, GenerationRequest, GenerationResult};

use crate::classify::{classify_image, classify_text, ImageTheme, TextTopic};
use crate::templates;

/// Model name reported for fallback text.
pub const FALLBACK_TEXT_MODEL: &str = "smart-ai";

/// Model name reported for fallback images.
pub const FALLBACK_IMAGE_MODEL: &str = "unsplash-themes";

const STOCK_IMAGE_BASE: &str = "https://source.unsplash.com/512x512/";

/// Reference to a themed stock image derived from a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageReference {
    pub url: String,
    pub theme: ImageTheme,
    pub seed: u32,
}

/// Numeric seed of a prompt.
///
/// Shift-and-subtract accumulator (`h = h * 31 + unit`) over the UTF-16 code
/// units, wrapping at 32 bits, folded to its absolute value.
pub fn prompt_seed(prompt: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in prompt.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

/// Templates available for a topic. `General` is rendered separately.
fn topic_templates(topic: TextTopic) -> &'static [&'static str] {
    match topic {
        TextTopic::Girls => &templates::GIRLS,
        TextTopic::Boys => &templates::BOYS,
        TextTopic::Blockchain => &templates::BLOCKCHAIN,
        TextTopic::ArtificialIntelligence => &templates::ARTIFICIAL_INTELLIGENCE,
        TextTopic::General => &[],
    }
}

/// Canned, network-free content generator.
#[derive(Debug)]
pub struct DeterministicGenerator {
    rng: Mutex<StdRng>,
}

impl DeterministicGenerator {
    /// Generator whose template selection is seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Generator with reproducible template selection.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Long-form answer for `prompt`, using the generator's own selection RNG.
    pub fn fallback_text(&self, prompt: &str) -> String {
        // A panic elsewhere cannot leave the RNG in a bad state; keep using it.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        Self::fallback_text_with(prompt, &mut *rng)
    }

    /// Long-form answer for `prompt`, selecting templates with `rng`.
    pub fn fallback_text_with<R: Rng + ?Sized>(prompt: &str, rng: &mut R) -> String {
        let topic = classify_text(prompt);
        match topic_templates(topic).choose(rng) {
            Some(template) => (*template).to_string(),
            None => templates::general(prompt),
        }
    }

    /// Themed stock image reference for `prompt`.
    pub fn fallback_image(&self, prompt: &str) -> ImageReference {
        let theme = classify_image(prompt);
        let seed = prompt_seed(prompt);
        let url = format!(
            "{}?{},{}&sig={}",
            STOCK_IMAGE_BASE, theme.primary, theme.secondary, seed
        );
        ImageReference { url, theme, seed }
    }

    /// Produce a result for `request`. Always succeeds.
    pub fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        match request.content_kind {
            ContentKind::Text => {
                GenerationResult::deterministic(FALLBACK_TEXT_MODEL, self.fallback_text(&request.prompt))
            }
            ContentKind::Image => {
                let image = self.fallback_image(&request.prompt);
                GenerationResult::deterministic(FALLBACK_IMAGE_MODEL, image.url).with_note(format!(
                    "High-quality {} image from Unsplash",
                    image.theme.primary
                ))
            }
        }
    }
}

impl Default for DeterministicGenerator {
    fn default() -> Self {
        Self::new()
    }
}
