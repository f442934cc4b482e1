// crates/proofmark-generate/src/classify.rs
//
// Keyword classification of prompts.
//
// Each table is an ordered list of rules; the first rule whose keywords
// match the lower-cased prompt wins. Matching is plain substring search,
// so "ai" also matches inside longer words. Adding a category means adding
// one rule at the right position.

use serde::{Deserialize, Serialize};

/// Keyword predicate of a rule.
#[derive(Debug, Clone, Copy)]
pub enum Keywords {
    /// At least one keyword occurs in the prompt.
    Any(&'static [&'static str]),
    /// Every keyword occurs in the prompt.
    All(&'static [&'static str]),
}

impl Keywords {
    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Keywords::Any(words) => words.iter().any(|w| lowered.contains(w)),
            Keywords::All(words) => words.iter().all(|w| lowered.contains(w)),
        }
    }
}

/// A (predicate, outcome) pair.
#[derive(Debug, Clone, Copy)]
pub struct Rule<T: 'static> {
    pub keywords: Keywords,
    pub outcome: T,
}

/// Evaluate `rules` in order against `prompt` (case-insensitive).
pub fn first_match<T: Copy>(rules: &[Rule<T>], prompt: &str) -> Option<T> {
    let lowered = prompt.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.keywords.matches(&lowered))
        .map(|rule| rule.outcome)
}

// ---------------------------------------------------------------------------
// Text topics
// ---------------------------------------------------------------------------

/// Topic category driving text template selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTopic {
    Girls,
    Boys,
    Blockchain,
    ArtificialIntelligence,
    /// No rule matched.
    General,
}

pub const TEXT_TOPIC_RULES: &[Rule<TextTopic>] = &[
    Rule {
        keywords: Keywords::Any(&["girl"]),
        outcome: TextTopic::Girls,
    },
    Rule {
        keywords: Keywords::Any(&["boy"]),
        outcome: TextTopic::Boys,
    },
    Rule {
        keywords: Keywords::Any(&["blockchain"]),
        outcome: TextTopic::Blockchain,
    },
    Rule {
        keywords: Keywords::Any(&["ai", "artificial intelligence"]),
        outcome: TextTopic::ArtificialIntelligence,
    },
];

pub fn classify_text(prompt: &str) -> TextTopic {
    first_match(TEXT_TOPIC_RULES, prompt).unwrap_or(TextTopic::General)
}

// ---------------------------------------------------------------------------
// Image themes
// ---------------------------------------------------------------------------

/// Two-term tag pair used to pick a themed stock image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageTheme {
    pub primary: &'static str,
    pub secondary: &'static str,
}

impl ImageTheme {
    const fn new(primary: &'static str, secondary: &'static str) -> Self {
        Self { primary, secondary }
    }
}

pub const DEFAULT_IMAGE_THEME: ImageTheme = ImageTheme::new("abstract", "art");

pub const IMAGE_THEME_RULES: &[Rule<ImageTheme>] = &[
    Rule {
        keywords: Keywords::Any(&["girl", "woman", "female"]),
        outcome: ImageTheme::new("portrait", "woman"),
    },
    Rule {
        keywords: Keywords::Any(&["boy", "man", "male"]),
        outcome: ImageTheme::new("portrait", "man"),
    },
    Rule {
        keywords: Keywords::All(&["black", "skin"]),
        outcome: ImageTheme::new("african", "portrait"),
    },
    Rule {
        keywords: Keywords::Any(&["landscape", "mountain"]),
        outcome: ImageTheme::new("landscape", "nature"),
    },
    Rule {
        keywords: Keywords::Any(&["city", "urban"]),
        outcome: ImageTheme::new("city", "skyline"),
    },
    Rule {
        keywords: Keywords::Any(&["animal", "cat", "dog"]),
        outcome: ImageTheme::new("animal", "pet"),
    },
    Rule {
        keywords: Keywords::Any(&["tech", "computer"]),
        outcome: ImageTheme::new("technology", "future"),
    },
];

pub fn classify_image(prompt: &str) -> ImageTheme {
    first_match(IMAGE_THEME_RULES, prompt).unwrap_or(DEFAULT_IMAGE_THEME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_topics() {
        assert_eq!(classify_text("Tell me about BLOCKCHAIN"), TextTopic::Blockchain);
        assert_eq!(classify_text("girls and boys"), TextTopic::Girls);
        assert_eq!(classify_text("the boys club"), TextTopic::Boys);
        assert_eq!(
            classify_text("Artificial Intelligence today"),
            TextTopic::ArtificialIntelligence
        );
        assert_eq!(classify_text("history of rome"), TextTopic::General);
    }

    #[test]
    fn test_ai_matches_as_substring() {
        assert_eq!(classify_text("explain rainfall"), TextTopic::ArtificialIntelligence);
    }

    #[test]
    fn test_first_match_wins() {
        // "blockchain for girls" hits the girl rule before blockchain.
        assert_eq!(classify_text("blockchain for girls"), TextTopic::Girls);
        // "woman" contains "man"; the woman rule is evaluated first.
        assert_eq!(classify_image("a woman reading").secondary, "woman");
    }

    #[test]
    fn test_image_themes() {
        assert_eq!(classify_image("a cat on a sofa"), ImageTheme::new("animal", "pet"));
        assert_eq!(
            classify_image("Mountain sunrise"),
            ImageTheme::new("landscape", "nature")
        );
        assert_eq!(classify_image("urban night"), ImageTheme::new("city", "skyline"));
        assert_eq!(
            classify_image("person with black skin"),
            ImageTheme::new("african", "portrait")
        );
        assert_eq!(classify_image("computer chip"), ImageTheme::new("technology", "future"));
        assert_eq!(classify_image("swirls"), DEFAULT_IMAGE_THEME);
    }

    #[test]
    fn test_all_keywords_requires_every_word() {
        let rule = Keywords::All(&["black", "skin"]);
        assert!(!rule.matches("black cat"));
        assert!(rule.matches("skin that is black"));
    }
}
