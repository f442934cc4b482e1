// crates/proofmark-generate/src/prompt.rs
//
// Prompt shaping shared by the provider adapters.

use std::sync::OnceLock;

use regex::Regex;

/// Style suffix appended to every cleaned image prompt.
pub const STYLE_SUFFIX: &str = "digital art";

const FILLER_PATTERN: &str = r"(?i)generate me|create me|make me|please|image|picture|photo";

/// Fixed phrase substitutions, applied in order after filler removal.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    (r"(?i)black skin", "african american"),
    (r"(?i)pretty", "beautiful"),
];

fn filler() -> &'static Regex {
    static FILLER: OnceLock<Regex> = OnceLock::new();
    FILLER.get_or_init(|| Regex::new(FILLER_PATTERN).expect("filler pattern is valid"))
}

fn substitutions() -> &'static [(Regex, &'static str)] {
    static SUBS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    SUBS.get_or_init(|| {
        SUBSTITUTIONS
            .iter()
            .map(|(pattern, with)| (Regex::new(pattern).expect("substitution pattern is valid"), *with))
            .collect()
    })
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean a prompt for image endpoints.
///
/// Strips filler/command words, applies the phrase substitutions, collapses
/// whitespace, and appends [`STYLE_SUFFIX`]. Running it on its own output
/// returns the same string.
pub fn clean_image_prompt(prompt: &str) -> String {
    // Removal can join fragments into a new filler word, so run to a fixpoint.
    let mut text = collapse_whitespace(prompt);
    loop {
        let next = collapse_whitespace(&filler().replace_all(&text, ""));
        if next == text {
            break;
        }
        text = next;
    }

    for (pattern, with) in substitutions() {
        text = pattern.replace_all(&text, *with).into_owned();
    }
    let mut text = collapse_whitespace(&text);

    // Drop an already-present suffix so it is not appended twice.
    let tagged = format!(" {}", STYLE_SUFFIX);
    loop {
        if text.eq_ignore_ascii_case(STYLE_SUFFIX) {
            text.clear();
            continue;
        }
        let cut = text.len().saturating_sub(tagged.len());
        if text.len() > tagged.len()
            && text.is_char_boundary(cut)
            && text[cut..].eq_ignore_ascii_case(&tagged)
        {
            text.truncate(cut);
        } else {
            break;
        }
    }

    if text.is_empty() {
        STYLE_SUFFIX.to_string()
    } else {
        format!("{} {}", text, STYLE_SUFFIX)
    }
}

/// Rewrite a prompt into a fuller instruction for text endpoints.
pub fn enhance_prompt(prompt: &str) -> String {
    match prompt.trim().to_lowercase().as_str() {
        "tell me about girls" => "Write a comprehensive and engaging article about girls, covering their development, strengths, challenges, achievements, and the wonderful qualities they possess. Discuss both childhood and adolescent stages.".to_string(),
        "tell me about boys" => "Write an informative article about boys, discussing their development stages, common interests, challenges they face, and the unique qualities that make them special. Cover both psychological and social aspects.".to_string(),
        "tell me about blockchain" => "Explain blockchain technology in simple terms. Cover how it works, its key features like decentralization and security, real-world applications beyond cryptocurrency, and why it's important for the future.".to_string(),
        _ => format!(
            "{}. Provide a detailed, well-structured response with practical examples and insights.",
            prompt
        ),
    }
}
