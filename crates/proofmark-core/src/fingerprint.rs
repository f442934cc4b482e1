// crates/proofmark-core/src/fingerprint.rs
//
// Content fingerprint engine: SHA-256 over canonical content bytes,
// rendered as lowercase hex.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::content::ContentKind;

/// Content identity key: the hex SHA-256 digest of the canonical bytes.
///
/// Lookups accept arbitrary strings (an unknown key is a negative answer,
/// not an error), so construction from a string is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint raw bytes. Pure: no salt, no timestamp.
    pub fn of(data: &[u8]) -> Self {
        Fingerprint(hex::encode(hash_bytes(data)))
    }

    /// Fingerprint the canonical bytes of a generated piece of content.
    ///
    /// Text is identified by its payload. Images are identified by the
    /// prompt text: image payloads come from external or seeded sources and
    /// are not byte-stable, so verification anchors image identity to the
    /// request instead.
    pub fn for_content(kind: ContentKind, prompt: &str, payload: &str) -> Self {
        match kind {
            ContentKind::Text => Self::of(payload.as_bytes()),
            ContentKind::Image => Self::of(prompt.as_bytes()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Fingerprint {
    fn from(s: String) -> Self {
        Fingerprint(s)
    }
}

impl From<&str> for Fingerprint {
    fn from(s: &str) -> Self {
        Fingerprint(s.to_string())
    }
}

/// Compute SHA-256 hash of the given bytes.
///
/// Returns a 32-byte hash.
pub fn hash_bytes(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_bytes() {
        let data = b"proofmark";
        let hash = hash_bytes(data);
        assert_eq!(hash.len(), 32);

        // Same input should produce same hash
        let hash2 = hash_bytes(data);
        assert_eq!(hash, hash2);

        // Different input should produce different hash
        let hash3 = hash_bytes(b"different");
        assert_ne!(hash, hash3);
    }

    #[test]
    fn test_fingerprint_known_vector() {
        let fp = Fingerprint::of(b"abc");
        assert_eq!(
            fp.as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let a = Fingerprint::of("same content".as_bytes());
        let b = Fingerprint::of("same content".as_bytes());
        let c = Fingerprint::of("other content".as_bytes());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_text_fingerprint_uses_payload() {
        let fp = Fingerprint::for_content(ContentKind::Text, "prompt", "payload");
        assert_eq!(fp, Fingerprint::of(b"payload"));
    }

    #[test]
    fn test_image_fingerprint_uses_prompt() {
        let a = Fingerprint::for_content(ContentKind::Image, "a red fox", "https://one");
        let b = Fingerprint::for_content(ContentKind::Image, "a red fox", "data:image/png;base64,AA");
        assert_eq!(a, b);
        assert_eq!(a, Fingerprint::of(b"a red fox"));
    }

    #[test]
    fn test_unvalidated_keys() {
        let fp = Fingerprint::from("unknown");
        assert_eq!(fp.to_string(), "unknown");
        let upper = Fingerprint::from("BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD");
        assert_ne!(upper, Fingerprint::of(b"abc"));
    }
}
