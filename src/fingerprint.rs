//! Word fingerprinting — the leaf component both pipelines share.
//!
//! A [`Fingerprint`] is a short, lossy, non-secret hash of a case-folded
//! word: the first [`FINGERPRINT_LEN`] hex characters of its SHA-256 digest.
//! The truncation is deliberate — distinct words may share a fingerprint, and
//! the reconstruction engine must tolerate that ambiguity rather than assume
//! a bijection.
//!
//! # Quick start
//!
//! ```
//! use dialogue_redact::fingerprint::{fingerprint, FingerprintCache};
//!
//! // Pure function — deterministic and case-insensitive.
//! assert_eq!(fingerprint("Word"), fingerprint("word"));
//!
//! // Per-run cache — avoids re-hashing repeated word types.
//! let mut cache = FingerprintCache::new();
//! let fp = cache.fingerprint("hello");
//! assert_eq!(cache.fingerprint("hello"), fp);
//! assert_eq!(cache.word_types(), 1);
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// ---------------------------------------------------------------------------
// Fingerprint
// ---------------------------------------------------------------------------

/// Number of hex characters kept from the SHA-256 digest.
///
/// 8 hex chars = 32 bits. Short enough that collisions occur in a realistic
/// vocabulary, which is the point: the distribution scheme is lossy.
pub const FINGERPRINT_LEN: usize = 8;

/// A short, irreversible fingerprint of a case-folded word.
///
/// Many-to-one by design: two different words may map to the same value.
/// Serialized transparently as a plain string in the annotation document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// The fingerprint as a hex string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the fingerprint of a single word.
///
/// Case-folds the word, hashes it with SHA-256, and keeps the first
/// [`FINGERPRINT_LEN`] hex characters. Pure function of the word's
/// characters — identical input always yields an identical fingerprint,
/// within and across runs.
pub fn fingerprint(word: &str) -> Fingerprint {
    let digest = format!("{:x}", Sha256::digest(word.to_lowercase().as_bytes()));
    Fingerprint(digest[..FINGERPRINT_LEN].to_string())
}

// ---------------------------------------------------------------------------
// FingerprintCache
// ---------------------------------------------------------------------------

/// Per-run `word -> Fingerprint` memoization.
///
/// Owned by one pipeline invocation and dropped with it — never ambient
/// global state. A miss merely costs one recomputation, so sharing is a
/// performance concern only, never a correctness one.
#[derive(Debug, Default)]
pub struct FingerprintCache {
    map: HashMap<String, Fingerprint>,
}

impl FingerprintCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fingerprint `word`, reusing the cached value for repeated word types.
    pub fn fingerprint(&mut self, word: &str) -> Fingerprint {
        if let Some(fp) = self.map.get(word) {
            return fp.clone();
        }
        let fp = fingerprint(word);
        self.map.insert(word.to_string(), fp.clone());
        fp
    }

    /// Fingerprint an ordered token sequence, preserving order.
    pub fn fingerprint_all(&mut self, words: &[String]) -> Vec<Fingerprint> {
        words.iter().map(|w| self.fingerprint(w)).collect()
    }

    /// Number of distinct word types seen so far (diagnostic).
    pub fn word_types(&self) -> usize {
        self.map.len()
    }

    /// Number of distinct fingerprint values seen so far (diagnostic).
    ///
    /// Strictly less than [`word_types`](Self::word_types) whenever the
    /// truncation has produced a collision among cached words.
    pub fn fingerprint_types(&self) -> usize {
        self.map.values().collect::<HashSet<_>>().len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_across_calls() {
        assert_eq!(fingerprint("hello"), fingerprint("hello"));
    }

    #[test]
    fn case_folded_before_hashing() {
        assert_eq!(fingerprint("Word"), fingerprint("word"));
        assert_eq!(fingerprint("WORD"), fingerprint("word"));
    }

    #[test]
    fn distinct_words_usually_differ() {
        assert_ne!(fingerprint("hello"), fingerprint("world"));
    }

    #[test]
    fn fixed_hex_format() {
        let fp = fingerprint("hello");
        assert_eq!(fp.as_str().len(), FINGERPRINT_LEN);
        assert!(fp.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn cache_returns_same_value_as_pure_function() {
        let mut cache = FingerprintCache::new();
        assert_eq!(cache.fingerprint("hello"), fingerprint("hello"));
    }

    #[test]
    fn cache_counts_word_types_once() {
        let mut cache = FingerprintCache::new();
        cache.fingerprint("a");
        cache.fingerprint("a");
        cache.fingerprint("b");
        assert_eq!(cache.word_types(), 2);
    }

    #[test]
    fn cache_is_case_sensitive_on_keys_but_not_values() {
        // "Word" and "word" are distinct cache keys yet share a fingerprint.
        let mut cache = FingerprintCache::new();
        let a = cache.fingerprint("Word");
        let b = cache.fingerprint("word");
        assert_eq!(a, b);
        assert_eq!(cache.word_types(), 2);
        assert_eq!(cache.fingerprint_types(), 1);
    }

    #[test]
    fn fingerprint_all_preserves_order() {
        let mut cache = FingerprintCache::new();
        let words = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        let prints = cache.fingerprint_all(&words);
        assert_eq!(prints.len(), 3);
        assert_eq!(prints[0], prints[2]);
        assert_ne!(prints[0], prints[1]);
    }

    #[test]
    fn serde_transparent_round_trip() {
        let fp = fingerprint("hello");
        let json = serde_json::to_string(&fp).unwrap();
        assert_eq!(json, format!("\"{}\"", fp.as_str()));
        let back: Fingerprint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fp);
    }
}
