//! Word tokenization shared by both pipelines.
//!
//! Splits natural-language text into word tokens using Unicode word
//! boundaries (UAX #29 via `unicode-segmentation`), with treebank-style
//! contraction splitting on top:
//!
//! | Input     | Tokens          |
//! |-----------|-----------------|
//! | `don't`   | `do`, `n't`     |
//! | `it's`    | `it`, `'s`      |
//! | `gonna`   | `gon`, `na`     |
//! | `wanna`   | `wan`, `na`     |
//! | `gotta`   | `got`, `ta`     |
//! | `world.`  | `world`, `.`    |
//!
//! The contraction splits exist so the spacing-repair rules in
//! [`align::cleanup`](crate::align::cleanup) can reassemble recovered text
//! into its natural written form. Both pipelines must use this same
//! tokenizer: fingerprints are only comparable when the token streams were
//! produced by identical segmentation.

use unicode_segmentation::UnicodeSegmentation;

/// Apostrophe suffixes split off as their own token (`it's` -> `it` + `'s`).
const APOSTROPHE_SUFFIXES: &[&str] = &["s", "re", "ve", "ll", "d", "m", "em"];

/// Tokenize `text` into an ordered sequence of word tokens.
///
/// Whitespace never appears in the output; punctuation marks are standalone
/// tokens. Case is preserved — callers fold case where they need to.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for piece in text.split_word_bounds() {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        push_word(piece, &mut tokens);
    }
    tokens
}

/// Push `word` onto `tokens`, splitting contractions where applicable.
fn push_word(word: &str, tokens: &mut Vec<String>) {
    let lower = word.to_lowercase();

    // "don't" -> "do" + "n't"  (nltk also yields "ca" + "n't" for "can't")
    if lower.len() > 3 && lower.ends_with("n't") && word.is_char_boundary(word.len() - 3) {
        let split = word.len() - 3;
        tokens.push(word[..split].to_string());
        tokens.push(word[split..].to_string());
        return;
    }

    // "it's" -> "it" + "'s", "they'll" -> "they" + "'ll", ...
    if let Some(pos) = word.rfind('\'') {
        let suffix = word[pos + 1..].to_lowercase();
        if pos > 0 && APOSTROPHE_SUFFIXES.contains(&suffix.as_str()) {
            tokens.push(word[..pos].to_string());
            tokens.push(word[pos..].to_string());
            return;
        }
    }

    // "gonna"/"wanna" -> 3 + 2, "gotta" -> 3 + 2
    if matches!(lower.as_str(), "gonna" | "wanna" | "gotta") {
        tokens.push(word[..3].to_string());
        tokens.push(word[3..].to_string());
        return;
    }

    tokens.push(word.to_string());
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
