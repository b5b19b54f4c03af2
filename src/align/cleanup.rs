//! Spacing repair for recovered text.
//!
//! The engine assembles segments by joining word tokens with single spaces,
//! which re-introduces the artifacts of word-level tokenization:
//! `"do n't"`, `"it 's"`, `"world ."`, `"gon na"`. These ordered rewrites
//! undo them so recovered text reads naturally.

use once_cell::sync::Lazy;
use regex::Regex;

static APOSTROPHE: Lazy<Regex> = Lazy::new(|| Regex::new(r" '").expect("valid regex"));
static NT: Lazy<Regex> = Lazy::new(|| Regex::new(r" n't").expect("valid regex"));
static BACKTICK: Lazy<Regex> = Lazy::new(|| Regex::new(r"` ").expect("valid regex"));
static PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r" (\.|\?|,|:|;|!)").expect("valid regex"));
static GON_WAN_NA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([gG]on|[wW]an) na").expect("valid regex"));
static GOT_TA: Lazy<Regex> = Lazy::new(|| Regex::new(r"([gG]ot) ta").expect("valid regex"));

/// Repair tokenizer spacing in one recovered segment.
///
/// Strips the single leading space left by the join, re-attaches
/// contraction suffixes and punctuation, and collapses the informal
/// two-token contractions back into single words.
pub fn repair_spacing(text: &str) -> String {
    let text = text.strip_prefix(' ').unwrap_or(text);
    let text = APOSTROPHE.replace_all(text, "'");
    let text = NT.replace_all(&text, "n't");
    let text = BACKTICK.replace_all(&text, "`");
    let text = PUNCT.replace_all(&text, "$1");
    let text = GON_WAN_NA.replace_all(&text, "${1}na");
    let text = GOT_TA.replace_all(&text, "${1}ta");
    text.into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_leading_space() {
        assert_eq!(repair_spacing(" hello"), "hello");
        // only one — further spaces are content
        assert_eq!(repair_spacing("  hello"), " hello");
    }

    #[test]
    fn reattaches_apostrophe_suffixes() {
        assert_eq!(repair_spacing(" it 's fine"), "it's fine");
        assert_eq!(repair_spacing(" they 'll see"), "they'll see");
    }

    #[test]
    fn reattaches_nt() {
        assert_eq!(repair_spacing(" do n't stop"), "don't stop");
        assert_eq!(repair_spacing(" ca n't"), "can't");
    }

    #[test]
    fn closes_backtick_spacing() {
        assert_eq!(repair_spacing(" ` quoted"), "`quoted");
    }

    #[test]
    fn closes_space_before_punctuation() {
        assert_eq!(repair_spacing(" hello , world ."), "hello, world.");
        assert_eq!(repair_spacing(" what ?"), "what?");
        assert_eq!(repair_spacing(" wait ; go : now !"), "wait; go: now!");
    }

    #[test]
    fn collapses_informal_contractions() {
        assert_eq!(repair_spacing(" gon na go"), "gonna go");
        assert_eq!(repair_spacing(" Gon na go"), "Gonna go");
        assert_eq!(repair_spacing(" wan na"), "wanna");
        assert_eq!(repair_spacing(" got ta run"), "gotta run");
    }

    #[test]
    fn empty_segment_stays_empty() {
        assert_eq!(repair_spacing(""), "");
    }

    #[test]
    fn plain_words_are_untouched() {
        assert_eq!(repair_spacing(" hello world"), "hello world");
    }
}
