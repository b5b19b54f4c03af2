//! Fingerprint-sequence alignment and per-segment text recovery.
//!
//! # Algorithm
//!
//! 1. Flatten the per-segment reference fingerprint lists into one linear
//!    sequence, keeping a position → segment-index map. The alignment runs
//!    over a single sequence; segment boundaries are recovered afterwards
//!    through the map.
//! 2. Compute a minimal edit script between the flattened reference and the
//!    candidate fingerprints (`similar`, Myers). The script is an ordered
//!    list of Equal / Replace / Delete / Insert runs that partitions both
//!    sequences exactly, in increasing position order on both sides.
//! 3. Walk the runs, appending to the owning segment of each reference
//!    position:
//!
//!    | Run     | Reference position gets                  | Counter |
//!    |---------|------------------------------------------|---------|
//!    | Equal   | the paired candidate word                | —       |
//!    | Replace | `<word>` while a paired candidate exists | sub     |
//!    | Replace | `<>` past the candidate span             | del     |
//!    | Delete  | `<>`                                     | del     |
//!    | Insert  | nothing — candidate-only words are not   | —       |
//!    |         | attested in the reference                |         |
//!
//!    Candidate positions of a Replace run beyond its reference span are
//!    dropped without a counter.
//! 4. Repair tokenizer spacing per segment ([`cleanup::repair_spacing`]).

use similar::{capture_diff_slices, Algorithm, DiffOp};

use crate::fingerprint::Fingerprint;

use super::cleanup;

/// Placeholder emitted for a reference token with no recovered word.
const MISSING: &str = "<>";

// ---------------------------------------------------------------------------
// Reconstruction
// ---------------------------------------------------------------------------

/// Output of one engine invocation: recovered text per reference segment
/// plus aggregate edit counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    /// One recovered string per reference segment, in order. Segments whose
    /// fingerprint list was empty come back as empty strings.
    pub segments: Vec<String>,
    /// Reference tokens with no recovered word.
    pub deletions: u32,
    /// Reference tokens recovered only positionally (wrapped in `<...>`).
    pub substitutions: u32,
}

// ---------------------------------------------------------------------------
// reconstruct
// ---------------------------------------------------------------------------

/// Align `candidate_fingerprints` against the segmented reference and
/// recover per-segment text from `candidate_tokens`.
///
/// `candidate_tokens` and `candidate_fingerprints` are parallel sequences of
/// equal length; both sides' fingerprints must come from the same scheme or
/// the alignment is meaningless.
///
/// The number of output segments always equals `reference_segments.len()`,
/// and each segment's fingerprint list is read, never mutated.
pub fn reconstruct(
    reference_segments: &[Vec<Fingerprint>],
    candidate_tokens: &[String],
    candidate_fingerprints: &[Fingerprint],
) -> Reconstruction {
    debug_assert_eq!(candidate_tokens.len(), candidate_fingerprints.len());

    // Step 1: flatten, keeping a position → segment-index map.
    let total: usize = reference_segments.iter().map(Vec::len).sum();
    let mut reference: Vec<Fingerprint> = Vec::with_capacity(total);
    let mut segment_of: Vec<usize> = Vec::with_capacity(total);
    for (index, segment) in reference_segments.iter().enumerate() {
        reference.extend(segment.iter().cloned());
        segment_of.extend(std::iter::repeat(index).take(segment.len()));
    }

    let mut segments = vec![String::new(); reference_segments.len()];
    let mut deletions = 0u32;
    let mut substitutions = 0u32;

    let append = |segments: &mut Vec<String>, position: usize, word: &str| {
        let out = &mut segments[segment_of[position]];
        out.push(' ');
        out.push_str(word);
    };

    // Steps 2–3: edit script, interpreted run by run.
    let ops = capture_diff_slices(Algorithm::Myers, &reference, candidate_fingerprints);
    for op in ops {
        match op {
            DiffOp::Equal {
                old_index,
                new_index,
                len,
            } => {
                for offset in 0..len {
                    append(
                        &mut segments,
                        old_index + offset,
                        &candidate_tokens[new_index + offset],
                    );
                }
            }

            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                for offset in 0..old_len {
                    if offset < new_len {
                        let marked = format!("<{}>", candidate_tokens[new_index + offset]);
                        append(&mut segments, old_index + offset, &marked);
                        substitutions += 1;
                    } else {
                        append(&mut segments, old_index + offset, MISSING);
                        deletions += 1;
                    }
                }
                // Candidate positions past old_len vanish silently.
            }

            DiffOp::Delete {
                old_index, old_len, ..
            } => {
                for offset in 0..old_len {
                    append(&mut segments, old_index + offset, MISSING);
                    deletions += 1;
                }
            }

            // Candidate words not attested in the reference produce no
            // output — the goal is to recover reference content only.
            DiffOp::Insert { .. } => {}
        }
    }

    // Step 4: spacing repair.
    let segments = segments
        .iter()
        .map(|segment| cleanup::repair_spacing(segment))
        .collect();

    Reconstruction {
        segments,
        deletions,
        substitutions,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::fingerprint;

    /// Fingerprint every word of every segment.
    fn reference(segments: &[&[&str]]) -> Vec<Vec<Fingerprint>> {
        segments
            .iter()
            .map(|words| words.iter().map(|w| fingerprint(w)).collect())
            .collect()
    }

    /// Candidate token + fingerprint pair for the engine call.
    fn candidate(words: &[&str]) -> (Vec<String>, Vec<Fingerprint>) {
        let tokens: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        let prints = tokens.iter().map(|w| fingerprint(w)).collect();
        (tokens, prints)
    }

    #[test]
    fn identical_sequences_recover_exactly() {
        let reference = reference(&[&["hello", "world"], &["how", "are", "you"]]);
        let (tokens, prints) = candidate(&["hello", "world", "how", "are", "you"]);

        let result = reconstruct(&reference, &tokens, &prints);
        assert_eq!(result.segments, vec!["hello world", "how are you"]);
        assert_eq!(result.deletions, 0);
        assert_eq!(result.substitutions, 0);
    }

    #[test]
    fn substitution_is_marked_and_counted() {
        // spec example: candidate "there" where the reference says "world"
        let reference = reference(&[&["hello", "world"]]);
        let (tokens, prints) = candidate(&["hello", "there"]);

        let result = reconstruct(&reference, &tokens, &prints);
        assert_eq!(result.segments, vec!["hello <there>"]);
        assert_eq!(result.deletions, 0);
        assert_eq!(result.substitutions, 1);
    }

    #[test]
    fn short_candidate_yields_deletion_placeholder() {
        // spec example: candidate one token short
        let reference = reference(&[&["hello", "world"]]);
        let (tokens, prints) = candidate(&["hello"]);

        let result = reconstruct(&reference, &tokens, &prints);
        assert_eq!(result.segments, vec!["hello <>"]);
        assert_eq!(result.deletions, 1);
        assert_eq!(result.substitutions, 0);
    }

    #[test]
    fn empty_candidate_deletes_everything() {
        let reference = reference(&[&["a", "b"], &["c"]]);
        let result = reconstruct(&reference, &[], &[]);

        assert_eq!(result.segments, vec!["<> <>", "<>"]);
        assert_eq!(result.deletions, 3);
        assert_eq!(result.substitutions, 0);
    }

    #[test]
    fn empty_reference_segment_yields_empty_string() {
        let reference = reference(&[&["a"], &[], &["b"]]);
        let (tokens, prints) = candidate(&["a", "b"]);

        let result = reconstruct(&reference, &tokens, &prints);
        assert_eq!(result.segments, vec!["a", "", "b"]);
        assert_eq!(result.deletions, 0);
        assert_eq!(result.substitutions, 0);
    }

    #[test]
    fn fully_empty_reference_yields_all_empty_output() {
        let result = reconstruct(&[], &[], &[]);
        assert!(result.segments.is_empty());
        assert_eq!(result.deletions, 0);
        assert_eq!(result.substitutions, 0);

        let reference = reference(&[&[], &[]]);
        let (tokens, prints) = candidate(&["stray"]);
        let result = reconstruct(&reference, &tokens, &prints);
        assert_eq!(result.segments, vec!["", ""]);
        assert_eq!(result.deletions, 0);
    }

    #[test]
    fn inserted_candidate_words_are_ignored() {
        // "um" appears only in the candidate — no output, no counter.
        let reference = reference(&[&["hello", "world"]]);
        let (tokens, prints) = candidate(&["hello", "um", "world"]);

        let result = reconstruct(&reference, &tokens, &prints);
        assert_eq!(result.segments, vec!["hello world"]);
        assert_eq!(result.deletions, 0);
        assert_eq!(result.substitutions, 0);
    }

    #[test]
    fn match_runs_cross_segment_boundaries() {
        // One candidate stream fills two segments through the position map.
        let reference = reference(&[&["the", "quick"], &["brown", "fox"]]);
        let (tokens, prints) = candidate(&["the", "quick", "brown", "fox"]);

        let result = reconstruct(&reference, &tokens, &prints);
        assert_eq!(result.segments, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn case_differences_survive_through_candidate_words() {
        // Fingerprints are case-folded, so "Hello" matches the reference of
        // "hello" — and the recovered text keeps the candidate's casing.
        let reference = reference(&[&["hello", "world"]]);
        let (tokens, prints) = candidate(&["Hello", "World"]);

        let result = reconstruct(&reference, &tokens, &prints);
        assert_eq!(result.segments, vec!["Hello World"]);
        assert_eq!(result.substitutions, 0);
    }

    #[test]
    fn spacing_repair_is_applied_per_segment() {
        let reference = reference(&[&["do", "n't", "stop", "."]]);
        let (tokens, prints) = candidate(&["do", "n't", "stop", "."]);

        let result = reconstruct(&reference, &tokens, &prints);
        assert_eq!(result.segments, vec!["don't stop."]);
    }

    #[test]
    fn deletions_in_the_middle_keep_later_matches_aligned() {
        let reference = reference(&[&["a", "b", "c", "d"]]);
        let (tokens, prints) = candidate(&["a", "d"]);

        let result = reconstruct(&reference, &tokens, &prints);
        assert_eq!(result.segments, vec!["a <> <> d"]);
        assert_eq!(result.deletions, 2);
        assert_eq!(result.substitutions, 0);
    }

    #[test]
    fn every_reference_position_is_consumed_exactly_once() {
        // Partition property: output word count per segment equals that
        // segment's fingerprint count, whatever mix of runs the script used.
        let reference = reference(&[&["a", "b"], &["c", "d", "e"], &["f"]]);
        let (tokens, prints) = candidate(&["a", "x", "d", "e", "y", "f"]);

        let result = reconstruct(&reference, &tokens, &prints);
        let expected_counts = [2usize, 3, 1];
        for (segment, expected) in result.segments.iter().zip(expected_counts) {
            let emitted = segment.split_whitespace().count();
            assert_eq!(emitted, expected, "segment {segment:?}");
        }
        // Every reference token is either recovered, substituted, or deleted.
        let recovered: usize = result
            .segments
            .iter()
            .map(|s| {
                s.split_whitespace()
                    .filter(|w| !w.starts_with('<'))
                    .count()
            })
            .sum();
        assert_eq!(
            recovered as u32 + result.deletions + result.substitutions,
            6
        );
    }
}
