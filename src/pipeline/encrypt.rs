//! Encryption pipeline — plaintext segments to fingerprint sequences.
//!
//! For every speech segment in document order: lowercase the text, tokenize,
//! fingerprint each token, store the ordered fingerprint list as
//! `encrypted_text`, and drop the plaintext. Source-identifying episode
//! fields (`path`, `width`, `height`) are removed entirely so they cannot
//! leak into the redistributable form; all other fields pass through.
//!
//! A segment without a `text` field means the document is malformed (or
//! already encrypted) — that is fatal, reported before any output is
//! written.

use std::path::Path;

use anyhow::{bail, Result};

use crate::corpus::store;
use crate::fingerprint::FingerprintCache;
use crate::subtitle::episode_tag;
use crate::tokenize::tokenize;

/// Episode fields that identify the source media, removed on encryption.
const SOURCE_KEYS: &[&str] = &["path", "width", "height"];

// ---------------------------------------------------------------------------
// EncryptSummary
// ---------------------------------------------------------------------------

/// Diagnostics from one encryption run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptSummary {
    /// Number of speech segments encrypted.
    pub segments: usize,
    /// Distinct word types fingerprinted.
    pub word_types: usize,
    /// Distinct fingerprint values produced — less than `word_types`
    /// whenever the truncation collided.
    pub fingerprint_types: usize,
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Encrypt the annotation document at `annot_file` into `output_file`.
///
/// # Errors
///
/// Fails without writing any output when the document cannot be read, is
/// structurally malformed, or contains a segment with no `text`.
pub fn run(annot_file: &Path, output_file: &Path) -> Result<EncryptSummary> {
    let mut corpus = store::load(annot_file)?;
    let mut cache = FingerprintCache::new();
    let mut segments = 0usize;

    for season in &mut corpus.seasons {
        for episode in &mut season.episodes {
            for key in SOURCE_KEYS {
                episode.extra.remove(*key);
            }

            for segment in &mut episode.data.speech_segments {
                let Some(text) = segment.text.take() else {
                    bail!(
                        "{}: speech segment without a text field — \
                         is the document already encrypted?",
                        episode_tag(season.id, episode.id)
                    );
                };
                let words = tokenize(&text.to_lowercase());
                segment.encrypted_text = Some(cache.fingerprint_all(&words));
                segments += 1;
            }

            log::debug!(
                "{}: encrypted {} segments",
                episode_tag(season.id, episode.id),
                episode.data.speech_segments.len()
            );
        }
    }

    store::save(output_file, &corpus)?;

    Ok(EncryptSummary {
        segments,
        word_types: cache.word_types(),
        fingerprint_types: cache.fingerprint_types(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
