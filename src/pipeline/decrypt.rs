//! Decryption pipeline — fingerprint sequences back to best-effort text.
//!
//! Per episode: gather the per-segment fingerprint lists (the *reference*),
//! find the episode's subtitle file, tokenize all its captions into one flat
//! candidate sequence, fingerprint it, and hand both sides to the
//! reconstruction engine. Recovered text replaces each segment's
//! fingerprints.
//!
//! # Error taxonomy
//!
//! - *No subtitle file* for an episode: recoverable — a diagnostic is
//!   logged, the episode keeps its fingerprints, processing continues.
//! - *Unreadable / undecodable subtitle file*: recoverable at file scope,
//!   same skip semantics, with a remediation hint in the diagnostic.
//! - *Malformed annotation document* (segment without `encrypted_text`):
//!   fatal, reported before any output is written.
//!
//! Skipped episodes contribute no data point to their season's mean
//! deletion/substitution statistics — they are absent, not zero.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::align::reconstruct;
use crate::corpus::store;
use crate::fingerprint::{Fingerprint, FingerprintCache};
use crate::subtitle::{self, episode_tag, find_subtitle};
use crate::tokenize::tokenize;

// ---------------------------------------------------------------------------
// SeasonReport
// ---------------------------------------------------------------------------

/// Per-season statistics from one decryption run.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonReport {
    pub season_id: u32,
    /// Episodes whose text was recovered.
    pub episodes_recovered: usize,
    /// Episodes skipped (no subtitle source, or source unusable).
    pub episodes_skipped: usize,
    /// Mean deletions across recovered episodes; `None` when none were.
    pub mean_deletions: Option<f64>,
    /// Mean substitutions across recovered episodes; `None` when none were.
    pub mean_substitutions: Option<f64>,
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Decrypt the annotation document at `annot_file` into `output_file`,
/// sourcing candidate text from `.srt` files in `subtitles_dir` decoded as
/// `encoding_label`.
///
/// # Errors
///
/// Fails without writing any output when the encoding label is unknown, the
/// document cannot be read, or a segment lacks `encrypted_text`. Missing or
/// unusable subtitle files are *not* errors — those episodes are skipped.
pub fn run(
    annot_file: &Path,
    subtitles_dir: &Path,
    encoding_label: &str,
    output_file: &Path,
) -> Result<Vec<SeasonReport>> {
    let encoding = subtitle::encoding_for_label(encoding_label)?;
    let mut corpus = store::load(annot_file)?;
    let mut cache = FingerprintCache::new();
    let mut reports = Vec::with_capacity(corpus.seasons.len());

    for season in &mut corpus.seasons {
        let mut deletions: Vec<f64> = Vec::new();
        let mut substitutions: Vec<f64> = Vec::new();
        let mut skipped = 0usize;

        for episode in &mut season.episodes {
            let tag = episode_tag(season.id, episode.id);

            // The reference: ordered per-segment fingerprint lists.
            let mut reference: Vec<Vec<Fingerprint>> =
                Vec::with_capacity(episode.data.speech_segments.len());
            for segment in &episode.data.speech_segments {
                let Some(prints) = segment.encrypted_text.as_ref() else {
                    bail!(
                        "{tag}: speech segment without encrypted_text — \
                         is the document encrypted?"
                    );
                };
                reference.push(prints.clone());
            }

            let located = find_subtitle(subtitles_dir, season.id, episode.id)
                .with_context(|| {
                    format!("cannot list subtitle directory {}", subtitles_dir.display())
                })?;
            let Some(sub_path) = located else {
                log::warn!(
                    "{tag}: no subtitle file found in {}",
                    subtitles_dir.display()
                );
                skipped += 1;
                continue;
            };

            let captions = match subtitle::parse_file(&sub_path, encoding) {
                Ok(captions) => captions,
                Err(e) => {
                    log::warn!("{tag}: skipped — {e}");
                    skipped += 1;
                    continue;
                }
            };

            // One flat candidate sequence for the whole episode; segment
            // boundaries in the subtitle source are irrelevant.
            let mut candidate_tokens: Vec<String> = Vec::new();
            for caption in &captions {
                candidate_tokens.extend(tokenize(&caption.text));
            }
            let candidate_prints = cache.fingerprint_all(&candidate_tokens);

            let result = reconstruct(&reference, &candidate_tokens, &candidate_prints);
            log::info!(
                "{tag}: recovered {} segments ({} del, {} sub)",
                result.segments.len(),
                result.deletions,
                result.substitutions
            );

            for (segment, text) in episode
                .data
                .speech_segments
                .iter_mut()
                .zip(result.segments)
            {
                segment.text = Some(text);
                segment.encrypted_text = None;
            }
            deletions.push(f64::from(result.deletions));
            substitutions.push(f64::from(result.substitutions));
        }

        reports.push(SeasonReport {
            season_id: season.id,
            episodes_recovered: deletions.len(),
            episodes_skipped: skipped,
            mean_deletions: mean(&deletions),
            mean_substitutions: mean(&substitutions),
        });
    }

    store::save(output_file, &corpus)?;
    Ok(reports)
}

/// Mean of `values`, or `None` when there is no data point.
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
