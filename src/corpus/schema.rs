//! Serde data model for the annotation document.
//!
//! Document shape (JSON):
//!
//! ```json
//! {
//!   "seasons": [
//!     { "id": 1,
//!       "episodes": [
//!         { "id": 1,
//!           "data": {
//!             "speech_segments": [
//!               { "start": 3.2, "end": 4.7,
//!                 "text": "...",              // pre-encryption only
//!                 "encrypted_text": ["..."],  // post-encryption only
//!                 "speaker": "..." }          // opaque, passed through
//!             ]
//!           },
//!           "path": "...", "width": 1280, "height": 720 }
//!         ]
//!     }
//!   ]
//! }
//! ```
//!
//! `path`, `width` and `height` live in the episode's passthrough map and
//! are removed by the encryption pipeline — they identify the source media
//! and must not leak into the redistributable form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::fingerprint::Fingerprint;

// ---------------------------------------------------------------------------
// Corpus hierarchy
// ---------------------------------------------------------------------------

/// The whole annotation document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    /// Ordered sequence of seasons.
    pub seasons: Vec<Season>,
    /// Fields this tool does not interpret, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One season; `id` is used to locate matching subtitle files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub id: u32,
    /// Ordered sequence of episodes.
    pub episodes: Vec<Episode>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One episode; `id` is used to locate matching subtitle files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    pub id: u32,
    pub data: EpisodeData,
    /// Passthrough fields. Pre-encryption this holds the source-identifying
    /// `path`/`width`/`height`, which encryption removes.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of one episode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeData {
    /// Ordered sequence of annotated utterances.
    pub speech_segments: Vec<SpeechSegment>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// SpeechSegment
// ---------------------------------------------------------------------------

/// One contiguous utterance.
///
/// `text` and `encrypted_text` are mutually exclusive by pipeline stage:
/// encryption consumes `text` and produces `encrypted_text`; decryption does
/// the inverse. Neither field is serialized when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechSegment {
    /// Utterance start, non-negative seconds.
    pub start: f64,
    /// Utterance end, seconds; `end >= start`.
    pub end: f64,
    /// Plaintext content (pre-encryption / post-decryption).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Ordered fingerprint sequence (post-encryption / pre-decryption).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_text: Option<Vec<Fingerprint>>,
    /// Opaque metadata (speaker id, …), preserved across both pipelines.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
