//! Pseudonymization and reconstruction of dialogue-dataset text.
//!
//! A dataset of annotated speech segments cannot be redistributed with its
//! dialogue text — but it can be redistributed with a per-segment sequence
//! of *fingerprints*: short, irreversible, deliberately collision-prone
//! hashes of each word. Anyone who holds the original media (subtitle files)
//! can then recover the text by fingerprinting the subtitles with the same
//! scheme and aligning the two fingerprint sequences.
//!
//! # Pipelines
//!
//! ```text
//! encrypt            text ──▶ tokenize ──▶ fingerprint ──▶ encrypted_text
//!
//! decrypt   encrypted_text ──────────────────────────┐
//!           subtitles ──▶ tokenize ──▶ fingerprint ──┴──▶ align ──▶ text
//! ```
//!
//! The interesting part is [`align`]: an edit-script alignment of the two
//! fingerprint sequences that recovers which subtitle word corresponds to
//! which reference position, tolerating fingerprint collisions, missing
//! words (deletions) and near-miss words (substitutions).

pub mod align;
pub mod cli;
pub mod corpus;
pub mod fingerprint;
pub mod pipeline;
pub mod subtitle;
pub mod tokenize;

pub use align::{reconstruct, Reconstruction};
pub use corpus::{Corpus, SpeechSegment};
pub use fingerprint::{fingerprint, Fingerprint, FingerprintCache};
