//! Annotation corpus — data model and whole-document persistence.
//!
//! A corpus is a hierarchy of seasons → episodes → speech segments. The
//! segment content field is *either* plaintext or a fingerprint sequence,
//! never both — which one depends on the pipeline stage. Every level carries
//! a flattened passthrough map so fields the pipelines do not understand
//! (speaker ids, confidence scores, …) survive a round trip verbatim.

pub mod schema;
pub mod store;

pub use schema::{Corpus, Episode, EpisodeData, Season, SpeechSegment};
