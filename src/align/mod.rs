//! Reconstruction Engine — the algorithmic core.
//!
//! Given the *reference* (per-segment fingerprint sequences from the
//! encrypted annotation) and a *candidate* (flat token sequence from an
//! independently sourced text, fingerprinted with the same scheme),
//! [`engine::reconstruct`] aligns the two fingerprint sequences and recovers
//! best-effort plaintext for every segment, plus deletion and substitution
//! counts.
//!
//! The alignment is exact fingerprint equality over ordered sequences —
//! no semantic matching. Fingerprint collisions may shift run boundaries;
//! that is accepted behavior under the lossy many-to-one fingerprint scheme.

pub mod cleanup;
pub mod engine;

pub use engine::{reconstruct, Reconstruction};
