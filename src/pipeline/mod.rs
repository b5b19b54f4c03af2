//! The two inverse pipelines over the shared annotation schema.
//!
//! ```text
//! encrypt:  text ──tokenize──▶ tokens ──fingerprint──▶ encrypted_text
//!
//! decrypt:  encrypted_text ────────────────────────────┐
//!           subtitles ──tokenize──▶ fingerprint ──▶ align ──▶ text
//! ```
//!
//! Encryption and decryption do not depend on each other; both depend on
//! [`fingerprint`](crate::fingerprint), and decryption additionally invokes
//! the reconstruction engine in [`align`](crate::align).

pub mod decrypt;
pub mod encrypt;

pub use decrypt::SeasonReport;
pub use encrypt::EncryptSummary;
