//! Subtitle source handling — file discovery and caption extraction.
//!
//! The decryption pipeline needs an independently sourced text for each
//! episode. This module finds the matching `.srt` file by its
//! `S<season>E<episode>` naming convention ([`locate`]) and extracts plain
//! caption text from it ([`parse`]), stripping presentation markup.

pub mod locate;
pub mod parse;

pub use locate::{episode_tag, find_subtitle};
pub use parse::{encoding_for_label, parse_file, CaptionLine, SubtitleError};
