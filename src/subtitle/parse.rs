//! SRT caption-block parser.
//!
//! An SRT file is a sequence of blocks:
//!
//! ```text
//! 12
//! 00:01:02,500 --> 00:01:04,000
//! - <i>Hello there.</i>
//! (door slams)
//!
//! ```
//!
//! A block starts at its timestamp line (`HH:MM:SS,mmm --> HH:MM:SS,mmm`,
//! comma or dot before the milliseconds) and ends at a blank line or at end
//! of file. Index lines and anything else outside a timestamped block are
//! ignored. Extracted text has italic tags, parenthetical annotations and
//! leading speaker-turn dashes stripped.
//!
//! Files are decoded with a caller-declared encoding; bytes that do not
//! decode cleanly are a recoverable, file-scoped error — the caller skips
//! that episode and moves on.

use std::path::Path;

use encoding_rs::Encoding;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// ---------------------------------------------------------------------------
// SubtitleError
// ---------------------------------------------------------------------------

/// All errors that can arise while reading a subtitle file.
#[derive(Debug, Error)]
pub enum SubtitleError {
    /// The file could not be read from disk.
    #[error("failed to read subtitle file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The encoding label given on the command line is not a known encoding.
    #[error("unknown subtitle encoding label: {0:?}")]
    UnknownEncoding(String),

    /// The file's bytes are not valid in the declared encoding.
    #[error(
        "subtitle file {path} is not valid {encoding} — \
         pass the correct --subtitles-encoding"
    )]
    Decode { path: String, encoding: &'static str },
}

// ---------------------------------------------------------------------------
// CaptionLine
// ---------------------------------------------------------------------------

/// One extracted caption: a timestamp span and its cleaned text.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionLine {
    /// Caption start, seconds.
    pub start: f64,
    /// Caption end, seconds.
    pub end: f64,
    /// Caption text with markup stripped; continuation lines joined by a
    /// single space.
    pub text: String,
}

// ---------------------------------------------------------------------------
// Regular expressions
// ---------------------------------------------------------------------------

static TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d{2}):(\d{2}):(\d{2})[,.](\d{3}) --> (\d{2}):(\d{2}):(\d{2})[,.](\d{3})$",
    )
    .expect("valid timestamp regex")
});

static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?i>").expect("valid regex"));
static PAREN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").expect("valid regex"));
static DASH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-\s*").expect("valid regex"));

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Resolve a command-line encoding label (e.g. `"utf-8"`, `"windows-1252"`)
/// to an `encoding_rs` encoding.
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding, SubtitleError> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| SubtitleError::UnknownEncoding(label.to_string()))
}

/// Read and parse the subtitle file at `path` using `encoding`.
///
/// # Errors
///
/// - [`SubtitleError::Io`] when the file cannot be read.
/// - [`SubtitleError::Decode`] when its bytes are invalid in `encoding`.
pub fn parse_file(path: &Path, encoding: &'static Encoding) -> Result<Vec<CaptionLine>, SubtitleError> {
    let bytes = std::fs::read(path).map_err(|source| SubtitleError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let (content, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(SubtitleError::Decode {
            path: path.display().to_string(),
            encoding: encoding.name(),
        });
    }

    Ok(parse_str(&content))
}

/// Parse SRT `content` into ordered caption lines.
pub fn parse_str(content: &str) -> Vec<CaptionLine> {
    let mut captions = Vec::new();
    let mut span: Option<(f64, f64)> = None;
    let mut text = String::new();

    let mut flush = |span: &mut Option<(f64, f64)>, text: &mut String| {
        if let Some((start, end)) = span.take() {
            captions.push(CaptionLine {
                start,
                end,
                text: strip_markup(text),
            });
        }
        text.clear();
    };

    for raw in content.lines() {
        let line = raw.trim_end_matches('\r');

        if let Some(caps) = TIMESTAMP_RE.captures(line) {
            // A timestamp opens a new block even when the previous one had
            // no blank-line terminator.
            flush(&mut span, &mut text);
            span = Some((timestamp_secs(&caps, 1), timestamp_secs(&caps, 5)));
        } else if line.is_empty() {
            flush(&mut span, &mut text);
        } else if span.is_some() {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(line);
        }
        // Lines outside a block (SRT index numbers, stray text) are ignored.
    }
    // Trailing block without a final blank line.
    flush(&mut span, &mut text);

    captions
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Convert four capture groups starting at `first` (hours, minutes, seconds,
/// milliseconds) to seconds.
fn timestamp_secs(caps: &regex::Captures<'_>, first: usize) -> f64 {
    let group = |i: usize| -> f64 { caps[first + i].parse::<u32>().unwrap_or(0) as f64 };
    group(0) * 3600.0 + group(1) * 60.0 + group(2) + group(3) / 1000.0
}

/// Strip presentation markup: italic tags, parenthetical speaker/noise
/// annotations, and a leading speaker-turn dash.
fn strip_markup(text: &str) -> String {
    let text = ITALIC_RE.replace_all(text, "");
    let text = PAREN_RE.replace_all(&text, "");
    let text = DASH_RE.replace(&text, "");
    text.trim().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
