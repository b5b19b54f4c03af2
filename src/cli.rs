//! Command-line argument surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pseudonymize dialogue annotations, or recover them from subtitle files.
#[derive(Debug, Parser)]
#[command(name = "dialogue-redact", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replace every speech segment's text with word fingerprints.
    Encrypt {
        /// Input annotation file (plaintext segments).
        #[arg(long)]
        annot_file: PathBuf,
        /// Output annotation file (fingerprinted segments).
        #[arg(long)]
        output_file: PathBuf,
    },

    /// Recover speech segment text by aligning against subtitle files.
    Decrypt {
        /// Input annotation file (fingerprinted segments).
        #[arg(long)]
        annot_file: PathBuf,
        /// Directory containing one `.srt` file per episode, named with an
        /// `S<season>E<episode>` tag.
        #[arg(long)]
        subtitles_dir: PathBuf,
        /// Text encoding of the subtitle files.
        #[arg(long, default_value = "utf-8")]
        subtitles_encoding: String,
        /// Output annotation file (recovered segments).
        #[arg(long)]
        output_file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_encrypt() {
        let cli = Cli::try_parse_from([
            "dialogue-redact",
            "encrypt",
            "--annot-file",
            "in.json",
            "--output-file",
            "out.json",
        ])
        .expect("parse");
        assert!(matches!(cli.command, Command::Encrypt { .. }));
    }

    #[test]
    fn decrypt_defaults_to_utf8() {
        let cli = Cli::try_parse_from([
            "dialogue-redact",
            "decrypt",
            "--annot-file",
            "in.json",
            "--subtitles-dir",
            "subs",
            "--output-file",
            "out.json",
        ])
        .expect("parse");
        match cli.command {
            Command::Decrypt {
                subtitles_encoding, ..
            } => assert_eq!(subtitles_encoding, "utf-8"),
            _ => panic!("expected decrypt"),
        }
    }

    #[test]
    fn missing_required_flag_fails() {
        assert!(Cli::try_parse_from(["dialogue-redact", "encrypt", "--annot-file", "x"]).is_err());
    }
}
