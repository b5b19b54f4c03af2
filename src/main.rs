//! Application entry point — dialogue-redact.
//!
//! 1. Initialise logging (`RUST_LOG`, default `info`).
//! 2. Parse the CLI.
//! 3. Run the requested pipeline.
//! 4. Print the run summary and total elapsed time.
//!
//! Skipped episodes never fail the process: the output document is written
//! after all episodes are processed and the exit status is success.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use dialogue_redact::cli::{Cli, Command};
use dialogue_redact::pipeline::{decrypt, encrypt, SeasonReport};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let started = Instant::now();

    match cli.command {
        Command::Encrypt {
            annot_file,
            output_file,
        } => {
            let summary = encrypt::run(&annot_file, &output_file)?;
            println!(
                "Encrypted {} segments ({} word types, {} fingerprint types)",
                summary.segments, summary.word_types, summary.fingerprint_types
            );
            println!("Text encrypted in {:.2} seconds", started.elapsed().as_secs_f64());
        }

        Command::Decrypt {
            annot_file,
            subtitles_dir,
            subtitles_encoding,
            output_file,
        } => {
            let reports = decrypt::run(
                &annot_file,
                &subtitles_dir,
                &subtitles_encoding,
                &output_file,
            )?;
            for report in &reports {
                print_season(report);
            }
            println!("Text recovered in {:.2} seconds", started.elapsed().as_secs_f64());
        }
    }

    Ok(())
}

fn print_season(report: &SeasonReport) {
    match (report.mean_deletions, report.mean_substitutions) {
        (Some(del), Some(sub)) => {
            println!(
                "Season {:02}: {:4.2} del (avg.); {:4.2} sub (avg.)",
                report.season_id, del, sub
            );
        }
        _ => {
            println!(
                "Season {:02}: no episodes recovered ({} skipped)",
                report.season_id, report.episodes_skipped
            );
        }
    }
}
