//! Subtitle-file discovery by `S<season>E<episode>` naming convention.

use std::path::{Path, PathBuf};

/// Format the `SxxEyy` tag used both for file matching and diagnostics,
/// with ids zero-padded to width 2.
pub fn episode_tag(season_id: u32, episode_id: u32) -> String {
    format!("S{:02}E{:02}", season_id, episode_id)
}

/// Find the subtitle file for one episode in `dir`.
///
/// Matches any `.srt` file whose name contains the episode's tag,
/// case-insensitively (`s01e02`, `S01E02`, …). When several files match,
/// the lexicographically first one is returned so the choice is
/// deterministic. `Ok(None)` means no source exists for this episode.
pub fn find_subtitle(
    dir: &Path,
    season_id: u32,
    episode_id: u32,
) -> std::io::Result<Option<PathBuf>> {
    let tag = episode_tag(season_id, episode_id);

    let mut matches: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("srt"))
        })
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.to_uppercase().contains(&tag))
        })
        .collect();

    matches.sort();
    Ok(matches.into_iter().next())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
