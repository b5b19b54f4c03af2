//! Whole-document JSON persistence for the annotation corpus.
//!
//! Documents are read and written in one piece. A malformed document is a
//! fatal error surfaced before any output file exists; the pipelines only
//! call [`save`] once, after all episodes are processed, so the output is
//! atomic from the caller's perspective.

use std::path::Path;

use anyhow::{Context, Result};

use super::schema::Corpus;

/// Load an annotation document from `path`.
///
/// # Errors
///
/// Fails when the file cannot be read or does not match the expected
/// document structure (missing `seasons`, `data`, `speech_segments`, …).
pub fn load(path: &Path) -> Result<Corpus> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read annotation file {}", path.display()))?;
    let corpus: Corpus = serde_json::from_str(&content)
        .with_context(|| format!("malformed annotation document {}", path.display()))?;
    Ok(corpus)
}

/// Write an annotation document to `path` as pretty-printed JSON,
/// creating parent directories as needed.
pub fn save(path: &Path, corpus: &Corpus) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(corpus)?;
    std::fs::write(path, content)
        .with_context(|| format!("failed to write annotation file {}", path.display()))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn load_save_round_trip() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("annot.json");

        let doc = json!({
            "seasons": [{
                "id": 1,
                "episodes": [{
                    "id": 1,
                    "data": { "speech_segments": [
                        { "start": 0.0, "end": 1.0, "text": "hi" }
                    ]}
                }]
            }]
        });
        std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();

        let corpus = load(&path).expect("load");
        let out = dir.path().join("out.json");
        save(&out, &corpus).expect("save");

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written, doc);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        assert!(load(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn malformed_document_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"not_seasons": []}"#).unwrap();
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("malformed"), "unexpected: {err}");
    }
}
