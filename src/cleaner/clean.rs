//! Orchestrate a run: enumerate once, then normalize each eligible file in order.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::constants::is_eligible_path;
use super::files::FileSource;
use super::models::{CleanConfig, CleanMode, CleanReport, FileOutcome};
use super::normalize::normalize_content;
use crate::error::{CleanError, Result};

/// Read a file as UTF-8 text.
fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| CleanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| CleanError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Normalize one file under `root`. Ineligible paths return [`FileOutcome::Skipped`] without any I/O.
///
/// In fix mode the file is always written back, even when the content did not change.
pub fn clean_file(root: &Path, relative_path: &str, mode: CleanMode) -> Result<FileOutcome> {
    if !is_eligible_path(Path::new(relative_path)) {
        return Ok(FileOutcome::Skipped);
    }
    let full_path = root.join(relative_path);
    let text = read_text(&full_path)?;
    let normalized = normalize_content(&text);
    let changed = normalized != text;

    let outcome = match mode {
        CleanMode::Check if changed => FileOutcome::NeedsCleaning,
        CleanMode::Check => FileOutcome::Unchanged,
        CleanMode::Fix => {
            fs::write(&full_path, normalized).map_err(|source| CleanError::Write {
                path: full_path.clone(),
                source,
            })?;
            if changed {
                FileOutcome::Rewritten
            } else {
                FileOutcome::Unchanged
            }
        }
    };
    debug!(path = relative_path, ?outcome, "cleaned file");
    Ok(outcome)
}

/// Enumerate files from `source` and clean them one at a time; stops at the first error.
pub fn clean_repository(config: &CleanConfig, source: &dyn FileSource) -> Result<CleanReport> {
    if !config.root.is_dir() {
        return Err(CleanError::NotADirectory(config.root.clone()));
    }
    let files = source.list_files()?;
    let mut report = CleanReport::default();
    for relative_path in &files {
        let outcome = clean_file(&config.root, relative_path, config.mode)?;
        report.record(relative_path, outcome);
    }
    info!(
        mode = ?config.mode,
        processed = report.processed(),
        changed = report.changed.len(),
        skipped = report.skipped,
        "clean finished"
    );
    Ok(report)
}
