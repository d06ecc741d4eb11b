//! Data structures: run configuration, per-file outcome, run report.

use std::path::PathBuf;

/// Whether files are rewritten or only inspected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CleanMode {
    /// Rewrite every eligible file, even when its content is already clean.
    #[default]
    Fix,
    /// Write nothing; report files whose content would change.
    Check,
}

/// Explicit run configuration; the repository root is never taken from global state.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub root: PathBuf,
    pub mode: CleanMode,
}

impl CleanConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            mode: CleanMode::Fix,
        }
    }

    pub fn with_mode(mut self, mode: CleanMode) -> Self {
        self.mode = mode;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Extension not eligible; the file was not touched.
    Skipped,
    /// Content was already normalized (written anyway in fix mode).
    Unchanged,
    /// Content changed and was written back.
    Rewritten,
    /// Check mode: content would change.
    NeedsCleaning,
}

/// Result of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub skipped: usize,
    pub unchanged: usize,
    /// Files rewritten with different content (fix) or needing it (check), in enumeration order.
    pub changed: Vec<String>,
}

impl CleanReport {
    pub fn record(&mut self, path: &str, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Skipped => self.skipped += 1,
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Rewritten | FileOutcome::NeedsCleaning => {
                self.changed.push(path.to_string());
            }
        }
    }

    /// Number of eligible files processed.
    pub fn processed(&self) -> usize {
        self.unchanged + self.changed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.changed.is_empty()
    }
}
