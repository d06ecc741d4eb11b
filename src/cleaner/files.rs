//! Enumerating the repository's tracked files.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{CleanError, Result};

/// Source of candidate paths, relative to the repository root, in a stable order.
pub trait FileSource {
    fn list_files(&self) -> Result<Vec<String>>;
}

/// Lists files tracked by git via `git -C <root> ls-files -z`.
#[derive(Debug, Clone)]
pub struct GitLsFiles {
    root: PathBuf,
}

impl GitLsFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileSource for GitLsFiles {
    fn list_files(&self) -> Result<Vec<String>> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(["ls-files", "-z"])
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CleanError::GitSpawn {
                root: self.root.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(CleanError::GitFailed {
                root: self.root.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        let stdout = String::from_utf8(output.stdout).map_err(|_| CleanError::GitOutput {
            root: self.root.clone(),
        })?;
        let files = split_nul_list(&stdout);
        debug!(root = %self.root.display(), count = files.len(), "listed tracked files");
        Ok(files)
    }
}

/// Fixed, in-memory list of paths.
#[derive(Debug, Clone, Default)]
pub struct StaticFileList(pub Vec<String>);

impl FileSource for StaticFileList {
    fn list_files(&self) -> Result<Vec<String>> {
        Ok(self.0.clone())
    }
}

impl<S: Into<String>> FromIterator<S> for StaticFileList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Split NUL-terminated `ls-files -z` output, dropping empty entries.
fn split_nul_list(stdout: &str) -> Vec<String> {
    stdout
        .split('\0')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
