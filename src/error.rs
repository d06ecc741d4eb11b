//! Error types for enumeration, file access and decoding failures.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::string::FromUtf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CleanError>;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to run git ls-files in {}: {source}", root.display())]
    GitSpawn {
        root: PathBuf,
        source: std::io::Error,
    },

    #[error("git ls-files failed in {} ({status}): {stderr}", root.display())]
    GitFailed {
        root: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("git ls-files produced a non UTF-8 path in {}", root.display())]
    GitOutput { root: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },
}
