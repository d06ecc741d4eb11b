//! Strip byte-order-marks and normalize trailing newlines in git-tracked source files.

pub mod cleaner;
pub mod cli;
pub mod error;
pub mod logging;

pub use cleaner::{
    clean_file, clean_repository, is_eligible_path, normalize_content, CleanConfig, CleanMode,
    CleanReport, FileOutcome, FileSource, GitLsFiles, StaticFileList,
};
pub use cli::{display_path, run, Args};
pub use error::{CleanError, Result};
