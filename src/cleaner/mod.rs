//! Normalize git-tracked text files: strip byte-order-marks and end each file with one newline.

mod clean;
pub mod constants;
mod files;
mod models;
pub mod normalize;

pub use clean::{clean_file, clean_repository};
pub use constants::{is_eligible_path, ELIGIBLE_EXTENSIONS};
pub use files::{FileSource, GitLsFiles, StaticFileList};
pub use models::{CleanConfig, CleanMode, CleanReport, FileOutcome};
pub use normalize::{needs_normalization, normalize_content};
