//! CLI: args, path display, and run logic.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cleaner::{
    clean_repository, CleanConfig, CleanMode, CleanReport, FileSource, GitLsFiles,
};

#[derive(Parser)]
#[command(name = "repo-clean")]
#[command(about = "Cleans the files in the repository.")]
#[command(
    long_about = "Cleans the files in the repository.\n\n\
    - Removes any byte-order-marks.\n\
    - Ensures the files end in a newline.\n\n\
    Only git-tracked .config, .cs, .csproj, .py and .sln files are touched."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Repository root (default when omitted: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Do not write anything; list files that would change and exit with code 1 if any
    #[arg(long)]
    pub check: bool,

    /// Verbose: -v = run summary, -vv = log every file
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Format path for user-facing output: strip Windows extended path prefix `\\?\` so it displays as a normal path.
pub fn display_path(path: &Path) -> std::borrow::Cow<'_, str> {
    let s = path.to_string_lossy();
    #[cfg(windows)]
    {
        if let Some(stripped) = s.strip_prefix(r"\\?\") {
            return std::borrow::Cow::Owned(stripped.to_string());
        }
    }
    s
}

fn resolve_root(path: Option<&PathBuf>) -> Result<PathBuf, i32> {
    let path = path.cloned().unwrap_or_else(|| PathBuf::from("."));
    let root = path.canonicalize().unwrap_or(path);
    if !root.is_dir() {
        eprintln!("Error: not a directory: {}", display_path(&root));
        return Err(2);
    }
    Ok(root)
}

fn print_check_results(report: &CleanReport) -> i32 {
    if report.is_clean() {
        return 0;
    }
    println!("Files that need cleaning:");
    for path in &report.changed {
        println!("  {path}");
    }
    1
}

/// Run against an explicit file source instead of `git ls-files`.
pub fn run_with_source(args: &Args, root: &Path, source: &dyn FileSource) -> i32 {
    let mode = if args.check {
        CleanMode::Check
    } else {
        CleanMode::Fix
    };
    let config = CleanConfig::new(root).with_mode(mode);
    match clean_repository(&config, source) {
        Ok(report) if mode == CleanMode::Check => print_check_results(&report),
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {err}");
            1
        }
    }
}

pub fn run(args: Args) -> i32 {
    let root = match resolve_root(args.path.as_ref()) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let source = GitLsFiles::new(&root);
    run_with_source(&args, &root, &source)
}
