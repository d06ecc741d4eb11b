//! Shared test helpers.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

/// Create a temp dir and write files. Returns (guard, root). Paths are relative to root; parent dirs are created.
pub fn project(files: &[(&str, &str)]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();
    for (path, content) in files {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full, content).unwrap();
    }
    (dir, root)
}

fn git(root: &Path, args: &[&str]) -> bool {
    Command::new("git")
        .arg("-C")
        .arg(root)
        .args(args)
        .output()
        .is_ok_and(|o| o.status.success())
}

/// Like [`project`], then `git init` and stage every file. `None` when git is unavailable.
pub fn git_project(files: &[(&str, &str)]) -> Option<(tempfile::TempDir, PathBuf)> {
    let (dir, root) = project(files);
    if !git(&root, &["init", "-q"]) || !git(&root, &["add", "-A"]) {
        eprintln!("git unavailable; skipping");
        return None;
    }
    Some((dir, root))
}

pub fn read(root: &Path, path: &str) -> String {
    std::fs::read_to_string(root.join(path)).unwrap()
}
