//! Git working-tree status.

use std::path::Path;

use crate::exec::{Error, Runner};

/// A git checkout rooted at a directory that contains `.git`.
pub struct Git<'a> {
    root: &'a Path,
    runner: &'a dyn Runner,
}

impl<'a> Git<'a> {
    /// Open the checkout at `root`.
    ///
    /// Only `root` itself is inspected; parent directories are not searched.
    /// Returns `None` when there is no `.git` entry (file or directory).
    pub fn open(root: &'a Path, runner: &'a dyn Runner) -> Option<Self> {
        if std::fs::symlink_metadata(root.join(".git")).is_err() {
            return None;
        }
        Some(Self { root, runner })
    }

    /// Short-format status output (`git status -s`).
    pub fn status_short(&self) -> Result<String, Error> {
        self.run_output(&["status", "-s"])
    }

    /// Whether the working tree has pending changes.
    ///
    /// Status output that splits into more than one piece on `\n` means at
    /// least one line was reported.
    pub fn is_unclean(&self) -> Result<bool, Error> {
        let status = self.status_short()?;
        Ok(status.split('\n').count() > 1)
    }

    fn run_output(&self, args: &[&str]) -> Result<String, Error> {
        self.runner.run("git", args, self.root)
    }
}
