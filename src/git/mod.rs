//! Version-control backend: the handful of git queries the pipeline needs.
//!
//! The pipeline talks to [`Backend`]; [`GitCli`] implements it by shelling
//! out to the `git` executable. Every query is scoped to one repository root.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, TruckFactorError};

/// Header format for one commit block: `author|date`, preceded by a blank
/// line so header-only commits still form their own block.
const LOG_FORMAT: &str = "--pretty=format:%n%an|%ad";

/// Queries consumed by the extraction and filtering stages.
///
/// Implementations must be shareable across worker threads: the log
/// extractor issues concurrent `log_page` calls on the same backend.
pub trait Backend: Sync {
    /// Commit id of HEAD. Fails if the repository has no usable HEAD.
    fn head_commit(&self) -> Result<String>;

    /// Number of non-merge commits reachable from `reference` or any branch.
    fn count_commits(&self, reference: &str) -> Result<usize>;

    /// One page of the all-branches, non-merge log with per-file numstat,
    /// formatted as `author|date` headers followed by
    /// `<inserted>\t<deleted>\t<path>` lines.
    fn log_page(&self, reference: &str, skip: usize, max_count: usize) -> Result<String>;

    /// Paths tracked in the working tree at HEAD, relative to the root.
    fn tracked_files(&self) -> Result<Vec<String>>;
}

/// [`Backend`] backed by the `git` command-line tool.
pub struct GitCli {
    root: PathBuf,
}

impl GitCli {
    /// Check whether `git` can be executed.
    pub fn is_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .is_ok_and(|o| o.status.success())
    }

    /// Open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if !Self::is_available() {
            return Err(TruckFactorError::Environment(
                "git executable not found on PATH".into(),
            ));
        }
        let output = Command::new("git")
            .arg("-C")
            .arg(path)
            .args(["rev-parse", "--show-toplevel"])
            .output()?;
        if !output.status.success() {
            return Err(TruckFactorError::Environment(format!(
                "not a git repository (or any parent): {}",
                path.display()
            )));
        }
        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(Self {
            root: PathBuf::from(root),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(["-c", "core.quotepath=off"])
            .args(args)
            .output()?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(TruckFactorError::Backend(format!(
                "git {}: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            )))
        }
    }
}

impl Backend for GitCli {
    fn head_commit(&self) -> Result<String> {
        self.run(&["rev-parse", "--verify", "HEAD"])
            .map(|out| out.trim().to_string())
            .map_err(|e| {
                TruckFactorError::Environment(format!(
                    "cannot resolve HEAD in {}: {e}",
                    self.root.display()
                ))
            })
    }

    fn count_commits(&self, reference: &str) -> Result<usize> {
        let out = self.run(&["rev-list", "--count", "--no-merges", reference, "--all"])?;
        out.trim().parse().map_err(|_| {
            TruckFactorError::Backend(format!("unexpected rev-list output: {}", out.trim()))
        })
    }

    fn log_page(&self, reference: &str, skip: usize, max_count: usize) -> Result<String> {
        let skip = format!("--skip={skip}");
        let max_count = format!("--max-count={max_count}");
        self.run(&[
            "log",
            reference,
            "--all",
            "--no-merges",
            "--date=short",
            LOG_FORMAT,
            "--numstat",
            &skip,
            &max_count,
        ])
    }

    fn tracked_files(&self) -> Result<Vec<String>> {
        let out = self.run(&["ls-files"])?;
        Ok(out
            .lines()
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
