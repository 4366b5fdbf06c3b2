// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! History sources
//!
//! [`HistorySource`] is the narrow seam between record loading and the
//! version-control tool. [`GitCli`] shells out to `git`; tests substitute
//! fixed output.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::commit::CommitRecord;
use crate::error::GitError;
use crate::parser::{LOG_FORMAT, parse_log_output};

/// Access to a repository's commit log
pub trait HistorySource {
    /// Whether the checkout has at least one resolvable commit
    ///
    /// An unborn branch is `Ok(false)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `GitError` only if the tool itself cannot be run.
    fn has_commits(&self) -> Result<bool, GitError>;

    /// Raw log output, one commit per line in [`LOG_FORMAT`], newest first
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the log query fails.
    fn log_output(&self) -> Result<String, GitError>;
}

/// Load every commit record from a source
///
/// An empty history yields an empty list without querying the log.
///
/// # Errors
///
/// Returns `GitError` if presence detection cannot run or the log query fails.
pub fn load_history(source: &dyn HistorySource) -> Result<Vec<CommitRecord>, GitError> {
    if !source.has_commits()? {
        info!("Repository has no commits yet");
        return Ok(Vec::new());
    }
    let output = source.log_output()?;
    let records = parse_log_output(&output);
    info!(commits = records.len(), "Loaded commit history");
    Ok(records)
}

/// [`HistorySource`] backed by the `git` command-line tool
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_dir: PathBuf,
    program: PathBuf,
}

impl GitCli {
    /// Read history from the repository at `repo_dir`
    #[must_use]
    pub fn new(repo_dir: impl AsRef<Path>) -> Self {
        Self {
            repo_dir: repo_dir.as_ref().to_path_buf(),
            program: PathBuf::from("git"),
        }
    }

    /// Use a different `git` executable
    #[must_use]
    pub fn with_program(mut self, program: impl AsRef<Path>) -> Self {
        self.program = program.as_ref().to_path_buf();
        self
    }

    /// The repository directory commands run in
    #[must_use]
    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).current_dir(&self.repo_dir);
        cmd
    }
}

impl HistorySource for GitCli {
    fn has_commits(&self) -> Result<bool, GitError> {
        let status = self
            .command(&["rev-parse", "--quiet", "--verify", "HEAD"])
            .output()?
            .status;
        debug!(code = ?status.code(), "git rev-parse HEAD");
        Ok(status.success())
    }

    fn log_output(&self) -> Result<String, GitError> {
        let pretty = format!("--pretty=format:{LOG_FORMAT}");
        let output = self.command(&["log", &pretty, "--date=short"]).output()?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: "log".to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
