// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for chronicle-git

use thiserror::Error;

/// Errors that can occur while reading commit history
#[derive(Debug, Error)]
pub enum GitError {
    /// The `git` binary could not be found or spawned
    #[error("failed to execute git: {0}")]
    Spawn(#[from] std::io::Error),

    /// A git command exited with a non-zero status
    #[error("git {command} failed (exit code {code:?}): {stderr}")]
    CommandFailed {
        /// The git subcommand that failed
        command: String,
        /// The exit code, or `None` if the process was killed by a signal
        code: Option<i32>,
        /// Captured stderr, trimmed
        stderr: String,
    },
}

impl GitError {
    /// Exit code of the failed git process, if it reported one
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { code, .. } => *code,
            Self::Spawn(_) => None,
        }
    }
}
