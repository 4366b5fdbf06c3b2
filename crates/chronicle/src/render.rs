// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! History rendering run
//!
//! Reads commits, renders the page fully in memory, and only then overwrites
//! the output file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use chronicle_git::{GitError, HistorySource, load_history};
use chronicle_markdown::{RenderStyle, renderer_for};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::RenderConfig;

/// Errors that abort a render run
#[derive(Debug, Error)]
pub enum RenderError {
    /// The history query failed
    #[error("Failed to read commit history: {0}")]
    History(#[from] GitError),

    /// Writing the output file failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    /// Process exit code for this failure
    ///
    /// A failed git command passes its own code through; everything else is 1.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::History(err) => err
                .exit_code()
                .and_then(|code| u8::try_from(code).ok())
                .filter(|code| *code != 0)
                .unwrap_or(1),
            Self::Write { .. } => 1,
        }
    }
}

/// Summary of a completed render run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    /// File that was written
    pub path: PathBuf,
    /// Number of commits rendered
    pub commits: usize,
    /// Style used
    pub style: RenderStyle,
}

/// Render the history from `source` into the configured output file
///
/// # Errors
///
/// Returns `RenderError::History` if history cannot be read and
/// `RenderError::Write` if the file cannot be written.
pub fn run(
    config: &RenderConfig,
    source: &dyn HistorySource,
    generated_at: DateTime<Utc>,
) -> Result<RenderReport, RenderError> {
    let records = load_history(source)?;
    let markdown = renderer_for(config.style).render(&records, generated_at);

    let path = config.output_path();
    write_document(&path, &markdown)?;
    info!(path = %path.display(), commits = records.len(), style = %config.style, "Wrote commit history");

    Ok(RenderReport {
        path,
        commits: records.len(),
        style: config.style,
    })
}

/// Overwrite `path` with `contents`, creating parent directories
///
/// # Errors
///
/// Returns `RenderError::Write` on any IO failure.
pub fn write_document(path: &Path, contents: &str) -> Result<(), RenderError> {
    let write_err = |source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, contents).map_err(write_err)?;
    debug!(bytes = contents.len(), "Output written");
    Ok(())
}
