// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for chronicle-markdown

use thiserror::Error;

/// Errors that can occur while configuring rendering
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkdownError {
    /// Render style name not recognized
    #[error("Unknown render style '{name}' (expected 'list' or 'table')")]
    UnknownStyle {
        /// The style name that was given
        name: String,
    },
}
