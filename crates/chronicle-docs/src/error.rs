// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for chronicle-docs

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while publishing to Google Docs
#[derive(Debug, Error)]
pub enum DocsError {
    /// Credential payload is not a usable service-account key
    #[error("invalid JSON: {0}")]
    InvalidCredentials(#[source] serde_json::Error),

    /// The key's private key could not be used for signing
    #[error("Service account private key is invalid: {0}")]
    InvalidKey(#[from] jsonwebtoken::errors::Error),

    /// Source Markdown file is missing
    #[error("{} does not exist. Generate it first.", .path.display())]
    MissingSource {
        /// Path that was expected to hold the Markdown
        path: PathBuf,
    },

    /// Reading the source file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote API answered with an error status
    #[error("{service} API error (HTTP {status}): {message}")]
    Api {
        /// Which endpoint failed ("token", "documents.get", "documents.batchUpdate")
        service: &'static str,
        /// HTTP status code
        status: u16,
        /// Error message extracted from the response
        message: String,
    },

    /// Remote API answered with a body that could not be decoded
    #[error("Unexpected {service} response: {source}")]
    Decode {
        /// Which endpoint produced the body
        service: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
