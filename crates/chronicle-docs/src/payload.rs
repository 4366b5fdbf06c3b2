// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Local Markdown payload

use std::path::Path;

use crate::error::DocsError;

/// Read the Markdown to publish, guaranteeing a trailing newline
///
/// # Errors
///
/// Returns `DocsError::MissingSource` if the file does not exist, or
/// `DocsError::Io` if it cannot be read.
pub fn load_source_text(path: &Path) -> Result<String, DocsError> {
    if !path.exists() {
        return Err(DocsError::MissingSource {
            path: path.to_path_buf(),
        });
    }
    let mut content = std::fs::read_to_string(path)?;
    if !content.ends_with('\n') {
        content.push('\n');
    }
    Ok(content)
}
