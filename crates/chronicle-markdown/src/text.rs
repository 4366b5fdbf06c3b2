// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Text normalization for Markdown output

/// Collapse every whitespace run (newlines included) to one space and trim
#[must_use]
pub fn clean_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize text for a table cell and escape pipes
#[must_use]
pub fn escape_table_cell(value: &str) -> String {
    clean_text(value).replace('|', "\\|")
}
