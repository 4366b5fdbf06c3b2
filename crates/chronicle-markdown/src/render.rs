// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Changelog page rendering
//!
//! Both styles share the page frame (title, generation timestamp, empty-state
//! sentence) and differ only in how commits are laid out.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use chronicle_git::CommitRecord;

use crate::error::MarkdownError;
use crate::humanize::humanize_subject;
use crate::text::{clean_text, escape_table_cell};

/// `strftime` format of the "last updated" stamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Sentence shown when the repository has no commits
pub const EMPTY_STATE: &str =
    "No updates yet. As soon as changes are committed, a short summary will appear here.";

const LIST_TITLE: &str = "# Project Update Log";
const LIST_INTRO: &str = "This page collects recent changes in plain language so anyone following the project can stay in the loop.";
const LIST_HEADING: &str = "## Recent Highlights";
const LIST_OUTRO: &str = "Need more context? Feel free to reach out to the team or check the detailed commit on GitHub using the reference above.";

const TABLE_TITLE: &str = "# Commit History";
const TABLE_HEADER: &str = "| Hash | Author | Date | Message |";
const TABLE_DIVIDER: &str = "| --- | --- | --- | --- |";

/// Format a generation time as `YYYY-MM-DD HH:MM:SS UTC`
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Renders commit records into a complete Markdown page
pub trait Renderer {
    /// Render `records` (kept in the given order) stamped with `generated_at`
    ///
    /// The returned text always ends with a newline.
    fn render(&self, records: &[CommitRecord], generated_at: DateTime<Utc>) -> String;
}

/// Bulleted, plain-language list
///
/// One line per commit:
/// ``- **2026-01-02** — Ann: What's new: add login (reference `a1b2c3d`)``
#[derive(Debug, Clone, Copy, Default)]
pub struct ListRenderer;

impl ListRenderer {
    fn line(record: &CommitRecord) -> String {
        format!(
            "- **{}** — {}: {} (reference `{}`)",
            clean_text(&record.date),
            clean_text(&record.author),
            humanize_subject(&record.subject),
            clean_text(&record.short_hash),
        )
    }
}

impl Renderer for ListRenderer {
    fn render(&self, records: &[CommitRecord], generated_at: DateTime<Utc>) -> String {
        let mut lines = vec![
            LIST_TITLE.to_string(),
            String::new(),
            format!("_Last updated: {}_", format_timestamp(generated_at)),
            String::new(),
            LIST_INTRO.to_string(),
            String::new(),
        ];

        if records.is_empty() {
            lines.push(EMPTY_STATE.to_string());
            lines.push(String::new());
            return lines.join("\n");
        }

        lines.push(LIST_HEADING.to_string());
        lines.push(String::new());
        lines.extend(records.iter().map(Self::line));
        lines.push(String::new());
        lines.push(LIST_OUTRO.to_string());
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Markdown table with Hash / Author / Date / Message columns
///
/// Cell text is whitespace-normalized and `|` is escaped so a commit cannot
/// break the table. Subjects are shown as written, not humanized.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer;

impl TableRenderer {
    fn row(record: &CommitRecord) -> String {
        format!(
            "| `{}` | {} | {} | {} |",
            escape_table_cell(&record.short_hash),
            escape_table_cell(&record.author),
            escape_table_cell(&record.date),
            escape_table_cell(&record.subject),
        )
    }
}

impl Renderer for TableRenderer {
    fn render(&self, records: &[CommitRecord], generated_at: DateTime<Utc>) -> String {
        let mut lines = vec![
            TABLE_TITLE.to_string(),
            String::new(),
            format!("_Last updated: {}_", format_timestamp(generated_at)),
            String::new(),
        ];

        if records.is_empty() {
            lines.push(EMPTY_STATE.to_string());
        } else {
            lines.push(TABLE_HEADER.to_string());
            lines.push(TABLE_DIVIDER.to_string());
            lines.extend(records.iter().map(Self::row));
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Which [`Renderer`] to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// [`ListRenderer`]
    #[default]
    List,
    /// [`TableRenderer`]
    Table,
}

impl FromStr for RenderStyle {
    type Err = MarkdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "list" => Ok(Self::List),
            "table" => Ok(Self::Table),
            _ => Err(MarkdownError::UnknownStyle {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("list"),
            Self::Table => f.write_str("table"),
        }
    }
}

/// Renderer for a style
#[must_use]
pub fn renderer_for(style: RenderStyle) -> Box<dyn Renderer> {
    match style {
        RenderStyle::List => Box::new(ListRenderer),
        RenderStyle::Table => Box::new(TableRenderer),
    }
}
