// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! chronicle-markdown: Markdown changelog rendering for chronicle
//!
//! This library crate turns [`CommitRecord`](chronicle_git::CommitRecord)s
//! into a Markdown page, either as a plain-language bulleted list or as a
//! table.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use chronicle_git::CommitRecord;
//! use chronicle_markdown::{RenderStyle, renderer_for};
//!
//! let records = vec![CommitRecord::new("a1b2c3d", "Ann", "2026-01-02", "feat: add login")];
//! let page = renderer_for(RenderStyle::List).render(&records, Utc::now());
//! assert!(page.contains("What's new: add login"));
//! ```

pub mod error;
pub mod humanize;
pub mod render;
pub mod text;

pub use error::MarkdownError;
pub use humanize::{humanize_subject, lead_for};
pub use render::{
    EMPTY_STATE, ListRenderer, RenderStyle, Renderer, TIMESTAMP_FORMAT, TableRenderer,
    format_timestamp, renderer_for,
};
pub use text::{clean_text, escape_table_cell};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::MarkdownError;
    pub use crate::render::{ListRenderer, RenderStyle, Renderer, TableRenderer, renderer_for};
}
