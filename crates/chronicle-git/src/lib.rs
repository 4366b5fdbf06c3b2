// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! chronicle-git: Git log reading for chronicle
//!
//! This library crate reads commit metadata from a local repository by
//! invoking the `git` CLI and turns its output into [`CommitRecord`]s, newest
//! first, ready for rendering.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use chronicle_git::{GitCli, load_history};
//!
//! let source = GitCli::new(".");
//! let records = load_history(&source).expect("read history");
//!
//! for r in records {
//!     println!("{} {} - {}", r.date, r.short_hash, r.subject);
//! }
//! ```

pub mod commit;
pub mod error;
pub mod parser;
pub mod source;

pub use commit::CommitRecord;
pub use error::GitError;
pub use parser::{FIELD_SEPARATOR, LOG_FORMAT, parse_log_line, parse_log_output};
pub use source::{GitCli, HistorySource, load_history};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::CommitRecord;
    pub use crate::error::GitError;
    pub use crate::source::{GitCli, HistorySource, load_history};
}
