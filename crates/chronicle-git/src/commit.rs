// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit record type

/// One commit as reported by `git log`
///
/// Records are built fresh on every run and only ever persisted as rendered
/// text. Fields hold the raw values git printed; normalization happens at
/// render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Abbreviated commit hash (`%h`)
    pub short_hash: String,
    /// Author display name (`%an`)
    pub author: String,
    /// Author date in `YYYY-MM-DD` form (`%ad` with `--date=short`)
    pub date: String,
    /// First line of the commit message (`%s`)
    pub subject: String,
}

impl CommitRecord {
    /// Create a record from its four fields
    #[must_use]
    pub fn new(
        short_hash: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            short_hash: short_hash.into(),
            author: author.into(),
            date: date.into(),
            subject: subject.into(),
        }
    }

    /// Build a record from split log fields
    ///
    /// Returns `None` unless there are exactly four fields.
    #[must_use]
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        match fields {
            [short_hash, author, date, subject] => {
                Some(Self::new(*short_hash, *author, *date, *subject))
            }
            _ => None,
        }
    }
}
