// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Git log output parsing
//!
//! `git log` is asked to print one commit per line with four fields joined by
//! the ASCII unit separator. Author names and subjects routinely contain
//! commas, pipes and tabs, but never `U+001F`.

use tracing::debug;

use crate::commit::CommitRecord;

/// Separator between fields of one log line
pub const FIELD_SEPARATOR: char = '\u{1f}';

/// `--pretty=format:` string producing `hash`, `author`, `date`, `subject`
pub const LOG_FORMAT: &str = "%h%x1f%an%x1f%ad%x1f%s";

/// Parse a single log line
///
/// Returns `None` for lines that do not split into exactly four fields.
#[must_use]
pub fn parse_log_line(line: &str) -> Option<CommitRecord> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    CommitRecord::from_fields(&fields)
}

/// Parse the full output of `git log --pretty=format:LOG_FORMAT`
///
/// Blank lines are ignored and malformed lines are skipped; the order of the
/// remaining records matches the input.
#[must_use]
pub fn parse_log_output(output: &str) -> Vec<CommitRecord> {
    let mut records = Vec::new();
    for (index, line) in output.trim().lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match parse_log_line(line) {
            Some(record) => records.push(record),
            None => debug!(line = index + 1, "Skipping malformed log line"),
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn line(fields: &[&str]) -> String {
        fields.join(&FIELD_SEPARATOR.to_string())
    }

    #[test]
    fn test_parse_line_well_formed() {
        let record = parse_log_line(&line(&["a1b2c3d", "Jane Doe", "2026-03-04", "fix: crash"]))
            .expect("should parse");
        assert_eq!(record, CommitRecord::new("a1b2c3d", "Jane Doe", "2026-03-04", "fix: crash"));
    }

    #[test]
    fn test_parse_line_keeps_ordinary_delimiters() {
        let record = parse_log_line(&line(&[
            "a1b2c3d",
            "Doe, Jane | QA",
            "2026-03-04",
            "chore: bump a, b | c",
        ]))
        .expect("should parse");
        assert_eq!(record.author, "Doe, Jane | QA");
        assert_eq!(record.subject, "chore: bump a, b | c");
    }

    #[test]
    fn test_parse_line_wrong_field_count() {
        assert!(parse_log_line(&line(&["a1b2c3d", "Jane", "2026-03-04"])).is_none());
        assert!(
            parse_log_line(&line(&["a1b2c3d", "Jane", "2026-03-04", "subj", "extra"])).is_none()
        );
        assert!(parse_log_line("no separators at all").is_none());
    }

    #[test]
    fn test_parse_line_empty_subject_is_still_four_fields() {
        let record = parse_log_line(&line(&["a1b2c3d", "Jane", "2026-03-04", ""]))
            .expect("should parse");
        assert_eq!(record.subject, "");
    }

    #[test]
    fn test_parse_output_preserves_order() {
        let output = [
            line(&["3333333", "C", "2026-03-03", "third"]),
            line(&["2222222", "B", "2026-03-02", "second"]),
            line(&["1111111", "A", "2026-03-01", "first"]),
        ]
        .join("\n");

        let hashes: Vec<String> = parse_log_output(&output)
            .into_iter()
            .map(|r| r.short_hash)
            .collect();
        assert_eq!(hashes, vec!["3333333", "2222222", "1111111"]);
    }

    #[test]
    fn test_parse_output_skips_malformed_and_blank_lines() {
        let output = format!(
            "{}\n\ngarbage line\n{}\n{}\n",
            line(&["2222222", "B", "2026-03-02", "second"]),
            line(&["bad", "only-two"]),
            line(&["1111111", "A", "2026-03-01", "first"]),
        );

        let records = parse_log_output(&output);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].short_hash, "2222222");
        assert_eq!(records[1].short_hash, "1111111");
    }

    #[test]
    fn test_parse_output_empty() {
        assert!(parse_log_output("").is_empty());
        assert!(parse_log_output("\n\n").is_empty());
    }

    #[test]
    fn test_log_format_uses_unit_separator() {
        assert_eq!(LOG_FORMAT.matches("%x1f").count(), 3);
        assert_eq!(FIELD_SEPARATOR as u32, 0x1f);
    }
}
