// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Integration tests for chronicle-git
//!
//! These tests build throwaway repositories with the `git` CLI and read them
//! back through [`GitCli`].

use std::path::Path;
use std::process::Command;

use chronicle_git::{GitCli, GitError, HistorySource, load_history};
use tempfile::TempDir;

/// Run git in `dir` with a fixed identity, panicking on failure
fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args([
            "-c",
            "user.name=Test Author",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .status()
        .expect("Failed to run git");
    assert!(status.success(), "git {args:?} failed");
}

/// Create an empty repository in a temp dir
fn empty_repo() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    git(dir.path(), &["init", "--quiet"]);
    dir
}

/// Create an empty commit with the given subject and author
fn commit(dir: &Path, subject: &str, author: &str) {
    let author = format!("--author={author} <author@example.com>");
    git(
        dir,
        &["commit", "--quiet", "--allow-empty", "-m", subject, &author],
    );
}

#[test]
fn test_empty_repository_has_no_commits() {
    let repo = empty_repo();
    let source = GitCli::new(repo.path());

    assert!(!source.has_commits().expect("rev-parse should run"));
    let records = load_history(&source).expect("empty history is not an error");
    assert!(records.is_empty());
}

#[test]
fn test_records_are_newest_first() {
    let repo = empty_repo();
    commit(repo.path(), "feat: first", "Ann");
    commit(repo.path(), "fix: second", "Bob");
    commit(repo.path(), "docs: third", "Cy");

    let records = load_history(&GitCli::new(repo.path())).expect("should load history");

    let subjects: Vec<&str> = records.iter().map(|r| r.subject.as_str()).collect();
    assert_eq!(subjects, vec!["docs: third", "fix: second", "feat: first"]);
    let authors: Vec<&str> = records.iter().map(|r| r.author.as_str()).collect();
    assert_eq!(authors, vec!["Cy", "Bob", "Ann"]);
}

#[test]
fn test_record_fields_have_expected_shape() {
    let repo = empty_repo();
    commit(repo.path(), "chore: tidy, sort | dedupe", "Zoë Ångström");

    let records = load_history(&GitCli::new(repo.path())).expect("should load history");
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert!(record.short_hash.len() >= 4);
    assert!(record.short_hash.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(record.author, "Zoë Ångström");
    assert_eq!(record.subject, "chore: tidy, sort | dedupe");

    // YYYY-MM-DD
    let date = record.date.as_bytes();
    assert_eq!(date.len(), 10);
    assert_eq!(date[4], b'-');
    assert_eq!(date[7], b'-');
}

#[test]
fn test_log_outside_repository_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let source = GitCli::new(dir.path());

    match source.log_output() {
        Err(GitError::CommandFailed { code, stderr, .. }) => {
            assert!(code.is_some());
            assert!(!stderr.is_empty());
        }
        other => panic!("expected CommandFailed, got: {other:?}"),
    }
}
