// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Plain-language commit subjects
//!
//! Conventional-commit prefixes (`feat:`, `fix:`, ...) are swapped for a short
//! lead-in readers outside the team understand.

use crate::text::clean_text;

/// Known conventional-commit types and their lead-ins
const PREFIX_LEADS: &[(&str, &str)] = &[
    ("feat", "What's new:"),
    ("fix", "Bug fix:"),
    ("chore", "Housekeeping:"),
    ("docs", "Documentation:"),
    ("refactor", "Under the hood:"),
    ("test", "Tests:"),
    ("build", "Build:"),
    ("ci", "CI:"),
    ("style", "Style:"),
];

/// Lead-in phrase for a conventional-commit type, case-insensitive
#[must_use]
pub fn lead_for(prefix: &str) -> Option<&'static str> {
    let prefix = prefix.trim().to_lowercase();
    PREFIX_LEADS
        .iter()
        .find(|(kind, _)| *kind == prefix)
        .map(|(_, lead)| *lead)
}

/// Rewrite a subject for a human audience
///
/// `"feat: add login"` becomes `"What's new: add login"`. Anything without a
/// recognized prefix is only capitalized: `"wip stuff"` becomes `"Wip stuff"`
/// and `"unknown: thing"` becomes `"Unknown: thing"`.
#[must_use]
pub fn humanize_subject(subject: &str) -> String {
    let text = clean_text(subject);
    if text.is_empty() {
        return text;
    }

    if let Some((prefix, rest)) = text.split_once(':')
        && let Some(lead) = lead_for(prefix)
    {
        return format!("{lead} {}", rest.trim());
    }
    capitalize_first(&text)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
