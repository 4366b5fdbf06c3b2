// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `documents.batchUpdate` request bodies

use serde::Serialize;

use crate::document::EMPTY_DOCUMENT_END_INDEX;

/// First writable offset of a document body
pub const BODY_START_INDEX: u64 = 1;

/// Body of a `documents.batchUpdate` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchUpdateRequest {
    /// Requests applied atomically, in order
    pub requests: Vec<Request>,
}

/// One edit in a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    /// Delete a range of body content
    DeleteContentRange {
        /// Range to delete
        range: Range,
    },
    /// Insert text at a location
    InsertText {
        /// Where to insert
        location: Location,
        /// Text to insert
        text: String,
    },
}

/// Half-open `[start_index, end_index)` range in the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    /// Inclusive start offset
    pub start_index: u64,
    /// Exclusive end offset
    pub end_index: u64,
}

/// A single offset in the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Offset
    pub index: u64,
}

/// Requests that replace a body ending at `end_index` with `text`
///
/// The body's final newline can never be deleted, so the delete covers
/// `[1, end_index - 1)` and is omitted when that range is empty.
#[must_use]
pub fn replace_body_requests(end_index: u64, text: &str) -> BatchUpdateRequest {
    let mut requests = Vec::with_capacity(2);

    let delete_end = end_index.max(EMPTY_DOCUMENT_END_INDEX) - 1;
    if delete_end > BODY_START_INDEX {
        requests.push(Request::DeleteContentRange {
            range: Range {
                start_index: BODY_START_INDEX,
                end_index: delete_end,
            },
        });
    }
    requests.push(Request::InsertText {
        location: Location {
            index: BODY_START_INDEX,
        },
        text: text.to_string(),
    });

    BatchUpdateRequest { requests }
}

impl BatchUpdateRequest {
    /// Whether the batch deletes existing content
    #[must_use]
    pub fn deletes_content(&self) -> bool {
        self.requests
            .iter()
            .any(|r| matches!(r, Request::DeleteContentRange { .. }))
    }
}
