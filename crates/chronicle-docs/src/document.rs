// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The parts of a Google Docs document resource chronicle reads
//!
//! Only structural offsets matter here; everything else in the response is
//! ignored during deserialization.

use serde::Deserialize;

/// End index reported for a document with no body content
pub const EMPTY_DOCUMENT_END_INDEX: u64 = 1;

/// A document as returned by `documents.get`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document id
    #[serde(default)]
    pub document_id: Option<String>,
    /// Document title
    #[serde(default)]
    pub title: Option<String>,
    /// Main body
    #[serde(default)]
    pub body: Body,
}

/// Document body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Body {
    /// Top-level structural elements
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// A paragraph, table, section break, ...; only its offsets are kept
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralElement {
    /// Zero-based start offset (absent on the first section break)
    #[serde(default)]
    pub start_index: Option<u64>,
    /// Exclusive end offset
    #[serde(default)]
    pub end_index: Option<u64>,
}

impl Document {
    /// Highest end offset across body elements
    ///
    /// Falls back to [`EMPTY_DOCUMENT_END_INDEX`] when no element reports one.
    #[must_use]
    pub fn end_index(&self) -> u64 {
        self.body
            .content
            .iter()
            .filter_map(|element| element.end_index)
            .fold(EMPTY_DOCUMENT_END_INDEX, u64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_end_index_from_api_response() {
        let json = r#"{
            "documentId": "doc-1",
            "title": "Project Update Log",
            "body": {
                "content": [
                    {"endIndex": 1, "sectionBreak": {}},
                    {"startIndex": 1, "endIndex": 21, "paragraph": {"elements": []}},
                    {"startIndex": 21, "endIndex": 58, "paragraph": {"elements": []}}
                ]
            },
            "revisionId": "xyz"
        }"#;
        let doc: Document = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(doc.document_id.as_deref(), Some("doc-1"));
        assert_eq!(doc.body.content.len(), 3);
        assert_eq!(doc.end_index(), 58);
    }

    #[test]
    fn test_end_index_uses_maximum_not_last() {
        let doc = Document {
            body: Body {
                content: vec![
                    StructuralElement { start_index: Some(1), end_index: Some(40) },
                    StructuralElement { start_index: Some(1), end_index: Some(12) },
                ],
            },
            ..Default::default()
        };
        assert_eq!(doc.end_index(), 40);
    }

    #[test]
    fn test_end_index_defaults_when_empty() {
        let doc: Document = serde_json::from_str("{}").expect("should deserialize");
        assert_eq!(doc.end_index(), EMPTY_DOCUMENT_END_INDEX);

        let doc: Document =
            serde_json::from_str(r#"{"body": {"content": [{"sectionBreak": {}}]}}"#)
                .expect("should deserialize");
        assert_eq!(doc.end_index(), EMPTY_DOCUMENT_END_INDEX);
    }
}
