// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! chronicle-docs: Google Docs publishing for chronicle
//!
//! This library crate replaces the body of a Google Docs document with local
//! text, authenticating as a service account.
//!
//! # Example
//!
//! ```no_run
//! use chronicle_docs::{Credentials, DOCUMENTS_SCOPE, GoogleDocsClient, replace_document_body};
//!
//! let raw = std::env::var("GOOGLE_SERVICE_ACCOUNT_JSON").expect("credentials");
//! let credentials = Credentials::from_value(&raw, &[DOCUMENTS_SCOPE]).expect("parse credentials");
//! let client = GoogleDocsClient::new(credentials).expect("build client");
//!
//! replace_document_body(&client, "1AbC...", "# Hello\n").expect("replace body");
//! ```

pub mod client;
pub mod credentials;
pub mod document;
pub mod error;
pub mod payload;
pub mod request;
pub mod token;

pub use client::{DocumentClient, GoogleDocsClient, ReplaceOutcome, replace_document_body};
pub use credentials::{Credentials, DOCUMENTS_SCOPE, ServiceAccountKey};
pub use document::{Document, EMPTY_DOCUMENT_END_INDEX};
pub use error::DocsError;
pub use payload::load_source_text;
pub use request::{BatchUpdateRequest, Request, replace_body_requests};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::client::{DocumentClient, GoogleDocsClient, replace_document_body};
    pub use crate::credentials::{Credentials, DOCUMENTS_SCOPE};
    pub use crate::error::DocsError;
}
