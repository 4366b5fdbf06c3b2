// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Google Docs API access
//!
//! [`DocumentClient`] covers the two calls a body replace needs. The
//! production [`GoogleDocsClient`] talks to `docs.googleapis.com` with a
//! service-account bearer token; tests use in-memory fakes.

use std::cell::RefCell;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::credentials::Credentials;
use crate::document::Document;
use crate::error::DocsError;
use crate::request::{BatchUpdateRequest, replace_body_requests};
use crate::token::fetch_access_token;

/// Default Google Docs API root
pub const DEFAULT_API_BASE: &str = "https://docs.googleapis.com";

/// The remote calls needed to replace a document's body
pub trait DocumentClient {
    /// Fetch a document's structure (`documents.get`)
    ///
    /// # Errors
    ///
    /// Returns `DocsError` on transport, status, or decoding failure.
    fn get_document(&self, document_id: &str) -> Result<Document, DocsError>;

    /// Apply a batch of edits atomically (`documents.batchUpdate`)
    ///
    /// # Errors
    ///
    /// Returns `DocsError` on transport or status failure.
    fn batch_update(&self, document_id: &str, batch: &BatchUpdateRequest) -> Result<(), DocsError>;
}

impl<T: DocumentClient + ?Sized> DocumentClient for &T {
    fn get_document(&self, document_id: &str) -> Result<Document, DocsError> {
        (**self).get_document(document_id)
    }

    fn batch_update(&self, document_id: &str, batch: &BatchUpdateRequest) -> Result<(), DocsError> {
        (**self).batch_update(document_id, batch)
    }
}

/// What a body replace did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceOutcome {
    /// End index of the document before the update
    pub previous_end_index: u64,
    /// Whether existing content was deleted
    pub deleted_existing: bool,
    /// Characters inserted
    pub inserted_chars: usize,
}

/// Replace the whole body of `document_id` with `text`
///
/// Reads the current extent, then sends one batch: an optional delete of the
/// existing content followed by an insert at the start of the body.
///
/// # Errors
///
/// Returns `DocsError` if either remote call fails.
pub fn replace_document_body(
    client: &dyn DocumentClient,
    document_id: &str,
    text: &str,
) -> Result<ReplaceOutcome, DocsError> {
    let document = client.get_document(document_id)?;
    let previous_end_index = document.end_index();
    debug!(document_id, end_index = previous_end_index, "Fetched document extent");

    let batch = replace_body_requests(previous_end_index, text);
    let deleted_existing = batch.deletes_content();
    client.batch_update(document_id, &batch)?;

    let outcome = ReplaceOutcome {
        previous_end_index,
        deleted_existing,
        inserted_chars: text.chars().count(),
    };
    info!(
        document_id,
        deleted_existing = outcome.deleted_existing,
        inserted_chars = outcome.inserted_chars,
        "Replaced document body"
    );
    Ok(outcome)
}

/// Build a `DocsError::Api` from an error response body
///
/// Google APIs report `{"error": {"message": ...}}`; other bodies are quoted
/// as-is. An empty body falls back to the status's reason phrase.
pub(crate) fn api_error(service: &'static str, status: u16, body: &str) -> DocsError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v["error"]["message"]
                .as_str()
                .or_else(|| v["error_description"].as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string());
    let message = if message.is_empty() {
        StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("no response body")
            .to_string()
    } else {
        message
    };
    DocsError::Api {
        service,
        status,
        message,
    }
}

/// [`DocumentClient`] for the Google Docs REST API
pub struct GoogleDocsClient {
    http: Client,
    credentials: Credentials,
    api_base: String,
    token: RefCell<Option<String>>,
}

impl GoogleDocsClient {
    /// Client for the public API
    ///
    /// No network traffic happens until the first call.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::Http` if the HTTP client cannot be built.
    pub fn new(credentials: Credentials) -> Result<Self, DocsError> {
        let http = Client::builder()
            .user_agent(concat!("chronicle/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self::with_http(http, credentials))
    }

    /// Client that sends through a caller-configured HTTP client
    #[must_use]
    pub fn with_http(http: Client, credentials: Credentials) -> Self {
        Self {
            http,
            credentials,
            api_base: DEFAULT_API_BASE.to_string(),
            token: RefCell::new(None),
        }
    }

    /// Point the client at a different API root
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// URL of a document resource
    #[must_use]
    pub fn document_url(&self, document_id: &str) -> String {
        format!("{}/v1/documents/{document_id}", self.api_base)
    }

    /// URL of a document's `batchUpdate` method
    #[must_use]
    pub fn batch_update_url(&self, document_id: &str) -> String {
        format!("{}:batchUpdate", self.document_url(document_id))
    }

    fn access_token(&self) -> Result<String, DocsError> {
        if let Some(token) = self.token.borrow().as_ref() {
            return Ok(token.clone());
        }
        let token = fetch_access_token(&self.http, &self.credentials)?;
        *self.token.borrow_mut() = Some(token.clone());
        Ok(token)
    }

    fn send(&self, service: &'static str, request: RequestBuilder) -> Result<Response, DocsError> {
        let response = request.bearer_auth(self.access_token()?).send()?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().unwrap_or_else(|e| {
                debug!(service, error = %e, "Failed to read error response body");
                String::new()
            });
            Err(api_error(service, status.as_u16(), &body))
        }
    }

    fn decode<T: DeserializeOwned>(
        service: &'static str,
        response: Response,
    ) -> Result<T, DocsError> {
        let body = response.text()?;
        serde_json::from_str(&body).map_err(|source| DocsError::Decode { service, source })
    }
}

impl DocumentClient for GoogleDocsClient {
    fn get_document(&self, document_id: &str) -> Result<Document, DocsError> {
        let service = "documents.get";
        let response = self.send(service, self.http.get(self.document_url(document_id)))?;
        Self::decode(service, response)
    }

    fn batch_update(&self, document_id: &str, batch: &BatchUpdateRequest) -> Result<(), DocsError> {
        let service = "documents.batchUpdate";
        debug!(document_id, requests = batch.requests.len(), "Sending batch update");
        self.send(
            service,
            self.http.post(self.batch_update_url(document_id)).json(batch),
        )?;
        Ok(())
    }
}
