// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Document publishing run
//!
//! All local checks (credentials, target id, source file) happen before the
//! client is constructed, so a misconfigured run never touches the network.

use anyhow::Context;
use chronicle_docs::{
    Credentials, DocsError, DocumentClient, ReplaceOutcome, load_source_text,
    replace_document_body,
};
use tracing::info;

use crate::config::{CREDENTIALS_VAR, PublishConfig};

/// Summary of a completed publish run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    /// Document that was overwritten
    pub document_id: String,
    /// What the body replace did
    pub outcome: ReplaceOutcome,
}

/// Publish the configured Markdown file, building the client with `connect`
///
/// # Errors
///
/// Fails on missing or invalid configuration, a missing source file, or any
/// remote API error. The three classes are distinguished only by message.
pub fn run<C, F>(config: &PublishConfig, connect: F) -> anyhow::Result<PublishReport>
where
    C: DocumentClient,
    F: FnOnce(Credentials) -> Result<C, DocsError>,
{
    let raw = config.credentials_value()?;
    let credentials = Credentials::from_value(raw, &config.scopes())
        .with_context(|| format!("{CREDENTIALS_VAR} is not a valid service-account key"))?;
    let document_id = config.document_id()?;

    let source = config.source_path();
    let text = load_source_text(&source)?;
    info!(path = %source.display(), bytes = text.len(), "Loaded changelog");

    let client = connect(credentials).context("Failed to set up Google Docs client")?;
    let outcome = replace_document_body(&client, document_id, &text)?;

    Ok(PublishReport {
        document_id: document_id.to_string(),
        outcome,
    })
}
