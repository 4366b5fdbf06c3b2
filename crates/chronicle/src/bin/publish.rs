// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! chronicle-publish: overwrite a Google Doc with the rendered changelog
//!
//! The service account needs edit access to the target document (share the
//! document with the service account's email address).

use std::process::ExitCode;

use chronicle::config::PublishConfig;
use chronicle::logging::init_logging;
use chronicle::publish;
use chronicle_docs::GoogleDocsClient;
use clap::Parser;

fn main() -> ExitCode {
    let config = PublishConfig::parse();
    init_logging(config.log_level());

    let result = publish::run(&config, |credentials| {
        let client = GoogleDocsClient::new(credentials)?;
        Ok(match config.api_base.as_deref() {
            Some(base) => client.with_api_base(base),
            None => client,
        })
    });

    match result {
        Ok(report) => {
            println!("Updated Google Doc {} with commit history.", report.document_id);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to push commit history to Google Docs: {e:#}");
            ExitCode::FAILURE
        }
    }
}
