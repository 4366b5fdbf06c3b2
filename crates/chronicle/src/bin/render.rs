// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! chronicle-render: write the repository's commit history as Markdown
//!
//! Reads `git log` and overwrites docs/commit-history.md (or `--output`).
//! A failing git command's exit code is passed through.

use std::process::ExitCode;

use chrono::Utc;
use chronicle::config::RenderConfig;
use chronicle::logging::init_logging;
use chronicle::render;
use chronicle_git::GitCli;
use clap::Parser;
use tracing::info;

fn main() -> ExitCode {
    let config = RenderConfig::parse();
    init_logging(config.log_level());

    if let Err(e) = config.validate() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let source = GitCli::new(config.repo_path());
    match render::run(&config, &source, Utc::now()) {
        Ok(report) => {
            info!(
                path = %report.path.display(),
                commits = report.commits,
                "Commit history rendered"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
