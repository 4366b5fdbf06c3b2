// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber at `level`
///
/// `RUST_LOG` directives are honored on top of the given level.
pub fn init_logging(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
