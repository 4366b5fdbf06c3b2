// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the chronicle binaries
//!
//! Every path, scope and endpoint the tools touch comes from here rather than
//! from module constants, so tests can point them anywhere.

use std::path::PathBuf;

use chronicle_docs::DOCUMENTS_SCOPE;
use chronicle_markdown::RenderStyle;
use clap::{Args, Parser};

/// Where the rendered changelog lives, relative to the repository
pub const DEFAULT_OUTPUT: &str = "docs/commit-history.md";

/// Environment variable holding the service-account key
pub const CREDENTIALS_VAR: &str = "GOOGLE_SERVICE_ACCOUNT_JSON";

/// Environment variable holding the target document id
pub const DOCUMENT_ID_VAR: &str = "GOOGLE_DOC_ID";

/// Logging flags shared by both binaries
#[derive(Args, Debug, Clone, Default)]
pub struct Verbosity {
    /// Enable verbose logging (debug level)
    ///
    /// Logs go to stderr so stdout stays clean for pipelines.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Verbosity {
    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Render the repository's commit history as a Markdown changelog
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "chronicle-render")]
#[command(version, about, long_about = None)]
pub struct RenderConfig {
    /// Repository to read history from
    ///
    /// Defaults to the current working directory.
    #[arg(short, long, env = "CHRONICLE_REPO")]
    pub repo: Option<PathBuf>,

    /// Markdown file to write
    ///
    /// Relative paths are resolved against the repository.
    /// Defaults to docs/commit-history.md.
    #[arg(short, long, env = "CHRONICLE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Layout of the changelog: "list" (plain-language bullets) or "table"
    #[arg(short, long, env = "CHRONICLE_STYLE", default_value_t = RenderStyle::List)]
    pub style: RenderStyle,

    /// Logging flags
    #[command(flatten)]
    pub verbosity: Verbosity,
}

impl RenderConfig {
    /// Get the repository path, using the current directory as default
    #[must_use]
    pub fn repo_path(&self) -> PathBuf {
        self.repo.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get the output path, resolving relative paths against the repository
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        if output.is_absolute() {
            output
        } else {
            self.repo_path().join(output)
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the repository path is given but is not an
    /// existing directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref repo) = self.repo {
            if !repo.exists() {
                return Err(ConfigError::RepoNotFound(repo.clone()));
            }
            if !repo.is_dir() {
                return Err(ConfigError::RepoNotDirectory(repo.clone()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        self.verbosity.log_level()
    }
}

/// Replace the body of a Google Doc with the rendered changelog
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "chronicle-publish")]
#[command(version, about, long_about = None)]
pub struct PublishConfig {
    /// Markdown file to publish
    ///
    /// Defaults to docs/commit-history.md. Run chronicle-render first.
    #[arg(short, long, env = "CHRONICLE_SOURCE")]
    pub source: Option<PathBuf>,

    /// Service-account key JSON, raw or base64-encoded
    #[arg(long, env = CREDENTIALS_VAR, hide_env_values = true)]
    pub credentials: Option<String>,

    /// Id of the Google Doc to overwrite
    #[arg(long, env = DOCUMENT_ID_VAR)]
    pub doc_id: Option<String>,

    /// OAuth scope to request (repeatable)
    ///
    /// Defaults to the Google Docs read/write scope.
    #[arg(long = "scope")]
    pub scopes: Vec<String>,

    /// Google Docs API root
    #[arg(long, env = "GOOGLE_DOCS_API_BASE", hide = true)]
    pub api_base: Option<String>,

    /// Logging flags
    #[command(flatten)]
    pub verbosity: Verbosity,
}

impl PublishConfig {
    /// Get the source path, using the default changelog location
    #[must_use]
    pub fn source_path(&self) -> PathBuf {
        self.source
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// The raw credential value
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVariable` if it is unset or empty.
    pub fn credentials_value(&self) -> Result<&str, ConfigError> {
        required(self.credentials.as_deref(), CREDENTIALS_VAR)
    }

    /// The target document id
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVariable` if it is unset or empty.
    pub fn document_id(&self) -> Result<&str, ConfigError> {
        required(self.doc_id.as_deref(), DOCUMENT_ID_VAR)
    }

    /// Scopes to request, falling back to the Docs read/write scope
    #[must_use]
    pub fn scopes(&self) -> Vec<&str> {
        if self.scopes.is_empty() {
            vec![DOCUMENTS_SCOPE]
        } else {
            self.scopes.iter().map(String::as_str).collect()
        }
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        self.verbosity.log_level()
    }
}

fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, ConfigError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVariable(name)),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository path not found
    #[error("Repository path not found: {0}")]
    RepoNotFound(PathBuf),

    /// Repository path is not a directory
    #[error("Repository path is not a directory: {0}")]
    RepoNotDirectory(PathBuf),

    /// Required environment variable unset or empty
    #[error("{0} environment variable is missing.")]
    MissingVariable(&'static str),
}
