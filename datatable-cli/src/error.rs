//! CLI error type.

use std::path::PathBuf;

use datatable_lib::error::TableError;
use thiserror::Error;

/// Errors surfaced by the command-line host.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{} has no record array{}", .path.display(), under_key(.key))]
    NoRecords { path: PathBuf, key: Option<String> },
    #[error("table error: {0}")]
    Table(#[from] TableError),
    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

fn under_key(key: &Option<String>) -> String {
    key.as_ref()
        .map(|k| format!(" under '{}'", k))
        .unwrap_or_default()
}
