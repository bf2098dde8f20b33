use std::path::PathBuf;

use thiserror::Error;

/// Error type for settings persistence operations.
///
/// Failures surface synchronously to the caller; nothing is retried or
/// repaired, and the store itself never logs.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file does not exist yet.
    #[error("settings file not found: {path}")]
    NotFound { path: PathBuf },

    /// A file system failure other than "not found".
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents do not parse as a JSON object.
    #[error("malformed settings document at {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be rendered to JSON.
    #[error("failed to serialize settings document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A typed accessor found a present value of the wrong shape.
    #[error("setting '{key}' is not {expected} (found {found})")]
    UnexpectedType {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}
