use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or decoding the configuration document.
///
/// Per-field problems never surface here: a missing or type-mismatched
/// field resolves to its factory default during decoding. Only a document
/// that is not a JSON object at all fails the decode.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The top-level document decoded, but is not a JSON object.
    #[error("configuration document is not a JSON object (found {found})")]
    NotAnObject {
        /// JSON type of the value that was found instead.
        found: &'static str,
    },

    /// The document is not well-formed JSON.
    #[error("failed to parse configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O operation error while reading the configuration file.
    #[error("I/O error on '{path}': {details}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// I/O error details.
        details: String,
    },
}
