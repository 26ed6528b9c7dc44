//! Error types for words-core.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StorageError.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors raised by a key-value storage medium.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors that reject an import. Nothing is written when one is returned.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read import file: {0}")]
    Io(#[from] std::io::Error),

    #[error("import is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("import does not match the progress schema: {0}")]
    InvalidSchema(#[source] serde_json::Error),

    #[error("failed to store import: {0}")]
    Storage(#[from] StorageError),
}

/// Errors loading static dictionary content.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid dictionary file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing dictionary metadata: {0}")]
    MissingMeta(PathBuf),
}
