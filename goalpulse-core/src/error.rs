//! Error types for goalpulse-core

use thiserror::Error;

/// Main error type for the goalpulse-core library.
///
/// Only boundary operations (loading configuration, decoding snapshots) can
/// fail. Progress computation itself is total: anomalous records degrade to
/// documented defaults instead of surfacing errors.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error at the snapshot boundary
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for goalpulse-core
pub type Result<T> = std::result::Result<T, Error>;
