//! Error types for Monomap

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Monomap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Monomap operations
///
/// The reporter does not distinguish between variants: every failure is
/// surfaced as a single line carrying the `Display` message.
#[derive(Error, Debug)]
pub enum Error {
    /// The plan file could not be read
    #[error("failed to read {}: {source}", path.display())]
    ReadPlan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON syntax error or a value of the wrong type
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Plan structure error found while classifying entries
    #[error("Plan error: {0}")]
    Plan(String),

    /// IO error while writing the report
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
