//! Error types for the publishguard library.

use thiserror::Error;

/// Result type alias for publishguard operations
pub type Result<T> = std::result::Result<T, PublishGuardError>;

/// Errors that can occur while extracting or analyzing an article
#[derive(Error, Debug)]
pub enum PublishGuardError {
    /// Caller supplied input that is rejected before any parsing happens
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTML bytes could not be turned into a document
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Configuration document could not be read or deserialized
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The document source failed to deliver HTML
    #[error("Document source error: {0}")]
    Source(String),
}

impl From<serde_json::Error> for PublishGuardError {
    fn from(err: serde_json::Error) -> Self {
        PublishGuardError::Config(err.to_string())
    }
}
