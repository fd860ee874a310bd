//! Error types for the richtree library.

use std::io;
use thiserror::Error;

/// Result type alias for richtree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the parse and serialize boundaries.
///
/// The render pipeline itself never returns errors: missing references,
/// unresolved assets, and unrecognized node tags all degrade to placeholders
/// or omission inside the output tree.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading a document file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a well-formed document root.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error serializing rendered output.
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDocument("root is not an object".to_string());
        assert_eq!(err.to_string(), "Invalid document: root is not an object");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
