//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
///
/// Widgets never produce errors at runtime; these cover loading and
/// validating configuration before the UI starts.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Spring parameters that cannot produce a stable filter
    #[error("Invalid spring config: {0}")]
    InvalidSpring(String),

    /// Site content failed validation
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;
