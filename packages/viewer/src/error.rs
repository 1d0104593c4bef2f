//! Error types for the viewer application.

use thiserror::Error;

/// Main error type for the viewer.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// TEI parsing failed.
    #[error("TEI parsing failed: {0}")]
    Tei(#[from] synopsis_tei::TeiError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// No stored file with the given id.
    #[error("no stored file with id {0}")]
    FileNotFound(String),
}

/// Result type alias for viewer operations.
pub type Result<T> = std::result::Result<T, ViewerError>;
