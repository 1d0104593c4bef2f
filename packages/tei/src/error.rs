//! Error types for the TEI engine.
//!
//! Parsing has exactly one fatal failure mode: the input is not well-formed
//! XML. Everything else (missing attributes, absent metadata elements,
//! identifiers without a verse number) degrades to documented defaults and is
//! not an error.

use thiserror::Error;

/// Main error type for the TEI engine.
#[derive(Debug, Error)]
pub enum TeiError {
    /// Input is not well-formed XML. The parse is abandoned wholesale with
    /// the underlying engine's diagnostic; no partial document is produced.
    #[error("malformed markup: {0}")]
    MalformedMarkup(#[from] roxmltree::Error),
}

/// Result type alias for TEI operations.
pub type Result<T> = std::result::Result<T, TeiError>;
