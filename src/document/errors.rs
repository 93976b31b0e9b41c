//! Document codec errors

use thiserror::Error;

/// Result type for document parse/serialize operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors raised by the document codec
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// The input is not a well-formed single-root document
    #[error("parse error: {0}")]
    Parse(String),

    /// The tree could not be rendered back to markup
    #[error("serialize error: {0}")]
    Serialize(String),
}
