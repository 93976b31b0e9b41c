//! Error taxonomy for document handling
//!
//! These are the only error kinds that cross the handler boundary: every
//! underlying I/O or codec failure is reclassified into one of them
//! before it leaves [`DocumentHandler`](super::DocumentHandler).

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for handler operations
pub type HandlerResult<T> = Result<T, HandlerError>;

/// Failure kinds raised by the document handler
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HandlerError {
    /// The target resource does not exist at the time of a check
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The resource exists but an operation against it could not
    /// complete: malformed content, missing permission, or any other
    /// I/O failure
    #[error("file corrupted: {}{}", .path.display(), reason_suffix(.reason))]
    Corrupted {
        path: PathBuf,
        reason: Option<String>,
    },
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(reason) => format!(" ({reason})"),
        None => String::new(),
    }
}

impl HandlerError {
    /// The kind tag, used by the audit wrapper's watch filter.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HandlerError::NotFound(_) => ErrorKind::NotFound,
            HandlerError::Corrupted { .. } => ErrorKind::Corrupted,
        }
    }

    /// The offending path.
    pub fn path(&self) -> &Path {
        match self {
            HandlerError::NotFound(path) => path,
            HandlerError::Corrupted { path, .. } => path,
        }
    }
}

/// Discriminant of [`HandlerError`], without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Resource absent (precondition failure)
    NotFound,
    /// Operation failure against an existing resource
    Corrupted,
}

impl ErrorKind {
    /// Returns the kind string as it appears in audit records.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Corrupted => "CORRUPTED",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
