//! CLI-specific error types

use thiserror::Error;

use crate::document::DocumentError;
use crate::handler::HandlerError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// A handler operation failed
    #[error("{0}")]
    Handler(#[from] HandlerError),

    /// A document could not be rendered while seeding the demo
    #[error("{0}")]
    Document(#[from] DocumentError),

    /// Filesystem error outside the handler's scope
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
