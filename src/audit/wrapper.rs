//! The audit wrapper
//!
//! Wraps a handler operation with start/success/failure records. The
//! wrapper never recovers: the wrapped result is returned unchanged,
//! error or not. Only errors whose kind matches the configured watch
//! get an ERROR record; any other error propagates without one.
//!
//! Audit failures must never fail the operation itself, so sink I/O
//! errors are swallowed.

use std::io;
use std::path::PathBuf;

use crate::handler::{ErrorKind, HandlerResult};

use super::record::AuditRecord;
use super::sink::{AuditSink, ConsoleSink, FileSink};

/// Where an audited call sends its records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The process's standard error stream; nothing persisted.
    Console,
    /// Append-only plain-text log file.
    File(PathBuf),
}

impl Destination {
    /// Construct a fresh sink for one audited call.
    pub fn open(&self) -> io::Result<Box<dyn AuditSink>> {
        match self {
            Destination::Console => Ok(Box::new(ConsoleSink)),
            Destination::File(path) => Ok(Box::new(FileSink::open(path)?)),
        }
    }
}

/// Run `call` with audit records sent to `destination`.
///
/// The sink lives for exactly this call and is dropped on every exit
/// path. An unopenable destination does not block the operation.
pub fn audited<T>(
    operation: &str,
    destination: &Destination,
    watched: ErrorKind,
    call: impl FnOnce() -> HandlerResult<T>,
) -> HandlerResult<T> {
    match destination.open() {
        Ok(mut sink) => audited_with_sink(operation, sink.as_mut(), watched, call),
        Err(_) => call(),
    }
}

/// [`audited`] against an explicit sink. Used directly by tests.
pub fn audited_with_sink<T>(
    operation: &str,
    sink: &mut dyn AuditSink,
    watched: ErrorKind,
    call: impl FnOnce() -> HandlerResult<T>,
) -> HandlerResult<T> {
    let _ = sink.emit(&AuditRecord::info(operation, format!("{operation} invoked")));

    let result = call();
    match &result {
        Ok(_) => {
            let _ = sink.emit(&AuditRecord::info(
                operation,
                format!("{operation} succeeded"),
            ));
        }
        Err(error) if error.kind() == watched => {
            let _ = sink.emit(&AuditRecord::error(
                operation,
                format!("{}: {}", error.kind(), error),
            ));
        }
        Err(_) => {}
    }

    result
}
