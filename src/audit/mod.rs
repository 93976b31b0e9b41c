//! Audit trail for document operations
//!
//! This module provides:
//! - [`AuditRecord`] / [`AuditLevel`]: transient one-line records
//! - [`AuditSink`]: destination trait, with [`ConsoleSink`] (stderr),
//!   [`FileSink`] (append-only log file) and [`MemorySink`] (tests)
//! - [`audited`]: the wrapper emitting invoked/succeeded/failed records
//!   around one operation
//!
//! # Principles
//!
//! 1. The wrapper never recovers; results pass through unchanged
//! 2. Audit failure never fails the audited operation
//! 3. One fresh scoped sink per call, released on every exit path

mod record;
mod sink;
mod wrapper;

pub use record::{AuditLevel, AuditRecord};
pub use sink::{AuditSink, ConsoleSink, FileSink, MemorySink};
pub use wrapper::{audited, audited_with_sink, Destination};
