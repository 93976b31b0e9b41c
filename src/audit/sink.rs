//! Audit sinks
//!
//! A sink is a scoped resource: the wrapper opens a fresh one per
//! audited call and drops it on every exit path. Nothing is held across
//! calls and there is no process-wide logger registry.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::record::AuditRecord;

/// Destination for audit records
pub trait AuditSink {
    /// Write one record to the destination.
    fn emit(&mut self, record: &AuditRecord) -> io::Result<()>;
}

/// Sink writing to the process's standard error stream.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl AuditSink for ConsoleSink {
    fn emit(&mut self, record: &AuditRecord) -> io::Result<()> {
        writeln!(io::stderr(), "{}", record.format_line())
    }
}

/// Sink appending to a plain-text log file, one line per record.
///
/// Each record is flushed immediately so the trail survives the sink
/// being dropped mid-operation.
pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    /// Open (creating if needed) the log file in append mode.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl AuditSink for FileSink {
    fn emit(&mut self, record: &AuditRecord) -> io::Result<()> {
        writeln!(self.writer, "{}", record.format_line())?;
        self.writer.flush()
    }
}

/// In-memory sink for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<AuditRecord>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All records emitted so far.
    pub fn records(&self) -> &[AuditRecord] {
        &self.records
    }

    /// Number of records emitted.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AuditSink for MemorySink {
    fn emit(&mut self, record: &AuditRecord) -> io::Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
