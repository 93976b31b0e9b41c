//! Audit record and severity levels
//!
//! Records are transient: created at a logged point, formatted to one
//! line, handed to a sink, and discarded. No history is retained.

use std::fmt;

use chrono::{DateTime, Local};

/// Audit severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditLevel {
    /// Normal operation milestones
    Info,
    /// Watched operation failures
    Error,
}

impl AuditLevel {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditLevel::Info => "INFO",
            AuditLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for AuditLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single audit record.
#[derive(Debug, Clone)]
pub struct AuditRecord {
    /// When the logged point was reached.
    pub timestamp: DateTime<Local>,

    /// Name of the audited operation.
    pub operation: String,

    /// Severity of this record.
    pub level: AuditLevel,

    /// Human-readable message.
    pub message: String,
}

impl AuditRecord {
    /// Create an informational record, timestamped now.
    pub fn info(operation: &str, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            operation: operation.to_string(),
            level: AuditLevel::Info,
            message: message.into(),
        }
    }

    /// Create an error record, timestamped now.
    pub fn error(operation: &str, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            operation: operation.to_string(),
            level: AuditLevel::Error,
            message: message.into(),
        }
    }

    /// Render the record as one log line:
    /// `<timestamp> - <operation> - <LEVEL> - <message>`
    pub fn format_line(&self) -> String {
        format!(
            "{} - {} - {} - {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.operation,
            self.level,
            self.message
        )
    }
}
