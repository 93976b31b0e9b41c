//! Document handler
//!
//! Binds one filesystem path and exposes `read`/`write`/`append`, each
//! wrapped by the audit layer. The path must exist when the handler is
//! opened; the check is made once, so the file can still disappear
//! before a later operation (that surfaces as `Corrupted`, not
//! `NotFound`).
//!
//! Every read/write/append works on the whole file: there is no cache
//! of parsed documents and no incremental update.

mod errors;

pub use errors::{ErrorKind, HandlerError, HandlerResult};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::audit::{audited, Destination};
use crate::document::{parse, serialize, Element};

/// Default audit log file for `write`/`append`, relative to the
/// working directory.
pub const DEFAULT_AUDIT_LOG: &str = "file_operations.log";

/// Handle to one on-disk document.
#[derive(Debug, Clone)]
pub struct DocumentHandler {
    path: PathBuf,
    audit_log: PathBuf,
}

impl DocumentHandler {
    /// Open a handler for an existing document.
    ///
    /// Fails with [`HandlerError::NotFound`] if the path does not exist
    /// right now.
    pub fn open(path: impl Into<PathBuf>) -> HandlerResult<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(HandlerError::NotFound(path));
        }
        Ok(Self {
            path,
            audit_log: PathBuf::from(DEFAULT_AUDIT_LOG),
        })
    }

    /// Redirect the audit log for `write`/`append` away from
    /// [`DEFAULT_AUDIT_LOG`].
    pub fn with_audit_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.audit_log = path.into();
        self
    }

    /// The document path this handler is bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the full document and return its root element.
    ///
    /// Audited to the console; watched kind `Corrupted`.
    pub fn read(&self) -> HandlerResult<Element> {
        audited("read", &Destination::Console, ErrorKind::Corrupted, || {
            self.read_document()
        })
    }

    /// Serialize `root` as the entire contents of the path, overwriting
    /// whatever was there.
    ///
    /// Audited to the log file; watched kind `Corrupted`.
    pub fn write(&self, root: &Element) -> HandlerResult<()> {
        audited(
            "write",
            &Destination::File(self.audit_log.clone()),
            ErrorKind::Corrupted,
            || self.write_document(root),
        )
    }

    /// Parse the existing document, add `node` as the last child of its
    /// root, and rewrite the whole file.
    ///
    /// Audited to the log file; watched kind `Corrupted`.
    pub fn append(&self, node: Element) -> HandlerResult<()> {
        audited(
            "append",
            &Destination::File(self.audit_log.clone()),
            ErrorKind::Corrupted,
            || {
                let mut root = self.read_document()?;
                root.children.push(node);
                self.write_document(&root)
            },
        )
    }

    fn read_document(&self) -> HandlerResult<Element> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| self.corrupted_io(e, "no read permission"))?;
        parse(&content).map_err(|e| self.corrupted(e.to_string()))
    }

    fn write_document(&self, root: &Element) -> HandlerResult<()> {
        let content = serialize(root).map_err(|e| self.corrupted(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| self.corrupted_io(e, "no write permission"))
    }

    fn corrupted(&self, reason: impl Into<String>) -> HandlerError {
        HandlerError::Corrupted {
            path: self.path.clone(),
            reason: Some(reason.into()),
        }
    }

    fn corrupted_io(&self, error: io::Error, permission_reason: &str) -> HandlerError {
        let reason = if error.kind() == io::ErrorKind::PermissionDenied {
            permission_reason.to_string()
        } else {
            error.to_string()
        };
        self.corrupted(reason)
    }
}
