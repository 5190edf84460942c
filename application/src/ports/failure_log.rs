//! Port for the failed read log.
//!
//! Defines the [`FailureLog`] trait: a bounded, line-oriented record of
//! failed reads. Adapters keep at most a fixed number of lines, dropping the
//! oldest first.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! diagnostic messages for whoever runs the process, while this port keeps an
//! audit trail of lookups that an operator reviews with `glog`.

use dictwrap_domain::{DEFAULT_MAX_LOG_LINES, FailedRead};
use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by a [`FailureLog`] adapter.
#[derive(Error, Debug)]
pub enum FailureLogError {
    #[error("Permission denied: cannot write to '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FailureLogError {
    /// Classify an I/O error raised while touching `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::PermissionDenied {
            FailureLogError::PermissionDenied { path }
        } else {
            FailureLogError::Io { path, source }
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, FailureLogError::PermissionDenied { .. })
    }

    pub fn path(&self) -> &Path {
        match self {
            FailureLogError::PermissionDenied { path } | FailureLogError::Io { path, .. } => path,
        }
    }
}

/// Port for recording failed reads.
///
/// All methods take `&self`; adapters acquire and release their backing
/// resource inside each call.
pub trait FailureLog {
    /// Where the log lives, for operator-facing messages.
    fn location(&self) -> &Path;

    /// Create the log, or clear it if it already exists.
    fn reset(&self) -> Result<(), FailureLogError>;

    /// Append one entry, then drop the oldest lines beyond the retention limit.
    fn append(&self, entry: &FailedRead) -> Result<(), FailureLogError>;

    /// Current lines, oldest first, without trailing newlines.
    ///
    /// `None` when the log does not exist.
    fn read_lines(&self) -> Result<Option<Vec<String>>, FailureLogError>;
}

/// In-memory log for tests and for callers that don't want a file.
#[derive(Debug)]
pub struct MemoryFailureLog {
    lines: RefCell<Option<Vec<String>>>,
    max_lines: usize,
}

impl MemoryFailureLog {
    /// A `max_lines` of zero is raised to one so the newest entry survives.
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: RefCell::new(None),
            max_lines: max_lines.max(1),
        }
    }

    /// Snapshot of the current lines (empty when never reset).
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone().unwrap_or_default()
    }
}

impl Default for MemoryFailureLog {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LOG_LINES)
    }
}

impl FailureLog for MemoryFailureLog {
    fn location(&self) -> &Path {
        Path::new(":memory:")
    }

    fn reset(&self) -> Result<(), FailureLogError> {
        *self.lines.borrow_mut() = Some(Vec::new());
        Ok(())
    }

    fn append(&self, entry: &FailedRead) -> Result<(), FailureLogError> {
        let mut lines = self.lines.borrow_mut();
        let lines = lines.get_or_insert_with(Vec::new);
        lines.push(entry.to_line());
        if lines.len() > self.max_lines {
            let excess = lines.len() - self.max_lines;
            lines.drain(..excess);
        }
        Ok(())
    }

    fn read_lines(&self) -> Result<Option<Vec<String>>, FailureLogError> {
        Ok(self.lines.borrow().clone())
    }
}
