//! Plain-text file writer for failed reads.
//!
//! Each [`FailedRead`] is appended as a single line and flushed. After every
//! append the whole file is read back and, if it holds more than `max_lines`
//! lines, rewritten with only the most recent ones.

use dictwrap_application::{FailureLog, FailureLogError, WrapperConfig};
use dictwrap_domain::FailedRead;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Failed read log backed by a text file.
///
/// Holds no open handle: every operation opens, writes, flushes and closes
/// the file on its own. Not safe for concurrent writers.
#[derive(Debug, Clone)]
pub struct TextFailureLog {
    path: PathBuf,
    max_lines: usize,
}

impl TextFailureLog {
    /// A `max_lines` of zero is raised to one so the newest entry survives.
    pub fn new(path: impl AsRef<Path>, max_lines: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            max_lines: max_lines.max(1),
        }
    }

    pub fn from_config(config: &WrapperConfig) -> Self {
        Self::new(&config.log_path, config.max_lines)
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    fn io_error(&self, e: io::Error) -> FailureLogError {
        FailureLogError::from_io(&self.path, e)
    }

    /// Keep only the last `max_lines` lines.
    fn truncate(&self) -> Result<(), FailureLogError> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let lines: Vec<&str> = content.lines().collect();
        if lines.len() <= self.max_lines {
            return Ok(());
        }

        let dropped = lines.len() - self.max_lines;
        let mut kept = String::with_capacity(content.len());
        for line in &lines[dropped..] {
            kept.push_str(line);
            kept.push('\n');
        }

        let mut file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        file.write_all(kept.as_bytes()).map_err(|e| self.io_error(e))?;
        file.flush().map_err(|e| self.io_error(e))?;

        info!(
            "Truncated {} to {} lines ({} dropped)",
            self.path.display(),
            self.max_lines,
            dropped
        );
        Ok(())
    }
}

impl FailureLog for TextFailureLog {
    fn location(&self) -> &Path {
        &self.path
    }

    fn reset(&self) -> Result<(), FailureLogError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| FailureLogError::from_io(parent, e))?;
        }

        File::create(&self.path).map_err(|e| self.io_error(e))?;
        debug!("Cleared failed read log {}", self.path.display());
        Ok(())
    }

    fn append(&self, entry: &FailedRead) -> Result<(), FailureLogError> {
        {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .map_err(|e| self.io_error(e))?;
            writeln!(file, "{}", entry.to_line()).map_err(|e| self.io_error(e))?;
            file.flush().map_err(|e| self.io_error(e))?;
        }
        self.truncate()
    }

    fn read_lines(&self) -> Result<Option<Vec<String>>, FailureLogError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content.lines().map(str::to_string).collect())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
