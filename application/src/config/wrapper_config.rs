//! Wrapper configuration — where failed reads go and which reads fail.

use dictwrap_domain::{DEFAULT_LOG_FILE, DEFAULT_MAX_LOG_LINES, MissPolicy};
use std::path::{Path, PathBuf};

/// Settings for a [`DictWrapper`](crate::use_cases::dict_wrapper::DictWrapper)
/// and the log it writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperConfig {
    /// Path of the failed read log.
    pub log_path: PathBuf,
    /// Number of most recent entries kept after each append.
    pub max_lines: usize,
    /// Which lookups are recorded as failed reads.
    pub policy: MissPolicy,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            max_lines: DEFAULT_MAX_LOG_LINES,
            policy: MissPolicy::default(),
        }
    }
}

impl WrapperConfig {
    // ==================== Builder Methods ====================

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    /// Zero is raised to one.
    pub fn with_max_lines(mut self, max: usize) -> Self {
        self.max_lines = max.max(1);
        self
    }

    pub fn with_policy(mut self, policy: MissPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}
