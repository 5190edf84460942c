//! Failed read log configuration from TOML (`[log]` section)

use dictwrap_domain::{
    ConfigIssue, ConfigIssueCode, DEFAULT_LOG_FILE, DEFAULT_MAX_LOG_LINES, MissPolicy,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw log configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Path of the failed read log
    pub path: String,
    /// Number of most recent entries to keep
    pub max_lines: usize,
    /// Which lookups count as failed reads: "empty_is_missing" or "absent_only"
    pub miss_policy: String,
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_LOG_FILE.to_string(),
            max_lines: DEFAULT_MAX_LOG_LINES,
            miss_policy: MissPolicy::default().as_str().to_string(),
        }
    }
}

impl FileLogConfig {
    /// Parse miss_policy string into MissPolicy enum
    ///
    /// Accepts: "empty_is_missing", "parity", "absent_only", "strict"
    pub fn parse_miss_policy(&self) -> (MissPolicy, Vec<ConfigIssue>) {
        match self.miss_policy.parse::<MissPolicy>() {
            Ok(policy) => (policy, vec![]),
            Err(_) => {
                let issue = ConfigIssue::new(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "log.miss_policy".to_string(),
                        value: self.miss_policy.clone(),
                        valid_values: MissPolicy::VALID_VALUES
                            .iter()
                            .map(|v| v.to_string())
                            .collect(),
                    },
                    format!(
                        "log.miss_policy: unknown value '{}', falling back to '{}'",
                        self.miss_policy,
                        MissPolicy::default()
                    ),
                );
                (MissPolicy::default(), vec![issue])
            }
        }
    }

    /// Retention limit, with zero replaced by the default
    pub fn parse_max_lines(&self) -> (usize, Vec<ConfigIssue>) {
        if self.max_lines == 0 {
            let issue = ConfigIssue::new(
                ConfigIssueCode::ZeroMaxLines,
                format!(
                    "log.max_lines: 0 would discard every entry, falling back to {}",
                    DEFAULT_MAX_LOG_LINES
                ),
            );
            (DEFAULT_MAX_LOG_LINES, vec![issue])
        } else {
            (self.max_lines, vec![])
        }
    }

    /// Log path, with an empty string replaced by the default
    pub fn parse_path(&self) -> (PathBuf, Vec<ConfigIssue>) {
        if self.path.trim().is_empty() {
            let issue = ConfigIssue::new(
                ConfigIssueCode::EmptyLogPath,
                format!("log.path: empty, falling back to '{}'", DEFAULT_LOG_FILE),
            );
            (PathBuf::from(DEFAULT_LOG_FILE), vec![issue])
        } else {
            (PathBuf::from(&self.path), vec![])
        }
    }
}
