//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; string fields that map to domain enums
//! are parsed later so a bad value degrades to a warning instead of a
//! load failure.

mod log;
mod output;

pub use log::FileLogConfig;
pub use output::FileOutputConfig;

use dictwrap_application::WrapperConfig;
use dictwrap_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Failed read log settings
    pub log: FileLogConfig,
    /// Reporter output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.to_wrapper_config().1
    }

    /// Convert into the application's [`WrapperConfig`], falling back to
    /// defaults for any invalid field.
    pub fn to_wrapper_config(&self) -> (WrapperConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let (log_path, path_issues) = self.log.parse_path();
        issues.extend(path_issues);
        let (max_lines, max_issues) = self.log.parse_max_lines();
        issues.extend(max_issues);
        let (policy, policy_issues) = self.log.parse_miss_policy();
        issues.extend(policy_issues);

        let config = WrapperConfig::default()
            .with_log_path(log_path)
            .with_max_lines(max_lines)
            .with_policy(policy);
        (config, issues)
    }
}
