//! Configuration validation issues.
//!
//! Loading configuration never fails on a bad value: the offending field
//! falls back to its default and an issue is reported as a warning instead.

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field did not match any known variant.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// `log.max_lines` was zero, which would discard every entry.
    ZeroMaxLines,
    /// `log.path` was empty.
    EmptyLogPath,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn new(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
