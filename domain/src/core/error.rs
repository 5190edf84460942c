//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed log line: {0}")]
    MalformedLogLine(String),

    #[error("Invalid miss policy: {0}")]
    InvalidMissPolicy(String),
}

impl DomainError {
    /// Check if this error came from reading a log line back
    pub fn is_malformed_line(&self) -> bool {
        matches!(self, DomainError::MalformedLogLine(_))
    }
}
