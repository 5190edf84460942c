//! Miss policy value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decides which lookups are recorded as failed reads.
///
/// The historical behavior treats a stored empty string exactly like an
/// absent key. That stays the default; `AbsentOnly` is the stricter reading
/// where an explicitly stored empty string is a legitimate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissPolicy {
    /// Absent keys and blank values are both misses (default)
    #[default]
    EmptyIsMissing,
    /// Only absent keys are misses
    AbsentOnly,
}

impl MissPolicy {
    /// All accepted configuration spellings
    pub const VALID_VALUES: [&'static str; 2] = ["empty_is_missing", "absent_only"];

    pub fn as_str(&self) -> &'static str {
        match self {
            MissPolicy::EmptyIsMissing => "empty_is_missing",
            MissPolicy::AbsentOnly => "absent_only",
        }
    }

    /// Whether a stored value is a miss under this policy.
    pub fn treats_blank_as_missing(&self) -> bool {
        matches!(self, MissPolicy::EmptyIsMissing)
    }
}

impl fmt::Display for MissPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "empty_is_missing" | "parity" => Ok(MissPolicy::EmptyIsMissing),
            "absent_only" | "strict" => Ok(MissPolicy::AbsentOnly),
            _ => Err(DomainError::InvalidMissPolicy(s.to_string())),
        }
    }
}
