//! Domain layer for dictwrap
//!
//! This crate contains the core value objects of the dictionary wrapper.
//! It has no dependencies on file I/O or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Failed Read
//!
//! A lookup that found nothing usable. Each one becomes a [`FailedRead`]
//! entry: the requested key, the [`CallSite`] that asked for it, and a
//! weekday/minute [`ReadStamp`]. Entries are rendered as single log lines:
//!
//! ```text
//! -->> missing <<-  LINE:42 main.rs Tue 09:15
//! ```
//!
//! ## Miss Policy
//!
//! - **EmptyIsMissing** (default): absent keys and stored empty strings both count as misses
//! - **AbsentOnly**: only absent keys count as misses

pub mod config;
pub mod core;
pub mod lookup;

// Re-export commonly used types
pub use config::{
    miss_policy::MissPolicy,
    validation::{ConfigIssue, ConfigIssueCode},
};
pub use core::error::DomainError;
pub use lookup::{
    call_site::CallSite,
    failed_read::{FailedRead, ReadStamp},
    value::FieldValue,
};

/// Default location of the failed read log, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "failed_reads.log";

/// Default number of entries retained in the failed read log.
pub const DEFAULT_MAX_LOG_LINES: usize = 200;
