//! Presentation layer for dictwrap
//!
//! This crate contains the CLI definition and the console report for the
//! failed read log.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::glog::{GlogOptions, glog, glog_report};
pub use output::report::FailedReadReport;
