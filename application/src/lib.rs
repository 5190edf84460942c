//! Application layer for dictwrap
//!
//! This crate contains the dictionary wrapper use case, the failed read log
//! port, and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::WrapperConfig;
pub use ports::failure_log::{FailureLog, FailureLogError, MemoryFailureLog};
pub use use_cases::dict_wrapper::DictWrapper;
