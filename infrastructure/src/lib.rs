//! Infrastructure layer for dictwrap
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod wrapper;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileLogConfig, FileOutputConfig};
pub use logging::TextFailureLog;
pub use wrapper::open_wrapper;
