//! Application-level configuration.
//!
//! - [`WrapperConfig`] — log location, retention and miss policy

pub mod wrapper_config;

pub use wrapper_config::WrapperConfig;
