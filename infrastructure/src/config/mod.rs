//! Configuration file loading for dictwrap
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./dictwrap.toml` or `./.dictwrap.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/dictwrap/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileLogConfig, FileOutputConfig};
pub use loader::ConfigLoader;
