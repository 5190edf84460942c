//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for glog
#[derive(Parser, Debug)]
#[command(name = "glog")]
#[command(author, version, about = "Show the failed reads recorded by DictWrapper")]
#[command(long_about = r#"
Prints every entry of the failed read log, oldest first, behind a banner
with the entry count. Prints nothing when the log is missing or empty.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./dictwrap.toml     Project-level config
3. ~/.config/dictwrap/config.toml   Global config

Example:
  glog
  glog --no-pause --log-file target/failed_reads.log
"#)]
pub struct Cli {
    /// Skip the usage reminder after the entries
    #[arg(long)]
    pub no_pause: bool,

    /// Read this log file instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip project and global configuration files (`--config` still applies)
    #[arg(long)]
    pub no_config: bool,
}
