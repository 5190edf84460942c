//! CLI entrypoint for glog
//!
//! Loads configuration, opens the failed read log and prints it.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use dictwrap_infrastructure::{ConfigLoader, TextFailureLog};
use dictwrap_presentation::{Cli, GlogOptions, glog};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let file_config = match (cli.no_config, cli.config.as_deref()) {
        (true, None) => ConfigLoader::load_defaults(),
        (true, Some(path)) => ConfigLoader::load_file(path)
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?,
        (false, path) => ConfigLoader::load(path)
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?,
    };

    let (mut config, issues) = file_config.to_wrapper_config();
    for issue in &issues {
        warn!("{}", issue.message);
    }

    if let Some(path) = cli.log_file {
        config = config.with_log_path(path);
    }
    debug!("Reading failed read log {}", config.log_path.display());

    let log = TextFailureLog::from_config(&config);
    let options = GlogOptions::default()
        .with_pause(file_config.output.pause && !cli.no_pause)
        .with_color(file_config.output.color && !cli.no_color);

    glog(&log, options)
        .with_context(|| format!("Failed to read {}", config.log_path.display()))?;
    Ok(())
}
