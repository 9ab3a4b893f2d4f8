//! CLI argument parsing and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{default_log_path, Config};
use crate::error::ConfigError;
use crate::models::ReentryPolicy;

/// Got It First - schedule diagnostics, classes and reinforcement sessions
#[derive(Parser, Debug, Default)]
#[command(name = "got-it", version, about, long_about = None)]
#[command(after_help = "Keys: ↑/↓ move  Enter select  Esc back  1-4 quick nav  q quit")]
pub struct Args {
    /// Config file (default: <config dir>/got-it-first/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog JSON to use instead of the built-in content
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Start every screen at its root when it is entered
    #[arg(long)]
    pub reset_on_entry: bool,

    /// Disable transition animations
    #[arg(long)]
    pub no_animations: bool,

    /// Do not reload the catalog file when it changes
    #[arg(long)]
    pub no_watch: bool,

    /// Write logs here (default: <cache dir>/got-it-first/got-it.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolved settings: config file values with CLI overrides applied
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub reentry: ReentryPolicy,
    pub animations: bool,
    pub tick_rate: Duration,
    pub catalog_path: Option<PathBuf>,
    pub watch_catalog: bool,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl CliConfig {
    /// Merge a loaded config file with command-line overrides
    pub fn merge(config: Config, args: Args) -> Self {
        let reentry = if args.reset_on_entry {
            ReentryPolicy::Reset
        } else {
            config.reentry
        };

        Self {
            reentry,
            animations: config.animations && !args.no_animations,
            // Zero would spin the event loop
            tick_rate: Duration::from_millis(config.tick_rate_ms.max(10)),
            catalog_path: args.catalog.or(config.catalog),
            watch_catalog: config.watch_catalog && !args.no_watch,
            log_file: args.log_file.or_else(default_log_path),
            verbose: args.verbose,
        }
    }
}

/// Parse CLI arguments, load the config file and return the merged settings
pub fn parse_args() -> Result<CliConfig, ConfigError> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    Ok(CliConfig::merge(config, args))
}
