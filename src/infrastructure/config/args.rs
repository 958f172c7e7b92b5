//! Command-line interface.

use super::app_config::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Global options shared by every subcommand; each also reads a
/// `GTAVATAR_*` environment variable.
#[derive(Debug, Parser)]
#[command(
    name = "gtavatar",
    version,
    about = "Look up GTA Online player avatars for the Legacy and Enhanced editions",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true, env = "GTAVATAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true, env = "GTAVATAR_LOG_PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true, env = "GTAVATAR_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Directory service base URL.
    #[arg(long, value_name = "URL", global = true, env = "GTAVATAR_DIRECTORY_URL")]
    pub directory_url: Option<String>,

    /// Search history store path.
    #[arg(long, value_name = "PATH", global = true, env = "GTAVATAR_HISTORY_PATH")]
    pub history_path: Option<PathBuf>,

    /// Action to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the lookup endpoint over HTTP.
    Serve {
        /// Listen address, overrides the configured one.
        #[arg(long, value_name = "ADDR", env = "GTAVATAR_BIND")]
        bind: Option<String>,
    },
    /// Look a player up by username or RID.
    Lookup {
        /// Username or numeric RID.
        player: String,

        /// Print the result record as JSON.
        #[arg(long)]
        json: bool,

        /// Do not record this search in the history.
        #[arg(long)]
        no_history: bool,
    },
    /// Show recent searches.
    History {
        /// Forget all recent searches.
        #[arg(long)]
        clear: bool,

        /// Print the history as JSON.
        #[arg(long)]
        json: bool,
    },
}
