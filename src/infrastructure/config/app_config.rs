//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::entities::DEFAULT_HISTORY_CAPACITY;

pub(crate) const APP_NAME: &str = "gtavatar";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path. Logs go to stderr when unset.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Directory service configuration.
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Image probe configuration.
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Recent search history configuration.
    #[serde(default)]
    pub history: HistoryConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Directory service configuration.
///
/// Path templates hold a whole-segment placeholder: `{id}` or `{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Service base URL.
    #[serde(default = "default_directory_url")]
    pub base_url: String,

    /// Path template for name lookups.
    #[serde(default = "default_by_name_path")]
    pub by_name_path: String,

    /// Path template for identifier lookups.
    #[serde(default = "default_by_id_path")]
    pub by_id_path: String,

    /// Request timeout in seconds.
    #[serde(default = "default_directory_timeout")]
    pub timeout_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_directory_url(),
            by_name_path: default_by_name_path(),
            by_id_path: default_by_id_path(),
            timeout_secs: default_directory_timeout(),
        }
    }
}

/// Image probe configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_probe_timeout")]
    pub timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_probe_timeout(),
        }
    }
}

/// Recent search history configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Record searches made from the command line.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Number of searches kept; values above the default are clamped.
    #[serde(default = "default_history_entries")]
    pub max_entries: usize,

    /// Store file path.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: default_history_entries(),
            path: None,
        }
    }
}

impl ProbeConfig {
    /// Upper bound on one probe, just above the HTTP timeout so the client
    /// reports the timeout itself.
    #[must_use]
    pub const fn deadline(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.saturating_add(1))
    }
}

impl HistoryConfig {
    /// Returns the effective history size.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_entries.min(DEFAULT_HISTORY_CAPACITY)
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_directory_url() -> String {
    "https://sc-cache.com".to_string()
}

fn default_by_name_path() -> String {
    "/n/{name}".to_string()
}

fn default_by_id_path() -> String {
    "/r/{id}".to_string()
}

fn default_directory_timeout() -> u64 {
    10
}

fn default_probe_timeout() -> u64 {
    5
}

fn default_history_entries() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_true() -> bool {
    true
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(directory_url) = &args.directory_url {
            self.directory.base_url.clone_from(directory_url);
        }
        if let Some(history_path) = &args.history_path {
            self.history.path = Some(history_path.clone());
        }
    }

    /// Returns default history store path.
    #[must_use]
    pub fn default_history_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("history.json"))
    }

    /// Returns effective history store path.
    #[must_use]
    pub fn effective_history_path(&self) -> Option<PathBuf> {
        self.history.path.clone().or_else(Self::default_history_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            server: ServerConfig::default(),
            directory: DirectoryConfig::default(),
            probe: ProbeConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            log_level = "debug"

            [directory]
            base_url = "http://localhost:9000"
            timeout_secs = 3

            [history]
            enabled = false
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.directory.base_url, "http://localhost:9000");
        assert_eq!(config.directory.timeout_secs, 3);
        assert_eq!(config.directory.by_name_path, "/n/{name}");
        assert!(!config.history.enabled);
        assert_eq!(config.history.max_entries, DEFAULT_HISTORY_CAPACITY);
        assert_eq!(config.server.bind, "127.0.0.1:3000");
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.directory.base_url, "https://sc-cache.com");
        assert_eq!(config.probe.timeout_secs, 5);
        assert!(config.history.enabled);
    }

    #[test]
    fn test_args_override_file_values() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "gtavatar",
            "--log-level",
            "warn",
            "--directory-url",
            "http://127.0.0.1:1",
            "lookup",
            "Driver",
        ]);

        config.merge_with_args(&args);

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.directory.base_url, "http://127.0.0.1:1");
    }

    #[test]
    fn test_probe_deadline_saturates() {
        assert_eq!(ProbeConfig::default().deadline(), Duration::from_secs(6));

        let config = ProbeConfig {
            timeout_secs: u64::MAX,
        };
        assert_eq!(config.deadline(), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn test_history_size_is_clamped() {
        let config: AppConfig = toml::from_str("[history]\nmax_entries = 500\n").unwrap();
        assert_eq!(config.history.capacity(), DEFAULT_HISTORY_CAPACITY);

        let config: AppConfig = toml::from_str("[history]\nmax_entries = 3\n").unwrap();
        assert_eq!(config.history.capacity(), 3);
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = AppConfig::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&content).unwrap();

        assert_eq!(parsed.directory.by_id_path, config.directory.by_id_path);
    }
}
