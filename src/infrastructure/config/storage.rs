//! Configuration file discovery and bootstrap.

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no configuration directory for this user.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    /// Reading or writing the configuration file failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// The default configuration could not be rendered as TOML.
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from an existing file.
    File(PathBuf),
    /// No file existed; defaults were written to this path.
    Created(PathBuf),
    /// The file exists but does not parse; defaults are in effect and the
    /// file is left as is.
    Invalid {
        /// Offending file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },
    /// No configuration directory could be determined; defaults are in effect.
    Unavailable(String),
}

/// Configuration together with its origin.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Active configuration.
    pub config: AppConfig,
    /// Origin, reported once logging is up.
    pub source: ConfigSource,
}

impl LoadedConfig {
    /// Built-in defaults used when no configuration directory exists.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            config: AppConfig::default(),
            source: ConfigSource::Unavailable(reason.into()),
        }
    }
}

/// Reads and bootstraps the configuration file.
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| Self::with_dir(dirs.config_dir().to_path_buf()))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Creates a manager rooted at `path`.
    #[must_use]
    pub const fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the configuration directory path.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Loads the configuration from `path_override` or the default location.
    ///
    /// A missing file is created with defaults. A malformed file is reported
    /// through [`ConfigSource::Invalid`] and defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        let path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            Path::to_path_buf,
        );

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let config = AppConfig::default();
                write_atomically(&path, &toml::to_string_pretty(&config)?)?;
                return Ok(LoadedConfig {
                    config,
                    source: ConfigSource::Created(path),
                });
            }
            Err(e) => return Err(e.into()),
        };

        Ok(match toml::from_str::<AppConfig>(&content) {
            Ok(config) => LoadedConfig {
                config,
                source: ConfigSource::File(path),
            },
            Err(e) => LoadedConfig {
                config: AppConfig::default(),
                source: ConfigSource::Invalid {
                    path,
                    reason: e.to_string(),
                },
            },
        })
    }
}

/// Replaces `path` with `content` through a sibling temp file.
fn write_atomically(path: &Path, content: &str) -> Result<(), ConfigError> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(content.as_bytes())?;
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_creates_default_if_missing() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_dir(dir.path().join("gtavatar"));

        let loaded = manager.load_config(None).unwrap();
        let config_file = manager.config_dir().join(CONFIG_FILE_NAME);

        assert_eq!(loaded.config.directory.timeout_secs, 10);
        assert_eq!(loaded.source, ConfigSource::Created(config_file.clone()));
        assert!(config_file.exists());
    }

    #[test]
    fn test_malformed_file_is_reported_and_kept() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_file, "invalid_toml = [").unwrap();

        let loaded = manager.load_config(None).unwrap();
        assert!(loaded.config.history.enabled);
        match loaded.source {
            ConfigSource::Invalid { path, reason } => {
                assert_eq!(path, config_file);
                assert!(!reason.is_empty());
            }
            other => panic!("expected invalid source, got {other:?}"),
        }

        let content = fs::read_to_string(&config_file).unwrap();
        assert_eq!(content, "invalid_toml = [");
    }

    #[test]
    fn test_wrongly_typed_value_is_reported() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_dir(dir.path().to_path_buf());
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[probe]\ntimeout_secs = \"soon\"\n",
        )
        .unwrap();

        let loaded = manager.load_config(None).unwrap();

        assert!(matches!(loaded.source, ConfigSource::Invalid { .. }));
        assert_eq!(loaded.config.probe.timeout_secs, 5);
    }

    #[test]
    fn test_load_config_with_override_path() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_dir(dir.path().join("unused"));
        let custom = dir.path().join("custom.toml");

        fs::write(&custom, "[server]\nbind = \"0.0.0.0:8080\"\n").unwrap();

        let loaded = manager.load_config(Some(&custom)).unwrap();
        assert_eq!(loaded.config.server.bind, "0.0.0.0:8080");
        assert_eq!(loaded.source, ConfigSource::File(custom));
        assert!(!manager.config_dir().exists());
    }

    #[test]
    fn test_unavailable_uses_defaults() {
        let loaded = LoadedConfig::unavailable("no home directory");

        assert_eq!(loaded.config.server.bind, "127.0.0.1:3000");
        assert_eq!(
            loaded.source,
            ConfigSource::Unavailable("no home directory".to_string())
        );
    }
}
