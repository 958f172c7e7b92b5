//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Directory service client.
pub mod directory;
/// Key-value persistence.
pub mod file_store;
/// Image existence probing.
pub mod probe;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{
    AppConfig, CliArgs, Command, ConfigManager, ConfigSource, LoadedConfig, LogLevel,
};
pub use directory::DirectoryClient;
pub use file_store::FileKeyValueStore;
pub use probe::HttpImageProbe;
