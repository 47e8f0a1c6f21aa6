//! Infrastructure layer with configuration and catalog adapters.

/// Hospital catalog adapters.
pub mod catalog;
/// Application configuration.
pub mod config;

pub use catalog::{BundledCatalog, JsonCatalog, source_from_config};
pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
