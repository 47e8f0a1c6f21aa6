//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::args::CliArgs;

pub(super) const APP_NAME: &str = "carecards";
pub(super) const APP_QUALIFIER: &str = "org";
pub(super) const APP_ORGANIZATION: &str = "carecards";

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

/// Application configuration, loaded from TOML and overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Splash screen configuration.
    #[serde(default)]
    pub splash: SplashConfig,

    /// Hospital catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Splash screen configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplashConfig {
    /// Seconds the splash stays up before the login form appears.
    #[serde(default = "default_splash_secs")]
    pub delay_secs: u64,
}

impl SplashConfig {
    /// Returns splash delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            delay_secs: default_splash_secs(),
        }
    }
}

/// Hospital catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. The bundled list is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Simulated latency for the bundled catalog, in milliseconds.
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
}

impl CatalogConfig {
    /// Returns simulated latency.
    #[must_use]
    pub const fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            load_delay_ms: default_load_delay_ms(),
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable `TachyonFX` animations.
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
            accent_color: default_accent_color(),
        }
    }
}

fn default_splash_secs() -> u64 {
    5
}

fn default_load_delay_ms() -> u64 {
    800
}

fn default_accent_color() -> String {
    "LightBlue".to_string()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    ///
    /// `--config` only picks the file to load and is not merged.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(catalog) = args.catalog {
            self.catalog.path = Some(catalog);
        }
        if let Some(splash_secs) = args.splash_secs {
            self.splash.delay_secs = splash_secs;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
        if let Some(accent_color) = args.accent_color {
            self.ui.accent_color = accent_color;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("carecards.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            splash: SplashConfig::default(),
            catalog: CatalogConfig::default(),
            ui: UiConfig::default(),
        }
    }
}
