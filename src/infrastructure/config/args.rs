use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command line flags. Each one overrides the config file.
#[derive(Debug, Parser)]
#[command(
    name = "carecards",
    version,
    about = "A terminal client for browsing and reacting to hospital cards",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// JSON hospital catalog to load instead of the bundled one.
    #[arg(long, value_name = "PATH", env = "CARECARDS_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Seconds to show the splash screen.
    #[arg(long, value_name = "SECS")]
    pub splash_secs: Option<u64>,

    /// Enable `TachyonFX` animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
