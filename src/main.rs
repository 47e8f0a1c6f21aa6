use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use carecards::domain::ports::HospitalSourcePort;
use carecards::infrastructure::{
    AppConfig, CliArgs, ConfigError, StorageManager, source_from_config,
};
use carecards::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    StorageManager::new()?.load_config(args.config.as_deref())
}

fn create_app() -> Result<App> {
    let args = CliArgs::parse();

    let loaded = load_config(&args);
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    config.merge_with_args(args);

    init_logging(&config)?;

    if let Err(e) = &loaded {
        warn!(error = %e, "Could not load configuration, using defaults");
    }
    info!(name = carecards::NAME, version = carecards::VERSION, "Starting");

    let source = source_from_config(&config.catalog);
    info!(source = %source.describe(), "Hospital source selected");

    Ok(App::new(&config, source))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
