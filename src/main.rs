use std::fs::OpenOptions;

use feeform::config::Config;
use feeform::core::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    config.validate()?;

    let _log_guard = init_tracing(&config)?;

    tracing::info!("Starting feeform");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Currency label: {}", config.display.currency_label);

    feeform::ui::app::run(&config);

    Ok(())
}

/// File-backed tracing, installed only when a log file is configured.
///
/// The form owns the terminal, so there is no console logging: without
/// `FEEFORM_LOG_FILE` the subscriber is never set and events go nowhere.
fn init_tracing(config: &Config) -> Result<Option<WorkerGuard>> {
    let Some(path) = &config.app.log_file else {
        return Ok(None);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("feeform={}", config.app.log_level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(Some(guard))
}
