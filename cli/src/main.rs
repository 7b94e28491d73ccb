//! Harvest forecast command-line tool
//!
//! Reads plot snapshots (planting date plus latest ripeness analysis) from a
//! JSON file and prints each plot's yield and ideal harvest date, soonest
//! harvest first.

use std::io::Write;
use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod services;

use crate::config::Config;
use crate::services::ForecastService;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "previsao=info,harvest_forecast=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;
    tracing::debug!("Environment: {}", config.environment);

    let input = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.input.path));
    let today = config.today();

    tracing::info!("Forecasting plots from {} as of {}", input.display(), today);

    let service = ForecastService::new(config.output.window_days);
    let plots = service.load_snapshots(&input)?;
    let report = service.build_report(&plots, today);
    let rendered = service.render(&report, config.output.pretty)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;

    Ok(())
}
