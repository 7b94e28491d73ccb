//! Configuration for the forecast command-line tool
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with PREVISAO_ prefix

use chrono::NaiveDate;
use config::{Environment, File};
use serde::Deserialize;

use crate::error::AppResult;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Where plot snapshots are read from
    pub input: InputConfig,

    /// How forecasts are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Reference date for forecasts; the local date when unset
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    /// JSON file holding an array of plot snapshots
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Pretty-print the JSON report
    pub pretty: bool,

    /// Days either side of the ideal date in the reported harvest window
    pub window_days: u32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> AppResult<Self> {
        let environment =
            std::env::var("PREVISAO_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("input.path", "plots.json")?
            .set_default("output.pretty", true)?
            .set_default("output.window_days", 7)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (PREVISAO_ prefix)
            .add_source(
                Environment::with_prefix("PREVISAO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Reference date for this run
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            window_days: 7,
        }
    }
}
