//! Forecast service: reads plot snapshots and produces the harvest report

use std::path::Path;

use chrono::NaiveDate;
use harvest_forecast::{forecast_plots, DateRange, PlotForecast, PlotSnapshot, SkippedPlot};
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Forecast service for a portfolio of plots
#[derive(Clone)]
pub struct ForecastService {
    window_days: u32,
}

/// One plot's forecast with its recommended harvest window
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    #[serde(flatten)]
    pub plot: PlotForecast,
    pub janela_colheita: DateRange,
}

/// Report written by the tool
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub today: NaiveDate,
    pub forecasts: Vec<ReportEntry>,
    pub skipped: Vec<SkippedPlot>,
}

impl ForecastService {
    /// Create a new ForecastService instance
    pub fn new(window_days: u32) -> Self {
        Self { window_days }
    }

    /// Read plot snapshots from a JSON file
    pub fn load_snapshots(&self, path: &Path) -> AppResult<Vec<PlotSnapshot>> {
        let contents = std::fs::read_to_string(path).map_err(|source| AppError::Input {
            path: path.display().to_string(),
            source,
        })?;
        self.parse_snapshots(&contents)
    }

    /// Parse plot snapshots from a JSON array
    pub fn parse_snapshots(&self, json: &str) -> AppResult<Vec<PlotSnapshot>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Forecast every plot and attach harvest windows
    pub fn build_report(&self, plots: &[PlotSnapshot], today: NaiveDate) -> ForecastReport {
        let outcome = forecast_plots(plots, today);

        let forecasts = outcome
            .forecasts
            .into_iter()
            .map(|plot| ReportEntry {
                janela_colheita: plot.forecast.harvest_window(self.window_days),
                plot,
            })
            .collect();

        ForecastReport {
            today,
            forecasts,
            skipped: outcome.skipped,
        }
    }

    /// Serialize a report as JSON
    pub fn render(&self, report: &ForecastReport, pretty: bool) -> AppResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}
