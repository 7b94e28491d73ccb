//! Forecasting across the plots of a farm portfolio

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{ForecastError, ForecastResult};
use crate::forecaster::calcular_previsoes_on;
use crate::models::{PlotForecast, PlotSnapshot, StagePercentages};
use crate::types::Month;

/// A plot that could not be forecast
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkippedPlot {
    pub id: Uuid,
    pub reason: String,
}

/// Forecasts for every plot that could be forecast, soonest harvest first
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchOutcome {
    pub forecasts: Vec<PlotForecast>,
    pub skipped: Vec<SkippedPlot>,
}

/// Forecast a single plot from its latest analysis
pub fn forecast_plot(plot: &PlotSnapshot, today: NaiveDate) -> ForecastResult<PlotForecast> {
    let analysis = plot
        .latest_analysis
        .as_ref()
        .ok_or(ForecastError::MissingAnalysis { plot: plot.id })?;

    let age = plot.age_years(today);
    let month = Month::from_date(analysis.collected_at);
    let percentages = StagePercentages::from_counts(&analysis.counts);

    let forecast = calcular_previsoes_on(
        today,
        i32::try_from(age).unwrap_or(i32::MAX),
        &analysis.counts,
        &percentages,
        month,
    )?;

    Ok(PlotForecast {
        id: plot.id,
        nome: plot.name.clone(),
        fazenda_nome: plot.farm_name.clone(),
        forecast,
        data_ultima_analise: analysis.collected_at,
    })
}

/// Forecast every plot, skipping the ones that fail
pub fn forecast_plots(plots: &[PlotSnapshot], today: NaiveDate) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for plot in plots {
        match forecast_plot(plot, today) {
            Ok(forecast) => outcome.forecasts.push(forecast),
            Err(e) => {
                tracing::warn!(plot_id = %plot.id, plot = %plot.name, "Skipping plot: {}", e);
                outcome.skipped.push(SkippedPlot {
                    id: plot.id,
                    reason: e.to_string(),
                });
            }
        }
    }

    outcome
        .forecasts
        .sort_by_key(|f| f.forecast.dias_para_colheita);

    tracing::info!(
        forecast = outcome.forecasts.len(),
        skipped = outcome.skipped.len(),
        "Forecast plots"
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Analysis, StageCounts};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plot_without_analysis_fails() {
        let plot = PlotSnapshot {
            id: Uuid::new_v4(),
            name: "Talhão 1".to_string(),
            farm_name: String::new(),
            planting_date: Some(date(2020, 1, 1)),
            latest_analysis: None,
        };
        assert_eq!(
            forecast_plot(&plot, date(2025, 5, 6)),
            Err(ForecastError::MissingAnalysis { plot: plot.id })
        );
    }

    #[test]
    fn test_plot_forecast_uses_collection_month_and_age() {
        let plot = PlotSnapshot {
            id: Uuid::new_v4(),
            name: "Talhão 2".to_string(),
            farm_name: "Fazenda Boa Vista".to_string(),
            planting_date: Some(date(2024, 1, 10)),
            latest_analysis: Some(Analysis {
                counts: StageCounts::new(53, 20, 18, 8, 0),
                collected_at: date(2025, 5, 6),
            }),
        };
        let result = forecast_plot(&plot, date(2025, 5, 20)).unwrap();
        assert_eq!(result.forecast.sacas_por_hectare, 0.0);
        assert!((30..=120).contains(&result.forecast.dias_para_colheita));
        assert_eq!(result.data_ultima_analise, date(2025, 5, 6));
        assert_eq!(result.fazenda_nome, "Fazenda Boa Vista");
    }
}
