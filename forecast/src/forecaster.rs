//! Harvest forecaster
//!
//! Combines the yield step table with a search for the day on which the
//! cherry-stage fraction peaks.

use chrono::{Days, Local, NaiveDate};

use crate::calibration::{
    harvest_bounds, require_transition_rates, MATURE_YIELD_BUCKETS, MATURE_YIELD_MAX,
    SECOND_YEAR_YIELD,
};
use crate::error::ForecastResult;
use crate::models::{Forecast, StageCounts, StagePercentages};
use crate::ripeness::cherry_fraction;
use crate::types::Month;

/// Resolution of the harvest-day scan, in days
pub const SEARCH_STEP_DAYS: f64 = 0.1;

/// Yield in sacks per hectare from plant age and total grains per plant
pub fn estimate_yield(plant_age_years: i32, total_grains_per_plant: f64) -> f64 {
    match plant_age_years {
        i32::MIN..=1 => 0.0,
        2 => SECOND_YEAR_YIELD,
        _ => MATURE_YIELD_BUCKETS
            .iter()
            .find(|(max_grains, _)| total_grains_per_plant <= *max_grains)
            .map(|(_, sacks)| *sacks)
            .unwrap_or(MATURE_YIELD_MAX),
    }
}

/// Minimise `objective` over `[lower, upper]` by a fixed-step upward scan.
///
/// Keeps the first minimum found. The scan position accumulates `step`, so
/// the last sample may fall just short of `upper`.
pub fn scan_minimum<F>(objective: F, lower: f64, upper: f64, step: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut best_t = lower;
    let mut best_value = objective(lower);

    let mut t = lower;
    while t <= upper {
        let value = objective(t);
        if value < best_value {
            best_value = value;
            best_t = t;
        }
        t += step;
    }

    best_t
}

/// Unrounded day offset at which the cherry fraction peaks
pub fn optimal_harvest_time(percentages: &StagePercentages, month: Month) -> ForecastResult<f64> {
    let rates = require_transition_rates(month)?;
    let bounds = harvest_bounds(month);

    let t = scan_minimum(
        |t| -cherry_fraction(t, percentages, &rates),
        bounds.lower_days,
        bounds.upper_days,
        SEARCH_STEP_DAYS,
    );

    tracing::debug!(
        month = %month,
        lower = bounds.lower_days,
        upper = bounds.upper_days,
        t,
        "Found optimal harvest time"
    );

    Ok(t)
}

/// Whole days until the cherry fraction peaks
pub fn find_optimal_harvest_day(percentages: &StagePercentages, month: Month) -> ForecastResult<u32> {
    let t = optimal_harvest_time(percentages, month)?;
    Ok(t.round() as u32)
}

/// Forecast relative to an explicit `today`
pub fn calcular_previsoes_on(
    today: NaiveDate,
    plant_age_years: i32,
    counts: &StageCounts,
    percentages: &StagePercentages,
    month: Month,
) -> ForecastResult<Forecast> {
    let total_grains = counts.total() as f64;
    let sacas_por_hectare = estimate_yield(plant_age_years, total_grains);
    let dias_para_colheita = find_optimal_harvest_day(percentages, month)?;
    let data_ideal_colheita = today
        .checked_add_days(Days::new(u64::from(dias_para_colheita)))
        .unwrap_or(NaiveDate::MAX);

    tracing::debug!(
        plant_age_years,
        total_grains,
        sacas_por_hectare,
        dias_para_colheita,
        "Computed forecast"
    );

    Ok(Forecast {
        sacas_por_hectare,
        dias_para_colheita,
        data_ideal_colheita,
    })
}

/// Forecast relative to the local calendar date
pub fn calcular_previsoes(
    plant_age_years: i32,
    counts: &StageCounts,
    percentages: &StagePercentages,
    month: Month,
) -> ForecastResult<Forecast> {
    calcular_previsoes_on(
        Local::now().date_naive(),
        plant_age_years,
        counts,
        percentages,
        month,
    )
}
