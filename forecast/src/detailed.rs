//! Detailed yield model
//!
//! Estimates sacks per hectare from plant density and the fruit load per
//! plant, projected forward to the optimal harvest day. Returns a ±5% range.

use serde::{Deserialize, Serialize};

use crate::calibration::{fruits_per_liter, liters_per_sack, require_transition_rates};
use crate::error::ForecastResult;
use crate::forecaster::optimal_harvest_time;
use crate::models::{Stage, StagePercentages};
use crate::ripeness::evolve;
use crate::types::Month;

/// Square metres in one hectare
pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Relative half-width of the reported yield range
pub const YIELD_RANGE_MARGIN: f64 = 0.05;

/// Plants per hectare for a given row and in-row spacing (metres)
pub fn plants_per_hectare(row_spacing_m: f64, plant_spacing_m: f64) -> u32 {
    let area_per_plant = row_spacing_m * plant_spacing_m;
    if area_per_plant <= 0.0 {
        return 0;
    }
    (SQUARE_METERS_PER_HECTARE / area_per_plant) as u32
}

/// Inputs to [`estimate_detailed_yield`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedYieldInput {
    pub plants_per_hectare: u32,
    /// Average fruits per plant across all stages, from the latest photos
    pub total_fruits_per_plant: f64,
    pub percentages: StagePercentages,
    pub collection_month: Month,
    pub plant_age_months: u32,
}

/// Yield estimate with its reporting range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct YieldRange {
    pub sacks: f64,
    pub floor: f64,
    pub ceiling: f64,
}

impl std::fmt::Display for YieldRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} a {}", self.floor, self.ceiling)
    }
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Correct the raw figure to account for fruit not visible in photos.
///
/// Totals above 300 fruits per plant are left uncorrected.
pub fn grain_count_correction(total_fruits_per_plant: f64, raw_sacks: f64) -> f64 {
    let mut limit = 50.0;
    let mut base = 15.0;
    while limit <= 300.0 {
        if total_fruits_per_plant <= limit {
            return base + round2(raw_sacks / 2.0);
        }
        limit += 25.0;
        base += 7.5;
    }
    raw_sacks
}

/// Productivity factor for plant age in months
pub fn age_factor(plant_age_months: u32) -> f64 {
    match plant_age_months {
        0..=12 => 0.0,
        13..=24 => 0.3,
        25..=36 => 0.6,
        37..=48 => 0.85,
        49..=120 => 1.0,
        121..=180 => 0.9,
        _ => 0.8,
    }
}

/// Detailed yield estimate for a plot
pub fn estimate_detailed_yield(input: &DetailedYieldInput) -> ForecastResult<YieldRange> {
    let rates = require_transition_rates(input.collection_month)?;
    let t = optimal_harvest_time(&input.percentages, input.collection_month)?;
    let at_harvest = evolve(t, &input.percentages, &rates);

    let total_fruits = input.total_fruits_per_plant;
    let plants = f64::from(input.plants_per_hectare);

    let raw_sacks: f64 = Stage::ALL
        .iter()
        .map(|stage| {
            let fruits_per_hectare = total_fruits * at_harvest.get(*stage) * plants;
            let liters = fruits_per_hectare / fruits_per_liter(*stage);
            liters / liters_per_sack(*stage)
        })
        .sum();

    let corrected = grain_count_correction(total_fruits, raw_sacks);
    let sacks = corrected * age_factor(input.plant_age_months);

    tracing::debug!(
        t,
        total_fruits,
        raw_sacks,
        corrected,
        sacks,
        "Computed detailed yield"
    );

    Ok(YieldRange {
        sacks,
        floor: round2(sacks * (1.0 - YIELD_RANGE_MARGIN)),
        ceiling: round2(sacks * (1.0 + YIELD_RANGE_MARGIN)),
    })
}
