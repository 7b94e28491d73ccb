//! Calibration tables for the ripening and yield models
//!
//! Empirical values from field calibration. They are literal constants and
//! must not be derived or interpolated.

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, ForecastResult};
use crate::models::Stage;
use crate::types::Month;

/// Per-day transition rates along green → green-yellow → cherry → raisin → dry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TransitionRates {
    pub k_v_vc: f64,
    pub k_vc_c: f64,
    pub k_c_p: f64,
    pub k_p_s: f64,
}

impl TransitionRates {
    pub const fn new(k_v_vc: f64, k_vc_c: f64, k_c_p: f64, k_p_s: f64) -> Self {
        Self {
            k_v_vc,
            k_vc_c,
            k_c_p,
            k_p_s,
        }
    }
}

/// Valid search interval for days-to-harvest, in days from the sample
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HarvestWindowBounds {
    pub lower_days: f64,
    pub upper_days: f64,
}

impl HarvestWindowBounds {
    pub const fn new(lower_days: f64, upper_days: f64) -> Self {
        Self {
            lower_days,
            upper_days,
        }
    }

    pub fn contains(&self, days: f64) -> bool {
        days >= self.lower_days && days <= self.upper_days
    }
}

/// Ripening rates for the month the sample was collected in.
///
/// September through December have never been calibrated and return `None`.
pub fn transition_rates(month: Month) -> Option<TransitionRates> {
    match month {
        Month::Janeiro => Some(TransitionRates::new(0.010, 0.005, 0.002, 0.001)),
        Month::Fevereiro => Some(TransitionRates::new(0.011, 0.1, 0.0014, 0.000)),
        Month::Marco => Some(TransitionRates::new(0.015, 0.01, 0.005, 0.003)),
        Month::Abril => Some(TransitionRates::new(0.010, 0.02, 0.0047, 0.002)),
        Month::Maio => Some(TransitionRates::new(0.020, 0.015, 0.010, 0.005)),
        Month::Junho => Some(TransitionRates::new(0.018, 0.013, 0.007, 0.004)),
        Month::Julho => Some(TransitionRates::new(0.015, 0.010, 0.005, 0.003)),
        Month::Agosto => Some(TransitionRates::new(0.010, 0.007, 0.003, 0.002)),
        Month::Setembro | Month::Outubro | Month::Novembro | Month::Dezembro => None,
    }
}

/// Like [`transition_rates`], failing for uncalibrated months
pub fn require_transition_rates(month: Month) -> ForecastResult<TransitionRates> {
    transition_rates(month).ok_or(ForecastError::UnsupportedMonth(month))
}

/// Harvest search window for the month the sample was collected in
pub fn harvest_bounds(month: Month) -> HarvestWindowBounds {
    match month {
        Month::Janeiro => HarvestWindowBounds::new(90.0, 210.0),
        Month::Fevereiro => HarvestWindowBounds::new(75.0, 195.0),
        Month::Marco => HarvestWindowBounds::new(60.0, 180.0),
        Month::Abril => HarvestWindowBounds::new(45.0, 150.0),
        Month::Maio => HarvestWindowBounds::new(30.0, 120.0),
        Month::Junho => HarvestWindowBounds::new(15.0, 90.0),
        Month::Julho => HarvestWindowBounds::new(0.0, 60.0),
        Month::Agosto => HarvestWindowBounds::new(0.0, 45.0),
        Month::Setembro => HarvestWindowBounds::new(0.0, 30.0),
        Month::Outubro => HarvestWindowBounds::new(180.0, 270.0),
        Month::Novembro => HarvestWindowBounds::new(150.0, 240.0),
        Month::Dezembro => HarvestWindowBounds::new(120.0, 210.0),
    }
}

// ============================================================================
// Yield step table
// ============================================================================

/// Second-year yield in sacks per hectare, independent of grain count
pub const SECOND_YEAR_YIELD: f64 = 9.5;

/// Mature-plant yield buckets: (max total grains per plant, sacks per hectare)
pub const MATURE_YIELD_BUCKETS: [(f64, f64); 4] = [
    (30.0, 12.3),
    (50.0, 17.6),
    (100.0, 25.1),
    (200.0, 31.7),
];

/// Mature-plant yield above the last bucket
pub const MATURE_YIELD_MAX: f64 = 42.9;

// ============================================================================
// Detailed yield model
// ============================================================================

/// Fruits that fill one litre, by ripeness stage
pub fn fruits_per_liter(stage: Stage) -> f64 {
    match stage {
        Stage::Green => 612.0,
        Stage::GreenYellow => 551.0,
        Stage::Cherry => 500.0,
        Stage::Raisin => 683.0,
        Stage::Dry => 926.0,
    }
}

/// Litres of fruit that yield one sack of processed coffee, by ripeness stage
pub fn liters_per_sack(stage: Stage) -> f64 {
    match stage {
        Stage::Green => 493.0,
        Stage::GreenYellow => 548.0,
        Stage::Cherry => 604.0,
        Stage::Raisin => 442.0,
        Stage::Dry => 326.0,
    }
}
