//! WebAssembly module for harvest forecasting
//!
//! Provides client-side computation for:
//! - Ripeness stage evolution
//! - Yield estimates (step table and detailed model)
//! - Optimal harvest day and full plot forecasts
//!
//! Structured values cross the boundary as JSON strings in the camelCase
//! shape the frontends already use.

use chrono::NaiveDate;
use harvest_forecast::{
    calcular_previsoes_on, find_optimal_harvest_day, DetailedYieldInput, Month, StageCounts,
    StagePercentages, TransitionRates,
};
use wasm_bindgen::prelude::*;

fn to_js_error(message: String) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

fn today() -> Result<NaiveDate, String> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .ok_or_else(|| "Invalid current date".to_string())
}

fn parse_percentages(json: &str) -> Result<StagePercentages, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid percentages JSON: {}", e))
}

fn parse_counts(json: &str) -> Result<StageCounts, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid counts JSON: {}", e))
}

/// Stage fractions `[green, greenYellow, cherry, raisin, dry]` after `t` days
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn evolve_stages(
    t: f64,
    p_v0: f64,
    p_vc0: f64,
    p_c0: f64,
    p_p0: f64,
    k_v_vc: f64,
    k_vc_c: f64,
    k_c_p: f64,
    k_p_s: f64,
) -> Vec<f64> {
    harvest_forecast::evolve_stages(t, p_v0, p_vc0, p_c0, p_p0, k_v_vc, k_vc_c, k_c_p, k_p_s)
        .to_vec()
}

/// Yield in sacks per hectare from plant age and grains per plant
#[wasm_bindgen]
pub fn estimate_yield(plant_age_years: i32, total_grains_per_plant: f64) -> f64 {
    harvest_forecast::estimate_yield(plant_age_years, total_grains_per_plant)
}

/// Plants per hectare from row and in-row spacing in metres
#[wasm_bindgen]
pub fn plants_per_hectare(row_spacing_m: f64, plant_spacing_m: f64) -> u32 {
    harvest_forecast::plants_per_hectare(row_spacing_m, plant_spacing_m)
}

/// Check stage fractions before forecasting
#[wasm_bindgen]
pub fn validate_stage_fractions(
    green: f64,
    green_yellow: f64,
    cherry: f64,
    raisin: f64,
    dry: f64,
) -> bool {
    let percentages = StagePercentages::new(green, green_yellow, cherry, raisin, dry);
    harvest_forecast::validate_stage_percentages(&percentages).is_ok()
}

/// Check caller-supplied transition rates
#[wasm_bindgen]
pub fn validate_rates(k_v_vc: f64, k_vc_c: f64, k_c_p: f64, k_p_s: f64) -> bool {
    let rates = TransitionRates::new(k_v_vc, k_vc_c, k_c_p, k_p_s);
    harvest_forecast::validate_transition_rates(&rates).is_ok()
}

fn optimal_day(percentages_json: &str, month: &str) -> Result<u32, String> {
    let percentages = parse_percentages(percentages_json)?;
    let month = Month::parse(month).map_err(|e| e.to_string())?;
    find_optimal_harvest_day(&percentages, month).map_err(|e| e.to_string())
}

/// Days until the cherry fraction peaks
#[wasm_bindgen]
pub fn optimal_harvest_day(percentages_json: &str, month: &str) -> Result<u32, JsValue> {
    optimal_day(percentages_json, month).map_err(to_js_error)
}

fn forecast_json(
    today: NaiveDate,
    plant_age_years: i32,
    counts_json: &str,
    percentages_json: &str,
    month: &str,
) -> Result<String, String> {
    let counts = parse_counts(counts_json)?;
    let percentages = parse_percentages(percentages_json)?;
    let month = Month::parse(month).map_err(|e| e.to_string())?;
    let forecast = calcular_previsoes_on(today, plant_age_years, &counts, &percentages, month)
        .map_err(|e| e.to_string())?;
    serde_json::to_string(&forecast).map_err(|e| e.to_string())
}

/// Full forecast as `{sacasPorHectare, diasParaColheita, dataIdealColheita}` JSON
#[wasm_bindgen]
pub fn calcular_previsoes(
    plant_age_years: i32,
    counts_json: &str,
    percentages_json: &str,
    month: &str,
) -> Result<String, JsValue> {
    let today = today().map_err(to_js_error)?;
    forecast_json(today, plant_age_years, counts_json, percentages_json, month)
        .map_err(to_js_error)
}

fn detailed_json(input_json: &str) -> Result<String, String> {
    let input: DetailedYieldInput =
        serde_json::from_str(input_json).map_err(|e| format!("Invalid input JSON: {}", e))?;
    let range = harvest_forecast::estimate_detailed_yield(&input).map_err(|e| e.to_string())?;
    serde_json::to_string(&range).map_err(|e| e.to_string())
}

/// Detailed yield estimate as `{sacks, floor, ceiling}` JSON
#[wasm_bindgen]
pub fn detailed_yield(input_json: &str) -> Result<String, JsValue> {
    detailed_json(input_json).map_err(to_js_error)
}
