//! Validation utilities for forecast inputs
//!
//! The forecaster itself does not check its inputs. Callers that accept
//! data from users run these first.

use crate::calibration::TransitionRates;
use crate::models::StagePercentages;

/// Allowed distance of the stage fractions' sum from 1
pub const PERCENTAGE_SUM_TOLERANCE: f64 = 0.01;

/// Validate that each stage fraction is in [0, 1] and they sum to about 1
pub fn validate_stage_percentages(percentages: &StagePercentages) -> Result<(), &'static str> {
    let values = percentages.to_array();
    if values.iter().any(|v| !v.is_finite()) {
        return Err("Stage fractions must be finite numbers");
    }
    if values.iter().any(|v| *v < 0.0 || *v > 1.0) {
        return Err("Stage fractions must be between 0 and 1");
    }
    if (percentages.sum() - 1.0).abs() > PERCENTAGE_SUM_TOLERANCE {
        return Err("Stage fractions must sum to 1");
    }
    Ok(())
}

/// Validate that transition rates are finite and non-negative
pub fn validate_transition_rates(rates: &TransitionRates) -> Result<(), &'static str> {
    let values = [rates.k_v_vc, rates.k_vc_c, rates.k_c_p, rates.k_p_s];
    if values.iter().any(|v| !v.is_finite()) {
        return Err("Transition rates must be finite numbers");
    }
    if values.iter().any(|v| *v < 0.0) {
        return Err("Transition rates cannot be negative");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_stage_percentages_valid() {
        let pct = StagePercentages::new(0.25, 0.125, 0.5, 0.075, 0.05);
        assert!(validate_stage_percentages(&pct).is_ok());
        // Rounded upstream values
        let pct = StagePercentages::new(0.334, 0.333, 0.333, 0.0, 0.0);
        assert!(validate_stage_percentages(&pct).is_ok());
    }

    #[test]
    fn test_validate_stage_percentages_invalid() {
        let out_of_range = StagePercentages::new(1.5, -0.5, 0.0, 0.0, 0.0);
        assert!(validate_stage_percentages(&out_of_range).is_err());

        let nan = StagePercentages::new(f64::NAN, 0.5, 0.5, 0.0, 0.0);
        assert!(validate_stage_percentages(&nan).is_err());

        let short = StagePercentages::new(0.2, 0.2, 0.2, 0.0, 0.0);
        assert!(validate_stage_percentages(&short).is_err());
    }

    #[test]
    fn test_validate_transition_rates() {
        assert!(validate_transition_rates(&TransitionRates::new(0.02, 0.015, 0.01, 0.0)).is_ok());
        assert!(validate_transition_rates(&TransitionRates::new(-0.1, 0.0, 0.0, 0.0)).is_err());
        assert!(validate_transition_rates(&TransitionRates::new(f64::INFINITY, 0.0, 0.0, 0.0)).is_err());
    }
}
