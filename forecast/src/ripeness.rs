//! Ripeness evolution model.
//!
//! Five-compartment, one-directional decay chain
//! green → green-yellow → cherry → raisin → dry, solved in closed form.
//! The dry fraction is the residual of the other four, so the returned
//! distribution always sums to 1.

use crate::calibration::TransitionRates;
use crate::models::StagePercentages;

/// Stage fractions `t` days after the observation.
///
/// Returns `[p_v, p_vc, p_c, p_p, p_s]`. Total for `t >= 0` and non-negative
/// rates; no inputs are validated.
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
) -> [f64; 5] {
    let p_v = p_v0 * (-k_v_vc * t).exp();

    let p_vc = (p_vc0 + p_v0 * (1.0 - (-k_v_vc * t).exp())) * (-k_vc_c * t).exp();

    let p_c = (p_c0 + p_vc0 * (1.0 - (-k_vc_c * t).exp())) * (-k_c_p * t).exp()
        + p_v0 * (1.0 - (-k_v_vc * t).exp()) * (1.0 - (-k_vc_c * t).exp()) * (-k_c_p * t).exp();

    let p_p = (p_p0 + p_c0 * (1.0 - (-k_c_p * t).exp())) * (-k_p_s * t).exp()
        + p_vc0 * (1.0 - (-k_vc_c * t).exp()) * (1.0 - (-k_c_p * t).exp()) * (-k_p_s * t).exp()
        + p_v0
            * (1.0 - (-k_v_vc * t).exp())
            * (1.0 - (-k_vc_c * t).exp())
            * (1.0 - (-k_c_p * t).exp())
            * (-k_p_s * t).exp();

    let p_s = 1.0 - (p_v + p_vc + p_c + p_p);

    [p_v, p_vc, p_c, p_p, p_s]
}

/// [`evolve_stages`] over the model types.
///
/// The initial dry fraction is ignored; dry is always the residual.
pub fn evolve(t: f64, initial: &StagePercentages, rates: &TransitionRates) -> StagePercentages {
    evolve_stages(
        t,
        initial.green,
        initial.green_yellow,
        initial.cherry,
        initial.raisin,
        rates.k_v_vc,
        rates.k_vc_c,
        rates.k_c_p,
        rates.k_p_s,
    )
    .into()
}

/// Cherry-stage fraction after `t` days
pub fn cherry_fraction(t: f64, initial: &StagePercentages, rates: &TransitionRates) -> f64 {
    evolve(t, initial, rates).cherry
}
