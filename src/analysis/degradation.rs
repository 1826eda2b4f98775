//! Per-stint degradation model and its estimators.
//!
//! ## Purpose
//!
//! This module fits the lap-time trend of a stint sample and interprets the
//! two coefficients: the slope as the per-lap degradation rate and the
//! intercept as the theoretical best lap time at zero tire age.
//!
//! ## Design notes
//!
//! * **One fit, two readings**: a single pass produces both coefficients, so
//!   the degradation rate and the theoretical best always describe the exact
//!   same sample. The estimators are accessors over that shared fit, not
//!   independent fits.
//! * **Unconstrained sign**: a stint dominated by fuel burn can legitimately
//!   fit a negative slope; nothing clamps it.
//!
//! ## Key concepts
//!
//! * **Absent result**: a sample that is too small or has no tire-age spread
//!   yields `Ok(None)`. The error channel is reserved for contract
//!   violations (non-finite lap times).
//!
//! ## Invariants
//!
//! * `sample_count` in a returned model equals the number of accurate laps
//!   the fit consumed, and is at least the fitter's sample floor.
//!
//! ## Non-goals
//!
//! * This module does not aggregate across stints; see the session adapter.

// Internal dependencies
use crate::analysis::filter::accurate_laps;
use crate::engine::validator::Validator;
use crate::math::ols::fit_line;
use crate::primitives::errors::AnalysisError;
use crate::primitives::record::LapRecord;

// ============================================================================
// Degradation Model
// ============================================================================

/// Fitted lap-time trend for one stint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegradationModel {
    /// Seconds-per-lap change in lap time per unit of tire age.
    pub slope: f64,

    /// Modeled lap time at zero tire age, in seconds.
    pub intercept: f64,

    /// Number of accurate laps the fit was computed from.
    pub sample_count: usize,
}

impl DegradationModel {
    /// The fitted slope, read as the per-lap degradation rate (s/lap).
    #[inline]
    pub fn degradation_rate(&self) -> f64 {
        self.slope
    }

    /// The fitted intercept, read as the theoretical best lap time (s).
    #[inline]
    pub fn theoretical_best(&self) -> f64 {
        self.intercept
    }
}

// ============================================================================
// Stint Fit
// ============================================================================

/// Fit the lap-time trend of a filtered stint sample.
///
/// `Ok(None)` means the sample has fewer laps than the fitter's floor or no
/// tire-age spread; `Err` is reserved for contract violations (non-finite
/// lap times) and is never downgraded to an absent result.
pub fn fit_stint_sample(
    sample: &[&LapRecord],
) -> Result<Option<DegradationModel>, AnalysisError> {
    let tyre_ages: Vec<f64> = sample.iter().map(|lap| f64::from(lap.tyre_age)).collect();
    let lap_times: Vec<f64> = sample.iter().map(|lap| lap.lap_time_seconds).collect();

    // Tire ages are integer-valued and always finite; only the lap times
    // need a finiteness check.
    Validator::validate_finite_series(&lap_times, "lap_times")?;

    Ok(fit_line(&tyre_ages, &lap_times).map(|line| DegradationModel {
        slope: line.slope,
        intercept: line.intercept,
        sample_count: sample.len(),
    }))
}

// ============================================================================
// Estimators
// ============================================================================

/// Estimate the per-lap degradation rate for one driver/stint pair.
///
/// Filters the collection down to the stint's accurate laps and reads the
/// slope off the shared fit. `Ok(None)` when the stint has too few accurate
/// laps or no tire-age spread. Callers that also want the theoretical best
/// should call [`fit_stint_sample`] once and read both accessors off the
/// model instead of estimating twice.
pub fn estimate_degradation(
    laps: &[LapRecord],
    driver: &str,
    stint: u32,
) -> Result<Option<f64>, AnalysisError> {
    let sample = accurate_laps(laps, driver, stint);
    Ok(fit_stint_sample(&sample)?.map(|model| model.degradation_rate()))
}

/// Estimate the theoretical best lap time for one driver/stint pair.
///
/// Filters the collection down to the stint's accurate laps and reads the
/// intercept off the shared fit, under the same preconditions as
/// [`estimate_degradation`].
pub fn estimate_theoretical_best(
    laps: &[LapRecord],
    driver: &str,
    stint: u32,
) -> Result<Option<f64>, AnalysisError> {
    let sample = accurate_laps(laps, driver, stint);
    Ok(fit_stint_sample(&sample)?.map(|model| model.theoretical_best()))
}
