//! High-level entry points for stint analysis.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing functions: fitting a
//! lap-time trend over raw series, analyzing one (driver, stint) cell, and
//! sweeping a whole session with the default configuration.
//!
//! ## Design notes
//!
//! * **Validated**: every entry point runs its contract checks before any
//!   arithmetic.
//! * **Thin**: each function composes the filter, fit, and report layers;
//!   no logic lives here that the layers below do not expose.
//!
//! ## Key concepts
//!
//! * **Result shape**: `Err` is a contract violation, `Ok(None)` is an
//!   expected not-computable outcome, `Ok(Some(..))` is a fitted result.

// Internal dependencies
use crate::adapters::session::{SessionAnalysis, SessionAnalyzer, StintReport};
use crate::analysis::degradation::fit_stint_sample;
use crate::analysis::filter::accurate_laps;
use crate::engine::validator::Validator;
use crate::math::ols::{fit_line, TrendLine};
use crate::primitives::errors::AnalysisError;
use crate::primitives::record::LapRecord;

// ============================================================================
// Raw-Series Fitting
// ============================================================================

/// Fit the lap-time trend over raw tire-age/lap-time series.
///
/// The record-based pipeline ([`analyze_stint`], [`SessionAnalyzer`]) is the
/// usual entry; this one serves callers that already hold bare series.
/// `Ok(None)` when fewer than [`MIN_SAMPLES_FOR_FIT`] pairs are given or the
/// ages have no spread; `Err` on mismatched lengths or non-finite members.
///
/// [`MIN_SAMPLES_FOR_FIT`]: crate::math::ols::MIN_SAMPLES_FOR_FIT
///
/// ```
/// use stintfit::prelude::*;
///
/// let ages = [0.0, 1.0, 2.0, 3.0];
/// let times = [90.0, 90.5, 91.0, 91.5];
///
/// let line = fit_lap_trend(&ages, &times)?.expect("computable trend");
/// assert!((line.slope - 0.5).abs() < 1e-9);
/// assert!((line.intercept - 90.0).abs() < 1e-9);
/// # Ok::<(), AnalysisError>(())
/// ```
pub fn fit_lap_trend(
    tyre_ages: &[f64],
    lap_times: &[f64],
) -> Result<Option<TrendLine<f64>>, AnalysisError> {
    Validator::validate_series(tyre_ages, lap_times)?;
    Ok(fit_line(tyre_ages, lap_times))
}

// ============================================================================
// Record-Based Analysis
// ============================================================================

/// Analyze one (driver, stint) cell of a session.
///
/// Composes the accurate-lap filter with a single fit and returns the
/// report row, or `Ok(None)` if the stint has no computable model.
///
/// ```
/// use stintfit::prelude::*;
///
/// # fn laps() -> Vec<LapRecord> {
/// #     (0..4)
/// #         .map(|i| LapRecord {
/// #             driver: "VER".to_string(),
/// #             lap_number: i + 1,
/// #             stint: 1,
/// #             compound: "SOFT".to_string(),
/// #             tyre_age: i,
/// #             lap_time_seconds: 90.0 + 0.5 * f64::from(i),
/// #             position: Some(1),
/// #             is_accurate: true,
/// #         })
/// #         .collect()
/// # }
/// let report = analyze_stint(&laps(), "VER", 1)?.expect("computable stint");
/// assert_eq!(report.accurate_laps, 4);
/// # Ok::<(), AnalysisError>(())
/// ```
pub fn analyze_stint(
    laps: &[LapRecord],
    driver: &str,
    stint: u32,
) -> Result<Option<StintReport>, AnalysisError> {
    let sample = accurate_laps(laps, driver, stint);

    let model = match fit_stint_sample(&sample)? {
        Some(model) => model,
        None => return Ok(None),
    };

    Ok(Some(StintReport {
        driver: driver.to_string(),
        stint,
        compound: sample[0].compound.clone(),
        degradation_rate: model.degradation_rate(),
        theoretical_best: model.theoretical_best(),
        accurate_laps: model.sample_count,
    }))
}

/// Analyze every (driver, stint) pair with the default sample floor.
///
/// Equivalent to `SessionAnalyzer::new().analyze(laps)`; use the builder on
/// [`SessionAnalyzer`] to raise the floor.
pub fn analyze_session(laps: &[LapRecord]) -> Result<SessionAnalysis, AnalysisError> {
    SessionAnalyzer::new().analyze(laps)
}
