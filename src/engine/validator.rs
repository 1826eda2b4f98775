//! Input validation for analysis arguments and configuration.
//!
//! ## Purpose
//!
//! This module provides the fail-fast contract checks run by every public
//! entry point: finite values, matching series lengths, non-negative
//! projection arguments, and analyzer configuration bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: validation stops at the first violation encountered.
//! * **Efficiency**: checks are ordered from cheap to expensive.
//! * **Named offenders**: every error carries the argument (and index, for
//!   series members) that violated the contract.
//!
//! ## Key concepts
//!
//! * **Finite Checks**: NaN or infinite values are caller bugs, rejected
//!   before any arithmetic runs.
//! * **Projection Bounds**: lap counts and starting tire ages are signed at
//!   the boundary so negative values are representable and rejected.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective contracts.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not decide whether a stint has enough data; that is a
//!   normal analysis outcome, not a contract violation.

// Internal dependencies
use crate::math::ols::MIN_SAMPLES_FOR_FIT;
use crate::primitives::errors::AnalysisError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for analysis arguments and configuration.
///
/// Provides static methods for validating the inputs of the public entry
/// points. All methods return `Result<(), AnalysisError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Series Validation
    // ========================================================================

    /// Validate a tire-age/lap-time series pair for trend fitting.
    pub fn validate_series(tyre_ages: &[f64], lap_times: &[f64]) -> Result<(), AnalysisError> {
        // Check 1: Matching lengths
        if tyre_ages.len() != lap_times.len() {
            return Err(AnalysisError::MismatchedSeries {
                ages_len: tyre_ages.len(),
                times_len: lap_times.len(),
            });
        }

        // Check 2: All members finite
        Self::validate_finite_series(tyre_ages, "tyre_ages")?;
        Self::validate_finite_series(lap_times, "lap_times")?;

        Ok(())
    }

    /// Validate every member of a series for finiteness.
    pub fn validate_finite_series(values: &[f64], name: &str) -> Result<(), AnalysisError> {
        for (i, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(AnalysisError::NonFiniteInput {
                    name: format!("{}[{}]", name, i),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Validate a single numeric argument for finiteness.
    pub fn validate_scalar(value: f64, name: &str) -> Result<(), AnalysisError> {
        if !value.is_finite() {
            return Err(AnalysisError::NonFiniteInput {
                name: name.to_string(),
                value,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Projection Argument Validation
    // ========================================================================

    /// Validate the number of laps to project over.
    pub fn validate_lap_count(num_laps: i64) -> Result<(), AnalysisError> {
        if num_laps < 0 {
            return Err(AnalysisError::NegativeLapCount(num_laps));
        }
        Ok(())
    }

    /// Validate the starting tire age of a projection.
    pub fn validate_start_age(start_tyre_age: i64) -> Result<(), AnalysisError> {
        if start_tyre_age < 0 {
            return Err(AnalysisError::NegativeTyreAge(start_tyre_age));
        }
        Ok(())
    }

    // ========================================================================
    // Analyzer Configuration Validation
    // ========================================================================

    /// Validate the session analyzer's minimum-sample floor.
    ///
    /// # Notes
    ///
    /// * The floor may be raised above the fitter's own minimum for noisier
    ///   sessions, but never lowered below it.
    pub fn validate_min_samples(min_samples: usize) -> Result<(), AnalysisError> {
        if min_samples < MIN_SAMPLES_FOR_FIT {
            return Err(AnalysisError::InvalidMinSamples {
                got: min_samples,
                min: MIN_SAMPLES_FOR_FIT,
            });
        }
        Ok(())
    }
}
