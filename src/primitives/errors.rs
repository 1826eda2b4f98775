//! Contract-violation errors for stint analysis.
//!
//! ## Purpose
//!
//! This module defines `AnalysisError`, the error type returned by every
//! fallible entry point in the crate. It covers exactly one class of
//! failure: a caller handed an entry point an argument that violates its
//! contract.
//!
//! ## Design notes
//!
//! * **Two outcomes, two channels**: a stint without enough usable data is a
//!   normal, expected result and is reported as `Ok(None)` by the fitting
//!   operations, never as an error. `AnalysisError` is reserved for caller
//!   bugs such as negative counts or non-finite values.
//! * **Testable**: variants carry the offending values and render to stable,
//!   asserted `Display` strings.
//!
//! ## Key concepts
//!
//! * **Fail loudly**: a contract violation halts the single call and is
//!   surfaced to the immediate caller; it is never downgraded to a missing
//!   result.
//!
//! ## Invariants
//!
//! * Every variant identifies the argument that violated the contract.
//!
//! ## Non-goals
//!
//! * This module does not represent data-quality outcomes (short stints,
//!   zero tire-age spread); those are absent values, not errors.

// External dependencies
use thiserror::Error;

// ============================================================================
// AnalysisError
// ============================================================================

/// Contract violation reported by an analysis entry point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A numeric argument or series member was NaN or infinite.
    #[error("Non-finite input: {name}={value}")]
    NonFiniteInput {
        /// Argument name, with an index for series members (e.g. `lap_times[2]`).
        name: String,
        /// The offending value.
        value: f64,
    },

    /// The tire-age and lap-time series handed to the fitter differ in length.
    #[error("Length mismatch: tyre_ages has {ages_len} points, lap_times has {times_len}")]
    MismatchedSeries {
        /// Length of the tire-age series.
        ages_len: usize,
        /// Length of the lap-time series.
        times_len: usize,
    },

    /// A negative lap count was passed to the stint projection.
    #[error("Invalid num_laps: {0} (must be >= 0)")]
    NegativeLapCount(i64),

    /// A negative starting tire age was passed to the stint projection.
    #[error("Invalid start_tyre_age: {0} (must be >= 0)")]
    NegativeTyreAge(i64),

    /// The session analyzer was configured with a sample floor below the
    /// statistical minimum for a trend fit.
    #[error("Invalid min_samples: {got} (must be at least {min})")]
    InvalidMinSamples {
        /// The configured floor.
        got: usize,
        /// The smallest acceptable floor.
        min: usize,
    },
}
