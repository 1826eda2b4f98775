//! Stint time projection from fitted coefficients.
//!
//! ## Purpose
//!
//! This module projects the total elapsed time of a future run of laps from
//! a theoretical best lap time and a per-lap degradation rate. It is
//! independent of the fitting step and consumes only its scalar outputs.
//!
//! ## Design notes
//!
//! * **Lap-order summation**: laps are accumulated in running order, the
//!   same arithmetic series the closed form describes, so per-lap and total
//!   projections agree within floating-point re-association.
//! * **Signed boundary**: the count arguments are signed so negative values
//!   are representable and rejected as contract violations rather than
//!   silently wrapped by an unsigned type.
//!
//! ## Invariants
//!
//! * Zero laps projects exactly 0.0.
//! * A rejected argument leaves no partial result.
//! * Lap ages are computed in floating point; a starting age near the
//!   integer limit projects without overflow.
//!
//! ## Non-goals
//!
//! * This module does not pick pit windows or compare strategies; it prices
//!   exactly one contiguous run of laps.

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::AnalysisError;

// ============================================================================
// Stint Time Projection
// ============================================================================

/// Project total elapsed time over a run of future laps.
///
/// Sums `theoretical_best + degradation_rate * (start_tyre_age + i)` for
/// i in 0..num_laps. Negative counts and non-finite coefficients are
/// contract violations.
pub fn predict_stint_time(
    theoretical_best: f64,
    degradation_rate: f64,
    start_tyre_age: i64,
    num_laps: i64,
) -> Result<f64, AnalysisError> {
    Validator::validate_scalar(theoretical_best, "theoretical_best")?;
    Validator::validate_scalar(degradation_rate, "degradation_rate")?;
    Validator::validate_start_age(start_tyre_age)?;
    Validator::validate_lap_count(num_laps)?;

    let mut total_time = 0.0;
    for i in 0..num_laps {
        // Summed as reals; start_tyre_age + i can exceed the integer range
        // for starting ages near the limit.
        let tyre_age = start_tyre_age as f64 + i as f64;
        total_time += theoretical_best + degradation_rate * tyre_age;
    }

    Ok(total_time)
}
