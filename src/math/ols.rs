//! Ordinary least squares line fitting.
//!
//! ## Purpose
//!
//! This module provides the closed-form normal-equations solution for a
//! single-variable least-squares line, y = slope * x + intercept. It is the
//! numeric core behind the per-stint degradation estimates.
//!
//! ## Design notes
//!
//! * **Closed form**: slope and intercept come from running sums of x, y,
//!   x*y, and x^2; no iterative solver and no external modeling library.
//! * **Stable order**: sums are accumulated in a single forward pass over
//!   the input, so results are reproducible for a given input order.
//! * **Generics**: the fit is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Degenerate spread**: when every x is identical the slope is
//!   undefined; the fit reports no result instead of dividing by zero.
//! * **Sample floor**: fewer than [`MIN_SAMPLES_FOR_FIT`] pairs is not a
//!   statistically meaningful fit and also reports no result.
//!
//! ## Invariants
//!
//! * A returned line always came from at least [`MIN_SAMPLES_FOR_FIT`]
//!   pairs with nonzero x spread.
//! * The input is never mutated.
//!
//! ## Non-goals
//!
//! * This module does not validate finiteness; the public entry points
//!   reject NaN/infinite members before delegating here.
//! * This module does not weight, filter, or reorder samples.

// External dependencies
use num_traits::Float;

// ============================================================================
// Constants
// ============================================================================

/// Minimum number of samples for a statistically meaningful trend fit.
///
/// A 2-point fit is always exact and says nothing about the trend, so the
/// fitter treats anything below this floor as not computable.
pub const MIN_SAMPLES_FOR_FIT: usize = 3;

// ============================================================================
// Trend Line
// ============================================================================

/// Fitted line y = slope * x + intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine<T: Float> {
    /// Change in y per unit of x.
    pub slope: T,

    /// Modeled y at x = 0.
    pub intercept: T,
}

// ============================================================================
// OLS Fit
// ============================================================================

/// Fit y = slope * x + intercept by ordinary least squares.
///
/// Returns `None` when fewer than [`MIN_SAMPLES_FOR_FIT`] pairs are given,
/// or when all x values are identical (zero variance leaves the slope
/// undefined).
#[inline]
pub fn fit_line<T: Float>(xs: &[T], ys: &[T]) -> Option<TrendLine<T>> {
    let n_pairs = xs.len().min(ys.len());
    if n_pairs < MIN_SAMPLES_FOR_FIT {
        return None;
    }

    // Normal-equations sums, accumulated in input order.
    let mut n = T::zero();
    let mut s_x = T::zero();
    let mut s_y = T::zero();
    let mut s_xx = T::zero();
    let mut s_xy = T::zero();

    for (&x, &y) in xs.iter().zip(ys.iter()) {
        n = n + T::one();
        s_x = s_x + x;
        s_y = s_y + y;
        s_xx = s_xx + x * x;
        s_xy = s_xy + x * y;
    }

    // n^2 * variance(x); zero exactly when every x is identical.
    let denom = n * s_xx - s_x * s_x;
    if denom == T::zero() {
        return None;
    }

    // slope = covariance(x, y) / variance(x)
    let slope = (n * s_xy - s_x * s_y) / denom;

    // intercept = mean(y) - slope * mean(x)
    let intercept = (s_y - slope * s_x) / n;

    Some(TrendLine { slope, intercept })
}
