//! Tests for the closed-form ordinary least squares fit.
//!
//! These tests verify the numeric contract of the fitter:
//! - Exact recovery of collinear data at any sample size
//! - The minimum-sample floor
//! - The zero-variance degenerate case
//! - Reasonable behavior on noisy data

use approx::assert_relative_eq;
use stintfit::math::ols::{fit_line, MIN_SAMPLES_FOR_FIT};

// ============================================================================
// Concrete Scenarios
// ============================================================================

/// Test the reference stint: four laps, half a second per lap.
///
/// Verifies slope = 0.5 and intercept = 90.0 for ages [0,1,2,3] with times
/// [90.0, 90.5, 91.0, 91.5].
#[test]
fn test_fit_line_reference_stint() {
    let ages = [0.0, 1.0, 2.0, 3.0];
    let times = [90.0, 90.5, 91.0, 91.5];

    let line = fit_line(&ages, &times).expect("computable fit");

    assert_relative_eq!(line.slope, 0.5, epsilon = 1e-9);
    assert_relative_eq!(line.intercept, 90.0, epsilon = 1e-9);
}

// ============================================================================
// Collinear Recovery
// ============================================================================

/// Test exact recovery of collinear points across sample sizes.
///
/// Verifies that for y = a + b*x the fitter recovers slope = b and
/// intercept = a within 1e-9 for every size >= the sample floor.
#[test]
fn test_fit_line_collinear_recovery() {
    let intercept = 87.3;
    let slope = 0.042;

    for n in [3usize, 4, 7, 25, 100] {
        let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| intercept + slope * x).collect();

        let line = fit_line(&xs, &ys).expect("computable fit");

        assert_relative_eq!(line.slope, slope, epsilon = 1e-9);
        assert_relative_eq!(line.intercept, intercept, epsilon = 1e-9);
    }
}

/// Test recovery of a negative slope.
///
/// Verifies a downward trend (fuel burn outweighing tire wear) passes
/// through unclamped.
#[test]
fn test_fit_line_negative_slope() {
    let xs: Vec<f64> = (0..6).map(|i| i as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|&x| 92.0 - 0.08 * x).collect();

    let line = fit_line(&xs, &ys).expect("computable fit");

    assert_relative_eq!(line.slope, -0.08, epsilon = 1e-9);
    assert_relative_eq!(line.intercept, 92.0, epsilon = 1e-9);
}

/// Test recovery when x values are unordered.
///
/// Verifies the fit does not depend on sorted input.
#[test]
fn test_fit_line_unordered_input() {
    let xs = [3.0, 0.0, 2.0, 1.0];
    let ys = [91.5, 90.0, 91.0, 90.5];

    let line = fit_line(&xs, &ys).expect("computable fit");

    assert_relative_eq!(line.slope, 0.5, epsilon = 1e-9);
    assert_relative_eq!(line.intercept, 90.0, epsilon = 1e-9);
}

// ============================================================================
// Degenerate Cases
// ============================================================================

/// Test the minimum-sample floor.
///
/// Verifies that zero, one, or two pairs report no result, and that the
/// floor constant matches the boundary.
#[test]
fn test_fit_line_too_few_points() {
    assert_eq!(MIN_SAMPLES_FOR_FIT, 3);

    let xs = [0.0, 1.0];
    let ys = [90.0, 90.5];

    assert_eq!(fit_line::<f64>(&[], &[]), None);
    assert_eq!(fit_line(&xs[..1], &ys[..1]), None);
    assert_eq!(fit_line(&xs, &ys), None);
}

/// Test the zero-variance degenerate case.
///
/// Verifies that identical x values report no result rather than a
/// division fault.
#[test]
fn test_fit_line_zero_variance() {
    let xs = [5.0, 5.0, 5.0, 5.0];
    let ys = [90.0, 90.5, 91.0, 91.5];

    assert_eq!(fit_line(&xs, &ys), None);
}

// ============================================================================
// Noisy Data
// ============================================================================

/// Test the fit on data with symmetric noise.
///
/// Verifies the trend survives alternating perturbations: symmetric noise
/// around a known line keeps the coefficients close to it.
#[test]
fn test_fit_line_noisy_trend() {
    let slope = 0.5;
    let intercept = 90.0;

    let xs: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let ys: Vec<f64> = xs
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let noise = if i % 2 == 0 { 0.05 } else { -0.05 };
            intercept + slope * x + noise
        })
        .collect();

    let line = fit_line(&xs, &ys).expect("computable fit");

    assert_relative_eq!(line.slope, slope, epsilon = 0.02);
    assert_relative_eq!(line.intercept, intercept, epsilon = 0.1);
}

/// Test the generic fit at single precision.
///
/// Verifies the fitter works for `f32` with a proportionally looser
/// tolerance.
#[test]
fn test_fit_line_f32() {
    let xs: Vec<f32> = (0..5).map(|i| i as f32).collect();
    let ys: Vec<f32> = xs.iter().map(|&x| 88.0 + 0.25 * x).collect();

    let line = fit_line(&xs, &ys).expect("computable fit");

    assert_relative_eq!(line.slope, 0.25f32, epsilon = 1e-3);
    assert_relative_eq!(line.intercept, 88.0f32, epsilon = 1e-2);
}
