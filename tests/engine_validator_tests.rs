//! Tests for input validation.
//!
//! These tests verify that every malformed input is rejected with the
//! specific error variant the public API documents, and that well-formed
//! input passes through untouched.

use stintfit::engine::validator::Validator;
use stintfit::prelude::*;

// ============================================================================
// Series Validation
// ============================================================================

/// Test acceptance of a well-formed series pair.
///
/// Verifies that matching finite series validate cleanly.
#[test]
fn test_validate_series_ok() {
    let ages = [0.0, 1.0, 2.0, 3.0];
    let times = [90.0, 90.5, 91.0, 91.5];

    assert!(Validator::validate_series(&ages, &times).is_ok());
}

/// Test rejection of mismatched series lengths.
///
/// Verifies the error reports both lengths.
#[test]
fn test_validate_series_mismatched_lengths() {
    let ages = [0.0, 1.0, 2.0, 3.0];
    let times = [90.0, 90.5, 91.0];

    let err = Validator::validate_series(&ages, &times).unwrap_err();

    assert_eq!(
        err,
        AnalysisError::MismatchedSeries {
            ages_len: 4,
            times_len: 3,
        }
    );
}

/// Test rejection of a NaN tire age.
///
/// Verifies the error names the offending element.
#[test]
fn test_validate_series_nan_age() {
    let ages = [0.0, f64::NAN, 2.0];
    let times = [90.0, 90.5, 91.0];

    let err = Validator::validate_series(&ages, &times).unwrap_err();

    match err {
        AnalysisError::NonFiniteInput { name, value } => {
            assert_eq!(name, "tyre_ages[1]");
            assert!(value.is_nan());
        }
        other => panic!("expected NonFiniteInput, got {:?}", other),
    }
}

/// Test rejection of an infinite lap time.
///
/// Verifies infinities are caught in the second series as well.
#[test]
fn test_validate_series_infinite_time() {
    let ages = [0.0, 1.0, 2.0];
    let times = [90.0, 90.5, f64::INFINITY];

    let err = Validator::validate_series(&ages, &times).unwrap_err();

    assert_eq!(
        err,
        AnalysisError::NonFiniteInput {
            name: "lap_times[2]".to_string(),
            value: f64::INFINITY,
        }
    );
}

// ============================================================================
// Scalar Validation
// ============================================================================

/// Test scalar finiteness checks.
///
/// Verifies finite values pass and NaN is rejected under the given name.
#[test]
fn test_validate_scalar() {
    assert!(Validator::validate_scalar(90.0, "theoretical_best").is_ok());
    assert!(Validator::validate_scalar(-0.08, "degradation_rate").is_ok());

    let err = Validator::validate_scalar(f64::NAN, "degradation_rate").unwrap_err();

    match err {
        AnalysisError::NonFiniteInput { name, .. } => {
            assert_eq!(name, "degradation_rate");
        }
        other => panic!("expected NonFiniteInput, got {:?}", other),
    }
}

// ============================================================================
// Projection Argument Validation
// ============================================================================

/// Test lap count validation.
///
/// Verifies zero and positive counts pass and negative counts are
/// rejected.
#[test]
fn test_validate_lap_count() {
    assert!(Validator::validate_lap_count(0).is_ok());
    assert!(Validator::validate_lap_count(57).is_ok());

    let err = Validator::validate_lap_count(-1).unwrap_err();
    assert_eq!(err, AnalysisError::NegativeLapCount(-1));
}

/// Test starting tire age validation.
///
/// Verifies zero and positive ages pass and negative ages are rejected.
#[test]
fn test_validate_start_age() {
    assert!(Validator::validate_start_age(0).is_ok());
    assert!(Validator::validate_start_age(12).is_ok());

    let err = Validator::validate_start_age(-3).unwrap_err();
    assert_eq!(err, AnalysisError::NegativeTyreAge(-3));
}

// ============================================================================
// Analyzer Configuration Validation
// ============================================================================

/// Test the sample floor configuration check.
///
/// Verifies that floors at or above the fitting minimum pass and lower
/// floors are rejected with both bounds reported.
#[test]
fn test_validate_min_samples() {
    assert!(Validator::validate_min_samples(MIN_SAMPLES_FOR_FIT).is_ok());
    assert!(Validator::validate_min_samples(10).is_ok());

    let err = Validator::validate_min_samples(2).unwrap_err();
    assert_eq!(
        err,
        AnalysisError::InvalidMinSamples {
            got: 2,
            min: MIN_SAMPLES_FOR_FIT,
        }
    );
}
