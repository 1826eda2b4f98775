//! Tests for accurate-lap filtering.
//!
//! These tests verify that the filter selects exactly the laps belonging
//! to the requested driver and stint, drops flagged laps, and preserves
//! input order.

use stintfit::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

/// Build a lap record with the fields the filter inspects.
fn lap(driver: &str, stint: u32, lap_number: u32, tyre_age: u32, is_accurate: bool) -> LapRecord {
    LapRecord {
        driver: driver.to_string(),
        lap_number,
        stint,
        compound: "MEDIUM".to_string(),
        tyre_age,
        lap_time_seconds: 90.0,
        position: Some(1),
        is_accurate,
    }
}

// ============================================================================
// Tests
// ============================================================================

/// Test selection by driver, stint, and accuracy flag.
///
/// Verifies that only accurate laps of the requested driver and stint
/// survive.
#[test]
fn test_accurate_laps_selects_matching() {
    let laps = vec![
        lap("VER", 1, 1, 0, true),
        lap("VER", 1, 2, 1, false),
        lap("VER", 2, 3, 0, true),
        lap("HAM", 1, 1, 0, true),
        lap("VER", 1, 4, 3, true),
    ];

    let sample = accurate_laps(&laps, "VER", 1);

    assert_eq!(sample.len(), 2);
    assert_eq!(sample[0].lap_number, 1);
    assert_eq!(sample[1].lap_number, 4);
}

/// Test that input order is preserved.
///
/// Verifies the sample keeps the order of the session records even when
/// tire ages are unordered.
#[test]
fn test_accurate_laps_preserves_order() {
    let laps = vec![
        lap("VER", 1, 7, 6, true),
        lap("VER", 1, 3, 2, true),
        lap("VER", 1, 5, 4, true),
    ];

    let sample = accurate_laps(&laps, "VER", 1);

    let ages: Vec<u32> = sample.iter().map(|lap| lap.tyre_age).collect();
    assert_eq!(ages, vec![6, 2, 4]);
}

/// Test the empty results.
///
/// Verifies that an unknown driver, an unknown stint, and an empty
/// session all produce an empty sample.
#[test]
fn test_accurate_laps_empty_cases() {
    let laps = vec![lap("VER", 1, 1, 0, true)];

    assert!(accurate_laps(&laps, "BOT", 1).is_empty());
    assert!(accurate_laps(&laps, "VER", 2).is_empty());
    assert!(accurate_laps(&[], "VER", 1).is_empty());
}

/// Test that flagged laps are dropped even when nothing else matches.
///
/// Verifies a stint consisting solely of inaccurate laps filters to an
/// empty sample.
#[test]
fn test_accurate_laps_all_inaccurate() {
    let laps = vec![
        lap("VER", 1, 1, 0, false),
        lap("VER", 1, 2, 1, false),
        lap("VER", 1, 3, 2, false),
    ];

    assert!(accurate_laps(&laps, "VER", 1).is_empty());
}
