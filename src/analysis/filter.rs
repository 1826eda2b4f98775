//! Accurate-lap selection for one driver/stint pair.
//!
//! ## Purpose
//!
//! This module provides the leaf filtering step of the pipeline: out of a
//! full session's laps, select the ones belonging to a given driver and
//! stint that the upstream provider flagged as accurate.
//!
//! ## Design notes
//!
//! * **Borrowed views**: the sample borrows the caller's records; nothing is
//!   cloned and nothing outlives the fitting call it feeds.
//! * **Order preserving**: matches come back in input order.
//!
//! ## Invariants
//!
//! * Never fails; an empty sample is a valid result and simply signals
//!   insufficient data downstream.
//!
//! ## Non-goals
//!
//! * This module does not judge sample size or tire-age spread; the fitter
//!   owns those decisions.

// Internal dependencies
use crate::primitives::record::LapRecord;

// ============================================================================
// Stint Sample
// ============================================================================

/// Filtered view of one stint: the accurate laps shared by a driver/stint
/// pair. Ephemeral by design; it borrows from the caller's lap collection
/// and lives only as long as the fitting call it feeds.
pub type StintSample<'a> = Vec<&'a LapRecord>;

// ============================================================================
// Accurate Lap Filter
// ============================================================================

/// Select the accurate laps of one driver/stint pair, in input order.
pub fn accurate_laps<'a>(laps: &'a [LapRecord], driver: &str, stint: u32) -> StintSample<'a> {
    laps.iter()
        .filter(|lap| lap.driver == driver && lap.stint == stint && lap.is_accurate)
        .collect()
}
