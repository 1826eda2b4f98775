//! Lap record value type.
//!
//! ## Purpose
//!
//! This module defines `LapRecord`, one observed lap as exported by the
//! upstream telemetry provider. It is the sole input shape of the
//! record-based analysis pipeline.
//!
//! ## Design notes
//!
//! * **Fixed, typed fields**: replaces the provider's dynamic tabular rows
//!   with explicit fields, so filtering is predicate application rather than
//!   column indexing.
//! * **Interop**: serde renames map each field to the provider's column
//!   name, so records round-trip through the tabular exports the surrounding
//!   system produces. Unknown columns are ignored on deserialization.
//!
//! ## Invariants
//!
//! * Records are immutable value types; the analysis never retains
//!   references to them across calls.
//!
//! ## Non-goals
//!
//! * This module does not fetch, cache, or validate telemetry; records
//!   arrive already produced by an external collaborator.

// External dependencies
use serde::{Deserialize, Serialize};

// ============================================================================
// LapRecord
// ============================================================================

/// One observed lap.
///
/// `lap_number` and `position` are auxiliary context carried through from
/// the provider; the core math reads only `tyre_age`, `lap_time_seconds`,
/// and the three grouping fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapRecord {
    /// Driver identifier (three-letter code in upstream exports).
    #[serde(rename = "Driver")]
    pub driver: String,

    /// Lap number within the session.
    #[serde(rename = "LapNumber")]
    pub lap_number: u32,

    /// Stint index grouping consecutive laps on one tire set.
    #[serde(rename = "Stint")]
    pub stint: u32,

    /// Tire compound label.
    #[serde(rename = "Compound")]
    pub compound: String,

    /// Laps completed since the current tire set was fitted.
    #[serde(rename = "TyreLife")]
    pub tyre_age: u32,

    /// Lap time in seconds.
    #[serde(rename = "LapTimeSeconds")]
    pub lap_time_seconds: f64,

    /// Track position at the end of the lap, when known.
    #[serde(rename = "Position")]
    pub position: Option<u32>,

    /// Reliability flag set by the upstream provider; laps affected by pit
    /// entry/exit or neutralizations come through as `false`.
    #[serde(rename = "IsAccurate")]
    pub is_accurate: bool,
}
