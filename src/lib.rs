//! # stintfit: tire degradation analysis for motorsport lap data
//!
//! Estimates, per driver and per tire stint, how quickly lap times degrade
//! as tires age and the theoretical best lap a fresh tire could produce,
//! then projects the total time a future run of laps will cost.
//!
//! ## What it computes
//!
//! A stint is a contiguous run of laps on one tire set. Over the laps of a
//! stint flagged accurate by the upstream telemetry provider, lap time is
//! modeled as a line in tire age:
//!
//! ```text
//! lap_time = theoretical_best + degradation_rate * tyre_age
//! ```
//!
//! fitted by closed-form ordinary least squares. The slope is the per-lap
//! degradation rate in seconds (fuel-burn-dominated stints legitimately fit
//! negative); the intercept is the modeled lap time at zero tire age. A
//! separate projection sums the modeled lap times over a future run of laps
//! starting from any tire age.
//!
//! **Pipeline:**
//!
//! 1. Filter a stint's laps down to the accurate ones.
//! 2. Fit lap time against tire age in a single pass.
//! 3. Read the slope as the degradation rate and the intercept as the
//!    theoretical best.
//! 4. Project future stint time from the two coefficients.
//!
//! ## Quick Start
//!
//! ### Whole-session sweep
//!
//! ```rust
//! use stintfit::prelude::*;
//!
//! fn lap(stint: u32, tyre_age: u32, lap_time_seconds: f64) -> LapRecord {
//!     LapRecord {
//!         driver: "VER".to_string(),
//!         lap_number: tyre_age + 1,
//!         stint,
//!         compound: "SOFT".to_string(),
//!         tyre_age,
//!         lap_time_seconds,
//!         position: Some(1),
//!         is_accurate: true,
//!     }
//! }
//!
//! let laps: Vec<LapRecord> = (0..5)
//!     .map(|i| lap(1, i, 90.0 + 0.12 * f64::from(i)))
//!     .collect();
//!
//! let analysis = analyze_session(&laps)?;
//! assert_eq!(analysis.len(), 1);
//!
//! println!("{}", analysis);
//! # Ok::<(), AnalysisError>(())
//! ```
//!
//! ```text
//! Summary:
//!   Stints analyzed: 1
//!
//!   Driver   Stint  Compound      Deg (s/lap)  Theo Best (s)   Laps
//!   ----------------------------------------------------------------
//!   VER          1  SOFT               0.1200         90.000      5
//! ```
//!
//! ### Per-stint estimates and projection
//!
//! ```rust
//! use stintfit::prelude::*;
//!
//! # fn lap(stint: u32, tyre_age: u32, lap_time_seconds: f64) -> LapRecord {
//! #     LapRecord {
//! #         driver: "VER".to_string(),
//! #         lap_number: tyre_age + 1,
//! #         stint,
//! #         compound: "SOFT".to_string(),
//! #         tyre_age,
//! #         lap_time_seconds,
//! #         position: Some(1),
//! #         is_accurate: true,
//! #     }
//! # }
//! let laps: Vec<LapRecord> = (0..5)
//!     .map(|i| lap(1, i, 90.0 + 0.12 * f64::from(i)))
//!     .collect();
//!
//! let rate = estimate_degradation(&laps, "VER", 1)?.expect("enough accurate laps");
//! let best = estimate_theoretical_best(&laps, "VER", 1)?.expect("enough accurate laps");
//! assert!((rate - 0.12).abs() < 1e-9);
//! assert!((best - 90.0).abs() < 1e-9);
//!
//! // Price the next 10 laps on this tire set.
//! let projected = predict_stint_time(best, rate, 5, 10)?;
//! assert!((projected - (10.0 * best + rate * (10.0 * 5.0 + 45.0))).abs() < 1e-9);
//! # Ok::<(), AnalysisError>(())
//! ```
//!
//! ### Results and Error Handling
//!
//! Fitting operations return `Result<Option<_>, AnalysisError>`:
//!
//! - **`Ok(Some(..))`**: a fitted result.
//! - **`Ok(None)`**: not computable. Fewer than three accurate laps, or no
//!   tire-age spread. An expected, common outcome (a one-lap pit stint);
//!   check and skip.
//! - **`Err(AnalysisError)`**: a contract violation such as a negative lap
//!   count or a non-finite value. A caller bug, never silently downgraded
//!   to `Ok(None)`.
//!
//! ```rust
//! use stintfit::prelude::*;
//!
//! // Two laps cannot support a trend: an absent value, not an error.
//! assert_eq!(fit_lap_trend(&[0.0, 1.0], &[90.0, 90.5])?, None);
//!
//! // A negative lap count is a contract violation: an error, loudly.
//! assert!(predict_stint_time(90.0, 0.5, 5, -1).is_err());
//! # Ok::<(), AnalysisError>(())
//! ```
//!
//! ## Concurrency
//!
//! Every component is a pure, synchronous function over caller-owned
//! values, with no shared state and no I/O. Calls for different
//! (driver, stint) pairs may run concurrently with no coordination.
//!
//! ## Scope
//!
//! The crate is an in-process computation library. Telemetry retrieval and
//! caching, chart rendering, and assistant state belong to external
//! collaborators; `LapRecord` carries serde renames matching the upstream
//! exporter's column names so records cross that boundary cleanly.

#![deny(missing_docs)]

// ============================================================================
// Modules
// ============================================================================

// Layer 1: Primitives - value types and the error taxonomy.
//
// Contains the lap record as exported by the upstream telemetry provider
// and the `AnalysisError` contract-violation enum.
pub mod primitives;

// Layer 2: Math - pure numeric routines.
//
// Contains the generic closed-form ordinary-least-squares line fit.
pub mod math;

// Layer 3: Engine - fail-fast input validation.
//
// Contains the `Validator` every public entry point routes its contract
// checks through.
pub mod engine;

// Layer 4: Analysis - the domain components.
//
// Contains the accurate-lap filter, the degradation/best-lap estimators,
// and the stint time projection.
pub mod analysis;

// Layer 5: Adapters - batch aggregation over whole sessions.
//
// Contains the session analyzer sweeping every (driver, stint) cell into a
// sorted, renderable table.
pub mod adapters;

// Layer 6: API - top-level convenience entry points.
//
// Provides `fit_lap_trend`, `analyze_stint`, and `analyze_session`.
pub mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard stint-analysis prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types and entry points:
///
/// ```
/// use stintfit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapters::session::{
        SessionAnalysis, SessionAnalyzer, SessionAnalyzerBuilder, StintReport,
    };
    pub use crate::analysis::degradation::{
        estimate_degradation, estimate_theoretical_best, fit_stint_sample, DegradationModel,
    };
    pub use crate::analysis::filter::{accurate_laps, StintSample};
    pub use crate::analysis::projection::predict_stint_time;
    pub use crate::api::{analyze_session, analyze_stint, fit_lap_trend};
    pub use crate::math::ols::{TrendLine, MIN_SAMPLES_FOR_FIT};
    pub use crate::primitives::errors::AnalysisError;
    pub use crate::primitives::record::LapRecord;
}
