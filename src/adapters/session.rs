//! Session adapter for whole-session stint analysis.
//!
//! ## Purpose
//!
//! This module sweeps a full session's laps, fits every (driver, stint)
//! cell once, and collects the computable cells into a sorted result table.
//! It is the batch layer the surrounding presentation and assistant
//! collaborators consume.
//!
//! ## Design notes
//!
//! * **Skip, don't fail**: cells without a computable model are an expected
//!   outcome (one-lap pit stints, zero tire-age spread) and are skipped with
//!   a `debug!` event; only contract violations abort the sweep.
//! * **One fit per cell**: each cell's degradation rate and theoretical best
//!   come from the same model, never from two fits.
//! * **Embarrassingly parallel shape**: every cell is independent; the sweep
//!   is a plain map with no ordering dependency between cells.
//!
//! ## Key concepts
//!
//! * **Sample floor**: fitted stints with fewer accurate laps than the
//!   configured floor are dropped from the table. The floor may be raised
//!   above the fitter's minimum for noisier sessions, never lowered below it.
//! * **Checks outrank the floor**: contract validation runs before any skip
//!   decision, so a non-finite lap time in a sub-floor cell is an error,
//!   never a silent skip. Every entry point agrees on this precedence.
//!
//! ## Invariants
//!
//! * Rows come back sorted by (driver, stint).
//! * A row's compound is the one on the first accurate lap of its sample.
//!
//! ## Non-goals
//!
//! * This adapter does not fetch or cache telemetry.
//! * This adapter does not render charts; its `Display` output is a plain
//!   text table.

// External dependencies
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, trace};

// Internal dependencies
use crate::analysis::degradation::fit_stint_sample;
use crate::analysis::filter::accurate_laps;
use crate::engine::validator::Validator;
use crate::math::ols::MIN_SAMPLES_FOR_FIT;
use crate::primitives::errors::AnalysisError;
use crate::primitives::record::LapRecord;

// ============================================================================
// Stint Report
// ============================================================================

/// One row of the aggregated session analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StintReport {
    /// Driver identifier.
    pub driver: String,

    /// Stint index.
    pub stint: u32,

    /// Tire compound, taken from the first accurate lap of the stint.
    pub compound: String,

    /// Fitted per-lap degradation rate (s/lap).
    pub degradation_rate: f64,

    /// Fitted theoretical best lap time (s).
    pub theoretical_best: f64,

    /// Number of accurate laps behind the fit.
    pub accurate_laps: usize,
}

// ============================================================================
// Session Analyzer Builder
// ============================================================================

/// Builder for [`SessionAnalyzer`].
#[derive(Debug, Clone)]
pub struct SessionAnalyzerBuilder {
    /// Minimum accurate laps a fitted stint needs to be reported.
    pub min_samples: usize,
}

impl Default for SessionAnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionAnalyzerBuilder {
    /// Create a builder with the default sample floor.
    fn new() -> Self {
        Self {
            min_samples: MIN_SAMPLES_FOR_FIT,
        }
    }

    /// Set the minimum accurate laps a fitted stint needs to be reported.
    pub fn min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples;
        self
    }

    /// Build the analyzer.
    pub fn build(self) -> Result<SessionAnalyzer, AnalysisError> {
        // Validate the sample floor
        Validator::validate_min_samples(self.min_samples)?;

        Ok(SessionAnalyzer {
            min_samples: self.min_samples,
        })
    }
}

// ============================================================================
// Session Analyzer
// ============================================================================

/// Sweeps a session's laps and fits every (driver, stint) cell.
#[derive(Debug, Clone)]
pub struct SessionAnalyzer {
    min_samples: usize,
}

impl Default for SessionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionAnalyzer {
    /// Create an analyzer with the default sample floor.
    pub fn new() -> Self {
        Self {
            min_samples: MIN_SAMPLES_FOR_FIT,
        }
    }

    /// Start building an analyzer with a custom configuration.
    pub fn builder() -> SessionAnalyzerBuilder {
        SessionAnalyzerBuilder::new()
    }

    /// Analyze every (driver, stint) pair in the lap collection.
    ///
    /// Cells without a computable model are skipped, and fitted cells below
    /// the configured floor are dropped. Contract violations (non-finite
    /// lap times) abort the sweep and surface unchanged, even from cells
    /// the floor would drop. Rows come back sorted by (driver, stint).
    pub fn analyze(&self, laps: &[LapRecord]) -> Result<SessionAnalysis, AnalysisError> {
        let mut reports = Vec::new();

        for (driver, stint) in stint_keys(laps) {
            let sample = accurate_laps(laps, &driver, stint);

            // Fit before applying the floor; contract checks inside the fit
            // must see every cell.
            let model = match fit_stint_sample(&sample)? {
                Some(model) => model,
                None => {
                    debug!(driver = %driver, stint, "skipping stint with no computable trend");
                    continue;
                }
            };

            if model.sample_count < self.min_samples {
                debug!(
                    driver = %driver,
                    stint,
                    laps = model.sample_count,
                    "skipping stint below sample floor"
                );
                continue;
            }

            trace!(
                driver = %driver,
                stint,
                slope = model.slope,
                intercept = model.intercept,
                "fitted stint"
            );

            reports.push(StintReport {
                driver,
                stint,
                compound: sample[0].compound.clone(),
                degradation_rate: model.degradation_rate(),
                theoretical_best: model.theoretical_best(),
                accurate_laps: model.sample_count,
            });
        }

        Ok(SessionAnalysis { reports })
    }
}

/// Distinct (driver, stint) pairs present in the collection, sorted.
fn stint_keys(laps: &[LapRecord]) -> Vec<(String, u32)> {
    let keys: BTreeSet<(String, u32)> = laps
        .iter()
        .map(|lap| (lap.driver.clone(), lap.stint))
        .collect();
    keys.into_iter().collect()
}

// ============================================================================
// Session Analysis
// ============================================================================

/// Aggregated per-stint analysis for a whole session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionAnalysis {
    /// One report per computable (driver, stint) cell, sorted by key.
    pub reports: Vec<StintReport>,
}

impl SessionAnalysis {
    /// Number of computable stints.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether no stint produced a computable model.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl fmt::Display for SessionAnalysis {
    /// Render the analysis as an aligned plain-text table, the form handed
    /// to the assistant collaborator as context.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Stints analyzed: {}", self.reports.len())?;
        writeln!(f)?;

        if self.reports.is_empty() {
            return writeln!(f, "No stints with sufficient data.");
        }

        writeln!(
            f,
            "  {:<8} {:>5}  {:<12} {:>12} {:>14} {:>6}",
            "Driver", "Stint", "Compound", "Deg (s/lap)", "Theo Best (s)", "Laps"
        )?;
        writeln!(f, "  {}", "-".repeat(64))?;

        for report in &self.reports {
            writeln!(
                f,
                "  {:<8} {:>5}  {:<12} {:>12.4} {:>14.3} {:>6}",
                report.driver,
                report.stint,
                report.compound,
                report.degradation_rate,
                report.theoretical_best,
                report.accurate_laps,
            )?;
        }

        Ok(())
    }
}
