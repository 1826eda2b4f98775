//! Layer 4: Analysis
//!
//! # Purpose
//!
//! This layer holds the domain components of the pipeline:
//! - Accurate-lap filtering for a driver/stint pair
//! - The per-stint degradation model and its two estimators
//! - Stint time projection from fitted coefficients
//!
//! All components are pure, synchronous functions over caller-owned values;
//! they share no state and may run concurrently for different
//! (driver, stint) pairs without coordination.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Analysis ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Accurate-lap selection.
pub mod filter;

/// Degradation model and estimators.
pub mod degradation;

/// Stint time projection.
pub mod projection;
