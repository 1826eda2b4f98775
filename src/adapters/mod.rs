//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer batches the per-stint analysis over whole sessions: one sweep
//! across every (driver, stint) cell, skipping cells without a computable
//! model and collecting the rest into a sorted, renderable table.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Analysis
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Whole-session stint analysis.
pub mod session;
