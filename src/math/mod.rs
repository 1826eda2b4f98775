//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric routines used by the analysis:
//! - Closed-form ordinary least squares line fitting
//!
//! These are reusable mathematical building blocks with no domain-specific
//! logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Analysis
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Ordinary least squares line fitting.
pub mod ols;
