//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental value types shared by every other
//! layer:
//! - The lap record as exported by the upstream telemetry provider
//! - The `AnalysisError` contract-violation taxonomy
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Contract-violation error taxonomy.
pub mod errors;

/// Lap record value type.
pub mod record;
