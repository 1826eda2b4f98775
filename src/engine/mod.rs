//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer provides fail-fast input validation. Every public entry point
//! routes its contract checks through the `Validator` before any arithmetic
//! runs.
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
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fail-fast input validation.
pub mod validator;
