//! Layer 2: Engine
//!
//! Aggregate maintenance and input validation.
//!
//! This layer holds the logic that keeps a window's cached aggregates honest:
//! the front-to-back extremes scan, and the upfront checks applied to
//! construction parameters and incoming samples.
//!
//! # Module Organization
//!
//! - **extremes**: Min/max recomputation over the retained sequence
//! - **validator**: Capacity and sample validation rules
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Window (sliding)
//!   ↓
//! Layer 2: Engine ← You are here
//!   ↓
//! Layer 1: Primitives (errors, range)
//! ```

/// Extreme-value recomputation.
///
/// Provides:
/// - The `Extremes` aggregate bundle (min/max with positions)
/// - A single front-to-back scan with latest-wins tie-breaking
pub mod extremes;

/// Validation utilities.
///
/// Provides:
/// - Capacity bound validation
/// - Finite-sample checks for validated pushes
pub mod validator;
