//! Input validation for window configuration and samples.
//!
//! ## Purpose
//!
//! This module provides the upfront checks applied before a window is
//! constructed or a validated sample is accepted, with clear errors naming
//! the offending values.
//!
//! ## Design notes
//!
//! * Validation is fail-fast: each check returns on the first violation.
//! * Validation is generic over `Float` types to support f32 and f64.
//! * Checks are deterministic and side-effect free.
//!
//! ## Validated parameters
//!
//! * **Capacity**: at least 1 (a zero-capacity window could retain nothing)
//! * **Samples**: finite (no NaN or infinity), for validated pushes only
//!
//! ## Non-goals
//!
//! * This module does not correct invalid inputs.
//! * This module does not validate slice ranges; that lives with the range
//!   resolution in the primitives layer.
//!
//! ## Visibility
//!
//! Used by the window layer; public for callers that want to pre-validate.

use crate::primitives::errors::WindowError;
use num_traits::Float;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for window configuration and samples.
///
/// Provides static methods returning `Result<(), WindowError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the maximum capacity of a window.
    pub fn validate_capacity(capacity: usize) -> Result<(), WindowError> {
        if capacity == 0 {
            return Err(WindowError::InvalidCapacity { got: capacity });
        }
        Ok(())
    }

    /// Validate that a sample is finite.
    pub fn validate_sample<T: Float>(value: T) -> Result<(), WindowError> {
        if !value.is_finite() {
            return Err(WindowError::NonFiniteSample(
                value.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }
}
