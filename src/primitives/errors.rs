//! Shared error types for window operations.
//!
//! ## Purpose
//!
//! This module defines the unified error type returned by every fallible
//! operation in the crate: construction, aggregate queries, slice extraction,
//! and validated pushes.
//!
//! ## Design notes
//!
//! * Every variant carries the offending values so messages can name them.
//! * All errors are synchronous and local to the triggering call; nothing is
//!   retried internally and no failure is fatal to the process.
//! * Callers are expected to treat these as programming errors to guard
//!   against (e.g., with a prior length check), not as runtime conditions
//!   needing fallback logic.
//!
//! ## Visibility
//!
//! `WindowError` is part of the public API and re-exported at the crate root.

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Unified error type for sliding-window operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowError {
    /// Construction was attempted with a capacity of zero.
    InvalidCapacity {
        /// The rejected capacity.
        got: usize,
    },

    /// An aggregate query (min/max/position/mean) hit a window holding no
    /// elements.
    EmptyWindow,

    /// A requested slice does not fit inside the retained elements.
    RangeTooLarge {
        /// Requested start index, as given by the caller (may be negative).
        start: isize,
        /// Requested number of elements.
        count: usize,
        /// Current number of retained elements.
        len: usize,
    },

    /// A validated push was given a NaN or infinite sample.
    NonFiniteSample(f64),
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::InvalidCapacity { got } => {
                write!(f, "window capacity must be at least 1, got {}", got)
            }
            WindowError::EmptyWindow => {
                write!(f, "operation requires a non-empty window")
            }
            WindowError::RangeTooLarge { start, count, len } => {
                write!(
                    f,
                    "cannot take {} elements starting at index {} from a window of length {}",
                    count, start, len
                )
            }
            WindowError::NonFiniteSample(value) => {
                write!(f, "sample must be finite, got {}", value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WindowError {}
