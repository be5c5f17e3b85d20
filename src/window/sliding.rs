//! Bounded FIFO window with cached aggregates.
//!
//! ## Purpose
//!
//! This module provides [`SlidingWindow`], a fixed-capacity sequence of
//! real-valued samples that tracks its running sum and cached extremes as
//! samples are pushed in and the oldest evicted, and that extracts min-max
//! normalized sub-ranges of its contents.
//!
//! ## Design notes
//!
//! * Uses a `VecDeque` for the buffer: pushes append at the back, eviction
//!   pops from the front.
//! * The sum is adjusted incrementally on push and eviction; the extremes are
//!   recomputed by a full scan after every push, so eviction of the element
//!   holding an extreme can never leave a stale cache.
//! * Queries never mutate. `map` builds a new window and leaves the receiver
//!   untouched.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! ### Eviction
//!
//! A push appends exactly one element, so at most one eviction follows it:
//!
//! ```text
//! capacity=3, push(d):
//! [a, b, c] → [a, b, c, d] → [b, c, d]
//!  ↑ evicted
//! ```
//!
//! ### Normalization
//!
//! A sub-range selected by `(start, count)` — `start` may be negative,
//! counting back from the newest element — is rescaled element-wise to
//! `(v - min) / (max - min)` using the *window-global* extremes, so outputs
//! land in `[0, 1]`. A flat window (`max == min`, including the single-element
//! case) yields all `1.0`.
//!
//! ## Invariants
//!
//! * `len() <= capacity()` at all times.
//! * The running sum equals the sum of retained elements (within float
//!   tolerance).
//! * Cached extremes are absent exactly while the window is empty, and
//!   otherwise name values actually present in the buffer.
//! * Insertion order is preserved: oldest at the front, newest at the back.
//!
//! ## Non-goals
//!
//! * This type is not thread-safe; share it behind external synchronization
//!   if needed.
//! * No statistics beyond sum/mean/min/max are maintained.
//! * `push` does not screen for NaN/Inf; use [`SlidingWindow::try_push`] at
//!   untrusted boundaries.
//!
//! ## Visibility
//!
//! `SlidingWindow` is the primary public API, re-exported at the crate root.

#[cfg(not(feature = "std"))]
use alloc::{collections::VecDeque, vec, vec::Vec};

#[cfg(feature = "std")]
use std::{collections::VecDeque, vec::Vec};

use num_traits::Float;

use crate::engine::extremes::{self, Extremes};
use crate::engine::validator::Validator;
use crate::primitives::errors::WindowError;
use crate::primitives::range;

// ============================================================================
// Sliding Window
// ============================================================================

/// Bounded FIFO sequence of real-valued samples with cached aggregates.
#[derive(Debug, Clone)]
pub struct SlidingWindow<T: Float> {
    /// Retained samples, oldest at the front.
    values: VecDeque<T>,

    /// Maximum number of retained samples.
    capacity: usize,

    /// Running sum of the retained samples.
    sum: T,

    /// Cached extremes; absent exactly while the window is empty.
    extremes: Option<Extremes<T>>,
}

impl<T: Float> SlidingWindow<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an empty window retaining at most `capacity` samples.
    ///
    /// Fails with [`WindowError::InvalidCapacity`] when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, WindowError> {
        Validator::validate_capacity(capacity)?;

        Ok(Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
            sum: T::zero(),
            extremes: None,
        })
    }

    /// Clear all samples and aggregates back to the empty state.
    pub fn reset(&mut self) {
        self.values.clear();
        self.sum = T::zero();
        self.extremes = None;
    }

    // ========================================================================
    // Pushing
    // ========================================================================

    /// Append `value` as the newest sample, evicting the oldest once the
    /// capacity is exceeded.
    ///
    /// The running sum is adjusted incrementally; the extremes are recomputed
    /// from the retained sequence, latest element winning ties.
    pub fn push(&mut self, value: T) {
        self.values.push_back(value);
        self.sum = self.sum + value;

        while self.values.len() > self.capacity {
            if let Some(evicted) = self.values.pop_front() {
                self.sum = self.sum - evicted;
            }
        }

        self.extremes = extremes::scan(&self.values);
    }

    /// Append `value` after checking that it is finite.
    ///
    /// Fails with [`WindowError::NonFiniteSample`] on NaN or infinity,
    /// leaving the window untouched.
    pub fn try_push(&mut self, value: T) -> Result<(), WindowError> {
        Validator::validate_sample(value)?;
        self.push(value);
        Ok(())
    }

    // ========================================================================
    // Aggregate Queries
    // ========================================================================

    /// Current number of retained samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the window holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Maximum number of retained samples.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Running sum of the retained samples (zero when empty).
    pub fn sum(&self) -> T {
        self.sum
    }

    /// Smallest retained sample.
    pub fn min(&self) -> Result<T, WindowError> {
        Ok(self.occupied()?.min)
    }

    /// Largest retained sample.
    pub fn max(&self) -> Result<T, WindowError> {
        Ok(self.occupied()?.max)
    }

    /// Index of a sample equal to the minimum, 0-based from the oldest.
    /// Among equal samples, the newest wins.
    pub fn min_position(&self) -> Result<usize, WindowError> {
        Ok(self.occupied()?.min_position)
    }

    /// Index of a sample equal to the maximum, 0-based from the oldest.
    /// Among equal samples, the newest wins.
    pub fn max_position(&self) -> Result<usize, WindowError> {
        Ok(self.occupied()?.max_position)
    }

    /// Arithmetic mean of the retained samples.
    pub fn mean(&self) -> Result<T, WindowError> {
        if self.values.is_empty() {
            return Err(WindowError::EmptyWindow);
        }

        Ok(self.sum / T::from(self.values.len()).unwrap())
    }

    fn occupied(&self) -> Result<&Extremes<T>, WindowError> {
        self.extremes.as_ref().ok_or(WindowError::EmptyWindow)
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    /// Snapshot copy of the retained samples, oldest first.
    ///
    /// The returned vector shares no storage with the window.
    pub fn to_vec(&self) -> Vec<T> {
        self.values.iter().copied().collect()
    }

    /// Borrowing iterator over the retained samples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    /// Extract `count` consecutive samples starting at `start`, rescaled into
    /// `[0, 1]` by the window-global extremes.
    ///
    /// A negative `start` counts back from the newest sample (`-1` is the
    /// newest). Fails with [`WindowError::RangeTooLarge`] when the request
    /// does not fit inside the retained samples. When `max == min`, every
    /// output element is `1.0`.
    pub fn normalized_slice(&self, start: isize, count: usize) -> Result<Vec<T>, WindowError> {
        let range = range::resolve(start, count, self.values.len())?;

        let extremes = match self.extremes {
            Some(extremes) => extremes,
            // Empty window: only the empty range resolves.
            None => return Ok(Vec::new()),
        };

        if extremes.max == extremes.min {
            return Ok(vec![T::one(); range.count]);
        }

        let span = extremes.max - extremes.min;

        Ok(self
            .values
            .iter()
            .skip(range.start)
            .take(range.count)
            .map(|&value| (value - extremes.min) / span)
            .collect())
    }

    // ========================================================================
    // Mapping
    // ========================================================================

    /// Build a new window of the same capacity by passing every retained
    /// sample through `transform`, in order.
    ///
    /// The receiver is left untouched and shares no storage with the result;
    /// the result's aggregates reflect the transformed values.
    pub fn map<F>(&self, transform: F) -> Self
    where
        F: Fn(T) -> T,
    {
        let mut mapped = Self {
            values: VecDeque::with_capacity(self.capacity),
            capacity: self.capacity,
            sum: T::zero(),
            extremes: None,
        };

        for &value in &self.values {
            mapped.push(transform(value));
        }

        mapped
    }
}

impl<T: Float> Extend<T> for SlidingWindow<T> {
    /// Push every sample from `iter`, oldest first, evicting as needed.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
