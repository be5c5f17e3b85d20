//! Bounded sliding window over real-valued streams.
//!
//! ## Purpose
//!
//! This crate maintains a fixed-capacity FIFO window over a stream of numeric
//! samples, keeping the running sum and the cached minimum/maximum (with their
//! positions) up to date as samples are pushed in and old ones evicted. On top
//! of the aggregates it offers min-max normalization of any sub-range of the
//! window into `[0, 1]`, and element-wise mapping into a new, independent
//! window.
//!
//! ## Design notes
//!
//! * **Single-owner**: a window is a plain owned value, mutated synchronously
//!   by one caller. No interior mutability, no locking.
//! * **Explicit emptiness**: the empty state is an absent aggregate, never a
//!   sentinel value, so legitimate zero-valued samples are ordinary data.
//! * **Recompute on push**: extremes are rescanned from the retained sequence
//!   on every push, O(len) per push. Capacities are expected to be small
//!   (tens of elements).
//! * **Generic precision**: every value-bearing type is generic over
//!   [`num_traits::Float`], so `f32` and `f64` behave identically.
//! * **`no_std` ready**: disable the default `std` feature to build against
//!   `core` + `alloc` (enable `libm` for float intrinsics there).
//!
//! ## Key concepts
//!
//! ### Sliding Window
//!
//! ```text
//! Initial state (capacity=5):
//! Buffer: [_, _, _, _, _]
//!
//! After 3 pushes:
//! Buffer: [x1, x2, x3, _, _]
//!
//! After 7 pushes (oldest evicted):
//! Buffer: [x3, x4, x5, x6, x7]
//!         ↑ oldest    newest ↑
//! ```
//!
//! ### Normalization
//!
//! A sub-range is selected by a possibly-negative start index (`-1` is the
//! newest element) and a count, then each value `v` is rescaled to
//! `(v - min) / (max - min)` using the *window-global* extremes. When the
//! window is flat (`max == min`) every output element is `1.0`.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Window (sliding)
//!   ↓
//! Layer 2: Engine (extremes, validator)
//!   ↓
//! Layer 1: Primitives (errors, range)
//! ```
//!
//! ## Example
//!
//! ```
//! use rollnorm::prelude::*;
//!
//! let mut window = SlidingWindow::with_capacity(5)?;
//! for sample in 1..=10 {
//!     window.push(sample as f64);
//! }
//!
//! assert_eq!(window.to_vec(), [6.0, 7.0, 8.0, 9.0, 10.0]);
//! assert_eq!(window.min()?, 6.0);
//! assert_eq!(window.max()?, 10.0);
//! assert_eq!(window.mean()?, 8.0);
//! assert_eq!(window.normalized_slice(0, 3)?, [0.0, 0.25, 0.5]);
//! assert_eq!(window.normalized_slice(-1, 1)?, [1.0]);
//! # Ok::<(), WindowError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

use core::result;

/// Layer 1: core building blocks (errors, range resolution).
pub mod primitives;

/// Layer 2: aggregate recomputation and input validation.
pub mod engine;

/// Layer 3: the user-facing sliding window type.
pub mod window;

pub use crate::primitives::errors::WindowError;
pub use crate::window::sliding::SlidingWindow;

/// Result type alias for window operations.
pub type Result<T> = result::Result<T, WindowError>;

/// Convenience re-exports for typical usage.
pub mod prelude {
    pub use crate::primitives::errors::WindowError;
    pub use crate::window::sliding::SlidingWindow;
    pub use crate::Result;
}
