//! Layer 3: Window
//!
//! The user-facing sliding window type.
//!
//! This layer ties the engine's aggregate scan and validation rules to a
//! bounded FIFO buffer, exposing pushes, aggregate queries, normalized slice
//! extraction, and element-wise mapping.
//!
//! # Module Organization
//!
//! - **sliding**: The `SlidingWindow` type and its operations
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Window ← You are here
//!   ↓
//! Layer 2: Engine (extremes, validator)
//!   ↓
//! Layer 1: Primitives (errors, range)
//! ```

/// The bounded sliding window.
///
/// Provides:
/// - FIFO pushes with automatic eviction past capacity
/// - Running sum and cached min/max with positions
/// - Min-max normalized sub-range extraction
/// - Element-wise mapping into a new window
pub mod sliding;
