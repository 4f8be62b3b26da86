// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Toolkit-independent state machines used by the slider: the drag gesture,
//! the progressive-load frontier, and move throttling.

pub mod drag;
pub mod frontier;
pub mod throttle;

// Re-export commonly used types for convenience
pub use drag::{DragSession, DragState};
pub use frontier::{next_page_to_load, LoadFrontier};
pub use throttle::MoveThrottle;
