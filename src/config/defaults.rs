// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Surface**: Size profiles per device class
//! - **Loading**: Initial batch and progressive-load divisor
//! - **Input**: Move throttling and touch support
//! - **Window**: Default window geometry

// ==========================================================================
// Surface Defaults
// ==========================================================================

/// Surface width for compact (phone-sized) viewports.
pub const COMPACT_SURFACE_WIDTH: u32 = 320;

/// Surface height for compact (phone-sized) viewports.
pub const COMPACT_SURFACE_HEIGHT: u32 = 200;

/// Surface width for standard viewports.
pub const STANDARD_SURFACE_WIDTH: u32 = 640;

/// Surface height for standard viewports.
pub const STANDARD_SURFACE_HEIGHT: u32 = 400;

/// Viewports at or below this width use the compact profile.
pub const DEFAULT_COMPACT_BREAKPOINT: u32 = 480;

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Number of pages requested when the slider mounts.
pub const DEFAULT_INITIAL_BATCH: usize = 2;

/// Smallest allowed initial batch.
pub const MIN_INITIAL_BATCH: usize = 1;

/// First divisor applied to the minimum offset to place the load threshold.
pub const INITIAL_THRESHOLD_DIVISOR: u32 = 4;

// ==========================================================================
// Input Defaults
// ==========================================================================

/// Default interval between two dispatched pointer moves (about one frame).
pub const DEFAULT_MOVE_THROTTLE_MS: u64 = 16;

/// Minimum move throttle interval.
pub const MIN_MOVE_THROTTLE_MS: u64 = 1;

/// Maximum move throttle interval.
pub const MAX_MOVE_THROTTLE_MS: u64 = 250;

/// Touch listeners are attached unless disabled in the settings.
pub const DEFAULT_TOUCH_ENABLED: bool = true;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(COMPACT_SURFACE_WIDTH < STANDARD_SURFACE_WIDTH);
    assert!(COMPACT_SURFACE_HEIGHT < STANDARD_SURFACE_HEIGHT);
    assert!(MIN_INITIAL_BATCH <= DEFAULT_INITIAL_BATCH);
    assert!(INITIAL_THRESHOLD_DIVISOR >= 1);
    assert!(MIN_MOVE_THROTTLE_MS <= DEFAULT_MOVE_THROTTLE_MS);
    assert!(DEFAULT_MOVE_THROTTLE_MS <= MAX_MOVE_THROTTLE_MS);
};
