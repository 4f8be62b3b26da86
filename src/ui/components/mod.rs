// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components around the slider.
//!
//! # Components
//!
//! - [`placeholder`] - Skeleton shown until the first pages are ready
//! - [`error_display`] - Fallback rendered by the error boundary

pub mod error_display;
pub mod placeholder;
