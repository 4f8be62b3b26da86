// SPDX-License-Identifier: MPL-2.0
//! Slider domain types.
//!
//! Value objects describing the paged sequence and its geometry, independent
//! of the GUI toolkit and of how images are decoded.

pub mod geometry;
pub mod page;

pub use geometry::{DeviceClass, ScrollRange, SurfaceSize};
pub use page::{LoadState, Page, PageSet};
