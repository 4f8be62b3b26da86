// SPDX-License-Identifier: MPL-2.0
//! Surface sizing and scroll bounds.

use crate::config::defaults::{
    COMPACT_SURFACE_HEIGHT, COMPACT_SURFACE_WIDTH, STANDARD_SURFACE_HEIGHT,
    STANDARD_SURFACE_WIDTH,
};

// =============================================================================
// DeviceClass
// =============================================================================

/// Size profile of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    /// Phone-sized viewports (320×200 surface).
    Compact,
    /// Everything else (640×400 surface).
    #[default]
    Standard,
}

impl DeviceClass {
    /// Picks the profile for a viewport width measured at construction time.
    #[must_use]
    pub fn from_viewport_width(viewport_width: u32, compact_breakpoint: u32) -> Self {
        if viewport_width <= compact_breakpoint {
            DeviceClass::Compact
        } else {
            DeviceClass::Standard
        }
    }

    #[must_use]
    pub fn surface_size(self) -> SurfaceSize {
        match self {
            DeviceClass::Compact => SurfaceSize::COMPACT,
            DeviceClass::Standard => SurfaceSize::STANDARD,
        }
    }
}

// =============================================================================
// SurfaceSize
// =============================================================================

/// Pixel dimensions of the drawing surface, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    width: u32,
    height: u32,
}

impl SurfaceSize {
    pub const COMPACT: Self = Self {
        width: COMPACT_SURFACE_WIDTH,
        height: COMPACT_SURFACE_HEIGHT,
    };

    pub const STANDARD: Self = Self {
        width: STANDARD_SURFACE_WIDTH,
        height: STANDARD_SURFACE_HEIGHT,
    };

    /// Creates a surface size; zero dimensions are raised to one pixel.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }

    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn width_f32(self) -> f32 {
        self.width as f32
    }

    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn height_f32(self) -> f32 {
        self.height as f32
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        DeviceClass::default().surface_size()
    }
}

// =============================================================================
// ScrollRange
// =============================================================================

/// Valid offsets for a sequence of pages: `[-(pages - 1) * width, 0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    min_offset: f32,
    page_width: f32,
}

impl ScrollRange {
    /// An empty or single-page sequence cannot scroll: the range is `[0, 0]`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(page_count: usize, page_width: f32) -> Self {
        let scrollable_pages = page_count.saturating_sub(1) as f32;
        Self {
            min_offset: -scrollable_pages * page_width,
            page_width,
        }
    }

    /// Offset at which the last page is fully visible.
    #[must_use]
    pub fn min_offset(&self) -> f32 {
        self.min_offset
    }

    #[must_use]
    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    /// Clamps a raw offset into the range.
    ///
    /// `min_offset` is applied last so the end of the sequence is the harder
    /// limit when both bounds would apply.
    #[must_use]
    pub fn clamp(&self, raw: f32) -> f32 {
        raw.min(0.0).max(self.min_offset)
    }

    #[must_use]
    pub fn contains(&self, offset: f32) -> bool {
        offset <= 0.0 && offset >= self.min_offset
    }
}
