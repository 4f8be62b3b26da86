// SPDX-License-Identifier: MPL-2.0
//! Skeleton shown in place of the slider surface until the first pages load.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};
use std::time::Duration;

/// Duration of one shimmer sweep.
pub const SHIMMER_PERIOD: Duration = Duration::from_millis(1200);

const BASE: Color = palette::GRAY_100;
const HIGHLIGHT: Color = Color {
    a: 0.6,
    ..palette::WHITE
};
const BAND_FRACTION: f32 = 0.3;

/// Skeleton block with a moving highlight band.
#[derive(Debug, Clone, Copy)]
pub struct Skeleton {
    /// Position of the highlight, `0.0..1.0` across the width.
    phase: f32,
}

impl Skeleton {
    #[must_use]
    pub fn new(phase: f32) -> Self {
        Self {
            phase: phase.rem_euclid(1.0),
        }
    }

    /// Phase for a skeleton that has been visible for `elapsed`.
    #[must_use]
    pub fn at(elapsed: Duration) -> Self {
        let period = SHIMMER_PERIOD.as_millis();
        #[allow(clippy::cast_precision_loss)]
        let phase = (elapsed.as_millis() % period) as f32 / period as f32;
        Self::new(phase)
    }

    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase
    }
}

impl<Message> canvas::Program<Message> for Skeleton {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let block = Path::rounded_rectangle(Point::ORIGIN, bounds.size(), radius::MD.into());
        frame.fill(&block, BASE);

        // The band starts fully left of the block and ends fully right of it.
        let band_width = bounds.width * BAND_FRACTION;
        let travel = bounds.width + band_width;
        let band_x = self.phase * travel - band_width;
        let band = Path::rectangle(
            Point::new(band_x.max(0.0), 0.0),
            Size::new(
                (band_x + band_width).min(bounds.width) - band_x.max(0.0),
                bounds.height,
            ),
        );
        frame.fill(&band, HIGHLIGHT);

        vec![frame.into_geometry()]
    }
}

/// Skeleton sized exactly like the surface it stands in for.
pub fn view<'a, Message: 'a>(width: f32, height: f32, skeleton: Skeleton) -> Element<'a, Message> {
    Canvas::new(skeleton)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn phase_wraps_into_unit_range() {
        assert_abs_diff_eq!(Skeleton::new(1.25).phase(), 0.25);
        assert_abs_diff_eq!(Skeleton::new(-0.25).phase(), 0.75);
    }

    #[test]
    fn phase_follows_elapsed_time() {
        assert_abs_diff_eq!(Skeleton::at(Duration::ZERO).phase(), 0.0);
        assert_abs_diff_eq!(Skeleton::at(SHIMMER_PERIOD / 2).phase(), 0.5, epsilon = 1e-4);
        assert_abs_diff_eq!(Skeleton::at(SHIMMER_PERIOD * 3).phase(), 0.0);
        assert_abs_diff_eq!(Skeleton::at(SHIMMER_PERIOD * 7 / 4).phase(), 0.75, epsilon = 1e-4);
    }

    #[test]
    fn highlight_is_distinct_from_base() {
        assert_ne!(BASE, HIGHLIGHT);
    }
}
