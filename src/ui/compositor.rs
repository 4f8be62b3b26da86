// SPDX-License-Identifier: MPL-2.0
//! Compositor: paints the loaded pages onto the surface at the current offset.
//!
//! Painting is split in two steps. [`plan`] is a pure function computing the
//! draw operations; [`paint`] replays them onto a [`PaintTarget`]. The
//! production target is a `tiny_skia::Pixmap`, which is then handed to iced
//! as an image handle.
//!
//! Per page slot (`offset + index * surface_width`):
//! - an image smaller than the surface on either axis gets a neutral
//!   background under it;
//! - an image larger on either axis is scaled down uniformly to fit;
//! - the (possibly scaled) image is centred on both axes.
//!
//! Slots outside the surface are drawn anyway and simply clipped.

use crate::domain::slider::SurfaceSize;
use crate::media::ImageData;
use crate::ui::design_tokens::palette;
use tiny_skia::{FilterQuality, Paint, Pixmap, PixmapPaint, Rect, Transform};

/// One draw operation of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintOp {
    Clear,
    FillBackground {
        x: f32,
        width: f32,
        height: f32,
    },
    DrawImage {
        page: usize,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        scale: f32,
    },
}

/// Something the compositor can paint on.
pub trait PaintTarget {
    fn clear(&mut self);
    fn fill_background(&mut self, x: f32, width: f32, height: f32);
    fn draw_image(&mut self, image: &ImageData, x: f32, y: f32, scale: f32);
}

/// Computes the draw operations for `pages` at `offset`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn plan(size: SurfaceSize, pages: &[&ImageData], offset: f32) -> Vec<PaintOp> {
    let surface_width = size.width_f32();
    let surface_height = size.height_f32();
    let mut ops = Vec::with_capacity(1 + pages.len() * 2);
    ops.push(PaintOp::Clear);

    for (index, image) in pages.iter().enumerate() {
        let slot_x = offset + index as f32 * surface_width;
        let image_width = image.width as f32;
        let image_height = image.height as f32;

        let is_smaller = image.width < size.width() || image.height < size.height();
        if is_smaller {
            ops.push(PaintOp::FillBackground {
                x: slot_x,
                width: surface_width,
                height: surface_height,
            });
        }

        let needs_scale = image.width > size.width() || image.height > size.height();
        let scale = if needs_scale {
            (surface_width / image_width).min(surface_height / image_height)
        } else {
            1.0
        };

        let draw_width = image_width * scale;
        let draw_height = image_height * scale;
        ops.push(PaintOp::DrawImage {
            page: index,
            x: slot_x + (surface_width - draw_width) / 2.0,
            y: (surface_height - draw_height) / 2.0,
            width: draw_width,
            height: draw_height,
            scale,
        });
    }

    ops
}

/// Paints `pages` at `offset` onto `target`.
pub fn paint<T: PaintTarget>(target: &mut T, size: SurfaceSize, pages: &[&ImageData], offset: f32) {
    for op in plan(size, pages, offset) {
        match op {
            PaintOp::Clear => target.clear(),
            PaintOp::FillBackground { x, width, height } => {
                target.fill_background(x, width, height);
            }
            PaintOp::DrawImage {
                page, x, y, scale, ..
            } => target.draw_image(pages[page], x, y, scale),
        }
    }
}

/// Paints a fresh surface. Returns `None` only if the pixmap cannot be
/// allocated.
#[must_use]
pub fn render(size: SurfaceSize, pages: &[&ImageData], offset: f32) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(size.width(), size.height())?;
    paint(&mut pixmap, size, pages, offset);
    Some(pixmap)
}

/// Straight-alpha RGBA bytes of a surface, as expected by
/// `iced::widget::image::Handle::from_rgba`.
#[must_use]
pub fn to_rgba(pixmap: &Pixmap) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    rgba
}

impl PaintTarget for Pixmap {
    fn clear(&mut self) {
        self.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn fill_background(&mut self, x: f32, width: f32, height: f32) {
        let Some(rect) = Rect::from_xywh(x, 0.0, width, height) else {
            return;
        };
        let [r, g, b, a] = palette::SURFACE_BACKGROUND_RGBA;
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = false;
        self.fill_rect(rect, &paint, Transform::identity(), None);
    }

    fn draw_image(&mut self, image: &ImageData, x: f32, y: f32, scale: f32) {
        let quality = if (scale - 1.0).abs() < f32::EPSILON {
            FilterQuality::Nearest
        } else {
            FilterQuality::Bilinear
        };
        let paint = PixmapPaint {
            quality,
            ..PixmapPaint::default()
        };
        self.draw_pixmap(
            0,
            0,
            image.pixmap(),
            &paint,
            Transform::from_row(scale, 0.0, 0.0, scale, x, y),
            None,
        );
    }
}
