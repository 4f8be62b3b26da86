// SPDX-License-Identifier: MPL-2.0
//! Decoded image handles ready for compositing.

use crate::error::{LoadError, LoadErrorKind};
use image_rs::GenericImageView;
use std::fmt;
use std::sync::Arc;
use tiny_skia::{IntSize, Pixmap};

/// A decoded image with its intrinsic size.
///
/// Pixels are kept as a premultiplied `tiny_skia::Pixmap` shared behind an
/// `Arc`, so cloning a handle is cheap.
#[derive(Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pixmap: Arc<Pixmap>,
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl ImageData {
    /// Creates a handle from straight (non-premultiplied) RGBA pixels.
    ///
    /// Returns `None` if a dimension is zero or the buffer length does not
    /// match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, mut pixels: Vec<u8>) -> Option<Self> {
        let size = IntSize::from_wh(width, height)?;
        if pixels.len() != (width as usize) * (height as usize) * 4 {
            return None;
        }
        premultiply(&mut pixels);
        let pixmap = Pixmap::from_vec(pixels, size)?;
        Some(Self {
            width,
            height,
            pixmap: Arc::new(pixmap),
        })
    }

    /// Creates a single-colour image, mostly useful for tests and benches.
    #[must_use]
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Option<Self> {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take((width as usize) * (height as usize) * 4)
            .collect();
        Self::from_rgba(width, height, pixels)
    }

    /// Decodes encoded bytes (PNG, JPEG, ...) fetched for `identifier`.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadErrorKind::Decode`] error if the format is unknown, the
    /// data is corrupt, or the image has no pixels.
    pub fn decode(identifier: &str, bytes: &[u8]) -> Result<Self, LoadError> {
        let img = image_rs::load_from_memory(bytes)
            .map_err(|e| LoadError::new(identifier, LoadErrorKind::Decode, e.to_string()))?;

        let (width, height) = img.dimensions();
        let pixels = img.to_rgba8().into_vec();

        Self::from_rgba(width, height, pixels).ok_or_else(|| {
            LoadError::new(
                identifier,
                LoadErrorKind::Decode,
                format!("image has invalid dimensions {width}x{height}"),
            )
        })
    }

    /// Borrowed view of the premultiplied pixels.
    pub fn pixmap(&self) -> tiny_skia::PixmapRef<'_> {
        Pixmap::as_ref(&self.pixmap)
    }
}

fn premultiply(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(4) {
        let alpha = u16::from(px[3]);
        if alpha == 255 {
            continue;
        }
        for channel in &mut px[..3] {
            // Rounded division by 255.
            let value = u16::from(*channel) * alpha + 127;
            *channel = ((value + (value >> 8)) >> 8) as u8;
        }
    }
}
