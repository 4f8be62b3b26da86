// SPDX-License-Identifier: MPL-2.0
//! Image sources, decoding, and batch loading.
//!
//! Pages are identified by strings (file paths or http(s) URLs). The loader
//! turns a range of identifiers into decoded [`ImageData`] handles that the
//! compositor can paint.

pub mod image;
pub mod loader;
pub mod source;

// Re-export commonly used types
pub use image::ImageData;
pub use loader::{load_range, load_request, LoadRequest};
pub use source::{expand_arguments, Source, IMAGE_EXTENSIONS};
