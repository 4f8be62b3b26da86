// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Float offsets and scales are compared with `approx`, never `assert_eq!`.

pub use approx::assert_abs_diff_eq;

use crate::media::ImageData;

/// `count` identifiers named after their page index.
pub fn page_ids(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("page-{i}.png")).collect()
}

/// `count` opaque single-colour images of `width`×`height`.
pub fn solid_pages(count: usize, width: u32, height: u32) -> Vec<ImageData> {
    (0..count)
        .map(|_| ImageData::solid(width, height, [1, 2, 3, 255]).expect("valid test image"))
        .collect()
}
