// SPDX-License-Identifier: MPL-2.0
//! ImageSet loader: resolves a contiguous range of identifiers into decoded
//! images.
//!
//! A batch is all-or-nothing. Every identifier in the range is fetched and
//! decoded concurrently; the first failure rejects the whole batch, and a
//! success always yields exactly `to - from` images in identifier order.
//! Nothing is cached: loading the same identifier twice redoes the work.

use crate::error::{LoadError, LoadErrorKind};
use crate::media::image::ImageData;
use crate::media::source::Source;
use futures_util::future::try_join_all;
use std::ops::Range;
use std::time::Instant;

/// One batch issued by a slider instance.
///
/// `session` identifies the instance that asked, so results arriving after
/// it was torn down can be recognised and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub session: u64,
    pub from: usize,
    pub to: usize,
}

impl LoadRequest {
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.from..self.to
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Loads and decodes `identifiers[from..to]`.
///
/// # Errors
///
/// Returns [`LoadErrorKind::OutOfRange`] if `from > to` or
/// `to > identifiers.len()`, otherwise the first fetch or decode failure of
/// the batch.
pub async fn load_range(
    identifiers: &[String],
    from: usize,
    to: usize,
) -> Result<Vec<ImageData>, LoadError> {
    if from > to || to > identifiers.len() {
        return Err(LoadError::new(
            format!("[{from}..{to})"),
            LoadErrorKind::OutOfRange,
            format!("range exceeds {} identifiers", identifiers.len()),
        ));
    }

    let started = Instant::now();
    let batch = &identifiers[from..to];
    log::debug!("loading pages {from}..{to}: {batch:?}");

    let result = try_join_all(batch.iter().map(|identifier| load_one(identifier))).await;

    match &result {
        Ok(images) => log::debug!(
            "loaded {} page(s) {from}..{to} in {:?}",
            images.len(),
            started.elapsed()
        ),
        Err(err) => log::error!("failed to load pages {from}..{to}: {err}"),
    }

    result
}

/// Runs the batch described by `request` against the full identifier list.
///
/// # Errors
///
/// Same as [`load_range`].
pub async fn load_request(
    identifiers: Vec<String>,
    request: LoadRequest,
) -> Result<Vec<ImageData>, LoadError> {
    load_range(&identifiers, request.from, request.to).await
}

async fn load_one(identifier: &str) -> Result<ImageData, LoadError> {
    let bytes = Source::parse(identifier).fetch(identifier).await?;
    ImageData::decode(identifier, &bytes)
}
