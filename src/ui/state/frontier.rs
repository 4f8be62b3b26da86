// SPDX-License-Identifier: MPL-2.0
//! Progressive loading policy.
//!
//! While the user drags left, pages are requested one at a time, shortly
//! before they scroll into view. The [`LoadFrontier`] tracks how many pages
//! have been requested and where the next request triggers.
//!
//! The trigger threshold is `min_offset / divisor`, with the divisor starting
//! at 4 and shrinking by one per request. That gives the classic crossing
//! points (`-480` then `-640` for four pages of 640, `-800` first for six).
//!
//! Once the divisor drops below 2 the threshold would sit on `min_offset`,
//! which a clamped drag can never pass. From then on it follows
//! `-(requested - 1) * page_width`, the offset at which the last requested
//! page is fully visible, but never rises above `min_offset / 2`.

use crate::config::defaults::INITIAL_THRESHOLD_DIVISOR;
use crate::domain::slider::ScrollRange;

/// Requested page count and current threshold divisor. Never moves backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadFrontier {
    requested: usize,
    divisor: u32,
}

impl LoadFrontier {
    /// Frontier after the initial batch of `requested` pages.
    #[must_use]
    pub fn new(requested: usize) -> Self {
        Self {
            requested,
            divisor: INITIAL_THRESHOLD_DIVISOR,
        }
    }

    /// Pages requested so far (pending or settled).
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }

    #[must_use]
    pub fn divisor(&self) -> u32 {
        self.divisor
    }

    /// Offset the drag has to go below to request the next page.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn threshold(&self, range: &ScrollRange) -> f32 {
        let min_offset = range.min_offset();
        if self.divisor >= 2 {
            return min_offset / self.divisor as f32;
        }
        let lead = -(self.requested.saturating_sub(1) as f32) * range.page_width();
        lead.min(min_offset / 2.0)
    }

    fn advance(&mut self) {
        self.requested += 1;
        self.divisor = self.divisor.saturating_sub(1);
    }
}

/// Decides whether the drag at `offset` should request another page.
///
/// Returns the index of exactly one page to request, advancing the frontier,
/// or `None` when the offset has not moved past the first page, has not
/// crossed the threshold, or every page was already requested.
pub fn next_page_to_load(
    frontier: &mut LoadFrontier,
    offset: f32,
    range: &ScrollRange,
    page_count: usize,
) -> Option<usize> {
    if offset >= 0.0 || frontier.requested >= page_count {
        return None;
    }
    if offset >= frontier.threshold(range) {
        return None;
    }
    let page = frontier.requested;
    frontier.advance();
    log::debug!(
        "offset {offset} crossed threshold, requesting page {page} (next threshold {})",
        frontier.threshold(range)
    );
    Some(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn four_pages_cross_at_minus_480_then_minus_640() {
        let range = ScrollRange::new(4, 640.0);
        let mut frontier = LoadFrontier::new(2);
        assert_abs_diff_eq!(frontier.threshold(&range), -480.0);

        assert_eq!(next_page_to_load(&mut frontier, -480.0, &range, 4), None);
        assert_eq!(next_page_to_load(&mut frontier, -481.0, &range, 4), Some(2));
        assert_abs_diff_eq!(frontier.threshold(&range), -640.0);

        assert_eq!(next_page_to_load(&mut frontier, -600.0, &range, 4), None);
        assert_eq!(next_page_to_load(&mut frontier, -641.0, &range, 4), Some(3));
        assert_eq!(next_page_to_load(&mut frontier, -1920.0, &range, 4), None);
        assert_eq!(frontier.requested(), 4);
    }

    #[test]
    fn six_pages_keep_the_divided_crossing_points() {
        let range = ScrollRange::new(6, 640.0);
        let mut frontier = LoadFrontier::new(2);
        assert_abs_diff_eq!(frontier.threshold(&range), -800.0);

        assert_eq!(next_page_to_load(&mut frontier, -700.0, &range, 6), None);
        assert_eq!(next_page_to_load(&mut frontier, -801.0, &range, 6), Some(2));
        assert_abs_diff_eq!(frontier.threshold(&range), -3200.0 / 3.0);
        assert_eq!(next_page_to_load(&mut frontier, -1067.0, &range, 6), Some(3));
        assert_abs_diff_eq!(frontier.threshold(&range), -1600.0);
        assert_eq!(next_page_to_load(&mut frontier, -1601.0, &range, 6), Some(4));

        // Divisor exhausted: the last page still loads before the end.
        assert_abs_diff_eq!(frontier.threshold(&range), -2560.0);
        assert_eq!(next_page_to_load(&mut frontier, -2561.0, &range, 6), Some(5));
    }

    #[test]
    fn at_most_one_page_per_evaluation() {
        let range = ScrollRange::new(4, 640.0);
        let mut frontier = LoadFrontier::new(2);
        assert_eq!(next_page_to_load(&mut frontier, -1920.0, &range, 4), Some(2));
        assert_eq!(frontier.requested(), 3);
        assert_eq!(next_page_to_load(&mut frontier, -1920.0, &range, 4), Some(3));
    }

    #[test]
    fn non_negative_offsets_never_load() {
        let range = ScrollRange::new(4, 640.0);
        let mut frontier = LoadFrontier::new(2);
        assert_eq!(next_page_to_load(&mut frontier, 0.0, &range, 4), None);
        assert_eq!(frontier, LoadFrontier::new(2));
    }

    #[test]
    fn fully_requested_sequences_are_a_noop() {
        let range = ScrollRange::new(2, 640.0);
        let mut frontier = LoadFrontier::new(2);
        assert_eq!(next_page_to_load(&mut frontier, -640.0, &range, 2), None);
        assert_eq!(frontier.requested(), 2);
    }

    #[test]
    fn long_sequences_keep_loading_after_divisor_runs_out() {
        let pages = 12;
        let range = ScrollRange::new(pages, 640.0);
        let mut frontier = LoadFrontier::new(2);
        let mut requested = Vec::new();

        let mut offset = 0.0;
        while offset > range.min_offset() {
            offset = range.clamp(offset - 40.0);
            if let Some(page) = next_page_to_load(&mut frontier, offset, &range, pages) {
                requested.push(page);
            }
        }

        assert_eq!(requested, (2..pages).collect::<Vec<_>>());
        assert_eq!(frontier.divisor(), 0);
    }

    #[test]
    fn threshold_only_moves_towards_min_offset() {
        let range = ScrollRange::new(9, 320.0);
        let mut frontier = LoadFrontier::new(2);
        let mut previous = frontier.threshold(&range);
        while next_page_to_load(&mut frontier, range.min_offset(), &range, 9).is_some() {
            let threshold = frontier.threshold(&range);
            assert!(threshold <= previous);
            previous = threshold;
        }
        assert_eq!(frontier.requested(), 9);
    }
}
