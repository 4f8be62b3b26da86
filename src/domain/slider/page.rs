// SPDX-License-Identifier: MPL-2.0
//! The ordered page sequence and per-page load state.
//!
//! Pages are created once, one per identifier, and never reordered. Each
//! page's state only moves forward: `Unrequested → Pending → Loaded | Failed`.

use std::ops::Range;

/// Load state of a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Unrequested,
    Pending,
    Loaded,
    Failed,
}

impl LoadState {
    /// Whether `next` is a legal forward transition from `self`.
    #[must_use]
    pub fn can_advance_to(self, next: LoadState) -> bool {
        matches!(
            (self, next),
            (LoadState::Unrequested, LoadState::Pending)
                | (LoadState::Pending, LoadState::Loaded)
                | (LoadState::Pending, LoadState::Failed)
        )
    }

    /// Requested pages are pending or settled.
    #[must_use]
    pub fn is_requested(self) -> bool {
        self != LoadState::Unrequested
    }
}

/// One entry of the sequence.
#[derive(Debug, Clone)]
pub struct Page<I> {
    identifier: String,
    state: LoadState,
    image: Option<I>,
}

impl<I> Page<I> {
    fn new(identifier: String) -> Self {
        Self {
            identifier,
            state: LoadState::Unrequested,
            image: None,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    fn advance(&mut self, next: LoadState) -> bool {
        if self.state.can_advance_to(next) {
            self.state = next;
            true
        } else {
            false
        }
    }
}

/// Fixed-order sequence of pages.
#[derive(Debug, Clone)]
pub struct PageSet<I> {
    pages: Vec<Page<I>>,
}

impl<I> PageSet<I> {
    pub fn new<S: Into<String>>(identifiers: impl IntoIterator<Item = S>) -> Self {
        Self {
            pages: identifiers
                .into_iter()
                .map(|id| Page::new(id.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Page<I>> {
        self.pages.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page<I>> {
        self.pages.iter()
    }

    pub fn identifiers(&self) -> Vec<String> {
        self.pages.iter().map(|p| p.identifier.clone()).collect()
    }

    /// Marks every page in `range` as pending.
    ///
    /// Either all pages move or none do: returns `false` without touching
    /// anything if the range is empty, out of bounds, or any page in it was
    /// already requested.
    pub fn mark_pending(&mut self, range: Range<usize>) -> bool {
        if range.is_empty() || range.end > self.pages.len() {
            return false;
        }
        if self.pages[range.clone()]
            .iter()
            .any(|page| page.state.is_requested())
        {
            return false;
        }
        for page in &mut self.pages[range] {
            page.advance(LoadState::Pending);
        }
        true
    }

    /// Stores decoded images for consecutive pages starting at `from`.
    ///
    /// Only pending pages accept an image. Returns how many pages became
    /// loaded.
    pub fn resolve(&mut self, from: usize, images: Vec<I>) -> usize {
        let mut resolved = 0;
        for (page, image) in self.pages.iter_mut().skip(from).zip(images) {
            if page.advance(LoadState::Loaded) {
                page.image = Some(image);
                resolved += 1;
            }
        }
        resolved
    }

    /// Marks the pending pages in `range` as failed.
    pub fn fail(&mut self, range: Range<usize>) -> usize {
        let end = range.end.min(self.pages.len());
        let start = range.start.min(end);
        self.pages[start..end]
            .iter_mut()
            .map(|page| page.advance(LoadState::Failed))
            .filter(|advanced| *advanced)
            .count()
    }

    /// Images of the contiguous loaded run starting at page 0.
    ///
    /// A page that resolved before its predecessors stays hidden until they
    /// load, so images always appear in identifier order.
    pub fn loaded_prefix(&self) -> Vec<&I> {
        self.pages
            .iter()
            .map_while(|page| match page.state {
                LoadState::Loaded => page.image.as_ref(),
                _ => None,
            })
            .collect()
    }

    pub fn loaded_count(&self) -> usize {
        self.pages
            .iter()
            .take_while(|page| page.state == LoadState::Loaded)
            .count()
    }

    /// Pages that are pending or settled.
    pub fn requested_count(&self) -> usize {
        self.pages
            .iter()
            .filter(|page| page.state.is_requested())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_pages() -> PageSet<u32> {
        PageSet::new(["a", "b", "c", "d"])
    }

    #[test]
    fn new_pages_start_unrequested_in_order() {
        let pages = four_pages();
        assert_eq!(pages.len(), 4);
        assert_eq!(pages.identifiers(), vec!["a", "b", "c", "d"]);
        assert!(pages.iter().all(|p| p.state() == LoadState::Unrequested));
    }

    #[test]
    fn transitions_only_move_forward() {
        assert!(LoadState::Unrequested.can_advance_to(LoadState::Pending));
        assert!(LoadState::Pending.can_advance_to(LoadState::Loaded));
        assert!(LoadState::Pending.can_advance_to(LoadState::Failed));
        assert!(!LoadState::Loaded.can_advance_to(LoadState::Pending));
        assert!(!LoadState::Failed.can_advance_to(LoadState::Loaded));
        assert!(!LoadState::Unrequested.can_advance_to(LoadState::Loaded));
    }

    #[test]
    fn mark_pending_rejects_already_requested_pages() {
        let mut pages = four_pages();
        assert!(pages.mark_pending(0..2));
        assert!(!pages.mark_pending(1..3));
        assert_eq!(pages.get(2).map(Page::state), Some(LoadState::Unrequested));
        assert_eq!(pages.requested_count(), 2);
    }

    #[test]
    fn mark_pending_rejects_out_of_bounds_and_empty_ranges() {
        let mut pages = four_pages();
        assert!(!pages.mark_pending(3..5));
        assert!(!pages.mark_pending(2..2));
        assert_eq!(pages.requested_count(), 0);
    }

    #[test]
    fn resolve_ignores_pages_that_were_not_pending() {
        let mut pages = four_pages();
        pages.mark_pending(0..1);
        assert_eq!(pages.resolve(0, vec![10, 11]), 1);
        assert_eq!(pages.get(1).map(Page::state), Some(LoadState::Unrequested));
        assert_eq!(pages.get(1).and_then(Page::image), None);
    }

    #[test]
    fn loaded_prefix_waits_for_earlier_pages() {
        let mut pages = four_pages();
        pages.mark_pending(0..2);
        pages.mark_pending(2..3);
        pages.resolve(2, vec![30]);
        assert!(pages.loaded_prefix().is_empty());

        pages.resolve(0, vec![10, 20]);
        assert_eq!(pages.loaded_prefix(), vec![&10, &20, &30]);
        assert_eq!(pages.loaded_count(), 3);
    }

    #[test]
    fn failed_pages_stop_the_prefix_and_never_load() {
        let mut pages = four_pages();
        pages.mark_pending(0..2);
        pages.resolve(0, vec![10, 20]);
        pages.mark_pending(2..3);
        assert_eq!(pages.fail(2..3), 1);
        assert_eq!(pages.resolve(2, vec![30]), 0);
        assert_eq!(pages.loaded_prefix(), vec![&10, &20]);
        assert_eq!(pages.get(2).map(Page::state), Some(LoadState::Failed));
    }
}
