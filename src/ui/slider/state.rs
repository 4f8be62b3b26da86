// SPDX-License-Identifier: MPL-2.0
//! Slider orchestration without any toolkit types.
//!
//! [`SliderState`] owns the page sequence, the drag gesture, the load
//! frontier, the move throttle and the failure latch. Input handlers return
//! the batch to load, if any; the caller runs it and feeds the result back
//! through [`SliderState::apply_loaded`].

use crate::config::SliderConfig;
use crate::config::defaults::{
    DEFAULT_INITIAL_BATCH, DEFAULT_MOVE_THROTTLE_MS, DEFAULT_TOUCH_ENABLED,
};
use crate::domain::slider::{PageSet, ScrollRange, SurfaceSize};
use crate::error::LoadError;
use crate::media::{ImageData, LoadRequest};
use crate::ui::compositor;
use crate::ui::state::{next_page_to_load, DragState, LoadFrontier, MoveThrottle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tiny_skia::Pixmap;

/// Behaviour knobs of one slider instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderSettings {
    /// Pages requested at mount.
    pub initial_batch: usize,
    /// Minimum interval between two dispatched moves.
    pub move_throttle: Duration,
    /// Whether touch input is listened to.
    pub touch_enabled: bool,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            initial_batch: DEFAULT_INITIAL_BATCH,
            move_throttle: Duration::from_millis(DEFAULT_MOVE_THROTTLE_MS),
            touch_enabled: DEFAULT_TOUCH_ENABLED,
        }
    }
}

impl From<&SliderConfig> for SliderSettings {
    fn from(config: &SliderConfig) -> Self {
        Self {
            initial_batch: config.initial_batch(),
            move_throttle: config.move_throttle(),
            touch_enabled: config.touch_enabled(),
        }
    }
}

/// What a load result did to the slider.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Newly visible pages, the frame must be redrawn.
    Repaint,
    /// Nothing visible changed, or the result was stale.
    Ignored,
    /// The batch failed; raise this to the error boundary.
    Failed(LoadError),
}

/// What the surface should currently display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// No page loaded yet.
    Placeholder,
    /// At least one page can be painted and input is live.
    Ready,
    /// A load failed; input is ignored until the failure is cleared.
    Failed,
}

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

/// One mounted slider.
#[derive(Debug)]
pub struct SliderState {
    session: u64,
    pages: PageSet<ImageData>,
    size: SurfaceSize,
    range: ScrollRange,
    drag: DragState,
    frontier: LoadFrontier,
    throttle: MoveThrottle,
    settings: SliderSettings,
    failure: Option<LoadError>,
    mounted: bool,
    torn_down: bool,
    frame: Option<Pixmap>,
    dirty: bool,
}

impl SliderState {
    #[must_use]
    pub fn new(identifiers: Vec<String>, size: SurfaceSize, settings: SliderSettings) -> Self {
        let pages = PageSet::new(identifiers);
        let range = ScrollRange::new(pages.len(), size.width_f32());
        let initial = settings.initial_batch.max(1).min(pages.len());
        Self {
            session: NEXT_SESSION.fetch_add(1, Ordering::Relaxed),
            pages,
            size,
            range,
            drag: DragState::default(),
            frontier: LoadFrontier::new(initial),
            throttle: MoveThrottle::new(settings.move_throttle),
            settings,
            failure: None,
            mounted: false,
            torn_down: false,
            frame: None,
            dirty: true,
        }
    }

    /// Issues the initial batch. Only the first call does anything.
    pub fn mount(&mut self) -> Option<LoadRequest> {
        if self.mounted || self.torn_down {
            return None;
        }
        self.mounted = true;

        if self.pages.is_empty() {
            log::warn!("slider {} mounted without pages", self.session);
            return None;
        }
        let to = self.frontier.requested();
        if !self.pages.mark_pending(0..to) {
            return None;
        }
        log::debug!(
            "slider {} mounted with {} page(s), loading 0..{to}",
            self.session,
            self.pages.len()
        );
        Some(self.request(0, to))
    }

    /// Starts a gesture. Ignored unless the surface is ready.
    pub fn press(&mut self, x: f32, on_surface: bool) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.throttle.reset();
        self.drag.press(x, on_surface)
    }

    /// Applies a move immediately, bypassing the throttle.
    pub fn drag_to(&mut self, x: f32) -> Option<LoadRequest> {
        if !self.accepts_input() {
            return None;
        }
        let previous = self.drag.offset();
        let offset = self.drag.drag_to(x, &self.range)?;
        if offset.to_bits() != previous.to_bits() {
            self.dirty = true;
        }
        self.evaluate_load(offset)
    }

    /// Offers a raw move to the throttle; dispatches it if the interval
    /// has passed, otherwise holds it back.
    pub fn offer_move(&mut self, x: f32, now: Instant) -> Option<LoadRequest> {
        if !self.drag.is_dragging() {
            return None;
        }
        let x = self.throttle.offer(x, now)?;
        self.drag_to(x)
    }

    /// Dispatches a held-back move once its interval has passed.
    pub fn poll_throttle(&mut self, now: Instant) -> Option<LoadRequest> {
        let x = self.throttle.poll(now)?;
        self.drag_to(x)
    }

    #[must_use]
    pub fn has_pending_move(&self) -> bool {
        self.throttle.has_pending()
    }

    /// Ends the gesture at `x`.
    ///
    /// A held-back move is applied first so the progressive-load policy sees
    /// it before the final offset is committed.
    pub fn release(&mut self, x: f32) -> Option<LoadRequest> {
        let request = self.throttle.flush().and_then(|pending| self.drag_to(pending));
        self.throttle.reset();

        let previous = self.drag.offset();
        if let Some(offset) = self.drag.release(x, &self.range) {
            if offset.to_bits() != previous.to_bits() {
                self.dirty = true;
            }
        }
        request
    }

    /// Drops the active gesture without committing it.
    pub fn cancel_gesture(&mut self) {
        self.throttle.reset();
        if self.drag.is_dragging() {
            self.drag.cancel();
            self.dirty = true;
        }
    }

    /// Merges the result of `request` into the page sequence.
    pub fn apply_loaded(
        &mut self,
        request: &LoadRequest,
        result: Result<Vec<ImageData>, LoadError>,
    ) -> Outcome {
        if self.torn_down || request.session != self.session {
            log::debug!(
                "discarding stale result for pages {}..{} (session {})",
                request.from,
                request.to,
                request.session
            );
            return Outcome::Ignored;
        }
        if self.failure.is_some() {
            return Outcome::Ignored;
        }

        match result {
            Ok(images) => {
                let visible_before = self.pages.loaded_count();
                self.pages.resolve(request.from, images);
                if self.pages.loaded_count() == visible_before {
                    return Outcome::Ignored;
                }
                self.dirty = true;
                Outcome::Repaint
            }
            Err(err) => {
                self.pages.fail(request.range());
                self.drag.cancel();
                self.throttle.reset();
                log::error!("slider {} failed to load: {err}", self.session);
                self.failure = Some(err.clone());
                Outcome::Failed(err)
            }
        }
    }

    /// Lets the slider issue requests again after a failure was handled.
    pub fn clear_failure(&mut self) {
        self.failure = None;
    }

    /// Stops input and drops any result that arrives later.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.drag.cancel();
        self.throttle.reset();
        self.frame = None;
        log::debug!("slider {} torn down", self.session);
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        if self.failure.is_some() {
            ViewState::Failed
        } else if self.pages.loaded_count() == 0 || self.torn_down {
            ViewState::Placeholder
        } else {
            ViewState::Ready
        }
    }

    /// The composited surface, repainted only when the offset or the
    /// visible pages changed since the last call.
    pub fn frame(&mut self) -> Option<&Pixmap> {
        if self.torn_down || self.pages.loaded_count() == 0 {
            return None;
        }
        if self.dirty || self.frame.is_none() {
            self.frame = compositor::render(
                self.size,
                &self.pages.loaded_prefix(),
                self.drag.offset(),
            );
            self.dirty = false;
        }
        self.frame.as_ref()
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn session(&self) -> u64 {
        self.session
    }

    #[must_use]
    pub fn identifiers(&self) -> Vec<String> {
        self.pages.identifiers()
    }

    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    #[must_use]
    pub fn range(&self) -> ScrollRange {
        self.range
    }

    #[must_use]
    pub fn settings(&self) -> SliderSettings {
        self.settings
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.drag.offset()
    }

    #[must_use]
    pub fn committed_offset(&self) -> f32 {
        self.drag.committed_offset()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Pages visible in order from the first one.
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.pages.loaded_count()
    }

    #[must_use]
    pub fn requested_count(&self) -> usize {
        self.pages.requested_count()
    }

    #[must_use]
    pub fn failure(&self) -> Option<&LoadError> {
        self.failure.as_ref()
    }

    fn accepts_input(&self) -> bool {
        self.view_state() == ViewState::Ready
    }

    fn evaluate_load(&mut self, offset: f32) -> Option<LoadRequest> {
        if self.failure.is_some() {
            return None;
        }
        let page = next_page_to_load(&mut self.frontier, offset, &self.range, self.pages.len())?;
        if !self.pages.mark_pending(page..page + 1) {
            return None;
        }
        Some(self.request(page, page + 1))
    }

    fn request(&self, from: usize, to: usize) -> LoadRequest {
        LoadRequest {
            session: self.session,
            from,
            to,
        }
    }
}
