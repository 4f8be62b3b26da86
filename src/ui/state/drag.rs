// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles the press-move-release gesture that scrolls the page sequence
//! horizontally. Positions are single horizontal coordinates; the resulting
//! offset is always clamped to the sequence's [`ScrollRange`].

use crate::domain::slider::ScrollRange;

/// One press-to-release gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer coordinate at press time
    pub start_x: f32,

    /// Offset committed by the previous gesture
    pub baseline: f32,
}

impl DragSession {
    /// Offset for a pointer at `x`, clamped to `range`.
    #[must_use]
    pub fn offset_at(&self, x: f32, range: &ScrollRange) -> f32 {
        range.clamp(self.baseline + (x - self.start_x))
    }
}

/// Manages grab-and-drag state
///
/// `idle` is `session == None`; `dragging` is `session == Some(_)`.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Active gesture, if a valid press started one
    session: Option<DragSession>,

    /// Offset committed at the end of the last gesture
    committed: f32,

    /// Offset currently displayed
    offset: f32,
}

impl DragState {
    /// Whether a drag operation is currently active
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// Offset currently displayed.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Baseline for the next gesture.
    #[must_use]
    pub fn committed_offset(&self) -> f32 {
        self.committed
    }

    /// Starts a drag operation.
    ///
    /// Only a press on the surface starts a session; presses elsewhere, and
    /// presses while a session is already active, are ignored. Returns
    /// whether a session was started.
    pub fn press(&mut self, x: f32, on_surface: bool) -> bool {
        if !on_surface || self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            start_x: x,
            baseline: self.committed,
        });
        true
    }

    /// Moves the active drag to `x`.
    ///
    /// Returns the new clamped offset, or `None` when no valid press started
    /// a session (stray moves after an interrupted gesture).
    pub fn drag_to(&mut self, x: f32, range: &ScrollRange) -> Option<f32> {
        let session = self.session?;
        self.offset = session.offset_at(x, range);
        Some(self.offset)
    }

    /// Ends the drag and commits the final clamped offset as the next
    /// baseline. A release without a valid press is a no-op.
    pub fn release(&mut self, x: f32, range: &ScrollRange) -> Option<f32> {
        let session = self.session.take()?;
        let offset = session.offset_at(x, range);
        self.offset = offset;
        self.committed = offset;
        Some(offset)
    }

    /// Drops the active session without committing.
    pub fn cancel(&mut self) {
        self.session = None;
        self.offset = self.committed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn four_pages() -> ScrollRange {
        ScrollRange::new(4, 640.0)
    }

    #[test]
    fn default_drag_state_is_idle_at_zero() {
        let state = DragState::default();
        assert!(!state.is_dragging());
        assert!(state.session().is_none());
        assert_abs_diff_eq!(state.offset(), 0.0);
    }

    #[test]
    fn press_off_surface_is_ignored() {
        let mut state = DragState::default();
        assert!(!state.press(100.0, false));
        assert!(!state.is_dragging());
    }

    #[test]
    fn press_records_start_and_committed_baseline() {
        let mut state = DragState::default();
        assert!(state.press(300.0, true));
        assert_eq!(
            state.session(),
            Some(DragSession {
                start_x: 300.0,
                baseline: 0.0
            })
        );
    }

    #[test]
    fn move_without_press_does_nothing() {
        let mut state = DragState::default();
        assert!(state.drag_to(50.0, &four_pages()).is_none());
        assert_abs_diff_eq!(state.offset(), 0.0);
    }

    #[test]
    fn release_without_press_is_noop() {
        let mut state = DragState::default();
        assert!(state.release(50.0, &four_pages()).is_none());
        assert_abs_diff_eq!(state.committed_offset(), 0.0);
    }

    #[test]
    fn dragging_left_past_the_end_clamps_to_min_offset() {
        let mut state = DragState::default();
        state.press(3000.0, true);
        assert_eq!(state.drag_to(500.0, &four_pages()), Some(-1920.0));
        assert_eq!(state.release(500.0, &four_pages()), Some(-1920.0));
        assert_abs_diff_eq!(state.committed_offset(), -1920.0);
    }

    #[test]
    fn dragging_right_from_start_clamps_to_zero() {
        let mut state = DragState::default();
        state.press(100.0, true);
        assert_eq!(state.drag_to(600.0, &four_pages()), Some(0.0));
        assert_eq!(state.release(600.0, &four_pages()), Some(0.0));
    }

    #[test]
    fn next_gesture_starts_from_committed_offset() {
        let range = four_pages();
        let mut state = DragState::default();
        state.press(500.0, true);
        state.release(200.0, &range);
        assert_abs_diff_eq!(state.committed_offset(), -300.0);

        state.press(400.0, true);
        assert_eq!(state.drag_to(300.0, &range), Some(-400.0));
        assert_eq!(state.drag_to(600.0, &range), Some(-100.0));
    }

    #[test]
    fn offsets_are_monotonic_while_dragging_one_way() {
        let range = four_pages();
        let mut state = DragState::default();
        state.press(0.0, true);
        let mut previous = state.offset();
        for step in 1..=40 {
            let offset = state
                .drag_to(-100.0 * step as f32, &range)
                .expect("session active");
            assert!(offset <= previous);
            assert!(range.contains(offset));
            previous = offset;
        }
        assert_abs_diff_eq!(previous, -1920.0);
    }

    #[test]
    fn cancel_restores_committed_offset() {
        let range = four_pages();
        let mut state = DragState::default();
        state.press(500.0, true);
        state.drag_to(100.0, &range);
        state.cancel();
        assert!(!state.is_dragging());
        assert_abs_diff_eq!(state.offset(), 0.0);
    }
}
