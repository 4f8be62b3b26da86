// SPDX-License-Identifier: MPL-2.0
//! Pointer-move throttling.
//!
//! Moves are dispatched at most once per interval. A move arriving inside the
//! interval is held back, replacing any older held move; it is released by
//! the next [`MoveThrottle::poll`] once the interval has passed, or by
//! [`MoveThrottle::flush`] right before a release is processed. The last
//! move of a burst is therefore never dropped.
//!
//! Time is passed in by the caller so the dispatcher can be tested without
//! sleeping.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct MoveThrottle {
    interval: Duration,
    last_dispatch: Option<Instant>,
    pending: Option<f32>,
}

impl MoveThrottle {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_dispatch: None,
            pending: None,
        }
    }

    #[must_use]

    /// Whether a held-back move is waiting for dispatch.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Offers a move at `x`. Returns the coordinate to dispatch now, if any.
    pub fn offer(&mut self, x: f32, now: Instant) -> Option<f32> {
        if self.is_ready(now) {
            self.last_dispatch = Some(now);
            self.pending = None;
            Some(x)
        } else {
            self.pending = Some(x);
            None
        }
    }

    /// Releases the held-back move if the interval has passed.
    pub fn poll(&mut self, now: Instant) -> Option<f32> {
        if self.pending.is_some() && self.is_ready(now) {
            self.last_dispatch = Some(now);
            self.pending.take()
        } else {
            None
        }
    }

    /// Releases the held-back move unconditionally.
    pub fn flush(&mut self) -> Option<f32> {
        self.pending.take()
    }

    /// Forgets timing and any held-back move.
    pub fn reset(&mut self) {
        self.last_dispatch = None;
        self.pending = None;
    }

    fn is_ready(&self, now: Instant) -> bool {
        self.last_dispatch
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(16);

    #[test]
    fn first_move_dispatches_immediately() {
        let mut throttle = MoveThrottle::new(INTERVAL);
        assert_eq!(throttle.offer(10.0, Instant::now()), Some(10.0));
        assert!(!throttle.has_pending());
    }

    #[test]
    fn moves_inside_interval_are_coalesced() {
        let start = Instant::now();
        let mut throttle = MoveThrottle::new(INTERVAL);
        throttle.offer(10.0, start);

        assert_eq!(throttle.offer(20.0, start + Duration::from_millis(4)), None);
        assert_eq!(throttle.offer(30.0, start + Duration::from_millis(8)), None);
        assert!(throttle.has_pending());

        assert_eq!(throttle.poll(start + Duration::from_millis(10)), None);
        assert_eq!(throttle.poll(start + INTERVAL), Some(30.0));
        assert!(!throttle.has_pending());
    }

    #[test]
    fn flush_returns_latest_pending_move() {
        let start = Instant::now();
        let mut throttle = MoveThrottle::new(INTERVAL);
        throttle.offer(10.0, start);
        throttle.offer(15.0, start + Duration::from_millis(1));
        throttle.offer(-40.0, start + Duration::from_millis(2));

        assert_eq!(throttle.flush(), Some(-40.0));
        assert_eq!(throttle.flush(), None);
    }

    #[test]
    fn move_after_interval_dispatches_and_drops_stale_pending() {
        let start = Instant::now();
        let mut throttle = MoveThrottle::new(INTERVAL);
        throttle.offer(1.0, start);
        throttle.offer(2.0, start + Duration::from_millis(5));

        assert_eq!(throttle.offer(3.0, start + Duration::from_millis(20)), Some(3.0));
        assert!(!throttle.has_pending());
    }

    #[test]
    fn reset_forgets_everything() {
        let start = Instant::now();
        let mut throttle = MoveThrottle::new(INTERVAL);
        throttle.offer(1.0, start);
        throttle.offer(2.0, start);
        throttle.reset();

        assert!(!throttle.has_pending());
        assert_eq!(throttle.offer(5.0, start), Some(5.0));
    }
}
