//! Single-flight refresh coordination.
//!
//! Both dashboards refresh from two independent triggers: the fixed-interval
//! poller and user actions. [`RefreshTracker`] serializes them: at most one
//! refresh is in flight, poll ticks that arrive mid-refresh are skipped, and
//! every refresh carries a generation stamp so a slow response that resolves
//! after a newer refresh started is discarded instead of overwriting it.

use std::time::{Duration, Instant};

/// Default poll interval for both dashboards.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub struct RefreshTracker {
    generation: u64,
    in_flight: bool,
    last_completed: Option<Instant>,
    auto_refresh: bool,
    interval: Duration,
}

impl RefreshTracker {
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            generation: 0,
            in_flight: false,
            last_completed: None,
            auto_refresh: true,
            interval,
        }
    }

    /// Begin a refresh, returning its generation stamp.
    ///
    /// Returns `None` while another refresh is outstanding; the caller must
    /// skip the cycle rather than queue it.
    pub const fn begin(&mut self) -> Option<u64> {
        if self.in_flight {
            return None;
        }
        self.generation += 1;
        self.in_flight = true;
        Some(self.generation)
    }

    /// Begin a refresh unconditionally, superseding any outstanding one.
    ///
    /// Used for refreshes after a successful user action, where showing the
    /// mutation's result must not wait on a slow poll. The superseded
    /// response becomes stale and will be dropped by [`Self::complete`].
    pub const fn force_begin(&mut self) -> u64 {
        self.generation += 1;
        self.in_flight = true;
        self.generation
    }

    /// Record completion of the refresh stamped `generation`.
    ///
    /// Returns `true` when the result is current and may be rendered. A stale
    /// generation (a response that lost the race against a newer refresh)
    /// returns `false` and must be dropped.
    pub fn complete(&mut self, generation: u64, now: Instant) -> bool {
        if generation != self.generation {
            return false;
        }
        self.in_flight = false;
        self.last_completed = Some(now);
        true
    }

    /// Whether the poller should fire: auto-refresh enabled, nothing in
    /// flight, and the interval has elapsed since the last completion.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        if !self.auto_refresh || self.in_flight {
            return false;
        }
        self.last_completed
            .is_none_or(|last| now.duration_since(last) >= self.interval)
    }

    pub const fn set_auto_refresh(&mut self, enabled: bool) {
        self.auto_refresh = enabled;
    }

    #[must_use]
    pub const fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    #[must_use]
    pub const fn in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_flight() {
        let mut tracker = RefreshTracker::new(POLL_INTERVAL);
        let generation = tracker.begin().expect("first refresh starts");
        // A second refresh is refused while the first is outstanding.
        assert_eq!(tracker.begin(), None);
        assert!(tracker.complete(generation, Instant::now()));
        assert!(tracker.begin().is_some());
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut tracker = RefreshTracker::new(POLL_INTERVAL);
        let stale = tracker.begin().unwrap();
        // A user action supersedes the slow poll refresh; when the poll's
        // response finally arrives it must not overwrite the newer render.
        let current = tracker.force_begin();
        assert!(!tracker.complete(stale, Instant::now()));
        assert!(tracker.complete(current, Instant::now()));
    }

    #[test]
    fn test_poller_respects_interval() {
        let mut tracker = RefreshTracker::new(Duration::from_secs(30));
        let start = Instant::now();

        // Never refreshed: due immediately.
        assert!(tracker.is_due(start));

        let generation = tracker.begin().unwrap();
        // In flight: tick skipped.
        assert!(!tracker.is_due(start));
        tracker.complete(generation, start);

        assert!(!tracker.is_due(start + Duration::from_secs(10)));
        assert!(tracker.is_due(start + Duration::from_secs(31)));
    }

    #[test]
    fn test_toggle_disables_poller_only() {
        let mut tracker = RefreshTracker::new(Duration::from_secs(0));
        tracker.set_auto_refresh(false);
        assert!(!tracker.is_due(Instant::now()));
        // Manual refreshes still work while the poller is off.
        assert!(tracker.begin().is_some());
    }
}
