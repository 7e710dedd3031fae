//! Trailing-edge debounce bookkeeping
//!
//! Timer-agnostic: the caller sleeps for [`Debouncer::wait`] after each
//! trigger and then asks whether its ticket is still the latest.

use std::time::Duration;

/// Default wait for scroll-driven work
pub const SCROLL_DEBOUNCE_MS: u64 = 100;

/// Handle returned by [`Debouncer::trigger`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    latest: u64,
    settled: bool,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(SCROLL_DEBOUNCE_MS))
    }
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            latest: 0,
            settled: true,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Register a trigger, superseding any pending one.
    pub fn trigger(&mut self) -> DebounceTicket {
        self.latest = self.latest.wrapping_add(1);
        self.settled = false;
        DebounceTicket(self.latest)
    }

    /// Called once `wait` has elapsed for `ticket`. Returns true exactly once
    /// per burst, for the burst's last ticket.
    pub fn settle(&mut self, ticket: DebounceTicket) -> bool {
        if self.settled || ticket.0 != self.latest {
            return false;
        }
        self.settled = true;
        true
    }

    pub fn is_pending(&self) -> bool {
        !self.settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_fires_once_for_last_trigger() {
        let mut d = Debouncer::default();
        let first = d.trigger();
        let second = d.trigger();
        let third = d.trigger();
        assert!(!d.settle(first));
        assert!(!d.settle(second));
        assert!(d.settle(third));
        assert!(!d.settle(third));
        assert!(!d.is_pending());
    }

    #[test]
    fn test_separate_bursts_each_fire() {
        let mut d = Debouncer::default();
        let a = d.trigger();
        assert!(d.settle(a));
        let b = d.trigger();
        assert!(d.is_pending());
        assert!(d.settle(b));
    }

    #[test]
    fn test_default_wait() {
        assert_eq!(Debouncer::default().wait(), Duration::from_millis(100));
    }
}
