//! Deadline-based repeating timers for a single-threaded event loop.

use std::time::{Duration, Instant};

/// Shortest period a cadence will run at.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A repeating deadline polled from the main loop.
#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    period: Duration,
    next_due: Instant,
}

impl Cadence {
    /// Create a cadence whose first deadline is `start`.
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            next_due: start,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether the deadline has passed. Fires at most once per call and skips
    /// over missed periods instead of bursting to catch up.
    pub fn is_due(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        let behind = now.duration_since(self.next_due);
        let missed = (behind.as_nanos() / self.period.as_nanos()).min(u32::MAX as u128 - 1) as u32;
        self.next_due += self.period * (missed + 1);
        true
    }

    /// Time left until the next deadline, zero if it already passed.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_immediately_then_waits() {
        let start = Instant::now();
        let mut cadence = Cadence::new(Duration::from_millis(100), start);

        assert!(cadence.is_due(start));
        assert!(!cadence.is_due(start));
        assert_eq!(cadence.remaining(start), Duration::from_millis(100));
        assert!(!cadence.is_due(start + Duration::from_millis(99)));
        assert!(cadence.is_due(start + Duration::from_millis(100)));
    }

    #[test]
    fn test_skips_missed_periods() {
        let start = Instant::now();
        let mut cadence = Cadence::new(Duration::from_millis(10), start);
        assert!(cadence.is_due(start));

        let late = start + Duration::from_millis(55);
        assert!(cadence.is_due(late));
        assert!(!cadence.is_due(late));
        assert_eq!(cadence.remaining(late), Duration::from_millis(5));
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let start = Instant::now();
        let cadence = Cadence::new(Duration::ZERO, start);
        assert_eq!(cadence.period(), MIN_PERIOD);
        assert_eq!(cadence.remaining(start + Duration::from_secs(1)), Duration::ZERO);
    }
}
