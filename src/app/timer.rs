// Fixed-period refresh timer
//
// Polled from the main loop; fires once per elapsed interval. Manual
// refreshes do not touch it, so its phase only depends on elapsed time.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RefreshTimer {
    interval: Duration,
    last_fire: Instant,
}

impl RefreshTimer {
    /// Timer whose first fire is one interval after `now`
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_fire: now,
        }
    }

    /// Returns `true` if an interval has elapsed since the last fire
    ///
    /// Keeps the original cadence when polled late. If the loop stalled for
    /// several intervals, the missed fires collapse into this one.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_fire) < self.interval {
            return false;
        }

        self.last_fire += self.interval;
        if now.saturating_duration_since(self.last_fire) >= self.interval {
            self.last_fire = now;
        }
        true
    }

    /// Time left until the next fire
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_fire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(30_000);

    #[test]
    fn test_fires_every_interval() {
        let start = Instant::now();
        let mut timer = RefreshTimer::new(INTERVAL, start);

        assert!(!timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(29_999)));
        assert!(timer.poll(start + INTERVAL));
        assert!(!timer.poll(start + INTERVAL + Duration::from_millis(1)));
        assert!(timer.poll(start + INTERVAL * 2));
    }

    #[test]
    fn test_late_poll_keeps_cadence() {
        let start = Instant::now();
        let mut timer = RefreshTimer::new(INTERVAL, start);

        // Polled 500ms late; the next fire is still due at 60s
        assert!(timer.poll(start + Duration::from_millis(30_500)));
        assert!(!timer.poll(start + Duration::from_millis(59_999)));
        assert!(timer.poll(start + Duration::from_millis(60_000)));
    }

    #[test]
    fn test_stall_collapses_missed_fires() {
        let start = Instant::now();
        let mut timer = RefreshTimer::new(INTERVAL, start);

        let late = start + Duration::from_millis(95_000);
        assert!(timer.poll(late));
        assert!(!timer.poll(late + Duration::from_millis(1)));
        assert!(timer.poll(late + INTERVAL));
    }

    #[test]
    fn test_remaining() {
        let start = Instant::now();
        let timer = RefreshTimer::new(INTERVAL, start);
        assert_eq!(timer.remaining(start), INTERVAL);
        assert_eq!(
            timer.remaining(start + Duration::from_millis(10_000)),
            Duration::from_millis(20_000)
        );
        assert_eq!(timer.remaining(start + INTERVAL * 3), Duration::ZERO);
    }
}
