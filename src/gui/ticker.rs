use std::time::{Duration, Instant};

/// Fixed-cadence tick source driven by the repaint loop.
pub struct Ticker {
    interval: Duration,
    last_tick: Instant,
    ticks: u64,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
            ticks: 0,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns `true` at most once per interval.
    ///
    /// Missed ticks are dropped rather than replayed, so a stalled frame
    /// never causes a burst of generations.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) < self.interval {
            return false;
        }
        self.last_tick = now;
        self.ticks += 1;
        true
    }

    /// Time left until the next tick is due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }
}
