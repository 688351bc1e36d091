//! Tick scheduling for the game loop.

/// Fixed-interval tick deadline driven by a caller-supplied millisecond clock.
///
/// The interval can change mid-run; the new value applies from the next
/// scheduled deadline. A late poll fires once and reschedules from `now_ms`,
/// so a stalled loop never produces a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval_ms: u64,
    next_ms: u64,
}

impl Ticker {
    pub fn new(interval_ms: u32, now_ms: u64) -> Self {
        let interval_ms = (interval_ms as u64).max(1);
        Self {
            interval_ms,
            next_ms: now_ms.saturating_add(interval_ms),
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms as u32
    }

    pub fn set_interval_ms(&mut self, interval_ms: u32) {
        self.interval_ms = (interval_ms as u64).max(1);
    }

    /// Returns true when the deadline has passed and schedules the next one.
    pub fn due(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_ms {
            return false;
        }
        self.next_ms = now_ms.saturating_add(self.interval_ms);
        true
    }

    /// Time left until the next deadline.
    pub fn timeout_ms(&self, now_ms: u64) -> u64 {
        self.next_ms.saturating_sub(now_ms)
    }

    /// Restart the countdown from `now_ms`.
    pub fn reset(&mut self, now_ms: u64) {
        self.next_ms = now_ms.saturating_add(self.interval_ms);
    }
}
