use std::time::{Duration, Instant};

/// Cancellable cadence gate for the animation loop.
///
/// The loop polls faster than the cadence and asks `due` whether to step.
/// A disarmed timer never fires; re-arming resets the reference instant, so
/// a pause of any length never replays missed ticks.
#[derive(Debug)]
pub struct TickTimer {
    cadence: Duration,
    armed: bool,
    last: Instant,
}

impl TickTimer {
    #[must_use]
    pub fn new(cadence: Duration) -> Self {
        Self {
            cadence,
            armed: false,
            last: Instant::now(),
        }
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn start(&mut self, now: Instant) {
        self.armed = true;
        self.last = now;
    }

    pub const fn stop(&mut self) {
        self.armed = false;
    }

    /// True once per elapsed cadence window while armed.
    ///
    /// The reference instant resets to `now` on firing, not to the ideal
    /// schedule, so a late poll yields one step and the backlog is skipped.
    pub fn due(&mut self, now: Instant) -> bool {
        if !self.armed {
            return false;
        }
        if now.saturating_duration_since(self.last) >= self.cadence {
            self.last = now;
            return true;
        }
        false
    }
}
