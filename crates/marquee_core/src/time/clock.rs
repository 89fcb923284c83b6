//! # Clock Seam
//!
//! The frame limiter only needs two things from the platform: a monotonic
//! "now" and a way to yield the processor. Putting them behind a trait keeps
//! the pacing algorithm deterministic under test.

use std::thread;
use std::time::{Duration, Instant};

/// Monotonic time source used by the frame limiter.
pub trait Clock {
    /// Returns the time elapsed since some fixed origin.
    ///
    /// Successive calls never go backwards.
    fn now(&self) -> Duration;

    /// Yields the calling context for approximately `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// The real clock: `Instant` for time, `thread::sleep` to yield.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn sleep_advances_the_clock() {
        let mut clock = MonotonicClock::new();
        let before = clock.now();
        clock.sleep(Duration::from_millis(2));
        assert!(clock.now() - before >= Duration::from_millis(2));
    }
}
