//! # Frame Limiter
//!
//! Paces the game loop at a target rate and normalizes elapsed time so
//! gameplay speed is independent of the achieved frame rate.

use std::time::Duration;

use crate::error::{TimeError, TimeResult};
use crate::time::clock::{Clock, MonotonicClock};

/// Reference rate for delta-time normalization.
///
/// `wait` expresses elapsed time as a multiple of one 60 Hz frame, so
/// movement code written as `position += velocity * delta_time` runs at
/// the same speed whether the loop achieves 30, 60, or 144 FPS.
pub const BASELINE_FPS: f64 = 60.0;

/// How long one cooperative yield lasts inside the wait loop.
const YIELD_STEP: Duration = Duration::from_millis(1);

/// Blocks the game loop until the target frame duration has elapsed.
///
/// The limiter holds the timestamp of the previous tick and sleeps in ~1 ms
/// increments until `1000 / target_fps` milliseconds have passed, rather
/// than busy-spinning. There is no cancellation: once `wait` is entered it
/// runs to completion, and quit conditions are the caller's business.
///
/// # Thread Safety
///
/// NOT thread-safe; one limiter per game loop.
#[derive(Debug)]
pub struct FrameLimiter<C: Clock = MonotonicClock> {
    /// Target duration of one frame, at integer-millisecond resolution
    /// to match the tick clock of the arcade hardware era. Rates above
    /// 1000 FPS round to zero and the limiter free-runs.
    frame_duration: Duration,
    /// Timestamp of the previous successful wait.
    last_tick: Duration,
    clock: C,
}

impl FrameLimiter<MonotonicClock> {
    /// Creates a limiter over the real clock, capturing the current time
    /// as the first tick reference.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::InvalidTargetRate`] if `target_fps` is zero;
    /// the original divides by it, so this fails fast instead.
    pub fn new(target_fps: u32) -> TimeResult<Self> {
        Self::with_clock(target_fps, MonotonicClock::new())
    }
}

impl<C: Clock> FrameLimiter<C> {
    /// Creates a limiter over a caller-supplied clock.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::InvalidTargetRate`] if `target_fps` is zero.
    pub fn with_clock(target_fps: u32, clock: C) -> TimeResult<Self> {
        if target_fps < 1 {
            return Err(TimeError::InvalidTargetRate { target_fps });
        }

        let frame_duration = Duration::from_millis(1000 / u64::from(target_fps));
        let last_tick = clock.now();
        tracing::debug!(target_fps, ?frame_duration, "frame limiter created");

        Ok(Self {
            frame_duration,
            last_tick,
            clock,
        })
    }

    /// Blocks until the target frame duration has elapsed since the last
    /// tick, then returns the normalized delta-time.
    ///
    /// The return value is the elapsed time expressed as a multiple of one
    /// 60 Hz frame: ~1.0 when running at 60 FPS, ~2.0 at 30 FPS.
    pub fn wait(&mut self) -> f64 {
        let elapsed = loop {
            let elapsed = self.clock.now().saturating_sub(self.last_tick);
            if elapsed >= self.frame_duration {
                break elapsed;
            }
            self.clock.sleep(YIELD_STEP);
        };

        self.last_tick = self.clock.now();

        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        elapsed_ms / (1000.0 / BASELINE_FPS)
    }

    /// Returns the target duration of one frame.
    #[inline]
    #[must_use]
    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Scripted clock: time only moves when the limiter yields.
    struct TestClock {
        now: Duration,
        sleeps: u32,
    }

    impl TestClock {
        fn shared() -> Rc<RefCell<TestClock>> {
            Rc::new(RefCell::new(TestClock {
                now: Duration::ZERO,
                sleeps: 0,
            }))
        }
    }

    impl Clock for Rc<RefCell<TestClock>> {
        fn now(&self) -> Duration {
            self.borrow().now
        }

        fn sleep(&mut self, duration: Duration) {
            let mut clock = self.borrow_mut();
            clock.now += duration;
            clock.sleeps += 1;
        }
    }

    #[test]
    fn sixty_fps_wait_is_one_baseline_frame() {
        let clock = TestClock::shared();
        let mut limiter = FrameLimiter::with_clock(60, Rc::clone(&clock)).unwrap();

        let delta_time = limiter.wait();

        // 16 ms of 1 ms yields, then elapsed / (1000 / 60).
        assert_eq!(clock.borrow().sleeps, 16);
        assert!((delta_time - 16.0 / (1000.0 / 60.0)).abs() < 1e-9);
        assert!((delta_time - 1.0).abs() < 0.1);
    }

    #[test]
    fn thirty_fps_wait_is_two_baseline_frames() {
        let clock = TestClock::shared();
        let mut limiter = FrameLimiter::with_clock(30, Rc::clone(&clock)).unwrap();

        let delta_time = limiter.wait();

        assert_eq!(clock.borrow().sleeps, 33);
        assert!((delta_time - 2.0).abs() < 0.05);
    }

    #[test]
    fn late_frame_does_not_sleep_and_reports_larger_delta() {
        let clock = TestClock::shared();
        let mut limiter = FrameLimiter::with_clock(60, Rc::clone(&clock)).unwrap();

        // Simulate a 50 ms hitch before the loop comes back around.
        clock.borrow_mut().now += Duration::from_millis(50);
        let delta_time = limiter.wait();

        assert_eq!(clock.borrow().sleeps, 0);
        assert!((delta_time - 3.0).abs() < 0.05);
    }

    #[test]
    fn consecutive_waits_measure_from_the_previous_tick() {
        let clock = TestClock::shared();
        let mut limiter = FrameLimiter::with_clock(60, Rc::clone(&clock)).unwrap();

        let first = limiter.wait();
        let second = limiter.wait();

        assert!((first - second).abs() < 1e-9);
        assert_eq!(clock.borrow().sleeps, 32);
    }

    #[test]
    fn zero_target_rate_is_rejected() {
        let err = FrameLimiter::new(0).unwrap_err();
        assert_eq!(err, TimeError::InvalidTargetRate { target_fps: 0 });
    }

    #[test]
    fn real_clock_limiter_paces_the_loop() {
        let mut limiter = FrameLimiter::new(250).unwrap();
        let started = std::time::Instant::now();

        let mut total = 0.0;
        for _ in 0..3 {
            total += limiter.wait();
        }

        // Three 4 ms frames: roughly 12 ms of wall time and a positive delta.
        assert!(started.elapsed() >= Duration::from_millis(11));
        assert!(total > 0.0);
    }
}
