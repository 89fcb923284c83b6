//! # FPS Tracker
//!
//! Counts frames against the session start and reports the average rate,
//! for the `--show-fps` style on-screen stats overlay.

use std::fmt;
use std::time::Instant;

/// Session-average frame rate counter.
///
/// Deliberately simple: one counter and one timestamp, averaged over the
/// whole session rather than a sliding window.
#[derive(Debug)]
pub struct FpsTracker {
    frame_count: u32,
    session_start: Instant,
}

impl FpsTracker {
    /// Creates a tracker with the session starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            session_start: Instant::now(),
        }
    }

    /// Records one completed frame.
    #[inline]
    pub fn track(&mut self) {
        self.frame_count += 1;
    }

    /// Returns the number of frames recorded so far.
    #[inline]
    #[must_use]
    pub const fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Returns the average frames per second since the session started,
    /// or 0.0 before any measurable time has passed.
    #[must_use]
    pub fn fps(&self) -> f64 {
        let elapsed = self.session_start.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            f64::from(self.frame_count) / elapsed
        } else {
            0.0
        }
    }
}

impl Default for FpsTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FpsTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} fps", self.fps())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn fresh_tracker_reports_zero_frames() {
        let tracker = FpsTracker::new();
        assert_eq!(tracker.frame_count(), 0);
    }

    #[test]
    fn tracked_frames_produce_a_positive_average() {
        let mut tracker = FpsTracker::new();
        for _ in 0..5 {
            tracker.track();
        }
        thread::sleep(Duration::from_millis(10));

        assert_eq!(tracker.frame_count(), 5);
        assert!(tracker.fps() > 0.0);
        // 5 frames in at least 10 ms can't average above 500 fps.
        assert!(tracker.fps() <= 500.0);
    }

    #[test]
    fn display_formats_with_one_decimal() {
        let tracker = FpsTracker::new();
        let text = format!("{tracker}");
        assert!(text.ends_with(" fps"));
    }
}
