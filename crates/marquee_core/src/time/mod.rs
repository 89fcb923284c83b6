//! # Frame Timing
//!
//! Pacing and measurement for the fixed game loop:
//! - [`Clock`] - the monotonic time source seam
//! - [`FrameLimiter`] - blocks until the target frame duration has elapsed
//!   and reports delta-time normalized to a 60 Hz baseline
//! - [`FpsTracker`] - session-average frame rate for on-screen stats

mod clock;
mod fps;
mod limiter;

pub use clock::{Clock, MonotonicClock};
pub use fps::FpsTracker;
pub use limiter::{FrameLimiter, BASELINE_FPS};
