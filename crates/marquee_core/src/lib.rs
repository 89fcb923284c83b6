//! # MARQUEE Core Runtime
//!
//! The substrate under an arcade game loop:
//! - Fixed-capacity slot pool: entity storage with zero heap churn per frame
//! - Synchronous event bus: deterministic, in-order fan-out between subsystems
//! - Frame limiter: target-rate pacing with 60 Hz delta-time normalization
//!
//! ## Architecture Rules
//!
//! 1. **No heap allocations on the per-frame path** - arenas and subscriber
//!    tables are sized once at startup
//! 2. **Single logical thread** - every component requires exclusive access
//!    for the duration of a call; there is no internal locking
//! 3. **No silent failure** - invalid indices, full tables, and exhausted
//!    pools come back as inspectable errors, never as no-ops
//!
//! ## Example
//!
//! ```rust,ignore
//! use marquee_core::{EventBus, FrameLimiter, SlotPool};
//!
//! let mut pool: SlotPool<Sprite> = SlotPool::new(256)?;
//! let mut bus = EventBus::new();
//! let mut limiter = FrameLimiter::new(60)?;
//!
//! loop {
//!     let delta_time = limiter.wait();
//!     // update entities, publish events, hand slots to the renderer
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod events;
pub mod memory;
pub mod time;

pub use config::RuntimeConfig;
pub use error::{
    ConfigError, ConfigResult, EventError, EventResult, PoolError, PoolResult, TimeError,
    TimeResult,
};
pub use events::{
    EventBus, GameEvent, SubscriberId, MAX_EVENT_TYPES, MAX_SUBSCRIBERS_PER_EVENT,
};
pub use memory::{SlotHandle, SlotPool};
pub use time::{Clock, FpsTracker, FrameLimiter, MonotonicClock, BASELINE_FPS};
