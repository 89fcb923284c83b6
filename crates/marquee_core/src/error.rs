//! # Runtime Error Types
//!
//! Every component surfaces its failures as an explicit result; nothing in
//! this crate degrades into a silent no-op. Per-call failures are recoverable
//! (skip the spawn, drop the sound trigger) - construction failures leave no
//! partially usable object behind.

use thiserror::Error;

/// Errors that can occur in the slot pool.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Acquire was called with no free slots remaining.
    #[error("pool exhausted: all {capacity} slots active")]
    Exhausted {
        /// Total slot count of the pool.
        capacity: u32,
    },

    /// The backing arena or bookkeeping tables could not be allocated.
    #[error("pool allocation failed for {capacity} slots")]
    AllocationFailure {
        /// The requested slot count.
        capacity: u32,
    },

    /// A handle referenced a slot index outside the pool.
    #[error("invalid slot index {index} (capacity {capacity})")]
    InvalidIndex {
        /// The offending index.
        index: u32,
        /// Total slot count of the pool.
        capacity: u32,
    },

    /// A handle minted by a different pool was presented.
    #[error("handle belongs to a different pool")]
    ForeignHandle,

    /// The slot was already released.
    #[error("double release of slot {index}")]
    DoubleRelease {
        /// The offending index.
        index: u32,
    },
}

/// Result type for slot pool operations.
pub type PoolResult<T> = Result<T, PoolError>;

/// Errors that can occur in the event bus.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The event type ordinal is outside `[0, MAX_EVENT_TYPES)`.
    #[error("invalid event type {event_type} (max {max})")]
    InvalidEventType {
        /// The offending ordinal.
        event_type: u16,
        /// One past the largest valid ordinal.
        max: u16,
    },

    /// The per-type subscriber list is at capacity; the registration was dropped.
    #[error("subscriber list full for event type {event_type} (capacity {capacity})")]
    SubscriberListFull {
        /// The event type whose list is full.
        event_type: u16,
        /// Per-type subscriber capacity.
        capacity: usize,
    },

    /// Unsubscribe was called with an id that is not registered.
    #[error("unknown subscriber id {0:?}")]
    UnknownSubscriber(crate::events::SubscriberId),
}

/// Result type for event bus operations.
pub type EventResult<T> = Result<T, EventError>;

/// Errors that can occur in frame timing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The frame limiter was constructed with a target rate below 1 FPS.
    #[error("invalid target frame rate {target_fps} (must be >= 1)")]
    InvalidTargetRate {
        /// The offending rate.
        target_fps: u32,
    },
}

/// Result type for frame timing operations.
pub type TimeResult<T> = Result<T, TimeError>;

/// Errors that can occur while loading the runtime configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML or has unknown fields.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `target_fps` is outside the supported range.
    #[error("target_fps {target_fps} out of range (valid: 1-300)")]
    TargetFpsOutOfRange {
        /// The offending rate.
        target_fps: u32,
    },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
