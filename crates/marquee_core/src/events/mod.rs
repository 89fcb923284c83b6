//! # Event System
//!
//! Synchronous publish/subscribe bus decoupling game subsystems.
//!
//! Publishers and subscribers agree on payload layout out-of-band; the bus
//! routes by event-type ordinal and performs no schema validation. Dispatch
//! is synchronous and in list order - there are no queued or deferred events.

mod bus;

pub use bus::{EventBus, GameEvent, SubscriberId, MAX_EVENT_TYPES, MAX_SUBSCRIBERS_PER_EVENT};
