//! # Entity Storage
//!
//! Pre-allocated slot pools for zero-allocation gameplay.
//!
//! ## Design Philosophy
//!
//! All memory is allocated once at startup. During gameplay:
//! - Acquire and release are O(1) against a LIFO free stack
//! - No heap allocations, no reallocation, fixed capacity
//! - Released slots are re-zeroed before reuse

mod slot_pool;

pub use slot_pool::{SlotHandle, SlotPool};
