//! # Slot Pool
//!
//! Fixed-capacity storage for entities that spawn and die at high rates.
//!
//! The pool owns a contiguous arena of `capacity` typed slots, a LIFO stack
//! of free indices, and a parallel active-flag table. Acquire and release are
//! O(1); the arena is allocated once and never grows.

use std::sync::atomic::{AtomicU32, Ordering};

use bytemuck::Zeroable;

use crate::error::{PoolError, PoolResult};

/// Brand counter shared by every pool in the process.
///
/// Each pool stamps its brand into the handles it mints, so a handle from
/// one pool is rejected by every other pool instead of silently aliasing a
/// slot that happens to share its index.
static NEXT_POOL_BRAND: AtomicU32 = AtomicU32::new(0);

/// Handle to a slot issued by [`SlotPool::acquire`].
///
/// The handle packs two parts:
/// - Lower 32 bits: slot index into the arena
/// - Upper 32 bits: the brand of the pool that minted it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SlotHandle(u64);

impl SlotHandle {
    /// Packs an index and a pool brand into a handle.
    #[inline]
    #[must_use]
    pub(crate) const fn new(index: u32, pool: u32) -> Self {
        Self(((pool as u64) << 32) | (index as u64))
    }

    /// Returns the slot index portion of the handle.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0 as u32
    }

    /// Returns the brand of the pool that minted this handle.
    #[inline]
    #[must_use]
    pub const fn pool(self) -> u32 {
        (self.0 >> 32) as u32
    }
}

/// A fixed-capacity slot pool.
///
/// Slots are acquired zeroed and released back to a LIFO free stack, so the
/// most recently released index is reused first. Slot *identity* is the
/// caller's concern, not allocation *order*.
///
/// # Thread Safety
///
/// The pool is NOT thread-safe. Every operation requires exclusive access
/// for the duration of the call.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Copy, Zeroable)]
/// struct Bullet { x: f32, y: f32, vx: f32, vy: f32 }
///
/// let mut pool: SlotPool<Bullet> = SlotPool::new(512)?;
///
/// let (handle, bullet) = pool.acquire()?; // zeroed slot, O(1)
/// bullet.vx = 4.0;
///
/// pool.release(handle)?; // O(1), index goes back on the free stack
/// ```
pub struct SlotPool<T> {
    /// The arena: one contiguous allocation of `capacity` slots.
    storage: Box<[T]>,
    /// LIFO stack of free slot indices.
    free: Vec<u32>,
    /// Which slots are currently issued. Redundant with free-stack
    /// membership, kept for O(1) point queries instead of stack scans.
    active: Box<[bool]>,
    /// Number of currently issued slots.
    active_count: u32,
    /// Total slot count, fixed at construction.
    capacity: u32,
    /// Brand stamped into every handle this pool mints.
    brand: u32,
}

impl<T: Zeroable> SlotPool<T> {
    /// Creates a pool with every slot free and zeroed.
    ///
    /// The arena, free stack, and active table are allocated once here;
    /// no later operation allocates.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::AllocationFailure`] if the backing memory
    /// cannot be obtained. The pool must not be used in that case - none
    /// is returned.
    pub fn new(capacity: u32) -> PoolResult<Self> {
        let failed = |_| PoolError::AllocationFailure { capacity };
        let len = capacity as usize;

        let mut storage: Vec<T> = Vec::new();
        storage.try_reserve_exact(len).map_err(failed)?;
        storage.extend((0..len).map(|_| T::zeroed()));

        let mut free: Vec<u32> = Vec::new();
        free.try_reserve_exact(len).map_err(failed)?;
        // Push in reverse so index 0 is on top of the stack.
        free.extend((0..capacity).rev());

        let mut active: Vec<bool> = Vec::new();
        active.try_reserve_exact(len).map_err(failed)?;
        active.extend((0..len).map(|_| false));

        Ok(Self {
            storage: storage.into_boxed_slice(),
            free,
            active: active.into_boxed_slice(),
            active_count: 0,
            capacity,
            brand: NEXT_POOL_BRAND.fetch_add(1, Ordering::Relaxed),
        })
    }

    /// Acquires a free slot, zeroing it before handing it out.
    ///
    /// This is **O(1)** with **zero heap allocations**. The returned index
    /// is not reissued until the handle is released.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Exhausted`] when no free slots remain; the
    /// pool's counters are left untouched.
    pub fn acquire(&mut self) -> PoolResult<(SlotHandle, &mut T)> {
        let index = self.free.pop().ok_or(PoolError::Exhausted {
            capacity: self.capacity,
        })?;

        self.active[index as usize] = true;
        self.active_count += 1;

        let brand = self.brand;
        let slot = &mut self.storage[index as usize];
        *slot = T::zeroed();

        Ok((SlotHandle::new(index, brand), slot))
    }

    /// Releases a slot back to the free stack.
    ///
    /// This is **O(1)**. The index becomes the next one handed out.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ForeignHandle`] if the handle came from another pool
    /// - [`PoolError::InvalidIndex`] if the index is out of range
    /// - [`PoolError::DoubleRelease`] if the slot is already free
    pub fn release(&mut self, handle: SlotHandle) -> PoolResult<()> {
        let index = self.checked_index(handle)?;
        if !self.active[index] {
            return Err(PoolError::DoubleRelease {
                index: handle.index(),
            });
        }

        self.active[index] = false;
        self.active_count -= 1;
        self.free.push(handle.index());
        Ok(())
    }

    /// Marks every slot free and rebuilds the free stack.
    ///
    /// The arena is not reallocated and slot contents are left as-is;
    /// they are re-zeroed on the next acquire.
    pub fn reset(&mut self) {
        self.active.fill(false);
        self.active_count = 0;
        self.free.clear();
        self.free.extend((0..self.capacity).rev());
        tracing::debug!(capacity = self.capacity, "slot pool reset");
    }

    /// Returns a reference to the slot's storage regardless of active state.
    ///
    /// Combine with [`is_active`](Self::is_active) to avoid reading a slot
    /// that has been released since the handle was minted.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ForeignHandle`] or [`PoolError::InvalidIndex`]
    /// for handles this pool never minted.
    pub fn get(&self, handle: SlotHandle) -> PoolResult<&T> {
        let index = self.checked_index(handle)?;
        Ok(&self.storage[index])
    }

    /// Mutable variant of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Same conditions as [`get`](Self::get).
    pub fn get_mut(&mut self, handle: SlotHandle) -> PoolResult<&mut T> {
        let index = self.checked_index(handle)?;
        Ok(&mut self.storage[index])
    }

    /// Returns whether the slot behind `handle` is currently issued.
    ///
    /// Foreign and out-of-range handles report `false`.
    #[inline]
    #[must_use]
    pub fn is_active(&self, handle: SlotHandle) -> bool {
        self.checked_index(handle)
            .map(|index| self.active[index])
            .unwrap_or(false)
    }

    /// Returns the number of currently issued slots.
    #[inline]
    #[must_use]
    pub const fn active_count(&self) -> u32 {
        self.active_count
    }

    /// Returns the number of free slots.
    #[inline]
    #[must_use]
    pub const fn free_count(&self) -> u32 {
        self.capacity - self.active_count
    }

    /// Returns the total slot count.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Iterates over all active slots in index order.
    ///
    /// This scans the whole arena, so the cost is O(capacity) rather than
    /// O(`active_count`) - a sparse pool pays for its capacity, not its
    /// occupancy. Acceptable here because capacity is small and fixed.
    pub fn iter_active(&self) -> impl Iterator<Item = (SlotHandle, &T)> {
        let brand = self.brand;
        self.storage
            .iter()
            .zip(self.active.iter())
            .enumerate()
            .filter(|(_, (_, active))| **active)
            .map(move |(index, (slot, _))| (SlotHandle::new(index as u32, brand), slot))
    }

    /// Mutable variant of [`iter_active`](Self::iter_active).
    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (SlotHandle, &mut T)> {
        let brand = self.brand;
        self.storage
            .iter_mut()
            .zip(self.active.iter())
            .enumerate()
            .filter(|(_, (_, active))| **active)
            .map(move |(index, (slot, _))| (SlotHandle::new(index as u32, brand), slot))
    }

    /// Validates a handle against this pool and converts it to an arena index.
    fn checked_index(&self, handle: SlotHandle) -> PoolResult<usize> {
        if handle.pool() != self.brand {
            return Err(PoolError::ForeignHandle);
        }
        if handle.index() >= self.capacity {
            return Err(PoolError::InvalidIndex {
                index: handle.index(),
                capacity: self.capacity,
            });
        }
        Ok(handle.index() as usize)
    }
}
