//! # Event Bus
//!
//! Bounded subscriber tables with synchronous, in-order fan-out.

use bytemuck::Pod;

use crate::error::{EventError, EventResult};

/// Number of routable event-type ordinals.
pub const MAX_EVENT_TYPES: usize = 256;

/// Subscriber capacity per event type.
pub const MAX_SUBSCRIBERS_PER_EVENT: usize = 32;

/// An event travelling through the bus.
///
/// The bus never owns or copies the payload; the borrow is only valid for
/// the duration of the synchronous [`EventBus::publish`] call, and
/// subscribers must not retain it beyond their callback.
#[derive(Clone, Copy, Debug)]
pub struct GameEvent<'a> {
    /// Ordinal identifying the event category for dispatch routing.
    pub event_type: u16,
    /// Borrowed payload bytes; layout is agreed out-of-band.
    pub payload: &'a [u8],
}

impl<'a> GameEvent<'a> {
    /// Creates an event with no payload.
    #[inline]
    #[must_use]
    pub const fn empty(event_type: u16) -> Self {
        Self {
            event_type,
            payload: &[],
        }
    }

    /// Creates an event whose payload is the raw bytes of `payload`.
    #[inline]
    #[must_use]
    pub fn from_pod<T: Pod>(event_type: u16, payload: &'a T) -> Self {
        Self {
            event_type,
            payload: bytemuck::bytes_of(payload),
        }
    }

    /// Reinterprets the payload as a `T`.
    ///
    /// Returns `None` if the payload's size or alignment does not match -
    /// the usual sign that publisher and subscriber disagree on layout.
    #[inline]
    #[must_use]
    pub fn payload_as<T: Pod>(&self) -> Option<&'a T> {
        bytemuck::try_from_bytes(self.payload).ok()
    }
}

/// Identifier returned by [`EventBus::subscribe`], used to unsubscribe.
///
/// Packs the event type (upper 16 bits) with a registration token unique
/// for the lifetime of the bus (lower 48 bits).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SubscriberId(u64);

impl SubscriberId {
    /// Packs an event type and a registration token into an id.
    #[inline]
    #[must_use]
    const fn new(event_type: u16, token: u64) -> Self {
        Self(((event_type as u64) << 48) | (token & 0x0000_FFFF_FFFF_FFFF))
    }

    /// Returns the event type this subscription listens for.
    #[inline]
    #[must_use]
    pub const fn event_type(self) -> u16 {
        (self.0 >> 48) as u16
    }

    /// Returns the registration token portion of the id.
    #[inline]
    #[must_use]
    const fn token(self) -> u64 {
        self.0 & 0x0000_FFFF_FFFF_FFFF
    }
}

/// Callback invoked for every published event of the subscribed type.
///
/// The closure environment carries whatever state the subscriber needs,
/// so there is no separate user-data pointer.
type Callback = Box<dyn FnMut(&GameEvent<'_>)>;

/// One registered subscription.
struct Subscriber {
    token: u64,
    callback: Callback,
}

/// Synchronous publish/subscribe event bus.
///
/// Owns one bounded subscriber list per event-type ordinal, all allocated
/// at construction; publishing never allocates. Dispatch order is the
/// list's current order: insertion order, except that an earlier
/// unsubscribe on the same type may have permuted it via swap-removal.
///
/// # Thread Safety
///
/// The bus is NOT thread-safe. Every operation requires exclusive access
/// for the duration of the call. Because [`publish`](Self::publish) holds
/// `&mut self` while callbacks run, a callback cannot reach back into the
/// bus at all - the borrow checker is the reentrancy guard.
pub struct EventBus {
    /// `subscribers[event_type]` - insertion-ordered, capacity-bounded.
    subscribers: Vec<Vec<Subscriber>>,
    /// Monotonic token source for subscriber ids.
    next_token: u64,
}

impl EventBus {
    /// Creates a bus with zero subscribers for every event type.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: (0..MAX_EVENT_TYPES)
                .map(|_| Vec::with_capacity(MAX_SUBSCRIBERS_PER_EVENT))
                .collect(),
            next_token: 0,
        }
    }

    /// Registers `callback` for events of `event_type`.
    ///
    /// # Errors
    ///
    /// - [`EventError::InvalidEventType`] if the ordinal is out of range
    /// - [`EventError::SubscriberListFull`] if the per-type list is at
    ///   capacity; the registration is dropped and existing entries are
    ///   untouched
    pub fn subscribe<F>(&mut self, event_type: u16, callback: F) -> EventResult<SubscriberId>
    where
        F: FnMut(&GameEvent<'_>) + 'static,
    {
        let list = self
            .subscribers
            .get_mut(usize::from(event_type))
            .ok_or(EventError::InvalidEventType {
                event_type,
                max: MAX_EVENT_TYPES as u16,
            })?;

        if list.len() >= MAX_SUBSCRIBERS_PER_EVENT {
            return Err(EventError::SubscriberListFull {
                event_type,
                capacity: MAX_SUBSCRIBERS_PER_EVENT,
            });
        }

        let token = self.next_token;
        self.next_token += 1;
        list.push(Subscriber {
            token,
            callback: Box::new(callback),
        });

        tracing::debug!(event_type, token, "subscriber registered");
        Ok(SubscriberId::new(event_type, token))
    }

    /// Removes the subscription identified by `id`.
    ///
    /// Removal swaps with the last entry and shrinks, so it is O(1) but
    /// subscriber order for that event type is not stable across it.
    ///
    /// # Errors
    ///
    /// - [`EventError::InvalidEventType`] if the id's ordinal is out of range
    /// - [`EventError::UnknownSubscriber`] if no matching registration exists
    pub fn unsubscribe(&mut self, id: SubscriberId) -> EventResult<()> {
        let event_type = id.event_type();
        let list = self
            .subscribers
            .get_mut(usize::from(event_type))
            .ok_or(EventError::InvalidEventType {
                event_type,
                max: MAX_EVENT_TYPES as u16,
            })?;

        let position = list
            .iter()
            .position(|subscriber| subscriber.token == id.token())
            .ok_or(EventError::UnknownSubscriber(id))?;

        list.swap_remove(position);
        tracing::debug!(event_type, token = id.token(), "subscriber removed");
        Ok(())
    }

    /// Synchronously invokes every subscription registered for
    /// `event.event_type`, in the list's current order.
    ///
    /// Returns the number of subscribers invoked. The bus itself is
    /// stateless across publishes - nothing is queued or deferred.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidEventType`] if the ordinal is out of
    /// range; no callback runs in that case.
    pub fn publish(&mut self, event: &GameEvent<'_>) -> EventResult<usize> {
        let list = self
            .subscribers
            .get_mut(usize::from(event.event_type))
            .ok_or(EventError::InvalidEventType {
                event_type: event.event_type,
                max: MAX_EVENT_TYPES as u16,
            })?;

        for subscriber in list.iter_mut() {
            (subscriber.callback)(event);
        }

        tracing::trace!(
            event_type = event.event_type,
            delivered = list.len(),
            "event published"
        );
        Ok(list.len())
    }

    /// Returns the number of subscriptions for `event_type`.
    ///
    /// Out-of-range ordinals report zero.
    #[must_use]
    pub fn subscriber_count(&self, event_type: u16) -> usize {
        self.subscribers
            .get(usize::from(event_type))
            .map_or(0, Vec::len)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
