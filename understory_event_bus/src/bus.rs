// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bus itself: subscription storage and name-keyed dispatch.

use alloc::boxed::Box;
use alloc::vec::Vec;

use understory_event_handler::HandlerRef;

use crate::SubscribeError;

/// Capacity used by [`EventBus::new`] and [`Default`].
pub const DEFAULT_CAPACITY: usize = 100;

/// Handle to a single subscription, returned by [`EventBus::subscribe`].
///
/// Identifiers are never reused within one bus, so a stale id cannot remove a newer subscription.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// A registered pairing of event name and handler.
#[derive(Clone, Debug)]
pub struct Subscription {
    id: SubscriptionId,
    name: Box<str>,
    handler: HandlerRef,
}

impl Subscription {
    /// Identifier handed out when this subscription was created.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// The event name this subscription listens for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The subscribed handler.
    pub fn handler(&self) -> &HandlerRef {
        &self.handler
    }
}

/// Bounded registry of named-event subscriptions.
///
/// ## Invariants
///
/// - `len() <= capacity()` at all times.
/// - Subscriptions are kept in the order they were made; dispatch follows that order.
/// - There is no duplicate detection: subscribing the same handler to the same name twice
///   notifies it twice per trigger.
#[derive(Clone, Debug)]
pub struct EventBus {
    subscriptions: Vec<Subscription>,
    capacity: usize,
    next_id: u64,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Create a bus with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a bus that accepts at most `capacity` subscriptions.
    ///
    /// A capacity of zero yields a bus that rejects every subscription.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            subscriptions: Vec::new(),
            capacity,
            next_id: 0,
        }
    }

    /// Maximum number of subscriptions.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of active subscriptions.
    #[inline]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Returns `true` if there are no subscriptions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Number of subscriptions that can still be made.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.subscriptions.len()
    }

    /// Returns `true` once the bus holds `capacity` subscriptions.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.subscriptions.len() >= self.capacity
    }

    /// Subscribe `handler` to events named `name`.
    ///
    /// The name is copied into the bus. On success the subscription is appended after all
    /// existing ones.
    ///
    /// ## Errors
    ///
    /// - [`SubscribeError::EmptyName`] if `name` is empty.
    /// - [`SubscribeError::HandlerDropped`] if the handler is already gone.
    /// - [`SubscribeError::CapacityExhausted`] if the bus is full.
    pub fn subscribe(
        &mut self,
        name: &str,
        handler: HandlerRef,
    ) -> Result<SubscriptionId, SubscribeError> {
        if name.is_empty() {
            log::warn!("rejected subscription with an empty event name");
            return Err(SubscribeError::EmptyName);
        }
        if !handler.is_alive() {
            log::warn!("rejected subscription to `{name}`: handler already dropped");
            return Err(SubscribeError::HandlerDropped);
        }
        if self.is_full() {
            log::warn!(
                "rejected subscription to `{name}`: bus is full ({} subscriptions)",
                self.capacity
            );
            return Err(SubscribeError::CapacityExhausted {
                capacity: self.capacity,
            });
        }

        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            name: name.into(),
            handler,
        });
        log::debug!(
            "subscribed {id:?} to `{name}` ({}/{})",
            self.subscriptions.len(),
            self.capacity
        );
        Ok(id)
    }

    /// Remove a subscription. Returns `false` if `id` is not (or no longer) registered.
    ///
    /// The relative order of the remaining subscriptions is preserved.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(pos) = self.subscriptions.iter().position(|s| s.id == id) else {
            return false;
        };
        let removed = self.subscriptions.remove(pos);
        log::debug!("unsubscribed {id:?} from `{}`", removed.name);
        true
    }

    /// Drop every subscription whose handler has been dropped by its owner.
    ///
    /// Returns the number of subscriptions removed.
    pub fn prune(&mut self) -> usize {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.handler.is_alive());
        let removed = before - self.subscriptions.len();
        if removed > 0 {
            log::debug!("pruned {removed} subscription(s) with dropped handlers");
        }
        removed
    }

    /// Remove all subscriptions. Handlers are not notified.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }

    /// Notify every handler subscribed to `name`, in subscription order.
    ///
    /// Returns the number of handlers that were notified. Subscriptions whose handler has been
    /// dropped are skipped and not counted. An empty name or a name nobody subscribed to is a
    /// no-op returning `0`.
    pub fn trigger(&self, name: &str) -> usize {
        if name.is_empty() {
            return 0;
        }
        let mut delivered = 0;
        for sub in self.subscriptions.iter().filter(|s| &*s.name == name) {
            if sub.handler.notify(name) {
                delivered += 1;
            } else {
                log::debug!("skipped {:?} on `{name}`: handler dropped", sub.id);
            }
        }
        log::trace!("triggered `{name}`: {delivered} handler(s) notified");
        delivered
    }

    /// Number of subscriptions registered for exactly `name`.
    pub fn subscriber_count(&self, name: &str) -> usize {
        self.subscriptions
            .iter()
            .filter(|s| &*s.name == name)
            .count()
    }

    /// Iterate subscriptions in dispatch order.
    pub fn subscriptions(&self) -> impl Iterator<Item = &Subscription> + '_ {
        self.subscriptions.iter()
    }

    /// Iterate subscribed event names in dispatch order, one entry per subscription.
    pub fn event_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.subscriptions.iter().map(Subscription::name)
    }
}
