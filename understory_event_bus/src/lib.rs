// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_bus --heading-base-level=0

//! Understory Event Bus: a bounded, name-keyed publish/subscribe registry.
//!
//! ## Overview
//!
//! An [`EventBus`] holds an ordered list of subscriptions, each pairing an event name with a
//! non-owning [`HandlerRef`](understory_event_handler::HandlerRef).
//! [`EventBus::trigger`] walks that list in subscription order and notifies every handler whose
//! name matches exactly (byte-for-byte, case-sensitive, no wildcards).
//!
//! The bus has a fixed capacity chosen at construction. Once it is full, further subscriptions are
//! rejected with [`SubscribeError::CapacityExhausted`] and the bus is left unchanged, so the limit is
//! observable instead of silent.
//!
//! ## Ownership
//!
//! The bus never owns handlers. The host keeps them alive (usually in an `Rc`) and the bus skips
//! any handler that has been dropped since it subscribed. Use [`EventBus::prune`] to reclaim the
//! slots held by dropped handlers.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_event_bus::{EventBus, SubscribeError};
//! use understory_event_handler::{EventHandler, HandlerRef};
//!
//! struct Named(&'static str, Rc<RefCell<Vec<String>>>);
//! impl EventHandler for Named {
//!     fn on_event(&self, name: &str) {
//!         self.1.borrow_mut().push(format!("{}:{name}", self.0));
//!     }
//! }
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let h1 = Rc::new(Named("h1", seen.clone()));
//! let h2 = Rc::new(Named("h2", seen.clone()));
//! let h3 = Rc::new(Named("h3", seen.clone()));
//!
//! let mut bus = EventBus::with_capacity(2);
//! bus.subscribe("click", HandlerRef::new(&h1)).unwrap();
//! bus.subscribe("click", HandlerRef::new(&h2)).unwrap();
//! assert_eq!(
//!     bus.subscribe("hover", HandlerRef::new(&h3)),
//!     Err(SubscribeError::CapacityExhausted { capacity: 2 })
//! );
//!
//! assert_eq!(bus.trigger("click"), 2);
//! assert_eq!(bus.trigger("hover"), 0);
//! assert_eq!(*seen.borrow(), ["h1:click", "h2:click"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bus;
mod error;

pub use bus::{DEFAULT_CAPACITY, EventBus, Subscription, SubscriptionId};
pub use error::SubscribeError;
