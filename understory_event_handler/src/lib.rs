// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_handler --heading-base-level=0

//! Understory Event Handler: the capability shared by event buses and elements.
//!
//! ## Overview
//!
//! Anything that can receive a named-event notification implements [`EventHandler`].
//! Event sources (an event bus, an element forwarding UI events) never own their handlers.
//! They hold a [`HandlerRef`], which is a non-owning reference to a handler the host keeps alive.
//!
//! The lifetime contract is simple: the host owns handlers (typically in an `Rc`), and any
//! number of sources may refer to them. When the host drops a handler, every `HandlerRef`
//! to it goes dead and [`HandlerRef::notify`] reports `false` instead of calling into freed state.
//!
//! ## Interior mutability
//!
//! [`EventHandler::on_event`] takes `&self` because a single handler is commonly shared between
//! several sources. Handlers that record or react to events keep their state in a `Cell` or
//! `RefCell`.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_event_handler::{EventHandler, HandlerRef};
//!
//! #[derive(Default)]
//! struct Log(RefCell<Vec<String>>);
//!
//! impl EventHandler for Log {
//!     fn on_event(&self, name: &str) {
//!         self.0.borrow_mut().push(name.to_owned());
//!     }
//! }
//!
//! let log = Rc::new(Log::default());
//! let handler = HandlerRef::new(&log);
//!
//! assert!(handler.notify("click"));
//! assert_eq!(*log.0.borrow(), ["click"]);
//!
//! drop(log);
//! assert!(!handler.is_alive());
//! assert!(!handler.notify("click"));
//! ```
//!
//! Closures work too:
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_event_handler::HandlerRef;
//!
//! let hits = Rc::new(Cell::new(0_u32));
//! let counter = {
//!     let hits = hits.clone();
//!     Rc::new(move |_: &str| hits.set(hits.get() + 1))
//! };
//! let handler = HandlerRef::new(&counter);
//! handler.notify("hover");
//! handler.notify("hover");
//! assert_eq!(hits.get(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::rc::{Rc, Weak};
use core::fmt;

/// Receives named-event notifications.
pub trait EventHandler {
    /// Called once per delivered event with the event name that was triggered.
    fn on_event(&self, name: &str);
}

impl<F: Fn(&str)> EventHandler for F {
    #[inline]
    fn on_event(&self, name: &str) {
        self(name);
    }
}

/// Non-owning reference to an [`EventHandler`].
///
/// Cloning a `HandlerRef` is cheap and never extends the handler's lifetime.
#[derive(Clone)]
pub struct HandlerRef(Weak<dyn EventHandler>);

impl HandlerRef {
    /// Refer to a handler owned by the caller.
    pub fn new<H: EventHandler + 'static>(handler: &Rc<H>) -> Self {
        let weak: Weak<H> = Rc::downgrade(handler);
        Self(weak)
    }

    /// Refer to an already type-erased handler.
    pub fn from_dyn(handler: &Rc<dyn EventHandler>) -> Self {
        Self(Rc::downgrade(handler))
    }

    /// Returns `true` while the referenced handler is still owned by someone.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }

    /// Deliver `name` to the handler.
    ///
    /// Returns `false` without doing anything if the handler has been dropped.
    pub fn notify(&self, name: &str) -> bool {
        match self.0.upgrade() {
            Some(handler) => {
                handler.on_event(name);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if both references point at the same handler allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }

    /// Returns `true` if this reference points at `handler`.
    pub fn refers_to<H: EventHandler + 'static>(&self, handler: &Rc<H>) -> bool {
        self.ptr_eq(&Self::new(handler))
    }
}

impl fmt::Debug for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRef")
            .field("alive", &self.is_alive())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::borrow::ToOwned;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl EventHandler for Recorder {
        fn on_event(&self, name: &str) {
            self.0.borrow_mut().push(name.to_owned());
        }
    }

    #[test]
    fn notify_passes_the_name_through() {
        let rec = Rc::new(Recorder::default());
        let handler = HandlerRef::new(&rec);
        assert!(handler.notify("click"));
        assert!(handler.notify("Click"));
        assert_eq!(*rec.0.borrow(), ["click", "Click"]);
    }

    #[test]
    fn dropped_handler_is_skipped() {
        let rec = Rc::new(Recorder::default());
        let handler = HandlerRef::new(&rec);
        let clone = handler.clone();
        drop(rec);
        assert!(!handler.is_alive());
        assert!(!clone.notify("click"));
    }

    #[test]
    fn refs_do_not_keep_the_handler_alive() {
        let rec = Rc::new(Recorder::default());
        let _a = HandlerRef::new(&rec);
        let _b = HandlerRef::new(&rec);
        assert_eq!(Rc::strong_count(&rec), 1);
    }

    #[test]
    fn ptr_eq_distinguishes_handlers() {
        let a = Rc::new(Recorder::default());
        let b = Rc::new(Recorder::default());
        let ra = HandlerRef::new(&a);
        assert!(ra.ptr_eq(&HandlerRef::new(&a)));
        assert!(!ra.ptr_eq(&HandlerRef::new(&b)));
        assert!(ra.refers_to(&a));
        assert!(!ra.refers_to(&b));
    }

    #[test]
    fn from_dyn_matches_typed_construction() {
        let rec = Rc::new(Recorder::default());
        let erased: Rc<dyn EventHandler> = rec.clone();
        let handler = HandlerRef::from_dyn(&erased);
        assert!(handler.refers_to(&rec));
        handler.notify("hover");
        assert_eq!(*rec.0.borrow(), ["hover"]);
    }

    #[test]
    fn refs_to_different_handler_types_mix() {
        let rec = Rc::new(Recorder::default());
        let hits = Rc::new(RefCell::new(0_u32));
        let counter = {
            let hits = hits.clone();
            Rc::new(move |_: &str| *hits.borrow_mut() += 1)
        };
        let refs: Vec<HandlerRef> = alloc::vec![HandlerRef::new(&rec), HandlerRef::new(&counter)];
        for handler in &refs {
            assert!(handler.notify("tick"));
        }
        assert!(refs[0].refers_to(&rec));
        assert!(refs[1].refers_to(&counter));
        assert_eq!(*rec.0.borrow(), ["tick"]);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn closures_are_handlers() {
        let seen = Rc::new(RefCell::new(String::new()));
        let f = {
            let seen = seen.clone();
            Rc::new(move |name: &str| seen.borrow_mut().push_str(name))
        };
        let handler = HandlerRef::new(&f);
        handler.notify("a");
        handler.notify("b");
        assert_eq!(*seen.borrow(), "ab");
    }
}
