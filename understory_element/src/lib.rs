// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_element --heading-base-level=0

//! Understory Element: the base state every visual element carries.
//!
//! ## Overview
//!
//! [`ElementBase`] holds the layout and interaction state of one visual unit:
//!
//! - size, clamped into inclusive [`SizeBounds`] on every write,
//! - an unconstrained position,
//! - four independent [`Padding`] values,
//! - the [`ElementFlags`] `VISIBLE` and `AVAILABLE`, which together gate hit testing,
//! - an [`InteractionState`] scratch set and a [`StretchMode`] hint for concrete elements and layout,
//! - an optional non-owning handler that receives named events,
//! - an [`ElementId`] identity token.
//!
//! Concrete elements (buttons, panels, ...) embed an `ElementBase` and implement [`Element`],
//! adding an [`element_type`](Element::element_type) and a [`render`](Element::render) that draws
//! into an opaque [`RenderTarget`]. [`Elements`] owns type-erased elements behind generational
//! [`ElementKey`]s.
//!
//! ## Not a layout engine
//!
//! Sizes are clamped, nothing more. Padding and stretch are stored for an external layout pass;
//! padding never changes the hit-test area. Tightening the bounds does not re-clamp the stored
//! size until the next [`ElementBase::set_size`].
//!
//! ## Events
//!
//! An element forwards events to at most one handler, independently of any event bus. The same
//! handler can also be subscribed to an `understory_event_bus::EventBus`; the host wires the two
//! together if it wants to.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use kurbo::{Point, Size};
//! use understory_element::ElementBase;
//! use understory_event_handler::HandlerRef;
//!
//! let mut e = ElementBase::new();
//! e.set_min_size(10.0, 10.0).unwrap();
//! e.set_max_size(50.0, 50.0).unwrap();
//! assert_eq!(e.set_size(5.0, 100.0), Size::new(10.0, 50.0));
//!
//! e.set_position(0.0, 0.0);
//! assert!(e.hit_test(Point::new(10.0, 50.0)));
//! assert!(!e.hit_test(Point::new(10.01, 50.0)));
//!
//! e.set_available(false);
//! assert!(!e.hit_test(Point::new(5.0, 5.0)));
//!
//! let clicks = Rc::new(Cell::new(0));
//! let on_click = {
//!     let clicks = clicks.clone();
//!     Rc::new(move |_: &str| clicks.set(clicks.get() + 1))
//! };
//! e.set_event_handler(Some(HandlerRef::new(&on_click)));
//! assert!(e.trigger_event("click"));
//! assert_eq!(clicks.get(), 1);
//! ```
//!
//! ## Features
//!
//! - `serde`: serialize and deserialize [`ElementConfig`] and its value types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod base;
mod config;
mod element;
mod elements;
mod error;
mod types;

pub use base::ElementBase;
pub use config::ElementConfig;
pub use element::{Element, RenderStatus, RenderTarget, ResourceHandle};
pub use elements::{ElementKey, Elements};
pub use error::{BoundsError, UnknownPaddingSide};
pub use types::{
    ElementFlags, ElementId, InteractionState, Padding, PaddingSide, SizeBounds, StretchMode,
};
