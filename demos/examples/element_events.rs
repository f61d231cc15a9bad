// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer clicks routed to elements, and named events fanned out by a bus.
//!
//! Demonstrate hit testing through `Elements`, forwarding the hit element's event to its
//! handler, and triggering the same handlers through an `EventBus`.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example element_events`

use std::rc::Rc;

use kurbo::Point;
use understory_demos::{Button, Panel, Printer, TextTarget};
use understory_element::{Element, Elements, ResourceHandle};
use understory_event_bus::EventBus;
use understory_event_handler::HandlerRef;

fn main() {
    env_logger::init();

    let ui = Rc::new(Printer::new("ui"));
    let audio = Rc::new(Printer::new("audio"));

    let mut bus = EventBus::with_capacity(3);
    bus.subscribe("click", HandlerRef::new(&ui)).unwrap();
    bus.subscribe("click", HandlerRef::new(&audio)).unwrap();
    if let Err(err) = bus.subscribe("", HandlerRef::new(&audio)) {
        println!("rejected: {err}");
    }

    let mut elements = Elements::new();

    let mut panel = Panel::default();
    panel.base_mut().set_size(200.0, 120.0);
    let panel = elements.insert(Box::new(panel));

    let mut ok = Button::new("OK");
    ok.base_mut().set_min_size(40.0, 20.0).unwrap();
    ok.base_mut().set_position(20.0, 80.0);
    ok.base_mut().set_size(10.0, 24.0);
    ok.base_mut().set_event_handler(Some(HandlerRef::new(&ui)));
    let ok = elements.insert(Box::new(ok));

    let mut cancel = Button::new("Cancel");
    cancel.base_mut().set_position(100.0, 80.0);
    cancel.base_mut().set_size(60.0, 24.0);
    cancel.base_mut().set_available(false);
    cancel
        .base_mut()
        .set_event_handler(Some(HandlerRef::new(&ui)));
    let cancel = elements.insert(Box::new(cancel));

    println!("== Clicks ==");
    for p in [
        Point::new(30.0, 90.0),
        Point::new(120.0, 90.0),
        Point::new(5.0, 5.0),
    ] {
        match elements.hit_test(p) {
            Some(key) => {
                let element = elements.get(key).unwrap();
                println!("  {p:?} -> {} {key:?}", element.element_type());
                if key == ok {
                    element.trigger_event("ok.pressed");
                }
            }
            None => println!("  {p:?} -> nothing"),
        }
    }

    println!("== Bus ==");
    let notified = bus.trigger("click");
    println!("  click reached {notified} handler(s)");

    println!("== Frame ==");
    elements.update_all(1.0 / 60.0);
    let mut target = TextTarget::default();
    let keys: Vec<_> = elements.keys().collect();
    for key in keys {
        let status = elements.render(key, &mut target, &[ResourceHandle(1)]);
        println!("  {key:?} -> {status:?}");
    }
    for line in &target.lines {
        println!("  {line}");
    }

    elements.destroy(cancel);
    elements.destroy(panel);

    assert_eq!(ui.received(), ["ok.pressed", "click"]);
    assert_eq!(audio.received(), ["click"]);
    assert_eq!(elements.len(), 1);
}
