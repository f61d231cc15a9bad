// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the Understory element demos.
//!
//! - [`Button`] and [`Panel`]: minimal concrete elements.
//! - [`TextTarget`]: a render target that records draw calls as text.
//! - [`Printer`]: an event handler that logs and remembers what it receives.

use std::cell::RefCell;

use kurbo::Rect;
use understory_element::{Element, ElementBase, RenderStatus, RenderTarget, ResourceHandle};
use understory_event_handler::EventHandler;

/// Render target that records one line per draw call.
#[derive(Debug, Default)]
pub struct TextTarget {
    /// Recorded draw calls, in order.
    pub lines: Vec<String>,
}

impl RenderTarget for TextTarget {}

impl TextTarget {
    fn draw(&mut self, kind: &str, frame: Rect, resources: &[ResourceHandle]) {
        self.lines.push(format!(
            "{kind} at ({}, {}) {}x{} with {} resource(s)",
            frame.x0,
            frame.y0,
            frame.width(),
            frame.height(),
            resources.len()
        ));
    }
}

/// A clickable element.
#[derive(Debug, Default)]
pub struct Button {
    base: ElementBase,
    /// Caption drawn on the button.
    pub caption: String,
}

impl Button {
    /// A button with a caption and default geometry.
    pub fn new(caption: &str) -> Self {
        Self {
            base: ElementBase::new(),
            caption: caption.to_owned(),
        }
    }
}

impl Element for Button {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn element_type(&self) -> &'static str {
        "Button"
    }

    fn render(
        &mut self,
        target: &mut dyn RenderTarget,
        resources: &[ResourceHandle],
    ) -> RenderStatus {
        if !self.base.is_visible() {
            return RenderStatus::OK;
        }
        let frame = self.base.frame();
        match target.downcast_mut::<TextTarget>() {
            Some(text) => {
                text.draw(&format!("Button[{}]", self.caption), frame, resources);
                RenderStatus::OK
            }
            None => RenderStatus::FAILED,
        }
    }
}

/// A background element that counts elapsed time.
#[derive(Debug, Default)]
pub struct Panel {
    base: ElementBase,
    /// Seconds accumulated through [`Element::update`].
    pub elapsed: f64,
}

impl Element for Panel {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn element_type(&self) -> &'static str {
        "Panel"
    }

    fn update(&mut self, delta_time: f64) {
        self.elapsed += delta_time;
    }

    fn render(
        &mut self,
        target: &mut dyn RenderTarget,
        resources: &[ResourceHandle],
    ) -> RenderStatus {
        match target.downcast_mut::<TextTarget>() {
            Some(text) => {
                text.draw("Panel", self.base.frame(), resources);
                RenderStatus::OK
            }
            None => RenderStatus::FAILED,
        }
    }
}

/// Event handler that logs every event under a label and keeps a copy.
#[derive(Debug)]
pub struct Printer {
    label: &'static str,
    received: RefCell<Vec<String>>,
}

impl Printer {
    /// A handler that tags its log lines with `label`.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            received: RefCell::new(Vec::new()),
        }
    }

    /// Events received so far.
    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }
}

impl EventHandler for Printer {
    fn on_event(&self, name: &str) {
        log::info!("[{}] received `{name}`", self.label);
        self.received.borrow_mut().push(name.to_owned());
    }
}
