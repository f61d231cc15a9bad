// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`ElementBase`]: the geometry and state shared by every element.

use kurbo::{Point, Rect, Size};
use understory_event_handler::HandlerRef;

use crate::{
    BoundsError, ElementConfig, ElementFlags, ElementId, InteractionState, Padding, PaddingSide,
    SizeBounds, StretchMode,
};

/// Authoritative layout and interaction state for one element.
///
/// ## Semantics
///
/// - **Size** is clamped into [`SizeBounds`] on every [`set_size`](Self::set_size), each
///   dimension independently. Changing the bounds does not re-clamp the stored size; it stays as
///   is until the next `set_size` (see [`is_within_bounds`](Self::is_within_bounds)).
/// - **Position** is unconstrained.
/// - **Hit testing** uses the closed rectangle `[x, x + width] × [y, y + height]` and only
///   succeeds while the element is both visible and available. Padding does not inset it.
/// - **Events** go to at most one attached handler, which is not owned by the element.
///
/// A fresh element has default bounds, a zero size at the origin, no padding, is visible and
/// available, and has no handler.
#[derive(Clone, Debug, Default)]
pub struct ElementBase {
    bounds: SizeBounds,
    size: Size,
    origin: Point,
    padding: Padding,
    flags: ElementFlags,
    interaction: InteractionState,
    stretch: StretchMode,
    handler: Option<HandlerRef>,
    id: ElementId,
}

impl ElementBase {
    /// Create an element with default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element from a declarative configuration.
    ///
    /// Bounds are applied first, so a configured size is clamped into the configured bounds.
    pub fn from_config(config: &ElementConfig) -> Result<Self, BoundsError> {
        let mut base = Self::new();
        base.set_size_bounds(config.min_size, config.max_size)?;
        if let Some(size) = config.size {
            base.set_size(size.width, size.height);
        }
        base.origin = config.position;
        base.padding = config.padding;
        base.stretch = config.stretch;
        base.flags.set(ElementFlags::VISIBLE, config.visible);
        base.flags.set(ElementFlags::AVAILABLE, config.available);
        base.id = config.id;
        Ok(base)
    }

    /// Snapshot the current state as a configuration.
    pub fn config(&self) -> ElementConfig {
        ElementConfig {
            min_size: self.bounds.min(),
            max_size: self.bounds.max(),
            size: Some(self.size),
            position: self.origin,
            padding: self.padding,
            stretch: self.stretch,
            visible: self.is_visible(),
            available: self.is_available(),
            id: self.id,
        }
    }

    // --- Size ---

    /// Current size bounds.
    #[inline]
    pub fn size_bounds(&self) -> SizeBounds {
        self.bounds
    }

    /// Minimum size.
    #[inline]
    pub fn min_size(&self) -> Size {
        self.bounds.min()
    }

    /// Maximum size.
    #[inline]
    pub fn max_size(&self) -> Size {
        self.bounds.max()
    }

    /// Replace the minimum size, keeping the maximum.
    ///
    /// Rejected (leaving the bounds unchanged) if it would exceed the current maximum.
    pub fn set_min_size(&mut self, width: f64, height: f64) -> Result<(), BoundsError> {
        self.bounds = SizeBounds::new(Size::new(width, height), self.bounds.max())?;
        Ok(())
    }

    /// Replace the maximum size, keeping the minimum.
    ///
    /// Rejected (leaving the bounds unchanged) if it would fall below the current minimum.
    pub fn set_max_size(&mut self, width: f64, height: f64) -> Result<(), BoundsError> {
        self.bounds = SizeBounds::new(self.bounds.min(), Size::new(width, height))?;
        Ok(())
    }

    /// Replace both bounds at once.
    ///
    /// Use this when moving a range past its opposite end, which the single-sided setters reject.
    pub fn set_size_bounds(&mut self, min: Size, max: Size) -> Result<(), BoundsError> {
        self.bounds = SizeBounds::new(min, max)?;
        Ok(())
    }

    /// Store `width × height` clamped into the bounds and return the stored size.
    ///
    /// Idempotent: repeating a call with the same input leaves the same state.
    pub fn set_size(&mut self, width: f64, height: f64) -> Size {
        let requested = Size::new(width, height);
        let stored = self.bounds.clamp(requested);
        if stored != requested {
            log::trace!("clamped element {:?} size {requested:?} to {stored:?}", self.id);
        }
        self.size = stored;
        stored
    }

    /// Current size.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns `false` while the stored size lies outside the bounds.
    ///
    /// This happens for a fresh element (zero size under a `1×1` minimum) and after the
    /// bounds are tightened past the stored size.
    pub fn is_within_bounds(&self) -> bool {
        self.bounds.contains(self.size)
    }

    // --- Position ---

    /// Move the element's top-left corner.
    #[inline]
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.origin = Point::new(x, y);
    }

    /// Top-left corner.
    #[inline]
    pub fn position(&self) -> Point {
        self.origin
    }

    /// The element's rectangle: origin plus size.
    pub fn frame(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    // --- Padding ---

    /// Overwrite the padding on one side.
    #[inline]
    pub fn set_padding(&mut self, side: PaddingSide, value: f64) {
        self.padding.set(side, value);
    }

    /// All four padding values.
    #[inline]
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// The frame shrunk by the padding, for layout passes that place content.
    pub fn content_rect(&self) -> Rect {
        let frame = self.frame();
        let insets = self.padding.to_insets();
        Rect::new(
            frame.x0 + insets.x0,
            frame.y0 + insets.y0,
            frame.x1 - insets.x1,
            frame.y1 - insets.y1,
        )
    }

    // --- Flags ---

    /// Show or hide the element.
    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(ElementFlags::VISIBLE, visible);
    }

    /// Enable or disable interaction with the element.
    pub fn set_available(&mut self, available: bool) {
        self.flags.set(ElementFlags::AVAILABLE, available);
    }

    /// Whether the element is shown.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.flags.contains(ElementFlags::VISIBLE)
    }

    /// Whether the element accepts interaction.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.flags.contains(ElementFlags::AVAILABLE)
    }

    /// Both flags together.
    #[inline]
    pub fn flags(&self) -> ElementFlags {
        self.flags
    }

    /// Interaction scratch state, for concrete elements.
    #[inline]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Mutable interaction scratch state, for concrete elements.
    #[inline]
    pub fn interaction_mut(&mut self) -> &mut InteractionState {
        &mut self.interaction
    }

    /// Stored stretch preference.
    #[inline]
    pub fn stretch(&self) -> StretchMode {
        self.stretch
    }

    /// Store a stretch preference for a layout pass to read.
    #[inline]
    pub fn set_stretch(&mut self, stretch: StretchMode) {
        self.stretch = stretch;
    }

    /// Identity token.
    #[inline]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Assign the identity token.
    #[inline]
    pub fn set_id(&mut self, id: ElementId) {
        self.id = id;
    }

    // --- Hit testing ---

    /// Returns `true` if the element is visible and available.
    #[inline]
    pub fn is_hit_testable(&self) -> bool {
        self.flags.contains(ElementFlags::VISIBLE | ElementFlags::AVAILABLE)
    }

    /// Returns `true` if `point` lies in the closed frame and the element is hit-testable.
    pub fn hit_test(&self, point: Point) -> bool {
        if !self.is_hit_testable() {
            return false;
        }
        let frame = self.frame();
        point.x >= frame.x0 && point.x <= frame.x1 && point.y >= frame.y0 && point.y <= frame.y1
    }

    // --- Events ---

    /// Attach a handler, replacing any previous one. `None` detaches.
    pub fn set_event_handler(&mut self, handler: Option<HandlerRef>) {
        self.handler = handler;
    }

    /// The attached handler, if any.
    #[inline]
    pub fn event_handler(&self) -> Option<&HandlerRef> {
        self.handler.as_ref()
    }

    /// Forward `name` to the attached handler.
    ///
    /// Returns `true` if a live handler received it.
    pub fn trigger_event(&self, name: &str) -> bool {
        let Some(handler) = &self.handler else {
            return false;
        };
        let delivered = handler.notify(name);
        if !delivered {
            log::debug!("element {:?} dropped `{name}`: handler gone", self.id);
        }
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use understory_event_handler::EventHandler;

    #[derive(Default)]
    struct Counter(Cell<u32>);

    impl EventHandler for Counter {
        fn on_event(&self, _name: &str) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn bounded(min: f64, max: f64) -> ElementBase {
        let mut e = ElementBase::new();
        e.set_size_bounds(Size::new(min, min), Size::new(max, max))
            .unwrap();
        e
    }

    #[test]
    fn defaults() {
        let e = ElementBase::new();
        assert_eq!(e.min_size(), Size::new(1.0, 1.0));
        assert_eq!(e.max_size(), Size::new(100_000.0, 100_000.0));
        assert_eq!(e.size(), Size::ZERO);
        assert_eq!(e.position(), Point::ORIGIN);
        assert_eq!(e.padding(), Padding::ZERO);
        assert!(e.is_visible());
        assert!(e.is_available());
        assert!(e.interaction().is_empty());
        assert_eq!(e.stretch(), StretchMode::None);
        assert!(e.event_handler().is_none());
        assert_eq!(e.id(), ElementId(0));
        assert!(!e.is_within_bounds());
    }

    #[test]
    fn set_size_clamps_and_is_idempotent() {
        let mut e = bounded(10.0, 50.0);
        assert_eq!(e.set_size(5.0, 100.0), Size::new(10.0, 50.0));
        assert_eq!(e.size(), Size::new(10.0, 50.0));
        let first = e.clone().config();
        e.set_size(5.0, 100.0);
        assert_eq!(e.config(), first);
    }

    #[test]
    fn rejected_bounds_leave_state_unchanged() {
        let mut e = bounded(10.0, 50.0);
        assert!(e.set_min_size(60.0, 10.0).is_err());
        assert!(e.set_max_size(5.0, 50.0).is_err());
        assert!(e.set_min_size(f64::NAN, 10.0).is_err());
        assert!(e.set_max_size(-1.0, 50.0).is_err());
        assert_eq!(e.min_size(), Size::new(10.0, 10.0));
        assert_eq!(e.max_size(), Size::new(50.0, 50.0));
    }

    #[test]
    fn tightening_bounds_does_not_reclamp() {
        let mut e = bounded(10.0, 50.0);
        e.set_size(40.0, 40.0);
        e.set_max_size(20.0, 20.0).unwrap();
        assert_eq!(e.size(), Size::new(40.0, 40.0));
        assert!(!e.is_within_bounds());
        e.set_size(40.0, 40.0);
        assert_eq!(e.size(), Size::new(20.0, 20.0));
        assert!(e.is_within_bounds());
    }

    #[test]
    fn position_is_unconstrained() {
        let mut e = ElementBase::new();
        e.set_position(-1e9, 3.5e12);
        assert_eq!(e.position(), Point::new(-1e9, 3.5e12));
    }

    #[test]
    fn hit_test_uses_closed_rectangle() {
        let mut e = bounded(10.0, 50.0);
        e.set_size(5.0, 100.0);
        e.set_position(0.0, 0.0);
        assert!(e.hit_test(Point::new(0.0, 0.0)));
        assert!(e.hit_test(Point::new(10.0, 50.0)));
        assert!(!e.hit_test(Point::new(10.01, 50.0)));
        assert!(!e.hit_test(Point::new(5.0, -0.01)));
    }

    #[test]
    fn hit_test_is_gated_by_both_flags() {
        let mut e = bounded(10.0, 50.0);
        e.set_size(20.0, 20.0);
        e.set_position(5.0, 5.0);
        let inside = Point::new(10.0, 10.0);
        for (visible, available) in [(true, true), (true, false), (false, true), (false, false)] {
            e.set_visible(visible);
            e.set_available(available);
            assert_eq!(e.hit_test(inside), visible && available);
        }
    }

    #[test]
    fn padding_does_not_inset_hit_area() {
        let mut e = bounded(10.0, 50.0);
        e.set_size(20.0, 20.0);
        for side in PaddingSide::ALL {
            e.set_padding(side, 5.0);
        }
        assert!(e.hit_test(Point::new(0.0, 0.0)));
        assert!(e.hit_test(Point::new(20.0, 20.0)));
        assert_eq!(e.content_rect(), Rect::new(5.0, 5.0, 15.0, 15.0));
    }

    #[test]
    fn last_handler_wins_and_none_clears() {
        let a = Rc::new(Counter::default());
        let b = Rc::new(Counter::default());
        let mut e = ElementBase::new();
        assert!(!e.trigger_event("click"));

        e.set_event_handler(Some(HandlerRef::new(&a)));
        e.set_event_handler(Some(HandlerRef::new(&b)));
        assert!(e.trigger_event("click"));
        assert_eq!((a.0.get(), b.0.get()), (0, 1));

        e.set_event_handler(None);
        assert!(!e.trigger_event("click"));
        assert_eq!(b.0.get(), 1);
    }

    #[test]
    fn dropped_handler_is_not_called() {
        let a = Rc::new(Counter::default());
        let mut e = ElementBase::new();
        e.set_event_handler(Some(HandlerRef::new(&a)));
        drop(a);
        assert!(!e.trigger_event("click"));
    }

    #[test]
    fn interaction_state_is_left_to_subclasses() {
        let mut e = ElementBase::new();
        e.interaction_mut().insert(InteractionState::HOVERED);
        e.set_size(10.0, 10.0);
        e.set_visible(false);
        assert_eq!(e.interaction(), InteractionState::HOVERED);
    }
}
