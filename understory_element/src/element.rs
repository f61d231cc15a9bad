// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Element`] capability and the opaque render sink it draws into.

use core::any::Any;
use core::fmt::Debug;

use kurbo::Point;

use crate::ElementBase;

/// A render target supplied by the rendering backend.
///
/// The element core never draws; it only hands the target through to [`Element::render`].
/// Concrete elements recover the backend type with `downcast_mut`.
pub trait RenderTarget: Any {}

impl dyn RenderTarget {
    /// Recover the concrete backend target.
    pub fn downcast_mut<T: RenderTarget>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut()
    }

    /// Returns `true` if the target is a `T`.
    pub fn is<T: RenderTarget>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }
}

/// Opaque handle to a backend resource (brush, bitmap, text format, ...).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceHandle(pub u64);

/// Status code produced by a render call.
///
/// Follows the `HRESULT` convention: negative values are failures. The element core passes
/// statuses through without acting on them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RenderStatus(pub i32);

impl RenderStatus {
    /// Success.
    pub const OK: Self = Self(0);
    /// Generic failure.
    pub const FAILED: Self = Self(-1);

    /// Returns `true` for non-negative codes.
    #[inline]
    pub const fn is_success(self) -> bool {
        self.0 >= 0
    }
}

/// A concrete visual element built on an [`ElementBase`].
///
/// Implementors embed an `ElementBase` and expose it through [`base`](Self::base) and
/// [`base_mut`](Self::base_mut). Resources owned by the element are released by its `Drop`
/// implementation when the owner destroys it.
///
/// ```
/// use kurbo::Point;
/// use understory_element::{Element, ElementBase, RenderStatus, RenderTarget, ResourceHandle};
///
/// #[derive(Debug, Default)]
/// struct Spacer(ElementBase);
///
/// impl Element for Spacer {
///     fn base(&self) -> &ElementBase { &self.0 }
///     fn base_mut(&mut self) -> &mut ElementBase { &mut self.0 }
///     fn element_type(&self) -> &'static str { "Spacer" }
///     fn render(&mut self, _: &mut dyn RenderTarget, _: &[ResourceHandle]) -> RenderStatus {
///         RenderStatus::OK
///     }
/// }
///
/// let mut s = Spacer::default();
/// s.base_mut().set_size(8.0, 8.0);
/// assert!(s.hit_test(Point::new(4.0, 4.0)));
/// ```
pub trait Element: Debug {
    /// Shared state.
    fn base(&self) -> &ElementBase;

    /// Mutable shared state.
    fn base_mut(&mut self) -> &mut ElementBase;

    /// Type name of the concrete element.
    fn element_type(&self) -> &'static str;

    /// Advance per-frame logic by `delta_time` seconds. Does nothing by default.
    fn update(&mut self, delta_time: f64) {
        let _ = delta_time;
    }

    /// Draw into `target` using the given backend resources.
    fn render(&mut self, target: &mut dyn RenderTarget, resources: &[ResourceHandle])
    -> RenderStatus;

    /// Hit test against the base frame and flags.
    fn hit_test(&self, point: Point) -> bool {
        self.base().hit_test(point)
    }

    /// Forward a named event to the attached handler.
    fn trigger_event(&self, name: &str) -> bool {
        self.base().trigger_event(name)
    }
}
