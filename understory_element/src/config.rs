// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};

use crate::{ElementId, Padding, SizeBounds, StretchMode};

/// Declarative construction parameters for an [`ElementBase`](crate::ElementBase).
///
/// The default matches a freshly constructed element. With the `serde` feature, missing fields
/// fall back to those defaults when deserializing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ElementConfig {
    /// Minimum size.
    pub min_size: Size,
    /// Maximum size.
    pub max_size: Size,
    /// Requested size, clamped into the bounds. `None` keeps the zero initial size.
    pub size: Option<Size>,
    /// Top-left corner.
    pub position: Point,
    /// Padding hint for layout.
    pub padding: Padding,
    /// Stretch hint for layout.
    pub stretch: StretchMode,
    /// Initial visibility.
    pub visible: bool,
    /// Initial availability.
    pub available: bool,
    /// Identity token.
    pub id: ElementId,
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self {
            min_size: SizeBounds::DEFAULT.min(),
            max_size: SizeBounds::DEFAULT.max(),
            size: None,
            position: Point::ORIGIN,
            padding: Padding::ZERO,
            stretch: StretchMode::None,
            visible: true,
            available: true,
            id: ElementId::default(),
        }
    }
}
