// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public value types for elements: identity, flags, padding, stretch, and size bounds.

use kurbo::{Insets, Size};

use crate::{BoundsError, UnknownPaddingSide};

/// Identity token of an element.
///
/// Assigned by the host; uniqueness is not enforced here.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(pub u64);

bitflags::bitflags! {
    /// Flags gating whether an element takes part in hit testing.
    ///
    /// The two flags are independent: an available but hidden element, or a shown but
    /// unavailable (greyed-out) one, are both representable.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element is shown.
        const VISIBLE   = 0b0000_0001;
        /// Element accepts interaction.
        const AVAILABLE = 0b0000_0010;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::AVAILABLE
    }
}

bitflags::bitflags! {
    /// Interaction scratch state for concrete elements.
    ///
    /// The base element never reads or writes these bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InteractionState: u8 {
        /// Pointer is over the element.
        const HOVERED = 0b0000_0001;
        /// Element is being pressed.
        const PRESSED = 0b0000_0010;
        /// Element has keyboard focus.
        const FOCUSED = 0b0000_0100;
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::empty()
    }
}

/// How an element would like to be stretched by a layout pass.
///
/// Stored on the element but never acted upon by it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StretchMode {
    /// Keep the configured size.
    #[default]
    None,
    /// Fill the available width.
    Horizontal,
    /// Fill the available height.
    Vertical,
    /// Fill both.
    Both,
}

impl StretchMode {
    /// Returns `true` for [`Horizontal`](Self::Horizontal) and [`Both`](Self::Both).
    pub const fn stretches_horizontally(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    /// Returns `true` for [`Vertical`](Self::Vertical) and [`Both`](Self::Both).
    pub const fn stretches_vertically(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

/// One side of an element's padding.
///
/// The discriminants are the stable raw tags used across library boundaries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum PaddingSide {
    /// Left edge.
    Left = 0,
    /// Right edge.
    Right = 1,
    /// Top edge.
    Top = 2,
    /// Bottom edge.
    Bottom = 3,
}

impl PaddingSide {
    /// All sides, in tag order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Raw tag of this side.
    pub const fn tag(self) -> u32 {
        self as u32
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u32> for PaddingSide {
    type Error = UnknownPaddingSide;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            2 => Ok(Self::Top),
            3 => Ok(Self::Bottom),
            other => Err(UnknownPaddingSide(other)),
        }
    }
}

/// Four independent padding scalars indexed by [`PaddingSide`].
///
/// Padding is a hint for an external layout pass. It does not affect hit testing.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding([f64; 4]);

impl Padding {
    /// No padding on any side.
    pub const ZERO: Self = Self([0.0; 4]);

    /// The same padding on every side.
    pub const fn uniform(value: f64) -> Self {
        Self([value; 4])
    }

    /// Padding on one side.
    #[inline]
    pub const fn get(&self, side: PaddingSide) -> f64 {
        self.0[side.index()]
    }

    /// Overwrite one side, leaving the others untouched.
    #[inline]
    pub fn set(&mut self, side: PaddingSide, value: f64) {
        self.0[side.index()] = value;
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, side: PaddingSide, value: f64) -> Self {
        self.set(side, value);
        self
    }

    /// Convert to Kurbo insets (`x0` left, `y0` top, `x1` right, `y1` bottom).
    pub fn to_insets(self) -> Insets {
        Insets::new(
            self.get(PaddingSide::Left),
            self.get(PaddingSide::Top),
            self.get(PaddingSide::Right),
            self.get(PaddingSide::Bottom),
        )
    }
}

impl From<Padding> for Insets {
    fn from(padding: Padding) -> Self {
        padding.to_insets()
    }
}

/// Inclusive minimum and maximum size of an element.
///
/// Always satisfies `min <= max` per dimension, with no NaN and no negative components.
/// Maxima may be infinite.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SizeBounds {
    min: Size,
    max: Size,
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SizeBounds {
    /// Default bounds: `1×1` up to `100000×100000`.
    pub const DEFAULT: Self = Self {
        min: Size::new(1.0, 1.0),
        max: Size::new(100_000.0, 100_000.0),
    };

    /// Validate and build bounds.
    pub fn new(min: Size, max: Size) -> Result<Self, BoundsError> {
        check_component(min)?;
        check_component(max)?;
        if min.width > max.width || min.height > max.height {
            return Err(BoundsError::MinExceedsMax { min, max });
        }
        Ok(Self { min, max })
    }

    /// Minimum size.
    #[inline]
    pub const fn min(&self) -> Size {
        self.min
    }

    /// Maximum size.
    #[inline]
    pub const fn max(&self) -> Size {
        self.max
    }

    /// Clamp each dimension of `size` independently into these bounds.
    ///
    /// A NaN dimension saturates to the minimum.
    pub fn clamp(&self, size: Size) -> Size {
        Size::new(
            clamp_dimension(size.width, self.min.width, self.max.width),
            clamp_dimension(size.height, self.min.height, self.max.height),
        )
    }

    /// Returns `true` if `size` lies inside these bounds in both dimensions.
    pub fn contains(&self, size: Size) -> bool {
        (self.min.width..=self.max.width).contains(&size.width)
            && (self.min.height..=self.max.height).contains(&size.height)
    }
}

fn check_component(size: Size) -> Result<(), BoundsError> {
    if size.width.is_nan() || size.height.is_nan() {
        return Err(BoundsError::NotANumber(size));
    }
    if size.width < 0.0 || size.height < 0.0 {
        return Err(BoundsError::Negative(size));
    }
    Ok(())
}

// Saturating, and unlike `f64::clamp` never panics; `min <= max` is upheld by `SizeBounds`.
fn clamp_dimension(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() || value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
