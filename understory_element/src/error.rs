// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use thiserror::Error;

/// A size bound was rejected; the element keeps its previous bounds.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum BoundsError {
    /// A component of the bound was NaN.
    #[error("size bound {0:?} has a NaN component")]
    NotANumber(Size),
    /// A component of the bound was negative.
    #[error("size bound {0:?} has a negative component")]
    Negative(Size),
    /// The minimum would exceed the maximum in at least one dimension.
    #[error("minimum size {min:?} exceeds maximum size {max:?}")]
    MinExceedsMax {
        /// Requested (or current) minimum.
        min: Size,
        /// Requested (or current) maximum.
        max: Size,
    },
}

/// A raw padding-side tag outside the four known sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("unknown padding side tag {0}")]
pub struct UnknownPaddingSide(pub u32);
