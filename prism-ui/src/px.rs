//! Physical pixel units used by the update contract.
//!
//! Sizes handed to a leaf view and reported back from it are whole physical
//! pixels. The origin is the top-left corner of the surface; the view itself
//! never positions anything, so only extents are modelled here.
//!
//! # Example
//!
//! ```
//! use prism_ui::px::{Px, PxSize};
//!
//! let size = PxSize::new(Px::new(40), Px::new(20));
//! assert_eq!(size.width.raw(), 40);
//! assert_eq!(PxSize::splat(Px(10)), PxSize::new(Px(10), Px(10)));
//! ```

/// A physical pixel extent.
///
/// Values are carried through the update contract unchanged; nothing here
/// does arithmetic on them. A bridge receiving a negative extent decides how
/// to draw it.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Px` from an `i32`.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw `i32` value.
    pub const fn raw(self) -> i32 {
        self.0
    }
}

/// A width/height pair in physical pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxSize {
    /// Horizontal extent.
    pub width: Px,
    /// Vertical extent.
    pub height: Px,
}

impl PxSize {
    /// A zero-sized extent.
    pub const ZERO: Self = Self {
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a size from a width and a height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Creates a square size with both sides equal to `side`.
    pub const fn splat(side: Px) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

impl From<(i32, i32)> for PxSize {
    fn from((width, height): (i32, i32)) -> Self {
        Self::new(Px(width), Px(height))
    }
}
