//! Resolved lengths.
//!
//! [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
//!
//! After the cascade every length on a style is one of a handful of
//! resolved forms: a fixed pixel count, a percentage still waiting for its
//! containing block, or a keyword the layout engine interprets.

use serde::Serialize;

/// A resolved length as stored on a style.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum Length {
    /// `auto`
    #[default]
    Auto,
    /// A relative (`*`) length. Must be resolved before it reaches the
    /// value model.
    Relative(f32),
    /// A percentage of some reference length.
    Percent(f32),
    /// Absolute pixels.
    Fixed(f32),
    /// `intrinsic`
    Intrinsic,
    /// `min-intrinsic`
    MinIntrinsic,
    /// No value (e.g. `max-width: none`).
    Undefined,
}

impl Length {
    /// A zero-pixel length.
    pub const ZERO: Self = Self::Fixed(0.0);

    /// The stored magnitude; zero for keyword forms.
    #[must_use]
    pub const fn value(self) -> f32 {
        match self {
            Self::Relative(v) | Self::Percent(v) | Self::Fixed(v) => v,
            Self::Auto | Self::Intrinsic | Self::MinIntrinsic | Self::Undefined => 0.0,
        }
    }

    /// Whether this is `auto`.
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Whether this is a fixed pixel length.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// Whether this is a percentage.
    #[must_use]
    pub const fn is_percent(self) -> bool {
        matches!(self, Self::Percent(_))
    }

    /// Whether this is undefined.
    #[must_use]
    pub const fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Whether the length is zero (fixed or percent).
    #[must_use]
    pub fn is_zero(self) -> bool {
        matches!(self, Self::Fixed(v) | Self::Percent(v) if v == 0.0)
    }

    /// Resolve against `reference`, treating keywords as zero.
    #[must_use]
    pub fn calc_float_value(self, reference: f32) -> f32 {
        match self {
            Self::Fixed(v) => v,
            Self::Percent(p) => reference * p / 100.0,
            _ => 0.0,
        }
    }
}

/// A width/height pair (border radii, background sizes).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LengthSize {
    /// Horizontal extent.
    pub width: Length,
    /// Vertical extent.
    pub height: Length,
}

impl LengthSize {
    /// Zero in both directions.
    pub const ZERO: Self = Self {
        width: Length::ZERO,
        height: Length::ZERO,
    };

    /// Build a size.
    #[must_use]
    pub const fn new(width: Length, height: Length) -> Self {
        Self { width, height }
    }
}

/// Four lengths in top, right, bottom, left order (`clip`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LengthBox {
    /// Top edge.
    pub top: Length,
    /// Right edge.
    pub right: Length,
    /// Bottom edge.
    pub bottom: Length,
    /// Left edge.
    pub left: Length,
}
