//! Shadows, border images, reflections, and text decorations.

use std::ops::BitOr;

use serde::Serialize;

use super::color::Color;
use super::image::StyleImage;
use super::keywords::ReflectionDirection;
use super::length::{Length, LengthBox};

/// Whether a shadow is drawn outside or inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ShadowStyle {
    /// Outer shadow.
    #[default]
    Normal,
    /// `inset`
    Inset,
}

/// [§ 7.1 'box-shadow'](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)
///
/// One entry of a box or text shadow list. Offsets are in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ShadowData {
    /// Horizontal offset.
    pub x: i32,
    /// Vertical offset.
    pub y: i32,
    /// Blur radius.
    pub blur: i32,
    /// Spread distance (box shadows only).
    pub spread: i32,
    /// Outer or inset.
    pub style: ShadowStyle,
    /// Shadow color; invalid means "use `color`".
    pub color: Color,
}

/// How the edge and middle pieces of a nine-piece image fill their area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum NinePieceImageRule {
    /// `stretch`
    #[default]
    Stretch,
    /// `round`
    Round,
    /// `repeat`
    Repeat,
}

/// [§ 6 Border Images](https://www.w3.org/TR/css-backgrounds-3/#border-images)
///
/// `-webkit-border-image`, `-webkit-mask-box-image`, and reflection masks.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NinePieceImage {
    /// The source image; `None` renders as `none`.
    pub image: Option<StyleImage>,
    /// Slice offsets into the image (percentages or plain numbers).
    pub slices: LengthBox,
    /// Horizontal fill rule.
    pub horizontal_rule: NinePieceImageRule,
    /// Vertical fill rule.
    pub vertical_rule: NinePieceImageRule,
}

/// `-webkit-box-reflect`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StyleReflection {
    /// Side the reflection appears on.
    pub direction: ReflectionDirection,
    /// Gap between the box and its reflection.
    pub offset: Length,
    /// Mask applied to the reflection.
    pub mask: NinePieceImage,
}

/// `text-decoration` line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct TextDecoration(u8);

impl TextDecoration {
    /// No decoration.
    pub const NONE: Self = Self(0);
    /// `underline`
    pub const UNDERLINE: Self = Self(1);
    /// `overline`
    pub const OVERLINE: Self = Self(2);
    /// `line-through`
    pub const LINE_THROUGH: Self = Self(4);
    /// `blink`
    pub const BLINK: Self = Self(8);

    /// Whether every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no flag is set.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for TextDecoration {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Geometry of a dashboard region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DashboardRegionKind {
    /// The `none` region.
    #[default]
    None,
    /// `circle`
    Circle,
    /// `rectangle`
    Rectangle,
}

/// One resolved `-webkit-dashboard-region` entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StyleDashboardRegion {
    /// Region label.
    pub label: String,
    /// Insets from the border box.
    pub offsets: LengthBox,
    /// Region geometry.
    pub kind: DashboardRegionKind,
}
