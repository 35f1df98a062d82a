//! Resolved color values.
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use serde::Serialize;

use crate::keyword::Keyword;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
///
/// An sRGB color packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct Rgba32(pub u32);

impl Rgba32 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    /// Opaque black (#000000).
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Opaque white (#ffffff).
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// The fallback used for unset inset/outset border colors.
    pub const LIGHT_GRAY: Self = Self::rgb(238, 238, 238);

    /// Pack an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Pack a color with alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// "the red color channel" (0-255)
    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// "the green color channel" (0-255)
    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// "the blue color channel" (0-255)
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// "the alpha channel" (0-255, 255 = fully opaque)
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Whether the color is not fully opaque.
    #[must_use]
    pub const fn has_alpha(self) -> bool {
        self.alpha() < 255
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// "The syntax of a <hex-color> is a <hash-token> token whose value consists of
    /// 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            // [§ 4.2.1]
            // "The three-digit RGB notation (#RGB) is converted into six-digit form (#RRGGBB)
            // by replicating digits, not by adding zeros."
            3 => Some(Self::rgb(digit(0)?, digit(1)?, digit(2)?)),
            4 => Some(Self::rgba(digit(0)?, digit(1)?, digit(2)?, digit(3)?)),
            6 => Some(Self::rgb(pair(0)?, pair(2)?, pair(4)?)),
            8 => Some(Self::rgba(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
            _ => None,
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    ///
    /// The sixteen basic colors, plus `orange` and `transparent`.
    #[must_use]
    pub const fn from_keyword(keyword: Keyword) -> Option<Self> {
        Some(match keyword {
            Keyword::Transparent => Self::TRANSPARENT,
            Keyword::Black => Self::BLACK,
            Keyword::White => Self::WHITE,
            Keyword::Aqua => Self::rgb(0, 255, 255),
            Keyword::Blue => Self::rgb(0, 0, 255),
            Keyword::Fuchsia => Self::rgb(255, 0, 255),
            Keyword::Gray => Self::rgb(128, 128, 128),
            Keyword::Green => Self::rgb(0, 128, 0),
            Keyword::Lime => Self::rgb(0, 255, 0),
            Keyword::Maroon => Self::rgb(128, 0, 0),
            Keyword::Navy => Self::rgb(0, 0, 128),
            Keyword::Olive => Self::rgb(128, 128, 0),
            Keyword::Orange => Self::rgb(255, 165, 0),
            Keyword::Purple => Self::rgb(128, 0, 128),
            Keyword::Red => Self::rgb(255, 0, 0),
            Keyword::Silver => Self::rgb(192, 192, 192),
            Keyword::Teal => Self::rgb(0, 128, 128),
            Keyword::Yellow => Self::rgb(255, 255, 0),
            _ => return None,
        })
    }
}

/// A color as stored on a style: a packed value plus a validity bit.
///
/// Invalid colors mean "unset"; readers fall back to another property
/// (usually `color`) or treat them as transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Color {
    rgb: Rgba32,
    valid: bool,
}

impl Color {
    /// The invalid (unset) color.
    pub const INVALID: Self = Self {
        rgb: Rgba32::TRANSPARENT,
        valid: false,
    };
    /// Opaque black.
    pub const BLACK: Self = Self::new(Rgba32::BLACK);
    /// Opaque white.
    pub const WHITE: Self = Self::new(Rgba32::WHITE);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(Rgba32::TRANSPARENT);

    /// A valid color.
    #[must_use]
    pub const fn new(rgb: Rgba32) -> Self {
        Self { rgb, valid: true }
    }

    /// Whether the color has been set.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.valid
    }

    /// The packed value; transparent black when invalid.
    #[must_use]
    pub const fn rgb(self) -> Rgba32 {
        self.rgb
    }
}

impl From<Rgba32> for Color {
    fn from(rgb: Rgba32) -> Self {
        Self::new(rgb)
    }
}
