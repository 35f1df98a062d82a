//! The resolved font description carried by a style.
//!
//! [CSS Fonts Level 4](https://www.w3.org/TR/css-fonts-4/)
//!
//! Font selection itself happens elsewhere; the style only records what
//! was asked for and the sizes the cascade settled on.

use serde::Serialize;

use super::keywords::{
    FontSmoothingMode, FontStyle, FontVariant, FontWeight, TextOrientation, TextRenderingMode,
};

/// Default font size in pixels when nothing else is specified.
pub const DEFAULT_FONT_SIZE_PX: f32 = 16.0;

/// Prefix marking a generic family stored in the family list.
pub const GENERIC_FAMILY_PREFIX: &str = "-webkit-";

/// [§ 3.1 'font-family'](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontDescription {
    /// Family names in priority order. Generic families carry the
    /// [`GENERIC_FAMILY_PREFIX`] (e.g. `-webkit-serif`).
    pub families: Vec<String>,
    /// The size the author asked for, before zoom.
    pub specified_size: f32,
    /// The size used for layout, after zoom and minimum-size rules.
    pub computed_size: f32,
    /// 1-based index into the `xx-small` … `-webkit-xxx-large` keyword
    /// scale when the size came from a keyword; 0 otherwise.
    pub keyword_size: u8,
    /// Whether the size was derived from the fixed-pitch default.
    pub use_fixed_default_size: bool,
    /// `font-weight`
    pub weight: FontWeight,
    /// `font-style`
    pub style: FontStyle,
    /// `font-variant`
    pub variant: FontVariant,
    /// `text-rendering`
    pub text_rendering: TextRenderingMode,
    /// `-webkit-font-smoothing`
    pub font_smoothing: FontSmoothingMode,
    /// `-webkit-text-orientation`
    pub text_orientation: TextOrientation,
    /// x-height of the primary font in pixels.
    pub x_height: f32,
}

impl Default for FontDescription {
    fn default() -> Self {
        Self {
            families: Vec::new(),
            specified_size: DEFAULT_FONT_SIZE_PX,
            computed_size: DEFAULT_FONT_SIZE_PX,
            keyword_size: 0,
            use_fixed_default_size: false,
            weight: FontWeight::default(),
            style: FontStyle::default(),
            variant: FontVariant::default(),
            text_rendering: TextRenderingMode::default(),
            font_smoothing: FontSmoothingMode::default(),
            text_orientation: TextOrientation::default(),
            x_height: DEFAULT_FONT_SIZE_PX / 2.0,
        }
    }
}

impl FontWeight {
    /// [§ 3.2.1 Relative Weights](https://www.w3.org/TR/css-fonts-4/#relative-weights)
    ///
    /// `bolder` relative to this weight.
    #[must_use]
    pub const fn bolder(self) -> Self {
        match self {
            Self::W100 | Self::W200 | Self::W300 => Self::W400,
            Self::W400 | Self::W500 => Self::W700,
            Self::W600 | Self::W700 | Self::W800 | Self::W900 => Self::W900,
        }
    }

    /// `lighter` relative to this weight.
    #[must_use]
    pub const fn lighter(self) -> Self {
        match self {
            Self::W100 | Self::W200 | Self::W300 | Self::W400 | Self::W500 => Self::W100,
            Self::W600 | Self::W700 => Self::W400,
            Self::W800 | Self::W900 => Self::W700,
        }
    }
}
