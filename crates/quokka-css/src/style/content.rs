//! Generated content, counters, text emphasis and line-box containment.

use std::ops::BitOr;

use serde::Serialize;

use crate::keyword::Keyword;

use super::image::StyleImage;
use super::keywords::keyword_enum;

/// One item of the `content` property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ContentData {
    /// A literal string.
    Text(String),
    /// `counter(name)`
    Counter(String),
    /// An image.
    Image(StyleImage),
}

/// The increment and reset configured for one counter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CounterDirective {
    /// `counter-increment` amount.
    pub increment: i16,
    /// `counter-reset` value.
    pub reset: i16,
}

keyword_enum! {
    /// Fill of a `-webkit-text-emphasis-style` mark.
    pub enum TextEmphasisFill {
        #[default]
        Filled = Filled,
        Open = Open,
    }
}

/// Shape of a `-webkit-text-emphasis-style` mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TextEmphasisMark {
    /// `none`
    #[default]
    None,
    /// Picked from the writing mode; resolved before the style is final.
    Auto,
    /// `dot`
    Dot,
    /// `circle`
    Circle,
    /// `double-circle`
    DoubleCircle,
    /// `triangle`
    Triangle,
    /// `sesame`
    Sesame,
    /// A custom string mark.
    Custom,
}

impl TextEmphasisMark {
    /// The keyword for a shaped mark. `None`, `Auto` and `Custom` have no
    /// shape keyword.
    #[must_use]
    pub const fn shape_keyword(self) -> Option<Keyword> {
        match self {
            Self::Dot => Some(Keyword::Dot),
            Self::Circle => Some(Keyword::Circle),
            Self::DoubleCircle => Some(Keyword::DoubleCircle),
            Self::Triangle => Some(Keyword::Triangle),
            Self::Sesame => Some(Keyword::Sesame),
            Self::None | Self::Auto | Self::Custom => None,
        }
    }
}

/// `-webkit-line-box-contain` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LineBoxContain(u8);

impl LineBoxContain {
    /// `none`
    pub const NONE: Self = Self(0);
    /// `block`
    pub const BLOCK: Self = Self(1);
    /// `inline`
    pub const INLINE: Self = Self(2);
    /// `font`
    pub const FONT: Self = Self(4);
    /// `glyphs`
    pub const GLYPHS: Self = Self(8);
    /// `replaced`
    pub const REPLACED: Self = Self(16);
    /// `inline-box`
    pub const INLINE_BOX: Self = Self(32);

    const NAMED: [(Self, Keyword); 6] = [
        (Self::BLOCK, Keyword::Block),
        (Self::INLINE, Keyword::Inline),
        (Self::FONT, Keyword::Font),
        (Self::GLYPHS, Keyword::Glyphs),
        (Self::REPLACED, Keyword::Replaced),
        (Self::INLINE_BOX, Keyword::InlineBox),
    ];

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

    /// The keywords of the set flags, in canonical order.
    pub fn keywords(self) -> impl Iterator<Item = Keyword> {
        Self::NAMED
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, keyword)| keyword)
    }
}

impl Default for LineBoxContain {
    fn default() -> Self {
        Self::BLOCK | Self::INLINE | Self::REPLACED
    }
}

impl BitOr for LineBoxContain {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_box_contain_keywords_in_order() {
        let keywords: Vec<_> = LineBoxContain::default().keywords().collect();
        assert_eq!(keywords, [Keyword::Block, Keyword::Inline, Keyword::Replaced]);
        assert_eq!(LineBoxContain::NONE.keywords().count(), 0);
    }
}
