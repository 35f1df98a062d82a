//! CSS property identifiers.
//!
//! [§ 2 Property index](https://www.w3.org/TR/CSS2/propidx.html)
//!
//! [`PropertyId`] is the closed set of properties the engine knows about:
//! standard longhands and shorthands, the `-webkit-` extensions, the flow
//! relative (logical) properties, and the SVG presentation properties. The
//! discriminant indexes the apply table.

use serde::Serialize;
use strum_macros::{EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::style::writing_mode::{
    LogicalExtent, LogicalSide, PhysicalSide, TextDirection, WritingMode,
};

macro_rules! properties {
    ($($variant:ident => $name:literal,)+) => {
        /// A CSS property identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
            EnumString, IntoStaticStr, EnumIter, EnumCount, FromRepr,
        )]
        #[strum(ascii_case_insensitive)]
        #[repr(u16)]
        pub enum PropertyId {
            $(
                #[doc = concat!("`", $name, "`")]
                #[strum(serialize = $name)]
                #[serde(rename = $name)]
                $variant,
            )+
        }
    };
}

properties! {
    // Standard properties
    BackgroundAttachment => "background-attachment",
    BackgroundClip => "background-clip",
    BackgroundColor => "background-color",
    BackgroundImage => "background-image",
    BackgroundOrigin => "background-origin",
    BackgroundPosition => "background-position",
    BackgroundPositionX => "background-position-x",
    BackgroundPositionY => "background-position-y",
    BackgroundRepeat => "background-repeat",
    BackgroundRepeatX => "background-repeat-x",
    BackgroundRepeatY => "background-repeat-y",
    BackgroundSize => "background-size",
    BorderBottomColor => "border-bottom-color",
    BorderBottomLeftRadius => "border-bottom-left-radius",
    BorderBottomRightRadius => "border-bottom-right-radius",
    BorderBottomStyle => "border-bottom-style",
    BorderBottomWidth => "border-bottom-width",
    BorderCollapse => "border-collapse",
    BorderLeftColor => "border-left-color",
    BorderLeftStyle => "border-left-style",
    BorderLeftWidth => "border-left-width",
    BorderRightColor => "border-right-color",
    BorderRightStyle => "border-right-style",
    BorderRightWidth => "border-right-width",
    BorderSpacing => "border-spacing",
    BorderTopColor => "border-top-color",
    BorderTopLeftRadius => "border-top-left-radius",
    BorderTopRightRadius => "border-top-right-radius",
    BorderTopStyle => "border-top-style",
    BorderTopWidth => "border-top-width",
    Bottom => "bottom",
    BoxShadow => "box-shadow",
    BoxSizing => "box-sizing",
    CaptionSide => "caption-side",
    Clear => "clear",
    Clip => "clip",
    Color => "color",
    Content => "content",
    CounterIncrement => "counter-increment",
    CounterReset => "counter-reset",
    Cursor => "cursor",
    Direction => "direction",
    Display => "display",
    EmptyCells => "empty-cells",
    Float => "float",
    FontFamily => "font-family",
    FontSize => "font-size",
    FontStretch => "font-stretch",
    FontStyle => "font-style",
    FontVariant => "font-variant",
    FontWeight => "font-weight",
    Height => "height",
    Left => "left",
    LetterSpacing => "letter-spacing",
    LineHeight => "line-height",
    ListStyleImage => "list-style-image",
    ListStylePosition => "list-style-position",
    ListStyleType => "list-style-type",
    MarginBottom => "margin-bottom",
    MarginLeft => "margin-left",
    MarginRight => "margin-right",
    MarginTop => "margin-top",
    MaxHeight => "max-height",
    MaxWidth => "max-width",
    MinHeight => "min-height",
    MinWidth => "min-width",
    Opacity => "opacity",
    Orphans => "orphans",
    OutlineColor => "outline-color",
    OutlineOffset => "outline-offset",
    OutlineStyle => "outline-style",
    OutlineWidth => "outline-width",
    Overflow => "overflow",
    OverflowX => "overflow-x",
    OverflowY => "overflow-y",
    PaddingBottom => "padding-bottom",
    PaddingLeft => "padding-left",
    PaddingRight => "padding-right",
    PaddingTop => "padding-top",
    Page => "page",
    PageBreakAfter => "page-break-after",
    PageBreakBefore => "page-break-before",
    PageBreakInside => "page-break-inside",
    PointerEvents => "pointer-events",
    Position => "position",
    Quotes => "quotes",
    Resize => "resize",
    Right => "right",
    Size => "size",
    Speak => "speak",
    Src => "src",
    TableLayout => "table-layout",
    TextAlign => "text-align",
    TextDecoration => "text-decoration",
    TextIndent => "text-indent",
    TextLineThrough => "text-line-through",
    TextLineThroughColor => "text-line-through-color",
    TextLineThroughMode => "text-line-through-mode",
    TextLineThroughStyle => "text-line-through-style",
    TextLineThroughWidth => "text-line-through-width",
    TextOverflow => "text-overflow",
    TextOverline => "text-overline",
    TextOverlineColor => "text-overline-color",
    TextOverlineMode => "text-overline-mode",
    TextOverlineStyle => "text-overline-style",
    TextOverlineWidth => "text-overline-width",
    TextRendering => "text-rendering",
    TextShadow => "text-shadow",
    TextTransform => "text-transform",
    TextUnderline => "text-underline",
    TextUnderlineColor => "text-underline-color",
    TextUnderlineMode => "text-underline-mode",
    TextUnderlineStyle => "text-underline-style",
    TextUnderlineWidth => "text-underline-width",
    Top => "top",
    UnicodeBidi => "unicode-bidi",
    UnicodeRange => "unicode-range",
    VerticalAlign => "vertical-align",
    Visibility => "visibility",
    WhiteSpace => "white-space",
    Widows => "widows",
    Width => "width",
    WordBreak => "word-break",
    WordSpacing => "word-spacing",
    WordWrap => "word-wrap",
    ZIndex => "z-index",
    Zoom => "zoom",

    // Standard shorthands
    Background => "background",
    Border => "border",
    BorderBottom => "border-bottom",
    BorderColor => "border-color",
    BorderLeft => "border-left",
    BorderRadius => "border-radius",
    BorderRight => "border-right",
    BorderStyle => "border-style",
    BorderTop => "border-top",
    BorderWidth => "border-width",
    Font => "font",
    ListStyle => "list-style",
    Margin => "margin",
    Outline => "outline",
    Padding => "padding",

    // -webkit- extensions
    WebkitAnimation => "-webkit-animation",
    WebkitAnimationDelay => "-webkit-animation-delay",
    WebkitAnimationDirection => "-webkit-animation-direction",
    WebkitAnimationDuration => "-webkit-animation-duration",
    WebkitAnimationFillMode => "-webkit-animation-fill-mode",
    WebkitAnimationIterationCount => "-webkit-animation-iteration-count",
    WebkitAnimationName => "-webkit-animation-name",
    WebkitAnimationPlayState => "-webkit-animation-play-state",
    WebkitAnimationTimingFunction => "-webkit-animation-timing-function",
    WebkitAppearance => "-webkit-appearance",
    WebkitBackfaceVisibility => "-webkit-backface-visibility",
    WebkitBackgroundClip => "-webkit-background-clip",
    WebkitBackgroundComposite => "-webkit-background-composite",
    WebkitBackgroundOrigin => "-webkit-background-origin",
    WebkitBackgroundSize => "-webkit-background-size",
    WebkitBorderFit => "-webkit-border-fit",
    WebkitBorderHorizontalSpacing => "-webkit-border-horizontal-spacing",
    WebkitBorderImage => "-webkit-border-image",
    WebkitBorderRadius => "-webkit-border-radius",
    WebkitBorderVerticalSpacing => "-webkit-border-vertical-spacing",
    WebkitBoxAlign => "-webkit-box-align",
    WebkitBoxDirection => "-webkit-box-direction",
    WebkitBoxFlex => "-webkit-box-flex",
    WebkitBoxFlexGroup => "-webkit-box-flex-group",
    WebkitBoxLines => "-webkit-box-lines",
    WebkitBoxOrdinalGroup => "-webkit-box-ordinal-group",
    WebkitBoxOrient => "-webkit-box-orient",
    WebkitBoxPack => "-webkit-box-pack",
    WebkitBoxReflect => "-webkit-box-reflect",
    WebkitBoxShadow => "-webkit-box-shadow",
    WebkitColorCorrection => "-webkit-color-correction",
    WebkitColumnBreakAfter => "-webkit-column-break-after",
    WebkitColumnBreakBefore => "-webkit-column-break-before",
    WebkitColumnBreakInside => "-webkit-column-break-inside",
    WebkitColumnCount => "-webkit-column-count",
    WebkitColumnGap => "-webkit-column-gap",
    WebkitColumnRule => "-webkit-column-rule",
    WebkitColumnRuleColor => "-webkit-column-rule-color",
    WebkitColumnRuleStyle => "-webkit-column-rule-style",
    WebkitColumnRuleWidth => "-webkit-column-rule-width",
    WebkitColumnSpan => "-webkit-column-span",
    WebkitColumnWidth => "-webkit-column-width",
    WebkitColumns => "-webkit-columns",
    WebkitDashboardRegion => "-webkit-dashboard-region",
    WebkitFontSizeDelta => "-webkit-font-size-delta",
    WebkitFontSmoothing => "-webkit-font-smoothing",
    WebkitHighlight => "-webkit-highlight",
    WebkitHyphenateCharacter => "-webkit-hyphenate-character",
    WebkitHyphenateLimitAfter => "-webkit-hyphenate-limit-after",
    WebkitHyphenateLimitBefore => "-webkit-hyphenate-limit-before",
    WebkitHyphens => "-webkit-hyphens",
    WebkitLineBoxContain => "-webkit-line-box-contain",
    WebkitLineBreak => "-webkit-line-break",
    WebkitLineClamp => "-webkit-line-clamp",
    WebkitLocale => "-webkit-locale",
    WebkitMarginAfterCollapse => "-webkit-margin-after-collapse",
    WebkitMarginBeforeCollapse => "-webkit-margin-before-collapse",
    WebkitMarginBottomCollapse => "-webkit-margin-bottom-collapse",
    WebkitMarginCollapse => "-webkit-margin-collapse",
    WebkitMarginTopCollapse => "-webkit-margin-top-collapse",
    WebkitMarquee => "-webkit-marquee",
    WebkitMarqueeDirection => "-webkit-marquee-direction",
    WebkitMarqueeIncrement => "-webkit-marquee-increment",
    WebkitMarqueeRepetition => "-webkit-marquee-repetition",
    WebkitMarqueeSpeed => "-webkit-marquee-speed",
    WebkitMarqueeStyle => "-webkit-marquee-style",
    WebkitMask => "-webkit-mask",
    WebkitMaskAttachment => "-webkit-mask-attachment",
    WebkitMaskBoxImage => "-webkit-mask-box-image",
    WebkitMaskClip => "-webkit-mask-clip",
    WebkitMaskComposite => "-webkit-mask-composite",
    WebkitMaskImage => "-webkit-mask-image",
    WebkitMaskOrigin => "-webkit-mask-origin",
    WebkitMaskPosition => "-webkit-mask-position",
    WebkitMaskPositionX => "-webkit-mask-position-x",
    WebkitMaskPositionY => "-webkit-mask-position-y",
    WebkitMaskRepeat => "-webkit-mask-repeat",
    WebkitMaskRepeatX => "-webkit-mask-repeat-x",
    WebkitMaskRepeatY => "-webkit-mask-repeat-y",
    WebkitMaskSize => "-webkit-mask-size",
    WebkitMatchNearestMailBlockquoteColor => "-webkit-match-nearest-mail-blockquote-color",
    WebkitNbspMode => "-webkit-nbsp-mode",
    WebkitPerspective => "-webkit-perspective",
    WebkitPerspectiveOrigin => "-webkit-perspective-origin",
    WebkitPerspectiveOriginX => "-webkit-perspective-origin-x",
    WebkitPerspectiveOriginY => "-webkit-perspective-origin-y",
    WebkitRtlOrdering => "-webkit-rtl-ordering",
    WebkitTextCombine => "-webkit-text-combine",
    WebkitTextDecorationsInEffect => "-webkit-text-decorations-in-effect",
    WebkitTextEmphasis => "-webkit-text-emphasis",
    WebkitTextEmphasisColor => "-webkit-text-emphasis-color",
    WebkitTextEmphasisPosition => "-webkit-text-emphasis-position",
    WebkitTextEmphasisStyle => "-webkit-text-emphasis-style",
    WebkitTextFillColor => "-webkit-text-fill-color",
    WebkitTextOrientation => "-webkit-text-orientation",
    WebkitTextSecurity => "-webkit-text-security",
    WebkitTextSizeAdjust => "-webkit-text-size-adjust",
    WebkitTextStroke => "-webkit-text-stroke",
    WebkitTextStrokeColor => "-webkit-text-stroke-color",
    WebkitTextStrokeWidth => "-webkit-text-stroke-width",
    WebkitTransform => "-webkit-transform",
    WebkitTransformOrigin => "-webkit-transform-origin",
    WebkitTransformOriginX => "-webkit-transform-origin-x",
    WebkitTransformOriginY => "-webkit-transform-origin-y",
    WebkitTransformOriginZ => "-webkit-transform-origin-z",
    WebkitTransformStyle => "-webkit-transform-style",
    WebkitTransition => "-webkit-transition",
    WebkitTransitionDelay => "-webkit-transition-delay",
    WebkitTransitionDuration => "-webkit-transition-duration",
    WebkitTransitionProperty => "-webkit-transition-property",
    WebkitTransitionTimingFunction => "-webkit-transition-timing-function",
    WebkitUserDrag => "-webkit-user-drag",
    WebkitUserModify => "-webkit-user-modify",
    WebkitUserSelect => "-webkit-user-select",
    WebkitWritingMode => "-webkit-writing-mode",

    // Flow-relative properties
    WebkitBorderAfter => "-webkit-border-after",
    WebkitBorderAfterColor => "-webkit-border-after-color",
    WebkitBorderAfterStyle => "-webkit-border-after-style",
    WebkitBorderAfterWidth => "-webkit-border-after-width",
    WebkitBorderBefore => "-webkit-border-before",
    WebkitBorderBeforeColor => "-webkit-border-before-color",
    WebkitBorderBeforeStyle => "-webkit-border-before-style",
    WebkitBorderBeforeWidth => "-webkit-border-before-width",
    WebkitBorderEnd => "-webkit-border-end",
    WebkitBorderEndColor => "-webkit-border-end-color",
    WebkitBorderEndStyle => "-webkit-border-end-style",
    WebkitBorderEndWidth => "-webkit-border-end-width",
    WebkitBorderStart => "-webkit-border-start",
    WebkitBorderStartColor => "-webkit-border-start-color",
    WebkitBorderStartStyle => "-webkit-border-start-style",
    WebkitBorderStartWidth => "-webkit-border-start-width",
    WebkitMarginAfter => "-webkit-margin-after",
    WebkitMarginBefore => "-webkit-margin-before",
    WebkitMarginEnd => "-webkit-margin-end",
    WebkitMarginStart => "-webkit-margin-start",
    WebkitPaddingAfter => "-webkit-padding-after",
    WebkitPaddingBefore => "-webkit-padding-before",
    WebkitPaddingEnd => "-webkit-padding-end",
    WebkitPaddingStart => "-webkit-padding-start",
    WebkitLogicalWidth => "-webkit-logical-width",
    WebkitLogicalHeight => "-webkit-logical-height",
    WebkitMinLogicalWidth => "-webkit-min-logical-width",
    WebkitMinLogicalHeight => "-webkit-min-logical-height",
    WebkitMaxLogicalWidth => "-webkit-max-logical-width",
    WebkitMaxLogicalHeight => "-webkit-max-logical-height",

    // SVG
    AlignmentBaseline => "alignment-baseline",
    BaselineShift => "baseline-shift",
    ClipPath => "clip-path",
    ClipRule => "clip-rule",
    ColorInterpolation => "color-interpolation",
    ColorInterpolationFilters => "color-interpolation-filters",
    ColorProfile => "color-profile",
    ColorRendering => "color-rendering",
    DominantBaseline => "dominant-baseline",
    EnableBackground => "enable-background",
    Fill => "fill",
    FillOpacity => "fill-opacity",
    FillRule => "fill-rule",
    Filter => "filter",
    FloodColor => "flood-color",
    FloodOpacity => "flood-opacity",
    GlyphOrientationHorizontal => "glyph-orientation-horizontal",
    GlyphOrientationVertical => "glyph-orientation-vertical",
    ImageRendering => "image-rendering",
    Kerning => "kerning",
    LightingColor => "lighting-color",
    Marker => "marker",
    MarkerEnd => "marker-end",
    MarkerMid => "marker-mid",
    MarkerStart => "marker-start",
    Mask => "mask",
    ShapeRendering => "shape-rendering",
    StopColor => "stop-color",
    StopOpacity => "stop-opacity",
    Stroke => "stroke",
    StrokeDasharray => "stroke-dasharray",
    StrokeDashoffset => "stroke-dashoffset",
    StrokeLinecap => "stroke-linecap",
    StrokeLinejoin => "stroke-linejoin",
    StrokeMiterlimit => "stroke-miterlimit",
    StrokeOpacity => "stroke-opacity",
    StrokeWidth => "stroke-width",
    TextAnchor => "text-anchor",
    VectorEffect => "vector-effect",
    WritingMode => "writing-mode",
    WebkitSvgShadow => "-webkit-svg-shadow",
}

impl PropertyId {
    /// The property name as written in style sheets.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Look up a property by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Dense index of this property.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// [§ 7.2 Shorthand properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
    ///
    /// "Some properties are shorthand properties, meaning that they allow
    /// authors to specify the values of several properties with a single
    /// property."
    #[must_use]
    pub const fn is_shorthand(self) -> bool {
        matches!(
            self,
            Self::Background
                | Self::Border
                | Self::BorderBottom
                | Self::BorderColor
                | Self::BorderLeft
                | Self::BorderRadius
                | Self::BorderRight
                | Self::BorderStyle
                | Self::BorderTop
                | Self::BorderWidth
                | Self::Font
                | Self::ListStyle
                | Self::Margin
                | Self::Outline
                | Self::Padding
                | Self::WebkitAnimation
                | Self::WebkitBorderAfter
                | Self::WebkitBorderBefore
                | Self::WebkitBorderEnd
                | Self::WebkitBorderStart
                | Self::WebkitBorderRadius
                | Self::WebkitColumnRule
                | Self::WebkitColumns
                | Self::WebkitMarginCollapse
                | Self::WebkitMarquee
                | Self::WebkitMask
                | Self::WebkitTextEmphasis
                | Self::WebkitTextStroke
                | Self::WebkitTransition
                | Self::Marker
        )
    }

    /// Whether this property is expressed relative to the writing mode and
    /// must be mapped to a physical property before use.
    #[must_use]
    pub const fn is_direction_aware(self) -> bool {
        matches!(
            self,
            Self::WebkitBorderAfter
                | Self::WebkitBorderAfterColor
                | Self::WebkitBorderAfterStyle
                | Self::WebkitBorderAfterWidth
                | Self::WebkitBorderBefore
                | Self::WebkitBorderBeforeColor
                | Self::WebkitBorderBeforeStyle
                | Self::WebkitBorderBeforeWidth
                | Self::WebkitBorderEnd
                | Self::WebkitBorderEndColor
                | Self::WebkitBorderEndStyle
                | Self::WebkitBorderEndWidth
                | Self::WebkitBorderStart
                | Self::WebkitBorderStartColor
                | Self::WebkitBorderStartStyle
                | Self::WebkitBorderStartWidth
                | Self::WebkitMarginAfter
                | Self::WebkitMarginBefore
                | Self::WebkitMarginEnd
                | Self::WebkitMarginStart
                | Self::WebkitPaddingAfter
                | Self::WebkitPaddingBefore
                | Self::WebkitPaddingEnd
                | Self::WebkitPaddingStart
                | Self::WebkitLogicalWidth
                | Self::WebkitLogicalHeight
                | Self::WebkitMinLogicalWidth
                | Self::WebkitMinLogicalHeight
                | Self::WebkitMaxLogicalWidth
                | Self::WebkitMaxLogicalHeight
        )
    }

    /// Whether this is an SVG presentation property.
    #[must_use]
    pub const fn is_svg(self) -> bool {
        matches!(
            self,
            Self::AlignmentBaseline
                | Self::BaselineShift
                | Self::ClipPath
                | Self::ClipRule
                | Self::ColorInterpolation
                | Self::ColorInterpolationFilters
                | Self::ColorProfile
                | Self::ColorRendering
                | Self::DominantBaseline
                | Self::EnableBackground
                | Self::Fill
                | Self::FillOpacity
                | Self::FillRule
                | Self::Filter
                | Self::FloodColor
                | Self::FloodOpacity
                | Self::GlyphOrientationHorizontal
                | Self::GlyphOrientationVertical
                | Self::ImageRendering
                | Self::Kerning
                | Self::LightingColor
                | Self::Marker
                | Self::MarkerEnd
                | Self::MarkerMid
                | Self::MarkerStart
                | Self::Mask
                | Self::ShapeRendering
                | Self::StopColor
                | Self::StopOpacity
                | Self::Stroke
                | Self::StrokeDasharray
                | Self::StrokeDashoffset
                | Self::StrokeLinecap
                | Self::StrokeLinejoin
                | Self::StrokeMiterlimit
                | Self::StrokeOpacity
                | Self::StrokeWidth
                | Self::TextAnchor
                | Self::VectorEffect
                | Self::WritingMode
                | Self::WebkitSvgShadow
        )
    }

    /// [§ 6.4 Flow-Relative Mappings](https://www.w3.org/TR/css-writing-modes-4/#logical-to-physical)
    ///
    /// Map a flow-relative property to the physical property it names under
    /// `direction` and `writing_mode`. Other properties map to themselves.
    #[must_use]
    pub fn resolve_direction_aware(self, direction: TextDirection, writing_mode: WritingMode) -> Self {
        use LogicalSide::{After, Before, End, Start};

        const BORDER: [PropertyId; 4] = [
            PropertyId::BorderTop,
            PropertyId::BorderRight,
            PropertyId::BorderBottom,
            PropertyId::BorderLeft,
        ];
        const BORDER_COLOR: [PropertyId; 4] = [
            PropertyId::BorderTopColor,
            PropertyId::BorderRightColor,
            PropertyId::BorderBottomColor,
            PropertyId::BorderLeftColor,
        ];
        const BORDER_STYLE: [PropertyId; 4] = [
            PropertyId::BorderTopStyle,
            PropertyId::BorderRightStyle,
            PropertyId::BorderBottomStyle,
            PropertyId::BorderLeftStyle,
        ];
        const BORDER_WIDTH: [PropertyId; 4] = [
            PropertyId::BorderTopWidth,
            PropertyId::BorderRightWidth,
            PropertyId::BorderBottomWidth,
            PropertyId::BorderLeftWidth,
        ];
        const MARGIN: [PropertyId; 4] = [
            PropertyId::MarginTop,
            PropertyId::MarginRight,
            PropertyId::MarginBottom,
            PropertyId::MarginLeft,
        ];
        const PADDING: [PropertyId; 4] = [
            PropertyId::PaddingTop,
            PropertyId::PaddingRight,
            PropertyId::PaddingBottom,
            PropertyId::PaddingLeft,
        ];

        let side = |logical: LogicalSide, sides: [Self; 4]| -> Self {
            match writing_mode.physical_side(logical, direction) {
                PhysicalSide::Top => sides[0],
                PhysicalSide::Right => sides[1],
                PhysicalSide::Bottom => sides[2],
                PhysicalSide::Left => sides[3],
            }
        };
        let extent = |logical: LogicalExtent, width: Self, height: Self| -> Self {
            match writing_mode.physical_extent(logical) {
                LogicalExtent::Width => width,
                LogicalExtent::Height => height,
            }
        };

        match self {
            Self::WebkitBorderAfter => side(After, BORDER),
            Self::WebkitBorderAfterColor => side(After, BORDER_COLOR),
            Self::WebkitBorderAfterStyle => side(After, BORDER_STYLE),
            Self::WebkitBorderAfterWidth => side(After, BORDER_WIDTH),
            Self::WebkitBorderBefore => side(Before, BORDER),
            Self::WebkitBorderBeforeColor => side(Before, BORDER_COLOR),
            Self::WebkitBorderBeforeStyle => side(Before, BORDER_STYLE),
            Self::WebkitBorderBeforeWidth => side(Before, BORDER_WIDTH),
            Self::WebkitBorderEnd => side(End, BORDER),
            Self::WebkitBorderEndColor => side(End, BORDER_COLOR),
            Self::WebkitBorderEndStyle => side(End, BORDER_STYLE),
            Self::WebkitBorderEndWidth => side(End, BORDER_WIDTH),
            Self::WebkitBorderStart => side(Start, BORDER),
            Self::WebkitBorderStartColor => side(Start, BORDER_COLOR),
            Self::WebkitBorderStartStyle => side(Start, BORDER_STYLE),
            Self::WebkitBorderStartWidth => side(Start, BORDER_WIDTH),
            Self::WebkitMarginAfter => side(After, MARGIN),
            Self::WebkitMarginBefore => side(Before, MARGIN),
            Self::WebkitMarginEnd => side(End, MARGIN),
            Self::WebkitMarginStart => side(Start, MARGIN),
            Self::WebkitPaddingAfter => side(After, PADDING),
            Self::WebkitPaddingBefore => side(Before, PADDING),
            Self::WebkitPaddingEnd => side(End, PADDING),
            Self::WebkitPaddingStart => side(Start, PADDING),
            Self::WebkitLogicalWidth => extent(LogicalExtent::Width, Self::Width, Self::Height),
            Self::WebkitLogicalHeight => extent(LogicalExtent::Height, Self::Width, Self::Height),
            Self::WebkitMinLogicalWidth => extent(LogicalExtent::Width, Self::MinWidth, Self::MinHeight),
            Self::WebkitMinLogicalHeight => extent(LogicalExtent::Height, Self::MinWidth, Self::MinHeight),
            Self::WebkitMaxLogicalWidth => extent(LogicalExtent::Width, Self::MaxWidth, Self::MaxHeight),
            Self::WebkitMaxLogicalHeight => extent(LogicalExtent::Height, Self::MaxWidth, Self::MaxHeight),
            other => other,
        }
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_round_trip() {
        for id in PropertyId::iter() {
            assert_eq!(PropertyId::from_name(id.name()), Some(id));
        }
        assert_eq!(PropertyId::from_name("Background-Color"), Some(PropertyId::BackgroundColor));
        assert_eq!(PropertyId::from_name("not-a-property"), None);
    }

    #[test]
    fn test_direction_aware_properties_resolve_to_physical() {
        for id in PropertyId::iter().filter(|id| id.is_direction_aware()) {
            for direction in [TextDirection::Ltr, TextDirection::Rtl] {
                for mode in [
                    WritingMode::HorizontalTb,
                    WritingMode::HorizontalBt,
                    WritingMode::VerticalRl,
                    WritingMode::VerticalLr,
                ] {
                    let resolved = id.resolve_direction_aware(direction, mode);
                    assert!(!resolved.is_direction_aware(), "{id} stayed logical");
                }
            }
        }
    }
}
