//! The properties a computed style declaration enumerates.

use std::sync::LazyLock;

use crate::property::PropertyId;

/// Longhands listed by `cssText`, `length` and `item`, in order.
/// Shorthands and flow-relative properties are left out; the
/// `background-position-x/y` longhands are non-standard and also omitted.
const CSS_PROPERTIES: &[PropertyId] = &[
    PropertyId::BackgroundAttachment,
    PropertyId::BackgroundClip,
    PropertyId::BackgroundColor,
    PropertyId::BackgroundImage,
    PropertyId::BackgroundOrigin,
    PropertyId::BackgroundPosition,
    PropertyId::BackgroundRepeat,
    PropertyId::BackgroundSize,
    PropertyId::BorderBottomColor,
    PropertyId::BorderBottomLeftRadius,
    PropertyId::BorderBottomRightRadius,
    PropertyId::BorderBottomStyle,
    PropertyId::BorderBottomWidth,
    PropertyId::BorderCollapse,
    PropertyId::BorderLeftColor,
    PropertyId::BorderLeftStyle,
    PropertyId::BorderLeftWidth,
    PropertyId::BorderRightColor,
    PropertyId::BorderRightStyle,
    PropertyId::BorderRightWidth,
    PropertyId::BorderTopColor,
    PropertyId::BorderTopLeftRadius,
    PropertyId::BorderTopRightRadius,
    PropertyId::BorderTopStyle,
    PropertyId::BorderTopWidth,
    PropertyId::Bottom,
    PropertyId::BoxShadow,
    PropertyId::BoxSizing,
    PropertyId::CaptionSide,
    PropertyId::Clear,
    PropertyId::Clip,
    PropertyId::Color,
    PropertyId::Cursor,
    PropertyId::Direction,
    PropertyId::Display,
    PropertyId::EmptyCells,
    PropertyId::Float,
    PropertyId::FontFamily,
    PropertyId::FontSize,
    PropertyId::FontStyle,
    PropertyId::FontVariant,
    PropertyId::FontWeight,
    PropertyId::Height,
    PropertyId::Left,
    PropertyId::LetterSpacing,
    PropertyId::LineHeight,
    PropertyId::ListStyleImage,
    PropertyId::ListStylePosition,
    PropertyId::ListStyleType,
    PropertyId::MarginBottom,
    PropertyId::MarginLeft,
    PropertyId::MarginRight,
    PropertyId::MarginTop,
    PropertyId::MaxHeight,
    PropertyId::MaxWidth,
    PropertyId::MinHeight,
    PropertyId::MinWidth,
    PropertyId::Opacity,
    PropertyId::Orphans,
    PropertyId::OutlineColor,
    PropertyId::OutlineStyle,
    PropertyId::OutlineWidth,
    PropertyId::OverflowX,
    PropertyId::OverflowY,
    PropertyId::PaddingBottom,
    PropertyId::PaddingLeft,
    PropertyId::PaddingRight,
    PropertyId::PaddingTop,
    PropertyId::PageBreakAfter,
    PropertyId::PageBreakBefore,
    PropertyId::PageBreakInside,
    PropertyId::PointerEvents,
    PropertyId::Position,
    PropertyId::Resize,
    PropertyId::Right,
    PropertyId::Speak,
    PropertyId::TableLayout,
    PropertyId::TextAlign,
    PropertyId::TextDecoration,
    PropertyId::TextIndent,
    PropertyId::TextRendering,
    PropertyId::TextShadow,
    PropertyId::TextOverflow,
    PropertyId::TextTransform,
    PropertyId::Top,
    PropertyId::UnicodeBidi,
    PropertyId::VerticalAlign,
    PropertyId::Visibility,
    PropertyId::WhiteSpace,
    PropertyId::Widows,
    PropertyId::Width,
    PropertyId::WordBreak,
    PropertyId::WordSpacing,
    PropertyId::WordWrap,
    PropertyId::ZIndex,
    PropertyId::Zoom,
    PropertyId::WebkitAnimationDelay,
    PropertyId::WebkitAnimationDirection,
    PropertyId::WebkitAnimationDuration,
    PropertyId::WebkitAnimationFillMode,
    PropertyId::WebkitAnimationIterationCount,
    PropertyId::WebkitAnimationName,
    PropertyId::WebkitAnimationPlayState,
    PropertyId::WebkitAnimationTimingFunction,
    PropertyId::WebkitAppearance,
    PropertyId::WebkitBackfaceVisibility,
    PropertyId::WebkitBackgroundClip,
    PropertyId::WebkitBackgroundComposite,
    PropertyId::WebkitBackgroundOrigin,
    PropertyId::WebkitBackgroundSize,
    PropertyId::WebkitBorderFit,
    PropertyId::WebkitBorderHorizontalSpacing,
    PropertyId::WebkitBorderImage,
    PropertyId::WebkitBorderVerticalSpacing,
    PropertyId::WebkitBoxAlign,
    PropertyId::WebkitBoxDirection,
    PropertyId::WebkitBoxFlex,
    PropertyId::WebkitBoxFlexGroup,
    PropertyId::WebkitBoxLines,
    PropertyId::WebkitBoxOrdinalGroup,
    PropertyId::WebkitBoxOrient,
    PropertyId::WebkitBoxPack,
    PropertyId::WebkitBoxReflect,
    PropertyId::WebkitBoxShadow,
    PropertyId::WebkitColorCorrection,
    PropertyId::WebkitColumnBreakAfter,
    PropertyId::WebkitColumnBreakBefore,
    PropertyId::WebkitColumnBreakInside,
    PropertyId::WebkitColumnCount,
    PropertyId::WebkitColumnGap,
    PropertyId::WebkitColumnRuleColor,
    PropertyId::WebkitColumnRuleStyle,
    PropertyId::WebkitColumnRuleWidth,
    PropertyId::WebkitColumnSpan,
    PropertyId::WebkitColumnWidth,
    #[cfg(feature = "dashboard")]
    PropertyId::WebkitDashboardRegion,
    PropertyId::WebkitFontSmoothing,
    PropertyId::WebkitHighlight,
    PropertyId::WebkitHyphenateCharacter,
    PropertyId::WebkitHyphenateLimitAfter,
    PropertyId::WebkitHyphenateLimitBefore,
    PropertyId::WebkitHyphens,
    PropertyId::WebkitLineBoxContain,
    PropertyId::WebkitLineBreak,
    PropertyId::WebkitLineClamp,
    PropertyId::WebkitLocale,
    PropertyId::WebkitMarginBeforeCollapse,
    PropertyId::WebkitMarginAfterCollapse,
    PropertyId::WebkitMarqueeDirection,
    PropertyId::WebkitMarqueeIncrement,
    PropertyId::WebkitMarqueeRepetition,
    PropertyId::WebkitMarqueeStyle,
    PropertyId::WebkitMaskAttachment,
    PropertyId::WebkitMaskBoxImage,
    PropertyId::WebkitMaskClip,
    PropertyId::WebkitMaskComposite,
    PropertyId::WebkitMaskImage,
    PropertyId::WebkitMaskOrigin,
    PropertyId::WebkitMaskPosition,
    PropertyId::WebkitMaskRepeat,
    PropertyId::WebkitMaskSize,
    PropertyId::WebkitNbspMode,
    PropertyId::WebkitPerspective,
    PropertyId::WebkitPerspectiveOrigin,
    PropertyId::WebkitRtlOrdering,
    PropertyId::WebkitTextCombine,
    PropertyId::WebkitTextDecorationsInEffect,
    PropertyId::WebkitTextEmphasisColor,
    PropertyId::WebkitTextEmphasisPosition,
    PropertyId::WebkitTextEmphasisStyle,
    PropertyId::WebkitTextFillColor,
    PropertyId::WebkitTextOrientation,
    PropertyId::WebkitTextSecurity,
    PropertyId::WebkitTextStrokeColor,
    PropertyId::WebkitTextStrokeWidth,
    PropertyId::WebkitTransform,
    PropertyId::WebkitTransformOrigin,
    PropertyId::WebkitTransformStyle,
    PropertyId::WebkitTransitionDelay,
    PropertyId::WebkitTransitionDuration,
    PropertyId::WebkitTransitionProperty,
    PropertyId::WebkitTransitionTimingFunction,
    PropertyId::WebkitUserDrag,
    PropertyId::WebkitUserModify,
    PropertyId::WebkitUserSelect,
    PropertyId::WebkitWritingMode,
];

#[cfg(feature = "svg")]
const SVG_PROPERTIES: &[PropertyId] = &[
    PropertyId::ClipPath,
    PropertyId::ClipRule,
    PropertyId::Mask,
    PropertyId::Filter,
    PropertyId::FloodColor,
    PropertyId::FloodOpacity,
    PropertyId::LightingColor,
    PropertyId::StopColor,
    PropertyId::StopOpacity,
    PropertyId::ColorInterpolation,
    PropertyId::ColorInterpolationFilters,
    PropertyId::ColorRendering,
    PropertyId::Fill,
    PropertyId::FillOpacity,
    PropertyId::FillRule,
    PropertyId::ImageRendering,
    PropertyId::MarkerEnd,
    PropertyId::MarkerMid,
    PropertyId::MarkerStart,
    PropertyId::ShapeRendering,
    PropertyId::Stroke,
    PropertyId::StrokeDasharray,
    PropertyId::StrokeDashoffset,
    PropertyId::StrokeLinecap,
    PropertyId::StrokeLinejoin,
    PropertyId::StrokeMiterlimit,
    PropertyId::StrokeOpacity,
    PropertyId::StrokeWidth,
    PropertyId::AlignmentBaseline,
    PropertyId::BaselineShift,
    PropertyId::DominantBaseline,
    PropertyId::Kerning,
    PropertyId::TextAnchor,
    PropertyId::WritingMode,
    PropertyId::GlyphOrientationHorizontal,
    PropertyId::GlyphOrientationVertical,
    PropertyId::WebkitSvgShadow,
    PropertyId::VectorEffect,
];

#[cfg(not(feature = "svg"))]
const SVG_PROPERTIES: &[PropertyId] = &[];

static COMPUTED_PROPERTIES: LazyLock<Vec<PropertyId>> =
    LazyLock::new(|| [CSS_PROPERTIES, SVG_PROPERTIES].concat());

/// Every property a computed style declaration lists, in order.
#[must_use]
pub fn computed_properties() -> &'static [PropertyId] {
    &COMPUTED_PROPERTIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computed_list_has_only_physical_longhands() {
        for &id in computed_properties() {
            assert!(!id.is_shorthand(), "{id} is a shorthand");
            assert!(!id.is_direction_aware(), "{id} is flow-relative");
        }
    }

    #[test]
    fn test_computed_list_has_no_duplicates() {
        let mut ids = computed_properties().to_vec();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), computed_properties().len());
    }
}
