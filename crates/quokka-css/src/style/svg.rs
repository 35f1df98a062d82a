//! SVG presentation properties.
//!
//! [SVG 1.1 § 6.1 Styling properties](https://www.w3.org/TR/SVG11/styling.html)

use serde::Serialize;

use super::color::{Color, Rgba32};
use super::decoration::ShadowData;
use super::keywords::keyword_enum;
use super::length::Length;

keyword_enum! {
    /// `clip-rule` / `fill-rule`
    pub enum WindRule {
        #[default]
        NonZero = Nonzero,
        EvenOdd = Evenodd,
    }
}

keyword_enum! {
    /// `alignment-baseline`
    pub enum AlignmentBaseline {
        #[default]
        Auto = Auto,
        Baseline = Baseline,
        BeforeEdge = BeforeEdge,
        TextBeforeEdge = TextBeforeEdge,
        Middle = Middle,
        Central = Central,
        AfterEdge = AfterEdge,
        TextAfterEdge = TextAfterEdge,
        Ideographic = Ideographic,
        Alphabetic = Alphabetic,
        Hanging = Hanging,
        Mathematical = Mathematical,
    }
}

keyword_enum! {
    /// `dominant-baseline`
    pub enum DominantBaseline {
        #[default]
        Auto = Auto,
        UseScript = UseScript,
        NoChange = NoChange,
        ResetSize = ResetSize,
        Central = Central,
        Middle = Middle,
        TextBeforeEdge = TextBeforeEdge,
        TextAfterEdge = TextAfterEdge,
        Ideographic = Ideographic,
        Alphabetic = Alphabetic,
        Hanging = Hanging,
        Mathematical = Mathematical,
    }
}

keyword_enum! {
    /// `color-interpolation` / `color-interpolation-filters`
    pub enum ColorInterpolation {
        Auto = Auto,
        #[default]
        Srgb = Srgb,
        LinearRgb = Linearrgb,
    }
}

keyword_enum! {
    /// `color-rendering`
    pub enum ColorRendering {
        #[default]
        Auto = Auto,
        OptimizeSpeed = Optimizespeed,
        OptimizeQuality = Optimizequality,
    }
}

keyword_enum! {
    /// `image-rendering`
    pub enum ImageRendering {
        #[default]
        Auto = Auto,
        OptimizeSpeed = Optimizespeed,
        OptimizeQuality = Optimizequality,
    }
}

keyword_enum! {
    /// `shape-rendering`
    pub enum ShapeRendering {
        #[default]
        Auto = Auto,
        OptimizeSpeed = Optimizespeed,
        CrispEdges = Crispedges,
        GeometricPrecision = Geometricprecision,
    }
}

keyword_enum! {
    /// `stroke-linecap`
    pub enum LineCap {
        #[default]
        Butt = Butt,
        Round = Round,
        Square = Square,
    }
}

keyword_enum! {
    /// `stroke-linejoin`
    pub enum LineJoin {
        #[default]
        Miter = Miter,
        Round = Round,
        Bevel = Bevel,
    }
}

keyword_enum! {
    /// `text-anchor`
    pub enum TextAnchor {
        #[default]
        Start = Start,
        Middle = Middle,
        End = End,
    }
}

keyword_enum! {
    /// SVG `writing-mode`
    pub enum SvgWritingMode {
        #[default]
        LrTb = LrTb,
        RlTb = RlTb,
        TbRl = TbRl,
        Lr = Lr,
        Rl = Rl,
        Tb = Tb,
    }
}

keyword_enum! {
    /// `vector-effect`
    pub enum VectorEffect {
        #[default]
        None = None,
        NonScalingStroke = NonScalingStroke,
    }
}

/// `baseline-shift`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum BaselineShift {
    /// `baseline`
    #[default]
    Baseline,
    /// `sub`
    Sub,
    /// `super`
    Super,
    /// An explicit shift.
    Length(Length),
}

/// `glyph-orientation-horizontal` / `glyph-orientation-vertical`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GlyphOrientation {
    /// 0deg
    #[default]
    Deg0,
    /// 90deg
    Deg90,
    /// 180deg
    Deg180,
    /// 270deg
    Deg270,
    /// `auto` (vertical only)
    Auto,
}

impl GlyphOrientation {
    /// The angle in degrees; `None` for `auto`.
    #[must_use]
    pub const fn degrees(self) -> Option<f64> {
        match self {
            Self::Deg0 => Some(0.0),
            Self::Deg90 => Some(90.0),
            Self::Deg180 => Some(180.0),
            Self::Deg270 => Some(270.0),
            Self::Auto => None,
        }
    }
}

/// `fill` / `stroke`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum SvgPaint {
    /// `none`
    #[default]
    None,
    /// `currentColor`
    CurrentColor,
    /// A color.
    Color(Rgba32),
    /// `url(...)`, a paint server reference.
    Uri(String),
}

/// The SVG part of a style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SvgStyle {
    /// `alignment-baseline`
    pub alignment_baseline: AlignmentBaseline,
    /// `baseline-shift`
    pub baseline_shift: BaselineShift,
    /// `clip-path`; empty for none.
    pub clip_path: String,
    /// `clip-rule`
    pub clip_rule: WindRule,
    /// `color-interpolation`
    pub color_interpolation: ColorInterpolation,
    /// `color-interpolation-filters`
    pub color_interpolation_filters: ColorInterpolation,
    /// `color-rendering`
    pub color_rendering: ColorRendering,
    /// `dominant-baseline`
    pub dominant_baseline: DominantBaseline,
    /// `fill`
    pub fill: SvgPaint,
    /// `fill-opacity`
    pub fill_opacity: f32,
    /// `fill-rule`
    pub fill_rule: WindRule,
    /// `filter`; empty for none.
    pub filter: String,
    /// `flood-color`
    pub flood_color: Color,
    /// `flood-opacity`
    pub flood_opacity: f32,
    /// `glyph-orientation-horizontal`
    pub glyph_orientation_horizontal: GlyphOrientation,
    /// `glyph-orientation-vertical`
    pub glyph_orientation_vertical: GlyphOrientation,
    /// `image-rendering`
    pub image_rendering: ImageRendering,
    /// `kerning`
    pub kerning: Length,
    /// `lighting-color`
    pub lighting_color: Color,
    /// `marker-start`; empty for none.
    pub marker_start: String,
    /// `marker-mid`
    pub marker_mid: String,
    /// `marker-end`
    pub marker_end: String,
    /// `mask`
    pub mask: String,
    /// `shape-rendering`
    pub shape_rendering: ShapeRendering,
    /// `stop-color`
    pub stop_color: Color,
    /// `stop-opacity`
    pub stop_opacity: f32,
    /// `stroke`
    pub stroke: SvgPaint,
    /// `stroke-dasharray`; empty for none.
    pub stroke_dasharray: Vec<Length>,
    /// `stroke-dashoffset`
    pub stroke_dashoffset: Length,
    /// `stroke-linecap`
    pub stroke_linecap: LineCap,
    /// `stroke-linejoin`
    pub stroke_linejoin: LineJoin,
    /// `stroke-miterlimit`
    pub stroke_miterlimit: f32,
    /// `stroke-opacity`
    pub stroke_opacity: f32,
    /// `stroke-width`
    pub stroke_width: Length,
    /// `text-anchor`
    pub text_anchor: TextAnchor,
    /// SVG `writing-mode`
    pub writing_mode: SvgWritingMode,
    /// `vector-effect`
    pub vector_effect: VectorEffect,
    /// `-webkit-svg-shadow`
    pub shadow: Option<ShadowData>,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            alignment_baseline: AlignmentBaseline::default(),
            baseline_shift: BaselineShift::default(),
            clip_path: String::new(),
            clip_rule: WindRule::default(),
            color_interpolation: ColorInterpolation::Srgb,
            color_interpolation_filters: ColorInterpolation::LinearRgb,
            color_rendering: ColorRendering::default(),
            dominant_baseline: DominantBaseline::default(),
            fill: SvgPaint::Color(Rgba32::BLACK),
            fill_opacity: 1.0,
            fill_rule: WindRule::default(),
            filter: String::new(),
            flood_color: Color::BLACK,
            flood_opacity: 1.0,
            glyph_orientation_horizontal: GlyphOrientation::Deg0,
            glyph_orientation_vertical: GlyphOrientation::Auto,
            image_rendering: ImageRendering::default(),
            kerning: Length::ZERO,
            lighting_color: Color::WHITE,
            marker_start: String::new(),
            marker_mid: String::new(),
            marker_end: String::new(),
            mask: String::new(),
            shape_rendering: ShapeRendering::default(),
            stop_color: Color::BLACK,
            stop_opacity: 1.0,
            stroke: SvgPaint::None,
            stroke_dasharray: Vec::new(),
            stroke_dashoffset: Length::ZERO,
            stroke_linecap: LineCap::default(),
            stroke_linejoin: LineJoin::default(),
            stroke_miterlimit: 4.0,
            stroke_opacity: 1.0,
            stroke_width: Length::Fixed(1.0),
            text_anchor: TextAnchor::default(),
            writing_mode: SvgWritingMode::default(),
            vector_effect: VectorEffect::default(),
            shadow: None,
        }
    }
}
