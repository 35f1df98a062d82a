//! Computed values of the SVG presentation properties.
//!
//! [SVG 1.1 § 6.1 Styling properties](https://www.w3.org/TR/SVG11/styling.html)

use crate::keyword::Keyword;
use crate::property::PropertyId;
use crate::style::length::Length;
use crate::style::svg::{BaselineShift, GlyphOrientation, SvgPaint};
use crate::values::{PrimitiveValue, UnitKind, Value, ValueList};

use super::helpers::Reconstructor;

impl Reconstructor<'_> {
    /// The computed value of an SVG property. SVG lengths are reported as
    /// stored, without zoom compensation.
    pub(super) fn svg(&mut self, id: PropertyId) -> Option<Value> {
        let style = self.style;
        let svg = &style.svg;
        let value = match id {
            PropertyId::AlignmentBaseline => self.keyword(svg.alignment_baseline),
            PropertyId::BaselineShift => match svg.baseline_shift {
                BaselineShift::Baseline => self.ident(Keyword::Baseline),
                BaselineShift::Sub => self.ident(Keyword::Sub),
                BaselineShift::Super => self.ident(Keyword::Super),
                BaselineShift::Length(length) => self.length(length),
            },
            PropertyId::ClipPath => self.reference(&svg.clip_path),
            PropertyId::ClipRule => self.keyword(svg.clip_rule),
            PropertyId::ColorInterpolation => self.keyword(svg.color_interpolation),
            PropertyId::ColorInterpolationFilters => self.keyword(svg.color_interpolation_filters),
            PropertyId::ColorRendering => self.keyword(svg.color_rendering),
            PropertyId::DominantBaseline => self.keyword(svg.dominant_baseline),
            PropertyId::Fill => self.paint(&svg.fill),
            PropertyId::FillOpacity => self.number(f64::from(svg.fill_opacity)),
            PropertyId::FillRule => self.keyword(svg.fill_rule),
            PropertyId::Filter => self.reference(&svg.filter),
            PropertyId::FloodColor => self.current_color_or_valid(svg.flood_color),
            PropertyId::FloodOpacity => self.number(f64::from(svg.flood_opacity)),
            PropertyId::GlyphOrientationHorizontal => self.glyph_orientation(svg.glyph_orientation_horizontal)?,
            PropertyId::GlyphOrientationVertical => match svg.glyph_orientation_vertical {
                GlyphOrientation::Auto => self.ident(Keyword::Auto),
                angle => self.glyph_orientation(angle)?,
            },
            PropertyId::ImageRendering => self.keyword(svg.image_rendering),
            PropertyId::Kerning => self.length(svg.kerning),
            PropertyId::LightingColor => self.current_color_or_valid(svg.lighting_color),
            PropertyId::MarkerEnd => self.reference(&svg.marker_end),
            PropertyId::MarkerMid => self.reference(&svg.marker_mid),
            PropertyId::MarkerStart => self.reference(&svg.marker_start),
            PropertyId::Mask => self.reference(&svg.mask),
            PropertyId::ShapeRendering => self.keyword(svg.shape_rendering),
            PropertyId::StopColor => self.current_color_or_valid(svg.stop_color),
            PropertyId::StopOpacity => self.number(f64::from(svg.stop_opacity)),
            PropertyId::Stroke => self.paint(&svg.stroke),
            PropertyId::StrokeDasharray => self.dash_array(&svg.stroke_dasharray),
            PropertyId::StrokeDashoffset => self.length(svg.stroke_dashoffset),
            PropertyId::StrokeLinecap => self.keyword(svg.stroke_linecap),
            PropertyId::StrokeLinejoin => self.keyword(svg.stroke_linejoin),
            PropertyId::StrokeMiterlimit => self.number(f64::from(svg.stroke_miterlimit)),
            PropertyId::StrokeOpacity => self.number(f64::from(svg.stroke_opacity)),
            PropertyId::StrokeWidth => self.length(svg.stroke_width),
            PropertyId::TextAnchor => self.keyword(svg.text_anchor),
            PropertyId::VectorEffect => self.keyword(svg.vector_effect),
            PropertyId::WritingMode => self.keyword(svg.writing_mode),
            PropertyId::WebkitSvgShadow => self.shadow_list(svg.shadow.as_slice(), false),
            // Shorthand and properties with no computed form.
            _ => return self.unimplemented(id),
        };
        Some(value)
    }

    fn paint(&mut self, paint: &SvgPaint) -> Value {
        match paint {
            SvgPaint::None => self.ident(Keyword::None),
            SvgPaint::CurrentColor => self.ident(Keyword::Currentcolor),
            SvgPaint::Color(rgba) => self.color(*rgba),
            SvgPaint::Uri(url) => PrimitiveValue::string(url.as_str(), UnitKind::Uri).into(),
        }
    }

    fn glyph_orientation(&mut self, orientation: GlyphOrientation) -> Option<Value> {
        let degrees = orientation.degrees()?;
        Some(self.cache.numeric_value(degrees, UnitKind::Deg).into())
    }

    fn dash_array(&mut self, dashes: &[Length]) -> Value {
        if dashes.is_empty() {
            return self.ident(Keyword::None);
        }
        let items = dashes.iter().map(|dash| self.length(*dash)).collect();
        ValueList::comma(items).into()
    }

    /// `clip-path`, `filter`, `marker-*` and `mask`: `none` or a reference.
    fn reference(&mut self, url: &str) -> Value {
        if url.is_empty() {
            self.ident(Keyword::None)
        } else {
            PrimitiveValue::string(url, UnitKind::Uri).into()
        }
    }
}
