//! Value builders shared by the per-property reconstruction.

use std::rc::Rc;

use quokka_common::warning::WarningSet;

use crate::keyword::Keyword;
use crate::property::PropertyId;
use crate::style::Style;
use crate::style::animation::{AnimatedProperty, Animation, TimingFunction};
use crate::style::color::{Color, Rgba32};
use crate::style::content::ContentData;
use crate::style::decoration::{NinePieceImage, NinePieceImageRule, ShadowData, ShadowStyle, StyleReflection, TextDecoration};
use crate::style::fill_layer::{FillLayer, FillLayers, FillSize};
use crate::style::font::GENERIC_FAMILY_PREFIX;
use crate::style::keywords::{FillRepeat, KeywordMapped, Position};
use crate::style::length::{Length, LengthSize};
use crate::values::{
    BorderImageValue, ComputedLength, PrimitiveValue, Rect, ReflectValue, ShadowValue, TimingFunctionValue,
    TransformFunction, TransformValue, UnitKind, Value, ValueCache, ValueList,
};

use super::LayoutBox;

/// [§ 3.2 Zoom](https://drafts.csswg.org/css-viewport/#zoom-property)
///
/// Undo the effective zoom on a whole-pixel value. Values are bumped one
/// pixel away from zero first when zooming in, since scaling up truncated
/// them.
#[allow(clippy::float_cmp)]
pub(super) fn adjust_for_absolute_zoom(value: i32, effective_zoom: f32) -> i32 {
    let zoom = f64::from(effective_zoom);
    if zoom == 1.0 {
        return value;
    }
    let value = match (zoom > 1.0, value < 0) {
        (true, true) => value.saturating_sub(1),
        (true, false) => value.saturating_add(1),
        (false, _) => value,
    };
    i32::from_pixels(f64::from(value) / zoom)
}

/// Truncate a layout float to whole pixels.
#[allow(clippy::cast_possible_truncation)]
pub(super) const fn whole_pixels(value: f32) -> i32 {
    value as i32
}

/// Everything one property reconstruction reads, plus the cache it draws
/// shared values from.
pub(super) struct Reconstructor<'a> {
    pub(super) style: &'a Style,
    pub(super) layout: Option<LayoutBox>,
    pub(super) cache: &'a mut ValueCache,
    pub(super) allow_visited_style: bool,
    pub(super) logged: &'a WarningSet<PropertyId>,
}

impl<'a> Reconstructor<'a> {
    pub(super) fn ident(&mut self, keyword: Keyword) -> Value {
        self.cache.identifier(keyword).into()
    }

    pub(super) fn keyword<T: KeywordMapped>(&mut self, value: T) -> Value {
        self.ident(value.keyword())
    }

    pub(super) fn number(&mut self, value: f64) -> Value {
        self.cache.number(value).into()
    }

    pub(super) fn percentage(&mut self, value: f64) -> Value {
        self.cache.percentage(value).into()
    }

    pub(super) fn seconds(&mut self, value: f64) -> Value {
        self.cache.numeric_value(value, UnitKind::S).into()
    }

    pub(super) fn string(text: &str) -> Value {
        PrimitiveValue::string(text, UnitKind::String).into()
    }

    // Zoom-compensated pixels.

    pub(super) fn zoom_px_primitive(&mut self, value: i32) -> Rc<PrimitiveValue> {
        let adjusted = adjust_for_absolute_zoom(value, self.style.effective_zoom);
        self.cache.pixels(f64::from(adjusted))
    }

    pub(super) fn zoom_px(&mut self, value: i32) -> Value {
        self.zoom_px_primitive(value).into()
    }

    pub(super) fn zoom_px_f32(&mut self, value: f32) -> Value {
        self.zoom_px(whole_pixels(value))
    }

    pub(super) fn zoom_number(&mut self, value: f64) -> Rc<PrimitiveValue> {
        self.cache.number(value / f64::from(self.style.effective_zoom))
    }

    /// Fixed lengths as zoom-compensated pixels, anything else as stored.
    pub(super) fn zoom_length(&mut self, length: Length) -> Value {
        match length {
            Length::Fixed(px) => self.zoom_px_f32(px),
            other => self.length(other),
        }
    }

    pub(super) fn length_primitive(&mut self, length: Length) -> Rc<PrimitiveValue> {
        match length {
            Length::Fixed(px) => self.cache.pixels(f64::from(px)),
            Length::Percent(p) => self.cache.percentage(f64::from(p)),
            Length::Auto => self.cache.identifier(Keyword::Auto),
            Length::Undefined => self.cache.identifier(Keyword::None),
            other => Rc::new(PrimitiveValue::from_length(other)),
        }
    }

    /// A length as stored, without zoom compensation.
    pub(super) fn length(&mut self, length: Length) -> Value {
        self.length_primitive(length).into()
    }

    /// Percentages as stored, everything else as zoom-compensated pixels.
    fn percent_or_zoom_px(&mut self, length: Length) -> Rc<PrimitiveValue> {
        match length {
            Length::Percent(p) => self.cache.percentage(f64::from(p)),
            other => self.zoom_px_primitive(whole_pixels(other.value())),
        }
    }

    // Colors.

    pub(super) fn color(&mut self, rgba: Rgba32) -> Value {
        self.cache.color_value(rgba).into()
    }

    /// `color` stands in for an unset color. Never consults `:visited`
    /// colors.
    pub(super) fn current_color_or_valid(&mut self, color: Color) -> Value {
        let resolved = if color.is_valid() { color } else { self.style.color };
        self.color(resolved.rgb())
    }

    /// The `:visited`-aware color of `visited_source` when visited styles are
    /// allowed, otherwise `color` with the current color fallback.
    pub(super) fn border_like_color(&mut self, visited_source: PropertyId, color: Color) -> Value {
        if self.allow_visited_style {
            let visited = self.style.visited_dependent_color(visited_source);
            self.color(visited.rgb())
        } else {
            self.current_color_or_valid(color)
        }
    }

    /// `color` and `background-color`, which have no fallback.
    pub(super) fn plain_color(&mut self, id: PropertyId, color: Color) -> Value {
        let resolved = if self.allow_visited_style {
            self.style.visited_dependent_color(id)
        } else {
            color
        };
        self.color(resolved.rgb())
    }

    // Box geometry.

    /// `top` / `right` / `bottom` / `left`. Only positioned boxes report
    /// their offsets; everything else is `auto`.
    pub(super) fn position_offset(&mut self, length: Length) -> Value {
        match self.style.position {
            Position::Absolute | Position::Fixed => self.zoom_length(length),
            Position::Relative => self.length(length),
            Position::Static => self.ident(Keyword::Auto),
        }
    }

    /// One corner of `border-radius`: a single value when both radii agree.
    pub(super) fn border_radius_corner(&mut self, radius: LengthSize) -> Value {
        if radius.width == radius.height {
            return self.percent_or_zoom_px(radius.width).into();
        }
        let width = self.percent_or_zoom_px(radius.width);
        let height = self.percent_or_zoom_px(radius.height);
        ValueList::space(vec![width.into(), height.into()]).into()
    }

    /// `-webkit-transform-origin` / `-webkit-perspective-origin`, resolved
    /// against the laid-out box when there is one.
    #[allow(clippy::float_cmp)]
    pub(super) fn origin(&mut self, x: Length, y: Length, z: Option<f32>) -> Value {
        let layout = self.layout;
        let mut items = match layout {
            Some(layout) => {
                let size = layout.sizing_box(self.style.box_sizing);
                #[allow(clippy::cast_precision_loss)]
                let (width, height) = (size.width as f32, size.height as f32);
                vec![
                    self.zoom_px_f32(x.calc_float_value(width)),
                    self.zoom_px_f32(y.calc_float_value(height)),
                ]
            }
            None => vec![self.zoom_length(x), self.zoom_length(y)],
        };
        if let Some(z) = z.filter(|z| *z != 0.0) {
            items.push(self.zoom_px_f32(z));
        }
        ValueList::space(items).into()
    }

    // Fill layers.

    /// One value for a single layer, a comma list for several.
    pub(super) fn fill_layer_list(
        &mut self,
        layers: &FillLayers,
        mut each: impl FnMut(&mut Self, &FillLayer) -> Value,
    ) -> Value {
        if layers.len() == 1 {
            return each(self, layers.first());
        }
        let items = layers.iter().map(|layer| each(self, layer)).collect();
        ValueList::comma(items).into()
    }

    pub(super) fn layers(&self, mask: bool) -> &'a FillLayers {
        if mask {
            &self.style.mask_layers
        } else {
            &self.style.background_layers
        }
    }

    pub(super) fn fill_image(&mut self, layer: &FillLayer) -> Value {
        match layer.image() {
            Some(image) => image.css_value(),
            None => self.ident(Keyword::None),
        }
    }

    /// [§ 3.4 'background-repeat'](https://www.w3.org/TR/css-backgrounds-3/#background-repeat)
    ///
    /// Equal axes collapse to one keyword, and the two single-axis repeats
    /// to `repeat-x` / `repeat-y`.
    pub(super) fn fill_repeat(&mut self, x: FillRepeat, y: FillRepeat) -> Value {
        match (x, y) {
            _ if x == y => self.keyword(x),
            (FillRepeat::Repeat, FillRepeat::NoRepeat) => self.ident(Keyword::RepeatX),
            (FillRepeat::NoRepeat, FillRepeat::Repeat) => self.ident(Keyword::RepeatY),
            _ => {
                let items = vec![self.keyword(x), self.keyword(y)];
                ValueList::space(items).into()
            }
        }
    }

    pub(super) fn fill_size(&mut self, size: FillSize) -> Value {
        match size {
            FillSize::Contain => self.ident(Keyword::Contain),
            FillSize::Cover => self.ident(Keyword::Cover),
            FillSize::Size(size) => {
                let items = vec![self.length(size.width), self.length(size.height)];
                ValueList::space(items).into()
            }
        }
    }

    pub(super) fn fill_position(&mut self, layer: &FillLayer) -> Value {
        let items = vec![self.length(layer.x_position()), self.length(layer.y_position())];
        ValueList::space(items).into()
    }

    // Images and effects.

    /// [§ 6 Border Images](https://www.w3.org/TR/css-backgrounds-3/#border-images)
    pub(super) fn nine_piece_image(&mut self, image: &NinePieceImage) -> Value {
        let Some(source) = &image.image else {
            return self.ident(Keyword::None);
        };
        let slices = Rect::new(
            self.slice(image.slices.top),
            self.slice(image.slices.right),
            self.slice(image.slices.bottom),
            self.slice(image.slices.left),
        );
        Value::BorderImage(Rc::new(BorderImageValue::new(
            source.css_value(),
            slices,
            repeat_rule_keyword(image.horizontal_rule),
            repeat_rule_keyword(image.vertical_rule),
        )))
    }

    fn slice(&mut self, length: Length) -> Rc<PrimitiveValue> {
        match length {
            Length::Percent(p) => self.cache.percentage(f64::from(p)),
            other => self.cache.number(f64::from(other.value())),
        }
    }

    pub(super) fn reflection(&mut self, reflection: Option<&StyleReflection>) -> Value {
        let Some(reflection) = reflection else {
            return self.ident(Keyword::None);
        };
        let offset = self.percent_or_zoom_px(reflection.offset);
        let mask = self.nine_piece_image(&reflection.mask);
        Value::Reflect(Rc::new(ReflectValue::new(
            reflection.direction.keyword(),
            offset,
            Some(mask),
        )))
    }

    /// [§ 7.1 'box-shadow'](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)
    ///
    /// Shadows are stored innermost first and listed outermost first. Text
    /// shadows have neither spread nor `inset`.
    pub(super) fn shadow_list(&mut self, shadows: &[ShadowData], text_shadow: bool) -> Value {
        if shadows.is_empty() {
            return self.ident(Keyword::None);
        }
        let items = shadows
            .iter()
            .rev()
            .map(|shadow| Value::Shadow(Rc::new(self.shadow(shadow, text_shadow))))
            .collect();
        ValueList::comma(items).into()
    }

    fn shadow(&mut self, shadow: &ShadowData, text_shadow: bool) -> ShadowValue {
        let spread = (!text_shadow).then(|| self.zoom_px_primitive(shadow.spread));
        let inset = !text_shadow && shadow.style == ShadowStyle::Inset;
        ShadowValue {
            x: Some(self.zoom_px_primitive(shadow.x)),
            y: Some(self.zoom_px_primitive(shadow.y)),
            blur: Some(self.zoom_px_primitive(shadow.blur)),
            spread,
            style: inset.then(|| self.cache.identifier(Keyword::Inset)),
            color: Some(self.cache.color_value(shadow.color.rgb())),
        }
    }

    /// [§ 13 'transform'](https://www.w3.org/TR/css-transforms-1/#transform-property)
    ///
    /// The accumulated matrix for the laid-out box, without the transform
    /// origin. Only the translation components are zoom-compensated.
    pub(super) fn transform(&mut self) -> Value {
        let Some(layout) = self.layout.filter(|_| !self.style.transform.is_empty()) else {
            return self.ident(Keyword::None);
        };
        let size = layout.sizing_box(self.style.box_sizing);
        let matrix = self
            .style
            .transform_matrix(f64::from(size.width), f64::from(size.height));

        let function = if matrix.is_affine() {
            let [a, b, c, d, e, f] = matrix.to_affine();
            let arguments = vec![
                self.cache.number(a),
                self.cache.number(b),
                self.cache.number(c),
                self.cache.number(d),
                self.zoom_number(e),
                self.zoom_number(f),
            ];
            TransformValue::new(TransformFunction::Matrix, arguments)
        } else {
            // m41, m42 and m43 are the translation.
            let arguments = matrix
                .to_values()
                .into_iter()
                .enumerate()
                .map(|(i, value)| {
                    if (12..15).contains(&i) {
                        self.zoom_number(value)
                    } else {
                        self.cache.number(value)
                    }
                })
                .collect();
            TransformValue::new(TransformFunction::Matrix3d, arguments)
        };
        ValueList::space(vec![Value::Transform(Rc::new(function))]).into()
    }

    // Animations.

    /// One entry per animation, or the initial value alone when the style
    /// has no list.
    pub(super) fn animation_list(
        &mut self,
        animations: Option<&[Animation]>,
        initial: impl FnOnce(&mut Self) -> Value,
        mut each: impl FnMut(&mut Self, &Animation) -> Value,
    ) -> Value {
        let items = match animations {
            Some(list) => list.iter().map(|animation| each(self, animation)).collect(),
            None => vec![initial(self)],
        };
        ValueList::comma(items).into()
    }

    pub(super) fn delays(&mut self, animations: Option<&[Animation]>) -> Value {
        self.animation_list(
            animations,
            |r| r.seconds(Animation::INITIAL_DELAY),
            |r, animation| r.seconds(animation.delay),
        )
    }

    pub(super) fn durations(&mut self, animations: Option<&[Animation]>) -> Value {
        self.animation_list(
            animations,
            |r| r.seconds(Animation::INITIAL_DURATION),
            |r, animation| r.seconds(animation.duration),
        )
    }

    pub(super) fn timing_functions(&mut self, animations: Option<&[Animation]>) -> Value {
        self.animation_list(
            animations,
            |_| timing_function(TimingFunction::default()),
            |_, animation| timing_function(animation.timing_function),
        )
    }

    pub(super) fn transition_property(&mut self, property: AnimatedProperty) -> Value {
        match property {
            AnimatedProperty::None => self.ident(Keyword::None),
            AnimatedProperty::All => self.ident(Keyword::All),
            AnimatedProperty::Property(id) => Self::string(id.name()),
        }
    }

    // Text.

    pub(super) fn text_decoration(&mut self, decoration: TextDecoration) -> Value {
        const FLAGS: [(TextDecoration, Keyword); 4] = [
            (TextDecoration::UNDERLINE, Keyword::Underline),
            (TextDecoration::OVERLINE, Keyword::Overline),
            (TextDecoration::LINE_THROUGH, Keyword::LineThrough),
            (TextDecoration::BLINK, Keyword::Blink),
        ];
        let items: Vec<Value> = FLAGS
            .into_iter()
            .filter(|(flag, _)| decoration.contains(*flag))
            .map(|(_, keyword)| self.ident(keyword))
            .collect();
        if items.is_empty() {
            return self.ident(Keyword::None);
        }
        ValueList::space(items).into()
    }

    /// Generic families are stored with their engine prefix and read back
    /// as the bare keyword; other names are strings.
    pub(super) fn font_family(&mut self, family: &str) -> Value {
        let generic = family
            .strip_prefix(GENERIC_FAMILY_PREFIX)
            .and_then(|name| match name {
                "cursive" => Some(Keyword::Cursive),
                "fantasy" => Some(Keyword::Fantasy),
                "monospace" => Some(Keyword::Monospace),
                "sans-serif" => Some(Keyword::SansSerif),
                "serif" => Some(Keyword::Serif),
                _ => None,
            });
        match generic {
            Some(keyword) => self.ident(keyword),
            None => Self::string(family),
        }
    }

    // Generated content.

    pub(super) fn content(&mut self) -> Value {
        let items = self
            .style
            .content
            .iter()
            .map(|item| match item {
                ContentData::Text(text) => Self::string(text),
                ContentData::Counter(name) => PrimitiveValue::string(name.clone(), UnitKind::CounterName).into(),
                ContentData::Image(image) => image.css_value(),
            })
            .collect();
        ValueList::space(items).into()
    }

    /// `counter-increment` / `counter-reset`: name and value pairs, or no
    /// value when the style has no counter directives.
    pub(super) fn counters(&mut self, increment: bool) -> Option<Value> {
        let style = self.style;
        let directives = style.counter_directives.as_ref()?;
        let mut items = Vec::with_capacity(directives.len() * 2);
        for (name, directive) in directives {
            let value = if increment { directive.increment } else { directive.reset };
            items.push(Self::string(name));
            items.push(self.number(f64::from(value)));
        }
        Some(ValueList::space(items).into())
    }

    #[cfg(feature = "dashboard")]
    pub(super) fn dashboard_regions(&mut self) -> Value {
        use crate::style::decoration::DashboardRegionKind;
        use crate::values::{DashboardGeometry, DashboardRegion};

        let style = self.style;
        let regions = &style.dashboard_regions;
        if matches!(regions.as_slice(), [only] if only.kind == DashboardRegionKind::None) {
            return self.ident(Keyword::None);
        }

        let mut chain: Option<Box<DashboardRegion>> = None;
        for region in regions.iter().rev() {
            let offsets = Rect::new(
                self.zoom_px_primitive(whole_pixels(region.offsets.top.value())),
                self.zoom_px_primitive(whole_pixels(region.offsets.right.value())),
                self.zoom_px_primitive(whole_pixels(region.offsets.bottom.value())),
                self.zoom_px_primitive(whole_pixels(region.offsets.left.value())),
            );
            let geometry = match region.kind {
                DashboardRegionKind::Circle => Some(DashboardGeometry::Circle),
                DashboardRegionKind::Rectangle => Some(DashboardGeometry::Rectangle),
                DashboardRegionKind::None => None,
            };
            chain = Some(Box::new(DashboardRegion {
                label: region.label.clone(),
                geometry,
                offsets,
                next: chain.take(),
            }));
        }
        match chain {
            Some(first) => PrimitiveValue::dashboard_region(*first).into(),
            None => self.ident(Keyword::None),
        }
    }
}

const fn repeat_rule_keyword(rule: NinePieceImageRule) -> Keyword {
    match rule {
        NinePieceImageRule::Repeat => Keyword::Repeat,
        NinePieceImageRule::Round => Keyword::Round,
        NinePieceImageRule::Stretch => Keyword::Stretch,
    }
}

fn timing_function(function: TimingFunction) -> Value {
    Value::TimingFunction(Rc::new(TimingFunctionValue(function)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_zoom_is_identity() {
        assert_eq!(adjust_for_absolute_zoom(7, 1.0), 7);
        assert_eq!(adjust_for_absolute_zoom(-7, 1.0), -7);
    }

    #[test]
    fn test_zoom_out_never_shrinks_a_pixel_to_zero() {
        assert_eq!(adjust_for_absolute_zoom(1, 0.5), 2);
        assert_eq!(adjust_for_absolute_zoom(0, 0.5), 0);
    }

    #[test]
    fn test_zoom_in_compensates_for_truncation() {
        // 3px at 2x lays out as 6px; reading back bumps to 7 before dividing.
        assert_eq!(adjust_for_absolute_zoom(6, 2.0), 3);
        assert_eq!(adjust_for_absolute_zoom(1, 2.0), 1);
        assert_eq!(adjust_for_absolute_zoom(0, 2.0), 0);
        assert_eq!(adjust_for_absolute_zoom(-6, 2.0), -3);
    }

    #[test]
    fn test_whole_pixels_truncates_toward_zero() {
        assert_eq!(whole_pixels(2.9), 2);
        assert_eq!(whole_pixels(-2.9), -2);
    }

    #[test]
    fn test_repeat_rules_map_to_keywords() {
        assert_eq!(repeat_rule_keyword(NinePieceImageRule::Repeat), Keyword::Repeat);
        assert_eq!(repeat_rule_keyword(NinePieceImageRule::Round), Keyword::Round);
        assert_eq!(repeat_rule_keyword(NinePieceImageRule::Stretch), Keyword::Stretch);
    }
}
