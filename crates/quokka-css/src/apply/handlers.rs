//! The strategy types behind the apply table.
//!
//! Each strategy is a small struct holding plain `fn` accessors for the
//! style field it writes, so one generic implementation covers every
//! property of the same shape.

use std::sync::Arc;

use crate::keyword::Keyword;
use crate::property::PropertyId;
use crate::style::color::{Color, Rgba32};
use crate::style::decoration::TextDecoration;
use crate::style::fill_layer::{FillLayer, FillLayerKind, FillLayers, FillSize};
use crate::style::image::StyleImage;
use crate::style::keywords::{BorderStyle, FontWeight, FromCssPrimitive, VerticalAlign};
use crate::style::length::{Length, LengthBox, LengthSize};
use crate::style::{LINE_HEIGHT_NORMAL, Style};
use crate::values::{ComputedLength, PrimitiveValue, UnitKind, Value};

use super::{ApplyProperty, ResolverState, initial_style, shared};

fn current_color(style: &Style) -> Color {
    style.color
}

/// [§ 4.4 currentcolor](https://www.w3.org/TR/css-color-4/#currentcolor-color)
///
/// Decode a color value; `currentcolor` reads `current`.
fn color_from_primitive(value: &PrimitiveValue, current: Color) -> Option<Color> {
    if let Some(rgba) = value.rgba() {
        return Some(Color::new(rgba));
    }
    match value.keyword()? {
        Keyword::Currentcolor => Some(current),
        keyword => Rgba32::from_keyword(keyword).map(Color::new),
    }
}

/// Keyword enums and plain numbers, decoded through [`FromCssPrimitive`].
pub struct ApplyDefault<T> {
    getter: fn(&Style) -> T,
    setter: fn(&mut Style, T),
}

impl<T> ApplyDefault<T> {
    /// Bind to a style field.
    pub const fn new(getter: fn(&Style) -> T, setter: fn(&mut Style, T)) -> Self {
        Self { getter, setter }
    }
}

impl<T: FromCssPrimitive + 'static> ApplyProperty for ApplyDefault<T> {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        (self.setter)(state.style, (self.getter)(state.parent_style));
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        (self.setter)(state.style, (self.getter)(initial_style()));
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        if let Some(decoded) = value.as_primitive().and_then(T::from_css_primitive) {
            (self.setter)(state.style, decoded);
        }
    }
}

/// Color properties, with separate regular and `:visited` targets.
pub struct ApplyColor {
    getter: fn(&Style) -> Color,
    setter: fn(&mut Style, Color),
    visited_setter: fn(&mut Style, Color),
    fallback: fn(&Style) -> Color,
    inherit_on_currentcolor: bool,
}

impl ApplyColor {
    /// Bind to a color field and its `:visited` twin. An invalid parent
    /// color inherits as the parent's `color`.
    pub const fn new(
        getter: fn(&Style) -> Color,
        setter: fn(&mut Style, Color),
        visited_setter: fn(&mut Style, Color),
    ) -> Self {
        Self {
            getter,
            setter,
            visited_setter,
            fallback: current_color,
            inherit_on_currentcolor: false,
        }
    }

    /// Treat `currentcolor` as `inherit`. Used by `color` itself, where the
    /// current color is the parent's.
    #[must_use]
    pub const fn inheriting_on_currentcolor(mut self) -> Self {
        self.inherit_on_currentcolor = true;
        self
    }

    fn store(&self, state: &mut ResolverState<'_>, regular: Option<Color>, visited: Option<Color>) {
        if state.apply_to_regular_style
            && let Some(color) = regular
        {
            (self.setter)(state.style, color);
        }
        if state.apply_to_visited_style
            && let Some(color) = visited
        {
            (self.visited_setter)(state.style, color);
        }
    }
}

impl ApplyProperty for ApplyColor {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        // Visited styles never inherit from the parent's visited colors.
        let color = (self.getter)(state.parent_style);
        let color = if color.is_valid() {
            color
        } else {
            (self.fallback)(state.parent_style)
        };
        self.store(state, Some(color), Some(color));
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        let color = (self.getter)(initial_style());
        self.store(state, Some(color), Some(color));
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        let Some(primitive) = value.as_primitive() else {
            return;
        };
        if self.inherit_on_currentcolor && primitive.keyword() == Some(Keyword::Currentcolor) {
            self.apply_inherit_value(state);
            return;
        }
        let regular = color_from_primitive(primitive, state.style.color);
        let visited = color_from_primitive(primitive, state.style.visited.color);
        self.store(state, regular, visited);
    }
}

/// Which keywords an [`ApplyLength`] property accepts besides lengths and
/// percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LengthKeywords {
    /// `auto`
    pub auto: bool,
    /// `none`, stored as [`Length::Undefined`].
    pub none: bool,
    /// `intrinsic` and `min-intrinsic`
    pub intrinsic: bool,
}

impl LengthKeywords {
    /// Lengths and percentages only.
    pub const PLAIN: Self = Self {
        auto: false,
        none: false,
        intrinsic: false,
    };
    /// Offsets and margins.
    pub const AUTO: Self = Self {
        auto: true,
        none: false,
        intrinsic: false,
    };
    /// `width`, `height`, `min-width`, `min-height`
    pub const SIZE: Self = Self {
        auto: true,
        none: false,
        intrinsic: true,
    };
    /// `max-width`, `max-height`
    pub const MAX_SIZE: Self = Self {
        auto: false,
        none: true,
        intrinsic: true,
    };
}

/// [`Length`]-valued properties. Absolute lengths are scaled by the
/// effective zoom.
pub struct ApplyLength {
    getter: fn(&Style) -> Length,
    setter: fn(&mut Style, Length),
    keywords: LengthKeywords,
}

impl ApplyLength {
    /// Bind to a length field.
    pub const fn new(getter: fn(&Style) -> Length, setter: fn(&mut Style, Length), keywords: LengthKeywords) -> Self {
        Self {
            getter,
            setter,
            keywords,
        }
    }
}

impl ApplyProperty for ApplyLength {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        (self.setter)(state.style, (self.getter)(state.parent_style));
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        (self.setter)(state.style, (self.getter)(initial_style()));
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        let Some(primitive) = value.as_primitive() else {
            return;
        };
        let keywords = self.keywords;
        let length = match primitive.keyword() {
            Some(Keyword::Auto) if keywords.auto => Length::Auto,
            Some(Keyword::Intrinsic) if keywords.intrinsic => Length::Intrinsic,
            Some(Keyword::MinIntrinsic) if keywords.intrinsic => Length::MinIntrinsic,
            Some(Keyword::None) if keywords.none => Length::Undefined,
            Some(_) => return,
            None if primitive.is_length() => {
                primitive.compute_length(state.style, state.root_style, state.zoom(), false)
            }
            None if primitive.is_percentage() => Length::Percent(primitive.float_value()),
            None => return,
        };
        (self.setter)(state.style, length);
    }
}

/// Pixel-valued properties computed from a length: border and outline
/// widths, spacing, offsets.
pub struct ApplyComputeLength<T> {
    getter: fn(&Style) -> T,
    setter: fn(&mut Style, T),
    normal: bool,
    thickness: bool,
}

impl<T> ApplyComputeLength<T> {
    /// Bind to a numeric field.
    pub const fn new(getter: fn(&Style) -> T, setter: fn(&mut Style, T)) -> Self {
        Self {
            getter,
            setter,
            normal: false,
            thickness: false,
        }
    }

    /// Accept `normal` as zero.
    #[must_use]
    pub const fn with_normal(mut self) -> Self {
        self.normal = true;
        self
    }

    /// [§ 4.2 Line Thickness](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    ///
    /// Accept `thin` / `medium` / `thick` as 1 / 3 / 5 pixels and ignore
    /// negative results.
    #[must_use]
    pub const fn with_thickness(mut self) -> Self {
        self.thickness = true;
        self
    }
}

impl<T: ComputedLength + PartialOrd + Copy + 'static> ApplyProperty for ApplyComputeLength<T> {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        (self.setter)(state.style, (self.getter)(state.parent_style));
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        (self.setter)(state.style, (self.getter)(initial_style()));
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        let Some(primitive) = value.as_primitive() else {
            return;
        };
        let zero = T::from_pixels(0.0);
        let length = match primitive.keyword() {
            Some(Keyword::Normal) if self.normal => zero,
            Some(Keyword::Thin) if self.thickness => T::from_pixels(1.0),
            Some(Keyword::Medium) if self.thickness => T::from_pixels(3.0),
            Some(Keyword::Thick) if self.thickness => T::from_pixels(5.0),
            Some(_) => return,
            None if primitive.is_length() => {
                let zoom = state.zoom();
                let length: T = primitive.compute_length(state.style, state.root_style, zoom, false);
                let one = T::from_pixels(1.0);
                // Zooming out never thins a length of at least one pixel below one.
                if zoom < 1.0 && length < one {
                    let unzoomed: T = primitive.compute_length(state.style, state.root_style, 1.0, false);
                    if unzoomed >= one { one } else { length }
                } else {
                    length
                }
            }
            None => return,
        };
        if self.thickness && length < zero {
            return;
        }
        (self.setter)(state.style, length);
    }
}

/// Optional values where one keyword means "unset": `z-index: auto`,
/// `-webkit-perspective: none`.
pub struct ApplyAuto<T> {
    getter: fn(&Style) -> Option<T>,
    setter: fn(&mut Style, Option<T>),
    auto_keyword: Keyword,
    compute_length: bool,
}

impl<T> ApplyAuto<T> {
    /// Bind to an optional field; `auto` clears it.
    pub const fn new(getter: fn(&Style) -> Option<T>, setter: fn(&mut Style, Option<T>)) -> Self {
        Self {
            getter,
            setter,
            auto_keyword: Keyword::Auto,
            compute_length: false,
        }
    }

    /// Use `keyword` instead of `auto`.
    #[must_use]
    pub const fn with_auto_keyword(mut self, keyword: Keyword) -> Self {
        self.auto_keyword = keyword;
        self
    }

    /// Accept lengths, computed to pixels.
    #[must_use]
    pub const fn computing_length(mut self) -> Self {
        self.compute_length = true;
        self
    }
}

impl<T: FromCssPrimitive + ComputedLength + Clone + 'static> ApplyProperty for ApplyAuto<T> {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        (self.setter)(state.style, (self.getter)(state.parent_style));
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        (self.setter)(state.style, (self.getter)(initial_style()));
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        let Some(primitive) = value.as_primitive() else {
            return;
        };
        if primitive.keyword() == Some(self.auto_keyword) {
            (self.setter)(state.style, None);
            return;
        }
        let decoded = if self.compute_length && primitive.is_length() {
            Some(primitive.compute_length(state.style, state.root_style, state.zoom(), false))
        } else {
            T::from_css_primitive(primitive)
        };
        if decoded.is_some() {
            (self.setter)(state.style, decoded);
        }
    }
}

/// Numbers with one keyword standing for a sentinel, such as
/// `-webkit-hyphenate-limit-before: auto` (-1).
pub struct ApplyNumberOrKeyword<T> {
    getter: fn(&Style) -> T,
    setter: fn(&mut Style, T),
    keyword: Keyword,
    keyword_value: T,
}

impl<T> ApplyNumberOrKeyword<T> {
    /// Bind to a numeric field; `keyword` stores `keyword_value`.
    pub const fn new(getter: fn(&Style) -> T, setter: fn(&mut Style, T), keyword: Keyword, keyword_value: T) -> Self {
        Self {
            getter,
            setter,
            keyword,
            keyword_value,
        }
    }
}

impl<T: FromCssPrimitive + Copy + Send + Sync + 'static> ApplyProperty for ApplyNumberOrKeyword<T> {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        (self.setter)(state.style, (self.getter)(state.parent_style));
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        (self.setter)(state.style, (self.getter)(initial_style()));
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        let Some(primitive) = value.as_primitive() else {
            return;
        };
        let decoded = if primitive.keyword() == Some(self.keyword) {
            Some(self.keyword_value)
        } else {
            T::from_css_primitive(primitive)
        };
        if let Some(decoded) = decoded {
            (self.setter)(state.style, decoded);
        }
    }
}

/// Optional strings with a keyword meaning "none".
pub struct ApplyString {
    getter: fn(&Style) -> Option<String>,
    setter: fn(&mut Style, Option<String>),
    empty_keyword: Keyword,
}

impl ApplyString {
    /// Bind to an optional string field; `empty_keyword` clears it.
    pub const fn new(
        getter: fn(&Style) -> Option<String>,
        setter: fn(&mut Style, Option<String>),
        empty_keyword: Keyword,
    ) -> Self {
        Self {
            getter,
            setter,
            empty_keyword,
        }
    }
}

impl ApplyProperty for ApplyString {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        (self.setter)(state.style, (self.getter)(state.parent_style));
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        (self.setter)(state.style, (self.getter)(initial_style()));
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        let Some(primitive) = value.as_primitive() else {
            return;
        };
        if primitive.keyword() == Some(self.empty_keyword) {
            (self.setter)(state.style, None);
        } else if primitive.primitive_type() == UnitKind::String
            && let Some(text) = primitive.string_value()
        {
            (self.setter)(state.style, Some(text.to_owned()));
        }
    }
}

/// Image-valued properties where `none` clears the image.
pub struct ApplyImage {
    getter: fn(&Style) -> Option<StyleImage>,
    setter: fn(&mut Style, Option<StyleImage>),
}

impl ApplyImage {
    /// Bind to an optional image field.
    pub const fn new(getter: fn(&Style) -> Option<StyleImage>, setter: fn(&mut Style, Option<StyleImage>)) -> Self {
        Self { getter, setter }
    }
}

impl ApplyProperty for ApplyImage {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        (self.setter)(state.style, (self.getter)(state.parent_style));
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        (self.setter)(state.style, (self.getter)(initial_style()));
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        if value.keyword() == Some(Keyword::None) {
            (self.setter)(state.style, None);
        } else if let Some(image) = StyleImage::from_value(value) {
            (self.setter)(state.style, Some(image));
        }
    }
}

/// One per-layer field of the background or mask layer list.
///
/// A list value writes one item per layer, growing the list as needed; a
/// single value writes the first layer. Layers past the last written one
/// are reset to unset.
pub struct ApplyFillLayer<T> {
    /// The layer list to read.
    pub layers: fn(&Style) -> &FillLayers,
    /// The layer list to write.
    pub layers_mut: fn(&mut Style) -> &mut FillLayers,
    /// Read the field from a layer.
    pub get: fn(&FillLayer) -> T,
    /// Write the field on a layer.
    pub set: fn(&mut FillLayer, T),
    /// Whether the field was set on a layer.
    pub is_set: fn(&FillLayer) -> bool,
    /// Reset the field on a layer.
    pub clear: fn(&mut FillLayer),
    /// The initial value for a layer kind.
    pub initial: fn(FillLayerKind) -> T,
    /// Decode one list item.
    pub map: fn(&ResolverState<'_>, &Value) -> Option<T>,
}

impl<T> ApplyFillLayer<T> {
    fn clear_from(&self, layers: &mut FillLayers, start: usize) {
        for layer in layers.iter_mut().skip(start) {
            (self.clear)(layer);
        }
    }
}

impl<T: 'static> ApplyProperty for ApplyFillLayer<T> {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        let inherited: Vec<T> = (self.layers)(state.parent_style)
            .iter()
            .take_while(|layer| (self.is_set)(layer))
            .map(self.get)
            .collect();
        let count = inherited.len();
        let layers = (self.layers_mut)(state.style);
        for (index, value) in inherited.into_iter().enumerate() {
            (self.set)(layers.ensure(index), value);
        }
        self.clear_from(layers, count);
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        let layers = (self.layers_mut)(state.style);
        let initial = (self.initial)(layers.kind());
        (self.set)(layers.ensure(0), initial);
        self.clear_from(layers, 1);
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        let reader: &ResolverState<'_> = state;
        let kind = (self.layers)(reader.style).kind();
        let decode = |item: &Value| {
            if item.is_initial() {
                Some((self.initial)(kind))
            } else {
                (self.map)(reader, item)
            }
        };
        let decoded: Vec<Option<T>> = match value.as_list() {
            Some(list) => list.iter().map(decode).collect(),
            None => vec![decode(value)],
        };

        let count = decoded.len();
        let layers = (self.layers_mut)(state.style);
        for (index, item) in decoded.into_iter().enumerate() {
            let layer = layers.ensure(index);
            if let Some(item) = item {
                (self.set)(layer, item);
            }
        }
        self.clear_from(layers, count);
    }
}

/// Decode a keyword enum list item.
pub(super) fn map_keyword<T: FromCssPrimitive>(_: &ResolverState<'_>, value: &Value) -> Option<T> {
    value.as_primitive().and_then(T::from_css_primitive)
}

/// Decode an image list item; `none` is an explicit empty image.
pub(super) fn map_image(_: &ResolverState<'_>, value: &Value) -> Option<Option<StyleImage>> {
    if value.keyword() == Some(Keyword::None) {
        return Some(None);
    }
    StyleImage::from_value(value).map(Some)
}

fn map_position(state: &ResolverState<'_>, value: &Value, near: Keyword, far: Keyword) -> Option<Length> {
    let primitive = value.as_primitive()?;
    match primitive.keyword() {
        Some(Keyword::Center) => Some(Length::Percent(50.0)),
        Some(keyword) if keyword == near => Some(Length::Percent(0.0)),
        Some(keyword) if keyword == far => Some(Length::Percent(100.0)),
        Some(_) => None,
        None => state.length(primitive).filter(|length| length.is_fixed() || length.is_percent()),
    }
}

/// Decode a horizontal position item.
pub(super) fn map_position_x(state: &ResolverState<'_>, value: &Value) -> Option<Length> {
    map_position(state, value, Keyword::Left, Keyword::Right)
}

/// Decode a vertical position item.
pub(super) fn map_position_y(state: &ResolverState<'_>, value: &Value) -> Option<Length> {
    map_position(state, value, Keyword::Top, Keyword::Bottom)
}

/// [§ 3.9 'background-size'](https://www.w3.org/TR/css-backgrounds-3/#the-background-size)
pub(super) fn map_size(state: &ResolverState<'_>, value: &Value) -> Option<FillSize> {
    let primitive = value.as_primitive()?;
    match primitive.keyword() {
        Some(Keyword::Contain) => return Some(FillSize::Contain),
        Some(Keyword::Cover) => return Some(FillSize::Cover),
        _ => {}
    }
    let (width, height) = match primitive.pair_value() {
        Some(pair) => (state.length(&pair.first)?, state.length(&pair.second)?),
        None => (state.length(primitive)?, Length::Auto),
    };
    Some(FillSize::Size(LengthSize::new(width, height)))
}

/// Whether an expanding strategy forwards parsed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandValue {
    /// Forward the value to every longhand (`overflow`).
    Forward,
    /// The parser always expands the shorthand first; receiving a value is
    /// a bug.
    Suppress,
}

/// A shorthand-like strategy that fans out to its longhands' strategies.
pub struct ApplyExpanding {
    handlers: Vec<Arc<dyn ApplyProperty>>,
    value: ExpandValue,
}

impl ApplyExpanding {
    /// Fan out to `handlers`.
    #[must_use]
    pub fn new(value: ExpandValue, handlers: Vec<Arc<dyn ApplyProperty>>) -> Self {
        Self { handlers, value }
    }
}

impl ApplyProperty for ApplyExpanding {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        for handler in &self.handlers {
            handler.apply_inherit_value(state);
        }
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        for handler in &self.handlers {
            handler.apply_initial_value(state);
        }
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        match self.value {
            ExpandValue::Forward => {
                for handler in &self.handlers {
                    handler.apply_value(state, value);
                }
            }
            ExpandValue::Suppress => {
                panic!("expanding apply handler received '{value}'; the shorthand must be expanded first")
            }
        }
    }
}

/// [§ 6.4 Flow-Relative Mappings](https://www.w3.org/TR/css-writing-modes-4/#logical-to-physical)
///
/// Forwards a flow-relative property to the physical property it maps to
/// under the style's direction and writing mode.
pub struct ApplyDirectionAware {
    property: PropertyId,
}

impl ApplyDirectionAware {
    /// Forward `property`, which must be flow-relative.
    ///
    /// # Panics
    ///
    /// If `property` is physical.
    #[must_use]
    pub const fn new(property: PropertyId) -> Self {
        assert!(property.is_direction_aware(), "property is not flow-relative");
        Self { property }
    }

    fn resolved(&self, style: &Style) -> &'static dyn ApplyProperty {
        shared().property_handler(self.property.resolve_direction_aware(style.direction, style.writing_mode))
    }
}

impl ApplyProperty for ApplyDirectionAware {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        self.resolved(state.style).apply_inherit_value(state);
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        self.resolved(state.style).apply_initial_value(state);
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        self.resolved(state.style).apply_value(state, value);
    }
}

/// [§ 11.1 'clip'](https://www.w3.org/TR/CSS2/visufx.html#clipping)
///
/// `rect(top, right, bottom, left)` or `auto`.
pub struct ApplyClip;

impl ApplyProperty for ApplyClip {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        state.style.clip = state.parent_style.clip;
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        state.style.clip = None;
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        let Some(primitive) = value.as_primitive() else {
            return;
        };
        if primitive.keyword() == Some(Keyword::Auto) {
            state.style.clip = None;
            return;
        }
        let Some(rect) = primitive.rect_value() else {
            return;
        };
        let (Some(top), Some(right), Some(bottom), Some(left)) = (
            state.length(&rect.top),
            state.length(&rect.right),
            state.length(&rect.bottom),
            state.length(&rect.left),
        ) else {
            return;
        };
        state.style.clip = Some(LengthBox {
            top,
            right,
            bottom,
            left,
        });
    }
}

/// [§ 5.1 Corner Radii](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
///
/// One corner radius, given as a pair or a single length for both axes.
/// Negative radii are ignored; a zero on either axis zeroes both.
pub struct ApplyBorderRadius {
    getter: fn(&Style) -> LengthSize,
    setter: fn(&mut Style, LengthSize),
}

impl ApplyBorderRadius {
    /// Bind to a corner.
    pub const fn new(getter: fn(&Style) -> LengthSize, setter: fn(&mut Style, LengthSize)) -> Self {
        Self { getter, setter }
    }
}

impl ApplyProperty for ApplyBorderRadius {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        (self.setter)(state.style, (self.getter)(state.parent_style));
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        (self.setter)(state.style, (self.getter)(initial_style()));
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        let Some(primitive) = value.as_primitive() else {
            return;
        };
        let (width, height) = match primitive.pair_value() {
            Some(pair) => (state.length(&pair.first), state.length(&pair.second)),
            None => {
                let length = state.length(primitive);
                (length, length)
            }
        };
        let (Some(width), Some(height)) = (width, height) else {
            return;
        };
        let usable = |length: Length| (length.is_fixed() || length.is_percent()) && length.value() >= 0.0;
        if !usable(width) || !usable(height) {
            return;
        }
        let radius = if width.is_zero() || height.is_zero() {
            LengthSize::new(Length::ZERO, Length::ZERO)
        } else {
            LengthSize::new(width, height)
        };
        (self.setter)(state.style, radius);
    }
}

/// [§ 10.8.1 'line-height'](https://www.w3.org/TR/CSS2/visudet.html#line-height)
///
/// `normal`, a length, a percentage, or a number (stored as a percentage).
pub struct ApplyLineHeight;

impl ApplyProperty for ApplyLineHeight {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        state.style.line_height = state.parent_style.line_height;
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        state.style.line_height = LINE_HEIGHT_NORMAL;
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        let Some(primitive) = value.as_primitive() else {
            return;
        };
        let line_height = if primitive.keyword() == Some(Keyword::Normal) {
            LINE_HEIGHT_NORMAL
        } else if primitive.is_length() {
            let pixels: i16 = primitive.compute_length(state.style, state.root_style, state.zoom(), false);
            Length::Fixed(f32::from(pixels))
        } else if primitive.is_percentage() {
            Length::Percent(primitive.float_value())
        } else if primitive.is_number() {
            Length::Percent(primitive.float_value() * 100.0)
        } else {
            return;
        };
        state.style.line_height = line_height;
    }
}

/// [§ 16.3.1 'text-decoration'](https://www.w3.org/TR/CSS2/text.html#lining-striking-props)
///
/// `none` or a list of line keywords.
pub struct ApplyTextDecoration;

impl ApplyProperty for ApplyTextDecoration {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        state.style.text_decoration = state.parent_style.text_decoration;
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        state.style.text_decoration = TextDecoration::NONE;
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        let items: Vec<&Value> = match value.as_list() {
            Some(list) => list.iter().collect(),
            None => vec![value],
        };
        let mut decoration = TextDecoration::NONE;
        for item in items {
            let flag = match item.keyword() {
                Some(Keyword::None) => TextDecoration::NONE,
                Some(Keyword::Underline) => TextDecoration::UNDERLINE,
                Some(Keyword::Overline) => TextDecoration::OVERLINE,
                Some(Keyword::LineThrough) => TextDecoration::LINE_THROUGH,
                Some(Keyword::Blink) => TextDecoration::BLINK,
                _ => return,
            };
            decoration = decoration | flag;
        }
        state.style.text_decoration = decoration;
    }
}

/// [§ 10.8.1 'vertical-align'](https://www.w3.org/TR/CSS2/visudet.html#propdef-vertical-align)
///
/// A keyword, or a length / percentage stored beside it.
pub struct ApplyVerticalAlign;

impl ApplyProperty for ApplyVerticalAlign {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        state.style.vertical_align = state.parent_style.vertical_align;
        state.style.vertical_align_length = state.parent_style.vertical_align_length;
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        state.style.vertical_align = VerticalAlign::default();
        state.style.vertical_align_length = None;
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        let Some(primitive) = value.as_primitive() else {
            return;
        };
        if let Some(align) = VerticalAlign::from_css_primitive(primitive) {
            state.style.vertical_align = align;
            state.style.vertical_align_length = None;
            return;
        }
        match state.length(primitive) {
            Some(length) if length.is_fixed() || length.is_percent() => {
                state.style.vertical_align = VerticalAlign::default();
                state.style.vertical_align_length = Some(length);
            }
            _ => {}
        }
    }
}

/// [§ 18.4 'outline-style'](https://www.w3.org/TR/CSS2/ui.html#propdef-outline-style)
///
/// A border style, or `auto`, which draws dotted and raises the auto flag.
pub struct ApplyOutlineStyle;

impl ApplyProperty for ApplyOutlineStyle {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        state.style.outline.style = state.parent_style.outline.style;
        state.style.outline_style_is_auto = state.parent_style.outline_style_is_auto;
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        state.style.outline.style = BorderStyle::None;
        state.style.outline_style_is_auto = false;
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        let Some(primitive) = value.as_primitive() else {
            return;
        };
        if primitive.keyword() == Some(Keyword::Auto) {
            state.style.outline.style = BorderStyle::Dotted;
            state.style.outline_style_is_auto = true;
        } else if let Some(style) = BorderStyle::from_css_primitive(primitive) {
            state.style.outline.style = style;
            state.style.outline_style_is_auto = false;
        }
    }
}

/// [§ 3.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
///
/// Absolute weights, or `bolder` / `lighter` relative to the parent.
pub struct ApplyFontWeight;

impl ApplyProperty for ApplyFontWeight {
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>) {
        state.style.font.weight = state.parent_style.font.weight;
    }

    fn apply_initial_value(&self, state: &mut ResolverState<'_>) {
        state.style.font.weight = FontWeight::default();
    }

    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value) {
        let Some(primitive) = value.as_primitive() else {
            return;
        };
        let weight = match primitive.keyword() {
            Some(Keyword::Bolder) => Some(state.parent_style.font.weight.bolder()),
            Some(Keyword::Lighter) => Some(state.parent_style.font.weight.lighter()),
            _ => FontWeight::from_css_primitive(primitive),
        };
        if let Some(weight) = weight {
            state.style.font.weight = weight;
        }
    }
}
