//! Values built out of other values.
//!
//! Each composite serializes by delegating to its children.

use std::collections::BTreeSet;
use std::rc::Rc;

use quokka_common::url::UrlResolver;

use crate::keyword::Keyword;
use crate::style::animation::TimingFunction;

use super::Value;
use super::primitive::{PrimitiveValue, Rect};
use super::serialize::format_number;

/// How the items of a [`ValueList`] are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `a b`
    Space,
    /// `a, b`
    Comma,
    /// `a / b`
    Slash,
}

impl Separator {
    const fn text(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Comma => ", ",
            Self::Slash => " / ",
        }
    }
}

/// [§ 2.1 Component Value Combinators](https://www.w3.org/TR/css-values-4/#component-combinators)
///
/// An ordered list of values.
#[derive(Debug, Clone)]
pub struct ValueList {
    separator: Separator,
    items: Vec<Value>,
}

impl ValueList {
    /// A list of `items`.
    #[must_use]
    pub const fn new(separator: Separator, items: Vec<Value>) -> Self {
        Self { separator, items }
    }

    /// A space-separated list.
    #[must_use]
    pub const fn space(items: Vec<Value>) -> Self {
        Self::new(Separator::Space, items)
    }

    /// A comma-separated list.
    #[must_use]
    pub const fn comma(items: Vec<Value>) -> Self {
        Self::new(Separator::Comma, items)
    }

    /// A slash-separated list.
    #[must_use]
    pub const fn slash(items: Vec<Value>) -> Self {
        Self::new(Separator::Slash, items)
    }

    /// The separator.
    #[must_use]
    pub const fn separator(&self) -> Separator {
        self.separator
    }

    /// Number of items.
    #[must_use]
    pub fn length(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item `index`, if present.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Iterate over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// The items joined by the separator.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.items
            .iter()
            .map(Value::css_text)
            .collect::<Vec<_>>()
            .join(self.separator.text())
    }

    pub(super) fn collect_referenced_urls(&self, urls: &mut BTreeSet<String>, base: &dyn UrlResolver) {
        for item in &self.items {
            item.collect_referenced_urls(urls, base);
        }
    }
}

impl<'a> IntoIterator for &'a ValueList {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `-webkit-border-image` / `-webkit-mask-box-image`: an image, its slice
/// offsets and the two fill rules.
#[derive(Debug, Clone)]
pub struct BorderImageValue {
    image: Value,
    slices: Rect,
    horizontal_rule: Keyword,
    vertical_rule: Keyword,
}

impl BorderImageValue {
    /// Build a border image value.
    #[must_use]
    pub const fn new(image: Value, slices: Rect, horizontal_rule: Keyword, vertical_rule: Keyword) -> Self {
        Self {
            image,
            slices,
            horizontal_rule,
            vertical_rule,
        }
    }

    /// The image.
    #[must_use]
    pub const fn image(&self) -> &Value {
        &self.image
    }

    /// Slice offsets.
    #[must_use]
    pub const fn slices(&self) -> &Rect {
        &self.slices
    }

    /// Horizontal and vertical fill rules.
    #[must_use]
    pub const fn rules(&self) -> (Keyword, Keyword) {
        (self.horizontal_rule, self.vertical_rule)
    }

    /// `<image> <top> <right> <bottom> <left> <h-rule> <v-rule>`
    #[must_use]
    pub fn css_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.image.css_text(),
            self.slices.edges_text(),
            self.horizontal_rule,
            self.vertical_rule
        )
    }
}

/// `-webkit-box-reflect`
#[derive(Debug, Clone)]
pub struct ReflectValue {
    direction: Keyword,
    offset: Rc<PrimitiveValue>,
    mask: Option<Value>,
}

impl ReflectValue {
    /// Build a reflection value.
    #[must_use]
    pub const fn new(direction: Keyword, offset: Rc<PrimitiveValue>, mask: Option<Value>) -> Self {
        Self {
            direction,
            offset,
            mask,
        }
    }

    /// `above`, `below`, `left` or `right`.
    #[must_use]
    pub const fn direction(&self) -> Keyword {
        self.direction
    }

    /// Gap between the box and its reflection.
    #[must_use]
    pub fn offset(&self) -> &PrimitiveValue {
        &self.offset
    }

    /// The mask, if any.
    #[must_use]
    pub const fn mask(&self) -> Option<&Value> {
        self.mask.as_ref()
    }

    /// `<direction> <offset> <mask>`, with `none` for a missing mask.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mask = self.mask.as_ref().map_or_else(|| "none".to_string(), Value::css_text);
        format!("{} {} {mask}", self.direction, self.offset.css_text())
    }
}

/// [§ 2 Easing Functions](https://www.w3.org/TR/css-easing-1/#easing-functions)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingFunctionValue(pub TimingFunction);

impl TimingFunctionValue {
    /// `linear`, `cubic-bezier(x1, y1, x2, y2)` or `steps(n, start|end)`.
    #[must_use]
    pub fn css_text(&self) -> String {
        match self.0 {
            TimingFunction::Linear => "linear".to_string(),
            TimingFunction::CubicBezier { x1, y1, x2, y2 } => format!(
                "cubic-bezier({}, {}, {}, {})",
                format_number(x1),
                format_number(y1),
                format_number(x2),
                format_number(y2)
            ),
            TimingFunction::Steps { steps, start } => {
                format!("steps({steps}, {})", if start { "start" } else { "end" })
            }
        }
    }
}

/// [§ 7.1 'box-shadow'](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)
///
/// One shadow. Every component is optional; absent ones are skipped when
/// serializing.
#[derive(Debug, Clone, Default)]
pub struct ShadowValue {
    /// Horizontal offset.
    pub x: Option<Rc<PrimitiveValue>>,
    /// Vertical offset.
    pub y: Option<Rc<PrimitiveValue>>,
    /// Blur radius.
    pub blur: Option<Rc<PrimitiveValue>>,
    /// Spread distance.
    pub spread: Option<Rc<PrimitiveValue>>,
    /// `inset`
    pub style: Option<Rc<PrimitiveValue>>,
    /// Shadow color.
    pub color: Option<Rc<PrimitiveValue>>,
}

impl ShadowValue {
    /// `<color> <x> <y> <blur> <spread> <style>`, skipping absent parts.
    #[must_use]
    pub fn css_text(&self) -> String {
        [&self.color, &self.x, &self.y, &self.blur, &self.spread, &self.style]
            .into_iter()
            .flatten()
            .map(|part| part.css_text())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// [§ 3 Gradients](https://www.w3.org/TR/css-images-3/#gradients)
///
/// A generated image, carried as its function text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageGeneratorValue {
    text: String,
}

impl ImageGeneratorValue {
    /// Wrap generator text such as `-webkit-gradient(...)`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The generator text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A transform function name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformFunction {
    /// `matrix(a, b, c, d, e, f)`
    Matrix,
    /// `matrix3d(m11, ..., m44)`
    Matrix3d,
}

impl TransformFunction {
    const fn name(self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::Matrix3d => "matrix3d",
        }
    }
}

/// [§ 12 Transform Functions](https://www.w3.org/TR/css-transforms-1/#transform-functions)
///
/// One transform function and its arguments.
#[derive(Debug, Clone)]
pub struct TransformValue {
    function: TransformFunction,
    arguments: Vec<Rc<PrimitiveValue>>,
}

impl TransformValue {
    /// Build a transform function value.
    #[must_use]
    pub const fn new(function: TransformFunction, arguments: Vec<Rc<PrimitiveValue>>) -> Self {
        Self { function, arguments }
    }

    /// The function name.
    #[must_use]
    pub const fn function(&self) -> TransformFunction {
        self.function
    }

    /// The arguments in order.
    #[must_use]
    pub fn arguments(&self) -> &[Rc<PrimitiveValue>] {
        &self.arguments
    }

    /// `name(arg, arg, ...)`
    #[must_use]
    pub fn css_text(&self) -> String {
        let arguments = self.arguments.iter().map(|a| a.css_text()).collect::<Vec<_>>().join(", ");
        format!("{}({arguments})", self.function.name())
    }
}
