//! Primitive CSS values.
//!
//! [§ 4 Numeric Data Types](https://www.w3.org/TR/css-values-4/#numeric-types)
//!
//! A [`PrimitiveValue`] is a single component value: a number with a unit,
//! a keyword, a string, a color, or one of a few small owned composites
//! (`rect(...)`, pairs, counters, dashboard regions). The kind is fixed at
//! construction and the payload never changes; the serialized text is
//! computed on first request and kept.
//!
//! # Unit conversion
//!
//! Units fall into categories. A value converts freely within its
//! category by scaling through the category's canonical unit:
//!
//! | Category  | Canonical | Members                    |
//! |-----------|-----------|----------------------------|
//! | length    | `px`      | px, cm, mm, in, pt, pc     |
//! | angle     | `deg`     | deg, rad, grad, turn       |
//! | time      | `ms`      | ms, s                      |
//! | frequency | `hz`      | hz, khz                    |
//!
//! A plain number converts to and from any category with a canonical unit
//! by standing in for that canonical unit. Percentages and font-relative
//! lengths have no canonical form and only read back as themselves.

use std::cell::OnceCell;
use std::collections::BTreeSet;
use std::f64::consts::PI;
use std::rc::Rc;

use quokka_common::url::UrlResolver;

use crate::error::StyleError;
use crate::keyword::Keyword;
use crate::style::Style;
use crate::style::color::Rgba32;
use crate::style::length::Length;

use super::serialize::{format_color, format_number, format_url, quote_string, quote_string_if_needed};

/// [§ 2.5 CSS/WebIDL primitive types](https://www.w3.org/TR/DOM-Level-2-Style/css.html#CSS-CSSPrimitiveValue)
///
/// The kind of a primitive value: its unit for numbers, or the payload it
/// carries otherwise. The `Parser*` kinds only appear in values still held
/// by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// A plain number.
    Number,
    /// `%`
    Percentage,
    /// `em`
    Ems,
    /// `ex`
    Exs,
    /// `rem`
    Rems,
    /// `px`
    Px,
    /// `cm`
    Cm,
    /// `mm`
    Mm,
    /// `in`
    In,
    /// `pt`
    Pt,
    /// `pc`
    Pc,
    /// `deg`
    Deg,
    /// `rad`
    Rad,
    /// `grad`
    Grad,
    /// `turn`
    Turn,
    /// `ms`
    Ms,
    /// `s`
    S,
    /// `hz`
    Hz,
    /// `khz`
    Khz,
    /// A number with an unknown unit.
    Dimension,
    /// A quoted string.
    String,
    /// `url(...)`
    Uri,
    /// A keyword.
    Ident,
    /// `attr(...)`
    Attr,
    /// `counter(...)` / `counters(...)`
    Counter,
    /// `rect(...)`
    Rect,
    /// A packed color.
    RgbColor,
    /// Two values, e.g. a border radius.
    Pair,
    /// `dashboard-region(...)`
    DashboardRegion,
    /// A counter name inside `content`.
    CounterName,
    /// `U+...` ranges in `@font-face`.
    UnicodeRange,
    /// Parser-internal integer.
    ParserInteger,
    /// Parser-internal hex color digits, without the `#`.
    ParserHexColor,
    /// Parser-internal operator character.
    ParserOperator,
    /// Parser-internal bare identifier.
    ParserIdentifier,
}

/// The broad family a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    /// Plain numbers.
    Number,
    /// Percentages.
    Percent,
    /// Absolute lengths.
    Length,
    /// Angles.
    Angle,
    /// Durations.
    Time,
    /// Frequencies.
    Frequency,
    /// Everything else, including font-relative lengths.
    Other,
}

impl UnitKind {
    /// The category of this unit.
    #[must_use]
    pub const fn category(self) -> UnitCategory {
        match self {
            Self::Number => UnitCategory::Number,
            Self::Percentage => UnitCategory::Percent,
            Self::Px | Self::Cm | Self::Mm | Self::In | Self::Pt | Self::Pc => UnitCategory::Length,
            Self::Deg | Self::Rad | Self::Grad | Self::Turn => UnitCategory::Angle,
            Self::Ms | Self::S => UnitCategory::Time,
            Self::Hz | Self::Khz => UnitCategory::Frequency,
            _ => UnitCategory::Other,
        }
    }

    /// Whether values of this kind carry a number.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Number
                | Self::Percentage
                | Self::Ems
                | Self::Exs
                | Self::Rems
                | Self::Px
                | Self::Cm
                | Self::Mm
                | Self::In
                | Self::Pt
                | Self::Pc
                | Self::Deg
                | Self::Rad
                | Self::Grad
                | Self::Turn
                | Self::Ms
                | Self::S
                | Self::Hz
                | Self::Khz
                | Self::Dimension
                | Self::ParserInteger
                | Self::ParserOperator
        )
    }

    /// Whether values of this kind carry a string.
    #[must_use]
    pub const fn is_string_like(self) -> bool {
        matches!(
            self,
            Self::String
                | Self::Uri
                | Self::Attr
                | Self::CounterName
                | Self::UnicodeRange
                | Self::ParserHexColor
                | Self::ParserIdentifier
        )
    }

    /// Whether this is a length unit, font-relative ones included.
    #[must_use]
    pub const fn is_length(self) -> bool {
        matches!(
            self,
            Self::Ems | Self::Exs | Self::Rems | Self::Px | Self::Cm | Self::Mm | Self::In | Self::Pt | Self::Pc
        )
    }

    /// The unit suffix printed after the number.
    const fn suffix(self) -> &'static str {
        match self {
            Self::Percentage => "%",
            Self::Ems => "em",
            Self::Exs => "ex",
            Self::Rems => "rem",
            Self::Px => "px",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::Pt => "pt",
            Self::Pc => "pc",
            Self::Deg => "deg",
            Self::Rad => "rad",
            Self::Grad => "grad",
            Self::Turn => "turn",
            Self::Ms => "ms",
            Self::S => "s",
            Self::Hz => "hz",
            Self::Khz => "khz",
            _ => "",
        }
    }
}

impl UnitCategory {
    /// The unit every member of this category converts through.
    #[must_use]
    pub const fn canonical_unit(self) -> Option<UnitKind> {
        match self {
            Self::Number => Some(UnitKind::Number),
            Self::Length => Some(UnitKind::Px),
            Self::Angle => Some(UnitKind::Deg),
            Self::Time => Some(UnitKind::Ms),
            Self::Frequency => Some(UnitKind::Hz),
            Self::Percent | Self::Other => None,
        }
    }
}

/// CSS pixels per inch.
pub const CSS_PIXELS_PER_INCH: f64 = 96.0;

/// Multiply by this to convert `unit` into its canonical unit.
fn canonical_scale(unit: UnitKind) -> f64 {
    match unit {
        UnitKind::Cm => CSS_PIXELS_PER_INCH / 2.54,
        UnitKind::Mm => CSS_PIXELS_PER_INCH / 25.4,
        UnitKind::In => CSS_PIXELS_PER_INCH,
        UnitKind::Pt => CSS_PIXELS_PER_INCH / 72.0,
        UnitKind::Pc => CSS_PIXELS_PER_INCH * 12.0 / 72.0,
        UnitKind::Rad => 180.0 / PI,
        UnitKind::Grad => 360.0 / 400.0,
        UnitKind::Turn => 360.0,
        UnitKind::S | UnitKind::Khz => 1000.0,
        _ => 1.0,
    }
}

/// Rounding applied when a computed length lands in an integer type.
///
/// Layout arithmetic is imprecise (44.99998 where 45 was meant), so values
/// are nudged by 0.01 away from zero before truncation. Results outside the
/// target range become zero.
pub trait ComputedLength: Sized {
    /// Convert a pixel count into this type.
    fn from_pixels(pixels: f64) -> Self;
}

impl ComputedLength for f64 {
    fn from_pixels(pixels: f64) -> Self {
        pixels
    }
}

impl ComputedLength for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn from_pixels(pixels: f64) -> Self {
        pixels as Self
    }
}

impl ComputedLength for Length {
    #[allow(clippy::cast_possible_truncation)]
    fn from_pixels(pixels: f64) -> Self {
        Self::Fixed(pixels as f32)
    }
}

macro_rules! integral_computed_length {
    ($($ty:ty),+) => {
        $(
            impl ComputedLength for $ty {
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_lossless
                )]
                fn from_pixels(pixels: f64) -> Self {
                    let nudged = if pixels < 0.0 { pixels - 0.01 } else { pixels + 0.01 };
                    if nudged > <$ty>::MAX as f64 || nudged < <$ty>::MIN as f64 {
                        0
                    } else {
                        nudged as $ty
                    }
                }
            }
        )+
    };
}

integral_computed_length!(i32, i16, u16, u8);

/// `counter(name, style)` / `counters(name, separator, style)`
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    /// Counter name.
    pub identifier: String,
    /// List style keyword, when one was given.
    pub list_style: Option<Keyword>,
    /// Separator for `counters()`; empty for `counter()`.
    pub separator: String,
}

/// `rect(top right bottom left)`
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    /// Top edge.
    pub top: Rc<PrimitiveValue>,
    /// Right edge.
    pub right: Rc<PrimitiveValue>,
    /// Bottom edge.
    pub bottom: Rc<PrimitiveValue>,
    /// Left edge.
    pub left: Rc<PrimitiveValue>,
}

impl Rect {
    /// Build a rect from its four edges.
    #[must_use]
    pub const fn new(
        top: Rc<PrimitiveValue>,
        right: Rc<PrimitiveValue>,
        bottom: Rc<PrimitiveValue>,
        left: Rc<PrimitiveValue>,
    ) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The four edges joined by spaces.
    #[must_use]
    pub fn edges_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.top.css_text(),
            self.right.css_text(),
            self.bottom.css_text(),
            self.left.css_text()
        )
    }
}

/// Two values printed side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    /// First component.
    pub first: Rc<PrimitiveValue>,
    /// Second component.
    pub second: Rc<PrimitiveValue>,
}

/// One `dashboard-region(...)` in a chain.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRegion {
    /// Region label.
    pub label: String,
    /// `circle` or `rectangle`; anything else ends serialization.
    pub geometry: Option<DashboardGeometry>,
    /// Insets in top, right, bottom, left order.
    pub offsets: Rect,
    /// The next region.
    pub next: Option<Box<DashboardRegion>>,
}

/// Shape of a dashboard region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardGeometry {
    /// `circle`
    Circle,
    /// `rectangle`
    Rectangle,
}

impl DashboardRegion {
    /// Iterate over this region and the ones chained after it.
    pub fn iter(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |region| region.next.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Payload {
    Number(f64),
    Ident(u16),
    Str(String),
    Color(Rgba32),
    Counter(Box<Counter>),
    Rect(Box<Rect>),
    Pair(Box<Pair>),
    DashboardRegion(Box<DashboardRegion>),
}

/// A single CSS component value. See the module docs.
#[derive(Debug, Clone)]
pub struct PrimitiveValue {
    kind: UnitKind,
    payload: Payload,
    text: OnceCell<String>,
}

impl PartialEq for PrimitiveValue {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.payload == other.payload
    }
}

impl PrimitiveValue {
    const fn with(kind: UnitKind, payload: Payload) -> Self {
        Self {
            kind,
            payload,
            text: OnceCell::new(),
        }
    }

    /// A keyword.
    #[must_use]
    pub const fn ident(keyword: Keyword) -> Self {
        Self::with(UnitKind::Ident, Payload::Ident(keyword.code()))
    }

    /// A keyword by raw code. Codes that name no keyword serialize as the
    /// empty string.
    #[must_use]
    pub const fn ident_code(code: u16) -> Self {
        Self::with(UnitKind::Ident, Payload::Ident(code))
    }

    /// A number in `unit`.
    ///
    /// # Panics
    ///
    /// Panics if `unit` does not carry a number.
    #[must_use]
    pub fn number(value: f64, unit: UnitKind) -> Self {
        assert!(unit.is_numeric(), "{unit:?} is not a numeric unit");
        Self::with(unit, Payload::Number(value))
    }

    /// A string of a string-like kind (string, URI, `attr()`, counter name).
    ///
    /// # Panics
    ///
    /// Panics if `unit` does not carry a string.
    #[must_use]
    pub fn string(value: impl Into<String>, unit: UnitKind) -> Self {
        assert!(unit.is_string_like(), "{unit:?} is not a string unit");
        Self::with(unit, Payload::Str(value.into()))
    }

    /// A color.
    #[must_use]
    pub const fn color(rgba: Rgba32) -> Self {
        Self::with(UnitKind::RgbColor, Payload::Color(rgba))
    }

    /// The value a resolved [`Length`] reads back as.
    ///
    /// `Undefined` lengths read as `none`.
    ///
    /// # Panics
    ///
    /// Relative lengths must be resolved before they reach the value model;
    /// passing one panics.
    #[must_use]
    pub fn from_length(length: Length) -> Self {
        match length {
            Length::Auto => Self::ident(Keyword::Auto),
            Length::Intrinsic => Self::ident(Keyword::Intrinsic),
            Length::MinIntrinsic => Self::ident(Keyword::MinIntrinsic),
            Length::Undefined => Self::ident(Keyword::None),
            Length::Percent(p) => Self::number(f64::from(p), UnitKind::Percentage),
            Length::Fixed(px) => Self::number(f64::from(px), UnitKind::Px),
            Length::Relative(_) => panic!("relative lengths have no CSS value"),
        }
    }

    /// Take ownership of a counter.
    #[must_use]
    pub fn counter(counter: Counter) -> Self {
        Self::with(UnitKind::Counter, Payload::Counter(Box::new(counter)))
    }

    /// Take ownership of a rect.
    #[must_use]
    pub fn rect(rect: Rect) -> Self {
        Self::with(UnitKind::Rect, Payload::Rect(Box::new(rect)))
    }

    /// Take ownership of a pair.
    #[must_use]
    pub fn pair(first: Rc<Self>, second: Rc<Self>) -> Self {
        Self::with(UnitKind::Pair, Payload::Pair(Box::new(Pair { first, second })))
    }

    /// Take ownership of a dashboard region chain.
    #[must_use]
    pub fn dashboard_region(region: DashboardRegion) -> Self {
        Self::with(UnitKind::DashboardRegion, Payload::DashboardRegion(Box::new(region)))
    }

    /// The kind of this value.
    #[must_use]
    pub const fn primitive_type(&self) -> UnitKind {
        self.kind
    }

    /// The stored number, in the value's own unit; zero for non-numbers.
    #[must_use]
    pub const fn double_value(&self) -> f64 {
        match self.payload {
            Payload::Number(value) => value,
            _ => 0.0,
        }
    }

    /// The stored number as `f32`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn float_value(&self) -> f32 {
        self.double_value() as f32
    }

    /// [§ 4.1.1 Conversion](https://www.w3.org/TR/DOM-Level-2-Style/css.html#CSS-CSSPrimitiveValue-getFloatValue)
    ///
    /// The stored number converted to `target`.
    ///
    /// # Errors
    ///
    /// [`StyleError::InvalidAccess`] when the value is not numeric, when the
    /// two units sit in different categories and neither is a plain number,
    /// or when a unit has no canonical form to convert through.
    pub fn value_as(&self, target: UnitKind) -> Result<f64, StyleError> {
        let error = StyleError::InvalidAccess {
            from: self.kind,
            to: target,
        };
        let Payload::Number(value) = self.payload else {
            return Err(error);
        };
        if self.kind == target {
            return Ok(value);
        }

        let source_category = self.kind.category();
        let target_category = target.category();
        let source = if source_category == UnitCategory::Number {
            target_category.canonical_unit().ok_or(error)?
        } else {
            self.kind
        };
        let target = if target_category == UnitCategory::Number {
            source_category.canonical_unit().ok_or(error)?
        } else {
            target
        };
        if source.category() != target.category() || source.category() == UnitCategory::Other {
            return Err(error);
        }

        Ok(value * canonical_scale(source) / canonical_scale(target))
    }

    /// [`Self::value_as`] narrowed to `f32`.
    ///
    /// # Errors
    ///
    /// As for [`Self::value_as`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn float_value_as(&self, target: UnitKind) -> Result<f32, StyleError> {
        self.value_as(target).map(|v| v as f32)
    }

    /// The string payload of string-like kinds.
    #[must_use]
    pub fn string_value(&self) -> Option<&str> {
        match &self.payload {
            Payload::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The keyword of an identifier.
    #[must_use]
    pub fn keyword(&self) -> Option<Keyword> {
        match self.payload {
            Payload::Ident(code) => Keyword::from_code(code),
            _ => None,
        }
    }

    /// The raw code of an identifier, known or not.
    #[must_use]
    pub const fn keyword_code(&self) -> Option<u16> {
        match self.payload {
            Payload::Ident(code) => Some(code),
            _ => None,
        }
    }

    /// The color of a color value, including parser hex colors.
    #[must_use]
    pub fn rgba(&self) -> Option<Rgba32> {
        match &self.payload {
            Payload::Color(rgba) => Some(*rgba),
            Payload::Str(hex) if self.kind == UnitKind::ParserHexColor => Rgba32::from_hex(hex),
            _ => None,
        }
    }

    /// The rect payload.
    #[must_use]
    pub fn rect_value(&self) -> Option<&Rect> {
        match &self.payload {
            Payload::Rect(rect) => Some(rect),
            _ => None,
        }
    }

    /// The pair payload.
    #[must_use]
    pub fn pair_value(&self) -> Option<&Pair> {
        match &self.payload {
            Payload::Pair(pair) => Some(pair),
            _ => None,
        }
    }

    /// The counter payload.
    #[must_use]
    pub fn counter_value(&self) -> Option<&Counter> {
        match &self.payload {
            Payload::Counter(counter) => Some(counter),
            _ => None,
        }
    }

    /// The first region of a dashboard region chain.
    #[must_use]
    pub fn dashboard_region_value(&self) -> Option<&DashboardRegion> {
        match &self.payload {
            Payload::DashboardRegion(region) => Some(region),
            _ => None,
        }
    }

    /// Whether this is a length, font-relative units included.
    #[must_use]
    pub const fn is_length(&self) -> bool {
        self.kind.is_length()
    }

    /// Whether this is a percentage.
    #[must_use]
    pub fn is_percentage(&self) -> bool {
        self.kind == UnitKind::Percentage
    }

    /// Whether this is a plain number.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self.kind, UnitKind::Number | UnitKind::ParserInteger)
    }

    /// Whether this is a keyword.
    #[must_use]
    pub fn is_ident(&self) -> bool {
        self.kind == UnitKind::Ident
    }

    /// [§ 5.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// [§ 5.2 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    ///
    /// This length in CSS pixels for an element with `style`.
    ///
    /// `em` and `rem` read the *specified* font size while font-size itself
    /// is being computed and the computed size otherwise; `rem` reads the
    /// root style, falling back to `style`. The zoom `multiplier` applies to
    /// absolute units only and never while computing font-size. A length of
    /// at least one pixel stays at least one pixel after zooming, so thin
    /// borders do not vanish.
    ///
    /// Values that are not lengths yield -1.
    #[must_use]
    pub fn compute_length<T: ComputedLength>(
        &self,
        style: &Style,
        root_style: Option<&Style>,
        multiplier: f64,
        computing_font_size: bool,
    ) -> T {
        T::from_pixels(self.compute_length_pixels(style, root_style, multiplier, computing_font_size))
    }

    #[allow(clippy::float_cmp)]
    fn compute_length_pixels(
        &self,
        style: &Style,
        root_style: Option<&Style>,
        multiplier: f64,
        computing_font_size: bool,
    ) -> f64 {
        let font_size = |s: &Style| {
            f64::from(if computing_font_size {
                s.font.specified_size
            } else {
                s.font.computed_size
            })
        };

        let mut apply_zoom = !computing_font_size;
        let factor = match self.kind {
            UnitKind::Ems => {
                apply_zoom = false;
                font_size(style)
            }
            UnitKind::Exs => {
                apply_zoom = false;
                f64::from(style.font.x_height)
            }
            UnitKind::Rems => {
                apply_zoom = false;
                font_size(root_style.unwrap_or(style))
            }
            UnitKind::Px | UnitKind::Cm | UnitKind::Mm | UnitKind::In | UnitKind::Pt | UnitKind::Pc => {
                canonical_scale(self.kind)
            }
            _ => return -1.0,
        };

        let result = self.double_value() * factor;
        if !apply_zoom || multiplier == 1.0 {
            return result;
        }
        let zoomed = result * multiplier;
        if result >= 1.0 { zoomed.max(1.0) } else { zoomed }
    }

    /// Decode a length-like value into a [`Length`]: absolute and
    /// font-relative lengths become fixed pixels, percentages stay
    /// percentages, and `auto` / `intrinsic` / `min-intrinsic` map to their
    /// keyword forms. Anything else is `None`.
    #[must_use]
    pub fn convert_to_length(&self, style: &Style, root_style: Option<&Style>, multiplier: f64) -> Option<Length> {
        if self.is_length() {
            return Some(self.compute_length(style, root_style, multiplier, false));
        }
        if self.is_percentage() {
            return Some(Length::Percent(self.float_value()));
        }
        match self.keyword()? {
            Keyword::Auto => Some(Length::Auto),
            Keyword::Intrinsic => Some(Length::Intrinsic),
            Keyword::MinIntrinsic => Some(Length::MinIntrinsic),
            _ => None,
        }
    }

    /// [CSSOM § 6.7.2 Serializing CSS Values](https://drafts.csswg.org/cssom/#serializing-css-values)
    ///
    /// The canonical text of this value, computed once.
    pub fn css_text(&self) -> &str {
        self.text.get_or_init(|| self.serialize())
    }

    fn serialize(&self) -> String {
        match &self.payload {
            Payload::Number(value) => match self.kind {
                UnitKind::ParserOperator => {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    char::from_u32(*value as u32).map(String::from).unwrap_or_default()
                }
                UnitKind::ParserInteger => format!("{value:.0}"),
                kind => format!("{}{}", format_number(*value), kind.suffix()),
            },
            Payload::Ident(code) => Keyword::from_code(*code).map(|k| k.name().to_string()).unwrap_or_default(),
            Payload::Str(s) => match self.kind {
                UnitKind::String => quote_string_if_needed(s),
                UnitKind::Uri => format_url(s),
                UnitKind::Attr => format!("attr({s})"),
                UnitKind::CounterName => format!("counter({s})"),
                UnitKind::ParserHexColor => Rgba32::from_hex(s).map_or_else(|| format!("#{s}"), format_color),
                _ => s.clone(),
            },
            Payload::Color(rgba) => format_color(*rgba),
            Payload::Counter(counter) => {
                let style = counter
                    .list_style
                    .filter(|k| *k != Keyword::Decimal)
                    .map(|k| format!(", {k}"))
                    .unwrap_or_default();
                if counter.separator.is_empty() {
                    format!("counter({}{style})", counter.identifier)
                } else {
                    format!(
                        "counters({}, {}{style})",
                        counter.identifier,
                        quote_string(&counter.separator)
                    )
                }
            }
            Payload::Rect(rect) => format!("rect({})", rect.edges_text()),
            Payload::Pair(pair) => format!("{} {}", pair.first.css_text(), pair.second.css_text()),
            Payload::DashboardRegion(region) => serialize_dashboard_regions(region),
        }
    }

    /// [CSSOM § 6.6 Subresources](https://drafts.csswg.org/cssom/)
    ///
    /// Insert the absolute form of every URL this value references.
    pub fn collect_referenced_urls(&self, urls: &mut BTreeSet<String>, base: &dyn UrlResolver) {
        if let (UnitKind::Uri, Payload::Str(url)) = (self.kind, &self.payload) {
            let _ = urls.insert(base.complete_url(url));
        }
    }
}

fn serialize_dashboard_regions(first: &DashboardRegion) -> String {
    let mut parts = Vec::new();
    for region in first.iter() {
        let geometry = match region.geometry {
            Some(DashboardGeometry::Circle) => "circle",
            Some(DashboardGeometry::Rectangle) => "rectangle",
            None => break,
        };
        parts.push(format!(
            "dashboard-region({} {geometry} {})",
            region.label,
            region.offsets.edges_text()
        ));
    }
    parts.join(" ")
}

impl std::fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_rounding_nudges_and_saturates() {
        assert_eq!(i32::from_pixels(44.999_98), 45);
        assert_eq!(i32::from_pixels(-2.995), -3);
        assert_eq!(i16::from_pixels(40_000.0), 0);
        assert_eq!(u16::from_pixels(-5.0), 0);
    }

    #[test]
    fn test_categories() {
        assert_eq!(UnitKind::Pc.category(), UnitCategory::Length);
        assert_eq!(UnitKind::Ems.category(), UnitCategory::Other);
        assert_eq!(UnitKind::Turn.category(), UnitCategory::Angle);
        assert_eq!(UnitCategory::Percent.canonical_unit(), None);
    }

    #[test]
    fn test_text_is_memoized() {
        let value = PrimitiveValue::number(3.0, UnitKind::Px);
        let first: *const str = value.css_text();
        let second: *const str = value.css_text();
        assert!(std::ptr::eq(first, second));
    }
}
