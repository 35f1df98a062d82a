//! The CSS value model.
//!
//! [CSSOM § 6.7 CSS Values](https://drafts.csswg.org/cssom/#css-values)
//!
//! # Architecture Overview
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                        CSS Value Pipeline                         │
//! ├───────────────────────────────────────────────────────────────────┤
//! │                                                                   │
//! │  parsed Value ──▶ apply::shared() ──▶ Style ──▶ computed ──▶ Value │
//! │                   (table dispatch)   (typed)    (one match)       │
//! │                                                                   │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A [`Value`] is a cheap, shared handle: cloning it clones an `Rc`, and
//! nothing behind the handle is ever mutated. Two handles are the same
//! value object when [`Value::ptr_eq`] says so, which is how cache sharing
//! is observed.

pub mod cache;
mod composite;
mod primitive;
pub mod serialize;

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use quokka_common::url::UrlResolver;

pub use cache::ValueCache;
pub use composite::{
    BorderImageValue, ImageGeneratorValue, ReflectValue, Separator, ShadowValue, TimingFunctionValue,
    TransformFunction, TransformValue, ValueList,
};
pub use primitive::{
    CSS_PIXELS_PER_INCH, ComputedLength, Counter, DashboardGeometry, DashboardRegion, Pair, PrimitiveValue,
    Rect, UnitCategory, UnitKind,
};

use crate::keyword::Keyword;

/// A CSS value. See the module docs.
#[derive(Debug, Clone)]
pub enum Value {
    /// A single component value.
    Primitive(Rc<PrimitiveValue>),
    /// A list of values.
    List(Rc<ValueList>),
    /// `-webkit-border-image` and friends.
    BorderImage(Rc<BorderImageValue>),
    /// `-webkit-box-reflect`
    Reflect(Rc<ReflectValue>),
    /// An easing function.
    TimingFunction(Rc<TimingFunctionValue>),
    /// One shadow.
    Shadow(Rc<ShadowValue>),
    /// A generated image.
    ImageGenerator(Rc<ImageGeneratorValue>),
    /// A transform function.
    Transform(Rc<TransformValue>),
}

impl Value {
    /// A fresh keyword value.
    #[must_use]
    pub fn ident(keyword: Keyword) -> Self {
        PrimitiveValue::ident(keyword).into()
    }

    /// Wrap a list.
    #[must_use]
    pub fn list(list: ValueList) -> Self {
        Self::List(Rc::new(list))
    }

    /// The canonical text of this value.
    #[must_use]
    pub fn css_text(&self) -> String {
        match self {
            Self::Primitive(value) => value.css_text().to_string(),
            Self::List(list) => list.css_text(),
            Self::BorderImage(image) => image.css_text(),
            Self::Reflect(reflect) => reflect.css_text(),
            Self::TimingFunction(function) => function.css_text(),
            Self::Shadow(shadow) => shadow.css_text(),
            Self::ImageGenerator(generator) => generator.text().to_string(),
            Self::Transform(transform) => transform.css_text(),
        }
    }

    /// Whether both handles point at the same value object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Primitive(a), Self::Primitive(b)) => Rc::ptr_eq(a, b),
            (Self::List(a), Self::List(b)) => Rc::ptr_eq(a, b),
            (Self::BorderImage(a), Self::BorderImage(b)) => Rc::ptr_eq(a, b),
            (Self::Reflect(a), Self::Reflect(b)) => Rc::ptr_eq(a, b),
            (Self::TimingFunction(a), Self::TimingFunction(b)) => Rc::ptr_eq(a, b),
            (Self::Shadow(a), Self::Shadow(b)) => Rc::ptr_eq(a, b),
            (Self::ImageGenerator(a), Self::ImageGenerator(b)) => Rc::ptr_eq(a, b),
            (Self::Transform(a), Self::Transform(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// The primitive behind this handle, if it is one.
    #[must_use]
    pub fn as_primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            Self::Primitive(value) => Some(value),
            _ => None,
        }
    }

    /// The list behind this handle, if it is one.
    #[must_use]
    pub fn as_list(&self) -> Option<&ValueList> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// The keyword, if this is an identifier.
    #[must_use]
    pub fn keyword(&self) -> Option<Keyword> {
        self.as_primitive().and_then(PrimitiveValue::keyword)
    }

    /// Whether this is the CSS-wide `inherit` keyword.
    #[must_use]
    pub fn is_inherit(&self) -> bool {
        self.keyword() == Some(Keyword::Inherit)
    }

    /// Whether this is the CSS-wide `initial` keyword.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.keyword() == Some(Keyword::Initial)
    }

    /// Insert the absolute form of every URL this value references,
    /// descending into lists, border images and reflection masks.
    pub fn collect_referenced_urls(&self, urls: &mut BTreeSet<String>, base: &dyn UrlResolver) {
        match self {
            Self::Primitive(value) => value.collect_referenced_urls(urls, base),
            Self::List(list) => list.collect_referenced_urls(urls, base),
            Self::BorderImage(image) => image.image().collect_referenced_urls(urls, base),
            Self::Reflect(reflect) => {
                if let Some(mask) = reflect.mask() {
                    mask.collect_referenced_urls(urls, base);
                }
            }
            Self::TimingFunction(_) | Self::Shadow(_) | Self::ImageGenerator(_) | Self::Transform(_) => {}
        }
    }
}

impl From<PrimitiveValue> for Value {
    fn from(value: PrimitiveValue) -> Self {
        Self::Primitive(Rc::new(value))
    }
}

impl From<Rc<PrimitiveValue>> for Value {
    fn from(value: Rc<PrimitiveValue>) -> Self {
        Self::Primitive(value)
    }
}

impl From<ValueList> for Value {
    fn from(list: ValueList) -> Self {
        Self::list(list)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css_text())
    }
}
