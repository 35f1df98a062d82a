//! Images referenced from styles.
//!
//! [§ 2 Image Values](https://www.w3.org/TR/css-images-3/#image-values)

use std::rc::Rc;

use serde::Serialize;

use crate::values::{ImageGeneratorValue, PrimitiveValue, UnitKind, Value};

/// An image as a style holds it: a URL or a generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StyleImage {
    /// `url(...)`
    Url(String),
    /// A generator function such as a gradient, kept as its source text.
    Generated(String),
}

impl StyleImage {
    /// The CSS value this image was specified with.
    #[must_use]
    pub fn css_value(&self) -> Value {
        match self {
            Self::Url(url) => PrimitiveValue::string(url.clone(), UnitKind::Uri).into(),
            Self::Generated(text) => Value::ImageGenerator(Rc::new(ImageGeneratorValue::new(text.clone()))),
        }
    }

    /// Decode an image from a parsed value. `none` and anything that is not
    /// an image yield `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Primitive(primitive) if primitive.primitive_type() == UnitKind::Uri => {
                primitive.string_value().map(|url| Self::Url(url.to_owned()))
            }
            Value::ImageGenerator(generator) => Some(Self::Generated(generator.text().to_owned())),
            _ => None,
        }
    }
}
