//! Background and mask layers.
//!
//! [§ 3 Backgrounds](https://www.w3.org/TR/css-backgrounds-3/#backgrounds)
//!
//! "The background of a box can have multiple layers. The number of layers
//! is determined by the number of comma-separated values in the
//! 'background-image' property."
//!
//! Every per-layer property is tracked as set or unset. Unset properties
//! read as the initial value for the layer kind; the apply table clears
//! surplus layers back to unset rather than removing them.

use serde::Serialize;

use super::image::StyleImage;
use super::keywords::{CompositeOperator, FillAttachment, FillBox, FillRepeat};
use super::length::{Length, LengthSize};

/// Which list a layer belongs to. Some initial values differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FillLayerKind {
    /// `background-*`
    Background,
    /// `-webkit-mask-*`
    Mask,
}

/// [§ 3.9 'background-size'](https://www.w3.org/TR/css-backgrounds-3/#the-background-size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum FillSize {
    /// `contain`
    Contain,
    /// `cover`
    Cover,
    /// Explicit width and height, either of which may be `auto`.
    Size(LengthSize),
}

impl Default for FillSize {
    fn default() -> Self {
        Self::Size(LengthSize::new(Length::Auto, Length::Auto))
    }
}

macro_rules! fill_properties {
    ($(
        $(#[$doc:meta])*
        $field:ident: $ty:ty, $setter:ident, $is_set:ident, $clear:ident, $initial:ident;
    )+) => {
        /// One layer of a background or mask.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        pub struct FillLayer {
            kind: FillLayerKind,
            $($field: Option<$ty>,)+
        }

        impl FillLayer {
            /// A layer with every property unset.
            #[must_use]
            pub const fn new(kind: FillLayerKind) -> Self {
                Self {
                    kind,
                    $($field: None,)+
                }
            }

            $(
                $(#[$doc])*
                #[must_use]
                pub fn $field(&self) -> $ty {
                    self.$field.clone().unwrap_or_else(|| Self::$initial(self.kind))
                }

                #[doc = concat!("Set `", stringify!($field), "`.")]
                pub fn $setter(&mut self, value: $ty) {
                    self.$field = Some(value);
                }

                #[doc = concat!("Whether `", stringify!($field), "` was set.")]
                #[must_use]
                pub const fn $is_set(&self) -> bool {
                    self.$field.is_some()
                }

                #[doc = concat!("Reset `", stringify!($field), "` to unset.")]
                pub fn $clear(&mut self) {
                    self.$field = None;
                }
            )+

            /// Reset every property to unset.
            pub fn clear_all(&mut self) {
                $(self.$field = None;)+
            }
        }
    };
}

fill_properties! {
    /// The layer image, if any.
    image: Option<StyleImage>, set_image, is_image_set, clear_image, initial_image;
    /// `*-attachment`
    attachment: FillAttachment, set_attachment, is_attachment_set, clear_attachment, initial_attachment;
    /// `*-clip`
    clip: FillBox, set_clip, is_clip_set, clear_clip, initial_clip;
    /// `*-origin`
    origin: FillBox, set_origin, is_origin_set, clear_origin, initial_origin;
    /// `-webkit-*-composite`
    composite: CompositeOperator, set_composite, is_composite_set, clear_composite, initial_composite;
    /// Horizontal repeat.
    repeat_x: FillRepeat, set_repeat_x, is_repeat_x_set, clear_repeat_x, initial_repeat;
    /// Vertical repeat.
    repeat_y: FillRepeat, set_repeat_y, is_repeat_y_set, clear_repeat_y, initial_repeat;
    /// Horizontal position.
    x_position: Length, set_x_position, is_x_position_set, clear_x_position, initial_position;
    /// Vertical position.
    y_position: Length, set_y_position, is_y_position_set, clear_y_position, initial_position;
    /// `*-size`
    size: FillSize, set_size, is_size_set, clear_size, initial_size;
}

impl FillLayer {
    /// The list this layer belongs to.
    #[must_use]
    pub const fn kind(&self) -> FillLayerKind {
        self.kind
    }

    /// Initial image: none.
    #[must_use]
    pub const fn initial_image(_kind: FillLayerKind) -> Option<StyleImage> {
        None
    }

    /// Initial attachment: `scroll`.
    #[must_use]
    pub const fn initial_attachment(_kind: FillLayerKind) -> FillAttachment {
        FillAttachment::Scroll
    }

    /// Initial clip: `border-box`.
    #[must_use]
    pub const fn initial_clip(_kind: FillLayerKind) -> FillBox {
        FillBox::BorderBox
    }

    /// Initial origin: `padding-box` for backgrounds, `border-box` for masks.
    #[must_use]
    pub const fn initial_origin(kind: FillLayerKind) -> FillBox {
        match kind {
            FillLayerKind::Background => FillBox::PaddingBox,
            FillLayerKind::Mask => FillBox::BorderBox,
        }
    }

    /// Initial composite: `source-over`.
    #[must_use]
    pub const fn initial_composite(_kind: FillLayerKind) -> CompositeOperator {
        CompositeOperator::SourceOver
    }

    /// Initial repeat: `repeat`.
    #[must_use]
    pub const fn initial_repeat(_kind: FillLayerKind) -> FillRepeat {
        FillRepeat::Repeat
    }

    /// Initial position: `0%`.
    #[must_use]
    pub const fn initial_position(_kind: FillLayerKind) -> Length {
        Length::Percent(0.0)
    }

    /// Initial size: `auto auto`.
    #[must_use]
    pub fn initial_size(_kind: FillLayerKind) -> FillSize {
        FillSize::default()
    }
}

/// The ordered layers of one background or mask. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillLayers {
    kind: FillLayerKind,
    layers: Vec<FillLayer>,
}

impl FillLayers {
    /// A single unset layer.
    #[must_use]
    pub fn new(kind: FillLayerKind) -> Self {
        Self {
            kind,
            layers: vec![FillLayer::new(kind)],
        }
    }

    /// Build from explicit layers. An empty list becomes one unset layer.
    #[must_use]
    pub fn from_layers(kind: FillLayerKind, layers: Vec<FillLayer>) -> Self {
        if layers.is_empty() {
            return Self::new(kind);
        }
        Self { kind, layers }
    }

    /// Background or mask.
    #[must_use]
    pub const fn kind(&self) -> FillLayerKind {
        self.kind
    }

    /// Number of layers (at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always false; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// The first layer.
    #[must_use]
    pub fn first(&self) -> &FillLayer {
        &self.layers[0]
    }

    /// Layer `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FillLayer> {
        self.layers.get(index)
    }

    /// Layer `index`, growing the list with unset layers as needed.
    pub fn ensure(&mut self, index: usize) -> &mut FillLayer {
        while self.layers.len() <= index {
            self.layers.push(FillLayer::new(self.kind));
        }
        &mut self.layers[index]
    }

    /// Iterate in painting order (first layer on top).
    pub fn iter(&self) -> std::slice::Iter<'_, FillLayer> {
        self.layers.iter()
    }

    /// Mutable iteration over the existing layers.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, FillLayer> {
        self.layers.iter_mut()
    }
}

impl<'a> IntoIterator for &'a FillLayers {
    type Item = &'a FillLayer;
    type IntoIter = std::slice::Iter<'a, FillLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
