//! Shared primitive values.
//!
//! Computed style reconstruction produces the same handful of values over
//! and over: small pixel counts, common keywords, black and white. A
//! document keeps one [`ValueCache`] and hands out shared handles for
//! those instead of allocating fresh values each time.

use std::collections::HashMap;
use std::rc::Rc;

use strum::EnumCount;

use crate::keyword::Keyword;
use crate::style::color::Rgba32;

use super::primitive::{PrimitiveValue, UnitKind};

/// Largest integral magnitude shared by [`ValueCache::numeric_value`].
pub const MAXIMUM_CACHEABLE_INTEGER: u16 = 256;

/// The color map is cleared outright once it grows past this many entries.
pub const MAXIMUM_COLOR_CACHE_SIZE: usize = 512;

const INTEGER_SLOTS: usize = MAXIMUM_CACHEABLE_INTEGER as usize + 1;

/// Per-document interning of common primitive values.
#[derive(Debug)]
pub struct ValueCache {
    identifiers: Vec<Option<Rc<PrimitiveValue>>>,
    transparent: Rc<PrimitiveValue>,
    white: Rc<PrimitiveValue>,
    black: Rc<PrimitiveValue>,
    colors: HashMap<Rgba32, Rc<PrimitiveValue>>,
    pixels: Vec<Option<Rc<PrimitiveValue>>>,
    percentages: Vec<Option<Rc<PrimitiveValue>>>,
    numbers: Vec<Option<Rc<PrimitiveValue>>>,
}

impl Default for ValueCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueCache {
    /// An empty cache with the pinned colors in place.
    #[must_use]
    pub fn new() -> Self {
        Self {
            identifiers: vec![None; Keyword::COUNT],
            transparent: Rc::new(PrimitiveValue::color(Rgba32::TRANSPARENT)),
            white: Rc::new(PrimitiveValue::color(Rgba32::WHITE)),
            black: Rc::new(PrimitiveValue::color(Rgba32::BLACK)),
            colors: HashMap::new(),
            pixels: vec![None; INTEGER_SLOTS],
            percentages: vec![None; INTEGER_SLOTS],
            numbers: vec![None; INTEGER_SLOTS],
        }
    }

    /// The shared value for `keyword`.
    pub fn identifier(&mut self, keyword: Keyword) -> Rc<PrimitiveValue> {
        self.identifier_value(keyword.code())
    }

    /// The shared value for a keyword code. Codes that name no keyword get
    /// a fresh value every time.
    pub fn identifier_value(&mut self, code: u16) -> Rc<PrimitiveValue> {
        match self.identifiers.get_mut(usize::from(code)) {
            Some(slot) => Rc::clone(slot.get_or_insert_with(|| Rc::new(PrimitiveValue::ident_code(code)))),
            None => Rc::new(PrimitiveValue::ident_code(code)),
        }
    }

    /// The shared value for a color.
    ///
    /// Transparent, white and black are pinned. Other colors are memoized;
    /// when the map is over [`MAXIMUM_COLOR_CACHE_SIZE`] entries it is
    /// emptied before the new color goes in.
    pub fn color_value(&mut self, rgba: Rgba32) -> Rc<PrimitiveValue> {
        match rgba {
            Rgba32::TRANSPARENT => return Rc::clone(&self.transparent),
            Rgba32::WHITE => return Rc::clone(&self.white),
            Rgba32::BLACK => return Rc::clone(&self.black),
            _ => {}
        }
        if let Some(value) = self.colors.get(&rgba) {
            return Rc::clone(value);
        }
        if self.colors.len() > MAXIMUM_COLOR_CACHE_SIZE {
            self.colors.clear();
        }
        let value = Rc::new(PrimitiveValue::color(rgba));
        let _ = self.colors.insert(rgba, Rc::clone(&value));
        value
    }

    /// A numeric value. Non-negative integral pixels, percentages and
    /// numbers up to [`MAXIMUM_CACHEABLE_INTEGER`] are shared; anything else
    /// is built fresh.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::float_cmp)]
    pub fn numeric_value(&mut self, value: f64, unit: UnitKind) -> Rc<PrimitiveValue> {
        let fresh = || Rc::new(PrimitiveValue::number(value, unit));
        if !(0.0..=f64::from(MAXIMUM_CACHEABLE_INTEGER)).contains(&value) || value.trunc() != value {
            return fresh();
        }
        let slots = match unit {
            UnitKind::Px => &mut self.pixels,
            UnitKind::Percentage => &mut self.percentages,
            UnitKind::Number => &mut self.numbers,
            _ => return fresh(),
        };
        // Normalizes -0 into the zero slot.
        let index = value as usize;
        Rc::clone(slots[index].get_or_insert_with(|| Rc::new(PrimitiveValue::number(value.abs(), unit))))
    }

    /// Shorthand for a pixel value.
    pub fn pixels(&mut self, value: f64) -> Rc<PrimitiveValue> {
        self.numeric_value(value, UnitKind::Px)
    }

    /// Shorthand for a percentage.
    pub fn percentage(&mut self, value: f64) -> Rc<PrimitiveValue> {
        self.numeric_value(value, UnitKind::Percentage)
    }

    /// Shorthand for a plain number.
    pub fn number(&mut self, value: f64) -> Rc<PrimitiveValue> {
        self.numeric_value(value, UnitKind::Number)
    }

    /// Number of memoized non-pinned colors.
    #[must_use]
    pub fn color_cache_len(&self) -> usize {
        self.colors.len()
    }
}
