//! Integration tests for primitive values, the value cache, and value
//! serialization.

use std::rc::Rc;

use quokka_css::error::StyleError;
use quokka_css::keyword::Keyword;
use quokka_css::style::Style;
use quokka_css::style::animation::TimingFunction;
use quokka_css::style::color::Rgba32;
use quokka_css::style::length::Length;
use quokka_css::values::cache::MAXIMUM_COLOR_CACHE_SIZE;
use quokka_css::values::{
    Counter, PrimitiveValue, Rect, ReflectValue, ShadowValue, TimingFunctionValue, TransformFunction,
    TransformValue, UnitKind, Value, ValueCache, ValueList,
};

fn px(value: f64) -> Rc<PrimitiveValue> {
    Rc::new(PrimitiveValue::number(value, UnitKind::Px))
}

// Primitive values

#[test]
fn test_unit_conversion_within_category() {
    let inch = PrimitiveValue::number(1.0, UnitKind::In);
    assert!((inch.value_as(UnitKind::Px).unwrap() - 96.0).abs() < 1e-9);
    assert!((inch.value_as(UnitKind::Pt).unwrap() - 72.0).abs() < 1e-9);

    let seconds = PrimitiveValue::number(1.5, UnitKind::S);
    assert!((seconds.value_as(UnitKind::Ms).unwrap() - 1500.0).abs() < 1e-9);

    let pixels = PrimitiveValue::number(inch.value_as(UnitKind::Px).unwrap(), UnitKind::Px);
    assert!((pixels.value_as(UnitKind::In).unwrap() - 1.0).abs() < 1e-9);

    let percent = PrimitiveValue::number(50.0, UnitKind::Percentage);
    assert!(percent.value_as(UnitKind::Px).is_err());
    assert!(percent.value_as(UnitKind::Deg).is_err());
}

#[test]
fn test_plain_number_converts_through_canonical_unit() {
    let number = PrimitiveValue::number(12.0, UnitKind::Number);
    assert!((number.value_as(UnitKind::Px).unwrap() - 12.0).abs() < 1e-9);
}

#[test]
fn test_cross_category_conversion_is_invalid_access() {
    let length = PrimitiveValue::number(10.0, UnitKind::Px);
    let error = length.value_as(UnitKind::Deg).unwrap_err();
    assert_eq!(
        error,
        StyleError::InvalidAccess {
            from: UnitKind::Px,
            to: UnitKind::Deg
        }
    );
    assert_eq!(error.code(), 15);

    let ems = PrimitiveValue::number(2.0, UnitKind::Ems);
    assert!(ems.value_as(UnitKind::Px).is_err());
}

#[test]
fn test_string_and_keyword_accessors() {
    let name = PrimitiveValue::string("Helvetica", UnitKind::String);
    assert_eq!(name.string_value(), Some("Helvetica"));
    assert_eq!(name.keyword(), None);
    assert!(name.value_as(UnitKind::Px).is_err());

    let auto = PrimitiveValue::ident(Keyword::Auto);
    assert_eq!(auto.keyword(), Some(Keyword::Auto));
    assert!(auto.is_ident());
}

#[test]
fn test_compute_length_font_relative_and_zoom() {
    let mut style = Style::new();
    style.font.computed_size = 20.0;
    style.font.specified_size = 10.0;

    let ems = PrimitiveValue::number(2.0, UnitKind::Ems);
    let computed: f64 = ems.compute_length(&style, None, 3.0, false);
    assert!((computed - 40.0).abs() < 1e-9, "em ignores zoom and uses the computed size");
    let while_sizing_font: f64 = ems.compute_length(&style, None, 3.0, true);
    assert!((while_sizing_font - 20.0).abs() < 1e-9);

    let pixels = PrimitiveValue::number(5.0, UnitKind::Px);
    let zoomed: i32 = pixels.compute_length(&style, None, 2.0, false);
    assert_eq!(zoomed, 10);

    let one = PrimitiveValue::number(1.0, UnitKind::Px);
    let zoomed_out: f64 = one.compute_length(&style, None, 0.25, false);
    assert!((zoomed_out - 1.0).abs() < 1e-9, "a visible pixel survives zooming out");

    let zero = PrimitiveValue::number(0.0, UnitKind::Px);
    let zero_zoomed: i32 = zero.compute_length(&style, None, 0.5, false);
    assert_eq!(zero_zoomed, 0);
}

#[test]
fn test_compute_length_of_non_length_is_negative_one() {
    let style = Style::new();
    let degrees = PrimitiveValue::number(90.0, UnitKind::Deg);
    let value: f64 = degrees.compute_length(&style, None, 1.0, false);
    assert!((value + 1.0).abs() < 1e-9);
}

#[test]
fn test_rem_reads_root_style() {
    let style = Style::new();
    let mut root = Style::new();
    root.font.computed_size = 8.0;
    let rems = PrimitiveValue::number(2.0, UnitKind::Rems);
    let value: f64 = rems.compute_length(&style, Some(&root), 1.0, false);
    assert!((value - 16.0).abs() < 1e-9);
}

#[test]
fn test_convert_to_length() {
    let style = Style::new();
    let percent = PrimitiveValue::number(50.0, UnitKind::Percentage);
    assert_eq!(percent.convert_to_length(&style, None, 1.0), Some(Length::Percent(50.0)));
    let auto = PrimitiveValue::ident(Keyword::Auto);
    assert_eq!(auto.convert_to_length(&style, None, 1.0), Some(Length::Auto));
    let red = PrimitiveValue::ident(Keyword::Red);
    assert_eq!(red.convert_to_length(&style, None, 1.0), None);
}

#[test]
#[should_panic(expected = "relative lengths")]
fn test_relative_length_has_no_value() {
    let _ = PrimitiveValue::from_length(Length::Relative(2.0));
}

#[test]
fn test_undefined_length_reads_as_none() {
    assert_eq!(PrimitiveValue::from_length(Length::Undefined).css_text(), "none");
}

// Value cache

#[test]
fn test_small_integral_values_are_shared() {
    let mut cache = ValueCache::new();
    let first: Value = cache.pixels(5.0).into();
    let second: Value = cache.pixels(5.0).into();
    assert!(first.ptr_eq(&second));
    assert_eq!(first.css_text(), "5px");

    let fractional: Value = cache.pixels(5.5).into();
    let again: Value = cache.pixels(5.5).into();
    assert!(!fractional.ptr_eq(&again));
    assert_eq!(fractional.css_text(), "5.5px");
}

#[test]
fn test_units_do_not_share_slots() {
    let mut cache = ValueCache::new();
    let pixels = cache.pixels(3.0);
    let number = cache.number(3.0);
    assert!(!Rc::ptr_eq(&pixels, &number));
    assert_eq!(number.css_text(), "3");
}

#[test]
fn test_out_of_range_numbers_are_fresh() {
    let mut cache = ValueCache::new();
    assert!(!Rc::ptr_eq(&cache.pixels(-1.0), &cache.pixels(-1.0)));
    assert!(!Rc::ptr_eq(&cache.pixels(257.0), &cache.pixels(257.0)));
    assert!(Rc::ptr_eq(&cache.pixels(256.0), &cache.pixels(256.0)));
}

#[test]
fn test_identifiers_are_shared() {
    let mut cache = ValueCache::new();
    assert!(Rc::ptr_eq(&cache.identifier(Keyword::Auto), &cache.identifier(Keyword::Auto)));
    assert_eq!(cache.identifier(Keyword::None).css_text(), "none");
}

#[test]
fn test_pinned_colors_never_enter_the_map() {
    let mut cache = ValueCache::new();
    let black = cache.color_value(Rgba32::BLACK);
    assert!(Rc::ptr_eq(&black, &cache.color_value(Rgba32::BLACK)));
    let _ = cache.color_value(Rgba32::WHITE);
    let _ = cache.color_value(Rgba32::TRANSPARENT);
    assert_eq!(cache.color_cache_len(), 0);
}

#[test]
fn test_color_cache_clears_when_full() {
    let mut cache = ValueCache::new();
    let first = cache.color_value(Rgba32::rgb(1, 0, 0));
    assert!(Rc::ptr_eq(&first, &cache.color_value(Rgba32::rgb(1, 0, 0))));

    let mut filled = 1;
    for r in 0..=u8::MAX {
        for g in 1..=u8::MAX {
            if filled == MAXIMUM_COLOR_CACHE_SIZE {
                break;
            }
            let _ = cache.color_value(Rgba32::rgb(r, g, 0));
            filled += 1;
        }
    }
    assert_eq!(cache.color_cache_len(), MAXIMUM_COLOR_CACHE_SIZE);

    // One past the limit still fits.
    let _ = cache.color_value(Rgba32::rgb(9, 9, 9));
    assert_eq!(cache.color_cache_len(), MAXIMUM_COLOR_CACHE_SIZE + 1);
    assert!(Rc::ptr_eq(&first, &cache.color_value(Rgba32::rgb(1, 0, 0))));

    let _ = cache.color_value(Rgba32::rgb(9, 9, 8));
    assert_eq!(cache.color_cache_len(), 1);
    assert!(!Rc::ptr_eq(&first, &cache.color_value(Rgba32::rgb(1, 0, 0))));
}

// Serialization

#[test]
fn test_primitive_serialization() {
    assert_eq!(PrimitiveValue::number(12.0, UnitKind::Px).css_text(), "12px");
    assert_eq!(PrimitiveValue::number(50.0, UnitKind::Percentage).css_text(), "50%");
    assert_eq!(PrimitiveValue::number(0.5, UnitKind::S).css_text(), "0.5s");
    assert_eq!(PrimitiveValue::number(1.5, UnitKind::Number).css_text(), "1.5");
    assert_eq!(PrimitiveValue::color(Rgba32::rgb(255, 0, 0)).css_text(), "rgb(255, 0, 0)");
    assert_eq!(
        PrimitiveValue::color(Rgba32::rgba(255, 0, 0, 128)).css_text(),
        "rgba(255, 0, 0, 0.50)"
    );
    assert_eq!(PrimitiveValue::string("a.png", UnitKind::Uri).css_text(), "url(a.png)");
    assert_eq!(PrimitiveValue::string("title", UnitKind::Attr).css_text(), "attr(title)");
    assert_eq!(PrimitiveValue::string("Times New Roman", UnitKind::String).css_text(), "'Times New Roman'");
}

#[test]
fn test_counter_serialization_omits_decimal() {
    let plain = PrimitiveValue::counter(Counter {
        identifier: "item".into(),
        list_style: Some(Keyword::Decimal),
        separator: String::new(),
    });
    assert_eq!(plain.css_text(), "counter(item)");

    let nested = PrimitiveValue::counter(Counter {
        identifier: "item".into(),
        list_style: Some(Keyword::UpperRoman),
        separator: ".".into(),
    });
    assert_eq!(nested.css_text(), "counters(item, '.', upper-roman)");
}

#[test]
fn test_rect_serialization() {
    let rect = PrimitiveValue::rect(Rect::new(px(1.0), px(2.0), px(3.0), px(4.0)));
    assert_eq!(rect.css_text(), "rect(1px 2px 3px 4px)");
}

#[test]
fn test_list_separators() {
    let items = || vec![Value::from(px(1.0)), Value::from(px(2.0))];
    assert_eq!(ValueList::space(items()).css_text(), "1px 2px");
    assert_eq!(ValueList::comma(items()).css_text(), "1px, 2px");
    assert_eq!(ValueList::slash(items()).css_text(), "1px / 2px");
}

#[test]
fn test_composite_serialization() {
    let shadow = ShadowValue {
        x: Some(px(1.0)),
        y: Some(px(2.0)),
        blur: Some(px(3.0)),
        color: Some(Rc::new(PrimitiveValue::color(Rgba32::BLACK))),
        ..ShadowValue::default()
    };
    assert_eq!(shadow.css_text(), "rgb(0, 0, 0) 1px 2px 3px");

    let reflect = ReflectValue::new(Keyword::Below, px(4.0), None);
    assert_eq!(reflect.css_text(), "below 4px none");

    assert_eq!(TimingFunctionValue(TimingFunction::Linear).css_text(), "linear");
    assert_eq!(
        TimingFunctionValue(TimingFunction::default()).css_text(),
        "cubic-bezier(0.25, 0.1, 0.25, 1)"
    );
    assert_eq!(
        TimingFunctionValue(TimingFunction::Steps { steps: 3, start: true }).css_text(),
        "steps(3, start)"
    );

    let number = |v| Rc::new(PrimitiveValue::number(v, UnitKind::Number));
    let matrix = TransformValue::new(
        TransformFunction::Matrix,
        vec![number(1.0), number(0.0), number(0.0), number(1.0), number(10.0), number(20.0)],
    );
    assert_eq!(matrix.css_text(), "matrix(1, 0, 0, 1, 10, 20)");
}

#[test]
fn test_text_is_stable_across_clones() {
    let value: Value = PrimitiveValue::number(7.0, UnitKind::Px).into();
    let copy = value.clone();
    assert!(value.ptr_eq(&copy));
    assert_eq!(copy.to_string(), "7px");
}
