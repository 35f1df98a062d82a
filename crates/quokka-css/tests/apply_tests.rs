//! Integration tests for the property apply table.

use std::sync::Arc;

use strum::IntoEnumIterator;

use quokka_css::apply::{self, PropertyApplyTable, ResolverState, is_table_driven};
use quokka_css::keyword::Keyword;
use quokka_css::property::PropertyId;
use quokka_css::style::Style;
use quokka_css::style::color::{Color, Rgba32};
use quokka_css::style::keywords::{Display, FillRepeat, FontWeight, Overflow};
use quokka_css::style::length::Length;
use quokka_css::style::writing_mode::TextDirection;
use quokka_css::values::{PrimitiveValue, UnitKind, Value, ValueList};

fn ident(keyword: Keyword) -> Value {
    Value::ident(keyword)
}

fn px(value: f64) -> Value {
    PrimitiveValue::number(value, UnitKind::Px).into()
}

fn apply_one(style: &mut Style, parent: &Style, id: PropertyId, value: &Value) {
    let mut state = ResolverState::new(style, parent);
    apply::shared().apply(id, &mut state, value);
}

#[test]
fn test_every_table_driven_property_has_a_handler() {
    let table = apply::shared();
    for id in PropertyId::iter() {
        assert_eq!(
            table.has_handler(id),
            is_table_driven(id),
            "handler registration mismatch for '{id}'"
        );
    }
}

#[test]
fn test_svg_properties_are_not_table_driven() {
    assert!(!is_table_driven(PropertyId::Fill));
    assert!(!is_table_driven(PropertyId::StrokeWidth));
    assert!(!apply::shared().has_handler(PropertyId::Fill));
}

#[test]
fn test_aliases_share_the_strategy_instance() {
    let table = apply::shared();
    let pairs = [
        (PropertyId::WebkitBackgroundClip, PropertyId::BackgroundClip),
        (PropertyId::WebkitBackgroundOrigin, PropertyId::BackgroundOrigin),
        (PropertyId::WebkitBackgroundSize, PropertyId::BackgroundSize),
        (PropertyId::WebkitBorderRadius, PropertyId::BorderRadius),
    ];
    for (alias, target) in pairs {
        let (Some(a), Some(b)) = (table.handler(alias), table.handler(target)) else {
            panic!("missing handler for '{alias}' or '{target}'");
        };
        assert!(Arc::ptr_eq(a, b), "'{alias}' should share '{target}'");
    }
}

#[test]
fn test_empty_table_has_nothing() {
    let table = PropertyApplyTable::empty();
    assert!(!table.has_handler(PropertyId::Color));
}

#[test]
#[should_panic(expected = "duplicate apply handler")]
fn test_registering_twice_panics() {
    let mut table = PropertyApplyTable::new();
    table.set_alias(PropertyId::BackgroundClip, PropertyId::BackgroundOrigin);
}

#[test]
fn test_keyword_apply_inherit_and_initial() {
    let mut parent = Style::new();
    parent.display = Display::Block;

    let mut style = Style::new();
    apply_one(&mut style, &parent, PropertyId::Display, &ident(Keyword::Inherit));
    assert_eq!(style.display, Display::Block);

    apply_one(&mut style, &parent, PropertyId::Display, &ident(Keyword::Initial));
    assert_eq!(style.display, Display::Inline);

    apply_one(&mut style, &parent, PropertyId::Display, &ident(Keyword::Block));
    assert_eq!(style.display, Display::Block);
}

#[test]
fn test_wrong_kind_leaves_style_untouched() {
    let parent = Style::new();
    let mut style = Style::new();
    style.display = Display::Block;
    apply_one(&mut style, &parent, PropertyId::Display, &px(4.0));
    assert_eq!(style.display, Display::Block);
}

#[test]
fn test_border_width_keywords() {
    let parent = Style::new();
    let mut style = Style::new();
    apply_one(&mut style, &parent, PropertyId::BorderTopWidth, &ident(Keyword::Thin));
    assert_eq!(style.border_top.width, 1);
    apply_one(&mut style, &parent, PropertyId::BorderTopWidth, &ident(Keyword::Thick));
    assert_eq!(style.border_top.width, 5);
    apply_one(&mut style, &parent, PropertyId::BorderTopWidth, &px(7.0));
    assert_eq!(style.border_top.width, 7);
}

#[test]
fn test_border_width_survives_zooming_out() {
    let parent = Style::new();
    let mut style = Style::new();
    style.effective_zoom = 0.25;
    apply_one(&mut style, &parent, PropertyId::BorderTopWidth, &px(1.0));
    assert_eq!(style.border_top.width, 1);
}

#[test]
fn test_zooming_out_never_thickens_a_sub_pixel_border() {
    let parent = Style::new();
    let mut unzoomed = Style::new();
    apply_one(&mut unzoomed, &parent, PropertyId::BorderTopWidth, &px(0.5));
    assert_eq!(unzoomed.border_top.width, 0);

    let mut zoomed = Style::new();
    zoomed.effective_zoom = 0.5;
    apply_one(&mut zoomed, &parent, PropertyId::BorderTopWidth, &px(0.5));
    assert_eq!(zoomed.border_top.width, unzoomed.border_top.width);

    // 0.75px after zoom, but a full pixel before it.
    apply_one(&mut zoomed, &parent, PropertyId::BorderTopWidth, &px(1.5));
    assert_eq!(zoomed.border_top.width, 1);
}

#[test]
fn test_color_apply_writes_regular_and_visited_targets() {
    let parent = Style::new();
    let red: Value = PrimitiveValue::color(Rgba32::rgb(255, 0, 0)).into();

    let mut style = Style::new();
    apply_one(&mut style, &parent, PropertyId::BackgroundColor, &red);
    assert_eq!(style.background_color, Color::new(Rgba32::rgb(255, 0, 0)));
    assert_ne!(style.visited.background_color, style.background_color);

    let mut visited = Style::new();
    {
        let mut state = ResolverState::new(&mut visited, &parent).with_link_targets(false, true);
        apply::shared().apply(PropertyId::BackgroundColor, &mut state, &red);
    }
    assert_eq!(visited.visited.background_color, Color::new(Rgba32::rgb(255, 0, 0)));
    assert_ne!(visited.background_color, visited.visited.background_color);
}

#[test]
fn test_currentcolor_on_color_inherits() {
    let mut parent = Style::new();
    parent.color = Color::new(Rgba32::rgb(0, 0, 255));
    let mut style = Style::new();
    apply_one(&mut style, &parent, PropertyId::Color, &ident(Keyword::Currentcolor));
    assert_eq!(style.color, parent.color);
}

#[test]
fn test_invalid_parent_color_inherits_as_current_color() {
    let mut parent = Style::new();
    parent.color = Color::new(Rgba32::rgb(0, 128, 0));
    parent.border_left.color = Color::INVALID;
    let mut style = Style::new();
    apply_one(&mut style, &parent, PropertyId::BorderLeftColor, &ident(Keyword::Inherit));
    assert_eq!(style.border_left.color, parent.color);
}

#[test]
fn test_flow_relative_properties_follow_direction() {
    let parent = Style::new();
    let blue: Value = PrimitiveValue::color(Rgba32::rgb(0, 0, 255)).into();

    let mut ltr = Style::new();
    apply_one(&mut ltr, &parent, PropertyId::WebkitBorderStartColor, &blue);
    assert_eq!(ltr.border_left.color, Color::new(Rgba32::rgb(0, 0, 255)));
    assert_ne!(ltr.border_right.color, ltr.border_left.color);

    let mut rtl = Style::new();
    rtl.direction = TextDirection::Rtl;
    apply_one(&mut rtl, &parent, PropertyId::WebkitBorderStartColor, &blue);
    assert_eq!(rtl.border_right.color, Color::new(Rgba32::rgb(0, 0, 255)));

    let mut margins = Style::new();
    margins.direction = TextDirection::Rtl;
    apply_one(&mut margins, &parent, PropertyId::WebkitMarginStart, &px(12.0));
    assert_eq!(margins.margin_right, Length::Fixed(12.0));
    assert_eq!(margins.margin_left, Length::Fixed(0.0));
}

#[test]
fn test_overflow_forwards_to_both_axes() {
    let parent = Style::new();
    let mut style = Style::new();
    apply_one(&mut style, &parent, PropertyId::Overflow, &ident(Keyword::Scroll));
    assert_eq!(style.overflow_x, Overflow::Scroll);
    assert_eq!(style.overflow_y, Overflow::Scroll);
}

#[test]
#[should_panic(expected = "must be expanded first")]
fn test_unexpanded_shorthand_panics() {
    let parent = Style::new();
    let mut style = Style::new();
    apply_one(&mut style, &parent, PropertyId::Margin, &px(1.0));
}

#[test]
fn test_margin_shorthand_inherits_every_side() {
    let mut parent = Style::new();
    parent.margin_left = Length::Fixed(3.0);
    parent.margin_right = Length::Percent(10.0);
    let mut style = Style::new();
    apply_one(&mut style, &parent, PropertyId::Margin, &ident(Keyword::Inherit));
    assert_eq!(style.margin_left, Length::Fixed(3.0));
    assert_eq!(style.margin_right, Length::Percent(10.0));
}

#[test]
fn test_font_weight_relative_keywords() {
    let mut parent = Style::new();
    parent.font.weight = FontWeight::W400;
    let mut style = Style::new();
    apply_one(&mut style, &parent, PropertyId::FontWeight, &ident(Keyword::Bolder));
    assert_eq!(style.font.weight, FontWeight::W700);
    apply_one(&mut style, &parent, PropertyId::FontWeight, &ident(Keyword::Lighter));
    assert_eq!(style.font.weight, FontWeight::W100);
    apply_one(&mut style, &parent, PropertyId::FontWeight, &ident(Keyword::Bold));
    assert_eq!(style.font.weight, FontWeight::W700);
}

#[test]
fn test_margin_auto_and_percent() {
    let parent = Style::new();
    let mut style = Style::new();
    apply_one(&mut style, &parent, PropertyId::MarginLeft, &ident(Keyword::Auto));
    assert_eq!(style.margin_left, Length::Auto);
    let half: Value = PrimitiveValue::number(50.0, UnitKind::Percentage).into();
    apply_one(&mut style, &parent, PropertyId::MarginLeft, &half);
    assert_eq!(style.margin_left, Length::Percent(50.0));
}

#[test]
fn test_fill_layer_lists_assign_per_layer() {
    let parent = Style::new();
    let mut style = Style::new();
    let list = Value::list(ValueList::comma(vec![ident(Keyword::NoRepeat), ident(Keyword::Space)]));
    apply_one(&mut style, &parent, PropertyId::BackgroundRepeatX, &list);
    assert_eq!(style.background_layers.len(), 2);
    assert_eq!(style.background_layers.first().repeat_x(), FillRepeat::NoRepeat);
    assert_eq!(style.background_layers.get(1).map(|layer| layer.repeat_x()), Some(FillRepeat::Space));

    apply_one(&mut style, &parent, PropertyId::BackgroundRepeatX, &ident(Keyword::Round));
    assert_eq!(style.background_layers.first().repeat_x(), FillRepeat::Round);
    assert_eq!(
        style.background_layers.get(1).map(|layer| layer.is_repeat_x_set()),
        Some(false)
    );
}
