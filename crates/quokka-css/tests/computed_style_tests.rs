//! Integration tests for computed style declarations.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use quokka_common::warning::WarningSet;
use quokka_css::computed::{BoxSize, ComputedStyleDeclaration, EdgeSizes, LayoutBox, PseudoId, StyledNode};
use quokka_css::error::StyleError;
use quokka_css::property::PropertyId;
use quokka_css::style::Style;
use quokka_css::style::color::{Color, Rgba32};
use quokka_css::style::keywords::{BoxPack, FillRepeat, FontWeight, PageBreak};
use quokka_css::style::length::Length;
use quokka_css::style::transform::TransformOperation;
use quokka_css::style::writing_mode::TextDirection;
use quokka_css::values::ValueCache;

/// A node with a fixed style and optional layout.
struct TestNode {
    style: Option<Rc<Style>>,
    before: Option<Rc<Style>>,
    layout: Option<LayoutBox>,
    cache: RefCell<ValueCache>,
    layout_updates: Cell<usize>,
}

impl TestNode {
    fn new(style: Style) -> Rc<Self> {
        Rc::new(Self {
            style: Some(Rc::new(style)),
            before: None,
            layout: None,
            cache: RefCell::new(ValueCache::new()),
            layout_updates: Cell::new(0),
        })
    }

    fn with_layout(style: Style, layout: LayoutBox) -> Rc<Self> {
        Rc::new(Self {
            style: Some(Rc::new(style)),
            before: None,
            layout: Some(layout),
            cache: RefCell::new(ValueCache::new()),
            layout_updates: Cell::new(0),
        })
    }

    fn detached() -> Rc<Self> {
        Rc::new(Self {
            style: None,
            before: None,
            layout: None,
            cache: RefCell::new(ValueCache::new()),
            layout_updates: Cell::new(0),
        })
    }
}

impl StyledNode for TestNode {
    fn computed_style(&self, pseudo: PseudoId) -> Option<Rc<Style>> {
        match pseudo {
            PseudoId::None => self.style.clone(),
            PseudoId::Before => self.before.clone(),
            _ => None,
        }
    }

    fn update_layout(&self) {
        self.layout_updates.set(self.layout_updates.get() + 1);
    }

    fn layout_box(&self) -> Option<LayoutBox> {
        self.layout
    }

    fn value_cache(&self) -> &RefCell<ValueCache> {
        &self.cache
    }
}

fn declaration(node: &Rc<TestNode>) -> ComputedStyleDeclaration<TestNode> {
    ComputedStyleDeclaration::new(Rc::clone(node), "")
}

fn text(style: Style, id: PropertyId) -> String {
    declaration(&TestNode::new(style)).text_for_property(id)
}

fn square_layout(width: i32, height: i32) -> LayoutBox {
    LayoutBox {
        content_box: BoxSize { width, height },
        border_box: BoxSize { width, height },
        padding: EdgeSizes::default(),
    }
}

#[test]
fn test_reading_updates_layout() {
    let node = TestNode::new(Style::new());
    let computed = declaration(&node);
    let _ = computed.value_for_property(PropertyId::Display);
    assert_eq!(node.layout_updates.get(), 1);
    let _ = computed.value_for_property_with(PropertyId::Display, false);
    assert_eq!(node.layout_updates.get(), 1);
}

#[test]
fn test_keywords_and_colors() {
    let mut style = Style::new();
    style.color = Color::new(Rgba32::rgb(255, 0, 0));
    assert_eq!(text(style.clone(), PropertyId::Color), "rgb(255, 0, 0)");
    assert_eq!(text(style, PropertyId::Display), "inline");
}

#[test]
fn test_font_weight_uses_named_forms() {
    let mut style = Style::new();
    style.font.weight = FontWeight::W700;
    assert_eq!(text(style.clone(), PropertyId::FontWeight), "bold");
    style.font.weight = FontWeight::W400;
    assert_eq!(text(style.clone(), PropertyId::FontWeight), "normal");
    style.font.weight = FontWeight::W300;
    assert_eq!(text(style, PropertyId::FontWeight), "300");
}

#[test]
fn test_zoom_compensation_rounds_outward() {
    let mut style = Style::new();
    style.effective_zoom = 2.0;
    style.width = Length::Fixed(100.0);
    assert_eq!(text(style.clone(), PropertyId::Width), "50px");

    let node = TestNode::with_layout(style, square_layout(101, 40));
    assert_eq!(declaration(&node).text_for_property(PropertyId::Width), "51px");
    assert_eq!(declaration(&node).text_for_property(PropertyId::Height), "20px");

    let mut zoomed_out = Style::new();
    zoomed_out.effective_zoom = 0.5;
    zoomed_out.border_top.width = 10;
    assert_eq!(text(zoomed_out, PropertyId::BorderTopWidth), "20px");
}

#[test]
fn test_width_without_layout_falls_back_to_style() {
    let mut style = Style::new();
    style.width = Length::Percent(50.0);
    assert_eq!(text(style.clone(), PropertyId::Width), "50%");
    style.width = Length::Auto;
    assert_eq!(text(style, PropertyId::Width), "auto");
}

#[test]
fn test_margins() {
    let mut style = Style::new();
    style.margin_left = Length::Auto;
    style.margin_top = Length::Percent(5.0);
    style.margin_right = Length::Fixed(8.0);
    assert_eq!(text(style.clone(), PropertyId::MarginLeft), "0px");
    assert_eq!(text(style.clone(), PropertyId::MarginTop), "5%");
    assert_eq!(text(style, PropertyId::MarginRight), "8px");
}

#[test]
fn test_flow_relative_properties_map_through_direction() {
    let mut style = Style::new();
    style.margin_left = Length::Fixed(1.0);
    style.margin_right = Length::Fixed(2.0);
    assert_eq!(text(style.clone(), PropertyId::WebkitMarginStart), "1px");
    style.direction = TextDirection::Rtl;
    assert_eq!(text(style, PropertyId::WebkitMarginStart), "2px");
}

#[test]
fn test_line_height() {
    let mut style = Style::new();
    assert_eq!(text(style.clone(), PropertyId::LineHeight), "normal");
    style.font.specified_size = 20.0;
    style.line_height = Length::Percent(150.0);
    assert_eq!(text(style.clone(), PropertyId::LineHeight), "30px");
    style.line_height = Length::Fixed(18.0);
    assert_eq!(text(style, PropertyId::LineHeight), "18px");
}

#[test]
fn test_font_size_and_keyword_preference() {
    let mut style = Style::new();
    style.font.computed_size = 16.4;
    assert_eq!(text(style.clone(), PropertyId::FontSize), "16px");

    style.font.keyword_size = 4;
    let node = TestNode::new(style);
    let keyword = declaration(&node).font_size_value_preferring_keyword();
    assert_eq!(keyword.map(|value| value.css_text()).as_deref(), Some("medium"));
}

#[test]
fn test_fill_repeat_collapses() {
    let mut style = Style::new();
    assert_eq!(text(style.clone(), PropertyId::BackgroundRepeat), "repeat");

    style.background_layers.ensure(0).set_repeat_y(FillRepeat::NoRepeat);
    assert_eq!(text(style.clone(), PropertyId::BackgroundRepeat), "repeat-x");

    style.background_layers.ensure(0).set_repeat_x(FillRepeat::Space);
    style.background_layers.ensure(0).set_repeat_y(FillRepeat::Round);
    assert_eq!(text(style.clone(), PropertyId::BackgroundRepeat), "space round");

    style.background_layers.ensure(1).set_repeat_x(FillRepeat::NoRepeat);
    style.background_layers.ensure(1).set_repeat_y(FillRepeat::NoRepeat);
    assert_eq!(text(style, PropertyId::BackgroundRepeat), "space round, no-repeat");
}

#[test]
fn test_animation_defaults() {
    let style = Style::new();
    assert_eq!(text(style.clone(), PropertyId::WebkitAnimationDuration), "0s");
    assert_eq!(
        text(style, PropertyId::WebkitAnimationTimingFunction),
        "cubic-bezier(0.25, 0.1, 0.25, 1)"
    );
}

#[test]
fn test_transform_needs_a_box() {
    let mut style = Style::new();
    assert_eq!(text(style.clone(), PropertyId::WebkitTransform), "none");

    style.transform = vec![TransformOperation::Matrix([1.0, 0.0, 0.0, 1.0, 10.0, 20.0])];
    assert_eq!(text(style.clone(), PropertyId::WebkitTransform), "none");

    let node = TestNode::with_layout(style.clone(), square_layout(100, 100));
    assert_eq!(
        declaration(&node).text_for_property(PropertyId::WebkitTransform),
        "matrix(1, 0, 0, 1, 10, 20)"
    );

    style.effective_zoom = 2.0;
    let zoomed = TestNode::with_layout(style, square_layout(100, 100));
    assert_eq!(
        declaration(&zoomed).text_for_property(PropertyId::WebkitTransform),
        "matrix(1, 0, 0, 1, 5, 10)"
    );
}

#[test]
fn test_percent_translation_resolves_against_the_box() {
    let mut style = Style::new();
    style.transform = vec![TransformOperation::Translate {
        x: Length::Percent(50.0),
        y: Length::Fixed(0.0),
        z: 0.0,
    }];
    let node = TestNode::with_layout(style, square_layout(200, 100));
    assert_eq!(
        declaration(&node).text_for_property(PropertyId::WebkitTransform),
        "matrix(1, 0, 0, 1, 100, 0)"
    );
}

#[test]
fn test_unimplemented_properties_log_once() {
    let logged = Arc::new(WarningSet::new());
    let node = TestNode::new(Style::new());
    let computed = declaration(&node).with_warning_set(Arc::clone(&logged));

    assert!(computed.value_for_property(PropertyId::Font).is_none());
    assert!(logged.contains(&PropertyId::Font));
    assert_eq!(logged.len(), 1);

    assert!(computed.value_for_property(PropertyId::Font).is_none());
    assert_eq!(logged.len(), 1);
    assert_eq!(computed.text_for_property(PropertyId::Font), "");
}

#[test]
fn test_unrepresentable_keywords_log_as_unimplemented() {
    let logged = Arc::new(WarningSet::new());
    let mut style = Style::new();
    style.page_break_inside = PageBreak::Always;
    style.box_pack = BoxPack::Justify;
    let node = TestNode::new(style);
    let computed = declaration(&node).with_warning_set(Arc::clone(&logged));

    assert!(computed.value_for_property(PropertyId::PageBreakInside).is_none());
    assert!(computed.value_for_property(PropertyId::WebkitBoxPack).is_none());
    assert!(logged.contains(&PropertyId::PageBreakInside));
    assert!(logged.contains(&PropertyId::WebkitBoxPack));
    assert_eq!(logged.len(), 2);
}

#[test]
fn test_declaration_is_read_only() {
    let node = TestNode::new(Style::new());
    let computed = declaration(&node);
    assert_eq!(computed.set_css_text("color: red"), Err(StyleError::NoModificationAllowed));
    assert_eq!(
        computed.set_property("color", "red", ""),
        Err(StyleError::NoModificationAllowed)
    );
    let error = computed.remove_property("color").unwrap_err();
    assert_eq!(error.code(), 7);
    assert_eq!(computed.property_priority("color"), "");
    assert!(!computed.is_property_implicit("color"));
}

#[test]
fn test_length_and_item() {
    let node = TestNode::new(Style::new());
    let computed = declaration(&node);
    assert!(computed.length() > 0);
    assert_eq!(computed.item(0), Some("background-attachment"));
    assert_eq!(computed.item(computed.length()), None);

    let detached = declaration(&TestNode::detached());
    assert_eq!(detached.length(), 0);
    assert_eq!(detached.item(0), None);
    assert!(detached.value_for_property(PropertyId::Color).is_none());
}

#[test]
fn test_pseudo_element_styles() {
    let mut before = Style::new();
    before.color = Color::new(Rgba32::rgb(0, 0, 255));
    let node = Rc::new(TestNode {
        style: Some(Rc::new(Style::new())),
        before: Some(Rc::new(before)),
        layout: None,
        cache: RefCell::new(ValueCache::new()),
        layout_updates: Cell::new(0),
    });
    let computed = ComputedStyleDeclaration::new(Rc::clone(&node), "::before");
    assert_eq!(computed.pseudo(), PseudoId::Before);
    assert_eq!(computed.text_for_property(PropertyId::Color), "rgb(0, 0, 255)");

    let after = ComputedStyleDeclaration::new(node, ":after");
    assert_eq!(after.length(), 0);
}

#[test]
fn test_property_lookup_by_name() {
    let node = TestNode::new(Style::new());
    let computed = declaration(&node);
    assert_eq!(computed.property_value_by_name("display"), "inline");
    assert_eq!(computed.property_value_by_name("not-a-property"), "");
}

#[test]
fn test_snapshot_and_css_text() {
    let node = TestNode::new(Style::new());
    let computed = declaration(&node);
    let snapshot = computed.snapshot();
    assert!(snapshot.iter().any(|(id, value)| *id == PropertyId::Display && value.css_text() == "inline"));
    assert!(computed.css_text().contains("display: inline;"));
}

#[test]
fn test_repeated_reads_share_cached_values() {
    let node = TestNode::new(Style::new());
    let computed = declaration(&node);
    let (Some(first), Some(second)) = (
        computed.value_for_property(PropertyId::Display),
        computed.value_for_property(PropertyId::Display),
    ) else {
        panic!("display has a computed value");
    };
    assert!(first.ptr_eq(&second));
}
