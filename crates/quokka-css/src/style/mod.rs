//! The resolved style record.
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//!
//! "The computed value is the result of resolving the specified value as
//! defined in the 'Computed Value' line of the property definition table,
//! generally absolutizing it in preparation for inheritance."
//!
//! [`Style`] is the fast internal form layout reads. It stores typed values
//! (enums, pixel counts, [`Length`]s) rather than CSS values; the apply table
//! writes it and the computed-style declaration turns it back into values.

pub mod animation;
pub mod color;
pub mod content;
pub mod decoration;
pub mod fill_layer;
pub mod font;
pub mod image;
pub mod keywords;
pub mod length;
pub mod svg;
pub mod transform;
pub mod writing_mode;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::property::PropertyId;

use animation::Animation;
use color::{Color, Rgba32};
use content::{ContentData, CounterDirective, LineBoxContain, TextEmphasisFill, TextEmphasisMark};
use decoration::{NinePieceImage, ShadowData, StyleDashboardRegion, StyleReflection, TextDecoration};
use fill_layer::{FillLayerKind, FillLayers};
use font::FontDescription;
use image::StyleImage;
use keywords::{
    BorderCollapse, BorderFit, BorderStyle, BoxAlign, BoxDirection, BoxLines, BoxOrient, BoxPack,
    BoxSizing, CaptionSide, Clear, ColorSpace, ColumnSpan, ControlPart, Cursor, Display, EmptyCells,
    Float, Hyphens, LineBreak, LineClamp, ListStylePosition, ListStyleType, MarginCollapse,
    MarqueeBehavior, MarqueeDirection, MatchNearestMailBlockquoteColor, NbspMode, Order, Overflow,
    PageBreak, PointerEvents, Position, Resize, Speak, TableLayout, TextAlign, TextCombine,
    TextEmphasisPosition, TextOverflow, TextSecurity, TextSizeAdjust, TextTransform,
    TransformStyle3d, UnicodeBidi, UserDrag, UserModify, UserSelect, VerticalAlign, Visibility,
    WhiteSpace, WordBreak, WordWrap,
};
use length::{Length, LengthBox, LengthSize};
use svg::SvgStyle;
use transform::{TransformOperation, TransformationMatrix};
use writing_mode::{TextDirection, WritingMode};

/// `line-height: normal`, stored as a negative percentage.
pub const LINE_HEIGHT_NORMAL: Length = Length::Percent(-100.0);

/// Link state of the element a style belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum InsideLink {
    /// Not inside a link.
    #[default]
    NotInside,
    /// Inside an unvisited link.
    InsideUnvisited,
    /// Inside a visited link.
    InsideVisited,
}

/// The colors a `:visited` rule may change. Invalid means "not set".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VisitedLinkColors {
    /// `color`
    pub color: Color,
    /// `background-color`
    pub background_color: Color,
    /// `border-top-color`
    pub border_top_color: Color,
    /// `border-right-color`
    pub border_right_color: Color,
    /// `border-bottom-color`
    pub border_bottom_color: Color,
    /// `border-left-color`
    pub border_left_color: Color,
    /// `outline-color`
    pub outline_color: Color,
    /// `-webkit-column-rule-color`
    pub column_rule_color: Color,
    /// `-webkit-text-emphasis-color`
    pub text_emphasis_color: Color,
    /// `-webkit-text-fill-color`
    pub text_fill_color: Color,
    /// `-webkit-text-stroke-color`
    pub text_stroke_color: Color,
}

/// One border edge, outline, or column rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BorderEdge {
    /// Width in pixels.
    pub width: u16,
    /// Line style.
    pub style: BorderStyle,
    /// Color; invalid means "use `color`".
    pub color: Color,
}

impl Default for BorderEdge {
    fn default() -> Self {
        Self {
            width: 3,
            style: BorderStyle::None,
            color: Color::INVALID,
        }
    }
}

/// A resolved element style.
///
/// Fields are public; the apply table and layout read and write them
/// directly. [`Style::default`] holds every property's initial value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    // Color and links
    /// [§ 3.1 'color'](https://www.w3.org/TR/css-color-4/#the-color-property)
    pub color: Color,
    /// Colors from `:visited` rules.
    pub visited: VisitedLinkColors,
    /// Link state used by [`Style::visited_dependent_color`].
    pub inside_link: InsideLink,

    // Zoom
    /// The `zoom` property as specified.
    pub zoom: f32,
    /// Product of `zoom` along the ancestor chain.
    pub effective_zoom: f32,

    // Fonts and text
    /// The resolved font.
    pub font: FontDescription,
    /// `direction`
    pub direction: TextDirection,
    /// `-webkit-writing-mode`
    pub writing_mode: WritingMode,
    /// `letter-spacing` in pixels; 0 is `normal`.
    pub letter_spacing: i32,
    /// `word-spacing` in pixels.
    pub word_spacing: i32,
    /// `line-height`; [`LINE_HEIGHT_NORMAL`] for `normal`.
    pub line_height: Length,
    /// `text-indent`
    pub text_indent: Length,
    /// `text-align`
    pub text_align: TextAlign,
    /// `text-transform`
    pub text_transform: TextTransform,
    /// `text-decoration`
    pub text_decoration: TextDecoration,
    /// Decorations propagated from ancestors plus this element's own.
    pub text_decorations_in_effect: TextDecoration,
    /// `text-overflow`
    pub text_overflow: TextOverflow,
    /// `text-shadow`, newest entry first.
    pub text_shadow: Vec<ShadowData>,
    /// `white-space`
    pub white_space: WhiteSpace,
    /// `word-break`
    pub word_break: WordBreak,
    /// `word-wrap`
    pub word_wrap: WordWrap,
    /// `vertical-align` keyword.
    pub vertical_align: VerticalAlign,
    /// `vertical-align` length, when one was given instead of a keyword.
    pub vertical_align_length: Option<Length>,
    /// `unicode-bidi`
    pub unicode_bidi: UnicodeBidi,
    /// `speak`
    pub speak: Speak,
    /// `-webkit-text-fill-color`
    pub text_fill_color: Color,
    /// `-webkit-text-stroke-color`
    pub text_stroke_color: Color,
    /// `-webkit-text-stroke-width`
    pub text_stroke_width: f32,
    /// `-webkit-text-emphasis-color`
    pub text_emphasis_color: Color,
    /// `-webkit-text-emphasis-style` fill.
    pub text_emphasis_fill: TextEmphasisFill,
    /// `-webkit-text-emphasis-style` mark.
    pub text_emphasis_mark: TextEmphasisMark,
    /// Custom emphasis string, used with [`TextEmphasisMark::Custom`].
    pub text_emphasis_custom_mark: String,
    /// `-webkit-text-emphasis-position`
    pub text_emphasis_position: TextEmphasisPosition,
    /// `-webkit-text-combine`
    pub text_combine: TextCombine,
    /// `-webkit-text-security`
    pub text_security: TextSecurity,
    /// `-webkit-text-size-adjust`
    pub text_size_adjust: TextSizeAdjust,
    /// `-webkit-highlight`; `None` for `none`.
    pub highlight: Option<String>,
    /// `-webkit-hyphens`
    pub hyphens: Hyphens,
    /// `-webkit-hyphenate-character`; `None` for `auto`.
    pub hyphenation_string: Option<String>,
    /// `-webkit-hyphenate-limit-after`; negative for `auto`.
    pub hyphenation_limit_after: i16,
    /// `-webkit-hyphenate-limit-before`; negative for `auto`.
    pub hyphenation_limit_before: i16,
    /// `-webkit-locale`; `None` for `auto`.
    pub locale: Option<String>,
    /// `-webkit-line-break`
    pub line_break: LineBreak,
    /// `-webkit-line-clamp`
    pub line_clamp: LineClamp,
    /// `-webkit-line-box-contain`
    pub line_box_contain: LineBoxContain,
    /// `-webkit-nbsp-mode`
    pub nbsp_mode: NbspMode,
    /// `-webkit-rtl-ordering`
    pub rtl_ordering: Order,
    /// `-webkit-match-nearest-mail-blockquote-color`
    pub match_nearest_mail_blockquote_color: MatchNearestMailBlockquoteColor,

    // Box
    /// `display`
    pub display: Display,
    /// `position`
    pub position: Position,
    /// `float`
    pub float: Float,
    /// `clear`
    pub clear: Clear,
    /// `visibility`
    pub visibility: Visibility,
    /// `overflow-x`
    pub overflow_x: Overflow,
    /// `overflow-y`
    pub overflow_y: Overflow,
    /// `box-sizing`
    pub box_sizing: BoxSizing,
    /// `width`
    pub width: Length,
    /// `height`
    pub height: Length,
    /// `min-width`
    pub min_width: Length,
    /// `min-height`
    pub min_height: Length,
    /// `max-width`; [`Length::Undefined`] for `none`.
    pub max_width: Length,
    /// `max-height`; [`Length::Undefined`] for `none`.
    pub max_height: Length,
    /// `top`
    pub top: Length,
    /// `right`
    pub right: Length,
    /// `bottom`
    pub bottom: Length,
    /// `left`
    pub left: Length,
    /// `margin-top`
    pub margin_top: Length,
    /// `margin-right`
    pub margin_right: Length,
    /// `margin-bottom`
    pub margin_bottom: Length,
    /// `margin-left`
    pub margin_left: Length,
    /// `padding-top`
    pub padding_top: Length,
    /// `padding-right`
    pub padding_right: Length,
    /// `padding-bottom`
    pub padding_bottom: Length,
    /// `padding-left`
    pub padding_left: Length,
    /// `-webkit-margin-before-collapse`
    pub margin_before_collapse: MarginCollapse,
    /// `-webkit-margin-after-collapse`
    pub margin_after_collapse: MarginCollapse,
    /// `z-index`; `None` for `auto`.
    pub z_index: Option<i32>,
    /// `clip`; `None` for `auto`.
    pub clip: Option<LengthBox>,
    /// `opacity`
    pub opacity: f32,
    /// `resize`
    pub resize: Resize,
    /// `pointer-events`
    pub pointer_events: PointerEvents,
    /// `cursor` keyword.
    pub cursor: Cursor,
    /// `cursor` images, tried before the keyword.
    pub cursor_images: Vec<StyleImage>,

    // Borders and outline
    /// `border-top-*`
    pub border_top: BorderEdge,
    /// `border-right-*`
    pub border_right: BorderEdge,
    /// `border-bottom-*`
    pub border_bottom: BorderEdge,
    /// `border-left-*`
    pub border_left: BorderEdge,
    /// `border-top-left-radius`
    pub border_top_left_radius: LengthSize,
    /// `border-top-right-radius`
    pub border_top_right_radius: LengthSize,
    /// `border-bottom-left-radius`
    pub border_bottom_left_radius: LengthSize,
    /// `border-bottom-right-radius`
    pub border_bottom_right_radius: LengthSize,
    /// `border-collapse`
    pub border_collapse: BorderCollapse,
    /// `-webkit-border-horizontal-spacing` in pixels.
    pub horizontal_border_spacing: i16,
    /// `-webkit-border-vertical-spacing` in pixels.
    pub vertical_border_spacing: i16,
    /// `-webkit-border-image`
    pub border_image: NinePieceImage,
    /// `-webkit-border-fit`
    pub border_fit: BorderFit,
    /// `outline-*`
    pub outline: BorderEdge,
    /// `outline-style: auto`
    pub outline_style_is_auto: bool,
    /// `outline-offset` in pixels.
    pub outline_offset: i32,
    /// `box-shadow`, newest entry first.
    pub box_shadow: Vec<ShadowData>,

    // Backgrounds and masks
    /// `background-color`
    pub background_color: Color,
    /// `background-*` layers.
    pub background_layers: FillLayers,
    /// `-webkit-mask-*` layers.
    pub mask_layers: FillLayers,
    /// `-webkit-mask-box-image`
    pub mask_box_image: NinePieceImage,
    /// `-webkit-box-reflect`
    pub box_reflect: Option<StyleReflection>,

    // Tables and lists
    /// `caption-side`
    pub caption_side: CaptionSide,
    /// `empty-cells`
    pub empty_cells: EmptyCells,
    /// `table-layout`
    pub table_layout: TableLayout,
    /// `list-style-type`
    pub list_style_type: ListStyleType,
    /// `list-style-position`
    pub list_style_position: ListStylePosition,
    /// `list-style-image`
    pub list_style_image: Option<StyleImage>,

    // Paging and columns
    /// `page-break-before`
    pub page_break_before: PageBreak,
    /// `page-break-after`
    pub page_break_after: PageBreak,
    /// `page-break-inside`
    pub page_break_inside: PageBreak,
    /// `orphans`
    pub orphans: i16,
    /// `widows`
    pub widows: i16,
    /// `-webkit-column-count`; `None` for `auto`.
    pub column_count: Option<u16>,
    /// `-webkit-column-gap`; `None` for `normal`.
    pub column_gap: Option<f32>,
    /// `-webkit-column-width`; `None` for `auto`.
    pub column_width: Option<f32>,
    /// `-webkit-column-rule-*`
    pub column_rule: BorderEdge,
    /// `-webkit-column-span`
    pub column_span: ColumnSpan,
    /// `-webkit-column-break-before`
    pub column_break_before: PageBreak,
    /// `-webkit-column-break-after`
    pub column_break_after: PageBreak,
    /// `-webkit-column-break-inside`
    pub column_break_inside: PageBreak,

    // Flexible boxes
    /// `-webkit-box-align`
    pub box_align: BoxAlign,
    /// `-webkit-box-direction`
    pub box_direction: BoxDirection,
    /// `-webkit-box-flex`
    pub box_flex: f32,
    /// `-webkit-box-flex-group`
    pub box_flex_group: u32,
    /// `-webkit-box-lines`
    pub box_lines: BoxLines,
    /// `-webkit-box-ordinal-group`
    pub box_ordinal_group: u32,
    /// `-webkit-box-orient`
    pub box_orient: BoxOrient,
    /// `-webkit-box-pack`
    pub box_pack: BoxPack,

    // Transforms and animation
    /// `-webkit-transform`
    pub transform: Vec<TransformOperation>,
    /// `-webkit-transform-origin` x.
    pub transform_origin_x: Length,
    /// `-webkit-transform-origin` y.
    pub transform_origin_y: Length,
    /// `-webkit-transform-origin` z in pixels.
    pub transform_origin_z: f32,
    /// `-webkit-transform-style`
    pub transform_style_3d: TransformStyle3d,
    /// `-webkit-perspective`; `None` for `none`.
    pub perspective: Option<f32>,
    /// `-webkit-perspective-origin` x.
    pub perspective_origin_x: Length,
    /// `-webkit-perspective-origin` y.
    pub perspective_origin_y: Length,
    /// `-webkit-backface-visibility`
    pub backface_visibility: Visibility,
    /// `-webkit-animation-*`; `None` when never configured.
    pub animations: Option<Vec<Animation>>,
    /// `-webkit-transition-*`; `None` when never configured.
    pub transitions: Option<Vec<Animation>>,

    // Marquee
    /// `-webkit-marquee-direction`
    pub marquee_direction: MarqueeDirection,
    /// `-webkit-marquee-increment`
    pub marquee_increment: Length,
    /// `-webkit-marquee-repetition`; negative for `infinite`.
    pub marquee_loop_count: i32,
    /// `-webkit-marquee-style`
    pub marquee_behavior: MarqueeBehavior,
    /// `-webkit-marquee-speed` in milliseconds.
    pub marquee_speed: i32,

    // Interaction and misc
    /// `-webkit-appearance`
    pub appearance: ControlPart,
    /// `-webkit-color-correction`
    pub color_space: ColorSpace,
    /// `-webkit-user-drag`
    pub user_drag: UserDrag,
    /// `-webkit-user-modify`
    pub user_modify: UserModify,
    /// `-webkit-user-select`
    pub user_select: UserSelect,
    /// `-webkit-dashboard-region`
    pub dashboard_regions: Vec<StyleDashboardRegion>,
    /// `content`
    pub content: Vec<ContentData>,
    /// `counter-increment` / `counter-reset`; `None` when neither is set.
    pub counter_directives: Option<BTreeMap<String, CounterDirective>>,

    /// SVG presentation properties.
    pub svg: SvgStyle,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            visited: VisitedLinkColors::default(),
            inside_link: InsideLink::default(),
            zoom: 1.0,
            effective_zoom: 1.0,
            font: FontDescription::default(),
            direction: TextDirection::default(),
            writing_mode: WritingMode::default(),
            letter_spacing: 0,
            word_spacing: 0,
            line_height: LINE_HEIGHT_NORMAL,
            text_indent: Length::ZERO,
            text_align: TextAlign::default(),
            text_transform: TextTransform::default(),
            text_decoration: TextDecoration::NONE,
            text_decorations_in_effect: TextDecoration::NONE,
            text_overflow: TextOverflow::default(),
            text_shadow: Vec::new(),
            white_space: WhiteSpace::default(),
            word_break: WordBreak::default(),
            word_wrap: WordWrap::default(),
            vertical_align: VerticalAlign::default(),
            vertical_align_length: None,
            unicode_bidi: UnicodeBidi::default(),
            speak: Speak::default(),
            text_fill_color: Color::INVALID,
            text_stroke_color: Color::INVALID,
            text_stroke_width: 0.0,
            text_emphasis_color: Color::INVALID,
            text_emphasis_fill: TextEmphasisFill::default(),
            text_emphasis_mark: TextEmphasisMark::default(),
            text_emphasis_custom_mark: String::new(),
            text_emphasis_position: TextEmphasisPosition::default(),
            text_combine: TextCombine::default(),
            text_security: TextSecurity::default(),
            text_size_adjust: TextSizeAdjust::default(),
            highlight: None,
            hyphens: Hyphens::default(),
            hyphenation_string: None,
            hyphenation_limit_after: -1,
            hyphenation_limit_before: -1,
            locale: None,
            line_break: LineBreak::default(),
            line_clamp: LineClamp::default(),
            line_box_contain: LineBoxContain::default(),
            nbsp_mode: NbspMode::default(),
            rtl_ordering: Order::default(),
            match_nearest_mail_blockquote_color: MatchNearestMailBlockquoteColor::default(),
            display: Display::default(),
            position: Position::default(),
            float: Float::default(),
            clear: Clear::default(),
            visibility: Visibility::default(),
            overflow_x: Overflow::default(),
            overflow_y: Overflow::default(),
            box_sizing: BoxSizing::default(),
            width: Length::Auto,
            height: Length::Auto,
            min_width: Length::ZERO,
            min_height: Length::ZERO,
            max_width: Length::Undefined,
            max_height: Length::Undefined,
            top: Length::Auto,
            right: Length::Auto,
            bottom: Length::Auto,
            left: Length::Auto,
            margin_top: Length::ZERO,
            margin_right: Length::ZERO,
            margin_bottom: Length::ZERO,
            margin_left: Length::ZERO,
            padding_top: Length::ZERO,
            padding_right: Length::ZERO,
            padding_bottom: Length::ZERO,
            padding_left: Length::ZERO,
            margin_before_collapse: MarginCollapse::default(),
            margin_after_collapse: MarginCollapse::default(),
            z_index: None,
            clip: None,
            opacity: 1.0,
            resize: Resize::default(),
            pointer_events: PointerEvents::default(),
            cursor: Cursor::default(),
            cursor_images: Vec::new(),
            border_top: BorderEdge::default(),
            border_right: BorderEdge::default(),
            border_bottom: BorderEdge::default(),
            border_left: BorderEdge::default(),
            border_top_left_radius: LengthSize::ZERO,
            border_top_right_radius: LengthSize::ZERO,
            border_bottom_left_radius: LengthSize::ZERO,
            border_bottom_right_radius: LengthSize::ZERO,
            border_collapse: BorderCollapse::default(),
            horizontal_border_spacing: 0,
            vertical_border_spacing: 0,
            border_image: NinePieceImage::default(),
            border_fit: BorderFit::default(),
            outline: BorderEdge::default(),
            outline_style_is_auto: false,
            outline_offset: 0,
            box_shadow: Vec::new(),
            background_color: Color::TRANSPARENT,
            background_layers: FillLayers::new(FillLayerKind::Background),
            mask_layers: FillLayers::new(FillLayerKind::Mask),
            mask_box_image: NinePieceImage::default(),
            box_reflect: None,
            caption_side: CaptionSide::default(),
            empty_cells: EmptyCells::default(),
            table_layout: TableLayout::default(),
            list_style_type: ListStyleType::default(),
            list_style_position: ListStylePosition::default(),
            list_style_image: None,
            page_break_before: PageBreak::default(),
            page_break_after: PageBreak::default(),
            page_break_inside: PageBreak::default(),
            orphans: 2,
            widows: 2,
            column_count: None,
            column_gap: None,
            column_width: None,
            column_rule: BorderEdge::default(),
            column_span: ColumnSpan::default(),
            column_break_before: PageBreak::default(),
            column_break_after: PageBreak::default(),
            column_break_inside: PageBreak::default(),
            box_align: BoxAlign::default(),
            box_direction: BoxDirection::default(),
            box_flex: 0.0,
            box_flex_group: 1,
            box_lines: BoxLines::default(),
            box_ordinal_group: 1,
            box_orient: BoxOrient::default(),
            box_pack: BoxPack::default(),
            transform: Vec::new(),
            transform_origin_x: Length::Percent(50.0),
            transform_origin_y: Length::Percent(50.0),
            transform_origin_z: 0.0,
            transform_style_3d: TransformStyle3d::default(),
            perspective: None,
            perspective_origin_x: Length::Percent(50.0),
            perspective_origin_y: Length::Percent(50.0),
            backface_visibility: Visibility::Visible,
            animations: None,
            transitions: None,
            marquee_direction: MarqueeDirection::default(),
            marquee_increment: Length::Fixed(6.0),
            marquee_loop_count: -1,
            marquee_behavior: MarqueeBehavior::default(),
            marquee_speed: 85,
            appearance: ControlPart::default(),
            color_space: ColorSpace::default(),
            user_drag: UserDrag::default(),
            user_modify: UserModify::default(),
            user_select: UserSelect::default(),
            dashboard_regions: Vec::new(),
            content: Vec::new(),
            counter_directives: None,
            svg: SvgStyle::default(),
        }
    }
}

impl Style {
    /// A style holding every property's initial value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated transform for a box of `width` × `height`, without
    /// the transform origin.
    #[must_use]
    pub fn transform_matrix(&self, width: f64, height: f64) -> TransformationMatrix {
        let mut matrix = TransformationMatrix::IDENTITY;
        for operation in &self.transform {
            operation.apply(&mut matrix, width, height);
        }
        matrix
    }

    /// The color `id` resolves to, honoring `:visited` colors when the
    /// element sits inside a visited link.
    ///
    /// The visited color contributes only its RGB channels; alpha always
    /// comes from the unvisited color.
    #[must_use]
    pub fn visited_dependent_color(&self, id: PropertyId) -> Color {
        let unvisited = self.color_including_fallback(id, false);
        if self.inside_link != InsideLink::InsideVisited {
            return unvisited;
        }

        let visited = self.color_including_fallback(id, true);
        // A transparent visited background was most likely never set.
        if id == PropertyId::BackgroundColor && visited == Color::TRANSPARENT {
            return unvisited;
        }

        let (v, u) = (visited.rgb(), unvisited.rgb());
        Color::new(Rgba32::rgba(v.red(), v.green(), v.blue(), u.alpha()))
    }

    fn color_including_fallback(&self, id: PropertyId, visited_link: bool) -> Color {
        let pick = |regular: Color, visited: Color| if visited_link { visited } else { regular };
        let v = &self.visited;
        let (result, border_style) = match id {
            // Background color never falls back.
            PropertyId::BackgroundColor => return pick(self.background_color, v.background_color),
            PropertyId::BorderTopColor => (pick(self.border_top.color, v.border_top_color), self.border_top.style),
            PropertyId::BorderRightColor => (pick(self.border_right.color, v.border_right_color), self.border_right.style),
            PropertyId::BorderBottomColor => {
                (pick(self.border_bottom.color, v.border_bottom_color), self.border_bottom.style)
            }
            PropertyId::BorderLeftColor => (pick(self.border_left.color, v.border_left_color), self.border_left.style),
            PropertyId::OutlineColor => (pick(self.outline.color, v.outline_color), self.outline.style),
            PropertyId::WebkitColumnRuleColor => {
                (pick(self.column_rule.color, v.column_rule_color), self.column_rule.style)
            }
            PropertyId::WebkitTextEmphasisColor => {
                (pick(self.text_emphasis_color, v.text_emphasis_color), BorderStyle::None)
            }
            PropertyId::WebkitTextFillColor => (pick(self.text_fill_color, v.text_fill_color), BorderStyle::None),
            PropertyId::WebkitTextStrokeColor => {
                (pick(self.text_stroke_color, v.text_stroke_color), BorderStyle::None)
            }
            _ => (pick(self.color, v.color), BorderStyle::None),
        };

        if result.is_valid() {
            return result;
        }

        let is_border_color = matches!(
            id,
            PropertyId::BorderTopColor
                | PropertyId::BorderRightColor
                | PropertyId::BorderBottomColor
                | PropertyId::BorderLeftColor
        );
        if !visited_link && is_border_color && matches!(border_style, BorderStyle::Inset | BorderStyle::Outset) {
            Color::new(Rgba32::LIGHT_GRAY)
        } else {
            pick(self.color, v.color)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_border_color_falls_back_to_color() {
        let mut style = Style::new();
        style.color = Color::new(Rgba32::rgb(1, 2, 3));
        assert_eq!(
            style.visited_dependent_color(PropertyId::BorderTopColor),
            Color::new(Rgba32::rgb(1, 2, 3))
        );

        style.border_top.style = BorderStyle::Inset;
        assert_eq!(
            style.visited_dependent_color(PropertyId::BorderTopColor),
            Color::new(Rgba32::LIGHT_GRAY)
        );
    }

    #[test]
    fn test_visited_color_keeps_unvisited_alpha() {
        let mut style = Style::new();
        style.inside_link = InsideLink::InsideVisited;
        style.color = Color::new(Rgba32::rgba(0, 0, 0, 128));
        style.visited.color = Color::new(Rgba32::rgb(255, 0, 0));
        assert_eq!(
            style.visited_dependent_color(PropertyId::Color),
            Color::new(Rgba32::rgba(255, 0, 0, 128))
        );
    }

    #[test]
    fn test_unvisited_link_ignores_visited_colors() {
        let mut style = Style::new();
        style.inside_link = InsideLink::InsideUnvisited;
        style.visited.color = Color::new(Rgba32::rgb(255, 0, 0));
        assert_eq!(style.visited_dependent_color(PropertyId::Color), Color::BLACK);
    }
}
