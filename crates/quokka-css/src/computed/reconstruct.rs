//! Per-property reconstruction of computed values.

use crate::keyword::Keyword;
use crate::property::PropertyId;
use crate::style::animation::{Animation, ITERATION_COUNT_INFINITE};
use crate::style::content::TextEmphasisMark;
use crate::style::image::StyleImage;
use crate::style::keywords::{BoxPack, ColumnSpan, FontWeight, LineClamp, PageBreak, Visibility};
use crate::style::length::Length;
use crate::values::{PrimitiveValue, Rect, Value, ValueList};

use super::helpers::{Reconstructor, whole_pixels};
use super::log_unimplemented;

impl Reconstructor<'_> {
    /// The computed value of a physical property. Properties with no
    /// reconstruction are reported and yield `None`.
    pub(super) fn value(&mut self, id: PropertyId) -> Option<Value> {
        let style = self.style;
        let value = match id {
            // Backgrounds and masks.
            PropertyId::BackgroundColor => self.plain_color(id, style.background_color),
            PropertyId::BackgroundImage | PropertyId::WebkitMaskImage => {
                let layers = self.layers(id == PropertyId::WebkitMaskImage);
                self.fill_layer_list(layers, Self::fill_image)
            }
            PropertyId::BackgroundSize | PropertyId::WebkitBackgroundSize | PropertyId::WebkitMaskSize => {
                let layers = self.layers(id == PropertyId::WebkitMaskSize);
                self.fill_layer_list(layers, |r, layer| r.fill_size(layer.size()))
            }
            PropertyId::BackgroundRepeat | PropertyId::WebkitMaskRepeat => {
                let layers = self.layers(id == PropertyId::WebkitMaskRepeat);
                self.fill_layer_list(layers, |r, layer| r.fill_repeat(layer.repeat_x(), layer.repeat_y()))
            }
            PropertyId::WebkitBackgroundComposite | PropertyId::WebkitMaskComposite => {
                let layers = self.layers(id == PropertyId::WebkitMaskComposite);
                self.fill_layer_list(layers, |r, layer| r.keyword(layer.composite()))
            }
            PropertyId::BackgroundAttachment | PropertyId::WebkitMaskAttachment => {
                let layers = self.layers(id == PropertyId::WebkitMaskAttachment);
                self.fill_layer_list(layers, |r, layer| r.keyword(layer.attachment()))
            }
            PropertyId::BackgroundClip | PropertyId::WebkitBackgroundClip | PropertyId::WebkitMaskClip => {
                let layers = self.layers(id == PropertyId::WebkitMaskClip);
                self.fill_layer_list(layers, |r, layer| r.keyword(layer.clip()))
            }
            PropertyId::BackgroundOrigin | PropertyId::WebkitBackgroundOrigin | PropertyId::WebkitMaskOrigin => {
                let layers = self.layers(id == PropertyId::WebkitMaskOrigin);
                self.fill_layer_list(layers, |r, layer| r.keyword(layer.origin()))
            }
            PropertyId::BackgroundPosition | PropertyId::WebkitMaskPosition => {
                let layers = self.layers(id == PropertyId::WebkitMaskPosition);
                self.fill_layer_list(layers, Self::fill_position)
            }
            PropertyId::BackgroundPositionX | PropertyId::WebkitMaskPositionX => {
                let layers = self.layers(id == PropertyId::WebkitMaskPositionX);
                self.fill_layer_list(layers, |r, layer| r.length(layer.x_position()))
            }
            PropertyId::BackgroundPositionY | PropertyId::WebkitMaskPositionY => {
                let layers = self.layers(id == PropertyId::WebkitMaskPositionY);
                self.fill_layer_list(layers, |r, layer| r.length(layer.y_position()))
            }

            // Borders and outline.
            PropertyId::BorderCollapse => self.keyword(style.border_collapse),
            PropertyId::BorderSpacing => {
                let items = vec![
                    self.zoom_px(i32::from(style.horizontal_border_spacing)),
                    self.zoom_px(i32::from(style.vertical_border_spacing)),
                ];
                ValueList::space(items).into()
            }
            PropertyId::WebkitBorderHorizontalSpacing => self.zoom_px(i32::from(style.horizontal_border_spacing)),
            PropertyId::WebkitBorderVerticalSpacing => self.zoom_px(i32::from(style.vertical_border_spacing)),
            PropertyId::BorderTopColor => self.border_like_color(id, style.border_top.color),
            PropertyId::BorderRightColor => self.border_like_color(id, style.border_right.color),
            PropertyId::BorderBottomColor => self.border_like_color(id, style.border_bottom.color),
            PropertyId::BorderLeftColor => self.border_like_color(id, style.border_left.color),
            PropertyId::BorderTopStyle => self.keyword(style.border_top.style),
            PropertyId::BorderRightStyle => self.keyword(style.border_right.style),
            PropertyId::BorderBottomStyle => self.keyword(style.border_bottom.style),
            PropertyId::BorderLeftStyle => self.keyword(style.border_left.style),
            PropertyId::BorderTopWidth => self.zoom_px(i32::from(style.border_top.width)),
            PropertyId::BorderRightWidth => self.zoom_px(i32::from(style.border_right.width)),
            PropertyId::BorderBottomWidth => self.zoom_px(i32::from(style.border_bottom.width)),
            PropertyId::BorderLeftWidth => self.zoom_px(i32::from(style.border_left.width)),
            PropertyId::BorderTopLeftRadius => self.border_radius_corner(style.border_top_left_radius),
            PropertyId::BorderTopRightRadius => self.border_radius_corner(style.border_top_right_radius),
            PropertyId::BorderBottomLeftRadius => self.border_radius_corner(style.border_bottom_left_radius),
            PropertyId::BorderBottomRightRadius => self.border_radius_corner(style.border_bottom_right_radius),
            PropertyId::WebkitBorderFit => self.keyword(style.border_fit),
            PropertyId::WebkitBorderImage => self.nine_piece_image(&style.border_image),
            PropertyId::WebkitMaskBoxImage => self.nine_piece_image(&style.mask_box_image),
            PropertyId::OutlineColor => self.border_like_color(id, style.outline.color),
            PropertyId::OutlineOffset => self.zoom_px(style.outline_offset),
            PropertyId::OutlineStyle if style.outline_style_is_auto => self.ident(Keyword::Auto),
            PropertyId::OutlineStyle => self.keyword(style.outline.style),
            PropertyId::OutlineWidth => self.zoom_px(i32::from(style.outline.width)),

            // Box geometry.
            PropertyId::Top => self.position_offset(style.top),
            PropertyId::Right => self.position_offset(style.right),
            PropertyId::Bottom => self.position_offset(style.bottom),
            PropertyId::Left => self.position_offset(style.left),
            PropertyId::Width => match self.layout {
                Some(layout) => self.zoom_px(layout.sizing_box(style.box_sizing).width),
                None => self.zoom_length(style.width),
            },
            PropertyId::Height => match self.layout {
                Some(layout) => self.zoom_px(layout.sizing_box(style.box_sizing).height),
                None => self.zoom_length(style.height),
            },
            PropertyId::MinWidth => self.length(style.min_width),
            PropertyId::MinHeight => self.length(style.min_height),
            PropertyId::MaxWidth => self.length(style.max_width),
            PropertyId::MaxHeight => self.length(style.max_height),
            PropertyId::MarginTop => self.margin(style.margin_top),
            PropertyId::MarginRight => self.margin(style.margin_right),
            PropertyId::MarginBottom => self.margin(style.margin_bottom),
            PropertyId::MarginLeft => self.margin(style.margin_left),
            PropertyId::PaddingTop => match self.layout {
                Some(layout) => self.zoom_px(layout.padding.top),
                None => self.length(style.padding_top),
            },
            PropertyId::PaddingRight => match self.layout {
                Some(layout) => self.zoom_px(layout.padding.right),
                None => self.length(style.padding_right),
            },
            PropertyId::PaddingBottom => match self.layout {
                Some(layout) => self.zoom_px(layout.padding.bottom),
                None => self.length(style.padding_bottom),
            },
            PropertyId::PaddingLeft => match self.layout {
                Some(layout) => self.zoom_px(layout.padding.left),
                None => self.length(style.padding_left),
            },
            PropertyId::BoxSizing => self.keyword(style.box_sizing),
            PropertyId::Clip => match style.clip {
                Some(clip) => {
                    let rect = Rect::new(
                        self.zoom_px_primitive(whole_pixels(clip.top.value())),
                        self.zoom_px_primitive(whole_pixels(clip.right.value())),
                        self.zoom_px_primitive(whole_pixels(clip.bottom.value())),
                        self.zoom_px_primitive(whole_pixels(clip.left.value())),
                    );
                    PrimitiveValue::rect(rect).into()
                }
                None => self.ident(Keyword::Auto),
            },
            PropertyId::Display => self.keyword(style.display),
            PropertyId::Position => self.keyword(style.position),
            PropertyId::Float => self.keyword(style.float),
            PropertyId::Clear => self.keyword(style.clear),
            PropertyId::Visibility => self.keyword(style.visibility),
            PropertyId::Overflow => self.keyword(style.overflow_x.max(style.overflow_y)),
            PropertyId::OverflowX => self.keyword(style.overflow_x),
            PropertyId::OverflowY => self.keyword(style.overflow_y),
            PropertyId::ZIndex => match style.z_index {
                Some(z) => self.number(f64::from(z)),
                None => self.ident(Keyword::Auto),
            },
            PropertyId::Zoom => self.number(f64::from(style.zoom)),
            PropertyId::Opacity => self.number(f64::from(style.opacity)),
            PropertyId::Resize => self.keyword(style.resize),
            PropertyId::PointerEvents => self.keyword(style.pointer_events),
            PropertyId::Cursor => {
                let keyword = self.keyword(style.cursor);
                if style.cursor_images.is_empty() {
                    keyword
                } else {
                    let mut items: Vec<Value> = style.cursor_images.iter().map(StyleImage::css_value).collect();
                    items.push(keyword);
                    ValueList::comma(items).into()
                }
            }
            PropertyId::BoxShadow | PropertyId::WebkitBoxShadow => self.shadow_list(&style.box_shadow, false),
            PropertyId::WebkitBoxReflect => self.reflection(style.box_reflect.as_ref()),
            PropertyId::WebkitMarginBeforeCollapse | PropertyId::WebkitMarginTopCollapse => {
                self.keyword(style.margin_before_collapse)
            }
            PropertyId::WebkitMarginAfterCollapse | PropertyId::WebkitMarginBottomCollapse => {
                self.keyword(style.margin_after_collapse)
            }

            // Color and text.
            PropertyId::Color => self.plain_color(id, style.color),
            PropertyId::Direction => self.keyword(style.direction),
            PropertyId::WebkitWritingMode => self.keyword(style.writing_mode),
            PropertyId::LetterSpacing if style.letter_spacing == 0 => self.ident(Keyword::Normal),
            PropertyId::LetterSpacing => self.zoom_px(style.letter_spacing),
            PropertyId::WordSpacing => self.zoom_px(style.word_spacing),
            PropertyId::LineHeight => self.line_height(),
            PropertyId::TextIndent => self.length(style.text_indent),
            PropertyId::TextAlign => self.keyword(style.text_align),
            PropertyId::TextTransform => self.keyword(style.text_transform),
            PropertyId::TextDecoration => self.text_decoration(style.text_decoration),
            PropertyId::WebkitTextDecorationsInEffect => self.text_decoration(style.text_decorations_in_effect),
            PropertyId::TextOverflow => self.keyword(style.text_overflow),
            PropertyId::TextShadow => self.shadow_list(&style.text_shadow, true),
            PropertyId::WhiteSpace => self.keyword(style.white_space),
            PropertyId::WordBreak => self.keyword(style.word_break),
            PropertyId::WordWrap => self.keyword(style.word_wrap),
            PropertyId::VerticalAlign => match style.vertical_align_length {
                Some(length) => self.length(length),
                None => self.keyword(style.vertical_align),
            },
            PropertyId::UnicodeBidi => self.keyword(style.unicode_bidi),
            PropertyId::Speak => self.keyword(style.speak),
            PropertyId::WebkitTextFillColor => self.current_color_or_valid(style.text_fill_color),
            PropertyId::WebkitTextStrokeColor => self.current_color_or_valid(style.text_stroke_color),
            PropertyId::WebkitTextStrokeWidth => self.zoom_px_f32(style.text_stroke_width),
            PropertyId::WebkitTextEmphasisColor => self.current_color_or_valid(style.text_emphasis_color),
            PropertyId::WebkitTextEmphasisPosition => self.keyword(style.text_emphasis_position),
            PropertyId::WebkitTextEmphasisStyle => self.text_emphasis_style(),
            PropertyId::WebkitTextCombine => self.keyword(style.text_combine),
            PropertyId::WebkitTextSecurity => self.keyword(style.text_security),
            PropertyId::WebkitTextSizeAdjust => self.keyword(style.text_size_adjust),
            PropertyId::WebkitHighlight => match &style.highlight {
                Some(highlight) => Self::string(highlight),
                None => self.ident(Keyword::None),
            },
            PropertyId::WebkitHyphens => self.keyword(style.hyphens),
            PropertyId::WebkitHyphenateCharacter => match &style.hyphenation_string {
                Some(text) => Self::string(text),
                None => self.ident(Keyword::Auto),
            },
            PropertyId::WebkitHyphenateLimitAfter => self.count_or_auto(style.hyphenation_limit_after),
            PropertyId::WebkitHyphenateLimitBefore => self.count_or_auto(style.hyphenation_limit_before),
            PropertyId::WebkitLocale => match &style.locale {
                Some(locale) => Self::string(locale),
                None => self.ident(Keyword::Auto),
            },
            PropertyId::WebkitLineBreak => self.keyword(style.line_break),
            PropertyId::WebkitLineClamp => match style.line_clamp {
                LineClamp::None => self.ident(Keyword::None),
                LineClamp::Lines(lines) => self.number(f64::from(lines)),
                LineClamp::Percent(percent) => self.percentage(f64::from(percent)),
            },
            PropertyId::WebkitLineBoxContain => {
                if style.line_box_contain.is_none() {
                    self.ident(Keyword::None)
                } else {
                    let items = style.line_box_contain.keywords().map(|keyword| self.ident(keyword)).collect();
                    ValueList::space(items).into()
                }
            }
            PropertyId::WebkitNbspMode => self.keyword(style.nbsp_mode),
            PropertyId::WebkitRtlOrdering => self.keyword(style.rtl_ordering),
            PropertyId::WebkitMatchNearestMailBlockquoteColor => {
                self.keyword(style.match_nearest_mail_blockquote_color)
            }

            // Fonts.
            PropertyId::FontFamily => match style.font.families.as_slice() {
                [only] => self.font_family(only),
                families => {
                    let items = families.iter().map(|family| self.font_family(family)).collect();
                    ValueList::comma(items).into()
                }
            },
            PropertyId::FontSize => self.zoom_px(computed_pixel_size(style.font.computed_size)),
            PropertyId::FontStyle => self.keyword(style.font.style),
            PropertyId::FontVariant => self.keyword(style.font.variant),
            PropertyId::FontWeight => match style.font.weight {
                FontWeight::W400 => self.ident(Keyword::Normal),
                FontWeight::W700 => self.ident(Keyword::Bold),
                weight => self.keyword(weight),
            },
            PropertyId::TextRendering => self.keyword(style.font.text_rendering),
            PropertyId::WebkitFontSmoothing => self.keyword(style.font.font_smoothing),
            PropertyId::WebkitTextOrientation => self.keyword(style.font.text_orientation),

            // Tables, lists and pages.
            PropertyId::CaptionSide => self.keyword(style.caption_side),
            PropertyId::EmptyCells => self.keyword(style.empty_cells),
            PropertyId::TableLayout => self.keyword(style.table_layout),
            PropertyId::ListStyleImage => match &style.list_style_image {
                Some(image) => image.css_value(),
                None => self.ident(Keyword::None),
            },
            PropertyId::ListStylePosition => self.keyword(style.list_style_position),
            PropertyId::ListStyleType => self.keyword(style.list_style_type),
            PropertyId::PageBreakAfter => self.keyword(style.page_break_after),
            PropertyId::PageBreakBefore => self.keyword(style.page_break_before),
            PropertyId::PageBreakInside => match style.page_break_inside {
                PageBreak::Always => return self.unimplemented(id),
                inside => self.keyword(inside),
            },
            PropertyId::Orphans => self.number(f64::from(style.orphans)),
            PropertyId::Widows => self.number(f64::from(style.widows)),

            // Multi-column.
            PropertyId::WebkitColumnCount => match style.column_count {
                Some(count) => self.number(f64::from(count)),
                None => self.ident(Keyword::Auto),
            },
            PropertyId::WebkitColumnGap => match style.column_gap {
                Some(gap) => self.zoom_px_f32(gap),
                None => self.ident(Keyword::Normal),
            },
            PropertyId::WebkitColumnWidth => match style.column_width {
                Some(width) => self.zoom_px_f32(width),
                None => self.ident(Keyword::Auto),
            },
            // Visited column rule colors follow the outline.
            PropertyId::WebkitColumnRuleColor => self.border_like_color(PropertyId::OutlineColor, style.column_rule.color),
            PropertyId::WebkitColumnRuleStyle => self.keyword(style.column_rule.style),
            PropertyId::WebkitColumnRuleWidth => self.zoom_px(i32::from(style.column_rule.width)),
            PropertyId::WebkitColumnSpan => match style.column_span {
                ColumnSpan::All => self.ident(Keyword::All),
                ColumnSpan::One => self.number(1.0),
            },
            PropertyId::WebkitColumnBreakAfter => self.keyword(style.column_break_after),
            PropertyId::WebkitColumnBreakBefore => self.keyword(style.column_break_before),
            PropertyId::WebkitColumnBreakInside => self.keyword(style.column_break_inside),

            // Flexible boxes.
            PropertyId::WebkitBoxAlign => self.keyword(style.box_align),
            PropertyId::WebkitBoxDirection => self.keyword(style.box_direction),
            PropertyId::WebkitBoxFlex => self.number(f64::from(style.box_flex)),
            PropertyId::WebkitBoxFlexGroup => self.number(f64::from(style.box_flex_group)),
            PropertyId::WebkitBoxLines => self.keyword(style.box_lines),
            PropertyId::WebkitBoxOrdinalGroup => self.number(f64::from(style.box_ordinal_group)),
            PropertyId::WebkitBoxOrient => self.keyword(style.box_orient),
            PropertyId::WebkitBoxPack => match style.box_pack {
                BoxPack::Justify => return self.unimplemented(id),
                pack => self.keyword(pack),
            },

            // Transforms.
            PropertyId::WebkitTransform => self.transform(),
            PropertyId::WebkitTransformOrigin => self.origin(
                style.transform_origin_x,
                style.transform_origin_y,
                Some(style.transform_origin_z),
            ),
            PropertyId::WebkitTransformStyle => self.keyword(style.transform_style_3d),
            PropertyId::WebkitPerspective => match style.perspective {
                Some(depth) => self.zoom_px_f32(depth),
                None => self.ident(Keyword::None),
            },
            PropertyId::WebkitPerspectiveOrigin => {
                self.origin(style.perspective_origin_x, style.perspective_origin_y, None)
            }
            PropertyId::WebkitBackfaceVisibility => match style.backface_visibility {
                Visibility::Hidden => self.ident(Keyword::Hidden),
                Visibility::Visible | Visibility::Collapse => self.ident(Keyword::Visible),
            },

            // Animations and transitions.
            PropertyId::WebkitAnimationDelay => self.delays(style.animations.as_deref()),
            PropertyId::WebkitAnimationDuration => self.durations(style.animations.as_deref()),
            PropertyId::WebkitAnimationTimingFunction => self.timing_functions(style.animations.as_deref()),
            PropertyId::WebkitAnimationDirection => self.animation_list(
                style.animations.as_deref(),
                |r| r.ident(Keyword::Normal),
                |r, animation| r.keyword(animation.direction),
            ),
            PropertyId::WebkitAnimationFillMode => self.animation_list(
                style.animations.as_deref(),
                |r| r.ident(Keyword::None),
                |r, animation| r.keyword(animation.fill_mode),
            ),
            PropertyId::WebkitAnimationIterationCount => self.animation_list(
                style.animations.as_deref(),
                |r| r.number(Animation::INITIAL_ITERATION_COUNT),
                |r, animation| r.iteration_count(animation.iteration_count),
            ),
            PropertyId::WebkitAnimationName => self.animation_list(
                style.animations.as_deref(),
                |r| r.ident(Keyword::None),
                |_, animation| Self::string(&animation.name),
            ),
            PropertyId::WebkitAnimationPlayState => self.animation_list(
                style.animations.as_deref(),
                |r| r.ident(Keyword::Running),
                |r, animation| r.keyword(animation.play_state),
            ),
            PropertyId::WebkitTransitionDelay => self.delays(style.transitions.as_deref()),
            PropertyId::WebkitTransitionDuration => self.durations(style.transitions.as_deref()),
            PropertyId::WebkitTransitionTimingFunction => self.timing_functions(style.transitions.as_deref()),
            PropertyId::WebkitTransitionProperty => self.animation_list(
                style.transitions.as_deref(),
                |r| r.ident(Keyword::All),
                |r, transition| r.transition_property(transition.property),
            ),

            // Marquee.
            PropertyId::WebkitMarqueeDirection => self.keyword(style.marquee_direction),
            PropertyId::WebkitMarqueeIncrement => self.length(style.marquee_increment),
            PropertyId::WebkitMarqueeRepetition if style.marquee_loop_count < 0 => self.ident(Keyword::Infinite),
            PropertyId::WebkitMarqueeRepetition => self.number(f64::from(style.marquee_loop_count)),
            PropertyId::WebkitMarqueeStyle => self.keyword(style.marquee_behavior),

            // User interface and the rest.
            PropertyId::WebkitAppearance => self.keyword(style.appearance),
            PropertyId::WebkitColorCorrection => self.keyword(style.color_space),
            PropertyId::WebkitUserDrag => self.keyword(style.user_drag),
            PropertyId::WebkitUserModify => self.keyword(style.user_modify),
            PropertyId::WebkitUserSelect => self.keyword(style.user_select),
            PropertyId::Content => self.content(),
            PropertyId::CounterIncrement => return self.counters(true),
            PropertyId::CounterReset => return self.counters(false),
            PropertyId::WebkitDashboardRegion => return self.dashboard(id),

            PropertyId::AlignmentBaseline
            | PropertyId::BaselineShift
            | PropertyId::ClipPath
            | PropertyId::ClipRule
            | PropertyId::ColorInterpolation
            | PropertyId::ColorInterpolationFilters
            | PropertyId::ColorProfile
            | PropertyId::ColorRendering
            | PropertyId::DominantBaseline
            | PropertyId::EnableBackground
            | PropertyId::Fill
            | PropertyId::FillOpacity
            | PropertyId::FillRule
            | PropertyId::Filter
            | PropertyId::FloodColor
            | PropertyId::FloodOpacity
            | PropertyId::GlyphOrientationHorizontal
            | PropertyId::GlyphOrientationVertical
            | PropertyId::ImageRendering
            | PropertyId::Kerning
            | PropertyId::LightingColor
            | PropertyId::Marker
            | PropertyId::MarkerEnd
            | PropertyId::MarkerMid
            | PropertyId::MarkerStart
            | PropertyId::Mask
            | PropertyId::ShapeRendering
            | PropertyId::StopColor
            | PropertyId::StopOpacity
            | PropertyId::Stroke
            | PropertyId::StrokeDasharray
            | PropertyId::StrokeDashoffset
            | PropertyId::StrokeLinecap
            | PropertyId::StrokeLinejoin
            | PropertyId::StrokeMiterlimit
            | PropertyId::StrokeOpacity
            | PropertyId::StrokeWidth
            | PropertyId::TextAnchor
            | PropertyId::VectorEffect
            | PropertyId::WritingMode
            | PropertyId::WebkitSvgShadow => return self.svg(id),

            // Shorthands.
            PropertyId::Background
            | PropertyId::Border
            | PropertyId::BorderBottom
            | PropertyId::BorderColor
            | PropertyId::BorderLeft
            | PropertyId::BorderRadius
            | PropertyId::BorderRight
            | PropertyId::BorderStyle
            | PropertyId::BorderTop
            | PropertyId::BorderWidth
            | PropertyId::Font
            | PropertyId::ListStyle
            | PropertyId::Margin
            | PropertyId::Outline
            | PropertyId::Padding
            // Non-standard longhands.
            | PropertyId::BackgroundRepeatX
            | PropertyId::BackgroundRepeatY
            // Legacy text decoration longhands.
            | PropertyId::WebkitTextEmphasis
            | PropertyId::TextLineThrough
            | PropertyId::TextLineThroughColor
            | PropertyId::TextLineThroughMode
            | PropertyId::TextLineThroughStyle
            | PropertyId::TextLineThroughWidth
            | PropertyId::TextOverline
            | PropertyId::TextOverlineColor
            | PropertyId::TextOverlineMode
            | PropertyId::TextOverlineStyle
            | PropertyId::TextOverlineWidth
            | PropertyId::TextUnderline
            | PropertyId::TextUnderlineColor
            | PropertyId::TextUnderlineMode
            | PropertyId::TextUnderlineStyle
            | PropertyId::TextUnderlineWidth
            // Flow-relative properties, mapped away before we get here.
            | PropertyId::WebkitBorderAfter
            | PropertyId::WebkitBorderAfterColor
            | PropertyId::WebkitBorderAfterStyle
            | PropertyId::WebkitBorderAfterWidth
            | PropertyId::WebkitBorderBefore
            | PropertyId::WebkitBorderBeforeColor
            | PropertyId::WebkitBorderBeforeStyle
            | PropertyId::WebkitBorderBeforeWidth
            | PropertyId::WebkitBorderEnd
            | PropertyId::WebkitBorderEndColor
            | PropertyId::WebkitBorderEndStyle
            | PropertyId::WebkitBorderEndWidth
            | PropertyId::WebkitBorderStart
            | PropertyId::WebkitBorderStartColor
            | PropertyId::WebkitBorderStartStyle
            | PropertyId::WebkitBorderStartWidth
            | PropertyId::WebkitMarginAfter
            | PropertyId::WebkitMarginBefore
            | PropertyId::WebkitMarginEnd
            | PropertyId::WebkitMarginStart
            | PropertyId::WebkitPaddingAfter
            | PropertyId::WebkitPaddingBefore
            | PropertyId::WebkitPaddingEnd
            | PropertyId::WebkitPaddingStart
            | PropertyId::WebkitLogicalWidth
            | PropertyId::WebkitLogicalHeight
            | PropertyId::WebkitMinLogicalWidth
            | PropertyId::WebkitMinLogicalHeight
            | PropertyId::WebkitMaxLogicalWidth
            | PropertyId::WebkitMaxLogicalHeight
            // Descriptors and editing-only properties.
            | PropertyId::FontStretch
            | PropertyId::Src
            | PropertyId::UnicodeRange
            | PropertyId::Page
            | PropertyId::Quotes
            | PropertyId::Size
            | PropertyId::WebkitFontSizeDelta
            // Unimplemented -webkit- properties.
            | PropertyId::WebkitAnimation
            | PropertyId::WebkitBorderRadius
            | PropertyId::WebkitColumns
            | PropertyId::WebkitColumnRule
            | PropertyId::WebkitMarginCollapse
            | PropertyId::WebkitMarquee
            | PropertyId::WebkitMarqueeSpeed
            | PropertyId::WebkitMask
            | PropertyId::WebkitMaskRepeatX
            | PropertyId::WebkitMaskRepeatY
            | PropertyId::WebkitPerspectiveOriginX
            | PropertyId::WebkitPerspectiveOriginY
            | PropertyId::WebkitTextStroke
            | PropertyId::WebkitTransformOriginX
            | PropertyId::WebkitTransformOriginY
            | PropertyId::WebkitTransformOriginZ
            | PropertyId::WebkitTransition => return self.unimplemented(id),
        };
        Some(value)
    }

    pub(super) fn unimplemented(&self, id: PropertyId) -> Option<Value> {
        log_unimplemented(self.logged, id);
        None
    }

    /// Percentages and pixel margins are zoom-compensated; `auto` reads as
    /// its used value of zero.
    fn margin(&mut self, length: Length) -> Value {
        match length {
            Length::Percent(_) => self.length(length),
            other => self.zoom_px_f32(other.value()),
        }
    }

    /// `line-height`: `normal` (stored negative), or pixels. Percentages
    /// resolve against the specified font size.
    fn line_height(&mut self) -> Value {
        let style = self.style;
        match style.line_height {
            length if length.value() < 0.0 => self.ident(Keyword::Normal),
            Length::Percent(percent) => {
                let scaled = whole_pixels(percent * style.font.specified_size) / 100;
                self.zoom_px(scaled)
            }
            length => self.zoom_px_f32(length.value()),
        }
    }

    fn text_emphasis_style(&mut self) -> Value {
        let style = self.style;
        match style.text_emphasis_mark {
            TextEmphasisMark::None => self.ident(Keyword::None),
            TextEmphasisMark::Custom => Self::string(&style.text_emphasis_custom_mark),
            mark => {
                let fill = self.keyword(style.text_emphasis_fill);
                match mark.shape_keyword() {
                    Some(shape) => ValueList::space(vec![fill, self.ident(shape)]).into(),
                    None => fill,
                }
            }
        }
    }

    /// Negative hyphenation limits mean `auto`.
    fn count_or_auto(&mut self, count: i16) -> Value {
        if count < 0 {
            self.ident(Keyword::Auto)
        } else {
            self.number(f64::from(count))
        }
    }

    #[allow(clippy::float_cmp)]
    fn iteration_count(&mut self, count: f64) -> Value {
        if count == ITERATION_COUNT_INFINITE {
            self.ident(Keyword::Infinite)
        } else {
            self.number(count)
        }
    }

    #[cfg(feature = "dashboard")]
    fn dashboard(&mut self, _id: PropertyId) -> Option<Value> {
        Some(self.dashboard_regions())
    }

    #[cfg(not(feature = "dashboard"))]
    fn dashboard(&mut self, id: PropertyId) -> Option<Value> {
        self.unimplemented(id)
    }

    #[cfg(not(feature = "svg"))]
    fn svg(&mut self, id: PropertyId) -> Option<Value> {
        self.unimplemented(id)
    }
}

/// Font sizes are laid out in whole pixels, rounded to nearest.
#[allow(clippy::cast_possible_truncation)]
fn computed_pixel_size(size: f32) -> i32 {
    (size + 0.5) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computed_pixel_size_rounds_to_nearest() {
        assert_eq!(computed_pixel_size(15.4), 15);
        assert_eq!(computed_pixel_size(15.5), 16);
        assert_eq!(computed_pixel_size(16.0), 16);
    }
}
