//! Property → strategy registrations.

use std::sync::Arc;

use strum::IntoEnumIterator;

use crate::keyword::Keyword;
use crate::property::PropertyId;
use crate::style::Style;
use crate::style::fill_layer::{FillLayer, FillLayers};

use super::PropertyApplyTable;
use super::handlers::{
    ApplyAuto, ApplyBorderRadius, ApplyClip, ApplyColor, ApplyComputeLength, ApplyDefault, ApplyDirectionAware,
    ApplyExpanding, ApplyFillLayer, ApplyFontWeight, ApplyImage, ApplyLength, ApplyLineHeight,
    ApplyNumberOrKeyword, ApplyOutlineStyle, ApplyString, ApplyTextDecoration, ApplyVerticalAlign, ExpandValue,
    LengthKeywords, map_image, map_keyword, map_position_x, map_position_y, map_size,
};

macro_rules! default_handler {
    ($($field:ident).+) => {
        Arc::new(ApplyDefault::new(|style| style.$($field).+, |style, value| style.$($field).+ = value))
    };
}

macro_rules! color_handler {
    ($($field:ident).+, visited $visited:ident) => {
        ApplyColor::new(
            |style| style.$($field).+,
            |style, color| style.$($field).+ = color,
            |style, color| style.visited.$visited = color,
        )
    };
}

macro_rules! length_handler {
    ($field:ident, $keywords:ident) => {
        Arc::new(ApplyLength::new(
            |style| style.$field,
            |style, length| style.$field = length,
            LengthKeywords::$keywords,
        ))
    };
}

macro_rules! compute_length_handler {
    ($($field:ident).+) => {
        ApplyComputeLength::new(|style| style.$($field).+, |style, length| style.$($field).+ = length)
    };
}

pub(super) fn register_all(table: &mut PropertyApplyTable) {
    register_colors(table);
    register_keywords(table);
    register_lengths(table);
    register_fill_layers(table);
    register_special(table);
    register_expanding(table);
    register_aliases(table);
    register_direction_aware(table);
}

fn register_colors(table: &mut PropertyApplyTable) {
    table.set_property_handler(
        PropertyId::Color,
        Arc::new(color_handler!(color, visited color).inheriting_on_currentcolor()),
    );
    let colors: [(PropertyId, ApplyColor); 10] = [
        (PropertyId::BackgroundColor, color_handler!(background_color, visited background_color)),
        (PropertyId::BorderTopColor, color_handler!(border_top.color, visited border_top_color)),
        (PropertyId::BorderRightColor, color_handler!(border_right.color, visited border_right_color)),
        (PropertyId::BorderBottomColor, color_handler!(border_bottom.color, visited border_bottom_color)),
        (PropertyId::BorderLeftColor, color_handler!(border_left.color, visited border_left_color)),
        (PropertyId::OutlineColor, color_handler!(outline.color, visited outline_color)),
        (PropertyId::WebkitColumnRuleColor, color_handler!(column_rule.color, visited column_rule_color)),
        (PropertyId::WebkitTextEmphasisColor, color_handler!(text_emphasis_color, visited text_emphasis_color)),
        (PropertyId::WebkitTextFillColor, color_handler!(text_fill_color, visited text_fill_color)),
        (PropertyId::WebkitTextStrokeColor, color_handler!(text_stroke_color, visited text_stroke_color)),
    ];
    for (id, handler) in colors {
        table.set_property_handler(id, Arc::new(handler));
    }
}

fn register_keywords(table: &mut PropertyApplyTable) {
    use PropertyId as P;

    table.set_property_handler(P::BorderCollapse, default_handler!(border_collapse));
    table.set_property_handler(P::BoxSizing, default_handler!(box_sizing));
    table.set_property_handler(P::CaptionSide, default_handler!(caption_side));
    table.set_property_handler(P::Clear, default_handler!(clear));
    table.set_property_handler(P::Direction, default_handler!(direction));
    table.set_property_handler(P::Display, default_handler!(display));
    table.set_property_handler(P::EmptyCells, default_handler!(empty_cells));
    table.set_property_handler(P::Float, default_handler!(float));
    table.set_property_handler(P::FontStyle, default_handler!(font.style));
    table.set_property_handler(P::FontVariant, default_handler!(font.variant));
    table.set_property_handler(P::ListStylePosition, default_handler!(list_style_position));
    table.set_property_handler(P::ListStyleType, default_handler!(list_style_type));
    table.set_property_handler(P::Opacity, default_handler!(opacity));
    table.set_property_handler(P::Orphans, default_handler!(orphans));
    table.set_property_handler(P::OverflowX, default_handler!(overflow_x));
    table.set_property_handler(P::OverflowY, default_handler!(overflow_y));
    table.set_property_handler(P::PageBreakAfter, default_handler!(page_break_after));
    table.set_property_handler(P::PageBreakBefore, default_handler!(page_break_before));
    table.set_property_handler(P::PageBreakInside, default_handler!(page_break_inside));
    table.set_property_handler(P::PointerEvents, default_handler!(pointer_events));
    table.set_property_handler(P::Position, default_handler!(position));
    table.set_property_handler(P::Resize, default_handler!(resize));
    table.set_property_handler(P::Speak, default_handler!(speak));
    table.set_property_handler(P::TableLayout, default_handler!(table_layout));
    table.set_property_handler(P::TextAlign, default_handler!(text_align));
    table.set_property_handler(P::TextOverflow, default_handler!(text_overflow));
    table.set_property_handler(P::TextRendering, default_handler!(font.text_rendering));
    table.set_property_handler(P::TextTransform, default_handler!(text_transform));
    table.set_property_handler(P::UnicodeBidi, default_handler!(unicode_bidi));
    table.set_property_handler(P::Visibility, default_handler!(visibility));
    table.set_property_handler(P::WhiteSpace, default_handler!(white_space));
    table.set_property_handler(P::Widows, default_handler!(widows));
    table.set_property_handler(P::WordBreak, default_handler!(word_break));
    table.set_property_handler(P::WordWrap, default_handler!(word_wrap));

    table.set_property_handler(P::BorderTopStyle, default_handler!(border_top.style));
    table.set_property_handler(P::BorderRightStyle, default_handler!(border_right.style));
    table.set_property_handler(P::BorderBottomStyle, default_handler!(border_bottom.style));
    table.set_property_handler(P::BorderLeftStyle, default_handler!(border_left.style));
    table.set_property_handler(P::WebkitColumnRuleStyle, default_handler!(column_rule.style));

    table.set_property_handler(P::WebkitAppearance, default_handler!(appearance));
    table.set_property_handler(P::WebkitBackfaceVisibility, default_handler!(backface_visibility));
    table.set_property_handler(P::WebkitBorderFit, default_handler!(border_fit));
    table.set_property_handler(P::WebkitBoxAlign, default_handler!(box_align));
    table.set_property_handler(P::WebkitBoxDirection, default_handler!(box_direction));
    table.set_property_handler(P::WebkitBoxFlex, default_handler!(box_flex));
    table.set_property_handler(P::WebkitBoxFlexGroup, default_handler!(box_flex_group));
    table.set_property_handler(P::WebkitBoxLines, default_handler!(box_lines));
    table.set_property_handler(P::WebkitBoxOrdinalGroup, default_handler!(box_ordinal_group));
    table.set_property_handler(P::WebkitBoxOrient, default_handler!(box_orient));
    table.set_property_handler(P::WebkitBoxPack, default_handler!(box_pack));
    table.set_property_handler(P::WebkitColorCorrection, default_handler!(color_space));
    table.set_property_handler(P::WebkitColumnBreakAfter, default_handler!(column_break_after));
    table.set_property_handler(P::WebkitColumnBreakBefore, default_handler!(column_break_before));
    table.set_property_handler(P::WebkitColumnBreakInside, default_handler!(column_break_inside));
    table.set_property_handler(P::WebkitColumnSpan, default_handler!(column_span));
    table.set_property_handler(P::WebkitFontSmoothing, default_handler!(font.font_smoothing));
    table.set_property_handler(P::WebkitHyphens, default_handler!(hyphens));
    table.set_property_handler(P::WebkitLineBreak, default_handler!(line_break));
    table.set_property_handler(P::WebkitLineClamp, default_handler!(line_clamp));
    table.set_property_handler(P::WebkitMarginAfterCollapse, default_handler!(margin_after_collapse));
    table.set_property_handler(P::WebkitMarginBeforeCollapse, default_handler!(margin_before_collapse));
    table.set_property_handler(P::WebkitMarqueeDirection, default_handler!(marquee_direction));
    table.set_property_handler(P::WebkitMarqueeSpeed, default_handler!(marquee_speed));
    table.set_property_handler(P::WebkitMarqueeStyle, default_handler!(marquee_behavior));
    table.set_property_handler(
        P::WebkitMatchNearestMailBlockquoteColor,
        default_handler!(match_nearest_mail_blockquote_color),
    );
    table.set_property_handler(P::WebkitNbspMode, default_handler!(nbsp_mode));
    table.set_property_handler(P::WebkitRtlOrdering, default_handler!(rtl_ordering));
    table.set_property_handler(P::WebkitTextCombine, default_handler!(text_combine));
    table.set_property_handler(P::WebkitTextEmphasisPosition, default_handler!(text_emphasis_position));
    table.set_property_handler(P::WebkitTextOrientation, default_handler!(font.text_orientation));
    table.set_property_handler(P::WebkitTextSecurity, default_handler!(text_security));
    table.set_property_handler(P::WebkitTextSizeAdjust, default_handler!(text_size_adjust));
    table.set_property_handler(P::WebkitTransformStyle, default_handler!(transform_style_3d));
    table.set_property_handler(P::WebkitUserDrag, default_handler!(user_drag));
    table.set_property_handler(P::WebkitUserModify, default_handler!(user_modify));
    table.set_property_handler(P::WebkitUserSelect, default_handler!(user_select));
    table.set_property_handler(P::WebkitWritingMode, default_handler!(writing_mode));
}

fn register_lengths(table: &mut PropertyApplyTable) {
    use PropertyId as P;

    table.set_property_handler(P::Width, length_handler!(width, SIZE));
    table.set_property_handler(P::Height, length_handler!(height, SIZE));
    table.set_property_handler(P::MinWidth, length_handler!(min_width, SIZE));
    table.set_property_handler(P::MinHeight, length_handler!(min_height, SIZE));
    table.set_property_handler(P::MaxWidth, length_handler!(max_width, MAX_SIZE));
    table.set_property_handler(P::MaxHeight, length_handler!(max_height, MAX_SIZE));
    table.set_property_handler(P::Top, length_handler!(top, AUTO));
    table.set_property_handler(P::Right, length_handler!(right, AUTO));
    table.set_property_handler(P::Bottom, length_handler!(bottom, AUTO));
    table.set_property_handler(P::Left, length_handler!(left, AUTO));
    table.set_property_handler(P::MarginTop, length_handler!(margin_top, AUTO));
    table.set_property_handler(P::MarginRight, length_handler!(margin_right, AUTO));
    table.set_property_handler(P::MarginBottom, length_handler!(margin_bottom, AUTO));
    table.set_property_handler(P::MarginLeft, length_handler!(margin_left, AUTO));
    table.set_property_handler(P::PaddingTop, length_handler!(padding_top, PLAIN));
    table.set_property_handler(P::PaddingRight, length_handler!(padding_right, PLAIN));
    table.set_property_handler(P::PaddingBottom, length_handler!(padding_bottom, PLAIN));
    table.set_property_handler(P::PaddingLeft, length_handler!(padding_left, PLAIN));
    table.set_property_handler(P::TextIndent, length_handler!(text_indent, PLAIN));
    table.set_property_handler(P::WebkitMarqueeIncrement, length_handler!(marquee_increment, PLAIN));
    table.set_property_handler(P::WebkitTransformOriginX, length_handler!(transform_origin_x, PLAIN));
    table.set_property_handler(P::WebkitTransformOriginY, length_handler!(transform_origin_y, PLAIN));
    table.set_property_handler(P::WebkitPerspectiveOriginX, length_handler!(perspective_origin_x, PLAIN));
    table.set_property_handler(P::WebkitPerspectiveOriginY, length_handler!(perspective_origin_y, PLAIN));

    table.set_property_handler(P::BorderTopWidth, Arc::new(compute_length_handler!(border_top.width).with_thickness()));
    table.set_property_handler(
        P::BorderRightWidth,
        Arc::new(compute_length_handler!(border_right.width).with_thickness()),
    );
    table.set_property_handler(
        P::BorderBottomWidth,
        Arc::new(compute_length_handler!(border_bottom.width).with_thickness()),
    );
    table.set_property_handler(P::BorderLeftWidth, Arc::new(compute_length_handler!(border_left.width).with_thickness()));
    table.set_property_handler(P::OutlineWidth, Arc::new(compute_length_handler!(outline.width).with_thickness()));
    table.set_property_handler(
        P::WebkitColumnRuleWidth,
        Arc::new(compute_length_handler!(column_rule.width).with_thickness()),
    );
    table.set_property_handler(
        P::WebkitTextStrokeWidth,
        Arc::new(compute_length_handler!(text_stroke_width).with_thickness()),
    );
    table.set_property_handler(P::LetterSpacing, Arc::new(compute_length_handler!(letter_spacing).with_normal()));
    table.set_property_handler(P::WordSpacing, Arc::new(compute_length_handler!(word_spacing).with_normal()));
    table.set_property_handler(P::OutlineOffset, Arc::new(compute_length_handler!(outline_offset)));
    table.set_property_handler(
        P::WebkitBorderHorizontalSpacing,
        Arc::new(compute_length_handler!(horizontal_border_spacing)),
    );
    table.set_property_handler(
        P::WebkitBorderVerticalSpacing,
        Arc::new(compute_length_handler!(vertical_border_spacing)),
    );
    table.set_property_handler(P::WebkitTransformOriginZ, Arc::new(compute_length_handler!(transform_origin_z)));

    table.set_property_handler(
        P::ZIndex,
        Arc::new(ApplyAuto::new(|style| style.z_index, |style, value| style.z_index = value)),
    );
    table.set_property_handler(
        P::WebkitColumnCount,
        Arc::new(ApplyAuto::new(|style| style.column_count, |style, value| style.column_count = value)),
    );
    table.set_property_handler(
        P::WebkitColumnGap,
        Arc::new(
            ApplyAuto::new(|style| style.column_gap, |style, value| style.column_gap = value)
                .with_auto_keyword(Keyword::Normal)
                .computing_length(),
        ),
    );
    table.set_property_handler(
        P::WebkitColumnWidth,
        Arc::new(
            ApplyAuto::new(|style| style.column_width, |style, value| style.column_width = value).computing_length(),
        ),
    );
    table.set_property_handler(
        P::WebkitPerspective,
        Arc::new(
            ApplyAuto::new(|style| style.perspective, |style, value| style.perspective = value)
                .with_auto_keyword(Keyword::None)
                .computing_length(),
        ),
    );
}

/// The per-layer properties of one layer list.
struct FillLayerProperties {
    attachment: PropertyId,
    clip: PropertyId,
    origin: PropertyId,
    composite: PropertyId,
    image: PropertyId,
    repeat_x: PropertyId,
    repeat_y: PropertyId,
    position_x: PropertyId,
    position_y: PropertyId,
    size: PropertyId,
}

const BACKGROUND: FillLayerProperties = FillLayerProperties {
    attachment: PropertyId::BackgroundAttachment,
    clip: PropertyId::BackgroundClip,
    origin: PropertyId::BackgroundOrigin,
    composite: PropertyId::WebkitBackgroundComposite,
    image: PropertyId::BackgroundImage,
    repeat_x: PropertyId::BackgroundRepeatX,
    repeat_y: PropertyId::BackgroundRepeatY,
    position_x: PropertyId::BackgroundPositionX,
    position_y: PropertyId::BackgroundPositionY,
    size: PropertyId::BackgroundSize,
};

const MASK: FillLayerProperties = FillLayerProperties {
    attachment: PropertyId::WebkitMaskAttachment,
    clip: PropertyId::WebkitMaskClip,
    origin: PropertyId::WebkitMaskOrigin,
    composite: PropertyId::WebkitMaskComposite,
    image: PropertyId::WebkitMaskImage,
    repeat_x: PropertyId::WebkitMaskRepeatX,
    repeat_y: PropertyId::WebkitMaskRepeatY,
    position_x: PropertyId::WebkitMaskPositionX,
    position_y: PropertyId::WebkitMaskPositionY,
    size: PropertyId::WebkitMaskSize,
};

fn register_fill_layers(table: &mut PropertyApplyTable) {
    register_fill_layer_list(table, &BACKGROUND, |style| &style.background_layers, |style| {
        &mut style.background_layers
    });
    register_fill_layer_list(table, &MASK, |style| &style.mask_layers, |style| &mut style.mask_layers);
}

fn register_fill_layer_list(
    table: &mut PropertyApplyTable,
    properties: &FillLayerProperties,
    layers: fn(&Style) -> &FillLayers,
    layers_mut: fn(&mut Style) -> &mut FillLayers,
) {
    macro_rules! layer {
        ($id:ident: $get:ident, $set:ident, $is_set:ident, $clear:ident, $initial:ident, $map:expr) => {
            table.set_property_handler(
                properties.$id,
                Arc::new(ApplyFillLayer {
                    layers,
                    layers_mut,
                    get: FillLayer::$get,
                    set: FillLayer::$set,
                    is_set: FillLayer::$is_set,
                    clear: FillLayer::$clear,
                    initial: FillLayer::$initial,
                    map: $map,
                }),
            )
        };
    }

    layer!(attachment: attachment, set_attachment, is_attachment_set, clear_attachment, initial_attachment, map_keyword);
    layer!(clip: clip, set_clip, is_clip_set, clear_clip, initial_clip, map_keyword);
    layer!(origin: origin, set_origin, is_origin_set, clear_origin, initial_origin, map_keyword);
    layer!(composite: composite, set_composite, is_composite_set, clear_composite, initial_composite, map_keyword);
    layer!(image: image, set_image, is_image_set, clear_image, initial_image, map_image);
    layer!(repeat_x: repeat_x, set_repeat_x, is_repeat_x_set, clear_repeat_x, initial_repeat, map_keyword);
    layer!(repeat_y: repeat_y, set_repeat_y, is_repeat_y_set, clear_repeat_y, initial_repeat, map_keyword);
    layer!(position_x: x_position, set_x_position, is_x_position_set, clear_x_position, initial_position, map_position_x);
    layer!(position_y: y_position, set_y_position, is_y_position_set, clear_y_position, initial_position, map_position_y);
    layer!(size: size, set_size, is_size_set, clear_size, initial_size, map_size);
}

fn register_special(table: &mut PropertyApplyTable) {
    use PropertyId as P;

    table.set_property_handler(
        P::WebkitHighlight,
        Arc::new(ApplyString::new(
            |style| style.highlight.clone(),
            |style, value| style.highlight = value,
            Keyword::None,
        )),
    );
    table.set_property_handler(
        P::WebkitHyphenateCharacter,
        Arc::new(ApplyString::new(
            |style| style.hyphenation_string.clone(),
            |style, value| style.hyphenation_string = value,
            Keyword::Auto,
        )),
    );
    table.set_property_handler(
        P::WebkitLocale,
        Arc::new(ApplyString::new(
            |style| style.locale.clone(),
            |style, value| style.locale = value,
            Keyword::Auto,
        )),
    );

    table.set_property_handler(
        P::WebkitHyphenateLimitAfter,
        Arc::new(ApplyNumberOrKeyword::new(
            |style| style.hyphenation_limit_after,
            |style, value| style.hyphenation_limit_after = value,
            Keyword::Auto,
            -1,
        )),
    );
    table.set_property_handler(
        P::WebkitHyphenateLimitBefore,
        Arc::new(ApplyNumberOrKeyword::new(
            |style| style.hyphenation_limit_before,
            |style, value| style.hyphenation_limit_before = value,
            Keyword::Auto,
            -1,
        )),
    );
    table.set_property_handler(
        P::WebkitMarqueeRepetition,
        Arc::new(ApplyNumberOrKeyword::new(
            |style| style.marquee_loop_count,
            |style, value| style.marquee_loop_count = value,
            Keyword::Infinite,
            -1,
        )),
    );

    table.set_property_handler(
        P::ListStyleImage,
        Arc::new(ApplyImage::new(
            |style| style.list_style_image.clone(),
            |style, image| style.list_style_image = image,
        )),
    );

    let radii: [(PropertyId, ApplyBorderRadius); 4] = [
        (
            P::BorderTopLeftRadius,
            ApplyBorderRadius::new(|style| style.border_top_left_radius, |style, r| style.border_top_left_radius = r),
        ),
        (
            P::BorderTopRightRadius,
            ApplyBorderRadius::new(|style| style.border_top_right_radius, |style, r| style.border_top_right_radius = r),
        ),
        (
            P::BorderBottomLeftRadius,
            ApplyBorderRadius::new(
                |style| style.border_bottom_left_radius,
                |style, r| style.border_bottom_left_radius = r,
            ),
        ),
        (
            P::BorderBottomRightRadius,
            ApplyBorderRadius::new(
                |style| style.border_bottom_right_radius,
                |style, r| style.border_bottom_right_radius = r,
            ),
        ),
    ];
    for (id, handler) in radii {
        table.set_property_handler(id, Arc::new(handler));
    }

    table.set_property_handler(P::Clip, Arc::new(ApplyClip));
    table.set_property_handler(P::LineHeight, Arc::new(ApplyLineHeight));
    table.set_property_handler(P::TextDecoration, Arc::new(ApplyTextDecoration));
    table.set_property_handler(P::VerticalAlign, Arc::new(ApplyVerticalAlign));
    table.set_property_handler(P::OutlineStyle, Arc::new(ApplyOutlineStyle));
    table.set_property_handler(P::FontWeight, Arc::new(ApplyFontWeight));
}

fn expand(table: &mut PropertyApplyTable, id: PropertyId, value: ExpandValue, longhands: &[PropertyId]) {
    let handlers = longhands
        .iter()
        .map(|&longhand| Arc::clone(table.shared_handler(longhand)))
        .collect();
    table.set_property_handler(id, Arc::new(ApplyExpanding::new(value, handlers)));
}

fn register_expanding(table: &mut PropertyApplyTable) {
    use ExpandValue::{Forward, Suppress};
    use PropertyId as P;

    expand(table, P::Overflow, Forward, &[P::OverflowX, P::OverflowY]);

    expand(table, P::BackgroundPosition, Suppress, &[P::BackgroundPositionX, P::BackgroundPositionY]);
    expand(table, P::BackgroundRepeat, Suppress, &[P::BackgroundRepeatX, P::BackgroundRepeatY]);
    expand(table, P::WebkitMaskPosition, Suppress, &[P::WebkitMaskPositionX, P::WebkitMaskPositionY]);
    expand(table, P::WebkitMaskRepeat, Suppress, &[P::WebkitMaskRepeatX, P::WebkitMaskRepeatY]);
    expand(
        table,
        P::BorderSpacing,
        Suppress,
        &[P::WebkitBorderHorizontalSpacing, P::WebkitBorderVerticalSpacing],
    );
    expand(
        table,
        P::WebkitTransformOrigin,
        Suppress,
        &[P::WebkitTransformOriginX, P::WebkitTransformOriginY, P::WebkitTransformOriginZ],
    );
    expand(
        table,
        P::WebkitPerspectiveOrigin,
        Suppress,
        &[P::WebkitPerspectiveOriginX, P::WebkitPerspectiveOriginY],
    );

    expand(table, P::BorderTop, Suppress, &[P::BorderTopColor, P::BorderTopStyle, P::BorderTopWidth]);
    expand(table, P::BorderRight, Suppress, &[P::BorderRightColor, P::BorderRightStyle, P::BorderRightWidth]);
    expand(table, P::BorderBottom, Suppress, &[P::BorderBottomColor, P::BorderBottomStyle, P::BorderBottomWidth]);
    expand(table, P::BorderLeft, Suppress, &[P::BorderLeftColor, P::BorderLeftStyle, P::BorderLeftWidth]);
    expand(
        table,
        P::BorderColor,
        Suppress,
        &[P::BorderTopColor, P::BorderRightColor, P::BorderBottomColor, P::BorderLeftColor],
    );
    expand(
        table,
        P::BorderStyle,
        Suppress,
        &[P::BorderTopStyle, P::BorderRightStyle, P::BorderBottomStyle, P::BorderLeftStyle],
    );
    expand(
        table,
        P::BorderWidth,
        Suppress,
        &[P::BorderTopWidth, P::BorderRightWidth, P::BorderBottomWidth, P::BorderLeftWidth],
    );
    expand(table, P::Border, Suppress, &[P::BorderStyle, P::BorderWidth, P::BorderColor]);
    expand(
        table,
        P::BorderRadius,
        Suppress,
        &[
            P::BorderTopLeftRadius,
            P::BorderTopRightRadius,
            P::BorderBottomRightRadius,
            P::BorderBottomLeftRadius,
        ],
    );
    expand(
        table,
        P::Margin,
        Suppress,
        &[P::MarginTop, P::MarginRight, P::MarginBottom, P::MarginLeft],
    );
    expand(
        table,
        P::Padding,
        Suppress,
        &[P::PaddingTop, P::PaddingRight, P::PaddingBottom, P::PaddingLeft],
    );
    expand(table, P::Outline, Suppress, &[P::OutlineColor, P::OutlineStyle, P::OutlineWidth]);
    expand(
        table,
        P::WebkitColumnRule,
        Suppress,
        &[P::WebkitColumnRuleColor, P::WebkitColumnRuleStyle, P::WebkitColumnRuleWidth],
    );
    expand(table, P::WebkitColumns, Suppress, &[P::WebkitColumnWidth, P::WebkitColumnCount]);
    expand(
        table,
        P::WebkitMarginCollapse,
        Suppress,
        &[P::WebkitMarginBeforeCollapse, P::WebkitMarginAfterCollapse],
    );
    expand(
        table,
        P::ListStyle,
        Suppress,
        &[P::ListStyleType, P::ListStylePosition, P::ListStyleImage],
    );
    expand(table, P::WebkitTextStroke, Suppress, &[P::WebkitTextStrokeColor, P::WebkitTextStrokeWidth]);
    expand(
        table,
        P::WebkitMarquee,
        Suppress,
        &[
            P::WebkitMarqueeDirection,
            P::WebkitMarqueeIncrement,
            P::WebkitMarqueeRepetition,
            P::WebkitMarqueeStyle,
        ],
    );
}

fn register_aliases(table: &mut PropertyApplyTable) {
    use PropertyId as P;

    table.set_alias(P::WebkitBackgroundClip, P::BackgroundClip);
    table.set_alias(P::WebkitBackgroundOrigin, P::BackgroundOrigin);
    table.set_alias(P::WebkitBackgroundSize, P::BackgroundSize);
    table.set_alias(P::WebkitBorderRadius, P::BorderRadius);
    table.set_alias(P::WebkitMarginTopCollapse, P::WebkitMarginBeforeCollapse);
    table.set_alias(P::WebkitMarginBottomCollapse, P::WebkitMarginAfterCollapse);
}

fn register_direction_aware(table: &mut PropertyApplyTable) {
    for id in PropertyId::iter().filter(|id| id.is_direction_aware()) {
        table.set_property_handler(id, Arc::new(ApplyDirectionAware::new(id)));
    }
}
