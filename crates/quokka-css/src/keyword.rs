//! CSS value keywords.
//!
//! [§ 3.4 Identifiers](https://www.w3.org/TR/css-values-4/#identifiers)
//!
//! "CSS identifiers, generically denoted by <ident>, consist of a sequence
//! of characters conforming to the <ident-token> grammar."
//!
//! Every keyword the engine understands is a variant of [`Keyword`]. Its
//! discriminant is the stable integer code stored in identifier primitives
//! and used to index the identifier cache.

use serde::Serialize;
use strum_macros::{EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

macro_rules! keywords {
    ($($variant:ident => $name:literal,)+) => {
        /// A CSS keyword identifier.
        ///
        /// Parsing is ASCII case-insensitive; the canonical spelling is the
        /// lowercase form returned by [`Keyword::name`].
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
            EnumString, IntoStaticStr, EnumIter, EnumCount, FromRepr,
        )]
        #[strum(ascii_case_insensitive)]
        #[repr(u16)]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $name, "`")]
                #[strum(serialize = $name)]
                #[serde(rename = $name)]
                $variant,
            )+
        }
    };
}

keywords! {
    // CSS-wide and shared
    Inherit => "inherit",
    Initial => "initial",
    Auto => "auto",
    None => "none",
    Normal => "normal",
    All => "all",
    Currentcolor => "currentcolor",
    Transparent => "transparent",

    // Named colors
    Aqua => "aqua",
    Black => "black",
    Blue => "blue",
    Fuchsia => "fuchsia",
    Gray => "gray",
    Green => "green",
    Lime => "lime",
    Maroon => "maroon",
    Navy => "navy",
    Olive => "olive",
    Orange => "orange",
    Purple => "purple",
    Red => "red",
    Silver => "silver",
    Teal => "teal",
    White => "white",
    Yellow => "yellow",

    // Fonts
    XxSmall => "xx-small",
    XSmall => "x-small",
    Small => "small",
    Medium => "medium",
    Large => "large",
    XLarge => "x-large",
    XxLarge => "xx-large",
    WebkitXxxLarge => "-webkit-xxx-large",
    Larger => "larger",
    Smaller => "smaller",
    Italic => "italic",
    Oblique => "oblique",
    SmallCaps => "small-caps",
    Bold => "bold",
    Bolder => "bolder",
    Lighter => "lighter",
    W100 => "100",
    W200 => "200",
    W300 => "300",
    W400 => "400",
    W500 => "500",
    W600 => "600",
    W700 => "700",
    W800 => "800",
    W900 => "900",
    Serif => "serif",
    SansSerif => "sans-serif",
    Cursive => "cursive",
    Fantasy => "fantasy",
    Monospace => "monospace",
    Antialiased => "antialiased",
    SubpixelAntialiased => "subpixel-antialiased",

    // Borders and outlines
    Hidden => "hidden",
    Inset => "inset",
    Groove => "groove",
    Ridge => "ridge",
    Outset => "outset",
    Dotted => "dotted",
    Dashed => "dashed",
    Solid => "solid",
    Double => "double",
    Thin => "thin",
    Thick => "thick",
    Separate => "separate",
    Collapse => "collapse",
    Border => "border",
    Lines => "lines",

    // Display and positioning
    Inline => "inline",
    Block => "block",
    ListItem => "list-item",
    RunIn => "run-in",
    Compact => "compact",
    InlineBlock => "inline-block",
    Table => "table",
    InlineTable => "inline-table",
    TableRowGroup => "table-row-group",
    TableHeaderGroup => "table-header-group",
    TableFooterGroup => "table-footer-group",
    TableRow => "table-row",
    TableColumnGroup => "table-column-group",
    TableColumn => "table-column",
    TableCell => "table-cell",
    TableCaption => "table-caption",
    WebkitBox => "-webkit-box",
    WebkitInlineBox => "-webkit-inline-box",
    Static => "static",
    Relative => "relative",
    Absolute => "absolute",
    Fixed => "fixed",
    Left => "left",
    Right => "right",
    Top => "top",
    Bottom => "bottom",
    Center => "center",
    Both => "both",
    Visible => "visible",
    Scroll => "scroll",
    Overlay => "overlay",
    WebkitMarquee => "-webkit-marquee",
    Show => "show",
    Hide => "hide",
    Intrinsic => "intrinsic",
    MinIntrinsic => "min-intrinsic",

    // Text
    Pre => "pre",
    PreWrap => "pre-wrap",
    PreLine => "pre-line",
    Nowrap => "nowrap",
    WebkitNowrap => "-webkit-nowrap",
    WebkitAuto => "-webkit-auto",
    Justify => "justify",
    WebkitLeft => "-webkit-left",
    WebkitRight => "-webkit-right",
    WebkitCenter => "-webkit-center",
    Start => "start",
    End => "end",
    Capitalize => "capitalize",
    Uppercase => "uppercase",
    Lowercase => "lowercase",
    Underline => "underline",
    Overline => "overline",
    LineThrough => "line-through",
    Blink => "blink",
    Baseline => "baseline",
    Middle => "middle",
    Sub => "sub",
    Super => "super",
    TextTop => "text-top",
    TextBottom => "text-bottom",
    WebkitBaselineMiddle => "-webkit-baseline-middle",
    Ltr => "ltr",
    Rtl => "rtl",
    Embed => "embed",
    BidiOverride => "bidi-override",
    WebkitIsolate => "-webkit-isolate",
    Clip => "clip",
    Ellipsis => "ellipsis",
    BreakAll => "break-all",
    BreakWord => "break-word",
    Optimizespeed => "optimizespeed",
    Optimizelegibility => "optimizelegibility",
    Geometricprecision => "geometricprecision",
    Optimizequality => "optimizequality",
    Manual => "manual",
    AfterWhiteSpace => "after-white-space",
    Over => "over",
    Under => "under",
    VerticalRight => "vertical-right",
    Upright => "upright",
    Logical => "logical",
    Visual => "visual",
    SpellOut => "spell-out",
    Digits => "digits",
    LiteralPunctuation => "literal-punctuation",
    NoPunctuation => "no-punctuation",
    Match => "match",

    // Text emphasis and line boxes
    Filled => "filled",
    Open => "open",
    Dot => "dot",
    DoubleCircle => "double-circle",
    Triangle => "triangle",
    Sesame => "sesame",
    Font => "font",
    Glyphs => "glyphs",
    Replaced => "replaced",
    InlineBox => "inline-box",

    // Backgrounds and masks
    Repeat => "repeat",
    NoRepeat => "no-repeat",
    Round => "round",
    Space => "space",
    RepeatX => "repeat-x",
    RepeatY => "repeat-y",
    Stretch => "stretch",
    Local => "local",
    BorderBox => "border-box",
    PaddingBox => "padding-box",
    ContentBox => "content-box",
    Text => "text",
    Contain => "contain",
    Cover => "cover",
    Clear => "clear",
    Copy => "copy",
    SourceOver => "source-over",
    SourceIn => "source-in",
    SourceOut => "source-out",
    SourceAtop => "source-atop",
    DestinationOver => "destination-over",
    DestinationIn => "destination-in",
    DestinationOut => "destination-out",
    DestinationAtop => "destination-atop",
    Xor => "xor",
    PlusDarker => "plus-darker",
    Highlight => "highlight",
    PlusLighter => "plus-lighter",

    // Lists
    Inside => "inside",
    Outside => "outside",
    Disc => "disc",
    Circle => "circle",
    Square => "square",
    Decimal => "decimal",
    DecimalLeadingZero => "decimal-leading-zero",
    LowerRoman => "lower-roman",
    UpperRoman => "upper-roman",
    LowerGreek => "lower-greek",
    LowerAlpha => "lower-alpha",
    LowerLatin => "lower-latin",
    UpperAlpha => "upper-alpha",
    UpperLatin => "upper-latin",
    Armenian => "armenian",
    Georgian => "georgian",

    // Interaction
    Crosshair => "crosshair",
    Default => "default",
    Pointer => "pointer",
    Move => "move",
    VerticalText => "vertical-text",
    Cell => "cell",
    ContextMenu => "context-menu",
    Alias => "alias",
    Progress => "progress",
    NoDrop => "no-drop",
    NotAllowed => "not-allowed",
    WebkitZoomIn => "-webkit-zoom-in",
    WebkitZoomOut => "-webkit-zoom-out",
    EResize => "e-resize",
    NeResize => "ne-resize",
    NwResize => "nw-resize",
    NResize => "n-resize",
    SeResize => "se-resize",
    SwResize => "sw-resize",
    SResize => "s-resize",
    WResize => "w-resize",
    EwResize => "ew-resize",
    NsResize => "ns-resize",
    NeswResize => "nesw-resize",
    NwseResize => "nwse-resize",
    ColResize => "col-resize",
    RowResize => "row-resize",
    AllScroll => "all-scroll",
    Wait => "wait",
    Help => "help",
    WebkitGrab => "-webkit-grab",
    WebkitGrabbing => "-webkit-grabbing",
    Stroke => "stroke",
    Fill => "fill",
    Painted => "painted",
    Visiblepainted => "visiblepainted",
    Visiblefill => "visiblefill",
    Visiblestroke => "visiblestroke",
    Horizontal => "horizontal",
    Vertical => "vertical",
    Element => "element",
    ReadOnly => "read-only",
    ReadWrite => "read-write",
    ReadWritePlaintextOnly => "read-write-plaintext-only",

    // Paging and columns
    Always => "always",
    Avoid => "avoid",
    Discard => "discard",

    // Animations and transitions
    Alternate => "alternate",
    Forwards => "forwards",
    Backwards => "backwards",
    Infinite => "infinite",
    Running => "running",
    Paused => "paused",
    Linear => "linear",
    Ease => "ease",
    EaseIn => "ease-in",
    EaseOut => "ease-out",
    EaseInOut => "ease-in-out",
    StepStart => "step-start",
    StepEnd => "step-end",

    // Appearance
    Checkbox => "checkbox",
    Radio => "radio",
    PushButton => "push-button",
    SquareButton => "square-button",
    Button => "button",
    DefaultButton => "default-button",
    Listbox => "listbox",
    Listitem => "listitem",
    Menulist => "menulist",
    MenulistButton => "menulist-button",
    Meter => "meter",
    ProgressBar => "progress-bar",
    SliderHorizontal => "slider-horizontal",
    SliderVertical => "slider-vertical",
    Searchfield => "searchfield",
    Textfield => "textfield",
    Textarea => "textarea",
    Caret => "caret",

    // Flexible boxes
    Reverse => "reverse",
    Single => "single",
    Multiple => "multiple",
    InlineAxis => "inline-axis",
    BlockAxis => "block-axis",

    // Reflection, marquee and 3D
    Above => "above",
    Below => "below",
    Ahead => "ahead",
    Up => "up",
    Down => "down",
    Slide => "slide",
    Flat => "flat",
    Preserve3d => "preserve-3d",
    Srgb => "srgb",
    Linearrgb => "linearrgb",

    // Writing modes
    HorizontalTb => "horizontal-tb",
    VerticalRl => "vertical-rl",
    VerticalLr => "vertical-lr",
    HorizontalBt => "horizontal-bt",
    LrTb => "lr-tb",
    RlTb => "rl-tb",
    TbRl => "tb-rl",
    Lr => "lr",
    Rl => "rl",
    Tb => "tb",

    // SVG
    Nonzero => "nonzero",
    Evenodd => "evenodd",
    Butt => "butt",
    Miter => "miter",
    Bevel => "bevel",
    Crispedges => "crispedges",
    BeforeEdge => "before-edge",
    TextBeforeEdge => "text-before-edge",
    Central => "central",
    AfterEdge => "after-edge",
    TextAfterEdge => "text-after-edge",
    Ideographic => "ideographic",
    Alphabetic => "alphabetic",
    Hanging => "hanging",
    Mathematical => "mathematical",
    UseScript => "use-script",
    NoChange => "no-change",
    ResetSize => "reset-size",
    NonScalingStroke => "non-scaling-stroke",
}

impl Keyword {
    /// The canonical (lowercase) spelling.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Look up a keyword by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// The stable integer code of this keyword.
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// The keyword for `code`, if it names one.
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        Self::from_repr(code)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_names_round_trip_through_codes() {
        for keyword in Keyword::iter() {
            assert_eq!(Keyword::from_code(keyword.code()), Some(keyword));
            assert_eq!(Keyword::from_name(keyword.name()), Some(keyword));
        }
        assert_eq!(Keyword::from_code(u16::try_from(Keyword::COUNT).unwrap()), None);
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(Keyword::from_name("CurrentColor"), Some(Keyword::Currentcolor));
        assert_eq!(Keyword::from_name("-WEBKIT-BOX"), Some(Keyword::WebkitBox));
        assert_eq!(Keyword::from_name("no-such-keyword"), None);
    }
}
