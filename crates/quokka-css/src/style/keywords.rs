//! Keyword-valued style enumerations and their two-way keyword mappings.
//!
//! Each enumerated property stores a small typed enum on the style. The
//! [`keyword_enum!`] macro declares the enum together with the keyword each
//! variant reads from and serializes to. Extra keywords after `|` are
//! accepted on input only.

use serde::Serialize;

use crate::keyword::Keyword;
use crate::values::{PrimitiveValue, UnitKind};

use super::writing_mode::{TextDirection, WritingMode};

/// A style enumeration with a keyword spelling for every variant.
pub trait KeywordMapped: Sized + Copy {
    /// The keyword this value serializes to.
    fn keyword(self) -> Keyword;

    /// The value a keyword selects, if any.
    fn from_keyword(keyword: Keyword) -> Option<Self>;
}

/// Conversion from a parsed primitive into a typed style value.
///
/// Returns `None` when the primitive has the wrong kind, in which case the
/// caller leaves the style untouched.
pub trait FromCssPrimitive: Sized {
    /// Decode `value`.
    fn from_css_primitive(value: &PrimitiveValue) -> Option<Self>;
}

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $keyword:ident $(| $alias:ident)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
            ::serde::Serialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[doc = concat!("Maps to [`Keyword::", stringify!($keyword), "`](crate::keyword::Keyword).")]
                $variant,
            )+
        }

        impl $crate::style::keywords::KeywordMapped for $name {
            fn keyword(self) -> $crate::keyword::Keyword {
                match self {
                    $(Self::$variant => $crate::keyword::Keyword::$keyword,)+
                }
            }

            #[allow(unreachable_patterns)]
            fn from_keyword(keyword: $crate::keyword::Keyword) -> Option<Self> {
                match keyword {
                    $(
                        $crate::keyword::Keyword::$keyword
                        $(| $crate::keyword::Keyword::$alias)* => Some(Self::$variant),
                    )+
                    _ => None,
                }
            }
        }

        impl $crate::style::keywords::FromCssPrimitive for $name {
            fn from_css_primitive(value: &$crate::values::PrimitiveValue) -> Option<Self> {
                value
                    .keyword()
                    .and_then(<Self as $crate::style::keywords::KeywordMapped>::from_keyword)
            }
        }
    };
}

pub(crate) use keyword_enum;

macro_rules! numeric_from_primitive {
    ($($ty:ty),+) => {
        $(
            impl FromCssPrimitive for $ty {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                fn from_css_primitive(value: &PrimitiveValue) -> Option<Self> {
                    value.is_number().then(|| value.double_value() as $ty)
                }
            }
        )+
    };
}

numeric_from_primitive!(f32, f64, i16, i32, u16, u32);

impl KeywordMapped for TextDirection {
    fn keyword(self) -> Keyword {
        match self {
            Self::Ltr => Keyword::Ltr,
            Self::Rtl => Keyword::Rtl,
        }
    }

    fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Ltr => Some(Self::Ltr),
            Keyword::Rtl => Some(Self::Rtl),
            _ => None,
        }
    }
}

impl FromCssPrimitive for TextDirection {
    fn from_css_primitive(value: &PrimitiveValue) -> Option<Self> {
        value.keyword().and_then(Self::from_keyword)
    }
}

impl KeywordMapped for WritingMode {
    fn keyword(self) -> Keyword {
        match self {
            Self::HorizontalTb => Keyword::HorizontalTb,
            Self::VerticalRl => Keyword::VerticalRl,
            Self::VerticalLr => Keyword::VerticalLr,
            Self::HorizontalBt => Keyword::HorizontalBt,
        }
    }

    fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::HorizontalTb => Some(Self::HorizontalTb),
            Keyword::VerticalRl => Some(Self::VerticalRl),
            Keyword::VerticalLr => Some(Self::VerticalLr),
            Keyword::HorizontalBt => Some(Self::HorizontalBt),
            _ => None,
        }
    }
}

impl FromCssPrimitive for WritingMode {
    fn from_css_primitive(value: &PrimitiveValue) -> Option<Self> {
        value.keyword().and_then(Self::from_keyword)
    }
}

keyword_enum! {
    /// [§ 4 Border Style](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    pub enum BorderStyle {
        #[default]
        None = None,
        Hidden = Hidden,
        Inset = Inset,
        Groove = Groove,
        Outset = Outset,
        Ridge = Ridge,
        Dotted = Dotted,
        Dashed = Dashed,
        Solid = Solid,
        Double = Double,
    }
}

keyword_enum! {
    /// [§ 2 'display'](https://www.w3.org/TR/css-display-3/#the-display-properties)
    pub enum Display {
        #[default]
        Inline = Inline,
        Block = Block,
        ListItem = ListItem,
        RunIn = RunIn,
        Compact = Compact,
        InlineBlock = InlineBlock,
        Table = Table,
        InlineTable = InlineTable,
        TableRowGroup = TableRowGroup,
        TableHeaderGroup = TableHeaderGroup,
        TableFooterGroup = TableFooterGroup,
        TableRow = TableRow,
        TableColumnGroup = TableColumnGroup,
        TableColumn = TableColumn,
        TableCell = TableCell,
        TableCaption = TableCaption,
        Box = WebkitBox,
        InlineBox = WebkitInlineBox,
        None = None,
    }
}

keyword_enum! {
    /// [§ 3.1 'position'](https://www.w3.org/TR/css-position-3/#position-property)
    pub enum Position {
        #[default]
        Static = Static,
        Relative = Relative,
        Absolute = Absolute,
        Fixed = Fixed,
    }
}

keyword_enum! {
    /// `float`
    pub enum Float {
        #[default]
        None = None,
        Left = Left,
        Right = Right,
    }
}

keyword_enum! {
    /// `clear`
    pub enum Clear {
        #[default]
        None = None,
        Left = Left,
        Right = Right,
        Both = Both,
    }
}

keyword_enum! {
    /// `visibility`, also `-webkit-backface-visibility`
    pub enum Visibility {
        #[default]
        Visible = Visible,
        Hidden = Hidden,
        Collapse = Collapse,
    }
}

keyword_enum! {
    /// `overflow-x` / `overflow-y`. Variant order matters: the `overflow`
    /// shorthand reports the larger of the two axes.
    pub enum Overflow {
        #[default]
        Visible = Visible,
        Hidden = Hidden,
        Scroll = Scroll,
        Auto = Auto,
        Overlay = Overlay,
        Marquee = WebkitMarquee,
    }
}

keyword_enum! {
    /// `white-space`
    pub enum WhiteSpace {
        #[default]
        Normal = Normal,
        Pre = Pre,
        PreWrap = PreWrap,
        PreLine = PreLine,
        NoWrap = Nowrap,
        KhtmlNoWrap = WebkitNowrap,
    }
}

keyword_enum! {
    /// `text-align`
    pub enum TextAlign {
        #[default]
        Auto = WebkitAuto,
        Left = Left,
        Right = Right,
        Center = Center,
        Justify = Justify,
        WebkitLeft = WebkitLeft,
        WebkitRight = WebkitRight,
        WebkitCenter = WebkitCenter,
        Start = Start,
        End = End,
    }
}

keyword_enum! {
    /// `text-transform`
    pub enum TextTransform {
        Capitalize = Capitalize,
        Uppercase = Uppercase,
        Lowercase = Lowercase,
        #[default]
        None = None,
    }
}

keyword_enum! {
    /// Keyword forms of `vertical-align`; the length form lives beside it on
    /// the style.
    pub enum VerticalAlign {
        #[default]
        Baseline = Baseline,
        Middle = Middle,
        Sub = Sub,
        Super = Super,
        TextTop = TextTop,
        TextBottom = TextBottom,
        Top = Top,
        Bottom = Bottom,
        BaselineMiddle = WebkitBaselineMiddle,
    }
}

keyword_enum! {
    /// `background-attachment`
    pub enum FillAttachment {
        #[default]
        Scroll = Scroll,
        Fixed = Fixed,
        Local = Local,
    }
}

keyword_enum! {
    /// `background-clip` / `background-origin`
    pub enum FillBox {
        #[default]
        BorderBox = BorderBox,
        PaddingBox = PaddingBox,
        ContentBox = ContentBox,
        Text = Text,
    }
}

keyword_enum! {
    /// One axis of `background-repeat`
    pub enum FillRepeat {
        #[default]
        Repeat = Repeat,
        NoRepeat = NoRepeat,
        Round = Round,
        Space = Space,
    }
}

keyword_enum! {
    /// `-webkit-background-composite`
    pub enum CompositeOperator {
        Clear = Clear,
        Copy = Copy,
        #[default]
        SourceOver = SourceOver,
        SourceIn = SourceIn,
        SourceOut = SourceOut,
        SourceAtop = SourceAtop,
        DestinationOver = DestinationOver,
        DestinationIn = DestinationIn,
        DestinationOut = DestinationOut,
        DestinationAtop = DestinationAtop,
        Xor = Xor,
        PlusDarker = PlusDarker,
        Highlight = Highlight,
        PlusLighter = PlusLighter,
    }
}

keyword_enum! {
    /// `box-sizing`
    pub enum BoxSizing {
        #[default]
        ContentBox = ContentBox,
        BorderBox = BorderBox,
    }
}

keyword_enum! {
    /// `border-collapse`
    pub enum BorderCollapse {
        #[default]
        Separate = Separate,
        Collapse = Collapse,
    }
}

keyword_enum! {
    /// `caption-side`
    pub enum CaptionSide {
        #[default]
        Top = Top,
        Bottom = Bottom,
        Left = Left,
        Right = Right,
    }
}

keyword_enum! {
    /// `empty-cells`
    pub enum EmptyCells {
        #[default]
        Show = Show,
        Hide = Hide,
    }
}

keyword_enum! {
    /// `list-style-position`
    pub enum ListStylePosition {
        #[default]
        Outside = Outside,
        Inside = Inside,
    }
}

keyword_enum! {
    /// `list-style-type`
    pub enum ListStyleType {
        #[default]
        Disc = Disc,
        Circle = Circle,
        Square = Square,
        Decimal = Decimal,
        DecimalLeadingZero = DecimalLeadingZero,
        LowerRoman = LowerRoman,
        UpperRoman = UpperRoman,
        LowerGreek = LowerGreek,
        LowerAlpha = LowerAlpha,
        LowerLatin = LowerLatin,
        UpperAlpha = UpperAlpha,
        UpperLatin = UpperLatin,
        Armenian = Armenian,
        Georgian = Georgian,
        None = None,
    }
}

keyword_enum! {
    /// `cursor` (keyword part)
    pub enum Cursor {
        #[default]
        Auto = Auto,
        Crosshair = Crosshair,
        Default = Default,
        Pointer = Pointer,
        Move = Move,
        VerticalText = VerticalText,
        Cell = Cell,
        ContextMenu = ContextMenu,
        Alias = Alias,
        Progress = Progress,
        NoDrop = NoDrop,
        NotAllowed = NotAllowed,
        ZoomIn = WebkitZoomIn,
        ZoomOut = WebkitZoomOut,
        EResize = EResize,
        NeResize = NeResize,
        NwResize = NwResize,
        NResize = NResize,
        SeResize = SeResize,
        SwResize = SwResize,
        SResize = SResize,
        WResize = WResize,
        EwResize = EwResize,
        NsResize = NsResize,
        NeswResize = NeswResize,
        NwseResize = NwseResize,
        ColResize = ColResize,
        RowResize = RowResize,
        Text = Text,
        Wait = Wait,
        Help = Help,
        AllScroll = AllScroll,
        Grab = WebkitGrab,
        Grabbing = WebkitGrabbing,
        Copy = Copy,
        None = None,
    }
}

keyword_enum! {
    /// `unicode-bidi`
    pub enum UnicodeBidi {
        #[default]
        Normal = Normal,
        Embed = Embed,
        Override = BidiOverride,
        Isolate = WebkitIsolate,
    }
}

keyword_enum! {
    /// `page-break-*` and `-webkit-column-break-*`. `left` and `right` read
    /// as `always`.
    pub enum PageBreak {
        #[default]
        Auto = Auto,
        Always = Always | Left | Right,
        Avoid = Avoid,
    }
}

keyword_enum! {
    /// `pointer-events`
    pub enum PointerEvents {
        #[default]
        Auto = Auto,
        None = None,
        VisiblePainted = Visiblepainted,
        VisibleFill = Visiblefill,
        VisibleStroke = Visiblestroke,
        Visible = Visible,
        Painted = Painted,
        Fill = Fill,
        Stroke = Stroke,
        All = All,
    }
}

keyword_enum! {
    /// `resize`
    pub enum Resize {
        #[default]
        None = None,
        Both = Both,
        Horizontal = Horizontal,
        Vertical = Vertical,
    }
}

keyword_enum! {
    /// `speak`
    pub enum Speak {
        #[default]
        Normal = Normal,
        None = None,
        SpellOut = SpellOut,
        Digits = Digits,
        LiteralPunctuation = LiteralPunctuation,
        NoPunctuation = NoPunctuation,
    }
}

keyword_enum! {
    /// `table-layout`
    pub enum TableLayout {
        #[default]
        Auto = Auto,
        Fixed = Fixed,
    }
}

keyword_enum! {
    /// `text-overflow`
    pub enum TextOverflow {
        #[default]
        Clip = Clip,
        Ellipsis = Ellipsis,
    }
}

keyword_enum! {
    /// `word-break`
    pub enum WordBreak {
        #[default]
        Normal = Normal,
        BreakAll = BreakAll,
        BreakWord = BreakWord,
    }
}

keyword_enum! {
    /// `word-wrap`
    pub enum WordWrap {
        #[default]
        Normal = Normal,
        BreakWord = BreakWord,
    }
}

keyword_enum! {
    /// `text-rendering`
    pub enum TextRenderingMode {
        #[default]
        Auto = Auto,
        OptimizeSpeed = Optimizespeed,
        OptimizeLegibility = Optimizelegibility,
        GeometricPrecision = Geometricprecision,
    }
}

keyword_enum! {
    /// `-webkit-font-smoothing`
    pub enum FontSmoothingMode {
        #[default]
        Auto = Auto,
        None = None,
        Antialiased = Antialiased,
        SubpixelAntialiased = SubpixelAntialiased,
    }
}

keyword_enum! {
    /// `-webkit-text-orientation`
    pub enum TextOrientation {
        #[default]
        VerticalRight = VerticalRight,
        Upright = Upright,
    }
}

keyword_enum! {
    /// `font-style`; `oblique` is treated as italic.
    pub enum FontStyle {
        #[default]
        Normal = Normal,
        Italic = Italic | Oblique,
    }
}

keyword_enum! {
    /// `font-variant`
    pub enum FontVariant {
        #[default]
        Normal = Normal,
        SmallCaps = SmallCaps,
    }
}

keyword_enum! {
    /// `font-weight`. `normal` and `bold` read as 400 and 700.
    pub enum FontWeight {
        W100 = W100,
        W200 = W200,
        W300 = W300,
        #[default]
        W400 = W400 | Normal,
        W500 = W500,
        W600 = W600,
        W700 = W700 | Bold,
        W800 = W800,
        W900 = W900,
    }
}

keyword_enum! {
    /// `-webkit-animation-direction`
    pub enum AnimationDirection {
        #[default]
        Normal = Normal,
        Alternate = Alternate,
    }
}

keyword_enum! {
    /// `-webkit-animation-fill-mode`
    pub enum AnimationFillMode {
        #[default]
        None = None,
        Forwards = Forwards,
        Backwards = Backwards,
        Both = Both,
    }
}

keyword_enum! {
    /// `-webkit-animation-play-state`
    pub enum AnimationPlayState {
        #[default]
        Running = Running,
        Paused = Paused,
    }
}

keyword_enum! {
    /// `-webkit-appearance`
    pub enum ControlPart {
        #[default]
        None = None,
        Checkbox = Checkbox,
        Radio = Radio,
        PushButton = PushButton,
        SquareButton = SquareButton,
        Button = Button,
        DefaultButton = DefaultButton,
        Listbox = Listbox,
        Listitem = Listitem,
        Menulist = Menulist,
        MenulistButton = MenulistButton,
        Meter = Meter,
        ProgressBar = ProgressBar,
        SliderHorizontal = SliderHorizontal,
        SliderVertical = SliderVertical,
        Searchfield = Searchfield,
        Textfield = Textfield,
        Textarea = Textarea,
        Caret = Caret,
    }
}

keyword_enum! {
    /// `-webkit-border-fit`
    pub enum BorderFit {
        #[default]
        Border = Border,
        Lines = Lines,
    }
}

keyword_enum! {
    /// `-webkit-box-align`
    pub enum BoxAlign {
        #[default]
        Stretch = Stretch,
        Start = Start,
        Center = Center,
        End = End,
        Baseline = Baseline,
    }
}

keyword_enum! {
    /// `-webkit-box-pack`. `justify` has no computed-style spelling.
    pub enum BoxPack {
        #[default]
        Start = Start,
        Center = Center,
        End = End,
        Justify = Justify,
    }
}

keyword_enum! {
    /// `-webkit-box-direction`
    pub enum BoxDirection {
        #[default]
        Normal = Normal,
        Reverse = Reverse,
    }
}

keyword_enum! {
    /// `-webkit-box-lines`
    pub enum BoxLines {
        #[default]
        Single = Single,
        Multiple = Multiple,
    }
}

keyword_enum! {
    /// `-webkit-box-orient`
    pub enum BoxOrient {
        #[default]
        Horizontal = Horizontal | InlineAxis,
        Vertical = Vertical | BlockAxis,
    }
}

keyword_enum! {
    /// Direction of `-webkit-box-reflect`
    pub enum ReflectionDirection {
        #[default]
        Below = Below,
        Above = Above,
        Left = Left,
        Right = Right,
    }
}

keyword_enum! {
    /// `-webkit-color-correction`
    pub enum ColorSpace {
        #[default]
        DeviceRgb = Default,
        Srgb = Srgb,
    }
}

keyword_enum! {
    /// `-webkit-hyphens`
    pub enum Hyphens {
        None = None,
        #[default]
        Manual = Manual,
        Auto = Auto,
    }
}

keyword_enum! {
    /// `-webkit-line-break`
    pub enum LineBreak {
        #[default]
        Normal = Normal,
        AfterWhiteSpace = AfterWhiteSpace,
    }
}

keyword_enum! {
    /// `-webkit-margin-before-collapse` / `-webkit-margin-after-collapse`
    pub enum MarginCollapse {
        #[default]
        Collapse = Collapse,
        Separate = Separate,
        Discard = Discard,
    }
}

keyword_enum! {
    /// `-webkit-marquee-direction`
    pub enum MarqueeDirection {
        #[default]
        Auto = Auto,
        Left = Left,
        Right = Right,
        Up = Up | Ahead,
        Down = Down | Reverse,
        Forward = Forwards,
        Backward = Backwards,
    }
}

keyword_enum! {
    /// `-webkit-marquee-style`
    pub enum MarqueeBehavior {
        None = None,
        #[default]
        Scroll = Scroll,
        Slide = Slide,
        Alternate = Alternate,
    }
}

keyword_enum! {
    /// `-webkit-nbsp-mode`
    pub enum NbspMode {
        #[default]
        Normal = Normal,
        Space = Space,
    }
}

keyword_enum! {
    /// `-webkit-rtl-ordering`
    pub enum Order {
        #[default]
        Logical = Logical,
        Visual = Visual,
    }
}

keyword_enum! {
    /// `-webkit-text-combine`
    pub enum TextCombine {
        #[default]
        None = None,
        Horizontal = Horizontal,
    }
}

keyword_enum! {
    /// `-webkit-text-emphasis-position`
    pub enum TextEmphasisPosition {
        #[default]
        Over = Over,
        Under = Under,
    }
}

keyword_enum! {
    /// `-webkit-text-security`
    pub enum TextSecurity {
        #[default]
        None = None,
        Disc = Disc,
        Circle = Circle,
        Square = Square,
    }
}

keyword_enum! {
    /// `-webkit-transform-style`
    pub enum TransformStyle3d {
        #[default]
        Flat = Flat,
        Preserve3d = Preserve3d,
    }
}

keyword_enum! {
    /// `-webkit-user-drag`
    pub enum UserDrag {
        #[default]
        Auto = Auto,
        None = None,
        Element = Element,
    }
}

keyword_enum! {
    /// `-webkit-user-modify`
    pub enum UserModify {
        #[default]
        ReadOnly = ReadOnly,
        ReadWrite = ReadWrite,
        ReadWritePlaintextOnly = ReadWritePlaintextOnly,
    }
}

keyword_enum! {
    /// `-webkit-user-select`. Both `auto` and `text` select text, so `auto`
    /// computes to `text`.
    pub enum UserSelect {
        None = None,
        #[default]
        Text = Text | Auto,
        All = All,
    }
}

keyword_enum! {
    /// `-webkit-match-nearest-mail-blockquote-color`
    pub enum MatchNearestMailBlockquoteColor {
        #[default]
        Normal = Normal,
        Match = Match,
    }
}

keyword_enum! {
    /// `-webkit-text-size-adjust`
    pub enum TextSizeAdjust {
        #[default]
        Auto = Auto,
        None = None,
    }
}

/// `-webkit-column-span`: `all` or a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ColumnSpan {
    /// `1`
    #[default]
    One,
    /// `all`
    All,
}

impl FromCssPrimitive for ColumnSpan {
    fn from_css_primitive(value: &PrimitiveValue) -> Option<Self> {
        Some(if value.keyword() == Some(Keyword::All) {
            Self::All
        } else {
            Self::One
        })
    }
}

/// `-webkit-line-clamp`: `none`, a line count, or a percentage of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum LineClamp {
    /// `none`
    #[default]
    None,
    /// A number of lines.
    Lines(i32),
    /// A percentage of the block's lines.
    Percent(i32),
}

impl FromCssPrimitive for LineClamp {
    #[allow(clippy::cast_possible_truncation)]
    fn from_css_primitive(value: &PrimitiveValue) -> Option<Self> {
        match value.primitive_type() {
            UnitKind::Number => Some(Self::Lines(value.double_value() as i32)),
            UnitKind::Percentage => Some(Self::Percent(value.double_value() as i32)),
            UnitKind::Ident if value.keyword() == Some(Keyword::None) => Some(Self::None),
            _ => None,
        }
    }
}
