//! Writing modes, inline direction, and logical-to-physical side mapping.
//!
//! [§ 2 Block Flow Direction](https://www.w3.org/TR/css-writing-modes-4/#block-flow)
//! [§ 6 Abstract Box Terminology](https://www.w3.org/TR/css-writing-modes-4/#abstract-box)

use serde::Serialize;

/// [§ 2 Block Flow Direction](https://www.w3.org/TR/css-writing-modes-4/#block-flow)
///
/// "The writing-mode property specifies whether lines of text are laid out
/// horizontally or vertically and the direction in which blocks progress."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum WritingMode {
    /// "Top-to-bottom block flow direction."
    ///
    /// Mapping:
    ///   - before → top
    ///   - after  → bottom
    ///   - start  → left  (in ltr)
    ///   - end    → right (in ltr)
    #[default]
    HorizontalTb,

    /// "Right-to-left block flow direction."
    ///
    /// Mapping:
    ///   - before → right
    ///   - after  → left
    ///   - start  → top    (in ltr)
    ///   - end    → bottom (in ltr)
    VerticalRl,

    /// "Left-to-right block flow direction."
    ///
    /// Mapping:
    ///   - before → left
    ///   - after  → right
    ///   - start  → top    (in ltr)
    ///   - end    → bottom (in ltr)
    VerticalLr,

    /// Bottom-to-top block flow (legacy `horizontal-bt`).
    ///
    /// Mapping:
    ///   - before → bottom
    ///   - after  → top
    ///   - start  → left  (in ltr)
    ///   - end    → right (in ltr)
    HorizontalBt,
}

/// [§ 2.1 Specifying Directionality](https://www.w3.org/TR/css-writing-modes-4/#direction)
///
/// "This property specifies the inline base direction or directionality of
/// any bidi paragraph, embedding, isolate, or override established by the box."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum TextDirection {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

/// Physical side of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalSide {
    /// Top edge of the box
    Top,
    /// Right edge of the box
    Right,
    /// Bottom edge of the box
    Bottom,
    /// Left edge of the box
    Left,
}

/// Flow-relative side of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalSide {
    /// block-start
    Before,
    /// inline-end
    End,
    /// block-end
    After,
    /// inline-start
    Start,
}

/// Flow-relative extent of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalExtent {
    /// Inline-axis size.
    Width,
    /// Block-axis size.
    Height,
}

impl WritingMode {
    /// Whether lines run horizontally.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::HorizontalTb | Self::HorizontalBt)
    }

    /// [§ 6.2 Flow-relative Directions](https://www.w3.org/TR/css-writing-modes-4/#logical-directions)
    ///
    /// | Writing Mode   | before | after  |
    /// |----------------|--------|--------|
    /// | horizontal-tb  | top    | bottom |
    /// | horizontal-bt  | bottom | top    |
    /// | vertical-rl    | right  | left   |
    /// | vertical-lr    | left   | right  |
    #[must_use]
    pub const fn block_start_physical(self) -> PhysicalSide {
        match self {
            Self::HorizontalTb => PhysicalSide::Top,
            Self::HorizontalBt => PhysicalSide::Bottom,
            Self::VerticalRl => PhysicalSide::Right,
            Self::VerticalLr => PhysicalSide::Left,
        }
    }

    /// Map block-end to the corresponding physical side.
    #[must_use]
    pub const fn block_end_physical(self) -> PhysicalSide {
        match self {
            Self::HorizontalTb => PhysicalSide::Bottom,
            Self::HorizontalBt => PhysicalSide::Top,
            Self::VerticalRl => PhysicalSide::Left,
            Self::VerticalLr => PhysicalSide::Right,
        }
    }

    /// Map inline-start to a physical side. Unlike the block directions,
    /// this also depends on `direction`.
    ///
    /// | Writing Mode | ltr  | rtl    |
    /// |--------------|------|--------|
    /// | horizontal   | left | right  |
    /// | vertical     | top  | bottom |
    #[must_use]
    pub const fn inline_start_physical(self, direction: TextDirection) -> PhysicalSide {
        match (self.is_horizontal(), direction) {
            (true, TextDirection::Ltr) => PhysicalSide::Left,
            (true, TextDirection::Rtl) => PhysicalSide::Right,
            (false, TextDirection::Ltr) => PhysicalSide::Top,
            (false, TextDirection::Rtl) => PhysicalSide::Bottom,
        }
    }

    /// Map inline-end to a physical side.
    #[must_use]
    pub const fn inline_end_physical(self, direction: TextDirection) -> PhysicalSide {
        match (self.is_horizontal(), direction) {
            (true, TextDirection::Ltr) => PhysicalSide::Right,
            (true, TextDirection::Rtl) => PhysicalSide::Left,
            (false, TextDirection::Ltr) => PhysicalSide::Bottom,
            (false, TextDirection::Rtl) => PhysicalSide::Top,
        }
    }

    /// Resolve any logical side.
    #[must_use]
    pub const fn physical_side(self, side: LogicalSide, direction: TextDirection) -> PhysicalSide {
        match side {
            LogicalSide::Before => self.block_start_physical(),
            LogicalSide::After => self.block_end_physical(),
            LogicalSide::Start => self.inline_start_physical(direction),
            LogicalSide::End => self.inline_end_physical(direction),
        }
    }

    /// Resolve a logical extent: in vertical modes the logical width is the
    /// physical height and vice versa.
    #[must_use]
    pub const fn physical_extent(self, extent: LogicalExtent) -> LogicalExtent {
        match (self.is_horizontal(), extent) {
            (true, e) => e,
            (false, LogicalExtent::Width) => LogicalExtent::Height,
            (false, LogicalExtent::Height) => LogicalExtent::Width,
        }
    }
}
