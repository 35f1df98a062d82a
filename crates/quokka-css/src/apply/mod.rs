//! Table-driven property application.
//!
//! [§ 6.1 Cascaded Values](https://www.w3.org/TR/css-cascade-4/#cascaded)
//!
//! Once the cascade has picked a declared value for a property, something
//! has to write it onto the [`Style`]. Most properties follow one of a few
//! patterns (a keyword enum, a length, a color, a per-layer background
//! field), so each property is bound to a small strategy object that knows
//! the pattern and the style field it writes.
//!
//! ```text
//!   PropertyId ──index──▶ [ Option<Arc<dyn ApplyProperty>> ; PropertyId::COUNT ]
//!                                      │
//!                  ┌───────────────────┼────────────────────┐
//!                  ▼                   ▼                    ▼
//!          apply_inherit_value  apply_initial_value   apply_value(value)
//! ```
//!
//! The table is built once per process by [`shared`]. Aliases such as
//! `-webkit-background-clip` point at the very same strategy instance as
//! the property they alias. Properties that are resolved elsewhere (fonts,
//! shadows, transforms, animations, SVG) are listed in [`NOT_TABLE_DRIVEN`]
//! and have no entry.

mod handlers;
mod table;

use std::sync::{Arc, LazyLock};

use strum::EnumCount;

use crate::property::PropertyId;
use crate::style::Style;
use crate::style::length::Length;
use crate::values::{PrimitiveValue, Value};

pub use handlers::{
    ApplyAuto, ApplyBorderRadius, ApplyClip, ApplyColor, ApplyComputeLength, ApplyDefault,
    ApplyDirectionAware, ApplyExpanding, ApplyFillLayer, ApplyFontWeight, ApplyImage, ApplyLength,
    ApplyLineHeight, ApplyNumberOrKeyword, ApplyOutlineStyle, ApplyString, ApplyTextDecoration,
    ApplyVerticalAlign, ExpandValue, LengthKeywords,
};

/// Writes one property onto a [`Style`].
///
/// Implementations are stateless apart from the accessors they were built
/// with, so one instance serves every element in the process.
pub trait ApplyProperty: Send + Sync {
    /// [§ 7.2 Explicit Inheritance](https://www.w3.org/TR/css-cascade-4/#inheriting)
    ///
    /// Copy the parent's value.
    fn apply_inherit_value(&self, state: &mut ResolverState<'_>);

    /// [§ 7.1 Initial Values](https://www.w3.org/TR/css-cascade-4/#initial-values)
    fn apply_initial_value(&self, state: &mut ResolverState<'_>);

    /// Decode `value` and store it. Values of the wrong kind leave the style
    /// untouched.
    fn apply_value(&self, state: &mut ResolverState<'_>, value: &Value);
}

/// Everything a strategy may read or write while applying one property.
#[derive(Debug)]
pub struct ResolverState<'a> {
    /// The style being built.
    pub style: &'a mut Style,
    /// The parent element's resolved style.
    pub parent_style: &'a Style,
    /// The root element's style, for `rem`.
    pub root_style: Option<&'a Style>,
    /// Whether colors go to the regular style.
    pub apply_to_regular_style: bool,
    /// Whether colors go to the `:visited` style.
    pub apply_to_visited_style: bool,
}

impl<'a> ResolverState<'a> {
    /// State for an unvisited element: colors go to the regular style only.
    pub fn new(style: &'a mut Style, parent_style: &'a Style) -> Self {
        Self {
            style,
            parent_style,
            root_style: None,
            apply_to_regular_style: true,
            apply_to_visited_style: false,
        }
    }

    /// Set the root element style.
    #[must_use]
    pub const fn with_root_style(mut self, root_style: &'a Style) -> Self {
        self.root_style = Some(root_style);
        self
    }

    /// Choose which of the regular and `:visited` colors are written.
    #[must_use]
    pub const fn with_link_targets(mut self, regular: bool, visited: bool) -> Self {
        self.apply_to_regular_style = regular;
        self.apply_to_visited_style = visited;
        self
    }

    /// The zoom factor absolute lengths are scaled by.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        f64::from(self.style.effective_zoom)
    }

    /// Decode a length-like primitive against the style being built.
    #[must_use]
    pub fn length(&self, value: &PrimitiveValue) -> Option<Length> {
        value.convert_to_length(self.style, self.root_style, self.zoom())
    }
}

/// Properties with no strategy. These are resolved by dedicated code paths
/// (font selection, shadow and transform builders, the animation
/// controller, the SVG style builder) or are shorthands the parser always
/// expands before application.
pub const NOT_TABLE_DRIVEN: &[PropertyId] = &[
    // Shorthands expanded by the parser.
    PropertyId::Background,
    PropertyId::Font,
    PropertyId::WebkitMask,
    PropertyId::WebkitAnimation,
    PropertyId::WebkitTransition,
    PropertyId::WebkitTextEmphasis,
    // Font selection.
    PropertyId::FontFamily,
    PropertyId::FontSize,
    PropertyId::FontStretch,
    PropertyId::WebkitFontSizeDelta,
    // Shadows, transforms, images.
    PropertyId::BoxShadow,
    PropertyId::WebkitBoxShadow,
    PropertyId::TextShadow,
    PropertyId::WebkitTransform,
    PropertyId::WebkitBorderImage,
    PropertyId::WebkitMaskBoxImage,
    PropertyId::WebkitBoxReflect,
    // Animations and transitions.
    PropertyId::WebkitAnimationDelay,
    PropertyId::WebkitAnimationDirection,
    PropertyId::WebkitAnimationDuration,
    PropertyId::WebkitAnimationFillMode,
    PropertyId::WebkitAnimationIterationCount,
    PropertyId::WebkitAnimationName,
    PropertyId::WebkitAnimationPlayState,
    PropertyId::WebkitAnimationTimingFunction,
    PropertyId::WebkitTransitionDelay,
    PropertyId::WebkitTransitionDuration,
    PropertyId::WebkitTransitionProperty,
    PropertyId::WebkitTransitionTimingFunction,
    // Generated content and counters.
    PropertyId::Content,
    PropertyId::CounterIncrement,
    PropertyId::CounterReset,
    PropertyId::Quotes,
    PropertyId::WebkitTextEmphasisStyle,
    // Misc.
    PropertyId::Cursor,
    PropertyId::Zoom,
    PropertyId::WebkitDashboardRegion,
    PropertyId::WebkitLineBoxContain,
    PropertyId::WebkitTextDecorationsInEffect,
    // @font-face and @page descriptors.
    PropertyId::Src,
    PropertyId::UnicodeRange,
    PropertyId::Page,
    PropertyId::Size,
    // Legacy decoration longhands with no style storage.
    PropertyId::TextLineThrough,
    PropertyId::TextLineThroughColor,
    PropertyId::TextLineThroughMode,
    PropertyId::TextLineThroughStyle,
    PropertyId::TextLineThroughWidth,
    PropertyId::TextOverline,
    PropertyId::TextOverlineColor,
    PropertyId::TextOverlineMode,
    PropertyId::TextOverlineStyle,
    PropertyId::TextOverlineWidth,
    PropertyId::TextUnderline,
    PropertyId::TextUnderlineColor,
    PropertyId::TextUnderlineMode,
    PropertyId::TextUnderlineStyle,
    PropertyId::TextUnderlineWidth,
];

/// Whether `id` is expected to have a strategy in the table. SVG
/// properties never do.
#[must_use]
pub fn is_table_driven(id: PropertyId) -> bool {
    !id.is_svg() && !NOT_TABLE_DRIVEN.contains(&id)
}

/// The property → strategy table.
pub struct PropertyApplyTable {
    handlers: Vec<Option<Arc<dyn ApplyProperty>>>,
}

impl std::fmt::Debug for PropertyApplyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyApplyTable")
            .field("registered", &self.handlers.iter().filter(|h| h.is_some()).count())
            .finish()
    }
}

impl Default for PropertyApplyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyApplyTable {
    /// Build a fully populated table.
    #[must_use]
    pub fn new() -> Self {
        let mut table = Self::empty();
        table::register_all(&mut table);
        table
    }

    /// A table with nothing registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            handlers: vec![None; PropertyId::COUNT],
        }
    }

    /// Bind `handler` to `id`.
    ///
    /// # Panics
    ///
    /// If `id` already has a handler.
    pub fn set_property_handler(&mut self, id: PropertyId, handler: Arc<dyn ApplyProperty>) {
        let slot = &mut self.handlers[id.index()];
        assert!(slot.is_none(), "duplicate apply handler for '{id}'");
        *slot = Some(handler);
    }

    /// Bind `alias` to the same strategy instance as `target`.
    ///
    /// # Panics
    ///
    /// If `target` has no handler or `alias` already has one.
    pub fn set_alias(&mut self, alias: PropertyId, target: PropertyId) {
        let handler = Arc::clone(self.shared_handler(target));
        self.set_property_handler(alias, handler);
    }

    /// The strategy for `id`, if one is registered.
    #[must_use]
    pub fn handler(&self, id: PropertyId) -> Option<&Arc<dyn ApplyProperty>> {
        self.handlers[id.index()].as_ref()
    }

    /// Whether `id` has a strategy.
    #[must_use]
    pub fn has_handler(&self, id: PropertyId) -> bool {
        self.handler(id).is_some()
    }

    /// The strategy for `id`.
    ///
    /// # Panics
    ///
    /// If `id` has none; callers check [`is_table_driven`] first.
    #[must_use]
    pub fn property_handler(&self, id: PropertyId) -> &dyn ApplyProperty {
        self.shared_handler(id).as_ref()
    }

    fn shared_handler(&self, id: PropertyId) -> &Arc<dyn ApplyProperty> {
        match self.handler(id) {
            Some(handler) => handler,
            None => panic!("no apply handler registered for '{id}'"),
        }
    }

    /// Apply one declared value, routing the CSS-wide `inherit` and
    /// `initial` keywords to their strategy methods.
    pub fn apply(&self, id: PropertyId, state: &mut ResolverState<'_>, value: &Value) {
        let handler = self.property_handler(id);
        if value.is_inherit() {
            handler.apply_inherit_value(state);
        } else if value.is_initial() {
            handler.apply_initial_value(state);
        } else {
            handler.apply_value(state, value);
        }
    }
}

static SHARED: LazyLock<PropertyApplyTable> = LazyLock::new(PropertyApplyTable::new);

/// The process-wide table, built on first use.
pub fn shared() -> &'static PropertyApplyTable {
    &SHARED
}

static INITIAL_STYLE: LazyLock<Style> = LazyLock::new(Style::default);

/// A style holding every initial value, used by `apply_initial_value`.
pub fn initial_style() -> &'static Style {
    &INITIAL_STYLE
}
