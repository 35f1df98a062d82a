//! Computed style declarations.
//!
//! [CSSOM § 9.1 getComputedStyle()](https://drafts.csswg.org/cssom/#dom-window-getcomputedstyle)
//!
//! "Return a live CSS declaration block ... whose computed flag is set."
//!
//! A [`ComputedStyleDeclaration`] reads a node's resolved [`Style`] and turns
//! it back into CSS values, one property at a time:
//!
//! ```text
//!   PropertyId ──resolve_direction_aware──▶ physical PropertyId
//!                                                 │
//!        StyledNode::computed_style(pseudo) ──▶ Style
//!                                                 │
//!                                    one match per property
//!                                                 │
//!                                    ValueCache ──▶ Value
//! ```
//!
//! Properties with no reconstruction (shorthands, `@font-face` descriptors,
//! internal properties) yield no value and are reported once per process.

mod helpers;
mod properties;
mod reconstruct;
#[cfg(feature = "svg")]
mod svg;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, LazyLock};

use quokka_common::warning::{WarningSet, warn};

use crate::error::StyleError;
use crate::keyword::Keyword;
use crate::property::PropertyId;
use crate::style::Style;
use crate::style::keywords::BoxSizing;
use crate::values::{Value, ValueCache};

pub use properties::computed_properties;

use helpers::Reconstructor;

/// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
///
/// Which box of an element a style belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PseudoId {
    /// The element itself.
    #[default]
    None,
    /// `::first-line`
    FirstLine,
    /// `::first-letter`
    FirstLetter,
    /// `::before`
    Before,
    /// `::after`
    After,
    /// `::selection`
    Selection,
}

impl PseudoId {
    /// Parse a pseudo-element name with or without its leading `:` or `::`.
    /// Unknown names select the element itself.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let bare = name
            .strip_prefix("::")
            .or_else(|| name.strip_prefix(':'))
            .unwrap_or(name);
        match bare.to_ascii_lowercase().as_str() {
            "first-line" => Self::FirstLine,
            "first-letter" => Self::FirstLetter,
            "before" => Self::Before,
            "after" => Self::After,
            "selection" => Self::Selection,
            _ => Self::None,
        }
    }
}

/// Width and height of a laid-out box, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxSize {
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

/// Edge sizes for padding, in whole pixels.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeSizes {
    /// Top edge.
    pub top: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
    /// Left edge.
    pub left: i32,
}

/// The geometry layout produced for a node's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutBox {
    /// The content box.
    pub content_box: BoxSize,
    /// The border box.
    pub border_box: BoxSize,
    /// Used padding.
    pub padding: EdgeSizes,
}

impl LayoutBox {
    /// [§ 4.1 'box-sizing'](https://www.w3.org/TR/css-sizing-3/#box-sizing)
    ///
    /// The box `width` and `height` refer to under `box_sizing`.
    #[must_use]
    pub const fn sizing_box(&self, box_sizing: BoxSizing) -> BoxSize {
        match box_sizing {
            BoxSizing::ContentBox => self.content_box,
            BoxSizing::BorderBox => self.border_box,
        }
    }
}

/// What a computed style declaration needs from the document.
pub trait StyledNode {
    /// The resolved style for this node or one of its pseudo-elements.
    /// `None` when the node has no style (detached, `display: none` pseudo).
    fn computed_style(&self, pseudo: PseudoId) -> Option<Rc<Style>>;

    /// Bring layout up to date, ignoring pending stylesheets.
    fn update_layout(&self);

    /// The laid-out box, when the node has one.
    fn layout_box(&self) -> Option<LayoutBox>;

    /// The document's value cache.
    fn value_cache(&self) -> &RefCell<ValueCache>;
}

static LOGGED_PROPERTIES: LazyLock<Arc<WarningSet<PropertyId>>> =
    LazyLock::new(|| Arc::new(WarningSet::new()));

/// The process-wide set of properties already reported as having no
/// computed value.
#[must_use]
pub fn logged_properties() -> Arc<WarningSet<PropertyId>> {
    Arc::clone(&LOGGED_PROPERTIES)
}

/// Report `id` as having no computed value, once per `logged` set.
pub(crate) fn log_unimplemented(logged: &WarningSet<PropertyId>, id: PropertyId) {
    if logged.insert_first(id) {
        warn(
            "CSS",
            &format!("does not yet implement getComputedStyle for '{id}'"),
        );
    }
}

/// A read-only view of one node's computed style.
#[derive(Debug)]
pub struct ComputedStyleDeclaration<N> {
    node: Rc<N>,
    pseudo: PseudoId,
    allow_visited_style: bool,
    logged: Arc<WarningSet<PropertyId>>,
}

impl<N: StyledNode> ComputedStyleDeclaration<N> {
    /// The computed style of `node`, or of its pseudo-element when
    /// `pseudo_element_name` names one (`"::before"`, `":after"`, …).
    pub fn new(node: Rc<N>, pseudo_element_name: &str) -> Self {
        Self {
            node,
            pseudo: PseudoId::from_name(pseudo_element_name),
            allow_visited_style: false,
            logged: logged_properties(),
        }
    }

    /// Report `:visited` colors instead of the regular ones.
    #[must_use]
    pub const fn with_visited_style(mut self, allow: bool) -> Self {
        self.allow_visited_style = allow;
        self
    }

    /// Record unimplemented properties in `logged` instead of the
    /// process-wide set.
    #[must_use]
    pub fn with_warning_set(mut self, logged: Arc<WarningSet<PropertyId>>) -> Self {
        self.logged = logged;
        self
    }

    /// The pseudo-element this declaration describes.
    #[must_use]
    pub const fn pseudo(&self) -> PseudoId {
        self.pseudo
    }

    /// The computed value of `id`, after bringing layout up to date.
    #[must_use]
    pub fn value_for_property(&self, id: PropertyId) -> Option<Value> {
        self.value_for_property_with(id, true)
    }

    /// The computed value of `id`. Logical properties are mapped to their
    /// physical counterparts using the style's own writing mode and
    /// direction.
    #[must_use]
    pub fn value_for_property_with(&self, id: PropertyId, update_layout: bool) -> Option<Value> {
        if update_layout {
            self.node.update_layout();
        }
        let style = self.node.computed_style(self.pseudo)?;
        let id = id.resolve_direction_aware(style.direction, style.writing_mode);
        let mut cache = self.node.value_cache().borrow_mut();
        let mut reconstructor = Reconstructor {
            style: &style,
            layout: self.node.layout_box(),
            cache: &mut cache,
            allow_visited_style: self.allow_visited_style,
            logged: &self.logged,
        };
        reconstructor.value(id)
    }

    /// The serialized computed value of `id`; empty when there is none.
    #[must_use]
    pub fn text_for_property(&self, id: PropertyId) -> String {
        self.value_for_property(id)
            .map(|value| value.css_text())
            .unwrap_or_default()
    }

    /// [CSSOM getPropertyValue()](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-getpropertyvalue)
    ///
    /// Unknown property names read as the empty string.
    #[must_use]
    pub fn property_value_by_name(&self, name: &str) -> String {
        PropertyId::from_name(name).map_or_else(String::new, |id| self.text_for_property(id))
    }

    /// [CSSOM cssText](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-csstext)
    ///
    /// Every computed property as `name: value;`, joined by spaces.
    #[must_use]
    pub fn css_text(&self) -> String {
        computed_properties()
            .iter()
            .map(|&id| format!("{id}: {};", self.text_for_property(id)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Computed declarations are read-only.
    ///
    /// # Errors
    ///
    /// Always [`StyleError::NoModificationAllowed`].
    #[allow(clippy::unused_self)]
    pub const fn set_css_text(&self, _text: &str) -> Result<(), StyleError> {
        Err(StyleError::NoModificationAllowed)
    }

    /// Computed declarations are read-only.
    ///
    /// # Errors
    ///
    /// Always [`StyleError::NoModificationAllowed`].
    #[allow(clippy::unused_self)]
    pub const fn set_property(&self, _name: &str, _value: &str, _priority: &str) -> Result<(), StyleError> {
        Err(StyleError::NoModificationAllowed)
    }

    /// Computed declarations are read-only.
    ///
    /// # Errors
    ///
    /// Always [`StyleError::NoModificationAllowed`].
    #[allow(clippy::unused_self)]
    pub const fn remove_property(&self, _name: &str) -> Result<String, StyleError> {
        Err(StyleError::NoModificationAllowed)
    }

    /// Computed values are never `!important`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn property_priority(&self, _name: &str) -> &'static str {
        ""
    }

    /// Computed values are never implicit.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn is_property_implicit(&self, _name: &str) -> bool {
        false
    }

    /// Number of computed properties; zero when the node has no style.
    #[must_use]
    pub fn length(&self) -> usize {
        if self.node.computed_style(self.pseudo).is_some() {
            computed_properties().len()
        } else {
            0
        }
    }

    /// The name of the `index`th computed property.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&'static str> {
        if index >= self.length() {
            return None;
        }
        computed_properties().get(index).map(|id| id.name())
    }

    /// Copy every computed property that has a value.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(PropertyId, Value)> {
        computed_properties()
            .iter()
            .filter_map(|&id| self.value_for_property(id).map(|value| (id, value)))
            .collect()
    }

    /// `font-size`, as its keyword when it was specified with one.
    #[must_use]
    pub fn font_size_value_preferring_keyword(&self) -> Option<Value> {
        self.node.update_layout();
        let style = self.node.computed_style(self.pseudo)?;
        let keyword_size = style.font.keyword_size;
        if keyword_size > 0 {
            let code = Keyword::XxSmall.code() + u16::from(keyword_size) - 1;
            return Some(self.node.value_cache().borrow_mut().identifier_value(code).into());
        }
        self.value_for_property_with(PropertyId::FontSize, false)
    }

    /// Whether the font size came from the fixed-pitch default.
    #[must_use]
    pub fn use_fixed_font_default_size(&self) -> bool {
        self.node
            .computed_style(self.pseudo)
            .is_some_and(|style| style.font.use_fixed_default_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pseudo_names_strip_colons() {
        assert_eq!(PseudoId::from_name("::before"), PseudoId::Before);
        assert_eq!(PseudoId::from_name(":after"), PseudoId::After);
        assert_eq!(PseudoId::from_name("first-line"), PseudoId::FirstLine);
        assert_eq!(PseudoId::from_name(""), PseudoId::None);
        assert_eq!(PseudoId::from_name("::bogus"), PseudoId::None);
    }

    #[test]
    fn test_sizing_box_follows_box_sizing() {
        let layout = LayoutBox {
            content_box: BoxSize { width: 10, height: 20 },
            border_box: BoxSize { width: 14, height: 24 },
            padding: EdgeSizes::default(),
        };
        assert_eq!(layout.sizing_box(BoxSizing::ContentBox).width, 10);
        assert_eq!(layout.sizing_box(BoxSizing::BorderBox).height, 24);
    }
}
