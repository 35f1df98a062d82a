//! CSS value model, property application, and computed-style reconstruction
//! for the Quokka style engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Value model** ([CSSOM § 6.7 CSS Values](https://drafts.csswg.org/cssom/#css-values))
//!   - Primitive values with unit conversion and `cssText` serialization
//!   - Lists, shadows, border images, reflections, timing functions, transforms
//!   - A per-document [`values::ValueCache`] sharing common identifiers,
//!     colors and small integers
//!
//! - **Resolved style** ([§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed))
//!   - [`style::Style`], the typed record layout reads
//!   - Background and mask layers, fonts, SVG properties, `:visited` colors
//!
//! - **Property application** ([§ 6.1 Cascaded Values](https://www.w3.org/TR/css-cascade-4/#cascaded))
//!   - A process-wide table binding each property to an apply strategy
//!   - `inherit` / `initial` handling and flow-relative property mapping
//!
//! - **Computed style** ([CSSOM § 9.1](https://drafts.csswg.org/cssom/#dom-window-getcomputedstyle))
//!   - [`computed::ComputedStyleDeclaration`], a read-only declaration that
//!     turns a node's style back into values, zoom-compensated
//!
//! # Features
//!
//! - `svg` (default): SVG presentation properties in computed styles
//! - `dashboard`: `-webkit-dashboard-region`
//!
//! # Not Implemented
//!
//! - Parsing style sheets; callers hand in already-parsed values
//! - Selector matching and the cascade itself
//! - Writing through a computed declaration (always an error)

pub mod apply;
pub mod computed;
pub mod error;
pub mod keyword;
pub mod property;
pub mod style;
pub mod values;
