//! Common utilities for the Quokka style engine.
//!
//! This crate provides shared infrastructure used by the style crates:
//! - **Warning System** - colored, deduplicated terminal diagnostics
//! - **URL Completion** - resolving stylesheet-relative URLs against a base

pub mod url;
pub mod warning;
