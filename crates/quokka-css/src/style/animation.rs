//! Animation and transition records.
//!
//! [CSS Animations Level 1](https://www.w3.org/TR/css-animations-1/)
//! [CSS Transitions Level 1](https://www.w3.org/TR/css-transitions-1/)
//!
//! The timing machinery lives elsewhere. Styles only carry the configured
//! list, one [`Animation`] per comma-separated entry.

use serde::Serialize;

use crate::property::PropertyId;

use super::keywords::{AnimationDirection, AnimationFillMode, AnimationPlayState};

/// Iteration count meaning `infinite`.
pub const ITERATION_COUNT_INFINITE: f64 = -1.0;

/// [§ 2 Easing Functions](https://www.w3.org/TR/css-easing-1/#easing-functions)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum TimingFunction {
    /// `linear`
    Linear,
    /// `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier {
        /// First control point, x.
        x1: f64,
        /// First control point, y.
        y1: f64,
        /// Second control point, x.
        x2: f64,
        /// Second control point, y.
        y2: f64,
    },
    /// `steps(n, start|end)`
    Steps {
        /// Number of intervals.
        steps: i32,
        /// Whether the jump happens at the start of each interval.
        start: bool,
    },
}

impl TimingFunction {
    /// `ease`, the initial timing function.
    pub const EASE: Self = Self::CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    };
}

impl Default for TimingFunction {
    fn default() -> Self {
        Self::EASE
    }
}

/// What a transition animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AnimatedProperty {
    /// `none`
    None,
    /// `all`
    #[default]
    All,
    /// A single property.
    Property(PropertyId),
}

/// One configured animation or transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    /// `-webkit-animation-name`; empty for `none`.
    pub name: String,
    /// Seconds.
    pub duration: f64,
    /// Seconds.
    pub delay: f64,
    /// Number of iterations, or [`ITERATION_COUNT_INFINITE`].
    pub iteration_count: f64,
    /// `-webkit-animation-direction`
    pub direction: AnimationDirection,
    /// `-webkit-animation-fill-mode`
    pub fill_mode: AnimationFillMode,
    /// `-webkit-animation-play-state`
    pub play_state: AnimationPlayState,
    /// `-webkit-*-timing-function`
    pub timing_function: TimingFunction,
    /// `-webkit-transition-property`
    pub property: AnimatedProperty,
}

impl Animation {
    /// Initial delay: `0s`.
    pub const INITIAL_DELAY: f64 = 0.0;
    /// Initial duration: `0s`.
    pub const INITIAL_DURATION: f64 = 0.0;
    /// Initial iteration count: `1`.
    pub const INITIAL_ITERATION_COUNT: f64 = 1.0;
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            name: String::new(),
            duration: Self::INITIAL_DURATION,
            delay: Self::INITIAL_DELAY,
            iteration_count: Self::INITIAL_ITERATION_COUNT,
            direction: AnimationDirection::default(),
            fill_mode: AnimationFillMode::default(),
            play_state: AnimationPlayState::default(),
            timing_function: TimingFunction::default(),
            property: AnimatedProperty::default(),
        }
    }
}
