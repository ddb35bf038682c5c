//! Timing functions for animations
//!
//! A timing function maps normalized time to a blend fraction, shaping the
//! rate of change.

use std::fmt;
use std::rc::Rc;

use reel_core::NormalizedTime;

/// Timing function that controls the animation curve
#[derive(Clone, Default)]
pub enum TimingFunction {
    /// Constant speed
    #[default]
    Linear,
    /// Quadratic ease-in-out: slow start and end, fast middle
    EaseInOut,
    /// User-defined curve
    Custom(Rc<dyn Fn(NormalizedTime) -> f32>),
}

impl TimingFunction {
    /// Wrap a closure as a timing function
    pub fn custom(f: impl Fn(NormalizedTime) -> f32 + 'static) -> Self {
        TimingFunction::Custom(Rc::new(f))
    }

    /// Blend fraction at `time`
    pub fn apply(&self, time: NormalizedTime) -> f32 {
        match self {
            TimingFunction::Linear => time.value() as f32,
            TimingFunction::EaseInOut => ease_in_out(time.value()) as f32,
            TimingFunction::Custom(f) => f(time),
        }
    }
}

impl fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingFunction::Linear => f.write_str("Linear"),
            TimingFunction::EaseInOut => f.write_str("EaseInOut"),
            TimingFunction::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// `2t²` on the first half, `1 - 2(1-t)²` on the second
fn ease_in_out(t: f64) -> f64 {
    let twice = t * 2.0;
    if twice <= 1.0 {
        twice * twice * 0.5
    } else {
        1.0 - (2.0 - twice) * (2.0 - twice) * 0.5
    }
}
