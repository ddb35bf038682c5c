//! Two-point property animations

use reel_core::{AnimatableProperty, Interpolate, NormalizedTime};

use crate::animation::{Animation, PropertyAnimation};
use crate::timing::TimingFunction;

/// Animates a property from one value to another
#[derive(Clone)]
pub struct BasicAnimation<T: Interpolate> {
    from: T,
    to: T,
    property: AnimatableProperty<T>,
    duration: f64,
    timing: TimingFunction,
}

impl<T: Interpolate> BasicAnimation<T> {
    /// Animate `property` from `from` to `to` over `duration` seconds, linearly
    pub fn new(from: T, to: T, property: AnimatableProperty<T>, duration: f64) -> Self {
        Self {
            from,
            to,
            property,
            duration,
            timing: TimingFunction::Linear,
        }
    }

    /// Animate a fresh property that starts at `from` and reports each
    /// value to `applicator`
    pub fn with_applicator(
        from: T,
        to: T,
        duration: f64,
        applicator: impl Fn(&T) + 'static,
    ) -> Self {
        let property = AnimatableProperty::new(from.clone(), applicator);
        Self::new(from, to, property, duration)
    }

    /// Builder: set the timing function
    pub fn with_timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    pub fn from(&self) -> &T {
        &self.from
    }

    pub fn to(&self) -> &T {
        &self.to
    }

    pub fn timing(&self) -> &TimingFunction {
        &self.timing
    }
}

impl<T: Interpolate> Animation for BasicAnimation<T> {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn tick(&self, time: NormalizedTime) {
        self.apply(time);
    }
}

impl<T: Interpolate> PropertyAnimation for BasicAnimation<T> {
    type Value = T;

    fn property(&self) -> &AnimatableProperty<T> {
        &self.property
    }

    fn interpolated_value(&self, time: NormalizedTime) -> T {
        let fraction = self.timing.apply(time.clamped());
        self.from.interpolate(&self.to, fraction)
    }
}
