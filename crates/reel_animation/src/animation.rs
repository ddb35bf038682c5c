//! The animation contract
//!
//! Every node in an animation tree has a fixed wall-clock duration and a
//! `tick` that a driver calls repeatedly with normalized time. Leaves write
//! interpolated values into properties; combinators remap time for their
//! children.

use std::rc::Rc;

use reel_core::{AnimatableProperty, Interpolate, NormalizedTime};

use crate::combinators::Invert;

/// A node in an animation tree
pub trait Animation {
    /// Wall-clock duration in seconds
    fn duration(&self) -> f64;

    /// Advance to `time`. Must never fail; out-of-range times are tolerated.
    fn tick(&self, time: NormalizedTime);

    /// Play this animation backwards
    fn inverted(self) -> Invert<Self>
    where
        Self: Sized,
    {
        Invert::new(self)
    }

    /// Erase the concrete type, for heterogeneous child lists
    fn boxed(self) -> Box<dyn Animation>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<A: Animation + ?Sized> Animation for Box<A> {
    fn duration(&self) -> f64 {
        (**self).duration()
    }

    fn tick(&self, time: NormalizedTime) {
        (**self).tick(time)
    }
}

impl<A: Animation + ?Sized> Animation for Rc<A> {
    fn duration(&self) -> f64 {
        (**self).duration()
    }

    fn tick(&self, time: NormalizedTime) {
        (**self).tick(time)
    }
}

/// A leaf animation that drives a single property.
///
/// Implementors route [`Animation::tick`] through [`PropertyAnimation::apply`]
/// so every leaf writes exactly one interpolated value per tick.
pub trait PropertyAnimation: Animation {
    type Value: Interpolate;

    /// The property written on every tick
    fn property(&self) -> &AnimatableProperty<Self::Value>;

    /// The value at `time`; times outside `[0, 1]` are clamped first
    fn interpolated_value(&self, time: NormalizedTime) -> Self::Value;

    /// Compute the value at `time` and write it to the property
    fn apply(&self, time: NormalizedTime) {
        self.property().set(self.interpolated_value(time.clamped()));
    }
}
