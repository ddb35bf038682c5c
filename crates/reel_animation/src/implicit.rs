//! Implicit animations
//!
//! An [`ImplicitlyAnimatableProperty`] animates itself: assigning a new value
//! asks a provider for an animation from the current on-screen value to the
//! new one, and submits it to the context's driver. The call site never builds
//! the animation.
//!
//! ```rust
//! use std::rc::Rc;
//! use reel_animation::{AnimationContext, BasicTransition, ManualAnimator};
//!
//! let animator = Rc::new(ManualAnimator::new());
//! let context = AnimationContext::new(animator.clone());
//!
//! let mut opacity = context.implicit_property(0.0f32, |_| {}, BasicTransition::new(0.5).unwrap());
//! opacity.set(1.0);
//!
//! assert_eq!(*opacity.value(), 1.0);
//! animator.seek(0.25);
//! assert_eq!(opacity.presentation_value(), 0.5);
//! ```

use std::rc::Rc;

use reel_core::{validate_duration, AnimatableProperty, Interpolate, Result};

use crate::animation::Animation;
use crate::animator::AnimationContext;
use crate::basic::BasicAnimation;
use crate::timing::TimingFunction;

/// Builds the animation that plays when an implicit property changes
pub trait ImplicitAnimationProvider<T: Interpolate> {
    fn animation(&self, property: &AnimatableProperty<T>, from: T, to: T) -> Box<dyn Animation>;
}

impl<T, F> ImplicitAnimationProvider<T> for F
where
    T: Interpolate,
    F: Fn(&AnimatableProperty<T>, T, T) -> Box<dyn Animation>,
{
    fn animation(&self, property: &AnimatableProperty<T>, from: T, to: T) -> Box<dyn Animation> {
        self(property, from, to)
    }
}

/// Provider that plays a [`BasicAnimation`] of fixed duration and timing
#[derive(Clone, Debug)]
pub struct BasicTransition {
    duration: f64,
    timing: TimingFunction,
}

impl BasicTransition {
    /// Fails for negative, NaN or infinite durations
    pub fn new(duration: f64) -> Result<Self> {
        Ok(Self {
            duration: validate_duration(duration)?,
            timing: TimingFunction::Linear,
        })
    }

    /// Builder: set the timing function
    pub fn with_timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }
}

impl<T: Interpolate + 'static> ImplicitAnimationProvider<T> for BasicTransition {
    fn animation(&self, property: &AnimatableProperty<T>, from: T, to: T) -> Box<dyn Animation> {
        Box::new(
            BasicAnimation::new(from, to, property.clone(), self.duration)
                .with_timing(self.timing.clone()),
        )
    }
}

/// A property that animates toward every value assigned to it
pub struct ImplicitlyAnimatableProperty<T: Interpolate> {
    property: AnimatableProperty<T>,
    target: T,
    provider: Rc<dyn ImplicitAnimationProvider<T>>,
    context: AnimationContext,
}

impl<T: Interpolate> ImplicitlyAnimatableProperty<T> {
    pub fn new(
        property: AnimatableProperty<T>,
        provider: Rc<dyn ImplicitAnimationProvider<T>>,
        context: AnimationContext,
    ) -> Self {
        let target = property.value();
        Self {
            property,
            target,
            provider,
            context,
        }
    }

    /// The last assigned value
    pub fn value(&self) -> &T {
        &self.target
    }

    /// The live value, which trails [`value`](Self::value) while animating
    pub fn presentation_value(&self) -> T {
        self.property.value()
    }

    /// Assign a new value and animate toward it from the presentation value
    pub fn set(&mut self, value: T) {
        let from = self.property.value();
        let animation = self.provider.animation(&self.property, from, value.clone());
        self.target = value;
        self.context.submit(animation);
    }

    /// The underlying property animations write to
    pub fn property(&self) -> &AnimatableProperty<T> {
        &self.property
    }
}

impl AnimationContext {
    /// Create an implicitly animatable property bound to this context's driver
    pub fn implicit_property<T: Interpolate>(
        &self,
        value: T,
        on_change: impl Fn(&T) + 'static,
        provider: impl ImplicitAnimationProvider<T> + 'static,
    ) -> ImplicitlyAnimatableProperty<T> {
        ImplicitlyAnimatableProperty::new(
            AnimatableProperty::new(value, on_change),
            Rc::new(provider),
            self.clone(),
        )
    }
}
