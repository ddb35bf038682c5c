//! Drivers and the context that reaches them

use std::fmt;
use std::rc::Rc;

use crate::animation::Animation;

/// Something that pumps time into animations.
///
/// A driver that accepts an animation commits to ticking it from 0 up to and
/// including a time that clamps to 1, over roughly `duration` seconds, and
/// then to stop. Cancelling or pausing is up to the driver.
pub trait Animator {
    fn run(&self, animation: Box<dyn Animation>);
}

impl<A: Animator + ?Sized> Animator for Rc<A> {
    fn run(&self, animation: Box<dyn Animation>) {
        (**self).run(animation)
    }
}

/// Handle to the driver that implicit animations are submitted to.
///
/// Whoever creates implicitly animatable properties holds one of these and
/// passes it along; cloning shares the same driver.
#[derive(Clone)]
pub struct AnimationContext {
    animator: Rc<dyn Animator>,
}

impl AnimationContext {
    pub fn new(animator: Rc<dyn Animator>) -> Self {
        Self { animator }
    }

    /// Submit an animation to the driver
    pub fn run(&self, animation: impl Animation + 'static) {
        self.submit(Box::new(animation));
    }

    /// Submit an already boxed animation to the driver
    pub fn submit(&self, animation: Box<dyn Animation>) {
        tracing::trace!("Submitting animation lasting {}s", animation.duration());
        self.animator.run(animation);
    }

    pub fn animator(&self) -> &Rc<dyn Animator> {
        &self.animator
    }
}

impl fmt::Debug for AnimationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationContext").finish_non_exhaustive()
    }
}
