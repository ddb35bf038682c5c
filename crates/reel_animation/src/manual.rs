//! Manually stepped driver, for scrubbing and tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use reel_core::NormalizedTime;

use crate::animation::Animation;
use crate::animator::Animator;

/// Placeholder ticked before anything is submitted
struct Idle;

impl Animation for Idle {
    fn duration(&self) -> f64 {
        0.0
    }

    fn tick(&self, _time: NormalizedTime) {}
}

/// A driver whose clock is set by hand.
///
/// Submitting an animation replaces the current one and ticks it at time 0;
/// every [`set_time`](Self::set_time) ticks the current animation again.
pub struct ManualAnimator {
    current: RefCell<Rc<dyn Animation>>,
    time: Cell<NormalizedTime>,
}

impl ManualAnimator {
    pub fn new() -> Self {
        Self {
            current: RefCell::new(Rc::new(Idle)),
            time: Cell::new(NormalizedTime::ZERO),
        }
    }

    /// Time the current animation was last ticked at
    pub fn time(&self) -> NormalizedTime {
        self.time.get()
    }

    /// Move the clock and tick the current animation
    pub fn set_time(&self, time: NormalizedTime) {
        self.time.set(time);
        // Release the borrow first so a property callback may submit
        let current = Rc::clone(&self.current.borrow());
        current.tick(time);
    }

    /// Move the clock to `elapsed` seconds into the current animation
    pub fn seek(&self, elapsed: f64) {
        let duration = self.current.borrow().duration();
        self.set_time(NormalizedTime::from_interval(elapsed, duration));
    }

    /// Duration of the current animation, 0 when idle
    pub fn duration(&self) -> f64 {
        self.current.borrow().duration()
    }
}

impl Default for ManualAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator for ManualAnimator {
    fn run(&self, animation: Box<dyn Animation>) {
        tracing::trace!("Manual animator now scrubbing {}s animation", animation.duration());
        *self.current.borrow_mut() = Rc::from(animation);
        self.set_time(NormalizedTime::ZERO);
    }
}
