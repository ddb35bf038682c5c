//! Composition of animations
//!
//! Combinators own their children and remap the parent's normalized time into
//! each child's local normalized time:
//!
//! - [`Invert`] plays a child backwards
//! - [`Group`] runs children in parallel, stretched to the longest one
//! - [`Sequence`] runs children one after another

use smallvec::SmallVec;

use reel_core::{validate_duration, NormalizedTime, Result};

use crate::animation::Animation;

/// Plays its child backwards: `tick(t)` becomes `tick(1 - t)`
#[derive(Debug, Clone)]
pub struct Invert<A> {
    animation: A,
}

impl<A: Animation> Invert<A> {
    pub fn new(animation: A) -> Self {
        Self { animation }
    }

    /// Inverting an inversion unwraps it, so double inversion is exact
    pub fn inverted(self) -> A {
        self.animation
    }

    pub fn inner(&self) -> &A {
        &self.animation
    }
}

impl<A: Animation> Animation for Invert<A> {
    fn duration(&self) -> f64 {
        self.animation.duration()
    }

    fn tick(&self, time: NormalizedTime) {
        self.animation.tick(time.inverted());
    }
}

/// A child of a group and its time multiplier
struct GroupChild {
    animation: Box<dyn Animation>,
    /// `group duration / child duration`, or `None` for a zero-duration
    /// child, which is always complete
    multiplier: Option<f64>,
}

/// Parallel composition.
///
/// The group lasts as long as its longest child. Shorter children run faster
/// so they finish when their own duration has elapsed, then stay pinned at 1.
pub struct Group {
    children: SmallVec<[GroupChild; 4]>,
    duration: f64,
}

impl Group {
    /// Build a group. Fails if any child has a negative or non-finite duration.
    pub fn new(animations: impl IntoIterator<Item = Box<dyn Animation>>) -> Result<Self> {
        let animations: SmallVec<[Box<dyn Animation>; 4]> = animations.into_iter().collect();

        let mut duration = 0.0f64;
        for animation in &animations {
            duration = duration.max(validate_duration(animation.duration())?);
        }

        let children: SmallVec<[GroupChild; 4]> = animations
            .into_iter()
            .map(|animation| {
                let child_duration = animation.duration();
                let multiplier = (child_duration > 0.0).then(|| duration / child_duration);
                GroupChild {
                    animation,
                    multiplier,
                }
            })
            .collect();

        tracing::debug!(
            "Built group of {} animations lasting {}s",
            children.len(),
            duration
        );

        Ok(Self { children, duration })
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Animation for Group {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn tick(&self, time: NormalizedTime) {
        for child in &self.children {
            let local = match child.multiplier {
                Some(multiplier) => NormalizedTime::from_interval(time.value() * multiplier, 1.0),
                None => NormalizedTime::ONE,
            };
            child.animation.tick(local);
        }
    }
}

/// A child of a sequence and its window in the sequence's time
struct SequenceChild {
    animation: Box<dyn Animation>,
    start: NormalizedTime,
    span: NormalizedTime,
    /// Zero-duration children complete as soon as their start is reached
    instant: bool,
    /// The last child with a non-zero duration also handles every time past
    /// its window, so `t >= 1` always reaches it
    terminal: bool,
}

impl SequenceChild {
    fn tick(&self, time: NormalizedTime) {
        if time < self.start {
            return;
        }
        if self.instant || (self.terminal && time >= NormalizedTime::ONE) {
            self.animation.tick(NormalizedTime::ONE);
            return;
        }
        if time < self.start + self.span || self.terminal {
            let local = NormalizedTime::relative(time - self.start, self.span);
            self.animation.tick(local);
        }
    }
}

/// Ordered composition.
///
/// The sequence lasts as long as all children together. Each child owns the
/// half-open window `[start, start + span)` of the sequence's time, so a time
/// exactly on a boundary activates the next child at its local time 0.
pub struct Sequence {
    children: SmallVec<[SequenceChild; 4]>,
    duration: f64,
}

impl Sequence {
    /// Build a sequence. Fails if any child has a negative or non-finite duration.
    pub fn new(animations: impl IntoIterator<Item = Box<dyn Animation>>) -> Result<Self> {
        let animations: SmallVec<[Box<dyn Animation>; 4]> = animations.into_iter().collect();

        let mut duration = 0.0f64;
        for animation in &animations {
            duration += validate_duration(animation.duration())?;
        }

        let terminal = animations.iter().rposition(|a| a.duration() > 0.0);

        let mut start = NormalizedTime::ZERO;
        let children: SmallVec<[SequenceChild; 4]> = animations
            .into_iter()
            .enumerate()
            .map(|(index, animation)| {
                let child_duration = animation.duration();
                let span = if child_duration > 0.0 {
                    NormalizedTime::from_interval(child_duration, duration)
                } else {
                    NormalizedTime::ZERO
                };
                let child = SequenceChild {
                    animation,
                    start,
                    span,
                    instant: child_duration <= 0.0,
                    terminal: terminal == Some(index),
                };
                start = start + span;
                child
            })
            .collect();

        tracing::debug!(
            "Built sequence of {} animations lasting {}s",
            children.len(),
            duration
        );

        Ok(Self { children, duration })
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Animation for Sequence {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn tick(&self, time: NormalizedTime) {
        for child in &self.children {
            child.tick(time);
        }
    }
}
