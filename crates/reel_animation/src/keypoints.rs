//! Keyframe animations
//!
//! A [`KeyPointsAnimation`] moves a property through a list of key points.
//! Each key point names the value to reach, the normalized time to reach it
//! at, and the timing function used on the way there. The animation's
//! initial value acts as an implicit key point at time 0.

use reel_core::{
    validate_duration, AnimatableProperty, AnimationError, Interpolate, NormalizedTime, Result,
};

use crate::animation::{Animation, PropertyAnimation};
use crate::timing::TimingFunction;

/// A single key point
#[derive(Clone, Debug)]
pub struct KeyPoint<T> {
    /// Value reached at `time`
    pub value: T,
    /// Time position, in `(0, 1]`
    pub time: f64,
    /// Timing function used when transitioning TO this key point
    pub timing: TimingFunction,
}

/// Ordered key points, collected with a fluent builder
#[derive(Clone, Debug)]
pub struct KeyPoints<T> {
    points: Vec<KeyPoint<T>>,
}

impl<T> KeyPoints<T> {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Add a key point reached with the given timing function
    pub fn point(mut self, value: T, time: f64, timing: TimingFunction) -> Self {
        self.points.push(KeyPoint {
            value,
            time,
            timing,
        });
        self
    }

    /// Add a key point reached linearly
    pub fn linear(self, value: T, time: f64) -> Self {
        self.point(value, time, TimingFunction::Linear)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<T> Default for KeyPoints<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<KeyPoint<T>> for KeyPoints<T> {
    fn from_iter<I: IntoIterator<Item = KeyPoint<T>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// One interval between two key points
#[derive(Clone)]
struct Segment<T> {
    start: NormalizedTime,
    end: NormalizedTime,
    from: T,
    to: T,
    timing: TimingFunction,
}

impl<T: Interpolate> Segment<T> {
    /// `[start, end)`, or `[start, end]` for the final segment
    fn contains(&self, time: NormalizedTime, closed: bool) -> bool {
        time >= self.start && (time < self.end || (closed && time <= self.end))
    }

    fn interpolate(&self, time: NormalizedTime) -> T {
        let local = NormalizedTime::relative(time - self.start, self.end - self.start);
        self.from.interpolate(&self.to, self.timing.apply(local))
    }
}

/// A multi-point animation of a single property
#[derive(Clone)]
pub struct KeyPointsAnimation<T: Interpolate> {
    initial: T,
    segments: Vec<Segment<T>>,
    property: AnimatableProperty<T>,
    duration: f64,
}

impl<T: Interpolate> KeyPointsAnimation<T> {
    /// Build the animation from `initial` through `points`.
    ///
    /// Key point times must lie in `(0, 1]` and strictly increase.
    pub fn new(
        initial: T,
        property: AnimatableProperty<T>,
        duration: f64,
        points: KeyPoints<T>,
    ) -> Result<Self> {
        let duration = validate_duration(duration)?;

        let mut segments = Vec::with_capacity(points.len());
        let mut start = NormalizedTime::ZERO;
        let mut from = initial.clone();

        for (index, point) in points.points.into_iter().enumerate() {
            if !(point.time > start.value() && point.time <= 1.0) {
                return Err(AnimationError::InvalidConfiguration(format!(
                    "key point {} at time {} must lie in ({}, 1]",
                    index,
                    point.time,
                    start.value()
                )));
            }
            let end = NormalizedTime::from_interval(point.time, 1.0);
            segments.push(Segment {
                start,
                end,
                from,
                to: point.value.clone(),
                timing: point.timing,
            });
            start = end;
            from = point.value;
        }

        tracing::debug!(
            "Built key points animation with {} segments lasting {}s",
            segments.len(),
            duration
        );

        Ok(Self {
            initial,
            segments,
            property,
            duration,
        })
    }

    pub fn initial(&self) -> &T {
        &self.initial
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

impl<T: Interpolate> Animation for KeyPointsAnimation<T> {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn tick(&self, time: NormalizedTime) {
        self.apply(time);
    }
}

impl<T: Interpolate> PropertyAnimation for KeyPointsAnimation<T> {
    type Value = T;

    fn property(&self) -> &AnimatableProperty<T> {
        &self.property
    }

    fn interpolated_value(&self, time: NormalizedTime) -> T {
        let time = time.clamped();
        let last = self.segments.len().saturating_sub(1);

        for (index, segment) in self.segments.iter().enumerate() {
            if segment.contains(time, index == last) {
                return segment.interpolate(time);
            }
        }

        // Past the final key point the value holds there
        match self.segments.last() {
            Some(segment) if time > segment.end => segment.to.clone(),
            _ => self.initial.clone(),
        }
    }
}
