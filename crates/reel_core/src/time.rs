//! Normalized time
//!
//! All animation math is expressed as a fraction of an animation's duration.
//! Wrapping the fraction keeps "elapsed seconds" and "normalized progress"
//! from being mixed up as raw floats.

use std::ops::{Add, Mul, Sub};

/// Progress through an animation, nominally in `[0, 1]`.
///
/// The constructors clamp to at most `1.0` but never clamp below zero.
/// Arithmetic does not clamp at all; leaves call [`NormalizedTime::clamped`]
/// before interpolating.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct NormalizedTime(f64);

impl NormalizedTime {
    pub const ZERO: NormalizedTime = NormalizedTime(0.0);
    pub const ONE: NormalizedTime = NormalizedTime(1.0);

    /// Progress of `elapsed` seconds through an interval of `max` seconds.
    ///
    /// A non-positive `max` is a zero-length interval, which is complete.
    pub fn from_interval(elapsed: f64, max: f64) -> Self {
        if max <= 0.0 {
            return Self::ONE;
        }
        Self::clamp_upper(elapsed / max)
    }

    /// Ratio of two normalized times, used to re-derive a child's local
    /// time from a window of its parent's time.
    pub fn relative(time: NormalizedTime, max: NormalizedTime) -> Self {
        Self::from_interval(time.0, max.0)
    }

    fn clamp_upper(value: f64) -> Self {
        // `f64::min` ignores NaN, so a NaN ratio lands on 1
        NormalizedTime(value.min(1.0))
    }

    /// The underlying fraction
    pub fn value(self) -> f64 {
        self.0
    }

    /// `1 - t`, for playing backwards
    pub fn inverted(self) -> Self {
        NormalizedTime(1.0 - self.0)
    }

    /// Clamp into `[0, 1]`
    pub fn clamped(self) -> Self {
        NormalizedTime(self.0.clamp(0.0, 1.0))
    }
}

impl Add for NormalizedTime {
    type Output = NormalizedTime;

    fn add(self, rhs: Self) -> Self::Output {
        NormalizedTime(self.0 + rhs.0)
    }
}

impl Sub for NormalizedTime {
    type Output = NormalizedTime;

    fn sub(self, rhs: Self) -> Self::Output {
        NormalizedTime(self.0 - rhs.0)
    }
}

impl Mul for NormalizedTime {
    type Output = NormalizedTime;

    fn mul(self, rhs: Self) -> Self::Output {
        NormalizedTime(self.0 * rhs.0)
    }
}
