//! Interpolation between animatable values

use std::ops::Add;

/// Trait for types that can be blended toward another value
pub trait Interpolate: Clone {
    /// Blend from `self` toward `to`.
    /// `fraction = 0.0` returns `self`, `fraction = 1.0` returns `to`.
    /// Fractions outside `[0, 1]` extrapolate.
    fn interpolate(&self, to: &Self, fraction: f32) -> Self;
}

/// Values with addition and scaling, which get linear interpolation for free
/// (`self * (1 - f) + to * f`).
pub trait Scalar: Clone + Add<Output = Self> {
    fn scale(self, factor: f32) -> Self;

    /// Linear blend used by [`Interpolate`]. Override when the weighted sum
    /// loses precision or can overflow.
    fn lerp(&self, to: &Self, fraction: f32) -> Self {
        self.clone().scale(1.0 - fraction) + to.clone().scale(fraction)
    }
}

impl<T: Scalar> Interpolate for T {
    fn interpolate(&self, to: &Self, fraction: f32) -> Self {
        self.lerp(to, fraction)
    }
}

impl Scalar for f32 {
    fn scale(self, factor: f32) -> Self {
        self * factor
    }
}

impl Scalar for f64 {
    fn scale(self, factor: f32) -> Self {
        self * factor as f64
    }
}

macro_rules! impl_integer_scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                fn scale(self, factor: f32) -> Self {
                    (self as f64 * factor as f64).round() as $ty
                }

                // Blend in f64 and convert once: rounds to nearest and
                // saturates at the bounds of the type
                fn lerp(&self, to: &Self, fraction: f32) -> Self {
                    let from = *self as f64;
                    (from + (*to as f64 - from) * fraction as f64).round() as $ty
                }
            }
        )*
    };
}

impl_integer_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
