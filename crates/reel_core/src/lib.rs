//! Reel Core
//!
//! Foundational primitives for the Reel animation engine:
//!
//! - **Normalized Time**: progress fractions that cannot be confused with seconds
//! - **Interpolation**: blend any value type toward another by a fraction
//! - **Animatable Properties**: observed value cells that animations write into
//!
//! # Example
//!
//! ```rust
//! use reel_core::{AnimatableProperty, Interpolate, NormalizedTime};
//!
//! let property = AnimatableProperty::new(0.0f32, |v| println!("value is now {v}"));
//!
//! let t = NormalizedTime::from_interval(0.5, 2.0);
//! property.set(0.0f32.interpolate(&100.0, t.value() as f32));
//! assert_eq!(property.value(), 25.0);
//! ```

pub mod error;
pub mod interpolate;
pub mod property;
pub mod time;

pub use error::{validate_duration, AnimationError, Result};
pub use interpolate::{Interpolate, Scalar};
pub use property::AnimatableProperty;
pub use time::NormalizedTime;
