//! Reel Animation System
//!
//! Declarative, composable animations driven by normalized time.
//!
//! # Features
//!
//! - **Property Animations**: two-point and key-point animations of any
//!   interpolatable value
//! - **Combinators**: play animations backwards, in parallel, or in sequence,
//!   nested arbitrarily
//! - **Implicit Animations**: properties that animate themselves on assignment
//! - **Drivers**: a frame-clock scheduler and a manually scrubbed animator
//!
//! # Example
//!
//! ```rust
//! use reel_animation::{Animation, BasicAnimation, Group, Sequence};
//! use reel_core::{AnimatableProperty, NormalizedTime};
//!
//! let x = AnimatableProperty::detached(0.0f32);
//! let y = AnimatableProperty::detached(0.0f32);
//!
//! let slide = Sequence::new([
//!     BasicAnimation::new(10.0f32, 100.0, x.clone(), 1.0).boxed(),
//!     BasicAnimation::new(0.0f32, 50.0, y.clone(), 1.0).boxed(),
//! ])
//! .unwrap();
//! let bounce = Group::new([slide.boxed()]).unwrap().inverted();
//!
//! // Inverted: the start of `bounce` is the end of `slide`
//! bounce.tick(NormalizedTime::ZERO);
//! assert_eq!(y.value(), 50.0);
//! bounce.tick(NormalizedTime::ONE);
//! assert_eq!(x.value(), 10.0);
//! ```

pub mod animation;
pub mod animator;
pub mod basic;
pub mod combinators;
pub mod implicit;
pub mod keypoints;
pub mod manual;
pub mod scheduler;
pub mod timing;

pub use animation::{Animation, PropertyAnimation};
pub use animator::{AnimationContext, Animator};
pub use basic::BasicAnimation;
pub use combinators::{Group, Invert, Sequence};
pub use implicit::{BasicTransition, ImplicitAnimationProvider, ImplicitlyAnimatableProperty};
pub use keypoints::{KeyPoint, KeyPoints, KeyPointsAnimation};
pub use manual::ManualAnimator;
pub use scheduler::{AnimationId, AnimationScheduler};
pub use timing::TimingFunction;
