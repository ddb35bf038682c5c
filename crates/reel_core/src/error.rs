//! Animation error types

use thiserror::Error;

/// Errors raised while building animation trees.
///
/// Ticking an animation never fails; every error surfaces at construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// The animation description cannot be played as given
    #[error("Invalid animation configuration: {0}")]
    InvalidConfiguration(String),
}

impl AnimationError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        AnimationError::InvalidConfiguration(msg.into())
    }
}

/// Result type for animation construction
pub type Result<T> = std::result::Result<T, AnimationError>;

/// Check that a wall-clock duration is usable by a combinator.
///
/// Zero is accepted (the animation is treated as already complete); negative,
/// NaN and infinite durations are rejected.
pub fn validate_duration(duration: f64) -> Result<f64> {
    if duration.is_finite() && duration >= 0.0 {
        Ok(duration)
    } else {
        Err(AnimationError::invalid(format!(
            "duration must be a finite, non-negative number of seconds, got {duration}"
        )))
    }
}
