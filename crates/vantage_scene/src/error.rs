//! Scene errors
//!
//! Only configuration can fail. Once an animator is mounted every frame
//! produces a defined state.

use thiserror::Error;
use vantage_animation::AnimationError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("camera path needs at least two waypoints, got {0}")]
    TooFewWaypoints(usize),

    #[error("waypoint thresholds must be strictly increasing (waypoint {index} at {progress})")]
    UnorderedWaypoints { index: usize, progress: f32 },

    #[error("{name} must be in (0, 1], got {value}")]
    InvalidFactor { name: &'static str, value: f32 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{0} is not finite")]
    NonFinite(&'static str),

    #[error("spring parameters must be finite and positive")]
    InvalidSpring,

    #[error("animation clip '{name}' has invalid duration {duration}")]
    InvalidClip { name: String, duration: f32 },

    #[error("clip range end ({end}) must be greater than start ({start})")]
    EmptyClipRange { start: f32, end: f32 },

    #[error(transparent)]
    Transform(#[from] AnimationError),
}
