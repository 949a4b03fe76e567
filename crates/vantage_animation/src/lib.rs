//! Vantage Animation System
//!
//! Scroll-driven animation primitives.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs used to smooth raw scroll progress
//! - **Easing**: Cubic ease-in-out, CSS cubic-bezier curves, and friends
//! - **Scroll Tracking**: Section-relative scroll progress with spring smoothing
//!   and threshold latches
//! - **Scroll Transforms**: Piecewise-linear mapping of progress to properties
//! - **Tweens**: Time-driven entrances, including staggered groups

pub mod easing;
pub mod error;
pub mod scroll;
pub mod spring;
pub mod transform;
pub mod tween;

pub use easing::Easing;
pub use error::{AnimationError, StopList};
pub use scroll::{LatchConfig, ScrollLatches, ScrollTracker, SectionBounds};
pub use spring::{Spring, SpringConfig};
pub use transform::ScrollTransform;
pub use tween::{StaggerGroup, Tween};
