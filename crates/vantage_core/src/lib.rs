//! Vantage Core
//!
//! Foundational primitives shared by the Vantage scroll animation crates:
//!
//! - **Math**: `Vec3` and scalar helpers (`lerp`, `clamp01`, exponential follow)
//! - **Interpolation**: the `Interpolate` trait for anything that can be blended
//! - **Progress Signals**: a single-writer, many-reader callback list used to
//!   publish scroll progress once per update
//!
//! # Example
//!
//! ```rust
//! use vantage_core::{ProgressSignal, Vec3};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut signal = ProgressSignal::new(0.0);
//! let seen = Rc::new(Cell::new(0.0));
//!
//! let sink = seen.clone();
//! let sub = signal.subscribe(move |value| sink.set(value));
//!
//! signal.set(0.5);
//! assert_eq!(seen.get(), 0.5);
//!
//! signal.unsubscribe(sub);
//! assert_eq!(signal.subscriber_count(), 0);
//!
//! let halfway = Vec3::new(0.0, 0.0, 0.0).lerp(Vec3::new(2.0, 4.0, 6.0), 0.5);
//! assert_eq!(halfway, Vec3::new(1.0, 2.0, 3.0));
//! ```

pub mod math;
pub mod signal;

pub use math::{clamp01, follow, lerp, Interpolate, Vec3};
pub use signal::{ProgressSignal, Subscription};
