//! Scroll-linked transforms
//!
//! A `ScrollTransform` maps an input value (usually scroll progress) through a
//! list of input stops to matching output stops, interpolating linearly
//! between neighbouring stops and clamping outside the first and last stop.

use crate::error::{AnimationError, StopList};
use smallvec::SmallVec;

type Stops = SmallVec<[f32; 4]>;

/// Piecewise-linear mapping from progress to a property value
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTransform {
    input: Stops,
    output: Stops,
}

impl ScrollTransform {
    /// Build a transform from matching input and output stops.
    ///
    /// Input stops must be finite and strictly increasing.
    pub fn new(input: &[f32], output: &[f32]) -> Result<Self, AnimationError> {
        if input.len() != output.len() {
            return Err(AnimationError::MismatchedStops {
                input: input.len(),
                output: output.len(),
            });
        }
        if input.len() < 2 {
            return Err(AnimationError::TooFewStops(input.len()));
        }
        for (list, stops) in [(StopList::Input, input), (StopList::Output, output)] {
            if let Some(index) = stops.iter().position(|value| !value.is_finite()) {
                return Err(AnimationError::NonFiniteStop { list, index });
            }
        }
        for (index, pair) in input.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(AnimationError::NonIncreasingStops {
                    index: index + 1,
                    value: pair[1],
                });
            }
        }

        Ok(Self {
            input: input.iter().copied().collect(),
            output: output.iter().copied().collect(),
        })
    }

    /// Sample the transform at `progress`
    pub fn sample(&self, progress: f32) -> f32 {
        let last = self.input.len() - 1;
        if progress <= self.input[0] {
            return self.output[0];
        }
        if progress >= self.input[last] {
            return self.output[last];
        }

        let segment = self
            .input
            .windows(2)
            .position(|pair| progress < pair[1])
            .unwrap_or(last - 1);

        let (a, b) = (self.input[segment], self.input[segment + 1]);
        let t = (progress - a) / (b - a);
        vantage_core::lerp(self.output[segment], self.output[segment + 1], t)
    }
}
