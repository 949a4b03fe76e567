//! Animation errors

use thiserror::Error;

/// Errors raised while building animation tables
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    #[error("transform needs at least two stops, got {0}")]
    TooFewStops(usize),

    #[error("transform has {input} input stops but {output} output stops")]
    MismatchedStops { input: usize, output: usize },

    #[error("input stops must be strictly increasing (stop {index} is {value})")]
    NonIncreasingStops { index: usize, value: f32 },

    #[error("{list} stop {index} is not a finite number")]
    NonFiniteStop { list: StopList, index: usize },
}

/// Which side of a transform a stop belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopList {
    Input,
    Output,
}

impl std::fmt::Display for StopList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopList::Input => f.write_str("input"),
            StopList::Output => f.write_str("output"),
        }
    }
}
