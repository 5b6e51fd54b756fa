use std::fmt::Display;

use thiserror::Error;

use crate::Number;

pub type Result<T> = std::result::Result<T, MeshError>;

/// Which of the two input features a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Display for Axis {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    #[error("empty input: no {axis} values to take a range from")]
    EmptyInput { axis: Axis },

    #[error("invalid step size: {0} (must be positive and finite)")]
    InvalidStep(Number),

    #[error("invalid padding: {0} (must be finite)")]
    InvalidPadding(Number),

    #[error("non-finite {axis} value at index {index}")]
    NonFiniteInput { axis: Axis, index: usize },

    #[error("row {row} has {columns} column(s), need at least 2 features")]
    MissingFeature { row: usize, columns: usize },

    #[error("too many samples: {count} exceeds the limit of {limit}")]
    TooManySamples { count: u64, limit: usize },
}
