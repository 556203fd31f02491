//! Error types for grid construction and run setup.

use thiserror::Error;

use crate::pos::{Dimensions, Pos};

/// The run cannot start because its parameters are invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Rows or columns are zero or negative.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: i64, cols: i64 },

    /// More cells than a grid can address.
    #[error("a {rows}x{cols} grid has more than {max} cells")]
    GridTooLarge { rows: usize, cols: usize, max: usize },

    /// Negative number of generations.
    #[error("generation count must not be negative, got {0}")]
    InvalidGenerationCount(i64),

    /// Neighborhood without a single offset.
    #[error("neighborhood has no offsets")]
    EmptyNeighborhood,

    /// An offset is present without its mirror image.
    #[error("neighborhood offset ({dr}, {dc}) has no mirror image")]
    AsymmetricNeighborhood { dr: i32, dc: i32 },

    /// More offsets than a neighbor count can hold.
    #[error("neighborhood of {0} cells is too large")]
    NeighborhoodTooLarge(usize),

    /// Only 2D automata exist here.
    #[error("only 2-dimensional automata are supported, got {0}")]
    UnsupportedDimensions(u8),

    /// The state set must be exactly dead, alive, sick.
    #[error("state set must be [0, 1, 2], got {0:?}")]
    UnsupportedStates(Vec<u8>),

    /// Cell buffer length does not match the grid's area.
    #[error("expected {expected} cells, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A snapshot whose shape differs from the rest of its timeline.
    #[error("expected a {expected} grid, got {actual}")]
    ShapeMismatch {
        expected: Dimensions,
        actual: Dimensions,
    },

    /// A timeline without even an initial grid.
    #[error("timeline has no generations")]
    EmptyTimeline,
}

/// A raw value that is not one of the three cell states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not a valid cell state (expected 0, 1 or 2)")]
pub struct UnknownState(pub u8);

/// A cell of an input grid holds a value outside the state set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell {pos} holds {value}, which is outside the state set")]
pub struct StateError {
    pub pos: Pos,
    pub value: u8,
}

/// Anything that rejects a run before its first generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    State(#[from] StateError),
}

/// Failure to read the text form of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridParseError {
    #[error("grid text has no rows")]
    Empty,

    #[error("line {line} has {actual} cells, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unknown cell symbol {symbol:?} at line {line}, column {column}")]
    UnknownSymbol {
        line: usize,
        column: usize,
        symbol: char,
    },
}
