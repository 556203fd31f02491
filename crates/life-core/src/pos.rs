use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A cell position, row first.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug, Default)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Signed position `(dr, dc)` away, which may lie off the grid.
    pub const fn offset(self, dr: i32, dc: i32) -> (i64, i64) {
        (self.row as i64 + dr as i64, self.col as i64 + dc as i64)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Shape of a grid. Both sides are at least 1.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions")]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

#[derive(Deserialize)]
struct RawDimensions {
    rows: usize,
    cols: usize,
}

impl TryFrom<RawDimensions> for Dimensions {
    type Error = ConfigError;

    fn try_from(raw: RawDimensions) -> Result<Self, Self::Error> {
        Self::new(raw.rows, raw.cols)
    }
}

impl Dimensions {
    /// Largest number of cells a grid may have.
    pub const MAX_CELLS: usize = u32::MAX as usize;

    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: rows as i64,
                cols: cols as i64,
            });
        }
        match rows.checked_mul(cols) {
            Some(area) if area <= Self::MAX_CELLS => Ok(Self { rows, cols }),
            _ => Err(ConfigError::GridTooLarge {
                rows,
                cols,
                max: Self::MAX_CELLS,
            }),
        }
    }

    /// Validate dimensions that come from an untrusted, signed source.
    pub fn from_signed(rows: i64, cols: i64) -> Result<Self, ConfigError> {
        let invalid = ConfigError::InvalidDimensions { rows, cols };
        let rows = usize::try_from(rows).map_err(|_| invalid.clone())?;
        let cols = usize::try_from(cols).map_err(|_| invalid)?;
        Self::new(rows, cols)
    }

    pub const fn rows(self) -> usize {
        self.rows
    }

    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Total number of cells. Never overflows, since `new` caps it at
    /// [`Self::MAX_CELLS`].
    pub const fn area(self) -> usize {
        self.rows * self.cols
    }

    pub const fn contains(self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major index of `pos`.
    pub const fn index(self, pos: Pos) -> usize {
        pos.row * self.cols + pos.col
    }

    pub const fn pos(self, index: usize) -> Pos {
        Pos {
            row: index / self.cols,
            col: index % self.cols,
        }
    }

    /// All positions in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Pos> {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Pos { row, col }))
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
