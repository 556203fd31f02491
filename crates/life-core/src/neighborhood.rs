//! Neighborhood shapes and edge handling.

use smallvec::SmallVec;

use crate::error::ConfigError;
use crate::pos::{Dimensions, Pos};

/// Relative position `(dr, dc)` of a neighbor.
pub type Offset = (i32, i32);

/// Largest neighborhood whose counts fit the per-state counters.
const MAX_NEIGHBORS: usize = u16::MAX as usize;

/// A fixed, symmetric set of relative offsets.
///
/// Symmetric means every `(dr, dc)` comes with `(-dr, -dc)`; the cell
/// itself is never part of its neighborhood.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    offsets: SmallVec<[Offset; 8]>,
}

impl Neighborhood {
    /// The 8 surrounding cells.
    pub const MOORE: [Offset; 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    /// The 4 edge-adjacent cells.
    pub const VON_NEUMANN: [Offset; 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

    pub fn moore() -> Self {
        Self {
            offsets: SmallVec::from_buf(Self::MOORE),
        }
    }

    pub fn von_neumann() -> Self {
        Self {
            offsets: Self::VON_NEUMANN.iter().copied().collect(),
        }
    }

    /// Every cell within Chebyshev distance `radius`.
    pub fn moore_radius(radius: u32) -> Result<Self, ConfigError> {
        let r = i32::try_from(radius).map_err(|_| ConfigError::NeighborhoodTooLarge(usize::MAX))?;
        let side = 2 * u64::from(radius) + 1;
        let size = usize::try_from(side * side - 1).unwrap_or(usize::MAX);
        if size > MAX_NEIGHBORS {
            return Err(ConfigError::NeighborhoodTooLarge(size));
        }

        Self::from_offsets((-r..=r).flat_map(|dr| (-r..=r).map(move |dc| (dr, dc))))
    }

    /// Build a neighborhood from arbitrary offsets.
    ///
    /// Duplicates and `(0, 0)` are dropped. The result must be non-empty and
    /// symmetric.
    pub fn from_offsets(offsets: impl IntoIterator<Item = Offset>) -> Result<Self, ConfigError> {
        let mut offsets: SmallVec<[Offset; 8]> = offsets
            .into_iter()
            .filter(|&offset| offset != (0, 0))
            .collect();
        offsets.sort_unstable();
        offsets.dedup();

        if offsets.is_empty() {
            return Err(ConfigError::EmptyNeighborhood);
        }
        if offsets.len() > MAX_NEIGHBORS {
            return Err(ConfigError::NeighborhoodTooLarge(offsets.len()));
        }
        if let Some(&(dr, dc)) = offsets
            .iter()
            .find(|&&(dr, dc)| offsets.binary_search(&(-dr, -dc)).is_err())
        {
            return Err(ConfigError::AsymmetricNeighborhood { dr, dc });
        }

        Ok(Self { offsets })
    }

    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::moore()
    }
}

/// What happens to offsets that leave the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Positions outside the grid do not exist and contribute nothing.
    #[default]
    Bounded,
    /// Opposite edges are joined (torus).
    Wrapped,
}

impl Boundary {
    /// The cell that `offset` from `pos` refers to, if any.
    pub fn resolve(self, dims: Dimensions, pos: Pos, (dr, dc): Offset) -> Option<Pos> {
        let (row, col) = pos.offset(dr, dc);
        let rows = dims.rows() as i64;
        let cols = dims.cols() as i64;

        match self {
            Boundary::Bounded => {
                ((0..rows).contains(&row) && (0..cols).contains(&col))
                    .then(|| Pos::new(row as usize, col as usize))
            }
            Boundary::Wrapped => Some(Pos::new(
                row.rem_euclid(rows) as usize,
                col.rem_euclid(cols) as usize,
            )),
        }
    }
}
