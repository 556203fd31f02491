use life_core::{Boundary, CellState, Dimensions, Grid, Neighborhood, Pos};
use rayon::prelude::*;

/// Neighbor counts of one cell, split by state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Counts {
    pub dead: u16,
    pub alive: u16,
    pub sick: u16,
}

impl Counts {
    pub const fn new(dead: u16, alive: u16, sick: u16) -> Self {
        Self { dead, alive, sick }
    }

    pub const fn get(self, state: CellState) -> u16 {
        match state {
            CellState::Dead => self.dead,
            CellState::Alive => self.alive,
            CellState::Sick => self.sick,
        }
    }

    /// Alive plus sick neighbors.
    pub const fn occupied(self) -> u16 {
        self.alive + self.sick
    }

    /// Number of neighbor positions that exist.
    pub const fn total(self) -> u32 {
        self.dead as u32 + self.alive as u32 + self.sick as u32
    }

    fn add(&mut self, state: CellState) {
        match state {
            CellState::Dead => self.dead += 1,
            CellState::Alive => self.alive += 1,
            CellState::Sick => self.sick += 1,
        }
    }
}

/// Per-cell, per-state neighbor counts for one generation.
///
/// Read-only once built; a new table is computed for every generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborCounts {
    dims: Dimensions,
    cells: Vec<Counts>,
}

impl NeighborCounts {
    pub const fn dims(&self) -> Dimensions {
        self.dims
    }

    /// # Panics
    /// Panics if `pos` is outside the grid.
    pub fn get(&self, pos: Pos) -> Counts {
        assert!(self.dims.contains(pos), "{pos} outside {} grid", self.dims);
        self.cells[self.dims.index(pos)]
    }

    /// Number of neighbors of `pos` in `state`.
    pub fn count(&self, state: CellState, pos: Pos) -> u16 {
        self.get(pos).get(state)
    }

    /// The count plane for one state, row-major.
    pub fn plane(&self, state: CellState) -> impl ExactSizeIterator<Item = u16> + '_ {
        self.cells.iter().map(move |c| c.get(state))
    }

    pub fn as_slice(&self) -> &[Counts] {
        &self.cells
    }
}

/// Count, for every cell of `grid`, how many of its neighbors are in each
/// state.
///
/// Offsets that `boundary` resolves to nothing are skipped, so with
/// [`Boundary::Bounded`] edge and corner cells have fewer neighbors.
pub fn count_neighbors(
    grid: &Grid,
    neighborhood: &Neighborhood,
    boundary: Boundary,
) -> NeighborCounts {
    let dims = grid.dims();
    let cells = grid.cells();
    let mut counts = vec![Counts::default(); dims.area()];

    counts
        .par_chunks_mut(dims.cols())
        .enumerate()
        .for_each(|(row, out)| {
            for (col, slot) in out.iter_mut().enumerate() {
                let pos = Pos::new(row, col);
                for &offset in neighborhood.offsets() {
                    if let Some(neighbor) = boundary.resolve(dims, pos, offset) {
                        slot.add(cells[dims.index(neighbor)]);
                    }
                }
            }
        });

    NeighborCounts {
        dims,
        cells: counts,
    }
}
