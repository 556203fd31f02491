use life_core::Grid;
use rayon::prelude::*;

use crate::neighbors::NeighborCounts;
use crate::rules::Rule;

/// Applies a [`Rule`] to every cell of a grid at once.
#[derive(Clone, Debug, Default)]
pub struct RuleEngine<R> {
    rule: R,
}

impl<R: Rule> RuleEngine<R> {
    pub const fn new(rule: R) -> Self {
        Self { rule }
    }

    pub const fn rule(&self) -> &R {
        &self.rule
    }

    /// Compute the next generation into a fresh grid.
    ///
    /// Every cell is evaluated against `grid` and `counts` as given; nothing
    /// written for this generation is visible while it is being computed.
    ///
    /// # Panics
    /// Panics if `counts` was computed for a grid of another shape.
    pub fn step(&self, grid: &Grid, counts: &NeighborCounts) -> Grid {
        assert_eq!(
            grid.dims(),
            counts.dims(),
            "neighbor counts do not match the grid"
        );

        let cols = grid.cols();
        let mut next = Grid::new(grid.dims());

        next.cells_mut()
            .par_chunks_mut(cols)
            .zip(grid.cells().par_chunks(cols))
            .zip(counts.as_slice().par_chunks(cols))
            .for_each(|((out, current), counts)| {
                for ((slot, &state), &c) in out.iter_mut().zip(current).zip(counts) {
                    *slot = self.rule.next_state(state, c);
                }
            });

        next
    }
}
