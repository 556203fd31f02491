use life_core::{
    Boundary, CellState, Dimensions, GenerationCount, Grid, Neighborhood, SimError, Timeline,
};
use tracing::{debug, info};

use crate::engine::RuleEngine;
use crate::neighbors::{NeighborCounts, count_neighbors};
use crate::rules::Rule;

/// Drives a rule over a grid for a fixed number of generations.
///
/// Each generation counts neighbors on the current grid, then builds the
/// next grid from those counts. The current grid is only read while the
/// next one is written.
#[derive(Clone, Debug)]
pub struct Simulation<R> {
    engine: RuleEngine<R>,
    neighborhood: Neighborhood,
    boundary: Boundary,
}

impl<R: Rule> Simulation<R> {
    pub fn new(rule: R, neighborhood: Neighborhood) -> Self {
        Self {
            engine: RuleEngine::new(rule),
            neighborhood,
            boundary: Boundary::default(),
        }
    }

    #[must_use]
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn rule(&self) -> &R {
        self.engine.rule()
    }

    pub fn neighborhood(&self) -> &Neighborhood {
        &self.neighborhood
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn counts(&self, grid: &Grid) -> NeighborCounts {
        count_neighbors(grid, &self.neighborhood, self.boundary)
    }

    /// One generation.
    pub fn advance(&self, grid: &Grid) -> Grid {
        let counts = self.counts(grid);
        self.engine.step(grid, &counts)
    }

    /// Run `generations` rule applications starting from `initial`.
    ///
    /// The timeline holds `generations + 1` grids, `initial` first.
    pub fn run(&self, initial: Grid, generations: GenerationCount) -> Timeline {
        info!(
            "Running {} generations on a {} grid",
            generations.get(),
            initial.dims()
        );

        let timeline = Timeline::generate(initial, generations, |generation, current| {
            let next = self.advance(current);
            debug!(
                "Generation {}: {} alive, {} sick",
                generation,
                next.count(CellState::Alive),
                next.count(CellState::Sick)
            );
            next
        });

        let last = timeline.last();
        info!(
            "Finished after {} generations: {} alive, {} sick",
            generations.get(),
            last.count(CellState::Alive),
            last.count(CellState::Sick)
        );

        timeline
    }

    /// Validate raw input and run.
    ///
    /// Dimensions and generation count are checked first, then every cell
    /// value; nothing is simulated unless all of them are valid.
    pub fn run_raw(
        &self,
        rows: i64,
        cols: i64,
        values: &[u8],
        generations: i64,
    ) -> Result<Timeline, SimError> {
        let dims = Dimensions::from_signed(rows, cols)?;
        let generations = GenerationCount::from_signed(generations)?;
        let initial = Grid::from_raw(dims, values)?;
        Ok(self.run(initial, generations))
    }
}
