use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::pos::Dimensions;

/// Snapshots reserved up front by [`Timeline::with_capacity`].
const MAX_RESERVED_GENERATIONS: usize = 1024;

/// Number of rule applications in a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationCount(usize);

impl GenerationCount {
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    /// Validate a count that comes from an untrusted, signed source.
    pub fn from_signed(count: i64) -> Result<Self, ConfigError> {
        usize::try_from(count)
            .map(Self)
            .map_err(|_| ConfigError::InvalidGenerationCount(count))
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

/// Append-only history of a run.
///
/// Index 0 is the initial grid, index `i` the grid after `i` rule
/// applications. All generations share the initial grid's dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeline")]
pub struct Timeline {
    generations: Vec<Grid>,
}

#[derive(Deserialize)]
struct RawTimeline {
    generations: Vec<Grid>,
}

impl TryFrom<RawTimeline> for Timeline {
    type Error = ConfigError;

    fn try_from(raw: RawTimeline) -> Result<Self, Self::Error> {
        let mut generations = raw.generations.into_iter();
        let initial = generations.next().ok_or(ConfigError::EmptyTimeline)?;

        let mut timeline = Self::new(initial);
        for grid in generations {
            timeline.push(grid)?;
        }
        Ok(timeline)
    }
}

impl Timeline {
    pub fn new(initial: Grid) -> Self {
        Self {
            generations: vec![initial],
        }
    }

    /// Room for `generations` more snapshots, up to a fixed cap; past that
    /// the timeline grows as generations are pushed.
    pub fn with_capacity(initial: Grid, generations: GenerationCount) -> Self {
        let reserved = generations.get().min(MAX_RESERVED_GENERATIONS);
        let mut all = Vec::with_capacity(reserved + 1);
        all.push(initial);
        Self { generations: all }
    }

    /// Build a timeline by applying `step` to the latest snapshot
    /// `generations` times. `step` gets the number of the generation it
    /// produces, starting at 1.
    ///
    /// # Panics
    /// Panics if `step` returns a grid of another shape.
    pub fn generate(
        initial: Grid,
        generations: GenerationCount,
        mut step: impl FnMut(usize, &Grid) -> Grid,
    ) -> Self {
        let mut timeline = Self::with_capacity(initial, generations);
        let dims = timeline.dims();
        for generation in 1..=generations.get() {
            let next = step(generation, timeline.last());
            assert_eq!(next.dims(), dims, "a step changed the grid shape");
            timeline.generations.push(next);
        }
        timeline
    }

    /// Append the next generation.
    pub fn push(&mut self, next: Grid) -> Result<(), ConfigError> {
        let dims = self.dims();
        if next.dims() != dims {
            return Err(ConfigError::ShapeMismatch {
                expected: dims,
                actual: next.dims(),
            });
        }
        self.generations.push(next);
        Ok(())
    }

    pub fn dims(&self) -> Dimensions {
        self.initial().dims()
    }

    /// Number of snapshots, initial grid included.
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    /// Always false; a timeline starts with its initial grid.
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// Number of rule applications recorded.
    pub fn generation_count(&self) -> GenerationCount {
        GenerationCount(self.len() - 1)
    }

    pub fn initial(&self) -> &Grid {
        &self.generations[0]
    }

    pub fn last(&self) -> &Grid {
        &self.generations[self.generations.len() - 1]
    }

    pub fn get(&self, generation: usize) -> Option<&Grid> {
        self.generations.get(generation)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Grid> {
        self.generations.iter()
    }

    pub fn generations(&self) -> &[Grid] {
        &self.generations
    }

    pub fn into_generations(self) -> Vec<Grid> {
        self.generations
    }
}

impl Index<usize> for Timeline {
    type Output = Grid;

    fn index(&self, generation: usize) -> &Self::Output {
        &self.generations[generation]
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Grid;
    type IntoIter = std::slice::Iter<'a, Grid>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
