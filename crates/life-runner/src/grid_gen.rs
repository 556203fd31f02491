use life_core::{CellState, Dimensions, Grid};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded when `seed` is given, otherwise from OS entropy.
pub fn rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// Fill a grid by drawing every cell independently, with `proportions`
/// weighting each state.
pub fn random_grid<R: Rng + ?Sized>(
    dims: Dimensions,
    proportions: &[f64; CellState::COUNT],
    rng: &mut R,
) -> eyre::Result<Grid> {
    let weights = WeightedIndex::new(proportions)?;
    let cells = (0..dims.area())
        .map(|_| CellState::ALL[weights.sample(rng)])
        .collect();
    Ok(Grid::from_cells(dims, cells)?)
}
