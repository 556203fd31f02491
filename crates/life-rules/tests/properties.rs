//! Whole-run properties of the sick-life engine.

use life_core::{Boundary, CellState, Dimensions, GenerationCount, Grid, Neighborhood, Pos};
use life_rules::{Conway, Rule, SickLife, Simulation, count_neighbors};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// Helpers
// ============================================================================

fn random_grid(rows: usize, cols: usize, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let values: Vec<u8> = (0..rows * cols).map(|_| rng.gen_range(0..3)).collect();
    Grid::from_raw(Dimensions::new(rows, cols).unwrap(), &values).unwrap()
}

fn sick_life() -> Simulation<SickLife> {
    Simulation::new(SickLife, Neighborhood::moore())
}

/// Moore neighbors of `pos` that lie inside the grid.
fn in_bounds_neighbors(dims: Dimensions, pos: Pos) -> u32 {
    let rows = if pos.row == 0 || pos.row + 1 == dims.rows() { 2 } else { 3 };
    let cols = if pos.col == 0 || pos.col + 1 == dims.cols() { 2 } else { 3 };
    let rows = if dims.rows() == 1 { 1 } else { rows };
    let cols = if dims.cols() == 1 { 1 } else { cols };
    rows * cols - 1
}

/// Row-major, in-place evaluation: each cell sees already-updated
/// neighbors. Used only to show that the engine does not do this.
fn step_in_place<R: Rule>(rule: &R, grid: &Grid) -> Grid {
    let mut grid = grid.clone();
    let moore = Neighborhood::moore();
    for pos in grid.dims().positions() {
        let counts = count_neighbors(&grid, &moore, Boundary::Bounded).get(pos);
        let next = rule.next_state(grid[pos], counts);
        grid.set(pos, next);
    }
    grid
}

// ============================================================================
// Invariants over many generations
// ============================================================================

#[test]
fn states_stay_in_set() {
    let timeline = sick_life()
        .run(random_grid(24, 31, 7), GenerationCount::new(40));

    for grid in &timeline {
        let total: usize = CellState::ALL.iter().map(|&s| grid.count(s)).sum();
        assert_eq!(total, grid.area());
        assert!(grid.to_raw().iter().all(|&v| v <= 2));
    }
}

#[test]
fn counts_conserved_every_generation() {
    let sim = sick_life();
    let timeline = sim
        .run(random_grid(9, 13, 11), GenerationCount::new(15));

    for grid in &timeline {
        let counts = sim.counts(grid);
        for pos in grid.dims().positions() {
            assert_eq!(
                counts.get(pos).total(),
                in_bounds_neighbors(grid.dims(), pos),
                "at {pos}"
            );
        }
    }
}

#[test]
fn count_conservation_on_thin_grids() {
    for (rows, cols) in [(1, 1), (1, 5), (6, 1), (2, 2)] {
        let grid = random_grid(rows, cols, 3);
        let counts = count_neighbors(&grid, &Neighborhood::moore(), Boundary::Bounded);
        for pos in grid.dims().positions() {
            assert_eq!(
                counts.get(pos).total(),
                in_bounds_neighbors(grid.dims(), pos)
            );
        }
    }
}

#[test]
fn runs_are_deterministic() {
    let first = sick_life()
        .run(random_grid(32, 32, 99), GenerationCount::new(25));
    let second = sick_life()
        .run(random_grid(32, 32, 99), GenerationCount::new(25));
    assert_eq!(first, second);
}

#[test]
fn empty_grid_stays_empty() {
    for (rows, cols) in [(1, 1), (5, 8), (40, 17)] {
        let initial = Grid::new(Dimensions::new(rows, cols).unwrap());
        let timeline = sick_life().run(initial, GenerationCount::new(12));
        assert_eq!(timeline.len(), 13);
        assert!(timeline.iter().all(|g| g.is_all(CellState::Dead)));
    }
}

// ============================================================================
// Synchronous evaluation
// ============================================================================

#[test]
fn simultaneous_update_differs_from_in_place() {
    let initial: Grid = "###\n...\n...".parse().unwrap();

    let simultaneous = sick_life().advance(&initial);
    let sequential = step_in_place(&SickLife, &initial);

    assert_eq!(simultaneous.to_string(), ".#.\n.#.\n...");
    assert_ne!(simultaneous, sequential);
}

#[test]
fn simultaneous_update_on_random_grids() {
    // The engine must agree with a cell-by-cell evaluation that reads only
    // the previous generation.
    let sim = sick_life();
    for seed in 0..8 {
        let grid = random_grid(12, 10, seed);
        let counts = sim.counts(&grid);
        let expected: Vec<CellState> = grid
            .iter()
            .map(|(pos, state)| SickLife.next_state(state, counts.get(pos)))
            .collect();
        assert_eq!(sim.advance(&grid).cells(), expected.as_slice());
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn blinker_has_period_two() {
    let initial: Grid = "...\n###\n...".parse().unwrap();

    for sim in [
        Simulation::new(&SickLife as &dyn Rule, Neighborhood::moore()),
        Simulation::new(&Conway as &dyn Rule, Neighborhood::moore()),
    ] {
        let timeline = sim.run(initial.clone(), GenerationCount::new(2));
        assert_eq!(timeline[1].to_string(), ".#.\n.#.\n.#.");
        assert_eq!(timeline[2], initial);
    }
}

#[test]
fn isolated_sick_cell_recovers_instead_of_dying() {
    // Matches both isolation death and recovery; recovery wins.
    let initial: Grid = ".....\n.....\n..x..\n.....\n.....".parse().unwrap();
    let timeline = sick_life().run(initial, GenerationCount::new(1));

    assert_eq!(timeline[1][Pos::new(2, 2)], CellState::Alive);
    assert_eq!(timeline[1].count(CellState::Alive), 1);
    assert_eq!(timeline[1].count(CellState::Sick), 0);
}

#[test]
fn sick_cell_among_healthy_crowd_recovers() {
    // 5 alive neighbors, no sick ones: recovery is the only predicate.
    let initial: Grid = "###\n#x#\n...".parse().unwrap();
    let next = sick_life().advance(&initial);
    assert_eq!(next[Pos::new(1, 1)], CellState::Alive);
}

#[test]
fn sick_cell_with_two_healthy_neighbors_stays_sick() {
    let initial: Grid = ".#.\n.x.\n.#.".parse().unwrap();
    let next = sick_life().advance(&initial);
    assert_eq!(next[Pos::new(1, 1)], CellState::Sick);
}

#[test]
fn infection_spreads_to_surrounded_cell() {
    let initial: Grid = "xxx\n.#.\n...".parse().unwrap();
    let next = sick_life().advance(&initial);
    assert_eq!(next[Pos::new(1, 1)], CellState::Sick);
}

#[test]
fn wrapped_glider_returns_home() {
    // A glider on a 6x6 torus moves one cell diagonally every 4
    // generations and is back where it started after 24.
    let initial: Grid = "
        .#....
        ..#...
        ###...
        ......
        ......
        ......
    "
    .parse()
    .unwrap();

    let sim = Simulation::new(SickLife, Neighborhood::moore()).with_boundary(Boundary::Wrapped);
    let timeline = sim.run(initial.clone(), GenerationCount::new(24));

    assert_eq!(timeline.last(), &initial);
    assert!(timeline.iter().all(|g| g.count(CellState::Alive) == 5));
}
