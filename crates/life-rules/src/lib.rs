//! Generation stepping for the sick-life automaton.
//!
//! One generation is two pure passes over the current grid:
//!
//! ```text
//! Grid(i) ──count_neighbors──▶ NeighborCounts ──RuleEngine::step──▶ Grid(i+1)
//! ```
//!
//! Both passes read only generation `i` and write into fresh buffers, so
//! every cell sees the same pre-transition world. Rows are processed in
//! parallel with rayon.

mod engine;
mod neighbors;
mod rules;
mod simulation;

pub use engine::RuleEngine;
pub use neighbors::{Counts, NeighborCounts, count_neighbors};
pub use rules::{Conway, Rule, SickLife, Transition};
pub use simulation::Simulation;
