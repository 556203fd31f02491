//! Data model for the sick-life cellular automaton.
//!
//! A [`Grid`] is a fixed-size, row-major array of [`CellState`]s. Each
//! generation a cell looks at the cells picked out by a [`Neighborhood`]
//! (clipped or wrapped at the edges according to a [`Boundary`]) and the
//! rule crate decides its next state. Every generation of a run ends up in
//! a [`Timeline`].
//!
//! ```text
//!   0 1 2 3 4          . dead
//! 0 . . . . .          # alive
//! 1 . # # # .          x sick
//! 2 . . x . .
//! ```

mod error;
mod grid;
mod neighborhood;
mod pos;
mod state;
mod timeline;

pub use error::{ConfigError, GridParseError, SimError, StateError, UnknownState};
pub use grid::Grid;
pub use neighborhood::{Boundary, Neighborhood, Offset};
pub use pos::{Dimensions, Pos};
pub use state::CellState;
pub use timeline::{GenerationCount, Timeline};
