//! JSON run configuration for sick-life.
//!
//! A config file describes one run: grid size, number of generations,
//! neighborhood, edge handling, how to seed the initial grid, and where the
//! timeline goes. Every field is optional; missing ones take the defaults
//! of [`CaConfig::default`].
//!
//! ```json
//! {
//!   "num_generations": 150,
//!   "grid_dims": [200, 200],
//!   "neighbourhood": "moore",
//!   "wrap": false,
//!   "initial_proportions": [0.6, 0.35, 0.05],
//!   "seed": 7
//! }
//! ```

mod config;
mod error;

pub use config::{CaConfig, NeighbourhoodKind, RunPlan};
pub use error::{ConfigFileError, ConfigResult};
