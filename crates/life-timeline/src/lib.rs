//! Timeline persistence for sick-life runs.
//!
//! A run's [`Timeline`](life_core::Timeline) is written as a single binary
//! file that can be read back for replay or analysis.
//!
//! # File Format
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  magic: [u8; 8]      "SICKLIFE"                            │
//! │  version: u32        format version, currently 1           │
//! ├────────────────────────────────────────────────────────────┤
//! │  timeline            bincode-encoded generations           │
//! │    per generation:   dims (rows, cols), one byte per cell  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let timeline = simulation.run(initial, generations);
//! life_timeline::save("run.timeline", &timeline)?;
//!
//! let replay = life_timeline::load("run.timeline")?;
//! assert_eq!(replay, timeline);
//! ```

mod error;
mod file;

pub use error::{TimelineError, TimelineResult};
pub use file::{FORMAT_VERSION, MAGIC, load, read_from, save, write_to};
