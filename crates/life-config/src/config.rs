use std::fs;
use std::path::{Path, PathBuf};

use life_core::{Boundary, CellState, ConfigError, Dimensions, GenerationCount, Neighborhood};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigFileError, ConfigResult};

const SICK_LIFE_TITLE: &str = "Conway's game of life with sickness";
const BLACK: [f32; 3] = [0.0, 0.0, 0.0];
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];

/// Which cells count as neighbors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighbourhoodKind {
    /// The 8 surrounding cells.
    #[default]
    Moore,
    /// The 4 orthogonally adjacent cells.
    VonNeumann,
}

impl NeighbourhoodKind {
    pub fn neighborhood(self) -> Neighborhood {
        match self {
            Self::Moore => Neighborhood::moore(),
            Self::VonNeumann => Neighborhood::von_neumann(),
        }
    }
}

/// One run, as read from or written to a JSON file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaConfig {
    pub title: String,
    pub dimensions: u8,
    pub states: Vec<u8>,
    /// RGB in `0.0..=1.0`, one entry per state.
    pub state_colors: Vec<[f32; 3]>,
    pub num_generations: i64,
    /// `[rows, cols]`.
    pub grid_dims: [i64; 2],
    pub neighbourhood: NeighbourhoodKind,
    pub wrap: bool,
    /// Probability of each state when filling the initial grid, indexed by
    /// state value. Need not sum to 1.
    pub initial_proportions: Vec<f64>,
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline_path: Option<PathBuf>,

    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for CaConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            dimensions: 2,
            states: vec![0, 1],
            state_colors: vec![BLACK, WHITE],
            num_generations: 100,
            grid_dims: [200, 200],
            neighbourhood: NeighbourhoodKind::Moore,
            wrap: false,
            initial_proportions: vec![0.5, 0.5, 0.0],
            seed: None,
            timeline_path: None,
            path: None,
        }
    }
}

/// A validated config, ready to drive a simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct RunPlan {
    pub dims: Dimensions,
    pub generations: GenerationCount,
    pub neighborhood: Neighborhood,
    pub boundary: Boundary,
    /// Indexed by [`CellState::index`].
    pub proportions: [f64; CellState::COUNT],
    pub seed: Option<u64>,
    pub timeline_path: PathBuf,
}

impl CaConfig {
    /// Read a config from `path` and remember where it came from.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let mut config: Self = serde_json::from_str(&fs::read_to_string(path)?)?;
        config.path = Some(path.to_path_buf());

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// File this config was loaded from or last saved to.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write back to the file this config was loaded from.
    pub fn save(&self) -> ConfigResult<()> {
        let path = self.path.as_deref().ok_or(ConfigFileError::MissingPath)?;
        write_json(path, self)
    }

    /// Write to `path`, which becomes this config's file.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        write_json(path, self)?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Force the fields that are fixed for the sick-life automaton.
    pub fn apply_sick_life(&mut self) {
        self.title = SICK_LIFE_TITLE.to_owned();
        self.dimensions = 2;
        self.states = CellState::ALL.iter().map(|&s| u8::from(s)).collect();
        self.state_colors = vec![BLACK, WHITE, GREEN];
    }

    #[must_use]
    pub fn with_sick_life(mut self) -> Self {
        self.apply_sick_life();
        self
    }

    /// Where the timeline of this run is written.
    ///
    /// An explicit `timeline_path` wins. Otherwise the config file's path
    /// with a `.timeline` extension, or `sick_life.timeline` in the working
    /// directory for a config that has no file.
    pub fn resolved_timeline_path(&self) -> PathBuf {
        match (&self.timeline_path, &self.path) {
            (Some(explicit), _) => explicit.clone(),
            (None, Some(config)) => config.with_extension("timeline"),
            (None, None) => PathBuf::from("sick_life.timeline"),
        }
    }

    /// Check every field and convert to the types the engine takes.
    pub fn plan(&self) -> ConfigResult<RunPlan> {
        if self.dimensions != 2 {
            return Err(ConfigError::UnsupportedDimensions(self.dimensions).into());
        }
        let expected: Vec<u8> = CellState::ALL.iter().map(|&s| u8::from(s)).collect();
        if self.states != expected {
            return Err(ConfigError::UnsupportedStates(self.states.clone()).into());
        }

        let [rows, cols] = self.grid_dims;
        let plan = RunPlan {
            dims: Dimensions::from_signed(rows, cols)?,
            generations: GenerationCount::from_signed(self.num_generations)?,
            neighborhood: self.neighbourhood.neighborhood(),
            boundary: if self.wrap {
                Boundary::Wrapped
            } else {
                Boundary::Bounded
            },
            proportions: self.proportions()?,
            seed: self.seed,
            timeline_path: self.resolved_timeline_path(),
        };

        info!(
            "Planned {} generations on a {} grid ({:?}, {:?})",
            plan.generations.get(),
            plan.dims,
            self.neighbourhood,
            plan.boundary
        );
        Ok(plan)
    }

    fn proportions(&self) -> ConfigResult<[f64; CellState::COUNT]> {
        let invalid = || ConfigFileError::InvalidProportions(self.initial_proportions.clone());

        let proportions: [f64; CellState::COUNT] = self
            .initial_proportions
            .as_slice()
            .try_into()
            .map_err(|_| invalid())?;
        if proportions.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(invalid());
        }
        if proportions.iter().sum::<f64>() <= 0.0 {
            return Err(invalid());
        }
        Ok(proportions)
    }
}

fn write_json(path: &Path, config: &CaConfig) -> ConfigResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut json = serde_json::to_string_pretty(config)?;
    json.push('\n');
    fs::write(path, json)?;

    debug!("Saved config to {}", path.display());
    Ok(())
}
