//! Sick-life runner
//!
//! Usage: `life-runner <config.json> [save]`
//!
//! This binary:
//! 1. Loads the JSON config and applies the sick-life overrides
//! 2. Fills a random initial grid from the configured proportions
//! 3. Runs the configured number of generations
//! 4. Saves the config back and writes the timeline next to it
//!
//! With a second argument (any value) it only saves the config and exits.
//! Any other argument count prints the usage line.
//!
//! Set `RUST_LOG=life_rules=debug` to see per-generation counts.

mod grid_gen;

use std::path::Path;
use std::time::Instant;

use life_config::CaConfig;
use life_core::{CellState, Timeline};
use life_rules::{SickLife, Simulation};
use tracing::info;

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("life_runner=info".parse()?)
                .add_directive("life_rules=info".parse()?)
                .add_directive("life_config=info".parse()?)
                .add_directive("life_timeline=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(mode) = parse_args(&args) else {
        eprintln!(
            "Usage: {} <config.json> [save]",
            args.first().map_or("life-runner", String::as_str)
        );
        std::process::exit(1);
    };

    let timeline = match mode {
        Mode::SaveOnly(path) => return save_only(&mut CaConfig::load(path)?),
        Mode::Run(path) => run(&mut CaConfig::load(path)?)?,
    };
    let last = timeline.last();
    info!(
        "{} generations, final grid: {} alive, {} sick",
        timeline.generation_count().get(),
        last.count(CellState::Alive),
        last.count(CellState::Sick)
    );

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Mode<'a> {
    Run(&'a str),
    /// Any second argument: save the config and stop.
    SaveOnly(&'a str),
}

fn parse_args(args: &[String]) -> Option<Mode<'_>> {
    match args {
        [_, config] => Some(Mode::Run(config)),
        [_, config, _] => Some(Mode::SaveOnly(config)),
        _ => None,
    }
}

/// Apply the sick-life overrides and write the config back without
/// simulating anything.
fn save_only(config: &mut CaConfig) -> eyre::Result<()> {
    config.apply_sick_life();
    config.save()?;
    if let Some(path) = config.path() {
        info!("Saved config to {}", path.display());
    }
    Ok(())
}

/// Validate, simulate, then persist the config and the timeline.
///
/// Nothing is written unless the config is valid and the run completes.
fn run(config: &mut CaConfig) -> eyre::Result<Timeline> {
    config.apply_sick_life();
    let plan = config.plan()?;
    info!("{}", config.title);

    let mut rng = grid_gen::rng(plan.seed);
    let initial = grid_gen::random_grid(plan.dims, &plan.proportions, &mut rng)?;

    let sim = Simulation::new(SickLife, plan.neighborhood).with_boundary(plan.boundary);
    let started = Instant::now();
    let timeline = sim.run(initial, plan.generations);
    info!("Simulation took {:?}", started.elapsed());

    config.save()?;
    save_timeline(&plan.timeline_path, &timeline)?;
    Ok(timeline)
}

fn save_timeline(path: &Path, timeline: &Timeline) -> eyre::Result<()> {
    life_timeline::save(path, timeline)?;
    info!("Timeline written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use life_config::ConfigFileError;
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(dir: &Path, json: &str) -> CaConfig {
        let path = dir.join("run.json");
        fs::write(&path, json).unwrap();
        CaConfig::load(&path).unwrap()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn argument_modes() {
        assert_eq!(
            parse_args(&args(&["life-runner", "run.json"])),
            Some(Mode::Run("run.json"))
        );
        assert_eq!(
            parse_args(&args(&["life-runner", "run.json", "save"])),
            Some(Mode::SaveOnly("run.json"))
        );
        assert_eq!(parse_args(&args(&["life-runner"])), None);
        assert_eq!(parse_args(&args(&["life-runner", "a.json", "save", "x"])), None);
    }

    #[test]
    fn save_only_writes_overrides_and_does_not_simulate() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = write_config(dir.path(), r#"{ "num_generations": 3, "grid_dims": [4, 4] }"#);

        save_only(&mut config).unwrap();

        let saved = CaConfig::load(dir.path().join("run.json")).unwrap();
        assert_eq!(saved.states, vec![0, 1, 2]);
        assert_eq!(saved.title, "Conway's game of life with sickness");
        assert_eq!(saved.state_colors.len(), 3);
        assert_eq!(saved.num_generations, 3);
        assert!(!dir.path().join("run.timeline").exists());
    }

    #[test]
    fn run_writes_config_and_timeline() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = write_config(
            dir.path(),
            r#"{ "num_generations": 6, "grid_dims": [12, 9], "seed": 5, "initial_proportions": [0.5, 0.3, 0.2] }"#,
        );

        let timeline = run(&mut config).unwrap();
        assert_eq!(timeline.len(), 7);

        let saved = life_timeline::load(dir.path().join("run.timeline")).unwrap();
        assert_eq!(saved, timeline);

        let reloaded = CaConfig::load(dir.path().join("run.json")).unwrap();
        assert_eq!(reloaded.states, vec![0, 1, 2]);
        assert_eq!(reloaded.num_generations, 6);
    }

    #[test]
    fn seeded_runs_repeat() {
        let json = r#"{ "num_generations": 10, "grid_dims": [16, 16], "seed": 42, "wrap": true }"#;

        let first_dir = tempfile::tempdir().unwrap();
        let first = run(&mut write_config(first_dir.path(), json)).unwrap();
        let second_dir = tempfile::tempdir().unwrap();
        let second = run(&mut write_config(second_dir.path(), json)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = write_config(dir.path(), r#"{ "grid_dims": [0, 5] }"#);
        let before = fs::read_to_string(dir.path().join("run.json")).unwrap();

        let err = run(&mut config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigFileError>(),
            Some(ConfigFileError::Invalid(_))
        ));
        assert!(!dir.path().join("run.timeline").exists());
        assert_eq!(fs::read_to_string(dir.path().join("run.json")).unwrap(), before);
    }
}
