//! Headless autoplay entry point for the doorstep preaching simulation.
//!
//! Runs one seeded week end to end with a simple scripted policy and
//! prints the final accounting as JSON. Configuration comes from the
//! environment:
//!
//! - `DOORSTEP_CONFIG` — optional path to a YAML config file
//! - `DOORSTEP_SEED` — RNG seed (default 0)
//! - `DOORSTEP_RELIGION` — starting religion
//!   (`evangelist`, `jehovahs-witness`, `mormon`, `custom`; default
//!   `evangelist`)

mod autoplay;
mod error;

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use doorstep_core::SimConfig;
use doorstep_types::Religion;

use crate::autoplay::play_week;
use crate::error::RunnerError;

/// Application entry point.
///
/// Initializes logging, loads configuration, plays one scripted week,
/// and prints the result.
///
/// # Errors
///
/// Returns an error if configuration loading or the simulation fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("doorstep-runner starting");

    let config = load_config()?;
    let seed = load_seed()?;
    let religion = load_religion()?;
    info!(seed, %religion, "configuration loaded");

    let mut rng = SmallRng::seed_from_u64(seed);
    let result = play_week(config, religion, &mut rng)?;

    info!(
        church_victory = result.church_victory,
        churches = result.churches,
        score = result.score,
        satanic_score = result.satanic_score,
        "week complete"
    );
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn load_config() -> Result<SimConfig, RunnerError> {
    std::env::var("DOORSTEP_CONFIG").map_or_else(
        |_| Ok(SimConfig::default()),
        |path| Ok(SimConfig::from_file(Path::new(&path))?),
    )
}

fn load_seed() -> Result<u64, RunnerError> {
    std::env::var("DOORSTEP_SEED")
        .unwrap_or_else(|_| "0".to_owned())
        .parse()
        .map_err(|e| RunnerError::InvalidEnv {
            name: "DOORSTEP_SEED",
            reason: format!("{e}"),
        })
}

fn load_religion() -> Result<Religion, RunnerError> {
    let value = std::env::var("DOORSTEP_RELIGION").unwrap_or_else(|_| "evangelist".to_owned());
    match value.as_str() {
        "evangelist" => Ok(Religion::Evangelist),
        "jehovahs-witness" => Ok(Religion::JehovahsWitness),
        "mormon" => Ok(Religion::Mormon),
        "custom" => Ok(Religion::Custom),
        _ => Err(RunnerError::InvalidEnv {
            name: "DOORSTEP_RELIGION",
            reason: format!("unknown religion `{value}`"),
        }),
    }
}
