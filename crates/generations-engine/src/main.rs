//! Terminal binary for the Generations life engine.
//!
//! Seeds a random board, then evolves it in real time, redrawing each
//! generation as colored emoji until evolution is over, the generation
//! limit is reached, or the process receives Ctrl-C.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `generations-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Seed the random number generator
//! 4. Create the starting board and simulation
//! 5. Run the paced tick loop
//! 6. Log the result

mod driver;
mod error;
mod render;

use std::io;
use std::path::Path;

use generations_core::config::SimulationConfig;
use generations_core::runner;
use generations_core::simulation::Simulation;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::render::TerminalRenderer;

/// Path of the configuration file, relative to the working directory.
const CONFIG_PATH: &str = "generations-config.yaml";

/// Application entry point for the Generations engine.
///
/// # Errors
///
/// Returns an error if configuration, board creation, or a tick fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging is not up yet, so note the fallback
    //    and report it once the subscriber exists.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over the config.
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.logging.level).map_err(|e| {
            EngineError::LogLevel {
                level: config.logging.level.clone(),
                message: e.to_string(),
            }
        })?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    info!("generations-engine starting");
    if !from_file {
        info!(path = CONFIG_PATH, "Config file not found, using defaults");
    }
    info!(
        size = config.board.size,
        life_chance = config.board.life_chance,
        seed = ?config.board.seed,
        mode = ?config.evolution.mode,
        tick_interval_ms = config.simulation.tick_interval_ms,
        max_generations = config.simulation.max_generations,
        "Configuration loaded"
    );

    // 3. Seed the RNG.
    let mut rng = match config.board.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            warn!("No seed configured, board will not be reproducible");
            StdRng::from_os_rng()
        }
    };

    // 4. Create the starting board.
    let mut sim = Simulation::from_config(&config, &mut rng).map_err(EngineError::from)?;
    let mut renderer = TerminalRenderer::new(io::stdout(), true);
    if let Err(e) = renderer.draw("generation 0", sim.board()) {
        warn!(error = %e, "failed to draw seed board");
    }

    // 5. Run until evolution is over or we are told to stop.
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };
    let result = driver::run_paced(&mut sim, &config.simulation, &mut renderer, shutdown)
        .await
        .map_err(EngineError::from)?;

    // 6. Log results.
    runner::log_simulation_end(&result);

    info!(
        run_id = %sim.run_id(),
        end_reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        "generations-engine shutdown complete"
    );

    Ok(())
}

/// Load the configuration from `generations-config.yaml`.
///
/// Looks for the file relative to the current working directory. A missing
/// file means defaults; the flag in the result says which one was used.
fn load_config() -> Result<(SimulationConfig, bool), EngineError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        let config = SimulationConfig::from_file(config_path)?;
        Ok((config, true))
    } else {
        let mut config = SimulationConfig::default();
        config.board.apply_env_overrides();
        Ok((config, false))
    }
}
