use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use torus_life::{
    Simulation, SimulationConfig, TerminalRenderer, Universe,
    application::{read_size, seed_universe},
    telemetry,
};
use tracing::error;

fn main() -> ExitCode {
    telemetry::init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = SimulationConfig::from_env().context("invalid configuration")?;

    let size = read_size(io::stdin().lock()).context("failed to read grid size from stdin")?;

    // Invalid sizes stop the program before anything is populated
    let mut universe = Universe::with_signed_size(size)?;
    seed_universe(&mut universe, &config)?;

    let renderer = TerminalRenderer::new(io::stdout().lock()).with_clear_screen(config.clear_screen);
    let mut simulation = Simulation::new(universe, renderer, config);
    simulation.run().context("rendering failed")?;

    Ok(())
}
