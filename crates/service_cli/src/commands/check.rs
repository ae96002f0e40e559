//! Check command implementation
//!
//! Builds every input of a run from the resolved configuration without
//! simulating, and prints what would be valued.

use std::io::Write;

use tracing::info;

use super::RunInputs;
use crate::config::ValuationConfig;
use crate::Result;

/// Run the check command
pub fn run<W: Write>(config: &ValuationConfig, out: &mut W) -> Result<()> {
    info!("Checking configuration...");

    let RunInputs {
        stock,
        options,
        models,
    } = RunInputs::from_config(config)?;
    let simulation = &config.simulation;

    writeln!(out, "Configuration OK")?;
    writeln!(out, "  Log level: {}", config.log_level)?;
    writeln!(out, "  {}", stock)?;
    writeln!(out, "  Risk-free rate: {}", config.market.rate)?;
    writeln!(
        out,
        "  Simulation: {} bins x {} draws = {} trials | Seed: {} | Runs: {}",
        simulation.bins,
        simulation.draws_per_bin,
        simulation.trials()?,
        simulation.seed,
        simulation.runs
    )?;

    writeln!(out, "Options:")?;
    for option in &options {
        let closed_form = if option.analytical_solution().is_some() {
            "analytical"
        } else {
            "simulation only"
        };
        writeln!(out, "  {} ({})", option, closed_form)?;
    }

    writeln!(out, "Models:")?;
    for model in &models {
        writeln!(out, "  {}", model.name())?;
    }

    writeln!(out, "Resolved configuration:")?;
    write!(out, "{}", config.to_toml_string()?)?;

    info!("Configuration check passed");
    Ok(())
}
