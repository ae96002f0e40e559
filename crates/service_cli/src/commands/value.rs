//! Value command implementation
//!
//! Values the four reference options with every model and prints each
//! estimate beside the closed-form price.

use std::io::Write;

use pricer_core::types::PricingError;
use pricer_models::instruments::EquityOption;
use pricer_pricing::mc::{value_batch, ValuationJob, ValuationResult};
use tracing::info;

use super::{label_width, RunInputs, ANALYTICAL_LABEL};
use crate::config::ValuationConfig;
use crate::Result;

/// Run the value command
pub fn run<W: Write>(config: &ValuationConfig, out: &mut W) -> Result<()> {
    let RunInputs {
        stock,
        options,
        models,
    } = RunInputs::from_config(config)?;
    let rate = config.market.rate;
    let seed = config.simulation.seed;

    info!(%stock, rate, seed, options = options.len(), "Starting valuation");

    let jobs: Vec<ValuationJob<'_>> = options
        .iter()
        .map(|option| ValuationJob::new(option, &stock, rate))
        .collect();

    // estimates[m][o]: model m on option o
    let mut estimates = Vec::with_capacity(models.len());
    for model in &models {
        let results = value_batch(model.as_ref(), &jobs, seed)
            .into_iter()
            .collect::<std::result::Result<Vec<_>, PricingError>>()?;
        estimates.push(results);
    }

    let width = label_width(&models);
    for (index, option) in options.iter().enumerate() {
        let mut rows: Vec<(&str, ValuationResult)> = Vec::with_capacity(models.len() + 1);
        if let Some(solution) = option.analytical_solution() {
            let price = solution.analytical_price(&stock, rate);
            rows.push((
                ANALYTICAL_LABEL,
                ValuationResult::exact(price).map_err(PricingError::from)?,
            ));
        }
        for (model, results) in models.iter().zip(&estimates) {
            rows.push((model.name(), results[index]));
        }
        write_block(out, option, &rows, width)?;
    }

    info!("Valuation complete");
    Ok(())
}

fn write_block<W: Write>(
    out: &mut W,
    option: &EquityOption,
    rows: &[(&str, ValuationResult)],
    width: usize,
) -> std::io::Result<()> {
    writeln!(out, "Valuing {}", option)?;
    for (label, result) in rows {
        writeln!(out, "    {:<width$}    {}", label, result, width = width)?;
    }
    writeln!(out)
}
