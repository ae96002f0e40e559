//! Variance command implementation
//!
//! Repeats every simulation model over independent generator streams and
//! reports how far each one narrows the standard error of plain Monte Carlo
//! at the same number of draws.

use std::io::Write;

use pricer_core::types::PricingError;
use pricer_pricing::mc::{value_repeated, RunStatistics, ValuationJob};
use tracing::{debug, info};

use super::{label_width, RunInputs, ANALYTICAL_LABEL};
use crate::config::ValuationConfig;
use crate::Result;

/// Run the variance command
pub fn run<W: Write>(config: &ValuationConfig, out: &mut W) -> Result<()> {
    let RunInputs {
        stock,
        options,
        models,
    } = RunInputs::from_config(config)?;
    let rate = config.market.rate;
    let runs = config.simulation.runs;
    let seed = config.simulation.seed;

    info!(%stock, rate, runs, seed, "Starting variance comparison");

    let width = label_width(&models);
    for option in &options {
        writeln!(out, "Valuing {} over {} runs", option, runs)?;
        if let Some(solution) = option.analytical_solution() {
            let price = solution.analytical_price(&stock, rate);
            writeln!(out, "    {:<width$}    Price: {:.5}", ANALYTICAL_LABEL, price)?;
        }

        let job = ValuationJob::new(option, &stock, rate);
        let mut baseline: Option<f64> = None;
        for model in &models {
            let results = value_repeated(model.as_ref(), job, runs, seed)?;
            let stats = RunStatistics::from_results(&results).ok_or_else(|| {
                PricingError::NumericalInstability(format!(
                    "{} produced no run statistics",
                    model.name()
                ))
            })?;
            debug!(model = model.name(), ?stats, "runs summarised");

            // The first model is plain Monte Carlo
            let reference = *baseline.get_or_insert(stats.mean_standard_error);
            writeln!(
                out,
                "    {:<width$}    {} | Variance reduction: {:.2}x",
                model.name(),
                format_statistics(&stats),
                variance_reduction(reference, stats.mean_standard_error),
            )?;
        }
        writeln!(out)?;
    }

    info!("Variance comparison complete");
    Ok(())
}

fn format_statistics(stats: &RunStatistics) -> String {
    format!(
        "Mean price: {:.5} | Mean standard error: {:.5} | Observed std dev: {:.5}",
        stats.mean_value, stats.mean_standard_error, stats.observed_std_dev
    )
}

/// Ratio of estimator variances, `(baseline / standard_error)^2`.
fn variance_reduction(baseline: f64, standard_error: f64) -> f64 {
    if standard_error > 0.0 {
        (baseline / standard_error).powi(2)
    } else {
        f64::INFINITY
    }
}
