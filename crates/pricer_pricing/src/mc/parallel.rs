//! Parallel batch valuation with Rayon.
//!
//! Each job gets its own generator from [`PricerRng::for_stream`], keyed by
//! the job's position, so a batch reproduces exactly for a given seed no
//! matter how Rayon schedules it.

use pricer_core::math::{mean, sample_variance};
use pricer_core::types::PricingError;
use pricer_models::instruments::EquityOption;
use pricer_models::Stock;
use rayon::prelude::*;
use tracing::debug;

use super::model::ValuationModel;
use super::result::ValuationResult;
use crate::rng::PricerRng;

/// One `(option, stock, rate)` valuation request.
#[derive(Clone, Copy, Debug)]
pub struct ValuationJob<'a> {
    /// Option to value.
    pub option: &'a EquityOption,
    /// Underlying stock.
    pub stock: &'a Stock,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
}

impl<'a> ValuationJob<'a> {
    /// Creates a job.
    #[inline]
    pub fn new(option: &'a EquityOption, stock: &'a Stock, rate: f64) -> Self {
        Self {
            option,
            stock,
            rate,
        }
    }
}

/// Values every job in parallel.
///
/// Job `i` draws from `PricerRng::for_stream(seed, i)`. Results come back in
/// job order and each failure stays attached to its job.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{EquityOption, OptionStyle, OptionType};
/// use pricer_models::Stock;
/// use pricer_pricing::mc::{value_batch, MonteCarloModel, ValuationJob};
///
/// let stock = Stock::new(100.0, 0.1).unwrap();
/// let call = EquityOption::new(OptionStyle::Vanilla, OptionType::Call, 100.0, 1.0).unwrap();
/// let put = EquityOption::new(OptionStyle::Vanilla, OptionType::Put, 100.0, 1.0).unwrap();
/// let jobs = [
///     ValuationJob::new(&call, &stock, 0.05),
///     ValuationJob::new(&put, &stock, 0.05),
/// ];
///
/// let model = MonteCarloModel::new(1_000).unwrap();
/// let results = value_batch(&model, &jobs, 42);
/// assert_eq!(results.len(), 2);
/// assert!(results.iter().all(|r| r.is_ok()));
/// ```
pub fn value_batch<M>(
    model: &M,
    jobs: &[ValuationJob<'_>],
    seed: u64,
) -> Vec<Result<ValuationResult, PricingError>>
where
    M: ValuationModel + ?Sized,
{
    debug!(model = model.name(), jobs = jobs.len(), seed, "starting batch valuation");

    jobs.par_iter()
        .enumerate()
        .map(|(index, job)| {
            let mut rng = PricerRng::for_stream(seed, index as u64);
            model.value(job.option, job.stock, job.rate, &mut rng)
        })
        .collect()
}

/// Values the same job `runs` times on independent streams.
///
/// Run `r` draws from `PricerRng::for_stream(seed, r)`.
///
/// # Errors
///
/// Returns an error if any run fails.
pub fn value_repeated<M>(
    model: &M,
    job: ValuationJob<'_>,
    runs: usize,
    seed: u64,
) -> Result<Vec<ValuationResult>, PricingError>
where
    M: ValuationModel + ?Sized,
{
    debug!(model = model.name(), runs, seed, "starting repeated valuation");

    (0..runs)
        .into_par_iter()
        .map(|run| {
            let mut rng = PricerRng::for_stream(seed, run as u64);
            model.value(job.option, job.stock, job.rate, &mut rng)
        })
        .collect()
}

/// Summary of repeated estimates of the same price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunStatistics {
    /// Number of runs summarised.
    pub runs: usize,
    /// Mean of the estimates.
    pub mean_value: f64,
    /// Mean of the reported standard errors.
    pub mean_standard_error: f64,
    /// Sample standard deviation of the estimates across runs.
    pub observed_std_dev: f64,
}

impl RunStatistics {
    /// Summarises simulation estimates.
    ///
    /// Returns `None` for fewer than two runs or if any result lacks a
    /// standard error.
    pub fn from_results(results: &[ValuationResult]) -> Option<Self> {
        let values: Vec<f64> = results.iter().map(|r| r.value()).collect();
        let errors: Vec<f64> = results
            .iter()
            .map(|r| r.standard_error())
            .collect::<Option<_>>()?;

        let mean_value = mean(&values)?;
        let observed_std_dev = sample_variance(&values, mean_value)?.sqrt();

        Some(Self {
            runs: results.len(),
            mean_value,
            mean_standard_error: mean(&errors)?,
            observed_std_dev,
        })
    }
}
