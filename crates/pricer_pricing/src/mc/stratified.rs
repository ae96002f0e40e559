//! Stratified Monte Carlo valuation.
//!
//! The unit interval is cut into `B` equal strata `[i/B, (i+1)/B)`. Each
//! stratum receives `D` uniform draws which are mapped to standard normals
//! through the inverse normal CDF, so every stratum of the normal
//! distribution is sampled exactly `D` times.
//!
//! The estimate is the mean of the stratum means. The standard error pools
//! the within-stratum sample variances:
//!
//! ```text
//! SE = sqrt(mean_i s_i²) / sqrt(B · D)
//! ```

use pricer_core::math::{mean, pooled_stratum_variance};
use pricer_core::types::PricingError;
use pricer_models::analytical::inverse_norm_cdf;
use pricer_models::instruments::EquityOption;
use pricer_models::Stock;
use tracing::{debug, trace};

use super::error::ConfigError;
use super::gbm::{terminal_price, GbmParams};
use super::model::{finish_estimate, validate_rate, ValuationModel};
use super::result::ValuationResult;
use crate::rng::PricerRng;

/// Monte Carlo model with equal-probability stratification of the normal draw.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::StratifiedMonteCarloModel;
///
/// let model = StratifiedMonteCarloModel::new(1_000, 10).unwrap();
/// assert_eq!(model.trials(), 10_000);
///
/// assert!(StratifiedMonteCarloModel::new(1, 10).is_err());
/// assert!(StratifiedMonteCarloModel::new(10, 1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StratifiedMonteCarloModel {
    bins: usize,
    draws_per_bin: usize,
    trials: usize,
}

impl StratifiedMonteCarloModel {
    /// Creates a model with `bins` strata of `draws_per_bin` draws each.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidBinCount` if `bins < 2`
    /// - `ConfigError::InvalidDrawsPerBin` if `draws_per_bin < 2`; a
    ///   within-stratum variance needs two observations
    /// - `ConfigError::TrialCountOverflow` if `bins * draws_per_bin`
    ///   overflows
    pub fn new(bins: usize, draws_per_bin: usize) -> Result<Self, ConfigError> {
        if bins < 2 {
            return Err(ConfigError::InvalidBinCount(bins));
        }
        if draws_per_bin < 2 {
            return Err(ConfigError::InvalidDrawsPerBin(draws_per_bin));
        }
        let trials = bins
            .checked_mul(draws_per_bin)
            .ok_or(ConfigError::TrialCountOverflow {
                bins,
                draws_per_bin,
            })?;

        Ok(Self {
            bins,
            draws_per_bin,
            trials,
        })
    }

    /// Returns the number of strata.
    #[inline]
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Returns the number of draws in each stratum.
    #[inline]
    pub fn draws_per_bin(&self) -> usize {
        self.draws_per_bin
    }

    /// Returns the total number of draws, `bins * draws_per_bin`.
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }
}

impl ValuationModel for StratifiedMonteCarloModel {
    fn name(&self) -> &'static str {
        "StratifiedMonteCarloModel"
    }

    fn value(
        &self,
        option: &EquityOption,
        stock: &Stock,
        rate: f64,
        rng: &mut PricerRng,
    ) -> Result<ValuationResult, PricingError> {
        validate_rate(rate)?;
        debug!(
            model = self.name(),
            bins = self.bins,
            draws_per_bin = self.draws_per_bin,
            seed = rng.seed(),
            %option,
            "starting valuation"
        );

        let params = GbmParams::from_stock(stock, rate, option.maturity());
        let (drift, diffusion) = (params.drift(), params.diffusion());
        let discount = params.discount_factor();
        let bins = self.bins as f64;

        // Stratum-major: bin i owns samples[i * D..(i + 1) * D]
        let mut samples = vec![0.0; self.trials];
        let mut bin_means = Vec::with_capacity(self.bins);

        for (bin, stratum) in samples.chunks_exact_mut(self.draws_per_bin).enumerate() {
            let lower = bin as f64 / bins;
            let upper = (bin + 1) as f64 / bins;

            rng.fill_uniform_range(stratum, lower, upper);
            for sample in stratum.iter_mut() {
                let z = inverse_norm_cdf(*sample);
                *sample = discount * option.payoff(terminal_price(params.spot, drift, diffusion, z));
            }

            let bin_mean = mean(stratum).ok_or_else(|| {
                PricingError::NumericalInstability(format!("empty stratum {}", bin))
            })?;
            trace!(bin, lower, upper, mean = bin_mean, "stratum valued");
            bin_means.push(bin_mean);
        }

        let value = mean(&bin_means).ok_or_else(|| {
            PricingError::NumericalInstability(format!("{} produced no strata", self.name()))
        })?;
        let pooled_variance = pooled_stratum_variance(&samples, &bin_means, self.draws_per_bin)
            .ok_or_else(|| {
                PricingError::NumericalInstability(format!(
                    "{} could not pool stratum variances",
                    self.name()
                ))
            })?;
        let standard_error = pooled_variance.sqrt() / (self.trials as f64).sqrt();

        let result = finish_estimate(self.name(), value, standard_error)?;
        debug!(
            model = self.name(),
            value = result.value(),
            standard_error = ?result.standard_error(),
            "valuation complete"
        );
        Ok(result)
    }
}
