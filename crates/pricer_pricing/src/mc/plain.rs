//! Plain Monte Carlo valuation.

use pricer_core::types::PricingError;
use pricer_models::instruments::EquityOption;
use pricer_models::Stock;
use tracing::debug;

use super::error::ConfigError;
use super::gbm::{terminal_price, GbmParams};
use super::model::{summarise_samples, validate_rate, ValuationModel};
use super::result::ValuationResult;
use crate::rng::PricerRng;

/// Monte Carlo model averaging discounted payoffs over independent normal draws.
///
/// The estimate is the mean of `trials` discounted payoffs and the standard
/// error is their sample standard deviation over `√trials`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloModel;
///
/// assert!(MonteCarloModel::new(10_000).is_ok());
/// assert!(MonteCarloModel::new(1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonteCarloModel {
    trials: usize,
}

impl MonteCarloModel {
    /// Creates a model drawing `trials` samples per valuation.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidTrialCount` if `trials < 2`.
    pub fn new(trials: usize) -> Result<Self, ConfigError> {
        if trials < 2 {
            return Err(ConfigError::InvalidTrialCount(trials));
        }
        Ok(Self { trials })
    }

    /// Returns the number of trials per valuation.
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }
}

impl ValuationModel for MonteCarloModel {
    fn name(&self) -> &'static str {
        "MonteCarloModel"
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
            trials = self.trials,
            seed = rng.seed(),
            %option,
            "starting valuation"
        );

        let params = GbmParams::from_stock(stock, rate, option.maturity());
        let (drift, diffusion) = (params.drift(), params.diffusion());
        let discount = params.discount_factor();

        let mut samples = vec![0.0; self.trials];
        rng.fill_normal(&mut samples);
        for sample in samples.iter_mut() {
            let s_t = terminal_price(params.spot, drift, diffusion, *sample);
            *sample = discount * option.payoff(s_t);
        }

        let result = summarise_samples(self.name(), &samples)?;
        debug!(
            model = self.name(),
            value = result.value(),
            standard_error = ?result.standard_error(),
            "valuation complete"
        );
        Ok(result)
    }
}
