//! Antithetic-variate Monte Carlo valuation.

use pricer_core::types::PricingError;
use pricer_models::instruments::EquityOption;
use pricer_models::Stock;
use tracing::debug;

use super::error::ConfigError;
use super::gbm::{terminal_price, GbmParams};
use super::model::{summarise_samples, validate_rate, ValuationModel};
use super::result::ValuationResult;
use crate::rng::PricerRng;

/// Monte Carlo model pairing every draw `z` with `-z`.
///
/// Each of the `trials` observations is the average of the two discounted
/// payoffs, so one valuation evaluates `2 · trials` terminal prices. Halve
/// `trials` to compare against [`MonteCarloModel`](super::MonteCarloModel)
/// at an equal number of underlying draws.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::AntitheticMonteCarloModel;
///
/// let model = AntitheticMonteCarloModel::new(5_000).unwrap();
/// assert_eq!(model.trials(), 5_000);
/// assert!(AntitheticMonteCarloModel::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AntitheticMonteCarloModel {
    trials: usize,
}

impl AntitheticMonteCarloModel {
    /// Creates a model drawing `trials` antithetic pairs per valuation.
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

    /// Returns the number of antithetic pairs per valuation.
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }
}

impl ValuationModel for AntitheticMonteCarloModel {
    fn name(&self) -> &'static str {
        "AntitheticMonteCarloModel"
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
        let half_discount = 0.5 * params.discount_factor();

        let mut samples = vec![0.0; self.trials];
        rng.fill_normal(&mut samples);
        for sample in samples.iter_mut() {
            let z = *sample;
            let up = option.payoff(terminal_price(params.spot, drift, diffusion, z));
            let down = option.payoff(terminal_price(params.spot, drift, diffusion, -z));
            *sample = half_discount * (up + down);
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
