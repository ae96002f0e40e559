//! Closed-form valuation behind the [`ValuationModel`] interface.

use pricer_core::types::PricingError;
use pricer_models::instruments::EquityOption;
use pricer_models::Stock;
use tracing::debug;

use super::model::{validate_rate, ValuationModel};
use super::result::ValuationResult;
use crate::rng::PricerRng;

/// Prices options through their analytical capability.
///
/// Results carry no standard error, and the generator is left untouched.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{EquityOption, OptionStyle, OptionType};
/// use pricer_models::Stock;
/// use pricer_pricing::mc::{AnalyticalModel, ValuationModel};
/// use pricer_pricing::rng::PricerRng;
///
/// let stock = Stock::new(100.0, 0.1).unwrap();
/// let option = EquityOption::new(OptionStyle::Vanilla, OptionType::Put, 100.0, 1.0).unwrap();
/// let result = AnalyticalModel
///     .value(&option, &stock, 0.05, &mut PricerRng::from_seed(0))
///     .unwrap();
///
/// assert!((result.value() - 1.92790).abs() < 1e-4);
/// assert_eq!(result.standard_error(), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnalyticalModel;

impl ValuationModel for AnalyticalModel {
    fn name(&self) -> &'static str {
        "AnalyticalModel"
    }

    fn value(
        &self,
        option: &EquityOption,
        stock: &Stock,
        rate: f64,
        _rng: &mut PricerRng,
    ) -> Result<ValuationResult, PricingError> {
        validate_rate(rate)?;

        let solution = option.analytical_solution().ok_or_else(|| {
            PricingError::UnsupportedInstrument(format!("no closed form for {}", option))
        })?;
        let price = solution.analytical_price(stock, rate);
        if !price.is_finite() {
            return Err(PricingError::NumericalInstability(format!(
                "closed form returned {} for {}",
                price, option
            )));
        }

        debug!(model = self.name(), %option, value = price, "closed-form valuation");
        Ok(ValuationResult::exact(price)?)
    }
}
