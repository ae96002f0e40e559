//! Binary (cash-or-nothing) European option.

use std::fmt;

use super::error::InstrumentError;
use super::option_type::OptionType;
use super::params::OptionParams;
use crate::analytical::{AnalyticalSolution, BlackScholes};
use crate::underlying::Stock;

/// European option paying one unit of cash if it finishes strictly in the
/// money, nothing otherwise.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{BinaryOption, OptionType};
///
/// let call = BinaryOption::new(OptionType::Call, 100.0, 1.0).unwrap();
/// assert_eq!(call.payoff(100.5), 1.0);
/// assert_eq!(call.payoff(100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryOption {
    params: OptionParams,
}

impl BinaryOption {
    /// Creates a new binary option.
    ///
    /// # Errors
    /// Returns `InstrumentError` if `strike <= 0` or `maturity <= 0`.
    pub fn new(
        option_type: OptionType,
        strike: f64,
        maturity: f64,
    ) -> Result<Self, InstrumentError> {
        Ok(Self::from_params(OptionParams::new(
            option_type,
            strike,
            maturity,
        )?))
    }

    /// Creates a binary option from already validated parameters.
    #[inline]
    pub fn from_params(params: OptionParams) -> Self {
        Self { params }
    }

    /// Cash paid at maturity: `1` if in the money, else `0`.
    #[inline]
    pub fn payoff(&self, underlying_price: f64) -> f64 {
        if self
            .params
            .option_type()
            .is_in_the_money(underlying_price, self.params.strike())
        {
            1.0
        } else {
            0.0
        }
    }

    /// Returns the contract parameters.
    #[inline]
    pub fn params(&self) -> &OptionParams {
        &self.params
    }

    /// Returns the option direction.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.params.option_type()
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.params.strike()
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.params.maturity()
    }
}

impl AnalyticalSolution for BinaryOption {
    fn analytical_price(&self, stock: &Stock, rate: f64) -> f64 {
        BlackScholes::from_stock(stock, rate).price_digital(
            self.option_type(),
            self.strike(),
            self.maturity(),
        )
    }
}

impl fmt::Display for BinaryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinaryOption | Option type: {} | Strike price: {} | Time to maturity: {}",
            self.option_type(),
            self.strike(),
            self.maturity()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_payoff_is_indicator() {
        let call = BinaryOption::new(OptionType::Call, 100.0, 1.0).unwrap();
        let put = BinaryOption::new(OptionType::Put, 100.0, 1.0).unwrap();

        assert_eq!(call.payoff(150.0), 1.0);
        assert_eq!(call.payoff(50.0), 0.0);
        assert_eq!(put.payoff(50.0), 1.0);
        assert_eq!(put.payoff(150.0), 0.0);

        // At the strike neither side pays
        assert_eq!(call.payoff(100.0), 0.0);
        assert_eq!(put.payoff(100.0), 0.0);
    }

    #[test]
    fn test_reference_analytical_prices() {
        let stock = Stock::new(100.0, 0.1).unwrap();
        let call = BinaryOption::new(OptionType::Call, 100.0, 1.0).unwrap();
        let put = BinaryOption::new(OptionType::Put, 100.0, 1.0).unwrap();

        let call_price = call.analytical_price(&stock, 0.05);
        let put_price = put.analytical_price(&stock, 0.05);

        assert_relative_eq!(call_price, 0.640791, epsilon = 1e-5);
        assert_relative_eq!(put_price, 0.310439, epsilon = 1e-5);
        assert!(call_price < (-0.05_f64).exp());

        // Call and put together pay one unit for sure
        assert_relative_eq!(call_price + put_price, (-0.05_f64).exp(), epsilon = 1e-7);
    }

    #[test]
    fn test_display() {
        let put = BinaryOption::new(OptionType::Put, 95.5, 0.25).unwrap();
        assert_eq!(
            put.to_string(),
            "BinaryOption | Option type: Put | Strike price: 95.5 | Time to maturity: 0.25"
        );
    }
}
