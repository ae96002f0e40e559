//! Vanilla European option.

use std::fmt;

use super::error::InstrumentError;
use super::option_type::OptionType;
use super::params::OptionParams;
use crate::analytical::{AnalyticalSolution, BlackScholes};
use crate::underlying::Stock;

/// European option paying `max(direction * (S_T - K), 0)` at maturity.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionType, VanillaOption};
///
/// let call = VanillaOption::new(OptionType::Call, 100.0, 1.0).unwrap();
/// assert_eq!(call.payoff(110.0), 10.0);
/// assert_eq!(call.payoff(90.0), 0.0);
///
/// let put = VanillaOption::new(OptionType::Put, 100.0, 1.0).unwrap();
/// assert_eq!(put.payoff(90.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOption {
    params: OptionParams,
}

impl VanillaOption {
    /// Creates a new vanilla option.
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

    /// Creates a vanilla option from already validated parameters.
    #[inline]
    pub fn from_params(params: OptionParams) -> Self {
        Self { params }
    }

    /// Intrinsic value at maturity for the given underlying price.
    #[inline]
    pub fn payoff(&self, underlying_price: f64) -> f64 {
        let direction = self.params.option_type().direction();
        (direction * (underlying_price - self.params.strike())).max(0.0)
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

impl AnalyticalSolution for VanillaOption {
    fn analytical_price(&self, stock: &Stock, rate: f64) -> f64 {
        BlackScholes::from_stock(stock, rate).price(
            self.option_type(),
            self.strike(),
            self.maturity(),
        )
    }
}

impl fmt::Display for VanillaOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VanillaOption | Option type: {} | Strike price: {} | Time to maturity: {}",
            self.option_type(),
            self.strike(),
            self.maturity()
        )
    }
}
