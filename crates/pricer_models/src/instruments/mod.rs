//! Option instrument definitions.
//!
//! Uses enum dispatch for the option variants:
//! - [`EquityOption`] wraps every European option this crate can value
//! - [`VanillaOption`]: `max(direction * (S - K), 0)` payoff
//! - [`BinaryOption`]: cash-or-nothing payoff
//!
//! The closed-form price is a capability, reached through
//! [`EquityOption::analytical_solution`] rather than type inspection.
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{EquityOption, OptionStyle, OptionType};
//! use pricer_models::Stock;
//!
//! let option = EquityOption::new(OptionStyle::Vanilla, OptionType::Call, 100.0, 1.0).unwrap();
//! assert_eq!(option.payoff(110.0), 10.0);
//!
//! let stock = Stock::new(100.0, 0.1).unwrap();
//! let price = option
//!     .analytical_solution()
//!     .map(|solution| solution.analytical_price(&stock, 0.05));
//! assert!(price.unwrap() > 6.8);
//! ```

mod binary;
mod error;
mod option_type;
mod params;
mod vanilla;

use std::fmt;

pub use binary::BinaryOption;
pub use error::InstrumentError;
pub use option_type::{OptionStyle, OptionType};
pub use params::OptionParams;
pub use vanilla::VanillaOption;

use crate::analytical::AnalyticalSolution;

/// European equity option.
///
/// Every variant shares [`OptionParams`]; the variant decides the payoff and
/// whether a closed-form price exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EquityOption {
    /// Vanilla call or put.
    Vanilla(VanillaOption),
    /// Cash-or-nothing call or put.
    Binary(BinaryOption),
}

impl EquityOption {
    /// Creates an option of the given style.
    ///
    /// # Errors
    /// Returns `InstrumentError` if `strike <= 0` or `maturity <= 0`.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{EquityOption, OptionStyle, OptionType};
    ///
    /// assert!(EquityOption::new(OptionStyle::Binary, OptionType::Put, 100.0, 1.0).is_ok());
    /// assert!(EquityOption::new(OptionStyle::Binary, OptionType::Put, 100.0, -1.0).is_err());
    /// ```
    pub fn new(
        style: OptionStyle,
        option_type: OptionType,
        strike: f64,
        maturity: f64,
    ) -> Result<Self, InstrumentError> {
        let params = OptionParams::new(option_type, strike, maturity)?;
        Ok(match style {
            OptionStyle::Vanilla => EquityOption::Vanilla(VanillaOption::from_params(params)),
            OptionStyle::Binary => EquityOption::Binary(BinaryOption::from_params(params)),
        })
    }

    /// Payoff at maturity for the given underlying price.
    #[inline]
    pub fn payoff(&self, underlying_price: f64) -> f64 {
        match self {
            EquityOption::Vanilla(option) => option.payoff(underlying_price),
            EquityOption::Binary(option) => option.payoff(underlying_price),
        }
    }

    /// Returns the shared contract parameters.
    #[inline]
    pub fn params(&self) -> &OptionParams {
        match self {
            EquityOption::Vanilla(option) => option.params(),
            EquityOption::Binary(option) => option.params(),
        }
    }

    /// Returns the payoff style.
    #[inline]
    pub fn style(&self) -> OptionStyle {
        match self {
            EquityOption::Vanilla(_) => OptionStyle::Vanilla,
            EquityOption::Binary(_) => OptionStyle::Binary,
        }
    }

    /// Returns the option direction.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.params().option_type()
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.params().strike()
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.params().maturity()
    }

    /// Returns the closed-form pricing capability, if this variant has one.
    ///
    /// Both current variants do; callers must still handle `None`.
    pub fn analytical_solution(&self) -> Option<&dyn AnalyticalSolution> {
        match self {
            EquityOption::Vanilla(option) => Some(option),
            EquityOption::Binary(option) => Some(option),
        }
    }
}

impl From<VanillaOption> for EquityOption {
    fn from(option: VanillaOption) -> Self {
        EquityOption::Vanilla(option)
    }
}

impl From<BinaryOption> for EquityOption {
    fn from(option: BinaryOption) -> Self {
        EquityOption::Binary(option)
    }
}

impl fmt::Display for EquityOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquityOption::Vanilla(option) => option.fmt(f),
            EquityOption::Binary(option) => option.fmt(f),
        }
    }
}
