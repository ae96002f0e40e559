//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes prices for vanilla and cash-or-nothing options
//! - Standard normal distribution functions
//! - [`AnalyticalSolution`], the capability implemented by options that
//!   have a closed-form price
//!
//! The distribution functions are generic over `T: Float`.

pub mod black_scholes;
pub mod distributions;

pub use black_scholes::BlackScholes;
pub use distributions::{inverse_norm_cdf, norm_cdf, norm_pdf};

use crate::underlying::Stock;

/// Closed-form pricing capability.
///
/// Implemented by option variants whose price has an exact formula under
/// Black-Scholes dynamics. Reach it through
/// [`EquityOption::analytical_solution`](crate::instruments::EquityOption::analytical_solution).
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalSolution;
/// use pricer_models::instruments::{BinaryOption, OptionType};
/// use pricer_models::Stock;
///
/// let stock = Stock::new(100.0, 0.1).unwrap();
/// let option = BinaryOption::new(OptionType::Call, 100.0, 1.0).unwrap();
/// assert!(option.analytical_price(&stock, 0.05) < (-0.05_f64).exp());
/// ```
pub trait AnalyticalSolution {
    /// Present value of the option on `stock` with continuously
    /// compounded risk-free `rate`.
    fn analytical_price(&self, stock: &Stock, rate: f64) -> f64;
}
