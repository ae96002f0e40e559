//! Instrument error types.
//!
//! This module provides structured error handling for option
//! construction.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidStrike`: Strike price is non-positive
/// - `InvalidExpiry`: Time to maturity is non-positive
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to maturity (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
