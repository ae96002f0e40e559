//! Common option contract parameters.
//!
//! This module provides the validated contract terms shared by every
//! option variant.

use super::error::InstrumentError;
use super::option_type::OptionType;

/// Contract terms shared by vanilla and binary options.
///
/// Strike and time to maturity are strictly positive; both are checked once
/// here so the option variants never re-validate.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionParams, OptionType};
///
/// let params = OptionParams::new(OptionType::Call, 100.0, 1.0).unwrap();
/// assert_eq!(params.strike(), 100.0);
/// assert_eq!(params.maturity(), 1.0);
///
/// assert!(OptionParams::new(OptionType::Put, 0.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParams {
    option_type: OptionType,
    strike: f64,
    maturity: f64,
}

impl OptionParams {
    /// Creates validated contract parameters.
    ///
    /// # Arguments
    /// * `option_type` - Call or put
    /// * `strike` - Strike price (must be positive)
    /// * `maturity` - Time to maturity in years (must be positive)
    ///
    /// # Errors
    /// - `InstrumentError::InvalidStrike` if `strike` is not finite and positive
    /// - `InstrumentError::InvalidExpiry` if `maturity` is not finite and positive
    pub fn new(
        option_type: OptionType,
        strike: f64,
        maturity: f64,
    ) -> Result<Self, InstrumentError> {
        if !strike.is_finite() || strike <= 0.0 {
            return Err(InstrumentError::InvalidStrike { strike });
        }

        if !maturity.is_finite() || maturity <= 0.0 {
            return Err(InstrumentError::InvalidExpiry { expiry: maturity });
        }

        Ok(Self {
            option_type,
            strike,
            maturity,
        })
    }

    /// Returns the option direction.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }
}
