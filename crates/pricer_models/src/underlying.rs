//! Underlying asset definitions.
//!
//! This module provides:
//! - [`Stock`]: Spot price and volatility of an equity underlying
//! - [`UnderlyingError`]: Validation failures for underlying construction

use std::fmt;

use pricer_core::types::PricingError;
use thiserror::Error;

/// Underlying validation errors.
///
/// # Examples
/// ```
/// use pricer_models::UnderlyingError;
///
/// let err = UnderlyingError::InvalidSpot { spot: -100.0 };
/// assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UnderlyingError {
    /// Spot price is not strictly positive.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Volatility is not strictly positive.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },
}

impl From<UnderlyingError> for PricingError {
    fn from(err: UnderlyingError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Equity underlying with a current spot price and a constant volatility.
///
/// Both values are strictly positive for the lifetime of the value. The spot
/// price may be moved with [`Stock::set_spot`]; the volatility is fixed at
/// construction.
///
/// # Examples
/// ```
/// use pricer_models::Stock;
///
/// let mut stock = Stock::new(100.0, 0.1).unwrap();
/// assert_eq!(stock.spot(), 100.0);
///
/// stock.set_spot(105.0).unwrap();
/// assert_eq!(stock.spot(), 105.0);
///
/// assert!(Stock::new(0.0, 0.1).is_err());
/// assert!(Stock::new(100.0, -0.1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stock {
    spot: f64,
    volatility: f64,
}

impl Stock {
    /// Creates a new stock.
    ///
    /// # Errors
    /// - `UnderlyingError::InvalidSpot` if `spot` is not finite and positive
    /// - `UnderlyingError::InvalidVolatility` if `volatility` is not finite and positive
    pub fn new(spot: f64, volatility: f64) -> Result<Self, UnderlyingError> {
        validate_spot(spot)?;

        if !volatility.is_finite() || volatility <= 0.0 {
            return Err(UnderlyingError::InvalidVolatility { volatility });
        }

        Ok(Self { spot, volatility })
    }

    /// Returns the current spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the annualised volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Moves the spot price.
    ///
    /// # Errors
    /// `UnderlyingError::InvalidSpot` if `spot` is not finite and positive; the
    /// stock is left unchanged.
    pub fn set_spot(&mut self, spot: f64) -> Result<(), UnderlyingError> {
        validate_spot(spot)?;
        self.spot = spot;
        Ok(())
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stock | Spot price: {} | Volatility: {}",
            self.spot, self.volatility
        )
    }
}

#[inline]
fn validate_spot(spot: f64) -> Result<(), UnderlyingError> {
    if !spot.is_finite() || spot <= 0.0 {
        return Err(UnderlyingError::InvalidSpot { spot });
    }
    Ok(())
}
