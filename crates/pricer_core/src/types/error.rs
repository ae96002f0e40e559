//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The caller-facing error raised by every valuation layer
//!
//! Layer-specific validation enums (underlying, instrument, model
//! configuration, result) live next to the types they guard and convert into
//! [`PricingError::InvalidInput`] via `From`.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for valuation operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: A constructor received an out-of-range argument
/// - `NumericalInstability`: A computation produced a non-finite number
/// - `UnsupportedInstrument`: The instrument lacks a capability the model needs
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Instrument type not supported
    #[error("Unsupported instrument: {0}")]
    UnsupportedInstrument(String),
}

impl PricingError {
    /// Returns `true` for errors caused by caller-supplied arguments.
    #[inline]
    pub fn is_validation(&self) -> bool {
        matches!(self, PricingError::InvalidInput(_))
    }
}
