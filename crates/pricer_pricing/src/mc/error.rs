//! Error types for the Monte Carlo valuation engine.
//!
//! This module defines structured error types for model configuration and
//! result validation.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration error for Monte Carlo models.
///
/// These errors occur during construction when the sample counts could not
/// support an unbiased variance estimate.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Trial count below 2.
    #[error("Invalid trial count {0}: must be at least 2")]
    InvalidTrialCount(usize),
    /// Bin count below 2.
    #[error("Invalid bin count {0}: must be at least 2")]
    InvalidBinCount(usize),
    /// Draws per bin below 2.
    #[error("Invalid draws per bin {0}: must be at least 2")]
    InvalidDrawsPerBin(usize),
    /// `bins * draws_per_bin` does not fit in `usize`.
    #[error("Trial count overflow: {bins} bins x {draws_per_bin} draws per bin")]
    TrialCountOverflow {
        /// Number of bins.
        bins: usize,
        /// Draws per bin.
        draws_per_bin: usize,
    },
}

/// Error for a valuation result built from invalid numbers.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ResultError {
    /// Value is negative or not finite.
    #[error("Invalid value {0}: must be finite and non-negative")]
    InvalidValue(f64),
    /// Standard error is negative or not finite.
    #[error("Invalid standard error {0}: must be finite and non-negative")]
    InvalidStandardError(f64),
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

impl From<ResultError> for PricingError {
    fn from(err: ResultError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidTrialCount(1);
        assert!(err.to_string().contains("Invalid trial count 1"));

        let err = ConfigError::InvalidBinCount(0);
        assert!(err.to_string().contains("Invalid bin count 0"));

        let err = ConfigError::InvalidDrawsPerBin(1);
        assert!(err.to_string().contains("draws per bin 1"));

        let err = ConfigError::TrialCountOverflow {
            bins: usize::MAX,
            draws_per_bin: 2,
        };
        assert!(err.to_string().contains("overflow"));
    }

    #[test]
    fn test_result_error_display() {
        let err = ResultError::InvalidValue(-1.0);
        assert!(err.to_string().contains("Invalid value -1"));

        let err = ResultError::InvalidStandardError(f64::NAN);
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = ConfigError::InvalidTrialCount(0).into();
        assert!(matches!(err, PricingError::InvalidInput(_)));

        let err: PricingError = ResultError::InvalidValue(-0.5).into();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }
}
