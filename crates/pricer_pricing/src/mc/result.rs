//! Valuation result type.

use std::fmt;

use super::error::ResultError;

/// Outcome of one valuation call.
///
/// Closed-form prices carry no standard error; simulation estimates always
/// do. Both numbers are finite and non-negative.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::ValuationResult;
///
/// let estimate = ValuationResult::estimate(6.81, 0.07).unwrap();
/// assert_eq!(estimate.to_string(), "Price: 6.81000 | Standard Error: 0.07000");
/// assert!(estimate.within_standard_errors(6.80496, 3.0));
///
/// let exact = ValuationResult::exact(6.80496).unwrap();
/// assert_eq!(exact.standard_error(), None);
/// assert_eq!(exact.to_string(), "Price: 6.80496");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValuationResult {
    value: f64,
    standard_error: Option<f64>,
}

impl ValuationResult {
    /// Creates an exact (closed-form) result.
    ///
    /// # Errors
    ///
    /// `ResultError::InvalidValue` if `value` is negative or not finite.
    pub fn exact(value: f64) -> Result<Self, ResultError> {
        validate_value(value)?;
        Ok(Self {
            value,
            standard_error: None,
        })
    }

    /// Creates a simulation estimate.
    ///
    /// # Errors
    ///
    /// - `ResultError::InvalidValue` if `value` is negative or not finite
    /// - `ResultError::InvalidStandardError` if `standard_error` is negative
    ///   or not finite
    pub fn estimate(value: f64, standard_error: f64) -> Result<Self, ResultError> {
        validate_value(value)?;
        if !standard_error.is_finite() || standard_error < 0.0 {
            return Err(ResultError::InvalidStandardError(standard_error));
        }
        Ok(Self {
            value,
            standard_error: Some(standard_error),
        })
    }

    /// Returns the price.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the standard error, `None` for exact prices.
    #[inline]
    pub fn standard_error(&self) -> Option<f64> {
        self.standard_error
    }

    /// Returns `true` for simulation estimates.
    #[inline]
    pub fn is_estimate(&self) -> bool {
        self.standard_error.is_some()
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> Option<f64> {
        self.standard_error.map(|se| 1.96 * se)
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> Option<f64> {
        self.standard_error.map(|se| 2.576 * se)
    }

    /// Checks whether `reference` lies within `k` standard errors of the value.
    ///
    /// Exact results only match a reference equal to the value up to
    /// floating-point roundoff.
    pub fn within_standard_errors(&self, reference: f64, k: f64) -> bool {
        let distance = (self.value - reference).abs();
        match self.standard_error {
            Some(se) => distance <= k * se,
            None => distance <= 1e-12 * reference.abs().max(1.0),
        }
    }
}

impl fmt::Display for ValuationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price: {:.5}", self.value)?;
        if let Some(se) = self.standard_error {
            write!(f, " | Standard Error: {:.5}", se)?;
        }
        Ok(())
    }
}

#[inline]
fn validate_value(value: f64) -> Result<(), ResultError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ResultError::InvalidValue(value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_result() {
        let result = ValuationResult::exact(1.5).unwrap();
        assert_eq!(result.value(), 1.5);
        assert_eq!(result.standard_error(), None);
        assert!(!result.is_estimate());
        assert_eq!(result.confidence_95(), None);
    }

    #[test]
    fn test_estimate_result() {
        let result = ValuationResult::estimate(2.0, 0.1).unwrap();
        assert_eq!(result.standard_error(), Some(0.1));
        assert!(result.is_estimate());
        assert!((result.confidence_95().unwrap() - 0.196).abs() < 1e-12);
        assert!((result.confidence_99().unwrap() - 0.2576).abs() < 1e-12);
    }

    #[test]
    fn test_zero_is_valid() {
        assert!(ValuationResult::exact(0.0).is_ok());
        assert!(ValuationResult::estimate(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_rejects_invalid_value() {
        assert_eq!(
            ValuationResult::exact(-1.0),
            Err(ResultError::InvalidValue(-1.0))
        );
        assert!(ValuationResult::exact(f64::NAN).is_err());
        assert!(ValuationResult::exact(f64::INFINITY).is_err());
        assert!(matches!(
            ValuationResult::estimate(-0.1, 0.1),
            Err(ResultError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_standard_error() {
        assert_eq!(
            ValuationResult::estimate(1.0, -0.1),
            Err(ResultError::InvalidStandardError(-0.1))
        );
        assert!(ValuationResult::estimate(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_within_standard_errors() {
        let result = ValuationResult::estimate(10.0, 0.5).unwrap();
        assert!(result.within_standard_errors(11.4, 3.0));
        assert!(!result.within_standard_errors(11.6, 3.0));

        let exact = ValuationResult::exact(10.0).unwrap();
        assert!(exact.within_standard_errors(10.0, 3.0));
        assert!(!exact.within_standard_errors(10.001, 3.0));
    }

    #[test]
    fn test_display() {
        let result = ValuationResult::estimate(6.804_957_7, 0.001_234).unwrap();
        assert_eq!(result.to_string(), "Price: 6.80496 | Standard Error: 0.00123");

        let exact = ValuationResult::exact(0.640_791).unwrap();
        assert_eq!(exact.to_string(), "Price: 0.64079");
    }
}
