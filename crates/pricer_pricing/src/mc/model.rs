//! The valuation model abstraction shared by every pricing algorithm.

use pricer_core::math::{mean, standard_error};
use pricer_core::types::PricingError;
use pricer_models::instruments::EquityOption;
use pricer_models::Stock;

use super::result::ValuationResult;
use crate::rng::PricerRng;

/// A pricing algorithm for European equity options.
///
/// Implementations hold only immutable configuration, so one model can be
/// shared across threads. All randomness comes from the caller's generator.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{EquityOption, OptionStyle, OptionType};
/// use pricer_models::Stock;
/// use pricer_pricing::mc::{MonteCarloModel, ValuationModel};
/// use pricer_pricing::rng::PricerRng;
///
/// let stock = Stock::new(100.0, 0.1).unwrap();
/// let option = EquityOption::new(OptionStyle::Vanilla, OptionType::Call, 100.0, 1.0).unwrap();
///
/// let model = MonteCarloModel::new(10_000).unwrap();
/// let mut rng = PricerRng::from_seed(42);
/// let result = model.value(&option, &stock, 0.05, &mut rng).unwrap();
///
/// assert!(result.within_standard_errors(6.80496, 4.0));
/// ```
pub trait ValuationModel: Send + Sync {
    /// Short model name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Values `option` written on `stock` with continuously compounded
    /// risk-free `rate`.
    ///
    /// # Errors
    ///
    /// - `PricingError::InvalidInput` if `rate` is not finite
    /// - `PricingError::NumericalInstability` if the estimate is not finite
    /// - `PricingError::UnsupportedInstrument` if the model cannot price
    ///   this option variant
    fn value(
        &self,
        option: &EquityOption,
        stock: &Stock,
        rate: f64,
        rng: &mut PricerRng,
    ) -> Result<ValuationResult, PricingError>;
}

/// Rejects a non-finite risk-free rate.
#[inline]
pub(crate) fn validate_rate(rate: f64) -> Result<(), PricingError> {
    if !rate.is_finite() {
        return Err(PricingError::InvalidInput(format!(
            "Invalid risk-free rate: r = {}",
            rate
        )));
    }
    Ok(())
}

/// Builds an estimate, mapping non-finite numbers to `NumericalInstability`.
pub(crate) fn finish_estimate(
    model: &str,
    value: f64,
    standard_error: f64,
) -> Result<ValuationResult, PricingError> {
    if !value.is_finite() || !standard_error.is_finite() {
        return Err(PricingError::NumericalInstability(format!(
            "{} produced value {} with standard error {}",
            model, value, standard_error
        )));
    }
    Ok(ValuationResult::estimate(value, standard_error)?)
}

/// Mean and `s / √n` standard error of independent discounted payoffs.
pub(crate) fn summarise_samples(
    model: &str,
    samples: &[f64],
) -> Result<ValuationResult, PricingError> {
    let value = mean(samples).ok_or_else(|| {
        PricingError::NumericalInstability(format!("{} produced no samples", model))
    })?;
    let se = standard_error(samples, value).ok_or_else(|| {
        PricingError::NumericalInstability(format!(
            "{} needs at least two samples, got {}",
            model,
            samples.len()
        ))
    })?;
    finish_estimate(model, value, se)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate(0.05).is_ok());
        assert!(validate_rate(-0.01).is_ok());
        assert!(matches!(
            validate_rate(f64::NAN),
            Err(PricingError::InvalidInput(_))
        ));
        assert!(validate_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_summarise_samples() {
        let result = summarise_samples("test", &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(result.value(), 2.5);
        // s² = 5/3, se = sqrt(5/3) / 2
        let expected = (5.0_f64 / 3.0).sqrt() / 2.0;
        assert!((result.standard_error().unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_summarise_rejects_degenerate_input() {
        assert!(matches!(
            summarise_samples("test", &[]),
            Err(PricingError::NumericalInstability(_))
        ));
        assert!(matches!(
            summarise_samples("test", &[1.0]),
            Err(PricingError::NumericalInstability(_))
        ));
    }

    #[test]
    fn test_non_finite_estimate_is_instability() {
        let err = summarise_samples("test", &[1.0, f64::INFINITY]).unwrap_err();
        assert!(matches!(err, PricingError::NumericalInstability(_)));
        assert!(err.to_string().contains("test"));
    }
}
