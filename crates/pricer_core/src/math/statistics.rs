//! Sample statistics for simulation estimators.
//!
//! Provides the estimators shared by every Monte Carlo variant:
//! - `mean`: Arithmetic mean
//! - `sample_variance`: Unbiased variance (divisor `n - 1`)
//! - `standard_error`: Sample standard deviation divided by `sqrt(n)`
//! - `pooled_stratum_variance`: Mean of the within-stratum sample variances
//!
//! All functions are generic over `T: Float` and return `None` when the
//! slice is too short for the estimator to be defined.

use num_traits::Float;

/// Arithmetic mean of `values`.
///
/// Returns `None` for an empty slice.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::mean;
///
/// assert_eq!(mean(&[1.0_f64, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean::<f64>(&[]), None);
/// ```
#[inline]
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let n = T::from(values.len())?;
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    Some(sum / n)
}

/// Unbiased sample variance of `values` around a precomputed `mean`.
///
/// Uses the divisor `n - 1`. Returns `None` when fewer than two
/// observations are supplied.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::sample_variance;
///
/// let values = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let var = sample_variance(&values, 5.0).unwrap();
/// assert!((var - 32.0 / 7.0).abs() < 1e-12);
/// ```
#[inline]
pub fn sample_variance<T: Float>(values: &[T], mean: T) -> Option<T> {
    if values.len() < 2 {
        return None;
    }
    let dof = T::from(values.len() - 1)?;
    let sum_sq = values.iter().fold(T::zero(), |acc, &v| {
        let dev = v - mean;
        acc + dev * dev
    });
    Some(sum_sq / dof)
}

/// Standard error of the sample mean: `sqrt(sample_variance) / sqrt(n)`.
///
/// Returns `None` when fewer than two observations are supplied.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::standard_error;
///
/// let se = standard_error(&[1.0_f64, 3.0], 2.0).unwrap();
/// // sample std = sqrt(2), n = 2
/// assert!((se - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn standard_error<T: Float>(values: &[T], mean: T) -> Option<T> {
    let variance = sample_variance(values, mean)?;
    let n = T::from(values.len())?;
    Some(variance.sqrt() / n.sqrt())
}

/// Average of the within-stratum sample variances.
///
/// `values` is laid out stratum-major: stratum `i` occupies
/// `values[i * stratum_len..(i + 1) * stratum_len]`, and `stratum_means[i]`
/// is its mean. Each stratum variance uses the divisor `stratum_len - 1`.
///
/// Returns `None` if `stratum_len < 2`, if there are no strata, or if the
/// layout does not match `stratum_means`.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::pooled_stratum_variance;
///
/// // Two strata: [1, 3] (var 2) and [10, 14] (var 8)
/// let values = [1.0_f64, 3.0, 10.0, 14.0];
/// let pooled = pooled_stratum_variance(&values, &[2.0, 12.0], 2).unwrap();
/// assert!((pooled - 5.0).abs() < 1e-12);
/// ```
pub fn pooled_stratum_variance<T: Float>(
    values: &[T],
    stratum_means: &[T],
    stratum_len: usize,
) -> Option<T> {
    if stratum_len < 2 || stratum_means.is_empty() {
        return None;
    }
    if values.len() != stratum_means.len() * stratum_len {
        return None;
    }

    let mut variance_sum = T::zero();
    for (stratum, &stratum_mean) in values.chunks_exact(stratum_len).zip(stratum_means) {
        variance_sum = variance_sum + sample_variance(stratum, stratum_mean)?;
    }

    Some(variance_sum / T::from(stratum_means.len())?)
}
