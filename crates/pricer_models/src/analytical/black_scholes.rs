//! Black-Scholes closed forms for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//! **Cash-or-nothing**: e^(-rT)·N(±d₂)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Both the vanilla and the cash-or-nothing prices use the textbook
//! `d₂ = d₁ - σ√T`, not `d₁ - σ·T`; the two agree only at `T = 1`.

use num_traits::Float;

use super::distributions::norm_cdf;
use crate::instruments::OptionType;
use crate::underlying::{Stock, UnderlyingError};

/// Black-Scholes model for European option pricing.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl BlackScholes<f64> {
    /// Builds the model from an already validated stock.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::Stock;
    ///
    /// let stock = Stock::new(100.0, 0.1).unwrap();
    /// let bs = BlackScholes::from_stock(&stock, 0.05);
    /// assert!((bs.price_call(100.0, 1.0) - 6.80496).abs() < 1e-4);
    /// ```
    pub fn from_stock(stock: &Stock, rate: f64) -> Self {
        Self {
            spot: stock.spot(),
            rate,
            volatility: stock.volatility(),
        }
    }
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `UnderlyingError::InvalidSpot` if spot is not finite and positive
    /// - `UnderlyingError::InvalidVolatility` if volatility is not finite and positive
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, UnderlyingError> {
        let zero = T::zero();

        if !spot.is_finite() || spot <= zero {
            return Err(UnderlyingError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !volatility.is_finite() || volatility <= zero {
            return Err(UnderlyingError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Returns large positive/negative values as `expiry` goes to zero.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let half = T::from(0.5).unwrap();
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            let large = T::from(100.0).unwrap();
            if self.spot > strike {
                return large;
            } else if self.spot < strike {
                return -large;
            } else {
                return zero;
            }
        }

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T (square root of time, also for vanilla options)
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return self.d1(strike, expiry);
        }

        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    #[inline]
    fn discount(&self, expiry: T) -> T {
        (-self.rate * expiry).exp()
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// assert!(bs.price_call(100.0, 1.0) > 0.0);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return (self.spot - strike).max(zero);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        // Both terms underflow together far out of the money
        floor_roundoff(self.spot * norm_cdf(d1) - strike * self.discount(expiry) * norm_cdf(d2))
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return (strike - self.spot).max(zero);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        floor_roundoff(strike * self.discount(expiry) * norm_cdf(-d2) - self.spot * norm_cdf(-d1))
    }

    /// Prices a vanilla call or put.
    #[inline]
    pub fn price(&self, option_type: OptionType, strike: T, expiry: T) -> T {
        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }

    /// Prices a cash-or-nothing option paying one unit.
    ///
    /// `e^(-rT)·N(d₂)` for calls, `e^(-rT)·N(-d₂)` for puts.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::OptionType;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.1).unwrap();
    /// let call = bs.price_digital(OptionType::Call, 100.0, 1.0);
    /// assert!(call > 0.0 && call < (-0.05_f64).exp());
    /// ```
    #[inline]
    pub fn price_digital(&self, option_type: OptionType, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            let spot = self.spot.to_f64().unwrap_or(f64::NAN);
            let strike = strike.to_f64().unwrap_or(f64::NAN);
            return if option_type.is_in_the_money(spot, strike) {
                self.discount(expiry)
            } else {
                T::zero()
            };
        }

        let direction = T::from(option_type.direction()).unwrap();
        self.discount(expiry) * norm_cdf(direction * self.d2(strike, expiry))
    }
}

/// Clamps negative roundoff to zero and lets NaN through.
#[inline]
fn floor_roundoff<T: Float>(price: T) -> T {
    if price.is_nan() {
        price
    } else {
        price.max(T::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_model() -> BlackScholes<f64> {
        BlackScholes::new(100.0, 0.05, 0.1).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_inputs() {
        assert!(matches!(
            BlackScholes::new(-100.0_f64, 0.05, 0.2),
            Err(UnderlyingError::InvalidSpot { .. })
        ));
        assert!(matches!(
            BlackScholes::new(100.0_f64, 0.05, 0.0),
            Err(UnderlyingError::InvalidVolatility { .. })
        ));
        assert!(BlackScholes::new(f64::INFINITY, 0.05, 0.2).is_err());
        assert!(BlackScholes::new(100.0_f64, 0.05, f64::INFINITY).is_err());
    }

    #[test]
    fn test_nan_rate_propagates() {
        let bs = BlackScholes::new(100.0_f64, f64::NAN, 0.1).unwrap();
        assert!(bs.price_call(100.0, 1.0).is_nan());
        assert!(bs.price_put(100.0, 1.0).is_nan());
        assert!(bs.price_digital(OptionType::Call, 100.0, 1.0).is_nan());
    }

    #[test]
    fn test_digital_near_expiry_is_discounted() {
        let bs = BlackScholes::new(110.0_f64, 0.05, 0.2).unwrap();
        let expiry = 5e-11;
        assert_eq!(
            bs.price_digital(OptionType::Call, 100.0, expiry),
            (-0.05 * expiry).exp()
        );
        assert_eq!(bs.price_digital(OptionType::Put, 100.0, expiry), 0.0);
    }

    #[test]
    fn test_from_stock() {
        let stock = Stock::new(105.0, 0.25).unwrap();
        let bs = BlackScholes::from_stock(&stock, 0.03);
        assert_eq!(bs.spot(), 105.0);
        assert_eq!(bs.volatility(), 0.25);
        assert_eq!(bs.rate(), 0.03);
    }

    #[test]
    fn test_d1_d2_reference() {
        let bs = reference_model();
        assert_relative_eq!(bs.d1(100.0, 1.0), 0.55, epsilon = 1e-12);
        assert_relative_eq!(bs.d2(100.0, 1.0), 0.45, epsilon = 1e-12);
    }

    #[test]
    fn test_d2_uses_sqrt_time() {
        let bs = reference_model();
        let expiry = 2.0_f64;
        assert_relative_eq!(
            bs.d1(100.0, expiry) - bs.d2(100.0, expiry),
            0.1 * expiry.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_reference_prices() {
        let bs = reference_model();
        assert_relative_eq!(bs.price_call(100.0, 1.0), 6.80496, epsilon = 1e-4);
        assert_relative_eq!(bs.price_put(100.0, 1.0), 1.92790, epsilon = 1e-4);
        assert_relative_eq!(bs.price_call(100.0, 2.0), 11.41261, epsilon = 1e-4);
        assert_relative_eq!(bs.price_put(100.0, 2.0), 1.89636, epsilon = 1e-4);
    }

    #[test]
    fn test_put_call_parity() {
        let bs = BlackScholes::new(90.0_f64, 0.03, 0.3).unwrap();
        for (strike, expiry) in [(80.0, 0.5), (100.0, 1.0), (120.0, 3.0)] {
            let lhs = bs.price_call(strike, expiry) - bs.price_put(strike, expiry);
            let rhs = 90.0 - strike * (-0.03 * expiry).exp();
            assert_relative_eq!(lhs, rhs, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_price_dispatch() {
        let bs = reference_model();
        assert_eq!(bs.price(OptionType::Call, 100.0, 1.0), bs.price_call(100.0, 1.0));
        assert_eq!(bs.price(OptionType::Put, 100.0, 1.0), bs.price_put(100.0, 1.0));
    }

    #[test]
    fn test_digital_reference_prices() {
        let bs = reference_model();
        assert_relative_eq!(bs.price_digital(OptionType::Call, 100.0, 1.0), 0.640791, epsilon = 1e-5);
        assert_relative_eq!(bs.price_digital(OptionType::Put, 100.0, 1.0), 0.310439, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_expiry_returns_intrinsic() {
        let bs = BlackScholes::new(110.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(bs.price_call(100.0, 0.0), 10.0);
        assert_eq!(bs.price_put(100.0, 0.0), 0.0);
        assert_eq!(bs.price_digital(OptionType::Call, 100.0, 0.0), 1.0);
        assert_eq!(bs.price_digital(OptionType::Put, 100.0, 0.0), 0.0);
    }

    #[test]
    fn test_deep_out_of_the_money_not_negative() {
        let bs = BlackScholes::new(1.0_f64, 0.0, 0.01).unwrap();
        assert!(bs.price_call(500.0, 0.01) >= 0.0);
        let bs = BlackScholes::new(500.0_f64, 0.0, 0.01).unwrap();
        assert!(bs.price_put(1.0, 0.01) >= 0.0);
    }

    #[test]
    fn test_f32_compatibility() {
        let bs = BlackScholes::new(100.0_f32, 0.05, 0.1).unwrap();
        assert!((bs.price_call(100.0, 1.0) - 6.80496).abs() < 1e-3);
    }
}
