//! Terminal-price simulation under risk-neutral Geometric Brownian Motion.
//!
//! European payoffs only need the price at maturity, so the whole path
//! collapses to one exact log-space step:
//!
//! ```text
//! S_T = S₀ · exp((r - σ²/2)·T + σ·√T·Z),  Z ~ N(0, 1)
//! ```
//!
//! Every valuation model shares this primitive and differs only in how it
//! chooses `Z`.

use pricer_models::Stock;

/// Parameters for Geometric Brownian Motion terminal-price sampling.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.1, 1.0);
/// // With Z = 0 the price grows at the drift rate only
/// let s_t = params.terminal_price(0.0);
/// assert!((s_t - 100.0 * (0.05_f64 - 0.005).exp()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r) - annualised.
    pub rate: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Time to maturity (T) - in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            maturity,
        }
    }

    /// Takes spot and volatility from a validated stock.
    #[inline]
    pub fn from_stock(stock: &Stock, rate: f64, maturity: f64) -> Self {
        Self::new(stock.spot(), rate, stock.volatility(), maturity)
    }

    /// Validates the parameters.
    ///
    /// # Returns
    ///
    /// `true` if all parameters are finite and spot, volatility and maturity
    /// are strictly positive.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.spot > 0.0
            && self.spot.is_finite()
            && self.rate.is_finite()
            && self.volatility > 0.0
            && self.volatility.is_finite()
            && self.maturity > 0.0
            && self.maturity.is_finite()
    }

    /// Log-drift over the whole horizon: `(r - σ²/2)·T`.
    #[inline]
    pub fn drift(&self) -> f64 {
        (self.rate - 0.5 * self.volatility * self.volatility) * self.maturity
    }

    /// Diffusion scale over the whole horizon: `σ·√T`.
    #[inline]
    pub fn diffusion(&self) -> f64 {
        self.volatility * self.maturity.sqrt()
    }

    /// Risk-free discount factor `e^(-rT)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Terminal price for one standard normal draw.
    #[inline]
    pub fn terminal_price(&self, z: f64) -> f64 {
        terminal_price(self.spot, self.drift(), self.diffusion(), z)
    }
}

/// Terminal price from a precomputed log-drift and diffusion.
///
/// Models hoist `drift` and `diffusion` out of the sampling loop and call
/// this once per draw.
#[inline]
pub fn terminal_price(spot: f64, drift: f64, diffusion: f64, z: f64) -> f64 {
    spot * (drift + diffusion * z).exp()
}
