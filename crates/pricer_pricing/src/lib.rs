//! # Pricer Pricing (Layer 3: Valuation Engine)
//!
//! Monte Carlo valuation of European equity options with variance
//! reduction, validated against Black-Scholes closed forms.
//!
//! ## Modules
//!
//! - [`mc`]: valuation models, results and parallel batch valuation
//! - [`rng`]: seeded random number generation
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): `PricingError`, sample statistics
//! - Layer 2 (pricer_models): `Stock`, `EquityOption`, closed forms
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::{EquityOption, OptionStyle, OptionType};
//! use pricer_models::Stock;
//! use pricer_pricing::mc::{StratifiedMonteCarloModel, ValuationModel};
//! use pricer_pricing::rng::PricerRng;
//!
//! let stock = Stock::new(100.0, 0.1).unwrap();
//! let option = EquityOption::new(OptionStyle::Vanilla, OptionType::Call, 100.0, 1.0).unwrap();
//!
//! let model = StratifiedMonteCarloModel::new(1_000, 10).unwrap();
//! let mut rng = PricerRng::from_seed(42);
//! let result = model.value(&option, &stock, 0.05, &mut rng).unwrap();
//!
//! println!("{}", result);
//! assert!((result.value() - 6.80496).abs() < 0.01);
//! ```

#![warn(missing_docs)]

pub mod mc;
pub mod rng;
