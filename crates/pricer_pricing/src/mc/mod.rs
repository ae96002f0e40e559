//! Monte Carlo valuation engine.
//!
//! This module provides the pricing algorithms for European equity options
//! under Black-Scholes dynamics, all behind the [`ValuationModel`] trait:
//!
//! - [`MonteCarloModel`]: independent normal draws
//! - [`AntitheticMonteCarloModel`]: draws paired with their negation
//! - [`StratifiedMonteCarloModel`]: equal-probability strata of the normal draw
//! - [`AnalyticalModel`]: the closed form, for comparison
//!
//! # Architecture
//!
//! ```text
//! ValuationModel::value(option, stock, rate, rng)
//! ├── GbmParams          (drift, diffusion, discount factor)
//! ├── PricerRng          (caller-owned random numbers)
//! ├── terminal_price()   (shared GBM step)
//! └── ValuationResult    (value, optional standard error)
//! ```
//!
//! Models are immutable after construction and hold no per-call state, so
//! a single instance can serve many threads; see [`value_batch`].
//!
//! # Examples
//!
//! ```rust
//! use pricer_models::instruments::{EquityOption, OptionStyle, OptionType};
//! use pricer_models::Stock;
//! use pricer_pricing::mc::{
//!     AntitheticMonteCarloModel, MonteCarloModel, StratifiedMonteCarloModel, ValuationModel,
//! };
//! use pricer_pricing::rng::PricerRng;
//!
//! let stock = Stock::new(100.0, 0.1).unwrap();
//! let option = EquityOption::new(OptionStyle::Binary, OptionType::Call, 100.0, 1.0).unwrap();
//!
//! let models: Vec<Box<dyn ValuationModel>> = vec![
//!     Box::new(MonteCarloModel::new(10_000).unwrap()),
//!     Box::new(AntitheticMonteCarloModel::new(5_000).unwrap()),
//!     Box::new(StratifiedMonteCarloModel::new(1_000, 10).unwrap()),
//! ];
//!
//! let mut rng = PricerRng::from_seed(42);
//! for model in &models {
//!     let result = model.value(&option, &stock, 0.05, &mut rng).unwrap();
//!     assert!(result.value() < (-0.05_f64).exp());
//! }
//! ```

mod analytical;
mod antithetic;
mod error;
mod gbm;
mod model;
mod parallel;
mod plain;
mod result;
mod stratified;

pub use analytical::AnalyticalModel;
pub use antithetic::AntitheticMonteCarloModel;
pub use error::{ConfigError, ResultError};
pub use gbm::{terminal_price, GbmParams};
pub use model::ValuationModel;
pub use parallel::{value_batch, value_repeated, RunStatistics, ValuationJob};
pub use plain::MonteCarloModel;
pub use result::ValuationResult;
pub use stratified::StratifiedMonteCarloModel;
