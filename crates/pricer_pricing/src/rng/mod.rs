//! # Random Number Generation Infrastructure
//!
//! This module provides the seeded generator every Monte Carlo model draws
//! from.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators are seeded; streams derived from one
//!   seed reproduce independently of thread scheduling
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//! - **Injection**: Models take `&mut PricerRng` per call, never a global
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Generate uniform random values in [0, 1)
//! let uniform_value = rng.gen_uniform();
//!
//! // Generate standard normal variates (mean=0, std=1)
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;

#[cfg(test)]
mod tests;
