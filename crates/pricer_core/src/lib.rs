//! # pricer_core: Foundation for Option Valuation
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Error taxonomy: `PricingError` (`types::error`)
//! - Sample statistics for Monte Carlo estimators (`math::statistics`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::statistics::{mean, standard_error};
//! use pricer_core::types::PricingError;
//!
//! let payoffs = [1.0_f64, 2.0, 3.0, 4.0];
//! let m = mean(&payoffs).unwrap();
//! let se = standard_error(&payoffs, m).unwrap();
//! assert!((m - 2.5).abs() < 1e-12);
//! assert!(se > 0.0);
//!
//! let err = PricingError::InvalidInput("strike must be positive".to_string());
//! assert!(err.is_validation());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

/// Generic floating-point trait used throughout the workspace.
pub use num_traits::Float;
