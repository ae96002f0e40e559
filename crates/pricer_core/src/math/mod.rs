//! Numerical building blocks shared by the valuation layers.
//!
//! - [`statistics`]: Sample mean, unbiased variance, standard error and
//!   pooled stratum variance

pub mod statistics;

pub use statistics::{mean, pooled_stratum_variance, sample_variance, standard_error};
