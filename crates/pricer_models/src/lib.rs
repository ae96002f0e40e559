//! # Pricer Models (L2: Business Logic)
//!
//! Underlyings, option instruments, and closed-form prices.
//!
//! This crate provides:
//! - [`Stock`]: the equity underlying (spot price, volatility)
//! - Option definitions (vanilla and binary, calls and puts)
//! - Payoff functions
//! - Black-Scholes closed forms used to validate the simulation engine
//! - Standard normal distribution functions
//!
//! ## Design Principles
//!
//! - **Enum-based instruments** for static dispatch
//! - **Capability trait** for closed-form pricing, exposed as
//!   `Option<&dyn AnalyticalSolution>`
//! - **Validated constructors**: every value that exists is usable

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
mod underlying;

pub use underlying::{Stock, UnderlyingError};
