//! Core types for effect size conversions
//!
//! This crate holds what every conversion crate shares: the unified
//! [`Error`] type, the named constants that pin down the saturation and
//! tolerance policies, the standard normal quantile and a few sample helpers.
//!
//! # Example
//!
//! ```rust
//! use conversion_core::{clamp_probability, math::distributions::normal, PROBABILITY_EPSILON};
//!
//! let z = normal::quantile(0.975).unwrap();
//! assert!((z - 1.959964).abs() < 1e-6);
//!
//! assert_eq!(clamp_probability(1.0), 1.0 - PROBABILITY_EPSILON);
//! ```

pub mod constants;
pub mod error;
pub mod math;
pub mod utils;

pub use constants::*;
pub use error::{Error, Result};
pub use math::{approx_equal, clamp_probability, spreads_equal};
