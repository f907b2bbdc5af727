//! Error types for effect size conversions
//!
//! Provides a unified error type for all conversion crates.

use thiserror::Error;

/// Core error type for effect size conversions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A value lies outside the range its formula is defined on
    #[error("Value out of range: {name} = {value} is outside [{lower}, {upper}]")]
    DomainRange {
        name: &'static str,
        value: f64,
        lower: f64,
        upper: f64,
    },

    /// Only part of the context a parametric conversion needs was supplied
    #[error("Insufficient context: {0}")]
    InsufficientContext(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an AUC outside the closed range the conversion accepts
    pub fn auc_out_of_range(auc: f64, lower: f64, upper: f64) -> Self {
        Self::DomainRange {
            name: "auc",
            value: auc,
            lower,
            upper,
        }
    }

    /// Create an error for a group with too few observations
    pub fn empty_group(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }
}
