//! Sample helpers shared by the sample-based estimators

use crate::{Error, Result};

/// Reject empty or non-finite samples
pub fn validate_group(values: &[f64], min_len: usize, context: &str) -> Result<()> {
    if values.len() < min_len {
        return Err(Error::empty_group(min_len, values.len()));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}

/// Arithmetic mean
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mean and unbiased (n - 1) variance in one pass over the centred data
pub fn mean_and_variance(values: &[f64]) -> Result<(f64, f64)> {
    if values.len() < 2 {
        return Err(Error::empty_group(2, values.len()));
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|&v| (v - m) * (v - m)).sum();
    Ok((m, ss / (values.len() - 1) as f64))
}
