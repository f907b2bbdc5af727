//! Cohen's d observed from two samples
//!
//! The reference value the conversions are checked against:
//!
//! d = (mean₂ - mean₁) / s_pooled
//!
//! with `s_pooled² = ((n₁ - 1)s₁² + (n₂ - 1)s₂²) / (n₁ + n₂ - 2)`.

use crate::{EffectSize, EffectSizeType, SampleEffectSize};
use conversion_core::{utils, Error, Result};

/// Cohen's d effect size estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct CohenD;

impl CohenD {
    /// Create a new Cohen's d estimator
    pub fn new() -> Self {
        Self
    }

    /// Pooled standard deviation of two samples
    pub fn pooled_std(group1: &[f64], group2: &[f64]) -> Result<f64> {
        let (_, var1) = utils::mean_and_variance(group1)?;
        let (_, var2) = utils::mean_and_variance(group2)?;
        Ok(pooled_std_from(var1, group1.len(), var2, group2.len()))
    }
}

fn pooled_std_from(var1: f64, n1: usize, var2: f64, n2: usize) -> f64 {
    let df1 = (n1 - 1) as f64;
    let df2 = (n2 - 1) as f64;
    ((df1 * var1 + df2 * var2) / (df1 + df2)).sqrt()
}

impl SampleEffectSize for CohenD {
    fn effect_size_type(&self) -> EffectSizeType {
        EffectSizeType::StandardizedMeanDifference
    }

    #[tracing::instrument(level = "trace", skip_all, fields(n1 = group1.len(), n2 = group2.len()))]
    fn compute(&self, group1: &[f64], group2: &[f64]) -> Result<EffectSize> {
        utils::validate_group(group1, 2, "group 1")?;
        utils::validate_group(group2, 2, "group 2")?;

        let (mean1, var1) = utils::mean_and_variance(group1)?;
        let (mean2, var2) = utils::mean_and_variance(group2)?;

        let pooled = pooled_std_from(var1, group1.len(), var2, group2.len());
        if pooled <= 0.0 {
            return Err(Error::Computation(
                "Pooled standard deviation is zero".to_string(),
            ));
        }

        Ok(EffectSize::new(
            (mean2 - mean1) / pooled,
            EffectSizeType::StandardizedMeanDifference,
            Some((group1.len(), group2.len())),
        ))
    }
}
