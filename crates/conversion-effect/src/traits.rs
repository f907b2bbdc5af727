//! Core traits for sample-based effect size estimation

use crate::types::{EffectSize, EffectSizeType};
use conversion_core::Result;

/// Effect size observed directly from two samples
///
/// `group1` is the reference (negative) group and `group2` the focal
/// (positive) group, so a positive effect means group 2 scores higher.
pub trait SampleEffectSize {
    /// Get the representation this estimator reports in
    fn effect_size_type(&self) -> EffectSizeType;

    /// Compute the effect size from the two samples
    fn compute(&self, group1: &[f64], group2: &[f64]) -> Result<EffectSize>;
}
