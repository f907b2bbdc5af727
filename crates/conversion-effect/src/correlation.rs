//! Point-biserial correlation
//!
//! The closed-form conversion from Cohen's d, and the sample estimator it is
//! validated against.

use crate::{EffectSize, EffectSizeType, SampleEffectSize};
use conversion_core::{utils, Error, Result, BALANCED_PROPORTION};

/// Share of the combined sample that falls in the focal group
///
/// Always strictly inside (0, 1). Defaults to the balanced design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupProportion(f64);

impl GroupProportion {
    /// Validate a proportion in the open interval (0, 1)
    pub fn new(p: f64) -> Result<Self> {
        if p > 0.0 && p < 1.0 {
            Ok(Self(p))
        } else {
            Err(Error::InvalidParameter(format!(
                "Group proportion {p} must be in (0, 1)"
            )))
        }
    }

    /// Proportion implied by two group sizes
    pub fn from_counts(n_focal: usize, n_other: usize) -> Result<Self> {
        if n_focal == 0 || n_other == 0 {
            return Err(Error::empty_group(1, n_focal.min(n_other)));
        }
        Self::new(n_focal as f64 / (n_focal + n_other) as f64)
    }

    /// The raw proportion
    pub fn value(&self) -> f64 {
        self.0
    }

    /// `1 / (p (1 - p))`, the correction term of the d to r conversion
    fn correction(&self) -> f64 {
        1.0 / (self.0 * (1.0 - self.0))
    }
}

impl Default for GroupProportion {
    fn default() -> Self {
        Self(BALANCED_PROPORTION)
    }
}

/// Convert Cohen's d to a point-biserial correlation
///
/// `r = d / sqrt(d² + h)` with `h = 1 / (p (1 - p))` (McGrath & Meyer, 2006).
/// The result has the sign of `d` and magnitude below one. An unbalanced `p`
/// inflates `h` and so attenuates `|r|` relative to the balanced design.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] when `d` is not finite.
pub fn cohen_d_to_r_pb(d: f64, p: GroupProportion) -> Result<f64> {
    if !d.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "Cohen's d must be finite, got {d}"
        )));
    }
    // hypot keeps d² from overflowing for huge |d|
    Ok(d / d.hypot(p.correction().sqrt()))
}

/// [`cohen_d_to_r_pb`] for equal group sizes (`h = 4`)
pub fn cohen_d_to_r_pb_balanced(d: f64) -> Result<f64> {
    cohen_d_to_r_pb(d, GroupProportion::default())
}

/// Point-biserial correlation effect size
///
/// Pearson correlation between the continuous values and a group indicator
/// coded 0 for group 1 and 1 for group 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointBiserialCorrelation;

impl PointBiserialCorrelation {
    /// Create a new point-biserial correlation estimator
    pub fn new() -> Self {
        Self
    }
}

impl SampleEffectSize for PointBiserialCorrelation {
    fn effect_size_type(&self) -> EffectSizeType {
        EffectSizeType::Correlation
    }

    #[tracing::instrument(level = "trace", skip_all, fields(n1 = group1.len(), n2 = group2.len()))]
    fn compute(&self, group1: &[f64], group2: &[f64]) -> Result<EffectSize> {
        utils::validate_group(group1, 1, "group 1")?;
        utils::validate_group(group2, 1, "group 2")?;

        let indicator: Vec<f64> = std::iter::repeat(0.0)
            .take(group1.len())
            .chain(std::iter::repeat(1.0).take(group2.len()))
            .collect();
        let values: Vec<f64> = group1.iter().chain(group2).copied().collect();

        let r = pearson_correlation(&indicator, &values)?;

        Ok(EffectSize::new(
            r,
            EffectSizeType::Correlation,
            Some((group1.len(), group2.len())),
        ))
    }
}

/// Calculate Pearson correlation coefficient
fn pearson_correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::InvalidInput(
            "Arrays must have the same length".to_string(),
        ));
    }

    if x.len() < 2 {
        return Err(Error::empty_group(2, x.len()));
    }

    let mean_x = utils::mean(x);
    let mean_y = utils::mean(y);

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;

    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;

        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();

    if denominator == 0.0 {
        return Err(Error::Computation(
            "Cannot compute correlation: zero variance".to_string(),
        ));
    }

    Ok(numerator / denominator)
}
