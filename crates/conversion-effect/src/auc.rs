//! AUC to Cohen's d
//!
//! `d = k · Φ⁻¹(auc)` where the scale factor `k` depends on which group
//! spreads and base rate the caller knows (Ruscio, 2008). With equal
//! variances or balanced base rates `k` collapses to `√2`; otherwise
//!
//! ```text
//! k = sqrt((s1² + s2²) / (p1·s1² + p2·s2²)),   p2 = 1 - p1
//! ```
//!
//! The caller states what it knows through [`AucContext`], which resolves to
//! exactly one [`AucScaling`] branch.

use crate::{EffectSize, EffectSizeType, SampleEffectSize};
use conversion_core::{
    approx_equal, math::distributions::normal, spreads_equal, utils, Error, Result, AUC_LOWER,
    AUC_UPPER, BALANCED_PROPORTION,
};
use std::f64::consts::SQRT_2;
use tracing::{debug, instrument};

/// Context values supplied alongside an AUC
///
/// Starts balanced (nothing known); each builder call records one more piece
/// of context.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AucContext {
    s1: Option<f64>,
    s2: Option<f64>,
    p1: Option<f64>,
}

impl AucContext {
    /// No context: equal variances and equal base rates are assumed
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Context from individually optional values
    pub fn from_parts(s1: Option<f64>, s2: Option<f64>, p1: Option<f64>) -> Self {
        Self { s1, s2, p1 }
    }

    /// Record the standard deviations of both classes
    pub fn with_spreads(mut self, s1: f64, s2: f64) -> Self {
        self.s1 = Some(s1);
        self.s2 = Some(s2);
        self
    }

    /// Record the standard deviation of the first class
    pub fn with_s1(mut self, s1: f64) -> Self {
        self.s1 = Some(s1);
        self
    }

    /// Record the standard deviation of the second class
    pub fn with_s2(mut self, s2: f64) -> Self {
        self.s2 = Some(s2);
        self
    }

    /// Record the base rate of the first class
    pub fn with_base_rate(mut self, p1: f64) -> Self {
        self.p1 = Some(p1);
        self
    }

    /// Decide which scaling branch this context selects
    ///
    /// Checked in priority order: nothing supplied, equal spreads, balanced
    /// base rate, full parametric context.
    ///
    /// # Errors
    ///
    /// [`Error::InsufficientContext`] when a partial context matches no
    /// simplification, [`Error::InvalidParameter`] when a full parametric
    /// context holds a non-positive spread or a base rate outside `[0, 1]`.
    pub fn resolve(&self) -> Result<AucScaling> {
        match (self.s1, self.s2, self.p1) {
            (None, None, None) => Ok(AucScaling::Balanced),
            (Some(s1), Some(s2), _) if spreads_equal(s1, s2) => Ok(AucScaling::EqualVariance),
            (_, _, Some(p1)) if approx_equal(p1, BALANCED_PROPORTION) => {
                Ok(AucScaling::BalancedBaseRate)
            }
            (Some(s1), Some(s2), Some(p1)) => {
                for (name, s) in [("s1", s1), ("s2", s2)] {
                    if !(s.is_finite() && s > 0.0) {
                        return Err(Error::InvalidParameter(format!(
                            "Standard deviation {name} = {s} must be finite and positive"
                        )));
                    }
                }
                if !(0.0..=1.0).contains(&p1) {
                    return Err(Error::InvalidParameter(format!(
                        "Base rate p1 = {p1} must be in [0, 1]"
                    )));
                }
                Ok(AucScaling::Parametric { s1, s2, p1 })
            }
            _ => Err(Error::InsufficientContext(format!(
                "parametric derivation requires all of s1, s2 and p1 (missing: {}); \
                 for the balanced case supply none of them",
                self.missing().join(", ")
            ))),
        }
    }

    fn missing(&self) -> Vec<&'static str> {
        [("s1", self.s1), ("s2", self.s2), ("p1", self.p1)]
            .into_iter()
            .filter(|(_, v)| v.is_none())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Scaling branch selected for an AUC to d conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AucScaling {
    /// No context supplied
    Balanced,
    /// `s1 == s2`; the base rate cancels
    EqualVariance,
    /// `p1 == 0.5`; the spreads cancel
    BalancedBaseRate,
    /// Unequal spreads with an unbalanced base rate
    Parametric { s1: f64, s2: f64, p1: f64 },
}

impl AucScaling {
    /// Factor applied to `Φ⁻¹(auc)`
    pub fn factor(&self) -> f64 {
        match *self {
            Self::Balanced | Self::EqualVariance | Self::BalancedBaseRate => SQRT_2,
            Self::Parametric { s1, s2, p1 } => {
                let p2 = 1.0 - p1;
                let (v1, v2) = (s1 * s1, s2 * s2);
                ((v1 + v2) / (p1 * v1 + p2 * v2)).sqrt()
            }
        }
    }

    /// Whether the branch is one of the `√2` simplifications
    pub fn is_simplified(&self) -> bool {
        !matches!(self, Self::Parametric { .. })
    }
}

/// Convert an AUC to Cohen's d
///
/// `auc` must lie in `[0.5, 1.0]`; an AUC below chance is a sign flip the
/// caller has to apply itself. `auc = 1.0` maps to `+inf`.
///
/// # Errors
///
/// [`Error::DomainRange`] for an AUC outside `[0.5, 1.0]` (including NaN),
/// otherwise whatever [`AucContext::resolve`] reports.
#[instrument(level = "trace", skip(context))]
pub fn auc_to_d(auc: f64, context: &AucContext) -> Result<f64> {
    if !(AUC_LOWER..=AUC_UPPER).contains(&auc) {
        return Err(Error::auc_out_of_range(auc, AUC_LOWER, AUC_UPPER));
    }

    let scaling = context.resolve()?;
    debug!(?scaling, simplified = scaling.is_simplified(), "AUC scaling branch selected");

    Ok(scaling.factor() * normal::quantile(auc)?)
}

/// [`auc_to_d`] with no context: `√2 · Φ⁻¹(auc)`
pub fn auc_to_d_balanced(auc: f64) -> Result<f64> {
    auc_to_d(auc, &AucContext::balanced())
}

/// Rank-based (Mann–Whitney) AUC estimator
///
/// Estimates `P(X₂ > X₁) + ½ P(X₂ = X₁)` as `U₂ / (n₁ n₂)`, where `U₂` is
/// the Mann–Whitney statistic of group 2. Ties receive mid-ranks.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmpiricalAuc;

impl EmpiricalAuc {
    /// Create a new empirical AUC estimator
    pub fn new() -> Self {
        Self
    }
}

impl SampleEffectSize for EmpiricalAuc {
    fn effect_size_type(&self) -> EffectSizeType {
        EffectSizeType::Auc
    }

    #[instrument(level = "trace", skip_all, fields(n1 = group1.len(), n2 = group2.len()))]
    fn compute(&self, group1: &[f64], group2: &[f64]) -> Result<EffectSize> {
        utils::validate_group(group1, 1, "group 1")?;
        utils::validate_group(group2, 1, "group 2")?;

        let n1 = group1.len();
        let n2 = group2.len();

        // (value, belongs to group 2)
        let mut pooled: Vec<(f64, bool)> = group1
            .iter()
            .map(|&v| (v, false))
            .chain(group2.iter().map(|&v| (v, true)))
            .collect();
        pooled.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut rank_sum2 = 0.0;
        let mut start = 0;
        while start < pooled.len() {
            let mut end = start + 1;
            while end < pooled.len() && pooled[end].0 == pooled[start].0 {
                end += 1;
            }
            // Ranks start..end (0-based) share the mid-rank
            let mid_rank = (start + end + 1) as f64 / 2.0;
            let in_group2 = pooled[start..end].iter().filter(|(_, g2)| *g2).count();
            rank_sum2 += mid_rank * in_group2 as f64;
            start = end;
        }

        let n2_f = n2 as f64;
        let u2 = rank_sum2 - n2_f * (n2_f + 1.0) / 2.0;
        let auc = u2 / (n1 as f64 * n2_f);

        Ok(EffectSize::new(auc, EffectSizeType::Auc, Some((n1, n2))))
    }
}
