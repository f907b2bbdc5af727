//! Mathematical utilities for effect size conversions
//!
//! The normal quantile is delegated to `statrs`; everything else here is
//! elementary arithmetic with the saturation and tolerance policies made
//! explicit.

use crate::constants::{PROBABILITY_EPSILON, SHORTCUT_ABS_TOLERANCE, SHORTCUT_REL_TOLERANCE};
use tracing::trace;

/// Distribution-related mathematical functions
pub mod distributions {
    /// Standard normal distribution utilities
    pub mod normal {
        use crate::{Error, Result};
        use statrs::distribution::{ContinuousCDF, Normal};

        fn standard() -> Result<Normal> {
            Normal::new(0.0, 1.0).map_err(|e| {
                Error::Computation(format!("Failed to create normal distribution: {e}"))
            })
        }

        /// Inverse CDF (Φ⁻¹) of the standard normal distribution
        ///
        /// `p = 0` maps to `-inf` and `p = 1` to `+inf`. Values outside `[0, 1]`
        /// and NaN are rejected.
        pub fn quantile(p: f64) -> Result<f64> {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::InvalidParameter(format!(
                    "Probability {p} must be in [0, 1]"
                )));
            }
            Ok(standard()?.inverse_cdf(p))
        }

        /// CDF (Φ) of the standard normal distribution
        pub fn cdf(x: f64) -> Result<f64> {
            Ok(standard()?.cdf(x))
        }

    }
}

/// Saturate a probability into `[ε, 1 - ε]`
///
/// Boundary and out-of-range inputs are clamped silently. NaN passes through
/// unchanged.
pub fn clamp_probability(p: f64) -> f64 {
    let clamped = p.clamp(PROBABILITY_EPSILON, 1.0 - PROBABILITY_EPSILON);
    if clamped != p && !p.is_nan() {
        trace!(input = p, clamped, "probability saturated");
    }
    clamped
}

/// Scale-free equality for two standard deviations
///
/// Only the ratio of the spreads enters the AUC scaling, so the comparison is
/// purely relative.
pub fn spreads_equal(s1: f64, s2: f64) -> bool {
    approx::relative_eq!(s1, s2, epsilon = 0.0, max_relative = SHORTCUT_REL_TOLERANCE)
}

/// Tolerant equality used to recognise a balanced base rate
pub fn approx_equal(a: f64, b: f64) -> bool {
    approx::relative_eq!(
        a,
        b,
        epsilon = SHORTCUT_ABS_TOLERANCE,
        max_relative = SHORTCUT_REL_TOLERANCE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamp_probability_boundaries() {
        assert_eq!(clamp_probability(0.0), PROBABILITY_EPSILON);
        assert_eq!(clamp_probability(1.0), 1.0 - PROBABILITY_EPSILON);
        assert_eq!(clamp_probability(-3.0), PROBABILITY_EPSILON);
        assert_eq!(clamp_probability(7.5), 1.0 - PROBABILITY_EPSILON);
        assert_eq!(clamp_probability(0.3), 0.3);
        assert!(clamp_probability(f64::NAN).is_nan());
    }

    #[test]
    fn test_approx_equal() {
        assert!(approx_equal(1.0, 1.0 + 1e-10));
        assert!(approx_equal(1e6, 1e6 * (1.0 + 1e-9)));
        assert!(approx_equal(0.5, 0.5));
        assert!(!approx_equal(1.0, 1.001));
        assert!(!approx_equal(0.5, 0.4999));
    }

    #[test]
    fn test_spreads_equal_ignores_units() {
        assert!(spreads_equal(2.0, 2.0));
        assert!(spreads_equal(3.0, 3.0 + 1e-12));
        assert!(spreads_equal(3e-9, 3e-9 * (1.0 + 1e-10)));
        assert!(spreads_equal(0.0, 0.0));
        assert!(!spreads_equal(1e-9, 9e-9));
        assert!(!spreads_equal(1e-12, 2e-12));
    }

    proptest! {
        #[test]
        fn spreads_equal_is_scale_invariant(
            s1 in 0.1f64..10.0,
            s2 in 0.1f64..10.0,
            exp in -12i32..12,
        ) {
            prop_assume!((s1 - s2).abs() > 1e-6 * s1.max(s2));
            let k = 10f64.powi(exp);
            prop_assert!(!spreads_equal(s1 * k, s2 * k));
            prop_assert!(spreads_equal(s1 * k, s1 * k));
        }

        #[test]
        fn clamped_probability_stays_open(p in -10.0f64..10.0) {
            let c = clamp_probability(p);
            prop_assert!(c > 0.0 && c < 1.0);
        }
    }
}
