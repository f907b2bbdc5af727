//! Log-odds ratio conversions
//!
//! A diagnostic odds ratio built from two complementary probabilities, and
//! its logistic-distribution mapping onto Cohen's d (Hasselblad & Hedges,
//! 1995).
//!
//! Probabilities are saturated into `[ε, 1 - ε]` with
//! [`PROBABILITY_EPSILON`](conversion_core::PROBABILITY_EPSILON) rather than
//! rejected, so perfect classifiers yield a large finite log-odds ratio.

use conversion_core::clamp_probability;
use std::f64::consts::PI;

/// `√3 / π`, the ratio of the standard normal to the standard logistic scale
fn logistic_to_normal_scale() -> f64 {
    3f64.sqrt() / PI
}

/// Convert a log-odds ratio to Cohen's d
///
/// `d = logodds · √3 / π`. Linear and defined for every real input.
pub fn logodds_to_d(logodds: f64) -> f64 {
    logodds * logistic_to_normal_scale()
}

/// Log-odds ratio from sensitivity and specificity
///
/// `ln((sens · spec) / ((1 - sens)(1 - spec)))` after saturating both inputs.
pub fn logodds_from_sens_spec(sensitivity: f64, specificity: f64) -> f64 {
    saturated_log_odds_ratio(sensitivity, specificity)
}

/// Log-odds ratio from positive and negative predictive values
///
/// `ln((ppv · npv) / ((1 - ppv)(1 - npv)))` after saturating both inputs.
pub fn logodds_from_ppv_npv(ppv: f64, npv: f64) -> f64 {
    saturated_log_odds_ratio(ppv, npv)
}

fn saturated_log_odds_ratio(a: f64, b: f64) -> f64 {
    let a = clamp_probability(a);
    let b = clamp_probability(b);
    ((a * b) / ((1.0 - a) * (1.0 - b))).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use conversion_core::PROBABILITY_EPSILON;
    use proptest::prelude::*;

    #[test]
    fn test_sens_spec_literal() {
        let lor = logodds_from_sens_spec(0.9, 0.9);
        assert_abs_diff_eq!(lor, 81f64.ln(), epsilon = 1e-12);
        assert_abs_diff_eq!(lor, 4.394, epsilon = 1e-3);
        assert_abs_diff_eq!(logodds_to_d(4.394), 2.423, epsilon = 1e-3);
    }

    #[test]
    fn test_ppv_npv_matches_formula() {
        let lor = logodds_from_ppv_npv(0.8, 0.6);
        assert_abs_diff_eq!(lor, ((0.8 * 0.6) / (0.2 * 0.4f64)).ln(), epsilon = 1e-12);
        // Chance-level predictions carry no association
        assert_abs_diff_eq!(logodds_from_ppv_npv(0.5, 0.5), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_boundary_saturates() {
        let near = logodds_from_sens_spec(0.999999999, 0.5);
        let at = logodds_from_sens_spec(1.0, 0.5);
        assert!(near.is_finite() && at.is_finite());
        assert_abs_diff_eq!(near, at, epsilon = 1e-6);

        // ln((1-ε)/ε) at the upper bound
        let expected = ((1.0 - PROBABILITY_EPSILON) / PROBABILITY_EPSILON).ln();
        assert_relative_eq!(at, expected, max_relative = 1e-9);
    }

    #[test]
    fn test_out_of_range_is_clamped_not_rejected() {
        assert_eq!(logodds_from_sens_spec(1.7, 0.5), logodds_from_sens_spec(1.0, 0.5));
        assert_eq!(logodds_from_ppv_npv(-0.2, 0.5), logodds_from_ppv_npv(0.0, 0.5));
        assert!(logodds_from_sens_spec(0.0, 0.0).is_finite());
        assert!(logodds_from_sens_spec(f64::NAN, 0.5).is_nan());
    }

    #[test]
    fn test_logodds_to_d_scale() {
        assert_abs_diff_eq!(logodds_to_d(PI / 3f64.sqrt()), 1.0, epsilon = 1e-12);
        assert_eq!(logodds_to_d(0.0), 0.0);
    }

    proptest! {
        #[test]
        fn logodds_to_d_is_linear(x in -1e6f64..1e6) {
            let lhs = logodds_to_d(2.0 * x);
            let rhs = 2.0 * logodds_to_d(x);
            prop_assert!((lhs - rhs).abs() <= 1e-9 * (1.0 + rhs.abs()));
        }

        #[test]
        fn symmetric_in_arguments(a in 0.0f64..1.0, b in 0.0f64..1.0) {
            prop_assert_eq!(logodds_from_sens_spec(a, b), logodds_from_sens_spec(b, a));
        }

        #[test]
        fn finite_over_closed_unit_square(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            prop_assert!(logodds_from_ppv_npv(a, b).is_finite());
        }
    }
}
