//! Simulation checks: each conversion recovers the effect observed directly
//! from samples drawn under the conversion's own distributional assumptions.

mod common;

use common::{assert_abs_diff_eq, init_tracing, logistic_sample, normal_sample, seeded_rng};
use effect_conversions::{
    auc_to_d_balanced, cohen_d_to_r_pb, logodds_from_sens_spec, logodds_to_d, CohenD,
    ConfusionMatrix, EmpiricalAuc, GroupProportion, PointBiserialCorrelation, SampleEffectSize,
};

#[test]
fn auc_recovers_cohen_d_for_normal_groups() -> anyhow::Result<()> {
    init_tracing();
    let mut rng = seeded_rng(42);
    let (n1, n2) = (40_000, 144_000);
    let d_true = 0.6;

    let group1 = normal_sample(&mut rng, 0.0, 1.0, n1);
    let group2 = normal_sample(&mut rng, d_true, 1.0, n2);

    let auc = EmpiricalAuc::new().compute(&group1, &group2)?.magnitude;
    let d_recovered = auc_to_d_balanced(auc)?;
    let d_direct = CohenD::new().compute(&group1, &group2)?.magnitude;
    tracing::info!(auc, d_recovered, d_direct, "AUC round trip");

    assert_abs_diff_eq!(d_recovered, d_direct, epsilon = 0.02);
    assert_abs_diff_eq!(d_direct, d_true, epsilon = 0.02);
    assert_abs_diff_eq!(d_recovered, d_true, epsilon = 0.02);
    Ok(())
}

#[test]
fn log_odds_recovers_cohen_d_for_logistic_groups() -> anyhow::Result<()> {
    init_tracing();
    let mut rng = seeded_rng(7);
    let n = 1_000_000;
    let diff = 1.0;

    let group1 = logistic_sample(&mut rng, 0.0, 1.0, n);
    let group2 = logistic_sample(&mut rng, diff, 1.0, n);

    let cm = ConfusionMatrix::from_threshold(&group1, &group2, diff / 2.0)?;
    let lor = logodds_from_sens_spec(cm.sensitivity()?, cm.specificity()?);
    let d_from_logodds = logodds_to_d(lor);

    let d_direct = CohenD::new().compute(&group1, &group2)?.magnitude;

    assert_abs_diff_eq!(d_from_logodds, d_direct, epsilon = 0.01);
    Ok(())
}

#[test]
fn d_to_r_recovers_point_biserial_for_unbalanced_groups() -> anyhow::Result<()> {
    init_tracing();
    let mut rng = seeded_rng(42);
    let (n1, n2) = (5_000, 15_000);
    let d_true = 0.5;

    let group1 = normal_sample(&mut rng, 0.0, 1.0, n1);
    let group2 = normal_sample(&mut rng, d_true, 1.0, n2);

    let d_observed = CohenD::new().compute(&group1, &group2)?.magnitude;
    let r_observed = PointBiserialCorrelation::new()
        .compute(&group1, &group2)?
        .magnitude;

    let r_recovered = cohen_d_to_r_pb(d_observed, GroupProportion::from_counts(n1, n2)?)?;

    assert_abs_diff_eq!(r_recovered, r_observed, epsilon = 0.01);
    Ok(())
}
