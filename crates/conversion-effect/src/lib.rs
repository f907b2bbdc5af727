//! Effect size conversions
//!
//! This crate converts between the effect size representations that meet in
//! meta-analysis and diagnostic-test evaluation: Cohen's d, the point-biserial
//! correlation, the AUC of a binary classifier and the log-odds ratio.
//!
//! # Conversions
//!
//! - [`cohen_d_to_r_pb`]: Cohen's d → point-biserial r
//! - [`auc_to_d`]: AUC → Cohen's d, with the scaling branch chosen by [`AucContext`]
//! - [`logodds_to_d`]: log-odds ratio → Cohen's d
//! - [`logodds_from_sens_spec`]: sensitivity and specificity → log-odds ratio
//! - [`logodds_from_ppv_npv`]: PPV and NPV → log-odds ratio
//!
//! Every conversion is a pure function. The AUC range is enforced with an
//! error, while diagnostic probabilities are saturated into `(0, 1)`.
//!
//! # Sample estimators
//!
//! [`CohenD`], [`PointBiserialCorrelation`] and [`EmpiricalAuc`] observe the
//! same quantities directly from two samples, and [`ConfusionMatrix`] yields
//! the rates behind a log-odds ratio.
//!
//! # Examples
//!
//! ```rust
//! use conversion_effect::{auc_to_d, cohen_d_to_r_pb, AucContext, GroupProportion};
//!
//! // Balanced AUC to d
//! let d = auc_to_d(0.76, &AucContext::balanced()).unwrap();
//! assert!((d - 1.0).abs() < 0.01);
//!
//! // Unequal spreads with a 30% base rate
//! let ctx = AucContext::balanced().with_spreads(1.0, 1.5).with_base_rate(0.3);
//! let d_parametric = auc_to_d(0.76, &ctx).unwrap();
//! assert!(d_parametric != d);
//!
//! // d to r for a 1:3 design
//! let r = cohen_d_to_r_pb(0.5, GroupProportion::from_counts(5, 15).unwrap()).unwrap();
//! assert!((r - 0.2116).abs() < 1e-4);
//! ```
//!
//! ```rust
//! use conversion_effect::{logodds_from_sens_spec, logodds_to_d};
//!
//! let lor = logodds_from_sens_spec(0.9, 0.9);
//! assert!((lor - 81f64.ln()).abs() < 1e-12);
//! assert!((logodds_to_d(lor) - 2.423).abs() < 1e-3);
//! ```

mod auc;
mod cohen_d;
mod correlation;
mod diagnostic;
mod log_odds;
mod traits;
mod types;

// Re-exports
pub use auc::{auc_to_d, auc_to_d_balanced, AucContext, AucScaling, EmpiricalAuc};
pub use cohen_d::CohenD;
pub use correlation::{
    cohen_d_to_r_pb, cohen_d_to_r_pb_balanced, GroupProportion, PointBiserialCorrelation,
};
pub use diagnostic::ConfusionMatrix;
pub use log_odds::{logodds_from_ppv_npv, logodds_from_sens_spec, logodds_to_d};
pub use traits::SampleEffectSize;
pub use types::{EffectSize, EffectSizeInterpretation, EffectSizeType};

// Convenience constructors
pub fn cohen_d() -> CohenD {
    CohenD::new()
}

pub fn point_biserial() -> PointBiserialCorrelation {
    PointBiserialCorrelation::new()
}

pub fn empirical_auc() -> EmpiricalAuc {
    EmpiricalAuc::new()
}
