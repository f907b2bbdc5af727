//! Effect size conversions for meta-analysis and diagnostic testing
//!
//! Facade over the workspace crates:
//!
//! - [`conversion_core`]: shared error type, constants and the normal quantile
//! - [`conversion_effect`]: the conversions and the sample-based estimators
//!
//! The conversions are re-exported at the crate root.
//!
//! ```rust
//! use effect_conversions::{auc_to_d, AucContext, Error};
//!
//! let ctx = AucContext::balanced().with_s1(1.2);
//! assert!(matches!(auc_to_d(0.7, &ctx), Err(Error::InsufficientContext(_))));
//! assert!(matches!(auc_to_d(0.3, &AucContext::balanced()), Err(Error::DomainRange { .. })));
//! ```

pub use conversion_core;
pub use conversion_effect;

pub use conversion_core::{Error, Result, PROBABILITY_EPSILON};
pub use conversion_effect::{
    auc_to_d, auc_to_d_balanced, cohen_d_to_r_pb, cohen_d_to_r_pb_balanced, logodds_from_ppv_npv,
    logodds_from_sens_spec, logodds_to_d, AucContext, AucScaling, CohenD, ConfusionMatrix,
    EffectSize, EffectSizeInterpretation, EffectSizeType, EmpiricalAuc, GroupProportion,
    PointBiserialCorrelation, SampleEffectSize,
};
