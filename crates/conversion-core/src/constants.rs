//! Named constants shared by the conversions

/// Saturation margin for probabilities fed into a log-odds ratio.
///
/// Sensitivity, specificity, PPV and NPV are clamped into
/// `[PROBABILITY_EPSILON, 1 - PROBABILITY_EPSILON]` before use.
pub const PROBABILITY_EPSILON: f64 = 1e-9;

/// Absolute tolerance when deciding that a base rate is balanced
pub const SHORTCUT_ABS_TOLERANCE: f64 = 1e-8;

/// Relative tolerance when deciding that two context values are equal
///
/// Spreads are compared with this tolerance alone, so the decision does not
/// depend on their units.
pub const SHORTCUT_REL_TOLERANCE: f64 = 1e-8;

/// Smallest AUC accepted by the AUC to d conversion
pub const AUC_LOWER: f64 = 0.5;

/// Largest AUC accepted by the AUC to d conversion
pub const AUC_UPPER: f64 = 1.0;

/// Group share of a balanced two-group design
pub const BALANCED_PROPORTION: f64 = 0.5;
