//! Types for effect size representation

use crate::log_odds::logodds_to_d;
use std::fmt;

/// Representations an effect size can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSizeType {
    /// Standardized mean difference (Cohen's d)
    StandardizedMeanDifference,
    /// Point-biserial correlation
    Correlation,
    /// Area under the ROC curve, P(X₂ > X₁)
    Auc,
    /// Natural log of a diagnostic odds ratio
    LogOddsRatio,
}

impl EffectSizeType {
    /// Get the name of the effect size type
    pub fn name(&self) -> &'static str {
        match self {
            Self::StandardizedMeanDifference => "Standardized Mean Difference",
            Self::Correlation => "Point-Biserial Correlation",
            Self::Auc => "AUC",
            Self::LogOddsRatio => "Log-Odds Ratio",
        }
    }

    /// Get the range of values this type can take
    pub fn typical_range(&self) -> (f64, f64) {
        match self {
            Self::StandardizedMeanDifference | Self::LogOddsRatio => {
                (f64::NEG_INFINITY, f64::INFINITY)
            }
            Self::Correlation => (-1.0, 1.0),
            Self::Auc => (0.0, 1.0),
        }
    }
}

/// An effect size measurement with magnitude and interpretation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSize {
    /// The effect size magnitude
    pub magnitude: f64,
    /// The representation the magnitude is expressed in
    pub effect_type: EffectSizeType,
    /// Interpretation of the magnitude
    pub interpretation: EffectSizeInterpretation,
    /// Sample sizes (group1, group2) when estimated from data
    pub sample_sizes: Option<(usize, usize)>,
}

impl EffectSize {
    /// Create a new effect size
    pub fn new(
        magnitude: f64,
        effect_type: EffectSizeType,
        sample_sizes: Option<(usize, usize)>,
    ) -> Self {
        let interpretation = EffectSizeInterpretation::from_magnitude(magnitude, effect_type);

        Self {
            magnitude,
            effect_type,
            interpretation,
            sample_sizes,
        }
    }

    /// Get the absolute magnitude
    pub fn abs_magnitude(&self) -> f64 {
        self.magnitude.abs()
    }

    /// Check if the effect size is practically significant
    pub fn is_practically_significant(&self) -> bool {
        matches!(
            self.interpretation,
            EffectSizeInterpretation::Medium | EffectSizeInterpretation::Large
        )
    }

    /// Check if the effect favours group 2
    pub fn favors_group2(&self) -> bool {
        match self.effect_type {
            EffectSizeType::Auc => self.magnitude > 0.5,
            _ => self.magnitude > 0.0,
        }
    }
}

impl fmt::Display for EffectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.3} ({})",
            self.effect_type.name(),
            self.magnitude,
            self.interpretation
        )
    }
}

/// Interpretation of effect size magnitude following Cohen's conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSizeInterpretation {
    /// Negligible effect (very small)
    Negligible,
    /// Small effect
    Small,
    /// Medium effect
    Medium,
    /// Large effect
    Large,
}

impl EffectSizeInterpretation {
    /// Get interpretation from magnitude based on effect size type
    pub fn from_magnitude(magnitude: f64, effect_type: EffectSizeType) -> Self {
        let abs_magnitude = magnitude.abs();

        match effect_type {
            EffectSizeType::StandardizedMeanDifference => {
                Self::bucket(abs_magnitude, [0.2, 0.5, 0.8])
            }
            EffectSizeType::Correlation => Self::bucket(abs_magnitude, [0.1, 0.3, 0.5]),
            // Distance from chance
            EffectSizeType::Auc => Self::bucket((magnitude - 0.5).abs(), [0.06, 0.14, 0.21]),
            // Read through the d-equivalent so both scales agree
            EffectSizeType::LogOddsRatio => {
                Self::bucket(logodds_to_d(abs_magnitude), [0.2, 0.5, 0.8])
            }
        }
    }

    fn bucket(value: f64, [small, medium, large]: [f64; 3]) -> Self {
        if value < small {
            Self::Negligible
        } else if value < medium {
            Self::Small
        } else if value < large {
            Self::Medium
        } else {
            Self::Large
        }
    }
}

impl fmt::Display for EffectSizeInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        write!(f, "{}", s)
    }
}
