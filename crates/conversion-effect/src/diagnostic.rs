//! Confusion matrix of a threshold classifier

use conversion_core::{utils, Error, Result};

/// Counts of a binary classifier's outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionMatrix {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl ConfusionMatrix {
    /// Create a confusion matrix from raw counts
    pub fn new(
        true_positives: usize,
        false_positives: usize,
        true_negatives: usize,
        false_negatives: usize,
    ) -> Self {
        Self {
            true_positives,
            false_positives,
            true_negatives,
            false_negatives,
        }
    }

    /// Classify two samples with a fixed threshold
    ///
    /// A score above `threshold` is called positive; a score at or below it
    /// is called negative.
    pub fn from_threshold(negatives: &[f64], positives: &[f64], threshold: f64) -> Result<Self> {
        utils::validate_group(negatives, 1, "negatives")?;
        utils::validate_group(positives, 1, "positives")?;
        if threshold.is_nan() {
            return Err(Error::InvalidParameter("Threshold must not be NaN".to_string()));
        }

        let true_positives = positives.iter().filter(|&&v| v > threshold).count();
        let true_negatives = negatives.iter().filter(|&&v| v <= threshold).count();

        Ok(Self {
            true_positives,
            false_negatives: positives.len() - true_positives,
            true_negatives,
            false_positives: negatives.len() - true_negatives,
        })
    }

    /// True positive rate, `TP / (TP + FN)`
    pub fn sensitivity(&self) -> Result<f64> {
        rate(self.true_positives, self.false_negatives, "sensitivity")
    }

    /// True negative rate, `TN / (TN + FP)`
    pub fn specificity(&self) -> Result<f64> {
        rate(self.true_negatives, self.false_positives, "specificity")
    }

    /// Positive predictive value, `TP / (TP + FP)`
    pub fn ppv(&self) -> Result<f64> {
        rate(self.true_positives, self.false_positives, "PPV")
    }

    /// Negative predictive value, `TN / (TN + FN)`
    pub fn npv(&self) -> Result<f64> {
        rate(self.true_negatives, self.false_negatives, "NPV")
    }

    /// Total number of classified observations
    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }
}

fn rate(hits: usize, misses: usize, name: &str) -> Result<f64> {
    let total = hits + misses;
    if total == 0 {
        return Err(Error::Computation(format!(
            "Cannot compute {name}: no observations in its denominator"
        )));
    }
    Ok(hits as f64 / total as f64)
}
