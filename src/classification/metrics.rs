//! Per-class and averaged classification metrics

use serde::{Deserialize, Serialize};
use std::hash::Hash;

use super::average::Average;
use super::confusion::ConfusionMatrix;
use crate::error::Result;
use crate::stats::mean;

/// Macro-averaged precision / recall / F1 triple.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrecisionRecallF1 {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Per-class classification metrics with averaging accessors.
///
/// A class with no positive predictions has precision 0; a class with no
/// true instances has recall 0; F1 is 0 when both are 0. These are defined
/// values, not errors.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// Per-class precision
    pub precision: Vec<f64>,
    /// Per-class recall
    pub recall: Vec<f64>,
    /// Per-class F1 score
    pub f1: Vec<f64>,
    /// Per-class support (count of true instances)
    pub support: Vec<usize>,
    /// Number of classes
    pub n_classes: usize,
    /// Micro average, shared by precision/recall/F1: with every sample
    /// assigned exactly one class, total FP equals total FN, so the three
    /// micro scores all reduce to diagonal / total.
    micro: f64,
}

impl ClassMetrics {
    /// Compute metrics from a confusion matrix
    pub fn from_confusion_matrix(cm: &ConfusionMatrix) -> Self {
        let n_classes = cm.n_classes();
        let mut precision = Vec::with_capacity(n_classes);
        let mut recall = Vec::with_capacity(n_classes);
        let mut f1 = Vec::with_capacity(n_classes);
        let mut support = Vec::with_capacity(n_classes);

        for class in 0..n_classes {
            let tp = cm.true_positives(class) as f64;
            let fp = cm.false_positives(class) as f64;
            let fn_ = cm.false_negatives(class) as f64;

            let p = if tp + fp > 0.0 { tp / (tp + fp) } else { 0.0 };
            let r = if tp + fn_ > 0.0 { tp / (tp + fn_) } else { 0.0 };
            let f = if p + r > 0.0 {
                2.0 * p * r / (p + r)
            } else {
                0.0
            };

            precision.push(p);
            recall.push(r);
            f1.push(f);
            support.push(cm.support(class));
        }

        Self {
            precision,
            recall,
            f1,
            support,
            n_classes,
            micro: cm.accuracy(),
        }
    }

    /// Compute from ground truth and predictions
    ///
    /// # Errors
    /// `LengthMismatch` / `EmptyInput` on structurally invalid input.
    pub fn from_labels<L: Eq + Hash + Clone>(y_true: &[L], y_pred: &[L]) -> Result<Self> {
        let cm = ConfusionMatrix::from_labels(y_true, y_pred)?;
        Ok(Self::from_confusion_matrix(&cm))
    }

    /// Averaged precision
    pub fn precision_avg(&self, average: Average) -> f64 {
        self.average_metric(&self.precision, average)
    }

    /// Averaged recall
    pub fn recall_avg(&self, average: Average) -> f64 {
        self.average_metric(&self.recall, average)
    }

    /// Averaged F1
    pub fn f1_avg(&self, average: Average) -> f64 {
        self.average_metric(&self.f1, average)
    }

    fn average_metric(&self, values: &[f64], average: Average) -> f64 {
        match average {
            Average::Macro => mean(values),
            Average::Micro => self.micro,
            Average::Weighted => {
                let total_support: usize = self.support.iter().sum();
                if total_support == 0 {
                    return 0.0;
                }
                values
                    .iter()
                    .zip(self.support.iter())
                    .map(|(&v, &s)| v * s as f64)
                    .sum::<f64>()
                    / total_support as f64
            }
        }
    }
}
