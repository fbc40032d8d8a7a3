//! Classification entry points and sklearn-style report

use std::fmt::Debug;
use std::hash::Hash;

use super::average::Average;
use super::confusion::ConfusionMatrix;
use super::metrics::{ClassMetrics, PrecisionRecallF1};
use crate::encode::LabelEncoder;
use crate::error::{check_lengths, Result};

/// Fraction of positions where prediction equals ground truth.
///
/// # Arguments
/// * `y_true` - Ground truth class labels
/// * `y_pred` - Predicted class labels
///
/// # Errors
/// `LengthMismatch` if the sequences differ in length, `EmptyInput` if
/// they are empty.
///
/// # Example
/// ```
/// use medir::accuracy;
///
/// let y_true = vec![0, 0, 1, 1, 1, 0];
/// let y_pred = vec![0, 1, 1, 1, 0, 0];
/// assert!((accuracy(&y_true, &y_pred).unwrap() - 4.0 / 6.0).abs() < 1e-12);
/// ```
pub fn accuracy<L: Eq>(y_true: &[L], y_pred: &[L]) -> Result<f64> {
    check_lengths(y_true.len(), y_pred.len())?;

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();

    Ok(correct as f64 / y_true.len() as f64)
}

/// Compute the confusion matrix from ground truth and predictions.
///
/// # Arguments
/// * `y_true` - Ground truth class labels
/// * `y_pred` - Predicted class labels
///
/// # Returns
/// A matrix where element [i][j] counts samples of true class index i
/// predicted as class index j, indices in first-seen order over `y_true`
/// then `y_pred`.
///
/// # Errors
/// `LengthMismatch` / `EmptyInput` on structurally invalid input.
pub fn confusion_matrix<L: Eq + Hash + Clone>(y_true: &[L], y_pred: &[L]) -> Result<ConfusionMatrix> {
    ConfusionMatrix::from_labels(y_true, y_pred)
}

/// Macro-averaged precision, recall, and F1.
///
/// Unweighted mean of the per-class scores over all classes present in
/// either sequence. For per-class values or micro/weighted averaging, use
/// [`ClassMetrics`] directly.
///
/// # Errors
/// `LengthMismatch` / `EmptyInput` on structurally invalid input.
pub fn precision_recall_f1<L: Eq + Hash + Clone>(
    y_true: &[L],
    y_pred: &[L],
) -> Result<PrecisionRecallF1> {
    let metrics = ClassMetrics::from_labels(y_true, y_pred)?;

    Ok(PrecisionRecallF1 {
        precision: metrics.precision_avg(Average::Macro),
        recall: metrics.recall_avg(Average::Macro),
        f1: metrics.f1_avg(Average::Macro),
    })
}

/// Generate an sklearn-style classification report.
///
/// # Arguments
/// * `y_true` - Ground truth class labels
/// * `y_pred` - Predicted class labels
///
/// # Returns
/// A formatted string with per-class precision/recall/F1/support rows,
/// macro and weighted averages, and overall accuracy.
///
/// # Errors
/// `LengthMismatch` / `EmptyInput` on structurally invalid input.
pub fn classification_report<L: Eq + Hash + Clone + Debug>(
    y_true: &[L],
    y_pred: &[L],
) -> Result<String> {
    let cm = ConfusionMatrix::from_labels(y_true, y_pred)?;
    let encoder = LabelEncoder::fit_pair(y_true, y_pred);
    let metrics = ClassMetrics::from_confusion_matrix(&cm);

    let mut report = String::new();

    // Header
    report.push_str(&format!(
        "{:>12} {:>10} {:>10} {:>10} {:>10}\n",
        "", "precision", "recall", "f1-score", "support"
    ));
    report.push_str(&"-".repeat(54));
    report.push('\n');

    // Per-class metrics
    for class in 0..metrics.n_classes {
        report.push_str(&format!(
            "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
            format!("{:?}", encoder.classes()[class]),
            metrics.precision[class],
            metrics.recall[class],
            metrics.f1[class],
            metrics.support[class]
        ));
    }

    report.push_str(&"-".repeat(54));
    report.push('\n');

    // Averages
    let total_support: usize = metrics.support.iter().sum();

    report.push_str(&format!(
        "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
        "macro avg",
        metrics.precision_avg(Average::Macro),
        metrics.recall_avg(Average::Macro),
        metrics.f1_avg(Average::Macro),
        total_support
    ));

    report.push_str(&format!(
        "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
        "weighted avg",
        metrics.precision_avg(Average::Weighted),
        metrics.recall_avg(Average::Weighted),
        metrics.f1_avg(Average::Weighted),
        total_support
    ));

    report.push_str(&format!("\nAccuracy: {:.4}\n", cm.accuracy()));

    Ok(report)
}
