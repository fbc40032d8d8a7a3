//! Property tests for the metrics engine
//!
//! Ensures the metric functions satisfy their mathematical invariants:
//! - Metrics bounded to their documented ranges
//! - No NaN or Infinity values on valid input
//! - Confusion matrix totals and row sums
//! - Structural errors on invalid input shapes

use medir::{
    accuracy, confusion_matrix, mean_absolute_error, mean_squared_error, precision_recall_f1,
    r2_score, root_mean_squared_error, silhouette_samples, silhouette_score, DistanceMetric,
    MetricsError,
};
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::HashMap;

// =============================================================================
// Strategy Helpers
// =============================================================================

/// Generate a vector of class labels in range [0, n_classes)
fn class_labels(
    n_classes: usize,
    len: impl Into<proptest::collection::SizeRange>,
) -> impl Strategy<Value = Vec<usize>> {
    vec(0..n_classes, len)
}

/// Generate a prediction/truth label pair of equal length
fn label_pair(
    n_classes: usize,
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    len.prop_flat_map(move |l| (vec(0..n_classes, l), vec(0..n_classes, l)))
}

/// Generate a truth/prediction numeric pair of equal length
fn numeric_pair(len: std::ops::Range<usize>) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    len.prop_flat_map(|l| (vec(-1e6..1e6f64, l), vec(-1e6..1e6f64, l)))
}

/// Two displaced 2-D blobs with per-point jitter, labeled 0 and 1
fn two_blobs() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<usize>)> {
    (3usize..10, 3usize..10).prop_flat_map(|(n0, n1)| {
        let jitter = || vec(-0.5..0.5f64, 2);
        (vec(jitter(), n0), vec(jitter(), n1)).prop_map(|(blob0, blob1)| {
            let mut points = Vec::new();
            let mut labels = Vec::new();
            for p in blob0 {
                points.push(vec![p[0], p[1]]);
                labels.push(0);
            }
            for p in blob1 {
                points.push(vec![10.0 + p[0], 10.0 + p[1]]);
                labels.push(1);
            }
            (points, labels)
        })
    })
}

// =============================================================================
// Classification Metric Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn prop_accuracy_bounded(
        (y_true, y_pred) in label_pair(5, 1..100)
    ) {
        let acc = accuracy(&y_true, &y_pred).unwrap();

        prop_assert!(
            (0.0..=1.0).contains(&acc),
            "Accuracy {} not in [0, 1]",
            acc
        );
        prop_assert!(
            !acc.is_nan() && !acc.is_infinite(),
            "Accuracy {} is NaN or Inf",
            acc
        );
    }

    #[test]
    fn prop_accuracy_perfect_predictions(
        y in class_labels(5, 1..100)
    ) {
        let acc = accuracy(&y, &y).unwrap();
        prop_assert!(
            (acc - 1.0).abs() < 1e-12,
            "Perfect predictions should have accuracy 1.0, got {}",
            acc
        );
    }

    #[test]
    fn prop_confusion_matrix_total_is_sample_count(
        (y_true, y_pred) in label_pair(4, 1..80)
    ) {
        let cm = confusion_matrix(&y_true, &y_pred).unwrap();
        prop_assert_eq!(cm.total(), y_true.len());
    }

    #[test]
    fn prop_confusion_matrix_row_sums_match_class_counts(
        (y_true, y_pred) in label_pair(4, 1..80)
    ) {
        let cm = confusion_matrix(&y_true, &y_pred).unwrap();

        let mut counts: HashMap<usize, usize> = HashMap::new();
        for &label in &y_true {
            *counts.entry(label).or_insert(0) += 1;
        }

        // Every row sum is the y_true count of some distinct label;
        // prediction-only labels contribute empty rows.
        let mut row_sums: Vec<usize> = (0..cm.n_classes()).map(|c| cm.support(c)).collect();
        let mut class_counts: Vec<usize> = counts.values().copied().collect();
        class_counts.resize(cm.n_classes(), 0);
        row_sums.sort_unstable();
        class_counts.sort_unstable();
        prop_assert_eq!(row_sums, class_counts);
    }

    #[test]
    fn prop_precision_recall_f1_bounded(
        (y_true, y_pred) in label_pair(5, 1..100)
    ) {
        let prf = precision_recall_f1(&y_true, &y_pred).unwrap();

        for value in [prf.precision, prf.recall, prf.f1] {
            prop_assert!(
                (0.0..=1.0).contains(&value),
                "Metric value {} not in [0, 1]",
                value
            );
            prop_assert!(!value.is_nan());
        }
    }

    #[test]
    fn prop_length_mismatch_always_errors(
        left in 1usize..30,
        right in 1usize..30
    ) {
        prop_assume!(left != right);
        let y_true = vec![0usize; left];
        let y_pred = vec![0usize; right];

        prop_assert_eq!(
            accuracy(&y_true, &y_pred),
            Err(MetricsError::LengthMismatch { left, right })
        );
    }

    // -------------------------------------------------------------------------
    // Regression Metric Properties
    // -------------------------------------------------------------------------

    #[test]
    fn prop_regression_errors_nonnegative(
        (y_true, y_pred) in numeric_pair(1..100)
    ) {
        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        let rmse = root_mean_squared_error(&y_true, &y_pred).unwrap();
        let mae = mean_absolute_error(&y_true, &y_pred).unwrap();

        prop_assert!(mse >= 0.0 && !mse.is_nan());
        prop_assert!(rmse >= 0.0 && !rmse.is_nan());
        prop_assert!(mae >= 0.0 && !mae.is_nan());
    }

    #[test]
    fn prop_rmse_zero_on_identity(
        y in vec(-1e6..1e6f64, 1..100)
    ) {
        prop_assert_eq!(root_mean_squared_error(&y, &y).unwrap(), 0.0);
    }

    #[test]
    fn prop_r2_one_on_identity(
        y in vec(-1e6..1e6f64, 1..100)
    ) {
        // Holds for constant sequences too: SS_res == 0 is the trivial
        // perfect fit.
        prop_assert_eq!(r2_score(&y, &y).unwrap(), 1.0);
    }

    #[test]
    fn prop_r2_at_most_one(
        (y_true, y_pred) in numeric_pair(2..100)
    ) {
        let r2 = r2_score(&y_true, &y_pred).unwrap();
        prop_assert!(r2 <= 1.0 + 1e-9, "R² {} exceeds 1", r2);
        prop_assert!(!r2.is_nan());
    }
}

// =============================================================================
// Clustering Metric Property Tests (O(n²) per case, fewer runs)
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_silhouette_bounded(
        points in vec(vec(-100.0..100.0f64, 2..3), 4..30),
        seed in any::<u64>()
    ) {
        // Deterministic label assignment from the seed; need 2+ clusters.
        let labels: Vec<usize> = (0..points.len())
            .map(|i| ((seed >> (i % 32)) as usize ^ i) % 3)
            .collect();
        let distinct: std::collections::HashSet<usize> = labels.iter().copied().collect();
        prop_assume!(distinct.len() >= 2);

        let samples = silhouette_samples(&points, &labels, DistanceMetric::Euclidean).unwrap();
        for s in &samples {
            prop_assert!(
                (-1.0 - 1e-9..=1.0 + 1e-9).contains(s),
                "Sample silhouette {} out of [-1, 1]",
                s
            );
            prop_assert!(!s.is_nan());
        }

        let score = silhouette_score(&points, &labels).unwrap();
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&score));
    }

    #[test]
    fn prop_silhouette_separated_blobs_score_high(
        (points, labels) in two_blobs()
    ) {
        let score = silhouette_score(&points, &labels).unwrap();
        prop_assert!(
            score > 0.5,
            "Well-separated blobs should score > 0.5, got {}",
            score
        );
    }

    #[test]
    fn prop_silhouette_single_cluster_errors(
        points in vec(vec(-10.0..10.0f64, 2..3), 2..20)
    ) {
        let labels = vec![0usize; points.len()];
        prop_assert_eq!(
            silhouette_score(&points, &labels),
            Err(MetricsError::InsufficientClusters { found: 1 })
        );
    }
}
