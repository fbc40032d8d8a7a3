//! Medir: model-evaluation metrics for classification, regression, and clustering.
//!
//! A pure, stateless scoring library: callers hand in already-materialized
//! prediction, truth, or embedding arrays and get back scalars or small
//! structured results. Nothing here trains or runs a model, performs I/O,
//! or keeps state between calls; every function is safe to invoke
//! concurrently on disjoint inputs.
//!
//! ## Architecture
//!
//! - `classification`: accuracy, confusion matrix, per-class and averaged
//!   precision/recall/F1, sklearn-style reports
//! - `regression`: MSE, RMSE, MAE, R²
//! - `clustering`: silhouette score with pluggable distance functions
//! - `encode` / `stats` / `distance`: label encoding, mean/variance, and
//!   point-distance utilities shared by the above
//!
//! Structurally invalid input (mismatched lengths, empty arrays, a single
//! cluster, ragged point dimensions) surfaces as a typed [`MetricsError`]
//! before any computation; numeric degeneracies with a documented
//! convention (zero-support classes, singleton clusters, zero-variance R²)
//! resolve to values instead.
//!
//! ## Example
//!
//! ```
//! use medir::{accuracy, precision_recall_f1, silhouette_score};
//!
//! let y_true = vec![0, 0, 1, 1, 2];
//! let y_pred = vec![0, 1, 1, 1, 2];
//!
//! let acc = accuracy(&y_true, &y_pred).unwrap();
//! assert_eq!(acc, 0.8);
//!
//! let prf = precision_recall_f1(&y_true, &y_pred).unwrap();
//! assert!(prf.f1 > 0.0 && prf.f1 <= 1.0);
//!
//! let points = vec![vec![0.0, 0.0], vec![0.1, 0.0], vec![5.0, 5.0], vec![5.1, 5.0]];
//! let score = silhouette_score(&points, &[0, 0, 1, 1]).unwrap();
//! assert!(score > 0.5);
//! ```

pub mod classification;
pub mod clustering;
pub mod distance;
pub mod encode;
pub mod error;
pub mod regression;
pub mod stats;

// Re-export the main types and functions
pub use classification::{
    accuracy, classification_report, confusion_matrix, precision_recall_f1, Average, ClassMetrics,
    ConfusionMatrix, PrecisionRecallF1,
};
pub use clustering::{silhouette_samples, silhouette_score, silhouette_score_with};
pub use distance::DistanceMetric;
pub use encode::LabelEncoder;
pub use error::{MetricsError, Result};
pub use regression::{
    mean_absolute_error, mean_squared_error, r2_score, root_mean_squared_error,
};
