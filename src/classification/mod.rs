//! Classification metrics
//!
//! Scores categorical predictions against ground truth:
//! - Accuracy
//! - Confusion matrix over the label union of both sequences
//! - Per-class precision, recall, F1 with macro, micro, and weighted averaging
//! - sklearn-style classification reports

mod average;
mod confusion;
mod metrics;
mod report;


// Re-export all public types and functions
pub use average::Average;
pub use confusion::ConfusionMatrix;
pub use metrics::{ClassMetrics, PrecisionRecallF1};
pub use report::{accuracy, classification_report, confusion_matrix, precision_recall_f1};
