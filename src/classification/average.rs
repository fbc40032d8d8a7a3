//! Averaging strategies for multi-class metrics

use serde::{Deserialize, Serialize};

/// Averaging strategy for multi-class metrics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Average {
    /// Calculate metrics for each class, return their unweighted mean
    #[default]
    Macro,
    /// Calculate metrics globally from total TP, FP, FN counts
    Micro,
    /// Weighted mean by support (number of true instances per class)
    Weighted,
}
