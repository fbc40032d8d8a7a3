//! Confusion matrix for multi-class classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

use crate::encode::LabelEncoder;
use crate::error::{check_lengths, Result};

/// Confusion matrix for multi-class classification
///
/// Element [i][j] counts samples whose true label maps to class index i and
/// whose predicted label maps to class index j. Class indices follow first
/// appearance in `y_true`, then `y_pred`, so both axes share one ordering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    /// The matrix data: matrix[true_index][predicted_index] = count
    matrix: Vec<Vec<usize>>,
    /// Number of classes
    n_classes: usize,
}

impl ConfusionMatrix {
    /// Create an empty confusion matrix with given number of classes
    pub fn new(n_classes: usize) -> Self {
        Self {
            matrix: vec![vec![0; n_classes]; n_classes],
            n_classes,
        }
    }

    /// Build from ground truth and predictions.
    ///
    /// The class set is the union of both sequences; a label appearing only
    /// in `y_pred` still gets a row and a column.
    ///
    /// # Errors
    /// `LengthMismatch` if the sequences differ in length, `EmptyInput` if
    /// they are empty.
    pub fn from_labels<L: Eq + Hash + Clone>(y_true: &[L], y_pred: &[L]) -> Result<Self> {
        check_lengths(y_true.len(), y_pred.len())?;

        let encoder = LabelEncoder::fit_pair(y_true, y_pred);
        let true_idx = encoder.encode(y_true);
        let pred_idx = encoder.encode(y_pred);

        Ok(Self::from_indices(&true_idx, &pred_idx, encoder.n_classes()))
    }

    /// Build from pre-encoded dense indices.
    ///
    /// Pairs with an index outside `0..n_classes` are ignored.
    pub fn from_indices(y_true: &[usize], y_pred: &[usize], n_classes: usize) -> Self {
        let mut cm = Self::new(n_classes);

        for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
            if t < n_classes && p < n_classes {
                cm.matrix[t][p] += 1;
            }
        }

        cm
    }

    /// Get the raw matrix
    pub fn matrix(&self) -> &Vec<Vec<usize>> {
        &self.matrix
    }

    /// Get number of classes
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Get element at [true_index][predicted_index]
    pub fn get(&self, true_index: usize, predicted_index: usize) -> usize {
        self.matrix[true_index][predicted_index]
    }

    /// True positives for a class
    pub fn true_positives(&self, class: usize) -> usize {
        self.matrix[class][class]
    }

    /// False positives for a class (predicted as class but wasn't)
    pub fn false_positives(&self, class: usize) -> usize {
        (0..self.n_classes)
            .filter(|&i| i != class)
            .map(|i| self.matrix[i][class])
            .sum()
    }

    /// False negatives for a class (was class but predicted differently)
    pub fn false_negatives(&self, class: usize) -> usize {
        (0..self.n_classes)
            .filter(|&j| j != class)
            .map(|j| self.matrix[class][j])
            .sum()
    }

    /// True negatives for a class
    pub fn true_negatives(&self, class: usize) -> usize {
        self.total()
            - self.true_positives(class)
            - self.false_positives(class)
            - self.false_negatives(class)
    }

    /// Support (count of true instances) for a class; equals the row sum
    pub fn support(&self, class: usize) -> usize {
        self.matrix[class].iter().sum()
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    /// Fraction of samples on the diagonal, 0.0 for an all-zero matrix
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let correct: usize = (0..self.n_classes).map(|i| self.matrix[i][i]).sum();
        correct as f64 / total as f64
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        // Header
        write!(f, "      ")?;
        for j in 0..self.n_classes {
            write!(f, "Pred {j} ")?;
        }
        writeln!(f)?;

        // Rows
        for i in 0..self.n_classes {
            write!(f, "True {i}")?;
            for j in 0..self.n_classes {
                write!(f, "{:>6} ", self.matrix[i][j])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
