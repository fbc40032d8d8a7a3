//! Label encoding shared by classification and clustering metrics.

use std::collections::HashMap;
use std::hash::Hash;

/// Dense label encoder.
///
/// Maps arbitrary `Eq + Hash` labels (integers, strings, ...) to indices
/// `0..k-1` in first-seen order. Built once per metric call; the mapping is
/// bijective, so an index can be decoded back through
/// [`classes`](Self::classes).
#[derive(Debug, Clone)]
pub struct LabelEncoder<L> {
    classes: Vec<L>,
    index: HashMap<L, usize>,
}

impl<L: Eq + Hash + Clone> LabelEncoder<L> {
    /// Build an encoder over the union of ground truth and predictions.
    ///
    /// Indices follow first appearance in `y_true`, then `y_pred`. Labels
    /// seen only in predictions still receive an index, so both
    /// confusion-matrix axes share one ordering.
    pub fn fit_pair(y_true: &[L], y_pred: &[L]) -> Self {
        let mut encoder = Self::empty();
        for label in y_true.iter().chain(y_pred.iter()) {
            encoder.intern(label);
        }
        encoder
    }

    /// Build an encoder over a single sequence (e.g. cluster assignments).
    pub fn fit(labels: &[L]) -> Self {
        let mut encoder = Self::empty();
        for label in labels {
            encoder.intern(label);
        }
        encoder
    }

    fn empty() -> Self {
        Self {
            classes: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn intern(&mut self, label: &L) -> usize {
        if let Some(&i) = self.index.get(label) {
            return i;
        }
        let i = self.classes.len();
        self.classes.push(label.clone());
        self.index.insert(label.clone(), i);
        i
    }

    /// Encode a sequence into dense indices.
    ///
    /// # Panics
    /// Panics on a label that was not seen during fitting.
    pub fn encode(&self, labels: &[L]) -> Vec<usize> {
        labels.iter().map(|label| self.index[label]).collect()
    }

    /// Number of distinct classes.
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Class labels in index order.
    pub fn classes(&self) -> &[L] {
        &self.classes
    }
}
