//! Point distance functions for clustering metrics.

use serde::{Deserialize, Serialize};

/// Distance function applied between embedding points.
///
/// Silhouette aggregation is independent of the metric chosen here;
/// substituting one changes only the pairwise distances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// L2 (straight-line) distance
    #[default]
    Euclidean,
    /// L1 (city-block) distance
    Manhattan,
    /// 1 - cosine similarity
    Cosine,
}

impl DistanceMetric {
    /// Distance between two equal-length points.
    pub fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            DistanceMetric::Euclidean => euclidean(a, b),
            DistanceMetric::Manhattan => manhattan(a, b),
            DistanceMetric::Cosine => cosine(a, b),
        }
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

fn manhattan(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    // Cosine is undefined at zero magnitude: two zero vectors are at
    // distance 0, a zero vector against anything else at distance 1.
    if norm_a < f64::EPSILON || norm_b < f64::EPSILON {
        if norm_a < f64::EPSILON && norm_b < f64::EPSILON {
            return 0.0;
        }
        return 1.0;
    }

    1.0 - dot / (norm_a * norm_b)
}
