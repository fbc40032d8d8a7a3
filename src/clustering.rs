//! Clustering metrics: silhouette coefficient
//!
//! Assesses the internal quality of a cluster assignment without ground
//! truth. All pairwise distances are computed here, O(n²·d) for n points of
//! dimension d; the per-sample pass is a pure map over read-only arrays and
//! runs on rayon when the `parallel` feature is enabled.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::distance::DistanceMetric;
use crate::encode::LabelEncoder;
use crate::error::{check_lengths, MetricsError, Result};

/// Mean silhouette coefficient with Euclidean distance.
///
/// # Errors
/// `LengthMismatch` / `EmptyInput` on structurally invalid input,
/// `InsufficientClusters` with fewer than 2 distinct labels,
/// `InvalidDimension` on ragged point dimensionality.
pub fn silhouette_score(points: &[Vec<f64>], labels: &[usize]) -> Result<f64> {
    silhouette_score_with(points, labels, DistanceMetric::Euclidean)
}

/// Mean silhouette coefficient with a caller-chosen distance function.
///
/// The result lies in `[-1, 1]`: near 1 means samples sit well inside
/// their clusters, near -1 means they are closer to a neighboring cluster.
///
/// # Errors
/// Same conditions as [`silhouette_score`].
pub fn silhouette_score_with(
    points: &[Vec<f64>],
    labels: &[usize],
    metric: DistanceMetric,
) -> Result<f64> {
    let samples = silhouette_samples(points, labels, metric)?;
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Per-sample silhouette coefficients.
///
/// For sample `i`, `a(i)` is the mean distance to the rest of its own
/// cluster and `b(i)` the smallest mean distance to any other cluster;
/// `s(i) = (b - a) / max(a, b)`, 0 when both terms are 0. A sample alone
/// in its cluster scores 0 and stays in the aggregate.
///
/// # Errors
/// Same conditions as [`silhouette_score`].
pub fn silhouette_samples(
    points: &[Vec<f64>],
    labels: &[usize],
    metric: DistanceMetric,
) -> Result<Vec<f64>> {
    check_lengths(points.len(), labels.len())?;

    let dim = points[0].len();
    for (index, point) in points.iter().enumerate() {
        if point.len() != dim {
            return Err(MetricsError::InvalidDimension {
                expected: dim,
                found: point.len(),
                index,
            });
        }
    }

    // Cluster ids need not be contiguous; densify them first.
    let encoder = LabelEncoder::fit(labels);
    let n_clusters = encoder.n_classes();
    if n_clusters < 2 {
        return Err(MetricsError::InsufficientClusters { found: n_clusters });
    }
    let dense = encoder.encode(labels);

    // Index arena: members[c] holds the sample indices assigned to cluster c.
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); n_clusters];
    for (i, &c) in dense.iter().enumerate() {
        members[c].push(i);
    }

    #[cfg(feature = "parallel")]
    let samples = (0..points.len())
        .into_par_iter()
        .map(|i| silhouette_of(i, points, &dense, &members, metric))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let samples = (0..points.len())
        .map(|i| silhouette_of(i, points, &dense, &members, metric))
        .collect();

    Ok(samples)
}

fn silhouette_of(
    i: usize,
    points: &[Vec<f64>],
    dense: &[usize],
    members: &[Vec<usize>],
    metric: DistanceMetric,
) -> f64 {
    let own = dense[i];
    let own_members = &members[own];

    // Singleton cluster convention: the sample contributes 0.
    if own_members.len() == 1 {
        return 0.0;
    }

    let a = own_members
        .iter()
        .filter(|&&j| j != i)
        .map(|&j| metric.distance(&points[i], &points[j]))
        .sum::<f64>()
        / (own_members.len() - 1) as f64;

    let b = members
        .iter()
        .enumerate()
        .filter(|&(c, _)| c != own)
        .map(|(_, cluster)| {
            cluster
                .iter()
                .map(|&j| metric.distance(&points[i], &points[j]))
                .sum::<f64>()
                / cluster.len() as f64
        })
        .fold(f64::INFINITY, f64::min);

    if a == 0.0 && b == 0.0 {
        return 0.0;
    }

    (b - a) / a.max(b)
}
