use crate::clusterer::{
    ClosestPairStrategy, ClusterError, DEFAULT_KMEANS_ITERATIONS, compute_distortion,
    hierarchical, kmeans, merge_down,
};
use crate::county::County;
use serde::{Deserialize, Serialize};

/// Distortion of both algorithms at one cluster count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistortionPoint {
    pub num_clusters: usize,
    pub kmeans: f64,
    pub hierarchical: f64,
}

/// Compares k-means and hierarchical distortion over a range of cluster
/// counts
#[derive(Debug, Clone)]
pub struct DistortionSweep {
    min_clusters: usize,
    max_clusters: usize,
    iterations: usize,
}

impl DistortionSweep {
    /// Sweep `min_clusters..=max_clusters` with default k-means rounds
    pub fn new(min_clusters: usize, max_clusters: usize) -> Self {
        Self {
            min_clusters,
            max_clusters,
            iterations: DEFAULT_KMEANS_ITERATIONS,
        }
    }

    /// Set k-means rounds per cluster count
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Run both algorithms at every cluster count, in ascending order.
    ///
    /// Hierarchical clustering is run once down to the largest count and then
    /// merged further for each smaller one. The merge sequence is the same
    /// as a fresh run, so every point matches an independent call.
    pub fn run(&self, counties: &[County]) -> Result<Vec<DistortionPoint>, ClusterError> {
        if self.min_clusters == 0 || self.min_clusters > self.max_clusters {
            return Err(ClusterError::InvalidRange {
                min: self.min_clusters,
                max: self.max_clusters,
            });
        }

        let mut hierarchical_distortion = vec![0.0; self.max_clusters - self.min_clusters + 1];
        let mut clusters = hierarchical(counties, self.max_clusters)?;
        for k in (self.min_clusters..=self.max_clusters).rev() {
            clusters = merge_down(clusters, k, ClosestPairStrategy::BruteForce)?;
            hierarchical_distortion[k - self.min_clusters] = compute_distortion(&clusters, counties)?;
        }

        let mut points = Vec::with_capacity(hierarchical_distortion.len());
        for (k, &agglomerative) in (self.min_clusters..=self.max_clusters).zip(&hierarchical_distortion) {
            let clusters = kmeans(counties, k, self.iterations)?;
            let point = DistortionPoint {
                num_clusters: k,
                kmeans: compute_distortion(&clusters, counties)?,
                hierarchical: agglomerative,
            };

            tracing::debug!(
                clusters = k,
                kmeans = point.kmeans,
                hierarchical = point.hierarchical,
                "distortion measured"
            );
            points.push(point);
        }

        Ok(points)
    }
}
