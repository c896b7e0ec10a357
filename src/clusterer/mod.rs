mod centroid;
mod closest_pair;
mod distance;
mod distortion;
mod error;
mod hierarchical;
mod kmeans;
mod random;
mod sequential;
mod types;


pub use closest_pair::{ClosestPair, closest_pair_strip, fast_closest_pair, slow_closest_pair};
pub use distance::{euclidean_distance, squared_distance};
pub use distortion::{compute_distortion, county_lookup};
pub use error::ClusterError;
pub use hierarchical::{ClosestPairStrategy, hierarchical, hierarchical_with};
pub use kmeans::kmeans;
pub use random::random_clusters;
pub use sequential::sequential;
pub use types::Cluster;

pub(crate) use hierarchical::merge_down;

/// Rounds of k-means used when none are given
pub const DEFAULT_KMEANS_ITERATIONS: usize = 5;

/// Seed for generated benchmark clusters
pub const DEFAULT_SEED: u64 = 42;

/// Reject cluster counts outside `1..=available`
pub(crate) fn check_cluster_count(requested: usize, available: usize) -> Result<(), ClusterError> {
    if requested == 0 || requested > available {
        return Err(ClusterError::InvalidClusterCount {
            requested,
            available,
        });
    }
    Ok(())
}
