use crate::clusterer::{ClusterError, fast_closest_pair, random_clusters, slow_closest_pair};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Wall-clock cost of both closest-pair searches on one random set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairTiming {
    pub num_clusters: usize,
    pub slow_secs: f64,
    pub fast_secs: f64,
}

/// Time the quadratic and divide-and-conquer searches on random cluster sets
/// of size `min_clusters`, `min_clusters + step`, ... up to and including
/// `max_clusters`.
///
/// Each set is seeded from `seed` and its size. Sorting for the fast search
/// is not timed.
pub fn time_closest_pair(
    min_clusters: usize,
    max_clusters: usize,
    step: usize,
    seed: u64,
) -> Result<Vec<PairTiming>, ClusterError> {
    if min_clusters < 2 || min_clusters > max_clusters {
        return Err(ClusterError::InvalidRange {
            min: min_clusters,
            max: max_clusters,
        });
    }
    if step == 0 {
        return Err(ClusterError::InvalidStep);
    }

    let mut timings = Vec::new();
    for num_clusters in (min_clusters..=max_clusters).step_by(step) {
        let mut clusters = random_clusters(num_clusters, seed.wrapping_add(num_clusters as u64));

        let start = Instant::now();
        let slow = slow_closest_pair(&clusters)?;
        let slow_secs = start.elapsed().as_secs_f64();

        clusters.sort_by(|a, b| a.horiz_center().total_cmp(&b.horiz_center()));
        let start = Instant::now();
        let fast = fast_closest_pair(&clusters)?;
        let fast_secs = start.elapsed().as_secs_f64();

        if slow.distance != fast.distance {
            tracing::warn!(
                num_clusters,
                slow = slow.distance,
                fast = fast.distance,
                "closest pair searches disagree"
            );
        }

        timings.push(PairTiming {
            num_clusters,
            slow_secs,
            fast_secs,
        });
    }

    Ok(timings)
}
