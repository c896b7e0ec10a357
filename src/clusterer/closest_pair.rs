use crate::clusterer::{ClusterError, types::Cluster};

/// Strip points compared against each point when scanning the strip by
/// vertical order
const STRIP_NEIGHBORS: usize = 7;

/// Two clusters with minimum center distance; `first < second`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPair {
    pub distance: f64,
    pub first: usize,
    pub second: usize,
}

impl ClosestPair {
    fn unset() -> Self {
        Self {
            distance: f64::INFINITY,
            first: 0,
            second: 0,
        }
    }

    fn between(clusters: &[Cluster], a: usize, b: usize) -> Self {
        Self {
            distance: clusters[a].distance(&clusters[b]),
            first: a.min(b),
            second: a.max(b),
        }
    }

    fn shifted(self, offset: usize) -> Self {
        Self {
            distance: self.distance,
            first: self.first + offset,
            second: self.second + offset,
        }
    }
}

/// Exhaustive scan over every pair `(i, j)` with `i < j`.
///
/// Pairs are visited in row-major order and only a strictly smaller distance
/// replaces the current best, so the first minimal pair wins ties.
pub fn slow_closest_pair(clusters: &[Cluster]) -> Result<ClosestPair, ClusterError> {
    if clusters.len() < 2 {
        return Err(ClusterError::TooFewClusters(clusters.len()));
    }
    Ok(brute_force(clusters))
}

/// Divide-and-conquer search.
///
/// `clusters` must be sorted by horizontal center. Among equally close pairs
/// the one returned is not specified.
pub fn fast_closest_pair(clusters: &[Cluster]) -> Result<ClosestPair, ClusterError> {
    if clusters.len() < 2 {
        return Err(ClusterError::TooFewClusters(clusters.len()));
    }
    Ok(divide_and_conquer(clusters))
}

/// Closest pair among clusters whose centers lie within `half_width` of the
/// vertical line at `horiz_center`.
///
/// Indices refer to `clusters`. The distance is infinite when fewer than two
/// clusters fall inside the strip.
pub fn closest_pair_strip(clusters: &[Cluster], horiz_center: f64, half_width: f64) -> ClosestPair {
    let mut strip: Vec<usize> = (0..clusters.len())
        .filter(|&i| (clusters[i].horiz_center() - horiz_center).abs() <= half_width)
        .collect();
    strip.sort_by(|&a, &b| clusters[a].vert_center().total_cmp(&clusters[b].vert_center()));

    let mut best = ClosestPair::unset();
    for u in 0..strip.len() {
        for v in (u + 1)..strip.len().min(u + 1 + STRIP_NEIGHBORS) {
            let candidate = ClosestPair::between(clusters, strip[u], strip[v]);
            if candidate.distance < best.distance {
                best = candidate;
            }
        }
    }
    best
}

fn brute_force(clusters: &[Cluster]) -> ClosestPair {
    let mut best = ClosestPair::between(clusters, 0, 1);
    for i in 0..clusters.len() {
        for j in (i + 1)..clusters.len() {
            let distance = clusters[i].distance(&clusters[j]);
            if distance < best.distance {
                best = ClosestPair {
                    distance,
                    first: i,
                    second: j,
                };
            }
        }
    }
    best
}

fn divide_and_conquer(clusters: &[Cluster]) -> ClosestPair {
    let n = clusters.len();
    if n <= 3 {
        return brute_force(clusters);
    }

    let mid = n / 2;
    let left = divide_and_conquer(&clusters[..mid]);
    let right = divide_and_conquer(&clusters[mid..]).shifted(mid);
    let best = if left.distance <= right.distance { left } else { right };

    let split = 0.5 * (clusters[mid - 1].horiz_center() + clusters[mid].horiz_center());
    let strip = closest_pair_strip(clusters, split, best.distance);

    if best.distance <= strip.distance { best } else { strip }
}
