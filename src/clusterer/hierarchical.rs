use crate::clusterer::{
    ClusterError, check_cluster_count,
    closest_pair::{fast_closest_pair, slow_closest_pair},
    types::Cluster,
};
use crate::county::County;

/// How the closest pair is located at each merge step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosestPairStrategy {
    /// Quadratic scan with canonical tie-break
    #[default]
    BruteForce,
    /// Divide and conquer over clusters re-sorted by horizontal center
    DivideAndConquer,
}

/// Agglomerative clustering: start from singletons and merge the two closest
/// centers until `num_clusters` remain.
pub fn hierarchical(counties: &[County], num_clusters: usize) -> Result<Vec<Cluster>, ClusterError> {
    hierarchical_with(counties, num_clusters, ClosestPairStrategy::BruteForce)
}

pub fn hierarchical_with(
    counties: &[County],
    num_clusters: usize,
    strategy: ClosestPairStrategy,
) -> Result<Vec<Cluster>, ClusterError> {
    check_cluster_count(num_clusters, counties.len())?;

    let singletons = counties.iter().map(Cluster::singleton).collect();
    let clusters = merge_down(singletons, num_clusters, strategy)?;

    tracing::info!(
        counties = counties.len(),
        clusters = clusters.len(),
        ?strategy,
        "hierarchical clustering finished"
    );

    Ok(clusters)
}

/// Merge closest pairs until at most `num_clusters` clusters remain.
///
/// The merged cluster takes the lower index of the pair and the higher one is
/// removed.
pub(crate) fn merge_down(
    mut clusters: Vec<Cluster>,
    num_clusters: usize,
    strategy: ClosestPairStrategy,
) -> Result<Vec<Cluster>, ClusterError> {
    while clusters.len() > num_clusters.max(1) {
        let pair = match strategy {
            ClosestPairStrategy::BruteForce => slow_closest_pair(&clusters)?,
            ClosestPairStrategy::DivideAndConquer => {
                clusters.sort_by(|a, b| a.horiz_center().total_cmp(&b.horiz_center()));
                fast_closest_pair(&clusters)?
            }
        };

        let second = clusters.remove(pair.second);
        let first = clusters.remove(pair.first);
        clusters.insert(pair.first, first.merge(second)?);

        tracing::trace!(
            distance = pair.distance,
            remaining = clusters.len(),
            "merged closest pair"
        );
    }

    Ok(clusters)
}
