use crate::clusterer::{ClusterError, check_cluster_count, types::Cluster};
use crate::county::County;

/// Split the counties into `num_clusters` contiguous runs in input order.
///
/// County `i` of `n` lands in run `i * num_clusters / n`, so the result always
/// has exactly `num_clusters` clusters. Useful as a baseline for distortion.
pub fn sequential(counties: &[County], num_clusters: usize) -> Result<Vec<Cluster>, ClusterError> {
    check_cluster_count(num_clusters, counties.len())?;

    let n = counties.len();
    let mut clusters: Vec<Cluster> = Vec::with_capacity(num_clusters);

    for (idx, county) in counties.iter().enumerate() {
        let run = idx * num_clusters / n;
        let singleton = Cluster::singleton(county);

        if run < clusters.len() {
            if let Some(last) = clusters.pop() {
                clusters.push(last.merge(singleton)?);
            }
        } else {
            clusters.push(singleton);
        }
    }

    Ok(clusters)
}
