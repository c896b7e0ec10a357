use crate::clusterer::{ClusterError, types::Cluster};
use crate::county::County;
use std::collections::HashMap;

/// Index a county table by FIPS code
pub fn county_lookup(counties: &[County]) -> HashMap<&str, &County> {
    counties.iter().map(|c| (c.fips.as_str(), c)).collect()
}

/// Total population-weighted squared distance from every county to the center
/// of its cluster.
///
/// Fails if a cluster names a county missing from `counties`.
pub fn compute_distortion(clusters: &[Cluster], counties: &[County]) -> Result<f64, ClusterError> {
    let lookup = county_lookup(counties);
    clusters.iter().map(|c| c.cluster_error(&lookup)).sum()
}
