use crate::clusterer::{
    ClusterError, check_cluster_count, distance::euclidean_distance, types::Cluster,
};
use crate::county::County;
use std::cmp::Reverse;

/// Fixed-budget k-means over counties.
///
/// Centers are seeded on the `num_clusters` most populous counties (ties keep
/// input order) and refined for exactly `num_iterations` rounds. Slot `i` of
/// the result always belongs to the `i`-th seed. With zero rounds the seed
/// singletons are returned as they are.
pub fn kmeans(
    counties: &[County],
    num_clusters: usize,
    num_iterations: usize,
) -> Result<Vec<Cluster>, ClusterError> {
    check_cluster_count(num_clusters, counties.len())?;

    // 1. Seed centers on the largest populations
    let mut by_population: Vec<&County> = counties.iter().collect();
    by_population.sort_by_key(|c| Reverse(c.population));

    let mut clusters: Vec<Cluster> = by_population[..num_clusters]
        .iter()
        .map(|&c| Cluster::singleton(c))
        .collect();

    for round in 0..num_iterations {
        // 2. Assign each county to its nearest center
        let mut members: Vec<Vec<&County>> = vec![Vec::new(); num_clusters];
        for county in counties {
            members[nearest_center(&clusters, county.position())].push(county);
        }

        // 3. Recompute centers; empty slots stay where they were
        clusters = clusters
            .iter()
            .zip(members.iter())
            .map(|(previous, assigned)| Cluster::from_members(assigned, previous.center()))
            .collect();

        let empty = clusters.iter().filter(|c| c.is_empty()).count();
        if empty > 0 {
            tracing::warn!(round = round + 1, empty, "k-means slots received no counties");
        }
        tracing::debug!(
            round = round + 1,
            error = clusters.iter().map(Cluster::error).sum::<f64>(),
            "k-means round complete"
        );
    }

    tracing::info!(
        counties = counties.len(),
        clusters = num_clusters,
        iterations = num_iterations,
        "k-means clustering finished"
    );

    Ok(clusters)
}

/// Index of the closest center; the lowest index wins ties
fn nearest_center(clusters: &[Cluster], point: (f64, f64)) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;

    for (idx, cluster) in clusters.iter().enumerate() {
        let distance = euclidean_distance(point, cluster.center());
        if distance < best_distance {
            best = idx;
            best_distance = distance;
        }
    }

    best
}
