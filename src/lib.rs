// Public API exports
pub mod clusterer;
pub mod county;
pub mod experiment;

// Re-export main types for convenience
pub use county::{County, CountyId, dataset_file, load_county_table, parse_county_table};

pub use clusterer::{
    ClosestPair, ClosestPairStrategy, Cluster, ClusterError, DEFAULT_KMEANS_ITERATIONS,
    compute_distortion, fast_closest_pair, hierarchical, hierarchical_with, kmeans,
    random_clusters, sequential, slow_closest_pair,
};

pub use experiment::{
    DistortionPoint, DistortionSweep, ExperimentReport, ExperimentResults, PairTiming,
    time_closest_pair,
};
