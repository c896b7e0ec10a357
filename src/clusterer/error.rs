use crate::county::CountyId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    #[error("Invalid cluster count: {requested} (must be between 1 and {available})")]
    InvalidClusterCount { requested: usize, available: usize },

    #[error("Closest pair search needs at least 2 clusters, got {0}")]
    TooFewClusters(usize),

    #[error("Cannot merge clusters sharing counties: {0:?}")]
    OverlappingMembers(Vec<CountyId>),

    #[error("County not found in table: {0}")]
    UnknownCounty(CountyId),

    #[error("Invalid cluster range: {min} to {max}")]
    InvalidRange { min: usize, max: usize },

    #[error("Step size must be positive")]
    InvalidStep,
}
