use crate::clusterer::{
    ClusterError,
    centroid::weighted_center,
    distance::{euclidean_distance, squared_distance},
};
use crate::county::{County, CountyId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// A group of counties summarized by its population-weighted center.
///
/// Clusters are plain owned values. [`Cluster::merge`] consumes both inputs,
/// so a county can only ever be held by one live cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// FIPS codes of member counties
    counties: BTreeSet<CountyId>,
    horiz_center: f64,
    vert_center: f64,
    total_population: u64,
    /// Population-weighted mean risk of the members
    averaged_risk: f64,
    /// Population-weighted sum of squared distances to the center
    error: f64,
}

impl Cluster {
    /// Wrap a single county
    pub fn singleton(county: &County) -> Self {
        Self {
            counties: BTreeSet::from([county.fips.clone()]),
            horiz_center: county.x,
            vert_center: county.y,
            total_population: county.population,
            averaged_risk: county.risk,
            error: 0.0,
        }
    }

    /// A cluster with no members positioned at the given center
    pub fn empty_at(horiz_center: f64, vert_center: f64) -> Self {
        Self {
            counties: BTreeSet::new(),
            horiz_center,
            vert_center,
            total_population: 0,
            averaged_risk: 0.0,
            error: 0.0,
        }
    }

    /// Build a cluster directly from its members.
    ///
    /// The error is computed exactly against the new center. With no members
    /// the cluster stays at `fallback`.
    pub fn from_members(members: &[&County], fallback: (f64, f64)) -> Self {
        let Some((center, averaged_risk)) = weighted_center(members) else {
            return Self::empty_at(fallback.0, fallback.1);
        };

        let error: f64 = members
            .iter()
            .map(|c| c.population as f64 * squared_distance(c.position(), center))
            .sum();

        Self {
            counties: members.iter().map(|c| c.fips.clone()).collect(),
            horiz_center: center.0,
            vert_center: center.1,
            total_population: members.iter().map(|c| c.population).sum(),
            averaged_risk,
            error,
        }
    }

    /// Merge two disjoint clusters into one.
    ///
    /// The error grows by `pa * pb / (pa + pb) * d^2`, where `d` is the
    /// distance between the two centers. If both sides carry zero population
    /// the center is weighted by member count and the error is unchanged.
    pub fn merge(self, other: Cluster) -> Result<Cluster, ClusterError> {
        let shared: Vec<CountyId> = self
            .counties
            .intersection(&other.counties)
            .cloned()
            .collect();
        if !shared.is_empty() {
            return Err(ClusterError::OverlappingMembers(shared));
        }

        let total_population = self.total_population + other.total_population;
        let gap = squared_distance(self.center(), other.center());

        let (wa, wb, ward) = if total_population > 0 {
            let pa = self.total_population as f64;
            let pb = other.total_population as f64;
            (pa, pb, pa * pb / (pa + pb) * gap)
        } else if self.counties.len() + other.counties.len() > 0 {
            (self.counties.len() as f64, other.counties.len() as f64, 0.0)
        } else {
            (1.0, 1.0, 0.0)
        };
        let weighted = |a: f64, b: f64| (wa * a + wb * b) / (wa + wb);

        let horiz_center = weighted(self.horiz_center, other.horiz_center);
        let vert_center = weighted(self.vert_center, other.vert_center);
        let averaged_risk = weighted(self.averaged_risk, other.averaged_risk);
        let error = self.error + other.error + ward;

        let mut counties = self.counties;
        counties.extend(other.counties);

        Ok(Cluster {
            counties,
            horiz_center,
            vert_center,
            total_population,
            averaged_risk,
            error,
        })
    }

    /// Euclidean distance between the two centers
    pub fn distance(&self, other: &Cluster) -> f64 {
        euclidean_distance(self.center(), other.center())
    }

    /// Recompute the error from scratch using a FIPS lookup
    pub fn cluster_error(&self, lookup: &HashMap<&str, &County>) -> Result<f64, ClusterError> {
        let mut total = 0.0;
        for fips in &self.counties {
            let county = lookup
                .get(fips.as_str())
                .ok_or_else(|| ClusterError::UnknownCounty(fips.clone()))?;
            total += county.population as f64 * squared_distance(county.position(), self.center());
        }
        Ok(total)
    }

    pub fn counties(&self) -> &BTreeSet<CountyId> {
        &self.counties
    }

    pub fn contains(&self, fips: &str) -> bool {
        self.counties.contains(fips)
    }

    pub fn len(&self) -> usize {
        self.counties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counties.is_empty()
    }

    pub fn horiz_center(&self) -> f64 {
        self.horiz_center
    }

    pub fn vert_center(&self) -> f64 {
        self.vert_center
    }

    pub fn center(&self) -> (f64, f64) {
        (self.horiz_center, self.vert_center)
    }

    pub fn total_population(&self) -> u64 {
        self.total_population
    }

    pub fn averaged_risk(&self) -> f64 {
        self.averaged_risk
    }

    /// Accumulated error, maintained incrementally across merges
    pub fn error(&self) -> f64 {
        self.error
    }
}
