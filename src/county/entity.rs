use super::CountyId;
use serde::{Deserialize, Serialize};

/// One row of a county table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct County {
    /// FIPS code, unique within a table
    pub fips: CountyId,
    /// Horizontal position on the map projection
    pub x: f64,
    /// Vertical position on the map projection
    pub y: f64,
    /// Resident population, used as the clustering weight
    pub population: u64,
    /// Lifetime cancer risk from air toxics
    pub risk: f64,
}

impl County {
    pub fn new(fips: impl Into<CountyId>, x: f64, y: f64, population: u64, risk: f64) -> Self {
        Self {
            fips: fips.into(),
            x,
            y,
            population,
            risk,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
