use crate::clusterer::Cluster;
use crate::experiment::{DistortionPoint, PairTiming};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub version: String,
    pub created_at: String,
    pub generator: String,
    /// Path of the county table, if one was used
    pub dataset: Option<String>,
    pub results: ExperimentResults,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExperimentResults {
    Clustering {
        algorithm: String,
        num_clusters: usize,
        iterations: Option<usize>,
        distortion: f64,
        clusters: Vec<Cluster>,
    },
    Sweep {
        points: Vec<DistortionPoint>,
    },
    PairTiming {
        timings: Vec<PairTiming>,
    },
}

impl ExperimentReport {
    pub fn new(dataset: Option<String>, results: ExperimentResults) -> Self {
        Self {
            version: "1.0.0".to_string(),
            created_at: Utc::now().to_rfc3339(),
            generator: format!("county-clusters v{}", env!("CARGO_PKG_VERSION")),
            dataset,
            results,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize experiment report")
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;

        tracing::info!(path = %path.display(), "wrote experiment report");
        Ok(())
    }
}
