use super::County;
use anyhow::{Context, Result, bail};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// File name of the bundled table holding `num_counties` rows
pub fn dataset_file(num_counties: usize) -> Option<&'static str> {
    match num_counties {
        111 => Some("unifiedCancerData_111.csv"),
        290 => Some("unifiedCancerData_290.csv"),
        896 => Some("unifiedCancerData_896.csv"),
        3108 => Some("unifiedCancerData_3108.csv"),
        _ => None,
    }
}

/// Read and parse a county table from disk
pub fn load_county_table(path: impl AsRef<Path>) -> Result<Vec<County>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read county table: {}", path.display()))?;

    let counties = parse_county_table(&text)
        .with_context(|| format!("Failed to parse county table: {}", path.display()))?;

    tracing::debug!(path = %path.display(), counties = counties.len(), "loaded county table");
    Ok(counties)
}

/// Parse a county table with one `fips,x,y,population,risk` row per line.
///
/// Blank lines are skipped. FIPS codes must be unique.
pub fn parse_county_table(text: &str) -> Result<Vec<County>> {
    let mut counties = Vec::new();
    let mut seen = HashSet::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let county = parse_row(line).with_context(|| format!("Line {}: {}", idx + 1, line))?;
        if !seen.insert(county.fips.clone()) {
            bail!("Line {}: duplicate FIPS code {}", idx + 1, county.fips);
        }

        counties.push(county);
    }

    Ok(counties)
}

fn parse_row(line: &str) -> Result<County> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 5 {
        bail!("Expected 5 fields, found {}", fields.len());
    }

    let fips = fields[0];
    if fips.is_empty() {
        bail!("Empty FIPS code");
    }

    let x: f64 = fields[1]
        .parse()
        .with_context(|| format!("Invalid horizontal center: {}", fields[1]))?;
    let y: f64 = fields[2]
        .parse()
        .with_context(|| format!("Invalid vertical center: {}", fields[2]))?;
    if !x.is_finite() || !y.is_finite() {
        bail!("Non-finite position: ({}, {})", x, y);
    }

    let population: u64 = fields[3]
        .parse()
        .with_context(|| format!("Invalid population: {}", fields[3]))?;
    let risk: f64 = fields[4]
        .parse()
        .with_context(|| format!("Invalid risk: {}", fields[4]))?;

    Ok(County::new(fips, x, y, population, risk))
}
