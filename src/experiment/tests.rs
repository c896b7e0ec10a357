use super::*;
use crate::clusterer::{ClusterError, compute_distortion, hierarchical, kmeans};
use crate::county::County;

fn grid(side: usize) -> Vec<County> {
    let mut counties = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let population = 100 + ((row * 7 + col * 13) % 50) as u64;
            counties.push(County::new(
                format!("{:02}{:02}", row, col),
                col as f64 * 3.0 + (row % 2) as f64 * 0.5,
                row as f64 * 2.0,
                population,
                1e-5,
            ));
        }
    }
    counties
}

#[test]
fn test_sweep_matches_independent_runs() {
    let counties = grid(5);
    let points = DistortionSweep::new(3, 8).iterations(4).run(&counties).unwrap();

    assert_eq!(points.len(), 6);
    for point in &points {
        let k = point.num_clusters;
        let hier = compute_distortion(&hierarchical(&counties, k).unwrap(), &counties).unwrap();
        let km = compute_distortion(&kmeans(&counties, k, 4).unwrap(), &counties).unwrap();

        assert_eq!(point.hierarchical, hier, "hierarchical at k = {}", k);
        assert_eq!(point.kmeans, km, "kmeans at k = {}", k);
    }
}

#[test]
fn test_sweep_points_ascend() {
    let counties = grid(4);
    let points = DistortionSweep::new(2, 6).run(&counties).unwrap();

    let ks: Vec<usize> = points.iter().map(|p| p.num_clusters).collect();
    assert_eq!(ks, vec![2, 3, 4, 5, 6]);

    for pair in points.windows(2) {
        assert!(pair[0].hierarchical >= pair[1].hierarchical - 1e-9);
    }
}

#[test]
fn test_sweep_rejects_bad_range() {
    let counties = grid(3);

    assert_eq!(
        DistortionSweep::new(0, 4).run(&counties).unwrap_err(),
        ClusterError::InvalidRange { min: 0, max: 4 }
    );
    assert_eq!(
        DistortionSweep::new(5, 4).run(&counties).unwrap_err(),
        ClusterError::InvalidRange { min: 5, max: 4 }
    );
    assert_eq!(
        DistortionSweep::new(2, 10).run(&counties).unwrap_err(),
        ClusterError::InvalidClusterCount {
            requested: 10,
            available: 9
        }
    );
}

#[test]
fn test_time_closest_pair_sizes() {
    let timings = time_closest_pair(2, 40, 10, 7).unwrap();

    let sizes: Vec<usize> = timings.iter().map(|t| t.num_clusters).collect();
    assert_eq!(sizes, vec![2, 12, 22, 32]);
    assert!(timings.iter().all(|t| t.slow_secs >= 0.0 && t.fast_secs >= 0.0));
}

#[test]
fn test_time_closest_pair_rejects_bad_input() {
    assert_eq!(
        time_closest_pair(1, 10, 1, 0).unwrap_err(),
        ClusterError::InvalidRange { min: 1, max: 10 }
    );
    assert_eq!(
        time_closest_pair(2, 10, 0, 0).unwrap_err(),
        ClusterError::InvalidStep
    );
}

#[test]
fn test_report_json_shape() {
    let report = ExperimentReport::new(
        Some("resource_files/unifiedCancerData_111.csv".to_string()),
        ExperimentResults::Sweep {
            points: vec![DistortionPoint {
                num_clusters: 6,
                kmeans: 1.5,
                hierarchical: 2.5,
            }],
        },
    );

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["version"], "1.0.0");
    assert_eq!(json["results"]["kind"], "sweep");
    assert_eq!(json["results"]["points"][0]["num_clusters"], 6);
    assert_eq!(json["results"]["points"][0]["hierarchical"], 2.5);
    assert!(json["generator"].as_str().unwrap().starts_with("county-clusters v"));
    assert!(chrono::DateTime::parse_from_rfc3339(json["created_at"].as_str().unwrap()).is_ok());
}

#[test]
fn test_report_round_trips_clusters() {
    let counties = grid(3);
    let clusters = hierarchical(&counties, 2).unwrap();
    let distortion = compute_distortion(&clusters, &counties).unwrap();

    let report = ExperimentReport::new(
        None,
        ExperimentResults::Clustering {
            algorithm: "hierarchical".to_string(),
            num_clusters: 2,
            iterations: None,
            distortion,
            clusters: clusters.clone(),
        },
    );

    let parsed: ExperimentReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    match parsed.results {
        ExperimentResults::Clustering {
            clusters: restored, ..
        } => {
            assert_eq!(restored.len(), clusters.len());
            for (a, b) in restored.iter().zip(&clusters) {
                assert_eq!(a.counties(), b.counties());
                assert_eq!(a.total_population(), b.total_population());
                assert!((a.horiz_center() - b.horiz_center()).abs() < 1e-9);
                assert!((a.vert_center() - b.vert_center()).abs() < 1e-9);
            }
        }
        other => panic!("unexpected results: {:?}", other),
    }
}
