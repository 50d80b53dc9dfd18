//! Edge case and boundary condition tests for the engine.

use crate::clustering::{cluster, KMeans};
use crate::config::{EmptyClusterPolicy, KMeansConfig};
use crate::error::ClusterError;
use crate::metrics::EuclideanDistance;
use crate::selector::{FixedCenterSelector, RandomCenterSelector};
use crate::strategy::MeanUpdate;

#[test]
fn test_empty_cluster_retains_previous_center() {
    let points = vec![[0.0], [1.0], [2.0]];
    let selector = FixedCenterSelector::new(vec![[1.0], [1000.0]]);

    let outcome = KMeans::new(EuclideanDistance, MeanUpdate)
        .run(&points, 2, selector)
        .unwrap();

    // MeanUpdate yields [0.0] for the empty cluster; the policy restores it.
    assert_eq!(outcome.clustering.centers(), &[[1.0], [1000.0]]);
    assert_eq!(outcome.clustering.assignments(), &[0, 0, 0]);
    assert_eq!(outcome.clustering.cluster_sizes(), vec![3, 0]);
    assert!(outcome.converged);

    println!("[VERIFIED] Empty cluster keeps its previous center");
}

#[test]
fn test_empty_cluster_fail_policy() {
    let points = vec![[0.0], [1.0], [2.0]];
    let selector = FixedCenterSelector::new(vec![[1.0], [1000.0]]);
    let config = KMeansConfig::default().with_empty_cluster(EmptyClusterPolicy::Fail);

    let err = KMeans::new(EuclideanDistance, MeanUpdate)
        .with_config(config)
        .run(&points, 2, selector)
        .unwrap_err();

    assert_eq!(
        err,
        ClusterError::EmptyCluster {
            cluster: 1,
            iteration: 1
        }
    );

    println!("[VERIFIED] FAIL FAST: empty cluster aborts under Fail policy: {}", err);
}

#[test]
fn test_identical_points_tie_to_first_center() {
    let points = vec![[7.0, 7.0, 7.0]; 5];

    let outcome = KMeans::new(EuclideanDistance, MeanUpdate)
        .run(&points, 2, RandomCenterSelector::seeded(0))
        .unwrap();

    assert!(outcome.converged);
    assert_eq!(outcome.iterations, 1);
    assert_eq!(outcome.clustering.assignments(), &[0, 0, 0, 0, 0]);
    assert_eq!(outcome.clustering.cluster_sizes(), vec![5, 0]);
    assert!(outcome.cost.abs() < f64::EPSILON);
}

#[test]
fn test_single_point_single_cluster() {
    let points = vec![vec![0.25, 0.5, 0.75]];

    let clustering = cluster(
        &points,
        1,
        EuclideanDistance,
        MeanUpdate,
        RandomCenterSelector::seeded(1),
    )
    .unwrap();

    assert_eq!(clustering.centers(), &[vec![0.25, 0.5, 0.75]]);
    assert_eq!(clustering.assignments(), &[0]);
}

#[test]
fn test_k_equals_n() {
    let points = vec![[0.0, 0.0], [5.0, 5.0], [9.0, 1.0]];

    let outcome = KMeans::new(EuclideanDistance, MeanUpdate)
        .run(&points, 3, RandomCenterSelector::seeded(12))
        .unwrap();

    assert!(outcome.converged);
    assert_eq!(outcome.clustering.cluster_sizes(), vec![1, 1, 1]);
    assert!(outcome.cost.abs() < f64::EPSILON);
}

#[test]
fn test_empty_input_fails() {
    let points: Vec<[f64; 3]> = Vec::new();

    let err = cluster(
        &points,
        1,
        EuclideanDistance,
        MeanUpdate,
        RandomCenterSelector::seeded(0),
    )
    .unwrap_err();

    assert_eq!(err, ClusterError::InsufficientData { points: 0, k: 1 });
}

#[test]
fn test_zero_k_rejected() {
    let points = vec![[1.0]];

    let err = cluster(
        &points,
        0,
        EuclideanDistance,
        MeanUpdate,
        RandomCenterSelector::seeded(0),
    )
    .unwrap_err();

    assert!(matches!(err, ClusterError::InvalidConfig(_)));
}

#[test]
fn test_invalid_config_rejected_at_run() {
    let points = vec![[1.0], [2.0]];
    let config = KMeansConfig {
        max_iterations: 0,
        ..KMeansConfig::default()
    };

    let err = KMeans::new(EuclideanDistance, MeanUpdate)
        .with_config(config)
        .run(&points, 1, RandomCenterSelector::seeded(0))
        .unwrap_err();

    assert!(err.to_string().contains("max_iterations"));
}

#[test]
fn test_outcome_clone_and_debug() {
    let points = vec![[1.0], [2.0]];
    let outcome = KMeans::new(EuclideanDistance, MeanUpdate)
        .run(&points, 1, RandomCenterSelector::seeded(0))
        .unwrap();

    let cloned = outcome.clone();
    assert_eq!(cloned.iterations, outcome.iterations);
    assert_eq!(cloned.clustering, outcome.clustering);

    let debug_str = format!("{:?}", outcome);
    assert!(debug_str.contains("ClusteringOutcome"));
}
