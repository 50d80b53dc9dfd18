//! Tests for result shape, reference scenarios and generic point types.

use crate::clustering::{cluster, KMeans};
use crate::config::KMeansConfig;
use crate::error::ClusterError;
use crate::metrics::EuclideanDistance;
use crate::selector::RandomCenterSelector;
use crate::strategy::MeanUpdate;

use super::helpers::{blobs, has_center_near, two_triples, two_triples_means, uniform_cube};

#[test]
fn test_result_shape_invariants() {
    let points = uniform_cube(300, 11);

    for k in [1, 2, 7, 16] {
        let clustering = cluster(
            &points,
            k,
            EuclideanDistance,
            MeanUpdate,
            RandomCenterSelector::seeded(k as u64),
        )
        .unwrap();

        assert_eq!(clustering.centers().len(), k);
        assert_eq!(clustering.assignments().len(), points.len());
        assert!(clustering.assignments().iter().all(|&a| a < k));
    }

    println!("[VERIFIED] len(centers)==k, len(assignments)==n, assignments in [0,k)");
}

#[test]
fn test_two_triples_any_seed() {
    let points = two_triples();
    let means = two_triples_means();

    for seed in 0..64 {
        let outcome = KMeans::new(EuclideanDistance, MeanUpdate)
            .run(&points, 2, RandomCenterSelector::seeded(seed))
            .unwrap();
        let clustering = &outcome.clustering;

        assert!(outcome.converged, "seed {} did not converge", seed);
        for mean in &means {
            assert!(
                has_center_near(clustering.centers(), mean, 1e-4),
                "seed {}: no center near {:?} in {:?}",
                seed,
                mean,
                clustering.centers()
            );
        }

        let a = clustering.assignments();
        assert_eq!(a[0], a[1]);
        assert_eq!(a[1], a[2]);
        assert_eq!(a[3], a[4]);
        assert_eq!(a[4], a[5]);
        assert_ne!(a[0], a[3]);
        assert_eq!(clustering.cluster_sizes(), vec![3, 3]);
    }

    println!("[VERIFIED] Two tight triples split 3/3 for every seed");
}

#[test]
fn test_too_few_points_fails() {
    let points = vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];

    let result = cluster(
        &points,
        5,
        EuclideanDistance,
        MeanUpdate,
        RandomCenterSelector::seeded(0),
    );

    assert_eq!(
        result.unwrap_err(),
        ClusterError::InsufficientData { points: 2, k: 5 }
    );

    println!("[VERIFIED] FAIL FAST: 2 points cannot form 5 clusters");
}

#[test]
fn test_distinct_blobs_recovered_by_best_restart() {
    let anchors = [[20.0, 20.0, 20.0], [128.0, 40.0, 200.0], [230.0, 230.0, 10.0]];
    let points = blobs(&anchors, 40, 5.0, 5);
    let engine = KMeans::new(EuclideanDistance, MeanUpdate);

    // A single random start can settle in a local optimum; keep the cheapest.
    let best = (0..32)
        .map(|seed| engine.run(&points, 3, RandomCenterSelector::seeded(seed)).unwrap())
        .min_by(|a, b| a.cost.total_cmp(&b.cost))
        .unwrap();

    println!(
        "[AFTER] iterations={}, converged={}, cost={:.3}",
        best.iterations, best.converged, best.cost
    );

    assert!(best.converged);
    for anchor in &anchors {
        assert!(has_center_near(best.clustering.centers(), anchor, 5.0));
    }
    assert_eq!(best.clustering.cluster_sizes(), vec![40, 40, 40]);
}

#[test]
fn test_same_seed_same_result() {
    let points = uniform_cube(200, 3);
    let engine = KMeans::new(EuclideanDistance, MeanUpdate);

    let a = engine.run(&points, 6, RandomCenterSelector::seeded(17)).unwrap();
    let b = engine.run(&points, 6, RandomCenterSelector::seeded(17)).unwrap();

    assert_eq!(a.clustering, b.clustering);
    assert_eq!(a.iterations, b.iterations);
}

#[test]
fn test_parallel_assignment_matches_sequential() {
    let points = uniform_cube(2_000, 21);

    let sequential = KMeans::new(EuclideanDistance, MeanUpdate)
        .run(&points, 8, RandomCenterSelector::seeded(4))
        .unwrap();
    let parallel = KMeans::new(EuclideanDistance, MeanUpdate)
        .with_config(KMeansConfig::default().with_parallel_assignment(true))
        .run(&points, 8, RandomCenterSelector::seeded(4))
        .unwrap();

    assert_eq!(sequential.clustering, parallel.clustering);
    assert_eq!(sequential.iterations, parallel.iterations);

    println!("[VERIFIED] Parallel assignment reproduces the sequential run");
}

#[test]
fn test_closure_strategies_on_integers() {
    let points: Vec<i64> = vec![1, 2, 3, 100, 101, 102];
    let distance = |a: &i64, b: &i64| (a - b).abs() as f64;
    let integer_mean = |points: &[i64], assignments: &[usize], k: usize| -> Vec<i64> {
        let mut sums = vec![0i64; k];
        let mut counts = vec![0i64; k];
        for (p, &a) in points.iter().zip(assignments) {
            sums[a] += p;
            counts[a] += 1;
        }
        sums.iter()
            .zip(&counts)
            .map(|(s, c)| if *c > 0 { s / c } else { 0 })
            .collect()
    };

    let clustering = cluster(
        &points,
        2,
        distance,
        integer_mean,
        RandomCenterSelector::seeded(8),
    )
    .unwrap();

    let mut centers = clustering.centers().to_vec();
    centers.sort();
    assert_eq!(centers, vec![2, 101]);

    println!("[VERIFIED] Engine is generic over caller-defined point types");
}

#[test]
fn test_closest_center_through_engine() {
    let engine = KMeans::new(EuclideanDistance, MeanUpdate);
    let centers = vec![[255.0, 0.0, 0.0], [0.0, 0.0, 255.0]];

    assert_eq!(engine.closest_center(&[200.0, 10.0, 30.0], &centers).unwrap(), 0);
    assert_eq!(engine.closest_center(&[10.0, 10.0, 240.0], &centers).unwrap(), 1);
    assert_eq!(
        engine
            .assign(&[[250.0, 0.0, 0.0], [0.0, 5.0, 250.0]], &centers)
            .unwrap(),
        vec![0, 1]
    );
}
