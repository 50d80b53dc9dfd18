//! Helper functions for creating test data.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Three points near the origin and three near (100, 100, 100).
pub fn two_triples() -> Vec<[f64; 3]> {
    vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [100.0, 100.0, 100.0],
        [99.0, 100.0, 100.0],
        [100.0, 99.0, 100.0],
    ]
}

/// Means of the two triples in [`two_triples`].
pub fn two_triples_means() -> [[f64; 3]; 2] {
    [
        [1.0 / 3.0, 1.0 / 3.0, 0.0],
        [299.0 / 3.0, 299.0 / 3.0, 100.0],
    ]
}

/// `per_blob` points jittered by up to `spread` around each of `anchors`.
pub fn blobs(anchors: &[[f64; 3]], per_blob: usize, spread: f64, seed: u64) -> Vec<[f64; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    anchors
        .iter()
        .flat_map(|anchor| {
            (0..per_blob)
                .map(|_| {
                    let mut p = *anchor;
                    for x in p.iter_mut() {
                        *x += rng.gen_range(-spread..=spread);
                    }
                    p
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Uniform noise in the RGB cube.
pub fn uniform_cube(n: usize, seed: u64) -> Vec<[f64; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            [
                rng.gen_range(0.0..255.0),
                rng.gen_range(0.0..255.0),
                rng.gen_range(0.0..255.0),
            ]
        })
        .collect()
}

/// True when some center lies within `tol` of `target`.
pub fn has_center_near(centers: &[[f64; 3]], target: &[f64; 3], tol: f64) -> bool {
    centers
        .iter()
        .any(|c| c.iter().zip(target).all(|(a, b)| (a - b).abs() <= tol))
}
