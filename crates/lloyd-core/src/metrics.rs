//! Distance metrics for clustering.
//!
//! Provides Euclidean distance functions over `f64` coordinate slices and
//! the stock [`DistanceStrategy`] implementations built on them.

use crate::strategy::DistanceStrategy;

/// Compute squared Euclidean distance between two vectors.
///
/// Coordinates beyond the shorter slice are ignored.
#[inline]
pub fn euclidean_distance_squared(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Compute Euclidean distance between two vectors.
#[inline]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    euclidean_distance_squared(a, b).sqrt()
}

/// Euclidean (L2) distance for any point exposing its coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanDistance;

impl<T: AsRef<[f64]>> DistanceStrategy<T> for EuclideanDistance {
    #[inline]
    fn distance(&self, a: &T, b: &T) -> f64 {
        euclidean_distance(a.as_ref(), b.as_ref())
    }
}

/// Squared Euclidean distance.
///
/// Orders points the same way as [`EuclideanDistance`] without the sqrt, but
/// the convergence tolerance is then compared against squared movement.
#[derive(Clone, Copy, Debug, Default)]
pub struct SquaredEuclideanDistance;

impl<T: AsRef<[f64]>> DistanceStrategy<T> for SquaredEuclideanDistance {
    #[inline]
    fn distance(&self, a: &T, b: &T) -> f64 {
        euclidean_distance_squared(a.as_ref(), b.as_ref())
    }
}
