//! Strategy contracts plugged into the engine.
//!
//! Distance and update strategies are trusted: the engine never checks that a
//! distance is symmetric or non-negative, nor that an update returns exactly
//! `k` centers. Plain closures satisfy both traits.

/// Scalar dissimilarity between two points of the same type.
///
/// Expected to be non-negative, symmetric and zero for equal points.
pub trait DistanceStrategy<T> {
    /// Distance between `a` and `b`.
    fn distance(&self, a: &T, b: &T) -> f64;
}

impl<T, F> DistanceStrategy<T> for F
where
    F: Fn(&T, &T) -> f64,
{
    #[inline]
    fn distance(&self, a: &T, b: &T) -> f64 {
        self(a, b)
    }
}

/// Center-update rule: one representative point per cluster.
pub trait UpdateStrategy<T> {
    /// Compute `k` centers from `points` and their `assignments`.
    ///
    /// `assignments[i]` is the cluster of `points[i]` and lies in `0..k`.
    /// The result must have length `k`; entry `j` is the center of cluster
    /// `j`. What an implementation returns for a cluster with no members is
    /// its own choice, since the engine applies its empty-cluster policy
    /// afterwards.
    fn update(&self, points: &[T], assignments: &[usize], k: usize) -> Vec<T>;
}

impl<T, F> UpdateStrategy<T> for F
where
    F: Fn(&[T], &[usize], usize) -> Vec<T>,
{
    #[inline]
    fn update(&self, points: &[T], assignments: &[usize], k: usize) -> Vec<T> {
        self(points, assignments, k)
    }
}

/// Points stored as a fixed run of `f64` coordinates.
pub trait Coordinates: Clone {
    /// A point of the same dimension with every coordinate zero.
    fn zeros_like(&self) -> Self;

    /// Coordinates of this point.
    fn coords(&self) -> &[f64];

    /// Mutable coordinates of this point.
    fn coords_mut(&mut self) -> &mut [f64];
}

impl Coordinates for Vec<f64> {
    fn zeros_like(&self) -> Self {
        vec![0.0; self.len()]
    }

    fn coords(&self) -> &[f64] {
        self
    }

    fn coords_mut(&mut self) -> &mut [f64] {
        self
    }
}

impl<const N: usize> Coordinates for [f64; N] {
    fn zeros_like(&self) -> Self {
        [0.0; N]
    }

    fn coords(&self) -> &[f64] {
        self
    }

    fn coords_mut(&mut self) -> &mut [f64] {
        self
    }
}

/// Arithmetic mean of the members of each cluster.
///
/// Clusters without members come back as the zero point. The dimension is
/// taken from the first point, so an empty point set yields an empty vector.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeanUpdate;

impl<T: Coordinates> UpdateStrategy<T> for MeanUpdate {
    fn update(&self, points: &[T], assignments: &[usize], k: usize) -> Vec<T> {
        let Some(first) = points.first() else {
            return Vec::new();
        };

        let mut sums = vec![first.zeros_like(); k];
        let mut counts = vec![0usize; k];

        for (point, &cluster) in points.iter().zip(assignments) {
            counts[cluster] += 1;
            for (sum, x) in sums[cluster].coords_mut().iter_mut().zip(point.coords()) {
                *sum += x;
            }
        }

        sums.into_iter()
            .zip(counts)
            .map(|(mut sum, count)| {
                if count > 0 {
                    for elem in sum.coords_mut() {
                        *elem /= count as f64;
                    }
                }
                sum
            })
            .collect()
    }
}
