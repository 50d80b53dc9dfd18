//! Initial-center selection.
//!
//! The default policy samples `k` distinct indices uniformly without
//! replacement from an injected random source. Nothing here touches
//! process-wide randomness unless [`RandomCenterSelector::from_entropy`] is
//! asked for explicitly.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::{ClusterError, ClusterResult};

/// Picks the starting centers for a run.
pub trait InitialCenterSelector<T> {
    /// Choose `k` pairwise-distinct points (by index) from `points`.
    ///
    /// # Errors
    ///
    /// Returns `ClusterError::InsufficientData` if `points.len() < k`.
    fn select(&mut self, points: &[T], k: usize) -> ClusterResult<Vec<T>>;
}

impl<T, S> InitialCenterSelector<T> for &mut S
where
    S: InitialCenterSelector<T> + ?Sized,
{
    fn select(&mut self, points: &[T], k: usize) -> ClusterResult<Vec<T>> {
        (**self).select(points, k)
    }
}

/// Sample `k` distinct points from `points` using `rng`.
///
/// Indices are drawn uniformly from `0..n`; a draw that repeats an index
/// already taken is discarded and redrawn. Centers come back in the order
/// their indices were first drawn, so a given seed always yields the same
/// center list in the same order.
///
/// # Errors
///
/// Returns `ClusterError::InsufficientData` if `points.len() < k`. The check
/// runs before any draw.
///
/// # Example
///
/// ```
/// use lloyd_core::select_initial_centers;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let points = vec![1.0, 2.0, 3.0, 4.0];
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let centers = select_initial_centers(&points, 2, &mut rng).unwrap();
/// assert_eq!(centers.len(), 2);
/// ```
pub fn select_initial_centers<T, R>(points: &[T], k: usize, rng: &mut R) -> ClusterResult<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let n = points.len();
    if n < k {
        return Err(ClusterError::InsufficientData { points: n, k });
    }

    let mut seen = HashSet::with_capacity(k);
    let mut order = Vec::with_capacity(k);
    let mut draws = 0usize;

    while order.len() < k {
        let index = rng.gen_range(0..n);
        draws += 1;
        if seen.insert(index) {
            order.push(index);
        }
    }

    debug!(k, n, draws, "sampled initial center indices");

    Ok(order.into_iter().map(|i| points[i].clone()).collect())
}

/// Uniform random selector over an injected RNG.
#[derive(Clone, Debug)]
pub struct RandomCenterSelector<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> RandomCenterSelector<R> {
    /// Wrap an existing random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Give the random source back.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomCenterSelector<ChaCha8Rng> {
    /// Reproducible selector seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Selector seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<T: Clone, R: Rng> InitialCenterSelector<T> for RandomCenterSelector<R> {
    fn select(&mut self, points: &[T], k: usize) -> ClusterResult<Vec<T>> {
        select_initial_centers(points, k, &mut self.rng)
    }
}

/// Selector that hands back a caller-supplied center list.
///
/// Used to warm-start a run from the centers of a previous one.
#[derive(Clone, Debug)]
pub struct FixedCenterSelector<T> {
    centers: Vec<T>,
}

impl<T> FixedCenterSelector<T> {
    /// Use `centers` as the initial centers.
    pub fn new(centers: Vec<T>) -> Self {
        Self { centers }
    }
}

impl<T: Clone> InitialCenterSelector<T> for FixedCenterSelector<T> {
    fn select(&mut self, points: &[T], k: usize) -> ClusterResult<Vec<T>> {
        if points.len() < k {
            return Err(ClusterError::InsufficientData {
                points: points.len(),
                k,
            });
        }
        if self.centers.len() != k {
            return Err(ClusterError::CenterCountMismatch {
                expected: k,
                actual: self.centers.len(),
            });
        }
        Ok(self.centers.clone())
    }
}
