//! Nearest-center query.

use rayon::prelude::*;

use crate::error::{ClusterError, ClusterResult};
use crate::strategy::DistanceStrategy;

/// Index of the center closest to `point`.
///
/// Scans every center. Ties go to the lowest index: a later center only wins
/// with a strictly smaller distance, which keeps assignments reproducible.
///
/// # Errors
///
/// Returns `ClusterError::NoCenters` if `centers` is empty.
///
/// # Example
///
/// ```
/// use lloyd_core::{closest_center, EuclideanDistance};
///
/// let centers = vec![[0.0, 0.0], [10.0, 0.0]];
/// let idx = closest_center(&[7.0, 1.0], &centers, &EuclideanDistance).unwrap();
/// assert_eq!(idx, 1);
/// ```
pub fn closest_center<T, D>(point: &T, centers: &[T], distance: &D) -> ClusterResult<usize>
where
    D: DistanceStrategy<T> + ?Sized,
{
    nearest(point, centers, distance).map(|(index, _)| index)
}

/// Closest center index together with its distance.
fn nearest<T, D>(point: &T, centers: &[T], distance: &D) -> ClusterResult<(usize, f64)>
where
    D: DistanceStrategy<T> + ?Sized,
{
    let (first, rest) = centers.split_first().ok_or(ClusterError::NoCenters)?;

    let mut best = 0;
    let mut min = distance.distance(point, first);

    for (i, center) in rest.iter().enumerate() {
        let d = distance.distance(point, center);
        if d < min {
            min = d;
            best = i + 1;
        }
    }

    Ok((best, min))
}

/// Assignment vector for `points` against `centers`, with its total cost.
pub(crate) fn assign_all<T, D>(
    points: &[T],
    centers: &[T],
    distance: &D,
) -> ClusterResult<(Vec<usize>, f64)>
where
    D: DistanceStrategy<T> + ?Sized,
{
    let mut assignments = Vec::with_capacity(points.len());
    let mut cost = 0.0;
    for point in points {
        let (index, d) = nearest(point, centers, distance)?;
        assignments.push(index);
        cost += d;
    }
    Ok((assignments, cost))
}

/// Parallel form of [`assign_all`]; yields the same assignment vector.
///
/// Each point only reads the shared center slice; results are gathered in
/// point order.
pub(crate) fn par_assign_all<T, D>(
    points: &[T],
    centers: &[T],
    distance: &D,
) -> ClusterResult<(Vec<usize>, f64)>
where
    T: Sync,
    D: DistanceStrategy<T> + Sync + ?Sized,
{
    let pairs: Vec<(usize, f64)> = points
        .par_iter()
        .map(|p| nearest(p, centers, distance))
        .collect::<ClusterResult<_>>()?;

    let cost: f64 = pairs.iter().map(|&(_, d)| d).sum();
    let assignments: Vec<usize> = pairs.into_iter().map(|(index, _)| index).collect();
    Ok((assignments, cost))
}

/// Nearest center for every point, in parallel when asked.
pub fn closest_centers<T, D>(
    points: &[T],
    centers: &[T],
    distance: &D,
    parallel: bool,
) -> ClusterResult<Vec<usize>>
where
    T: Sync,
    D: DistanceStrategy<T> + Sync + ?Sized,
{
    let (assignments, _) = if parallel {
        par_assign_all(points, centers, distance)?
    } else {
        assign_all(points, centers, distance)?
    };
    Ok(assignments)
}
