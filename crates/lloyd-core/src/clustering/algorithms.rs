//! Per-iteration helpers for the Lloyd loop.

use tracing::warn;

use crate::config::EmptyClusterPolicy;
use crate::error::{ClusterError, ClusterResult};
use crate::strategy::DistanceStrategy;

/// Member count per cluster for an assignment vector.
pub fn cluster_sizes(assignments: &[usize], k: usize) -> Vec<usize> {
    let mut sizes = vec![0usize; k];
    for &a in assignments {
        if let Some(size) = sizes.get_mut(a) {
            *size += 1;
        }
    }
    sizes
}

/// Apply the empty-cluster policy to freshly updated centers.
///
/// Returns the number of empty clusters found.
pub fn resolve_empty_clusters<T: Clone>(
    new_centers: &mut [T],
    previous: &[T],
    assignments: &[usize],
    policy: EmptyClusterPolicy,
    iteration: usize,
) -> ClusterResult<usize> {
    let sizes = cluster_sizes(assignments, previous.len());
    let mut empty = 0;

    for (cluster, _) in sizes.iter().enumerate().filter(|(_, &size)| size == 0) {
        empty += 1;
        match policy {
            EmptyClusterPolicy::Fail => {
                return Err(ClusterError::EmptyCluster { cluster, iteration });
            }
            EmptyClusterPolicy::RetainPrevious => {
                warn!(cluster, iteration, "empty cluster, keeping previous center");
                if let (Some(slot), Some(old)) =
                    (new_centers.get_mut(cluster), previous.get(cluster))
                {
                    *slot = old.clone();
                }
            }
        }
    }

    Ok(empty)
}

/// Positional movement of every center between two iterations.
pub fn center_shifts<T, D>(old: &[T], new: &[T], distance: &D) -> Vec<f64>
where
    D: DistanceStrategy<T> + ?Sized,
{
    old.iter()
        .zip(new.iter())
        .map(|(o, n)| distance.distance(o, n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::EuclideanDistance;

    #[test]
    fn test_cluster_sizes() {
        assert_eq!(cluster_sizes(&[0, 2, 2, 0, 2], 4), vec![2, 0, 3, 0]);
    }

    #[test]
    fn test_retain_previous_restores_center() {
        let previous = vec![[1.0, 1.0], [5.0, 5.0]];
        let mut updated = vec![[2.0, 2.0], [0.0, 0.0]];

        let empty = resolve_empty_clusters(
            &mut updated,
            &previous,
            &[0, 0, 0],
            EmptyClusterPolicy::RetainPrevious,
            1,
        )
        .unwrap();

        assert_eq!(empty, 1);
        assert_eq!(updated, vec![[2.0, 2.0], [5.0, 5.0]]);
    }

    #[test]
    fn test_fail_policy_reports_cluster() {
        let previous = vec![1.0, 2.0, 3.0];
        let mut updated = previous.clone();

        let err = resolve_empty_clusters(
            &mut updated,
            &previous,
            &[0, 2],
            EmptyClusterPolicy::Fail,
            4,
        )
        .unwrap_err();

        assert_eq!(
            err,
            ClusterError::EmptyCluster {
                cluster: 1,
                iteration: 4
            }
        );
    }

    #[test]
    fn test_center_shifts_positional() {
        let old = vec![[0.0, 0.0], [10.0, 0.0]];
        let new = vec![[10.0, 0.0], [0.0, 0.0]];

        // Swapped centers count as moved even though the set is unchanged.
        let shifts = center_shifts(&old, &new, &EuclideanDistance);

        assert_eq!(shifts, vec![10.0, 10.0]);
    }
}
