//! Result types for a clustering run.

use crate::clustering::cluster_sizes;
use crate::strategy::DistanceStrategy;

/// Immutable snapshot of one Lloyd iteration.
///
/// `assignments[i]` indexes the center nearest to point `i` as of the
/// iteration that produced this snapshot. The centers are the ones computed
/// from those assignments, so they may have moved since.
#[derive(Clone, Debug, PartialEq)]
pub struct Clustering<T> {
    centers: Vec<T>,
    assignments: Vec<usize>,
}

impl<T> Clustering<T> {
    /// Create a snapshot from its parts.
    pub fn new(centers: Vec<T>, assignments: Vec<usize>) -> Self {
        Self {
            centers,
            assignments,
        }
    }

    /// Cluster centers; length k.
    #[inline]
    pub fn centers(&self) -> &[T] {
        &self.centers
    }

    /// Cluster index per point; length n.
    #[inline]
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    /// Number of clusters.
    #[inline]
    pub fn k(&self) -> usize {
        self.centers.len()
    }

    /// Member count of every cluster.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        cluster_sizes(&self.assignments, self.centers.len())
    }

    /// Sum over points of the distance to their assigned center.
    pub fn cost<D>(&self, points: &[T], distance: &D) -> f64
    where
        D: DistanceStrategy<T> + ?Sized,
    {
        points
            .iter()
            .zip(&self.assignments)
            .filter_map(|(p, &a)| self.centers.get(a).map(|c| distance.distance(p, c)))
            .sum()
    }

    /// Split into `(centers, assignments)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<usize>) {
        (self.centers, self.assignments)
    }
}

/// Final clustering plus how the run ended.
#[derive(Clone, Debug)]
pub struct ClusteringOutcome<T> {
    /// The last clustering computed.
    pub clustering: Clustering<T>,

    /// Iterations performed.
    ///
    /// Equals max_iterations when converged is false.
    pub iterations: usize,

    /// Whether every center moved by at most the tolerance in the last
    /// iteration.
    pub converged: bool,

    /// Assignment cost of the last iteration, measured against the centers
    /// the points were assigned to.
    pub cost: f64,
}

impl<T> ClusteringOutcome<T> {
    /// Drop the run metadata.
    pub fn into_clustering(self) -> Clustering<T> {
        self.clustering
    }
}
