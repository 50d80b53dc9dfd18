//! K-means engine.
//!
//! Provides [`KMeans`], the configurable Lloyd loop, and the [`cluster`]
//! shorthand that runs it with the default configuration.

use tracing::{debug, info, warn};

use crate::config::KMeansConfig;
use crate::error::{ClusterError, ClusterResult};
use crate::nearest::{assign_all, closest_center, closest_centers, par_assign_all};
use crate::observer::{IterationEvent, IterationObserver, NoopObserver};
use crate::selector::InitialCenterSelector;
use crate::strategy::{DistanceStrategy, UpdateStrategy};
use crate::types::{Clustering, ClusteringOutcome};

use super::algorithms::{center_shifts, resolve_empty_clusters};

/// Lloyd's algorithm with pluggable distance and update strategies.
///
/// The engine holds no state between runs; every iteration builds a fresh
/// assignment vector and center list from the previous centers.
///
/// # Example
///
/// ```
/// use lloyd_core::{EuclideanDistance, KMeans, MeanUpdate, RandomCenterSelector};
///
/// let points = vec![[0.0, 0.0], [0.5, 0.0], [9.0, 9.0], [9.5, 9.0]];
/// let outcome = KMeans::new(EuclideanDistance, MeanUpdate)
///     .run(&points, 2, RandomCenterSelector::seeded(1))
///     .unwrap();
///
/// assert!(outcome.converged);
/// assert_eq!(outcome.clustering.k(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct KMeans<D, U> {
    distance: D,
    update: U,
    config: KMeansConfig,
}

impl<D, U> KMeans<D, U> {
    /// Create an engine with the default configuration.
    pub fn new(distance: D, update: U) -> Self {
        Self {
            distance,
            update,
            config: KMeansConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: KMeansConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }

    /// Distance strategy in use.
    pub fn distance(&self) -> &D {
        &self.distance
    }

    /// Index of the center nearest to `point` under this engine's distance.
    pub fn closest_center<T>(&self, point: &T, centers: &[T]) -> ClusterResult<usize>
    where
        D: DistanceStrategy<T>,
    {
        closest_center(point, centers, &self.distance)
    }

    /// Nearest center for every point, honoring `parallel_assignment`.
    pub fn assign<T>(&self, points: &[T], centers: &[T]) -> ClusterResult<Vec<usize>>
    where
        T: Sync,
        D: DistanceStrategy<T> + Sync,
    {
        closest_centers(points, centers, &self.distance, self.config.parallel_assignment)
    }

    /// Cluster `points` into `k` clusters.
    ///
    /// # Errors
    ///
    /// - `ClusterError::InvalidConfig` if k is 0 or the configuration is invalid
    /// - `ClusterError::InsufficientData` if `points.len() < k`
    /// - `ClusterError::EmptyCluster` under
    ///   [`EmptyClusterPolicy::Fail`](crate::EmptyClusterPolicy::Fail)
    /// - any error returned by `selector`
    pub fn run<T, S>(
        &self,
        points: &[T],
        k: usize,
        selector: S,
    ) -> ClusterResult<ClusteringOutcome<T>>
    where
        T: Clone + Sync,
        D: DistanceStrategy<T> + Sync,
        U: UpdateStrategy<T>,
        S: InitialCenterSelector<T>,
    {
        self.run_observed(points, k, selector, NoopObserver)
    }

    /// Like [`KMeans::run`], reporting every iteration to `observer`.
    pub fn run_observed<T, S, O>(
        &self,
        points: &[T],
        k: usize,
        mut selector: S,
        mut observer: O,
    ) -> ClusterResult<ClusteringOutcome<T>>
    where
        T: Clone + Sync,
        D: DistanceStrategy<T> + Sync,
        U: UpdateStrategy<T>,
        S: InitialCenterSelector<T>,
        O: IterationObserver,
    {
        // FAIL FAST: Validate inputs
        self.config.validate()?;
        if k == 0 {
            return Err(ClusterError::invalid_config("k must be > 0"));
        }

        info!(
            n = points.len(),
            k,
            max_iterations = self.config.max_iterations,
            "clustering points"
        );

        let mut centers = selector.select(points, k)?;
        let mut iteration = 0;

        loop {
            iteration += 1;

            // Assignment step: nearest current center per point
            let (assignments, cost) = if self.config.parallel_assignment {
                par_assign_all(points, &centers, &self.distance)?
            } else {
                assign_all(points, &centers, &self.distance)?
            };

            // Update step
            let mut new_centers = self.update.update(points, &assignments, k);
            let empty_clusters = resolve_empty_clusters(
                &mut new_centers,
                &centers,
                &assignments,
                self.config.empty_cluster,
                iteration,
            )?;

            // Convergence check: positional center movement
            let shifts = center_shifts(&centers, &new_centers, &self.distance);
            let converged = shifts.iter().all(|&s| s <= self.config.tolerance);
            let max_shift = shifts.iter().copied().fold(0.0f64, f64::max);

            debug!(iteration, cost, max_shift, empty_clusters, "lloyd iteration");
            observer.on_iteration(&IterationEvent {
                iteration,
                cost,
                max_shift,
                empty_clusters,
            });

            if converged || iteration >= self.config.max_iterations {
                if converged {
                    info!(iteration, cost, "clustering converged");
                } else {
                    warn!(
                        iterations = iteration,
                        max_shift, "clustering stopped at iteration cap without converging"
                    );
                }
                return Ok(ClusteringOutcome {
                    clustering: Clustering::new(new_centers, assignments),
                    iterations: iteration,
                    converged,
                    cost,
                });
            }

            centers = new_centers;
        }
    }
}

/// Cluster `points` into `k` clusters with the default configuration.
///
/// # Errors
///
/// Returns `ClusterError::InsufficientData` if `points.len() < k`; see
/// [`KMeans::run`] for the rest.
///
/// # Example
///
/// ```
/// use lloyd_core::{cluster, EuclideanDistance, MeanUpdate, RandomCenterSelector};
///
/// let points = vec![[0.0], [1.0], [10.0], [11.0]];
/// let selector = RandomCenterSelector::seeded(3);
/// let clustering = cluster(&points, 2, EuclideanDistance, MeanUpdate, selector).unwrap();
/// assert_eq!(clustering.assignments().len(), 4);
/// ```
pub fn cluster<T, D, U, S>(
    points: &[T],
    k: usize,
    distance: D,
    update: U,
    selector: S,
) -> ClusterResult<Clustering<T>>
where
    T: Clone + Sync,
    D: DistanceStrategy<T> + Sync,
    U: UpdateStrategy<T>,
    S: InitialCenterSelector<T>,
{
    KMeans::new(distance, update)
        .run(points, k, selector)
        .map(ClusteringOutcome::into_clustering)
}
