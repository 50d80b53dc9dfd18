//! Lloyd Core Library
//!
//! Generic k-means clustering (Lloyd's algorithm) over caller-defined point
//! types.
//!
//! # Architecture
//!
//! This crate defines:
//! - Strategy contracts ([`DistanceStrategy`], [`UpdateStrategy`],
//!   [`InitialCenterSelector`]) and stock implementations
//! - The nearest-center query ([`closest_center`])
//! - The iterative engine ([`KMeans`], [`cluster`])
//! - Result types, configuration and errors
//!
//! The engine never inspects a point beyond what the strategies do with it.
//! Distances are trusted to be non-negative and symmetric; update strategies
//! are trusted to return exactly `k` centers.
//!
//! # Example
//!
//! ```
//! use lloyd_core::{cluster, EuclideanDistance, MeanUpdate, RandomCenterSelector};
//!
//! let points = vec![
//!     [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0],
//!     [100.0, 100.0, 100.0], [99.0, 100.0, 100.0], [100.0, 99.0, 100.0],
//! ];
//! let clustering = cluster(
//!     &points,
//!     2,
//!     EuclideanDistance,
//!     MeanUpdate,
//!     RandomCenterSelector::seeded(42),
//! )
//! .unwrap();
//!
//! assert_eq!(clustering.centers().len(), 2);
//! assert_eq!(clustering.assignments().len(), points.len());
//! ```

pub mod clustering;
pub mod config;
pub mod error;
pub mod metrics;
pub mod nearest;
pub mod observer;
pub mod selector;
pub mod strategy;
pub mod types;

// Re-exports for convenience
pub use clustering::{cluster, KMeans};
pub use config::{EmptyClusterPolicy, KMeansConfig};
pub use error::{ClusterError, ClusterResult};
pub use metrics::{EuclideanDistance, SquaredEuclideanDistance};
pub use nearest::{closest_center, closest_centers};
pub use observer::{IterationEvent, IterationObserver, NoopObserver};
pub use selector::{
    select_initial_centers, FixedCenterSelector, InitialCenterSelector, RandomCenterSelector,
};
pub use strategy::{Coordinates, DistanceStrategy, MeanUpdate, UpdateStrategy};
pub use types::{Clustering, ClusteringOutcome};
