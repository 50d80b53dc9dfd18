//! Lloyd's algorithm over arbitrary point types.
//!
//! # Algorithm
//!
//! 1. Pick k initial centers with an [`InitialCenterSelector`](crate::InitialCenterSelector)
//! 2. Assign each point to its nearest center (lowest index wins ties)
//! 3. Recompute centers with the [`UpdateStrategy`](crate::UpdateStrategy)
//! 4. Stop once no center moved by more than the tolerance, or at the
//!    iteration cap
//!
//! # Termination
//!
//! Hitting the iteration cap is not an error. The last clustering is
//! returned with `converged == false` and a warning is logged.
//!
//! # Fail-Fast Validation
//!
//! - k must be > 0
//! - points.len() must be >= k
//! - the configuration must pass [`KMeansConfig::validate`](crate::KMeansConfig::validate)

mod algorithms;
mod clusterer;
#[cfg(test)]
mod tests;

pub(crate) use algorithms::cluster_sizes;
pub use clusterer::{cluster, KMeans};
