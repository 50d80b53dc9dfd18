//! Configuration for the Lloyd iteration.
//!
//! Provides validated configuration for the termination policy, the
//! empty-cluster policy and the assignment execution mode.

use serde::{Deserialize, Serialize};

use crate::error::{ClusterError, ClusterResult};

/// Named defaults for the engine.
pub mod constants {
    /// Hard cap on Lloyd iterations.
    pub const MAX_ITERATIONS: usize = 1000;

    /// Maximum positional center movement still counted as converged.
    pub const TOLERANCE: f64 = 1e-4;
}

/// What the engine does with a cluster that received no points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyClusterPolicy {
    /// Keep the center from the previous iteration.
    #[default]
    RetainPrevious,
    /// Abort the run with [`ClusterError::EmptyCluster`].
    Fail,
}

/// Configuration for a k-means run.
///
/// # Validation
///
/// [`KMeansConfig::new`] and [`KMeansConfig::validate`] reject configurations
/// that could never terminate or never converge. Values built through
/// `Default` or deserialization are validated again when a run starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KMeansConfig {
    /// Maximum iterations before stopping.
    ///
    /// Must be > 0. Reaching the cap is not an error.
    pub max_iterations: usize,

    /// Convergence threshold for positional center movement.
    ///
    /// The run converges when every center moved by at most this distance.
    /// Must be finite and >= 0.0.
    pub tolerance: f64,

    /// Policy for clusters left without members.
    pub empty_cluster: EmptyClusterPolicy,

    /// Run the assignment step on the rayon thread pool.
    pub parallel_assignment: bool,
}

impl KMeansConfig {
    /// Create a new configuration with validation.
    ///
    /// # Errors
    ///
    /// Returns `ClusterError::InvalidConfig` if `max_iterations` is 0 or
    /// `tolerance` is negative, NaN or infinite.
    ///
    /// # Example
    ///
    /// ```
    /// use lloyd_core::KMeansConfig;
    ///
    /// let config = KMeansConfig::new(50, 1e-6).unwrap();
    /// assert_eq!(config.max_iterations, 50);
    /// assert!(KMeansConfig::new(0, 1e-6).is_err());
    /// ```
    pub fn new(max_iterations: usize, tolerance: f64) -> ClusterResult<Self> {
        let config = Self {
            max_iterations,
            tolerance,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants of this configuration.
    pub fn validate(&self) -> ClusterResult<()> {
        if self.max_iterations == 0 {
            return Err(ClusterError::invalid_config("max_iterations must be > 0"));
        }
        if !self.tolerance.is_finite() {
            return Err(ClusterError::invalid_config(
                "tolerance must be a finite number",
            ));
        }
        if self.tolerance < 0.0 {
            return Err(ClusterError::invalid_config("tolerance must be >= 0.0"));
        }
        Ok(())
    }

    /// Set the empty-cluster policy.
    pub fn with_empty_cluster(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_cluster = policy;
        self
    }

    /// Enable or disable the parallel assignment step.
    pub fn with_parallel_assignment(mut self, parallel: bool) -> Self {
        self.parallel_assignment = parallel;
        self
    }
}

impl Default for KMeansConfig {
    /// Default configuration: max_iterations=1000, tolerance=1e-4,
    /// retain previous centers, sequential assignment.
    fn default() -> Self {
        Self {
            max_iterations: constants::MAX_ITERATIONS,
            tolerance: constants::TOLERANCE,
            empty_cluster: EmptyClusterPolicy::RetainPrevious,
            parallel_assignment: false,
        }
    }
}
