//! Error types for lloyd-core.
//!
//! The only failure a well-formed run can hit is [`ClusterError::InsufficientData`],
//! raised before the first iteration. Non-convergence is reported through
//! [`crate::ClusteringOutcome::converged`], never as an error.

use thiserror::Error;

/// Errors raised by the clustering engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClusterError {
    /// Fewer data points than requested clusters.
    ///
    /// Checked before any center is sampled.
    #[error("insufficient data: {points} points cannot form {k} clusters")]
    InsufficientData {
        /// Number of data points supplied
        points: usize,
        /// Number of clusters requested
        k: usize,
    },

    /// A nearest-center query was issued against an empty center list.
    #[error("no centers to compare against")]
    NoCenters,

    /// A fixed center list does not match the requested cluster count.
    #[error("center count mismatch: expected {expected}, got {actual}")]
    CenterCountMismatch {
        /// Requested cluster count
        expected: usize,
        /// Length of the supplied center list
        actual: usize,
    },

    /// A cluster received no points and the configured policy is
    /// [`crate::EmptyClusterPolicy::Fail`].
    #[error("cluster {cluster} is empty at iteration {iteration}")]
    EmptyCluster {
        /// Index of the empty cluster
        cluster: usize,
        /// 1-based iteration in which it emptied
        iteration: usize,
    },

    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClusterError {
    /// Create an `InvalidConfig` error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result alias for clustering operations.
pub type ClusterResult<T> = Result<T, ClusterError>;
