//! Tests for the Lloyd engine.
//!
//! # Test Organization
//!
//! - `helpers` - Deterministic point-set generators
//! - `clustering_tests` - Shape of results, scenarios and generic point types
//! - `convergence_tests` - Termination, monotone cost and warm restarts
//! - `edge_cases` - Empty clusters, degenerate inputs and fail-fast paths

mod helpers;

mod clustering_tests;
mod edge_cases;
