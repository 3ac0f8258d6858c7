//! Benchmark support crate for liana.
//!
//! Provides synthetic random networks and parameter types used by Criterion
//! benchmarks for heuristic scoring and tie-aware edge selection.

pub mod error;
pub mod params;
pub mod source;
