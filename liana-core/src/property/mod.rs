//! Property-based tests for the edge-insertion pipeline.
//!
//! Generates small random networks of several shapes and checks that
//! every heuristic yields a valid distribution, that selection returns
//! exactly the requested number of distinct candidates, and that the
//! enriched network grows by the expected number of previously absent edges.

mod distribution;
mod enrichment;
mod selection;
mod strategies;
mod types;
