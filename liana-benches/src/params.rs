//! Benchmark parameter types.

use std::fmt;

use liana_core::Heuristic;

/// Parameters for a scoring or insertion benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct InsertionBenchParams {
    /// Number of nodes in the synthetic network.
    pub node_count: usize,
    /// Heuristic under measurement.
    pub heuristic: Heuristic,
}

impl fmt::Display for InsertionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},h={}", self.node_count, self.heuristic)
    }
}

/// Parameters for a selection benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct SelectionBenchParams {
    /// Number of candidate pairs.
    pub candidates: usize,
    /// Number of pairs selected.
    pub count: usize,
}

impl fmt::Display for SelectionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "candidates={},count={}", self.candidates, self.count)
    }
}
