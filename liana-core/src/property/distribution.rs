//! Every heuristic produces a valid distribution over disconnected pairs.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    Heuristic, InsertionError, Network, enumerate_disconnected_pairs, normalize, score,
    split_scored,
};

use super::types::GraphFixture;

/// Scores the fixture under every heuristic and validates the weights and
/// their normalisation.
pub(super) fn run_distribution_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    for heuristic in Heuristic::all() {
        let scored = match score(graph, heuristic) {
            Ok(scored) => scored,
            Err(InsertionError::DegenerateHeuristic { .. }) => continue,
            Err(other) => {
                return Err(TestCaseError::fail(format!(
                    "{heuristic} failed unexpectedly: {other} ({:?}, seed={})",
                    fixture.shape, fixture.seed
                )));
            }
        };

        let (pairs, weights) = split_scored(&scored);
        let mut seen = HashSet::new();
        for pair in &pairs {
            if pair.left() >= pair.right() || graph.are_connected(pair.left(), pair.right()) {
                return Err(TestCaseError::fail(format!(
                    "{heuristic} produced invalid candidate {pair}"
                )));
            }
            if !seen.insert(*pair) {
                return Err(TestCaseError::fail(format!(
                    "{heuristic} produced {pair} twice"
                )));
            }
        }
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(TestCaseError::fail(format!(
                "{heuristic} produced weight {bad}"
            )));
        }

        let total: f64 = weights.iter().sum();
        match normalize(&weights) {
            Ok(probabilities) => {
                let sum: f64 = probabilities.iter().sum();
                if (sum - 1.0).abs() > 1e-9 {
                    return Err(TestCaseError::fail(format!(
                        "{heuristic} probabilities sum to {sum}"
                    )));
                }
            }
            Err(InsertionError::ZeroTotalWeight { .. }) if total == 0.0 => {}
            Err(other) => {
                return Err(TestCaseError::fail(format!(
                    "{heuristic} failed to normalise: {other}"
                )));
            }
        }
    }
    Ok(())
}

/// Enumerating twice on the same network yields the same pairs.
pub(super) fn run_enumeration_idempotence_property(fixture: &GraphFixture) -> TestCaseResult {
    let first = enumerate_disconnected_pairs(&fixture.graph);
    let second = enumerate_disconnected_pairs(&fixture.graph);
    if first != second {
        return Err(TestCaseError::fail("enumeration changed between calls"));
    }
    let nodes = fixture.graph.node_count();
    let expected = nodes * nodes.saturating_sub(1) / 2 - fixture.graph.edge_count();
    if first.len() != expected {
        return Err(TestCaseError::fail(format!(
            "expected {expected} disconnected pairs, found {}",
            first.len()
        )));
    }
    Ok(())
}
