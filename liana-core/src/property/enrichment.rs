//! The enriched network gains exactly the requested, previously absent edges.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::{SeedableRng, rngs::SmallRng};

use crate::{EdgeInserterBuilder, Heuristic, InsertionError, Network};

use super::types::GraphFixture;

/// Runs the inserter and validates the enriched copy against the original.
pub(super) fn run_enrichment_property(
    fixture: &GraphFixture,
    heuristic: Heuristic,
    percentage: f64,
) -> TestCaseResult {
    let graph = &fixture.graph;
    let inserter = EdgeInserterBuilder::new()
        .with_heuristic(heuristic)
        .with_percentage(percentage)
        .build()
        .map_err(|err| TestCaseError::fail(format!("configuration rejected: {err}")))?;
    let mut rng = SmallRng::seed_from_u64(fixture.seed);
    let before = graph.clone();

    let enrichment = match inserter.run_with_rng(graph, &mut rng) {
        Ok(enrichment) => enrichment,
        Err(
            InsertionError::DegenerateHeuristic { .. }
            | InsertionError::ZeroTotalWeight { .. }
            | InsertionError::InsufficientCandidates { .. },
        ) => return Ok(()),
        Err(other) => {
            return Err(TestCaseError::fail(format!(
                "{heuristic} at {percentage}% failed: {other} ({:?}, seed={})",
                fixture.shape, fixture.seed
            )));
        }
    };

    if *graph != before {
        return Err(TestCaseError::fail("input network was mutated"));
    }
    let expected = graph.edge_count() + inserter.insertion_count(graph.edge_count());
    if enrichment.network().edge_count() != expected {
        return Err(TestCaseError::fail(format!(
            "expected {expected} edges, found {}",
            enrichment.network().edge_count()
        )));
    }
    for pair in enrichment.inserted() {
        if graph.are_connected(pair.left(), pair.right()) {
            return Err(TestCaseError::fail(format!("{pair} was already an edge")));
        }
        if !enrichment.network().are_connected(pair.left(), pair.right()) {
            return Err(TestCaseError::fail(format!("{pair} was not inserted")));
        }
    }
    Ok(())
}
