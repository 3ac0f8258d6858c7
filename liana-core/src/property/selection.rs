//! Selection returns exactly the requested number of distinct candidates.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    CandidatePair, SelectionOrder, enumerate_disconnected_pairs, normalize, select_edges,
};

use super::types::GraphFixture;

/// Selects a fraction of the fixture's candidates under heavily tied weights
/// and checks count, uniqueness and ranking.
pub(super) fn run_selection_property(
    fixture: &GraphFixture,
    fraction: f64,
    order: SelectionOrder,
) -> TestCaseResult {
    let pairs = enumerate_disconnected_pairs(&fixture.graph);
    if pairs.is_empty() {
        return Ok(());
    }
    // Four weight levels force ties at most boundaries.
    let weights: Vec<f64> = pairs
        .iter()
        .map(|pair| ((pair.left() * 7 + pair.right() * 3) % 4 + 1) as f64)
        .collect();
    let probabilities = normalize(&weights)
        .map_err(|err| TestCaseError::fail(format!("weights are positive: {err}")))?;
    let count = ((pairs.len() as f64) * fraction).floor() as usize;

    let mut rng = SmallRng::seed_from_u64(fixture.seed);
    let chosen = select_edges(&pairs, &probabilities, count, order, &mut rng)
        .map_err(|err| TestCaseError::fail(format!("selection failed: {err}")))?;

    if chosen.len() != count {
        return Err(TestCaseError::fail(format!(
            "requested {count} pairs, got {}",
            chosen.len()
        )));
    }
    let unique: HashSet<_> = chosen.iter().copied().collect();
    if unique.len() != count {
        return Err(TestCaseError::fail("selection contains duplicates"));
    }

    let probability_of = |target: CandidatePair| {
        pairs
            .iter()
            .position(|pair| *pair == target)
            .map(|index| probabilities[index])
    };
    let mut chosen_probabilities = Vec::with_capacity(count);
    for pair in &chosen {
        let probability = probability_of(*pair)
            .ok_or_else(|| TestCaseError::fail(format!("{pair} is not a candidate")))?;
        chosen_probabilities.push(probability);
    }
    let rejected = pairs
        .iter()
        .zip(&probabilities)
        .filter(|(pair, _)| !unique.contains(*pair))
        .map(|(_, probability)| *probability);
    for probability in rejected {
        let outranked = chosen_probabilities.iter().any(|chosen| match order {
            SelectionOrder::Ascending => *chosen > probability,
            SelectionOrder::Descending => *chosen < probability,
        });
        if outranked {
            return Err(TestCaseError::fail(format!(
                "a rejected candidate with probability {probability} outranks a selected one"
            )));
        }
    }
    Ok(())
}
