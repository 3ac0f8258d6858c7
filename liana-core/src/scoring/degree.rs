//! Degree-proportional strategies (`Deg` and `NbrDeg`).

use std::collections::HashSet;

use crate::{
    error::DegeneracyReason,
    network::Network,
    pairs::{CandidatePair, ScoredPair},
};

/// Scores every non-adjacent pair by the target's share of the degree mass
/// among the source's non-neighbours.
pub(super) fn score_degree<N: Network + ?Sized>(
    network: &N,
) -> Result<Vec<ScoredPair>, DegeneracyReason> {
    let nodes = network.node_count();
    let candidates_of = |source: usize| {
        (0..nodes)
            .filter(|&target| target != source && !network.are_connected(source, target))
            .collect::<Vec<_>>()
    };
    score_by_candidate_degree(network, candidates_of)
}

/// Scores friend-of-friend pairs by the target's share of the degree mass
/// among the source's friends-of-friends.
pub(super) fn score_neighbour_degree<N: Network + ?Sized>(
    network: &N,
) -> Result<Vec<ScoredPair>, DegeneracyReason> {
    let candidates_of = |source: usize| {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for &neighbour in network.neighbors(source) {
            for &target in network.neighbors(neighbour) {
                if target != source
                    && !network.are_connected(source, target)
                    && seen.insert(target)
                {
                    candidates.push(target);
                }
            }
        }
        candidates
    };
    score_by_candidate_degree(network, candidates_of)
}

/// Walks the sources in ascending order, weighting each candidate by
/// `degree(target) / sum(degree(candidate))`. A pair already emitted from the
/// other endpoint keeps its first weight.
fn score_by_candidate_degree<N, F>(
    network: &N,
    mut candidates_of: F,
) -> Result<Vec<ScoredPair>, DegeneracyReason>
where
    N: Network + ?Sized,
    F: FnMut(usize) -> Vec<usize>,
{
    let degrees = network.degrees();
    let mut emitted = HashSet::new();
    let mut scored = Vec::new();

    for source in 0..network.node_count() {
        let candidates = candidates_of(source);
        if candidates.is_empty() {
            continue;
        }
        let total: usize = candidates.iter().map(|&target| degrees[target]).sum();
        if total == 0 {
            return Err(DegeneracyReason::ZeroDegreeSum { node: source });
        }
        let total = total as f64;
        for target in candidates {
            let pair = CandidatePair::new(source, target);
            if emitted.insert(pair) {
                scored.push(ScoredPair::new(pair, degrees[target] as f64 / total));
            }
        }
    }

    Ok(scored)
}
