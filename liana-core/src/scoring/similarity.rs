//! Neighbourhood similarity strategies (`S<Metric>`).

use crate::{
    error::DegeneracyReason,
    heuristic::SimilarityMetric,
    network::Network,
    pairs::{CandidatePair, ScoredPair, enumerate_disconnected_pairs},
};

/// Scores every disconnected pair with the similarity `metric`.
pub(super) fn score_similarity<N: Network + ?Sized>(
    network: &N,
    metric: SimilarityMetric,
) -> Result<Vec<ScoredPair>, DegeneracyReason> {
    let degrees = network.degrees();
    enumerate_disconnected_pairs(network)
        .into_iter()
        .map(|pair| {
            let weight = similarity(network, &degrees, metric, pair)?;
            Ok(ScoredPair::new(pair, weight))
        })
        .collect()
}

fn similarity<N: Network + ?Sized>(
    network: &N,
    degrees: &[usize],
    metric: SimilarityMetric,
    pair: CandidatePair,
) -> Result<f64, DegeneracyReason> {
    let (left, right) = (pair.left(), pair.right());
    let common = common_neighbours(network.neighbors(left), network.neighbors(right));
    let shared = common.len() as f64;
    let (deg_left, deg_right) = (degrees[left], degrees[right]);

    let ratio = |denominator: usize| {
        if denominator == 0 {
            Err(DegeneracyReason::ZeroDenominator { left, right })
        } else {
            Ok(shared / denominator as f64)
        }
    };

    match metric {
        SimilarityMetric::CommonNeighbours => Ok(shared),
        SimilarityMetric::Salton => {
            let product = deg_left * deg_right;
            if product == 0 {
                return Err(DegeneracyReason::ZeroDenominator { left, right });
            }
            Ok(shared / (product as f64).sqrt())
        }
        // |N(i) ∪ N(j)| = deg(i) + deg(j) - |N(i) ∩ N(j)|
        SimilarityMetric::Jaccard => ratio(deg_left + deg_right - common.len()),
        SimilarityMetric::Sorensen => ratio(deg_left + deg_right).map(|value| 2.0 * value),
        SimilarityMetric::ResourceAllocation => Ok(common
            .iter()
            .map(|&shared_node| (degrees[shared_node] as f64).recip())
            .sum()),
        SimilarityMetric::HubPromoted => ratio(deg_left.max(deg_right)),
        SimilarityMetric::HubDepressed => ratio(deg_left.min(deg_right)),
        SimilarityMetric::LeichtHolmeNewman => ratio(deg_left * deg_right),
    }
}

/// Intersects two ascending neighbour lists.
fn common_neighbours(left: &[usize], right: &[usize]) -> Vec<usize> {
    let mut common = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                common.push(left[i]);
                i += 1;
                j += 1;
            }
        }
    }
    common
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::test_utils::{TestGraph, assert_close};

    /// Square 0-1-2-3-0 with chord 0-2; the only missing pair is (1, 3).
    fn kite() -> TestGraph {
        TestGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)])
    }

    #[rstest]
    #[case::common_neighbours(SimilarityMetric::CommonNeighbours, 2.0)]
    #[case::salton(SimilarityMetric::Salton, 1.0)]
    #[case::jaccard(SimilarityMetric::Jaccard, 1.0)]
    #[case::sorensen(SimilarityMetric::Sorensen, 1.0)]
    #[case::resource_allocation(SimilarityMetric::ResourceAllocation, 2.0 / 3.0)]
    #[case::hub_promoted(SimilarityMetric::HubPromoted, 1.0)]
    #[case::hub_depressed(SimilarityMetric::HubDepressed, 1.0)]
    #[case::leicht_holme_newman(SimilarityMetric::LeichtHolmeNewman, 0.5)]
    fn kite_pair_scores(#[case] metric: SimilarityMetric, #[case] expected: f64) {
        let scored = score_similarity(&kite(), metric).expect("kite has no isolated nodes");
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].pair(), CandidatePair::new(1, 3));
        assert_close(scored[0].weight(), expected);
    }

    #[test]
    fn uneven_degrees_separate_hub_scores() {
        // Star on 0 with leaves 1..=3, plus edge 3-4. Pair (1, 3) shares hub 0;
        // deg(1) = 1, deg(3) = 2.
        let graph = TestGraph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (3, 4)]);
        let promoted = score_similarity(&graph, SimilarityMetric::HubPromoted)
            .expect("no isolated nodes");
        let depressed = score_similarity(&graph, SimilarityMetric::HubDepressed)
            .expect("no isolated nodes");
        let target = CandidatePair::new(1, 3);
        let weight = |scored: &[ScoredPair]| {
            scored
                .iter()
                .find(|entry| entry.pair() == target)
                .map(ScoredPair::weight)
                .expect("pair (1, 3) must be scored")
        };
        assert_close(weight(&promoted), 0.5);
        assert_close(weight(&depressed), 1.0);
    }

    #[test]
    fn jaccard_without_overlap_is_zero_rather_than_degenerate() {
        let graph = TestGraph::from_edges(3, &[(0, 1)]);
        let scored =
            score_similarity(&graph, SimilarityMetric::Jaccard).expect("unions are non-empty");
        assert_eq!(scored.len(), 2);
        assert!(scored.iter().all(|entry| entry.weight() == 0.0));
    }

    #[rstest]
    #[case::salton(SimilarityMetric::Salton)]
    #[case::sorensen(SimilarityMetric::Sorensen)]
    #[case::hub_depressed(SimilarityMetric::HubDepressed)]
    #[case::leicht_holme_newman(SimilarityMetric::LeichtHolmeNewman)]
    fn isolated_endpoints_are_degenerate(#[case] metric: SimilarityMetric) {
        // Nodes 2 and 3 are both isolated, so (2, 3) divides by zero everywhere.
        let graph = TestGraph::from_edges(4, &[(0, 1)]);
        let err = score_similarity(&graph, metric).expect_err("zero denominator must surface");
        assert!(matches!(err, DegeneracyReason::ZeroDenominator { .. }));
    }

    #[test]
    fn intersection_walks_sorted_lists() {
        assert_eq!(common_neighbours(&[0, 2, 4, 7], &[1, 2, 3, 7, 9]), vec![2, 7]);
        assert!(common_neighbours(&[], &[1, 2]).is_empty());
    }
}
