//! Candidate pairs and the disconnected-pair enumerator.

use std::fmt;

use tracing::debug;

use crate::network::Network;

/// An unordered pair of distinct nodes in canonical `left < right` form.
///
/// # Examples
/// ```
/// use liana_core::CandidatePair;
///
/// let pair = CandidatePair::new(4, 1);
/// assert_eq!((pair.left(), pair.right()), (1, 4));
/// assert_eq!(pair, CandidatePair::new(1, 4));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CandidatePair {
    left: usize,
    right: usize,
}

impl CandidatePair {
    /// Creates a pair, ordering the endpoints canonically.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            left: a.min(b),
            right: a.max(b),
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn left(&self) -> usize { self.left }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn right(&self) -> usize { self.right }
}

impl fmt::Display for CandidatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}

/// A candidate pair together with its raw, non-negative heuristic weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredPair {
    pair: CandidatePair,
    weight: f64,
}

impl ScoredPair {
    pub(crate) fn new(pair: CandidatePair, weight: f64) -> Self {
        debug_assert!(weight >= 0.0 && weight.is_finite(), "weight {weight} for {pair}");
        Self { pair, weight }
    }

    /// Returns the scored pair.
    #[must_use]
    #[rustfmt::skip]
    pub fn pair(&self) -> CandidatePair { self.pair }

    /// Returns the raw weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }
}

/// Splits scored pairs into parallel `pairs` and `weights` sequences.
///
/// # Examples
/// ```
/// use liana_core::{CandidatePair, split_scored};
///
/// let (pairs, weights) = split_scored(&[]);
/// assert!(pairs.is_empty() && weights.is_empty());
/// # let _: Vec<CandidatePair> = pairs;
/// ```
#[must_use]
pub fn split_scored(scored: &[ScoredPair]) -> (Vec<CandidatePair>, Vec<f64>) {
    scored.iter().map(|entry| (entry.pair, entry.weight)).unzip()
}

/// Enumerates every unordered pair of nodes that is not joined by an edge.
///
/// Pairs are produced in ascending lexicographic order over all
/// `C(node_count, 2)` combinations, so repeated calls on an unchanged
/// network yield identical sequences.
pub fn enumerate_disconnected_pairs<N: Network + ?Sized>(network: &N) -> Vec<CandidatePair> {
    let nodes = network.node_count();
    let mut pairs = Vec::new();
    for left in 0..nodes {
        for right in (left + 1)..nodes {
            if !network.are_connected(left, right) {
                pairs.push(CandidatePair { left, right });
            }
        }
    }
    debug!(
        network = network.name(),
        candidates = pairs.len(),
        "enumerated disconnected pairs"
    );
    pairs
}
