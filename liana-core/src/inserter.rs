//! Edge-insertion orchestration.
//!
//! Provides the [`EdgeInserter`] runtime entry point, the [`InsertionPlan`]
//! and [`Enrichment`] results, and the string-driven [`run`] convenience.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{
    InsertionError, Result,
    builder::EdgeInserterBuilder,
    heuristic::Heuristic,
    mutation::insert_edges,
    network::{MutableNetwork, Network},
    normalize::normalize,
    pairs::{CandidatePair, ScoredPair, split_scored},
    scoring::score,
    selection::{SelectionOrder, select_edges},
};

/// Scores, normalises and selects candidate pairs, then applies them to a copy
/// of the network.
///
/// # Examples
/// ```
/// use liana_core::{EdgeInserterBuilder, Heuristic};
///
/// let inserter = EdgeInserterBuilder::new()
///     .with_heuristic(Heuristic::Degree)
///     .with_percentage(50.0)
///     .build()?;
/// assert_eq!(inserter.insertion_count(7), 3);
/// # Ok::<(), liana_core::InsertionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EdgeInserter {
    heuristic: Heuristic,
    percentage: f64,
    seed: u64,
    order: SelectionOrder,
}

impl EdgeInserter {
    pub(crate) fn new(heuristic: Heuristic, percentage: f64, seed: u64, order: SelectionOrder) -> Self {
        Self {
            heuristic,
            percentage,
            seed,
            order,
        }
    }

    /// Returns the heuristic used to weight candidate pairs.
    #[must_use]
    #[rustfmt::skip]
    pub fn heuristic(&self) -> Heuristic { self.heuristic }

    /// Returns the insertion percentage.
    #[must_use]
    #[rustfmt::skip]
    pub fn percentage(&self) -> f64 { self.percentage }

    /// Returns the seed used by [`EdgeInserter::run`].
    #[must_use]
    #[rustfmt::skip]
    pub fn seed(&self) -> u64 { self.seed }

    /// Returns the selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn selection_order(&self) -> SelectionOrder { self.order }

    /// Number of edges inserted into a network with `edge_count` edges:
    /// `floor(edge_count * percentage / 100)`.
    ///
    /// # Examples
    /// ```
    /// use liana_core::EdgeInserterBuilder;
    ///
    /// let inserter = EdgeInserterBuilder::new().with_percentage(5.0).build()?;
    /// assert_eq!(inserter.insertion_count(19), 0);
    /// assert_eq!(inserter.insertion_count(40), 2);
    /// # Ok::<(), liana_core::InsertionError>(())
    /// ```
    #[must_use]
    pub fn insertion_count(&self, edge_count: usize) -> usize {
        // Percentage is validated finite and non-negative, so the product is too.
        ((edge_count as f64 * self.percentage) / 100.0).floor() as usize
    }

    /// Runs the pipeline with a [`SmallRng`] seeded from the configured seed.
    ///
    /// # Errors
    /// Propagates every [`InsertionError`] raised while scoring, normalising,
    /// selecting or inserting.
    pub fn run<N: MutableNetwork>(&self, network: &N) -> Result<Enrichment<N>> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        self.run_with_rng(network, &mut rng)
    }

    /// Runs the pipeline using `rng` to break selection ties.
    ///
    /// # Errors
    /// Propagates every [`InsertionError`] raised while scoring, normalising,
    /// selecting or inserting.
    #[instrument(
        name = "core.run",
        err,
        skip(self, network, rng),
        fields(
            network = %network.name(),
            nodes = network.node_count(),
            edges = network.edge_count(),
            heuristic = %self.heuristic,
            percentage = self.percentage,
        ),
    )]
    pub fn run_with_rng<N, R>(&self, network: &N, rng: &mut R) -> Result<Enrichment<N>>
    where
        N: MutableNetwork,
        R: Rng + ?Sized,
    {
        let plan = self.plan(network, rng)?;
        let enriched = insert_edges(network, plan.selected())?;
        info!(
            inserted = plan.selected().len(),
            edges = enriched.edge_count(),
            "edge insertion completed"
        );
        Ok(Enrichment {
            network: enriched,
            inserted: plan.selected,
            heuristic: self.heuristic,
        })
    }

    /// Scores and selects candidate pairs without mutating anything.
    ///
    /// # Errors
    /// Returns [`InsertionError::DegenerateHeuristic`] when scoring is
    /// undefined, [`InsertionError::InsufficientCandidates`] when fewer pairs
    /// are disconnected than requested, and
    /// [`InsertionError::ZeroTotalWeight`] when every weight is zero.
    pub fn plan<N, R>(&self, network: &N, rng: &mut R) -> Result<InsertionPlan>
    where
        N: Network + ?Sized,
        R: Rng + ?Sized,
    {
        let requested = self.insertion_count(network.edge_count());
        let scored = score(network, self.heuristic)?;
        if requested > scored.len() {
            return Err(InsertionError::InsufficientCandidates {
                requested,
                available: scored.len(),
            });
        }
        let (pairs, weights) = split_scored(&scored);
        let probabilities = normalize(&weights)?;
        let selected = select_edges(&pairs, &probabilities, requested, self.order, rng)?;
        Ok(InsertionPlan {
            scored,
            probabilities,
            selected,
        })
    }
}

/// Candidate weights and the pairs chosen from them.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertionPlan {
    scored: Vec<ScoredPair>,
    probabilities: Vec<f64>,
    selected: Vec<CandidatePair>,
}

impl InsertionPlan {
    /// Returns every scored candidate with its raw weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn scored(&self) -> &[ScoredPair] { &self.scored }

    /// Returns the normalised probabilities, parallel to [`Self::scored`].
    #[must_use]
    #[rustfmt::skip]
    pub fn probabilities(&self) -> &[f64] { &self.probabilities }

    /// Returns the pairs selected for insertion.
    #[must_use]
    #[rustfmt::skip]
    pub fn selected(&self) -> &[CandidatePair] { &self.selected }
}

/// An enriched copy of a network and the edges added to it.
#[derive(Debug, Clone)]
pub struct Enrichment<N> {
    network: N,
    inserted: Vec<CandidatePair>,
    heuristic: Heuristic,
}

impl<N> Enrichment<N> {
    /// Returns the enriched network.
    #[must_use]
    #[rustfmt::skip]
    pub fn network(&self) -> &N { &self.network }

    /// Consumes the result, returning the enriched network.
    #[must_use]
    pub fn into_network(self) -> N {
        self.network
    }

    /// Returns the inserted pairs in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn inserted(&self) -> &[CandidatePair] { &self.inserted }

    /// Returns the heuristic that ranked the inserted pairs.
    #[must_use]
    #[rustfmt::skip]
    pub fn heuristic(&self) -> Heuristic { self.heuristic }
}

/// Inserts `floor(edge_count * percentage / 100)` edges chosen by the
/// heuristic named `identifier`, returning the enriched copy.
///
/// Tie-breaking is seeded with [`crate::DEFAULT_SEED`] and selection uses the
/// default [`SelectionOrder`].
///
/// # Errors
/// Returns [`InsertionError::UnknownHeuristic`] for an unrecognised
/// identifier, [`InsertionError::InvalidPercentage`] for a negative or
/// non-finite percentage, and any error raised by [`EdgeInserter::run`].
pub fn run<N: MutableNetwork>(network: &N, identifier: &str, percentage: f64) -> Result<N> {
    let heuristic = identifier.parse::<Heuristic>()?;
    let inserter = EdgeInserterBuilder::new()
        .with_heuristic(heuristic)
        .with_percentage(percentage)
        .build()?;
    inserter.run(network).map(Enrichment::into_network)
}
