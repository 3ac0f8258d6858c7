//! Tie-aware selection of candidate pairs.
//!
//! Candidates are ranked by probability with a stable sort. The first `count`
//! ranked candidates are taken, except that every candidate sharing the
//! probability of the last one taken competes for the remaining slots, which
//! are filled by uniform sampling without replacement.

use std::fmt;

use rand::{Rng, seq::SliceRandom};
use tracing::{debug, instrument};

use crate::{InsertionError, Result, pairs::CandidatePair};

/// Which end of the probability ranking is selected.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SelectionOrder {
    /// Rank by ascending probability and take the lowest-ranked pairs.
    #[default]
    Ascending,
    /// Rank by descending probability and take the most probable pairs.
    Descending,
}

impl fmt::Display for SelectionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        })
    }
}

/// Chooses exactly `count` distinct pairs from `pairs`.
///
/// `probabilities[k]` belongs to `pairs[k]`. The random source is only
/// consulted to break ties at the selection boundary, and never when `count`
/// is zero.
///
/// # Errors
/// Returns [`InsertionError::MismatchedLengths`] when the sequences are not
/// parallel and [`InsertionError::InsufficientCandidates`] when `count`
/// exceeds the number of pairs.
///
/// # Examples
/// ```
/// use liana_core::{CandidatePair, SelectionOrder, select_edges};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let pairs = [CandidatePair::new(0, 1), CandidatePair::new(0, 2), CandidatePair::new(1, 2)];
/// let mut rng = SmallRng::seed_from_u64(7);
/// let chosen = select_edges(&pairs, &[0.5, 0.2, 0.3], 1, SelectionOrder::Descending, &mut rng)?;
/// assert_eq!(chosen, vec![CandidatePair::new(0, 1)]);
/// # Ok::<(), liana_core::InsertionError>(())
/// ```
#[instrument(
    name = "core.select",
    err,
    skip(pairs, probabilities, order, rng),
    fields(candidates = pairs.len(), order = %order),
)]
pub fn select_edges<R: Rng + ?Sized>(
    pairs: &[CandidatePair],
    probabilities: &[f64],
    count: usize,
    order: SelectionOrder,
    rng: &mut R,
) -> Result<Vec<CandidatePair>> {
    if pairs.len() != probabilities.len() {
        return Err(InsertionError::MismatchedLengths {
            pairs: pairs.len(),
            probabilities: probabilities.len(),
        });
    }
    if count > pairs.len() {
        return Err(InsertionError::InsufficientCandidates {
            requested: count,
            available: pairs.len(),
        });
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    let ranked = rank(probabilities, order);
    let boundary = probabilities[ranked[count - 1]];

    let mut chosen: Vec<usize> = ranked[..count]
        .iter()
        .copied()
        .filter(|&index| probabilities[index] != boundary)
        .collect();
    let ties: Vec<usize> = ranked
        .iter()
        .copied()
        .filter(|&index| probabilities[index] == boundary)
        .collect();
    let remaining = count - chosen.len();
    debug!(
        unconditional = chosen.len(),
        ties = ties.len(),
        remaining,
        "sampling boundary ties"
    );
    chosen.extend(ties.choose_multiple(rng, remaining).copied());

    Ok(chosen.into_iter().map(|index| pairs[index]).collect())
}

/// Returns candidate indices stably sorted by probability in `order`.
fn rank(probabilities: &[f64], order: SelectionOrder) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..probabilities.len()).collect();
    match order {
        SelectionOrder::Ascending => {
            ranked.sort_by(|&a, &b| probabilities[a].total_cmp(&probabilities[b]));
        }
        SelectionOrder::Descending => {
            ranked.sort_by(|&a, &b| probabilities[b].total_cmp(&probabilities[a]));
        }
    }
    ranked
}
