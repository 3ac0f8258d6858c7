//! Builder utilities for configuring edge insertion.
//!
//! Collects the heuristic, insertion percentage, tie-breaking seed and
//! selection order, and validates them before constructing an
//! [`EdgeInserter`].

use crate::{
    InsertionError, Result, heuristic::Heuristic, inserter::EdgeInserter,
    selection::SelectionOrder,
};

/// Seed used for tie-breaking when none is configured.
pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;

/// Percentage of the current edge count inserted when none is configured.
pub const DEFAULT_PERCENTAGE: f64 = 5.0;

/// Configures and constructs [`EdgeInserter`] instances.
///
/// # Examples
/// ```
/// use liana_core::{EdgeInserterBuilder, SelectionOrder};
///
/// let inserter = EdgeInserterBuilder::new()
///     .with_heuristic("SJac".parse()?)
///     .with_percentage(10.0)
///     .with_selection_order(SelectionOrder::Descending)
///     .build()?;
/// assert_eq!(inserter.heuristic().to_string(), "SJac");
/// assert_eq!(inserter.insertion_count(25), 2);
/// # Ok::<(), liana_core::InsertionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EdgeInserterBuilder {
    heuristic: Heuristic,
    percentage: f64,
    seed: u64,
    order: SelectionOrder,
}

impl Default for EdgeInserterBuilder {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Degree,
            percentage: DEFAULT_PERCENTAGE,
            seed: DEFAULT_SEED,
            order: SelectionOrder::default(),
        }
    }
}

impl EdgeInserterBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use liana_core::{EdgeInserterBuilder, Heuristic, SelectionOrder};
    ///
    /// let builder = EdgeInserterBuilder::new();
    /// assert_eq!(builder.heuristic(), Heuristic::Degree);
    /// assert_eq!(builder.percentage(), 5.0);
    /// assert_eq!(builder.selection_order(), SelectionOrder::Ascending);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the heuristic used to weight candidate pairs.
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Returns the configured heuristic.
    #[must_use]
    #[rustfmt::skip]
    pub fn heuristic(&self) -> Heuristic { self.heuristic }

    /// Sets the number of edges to insert as a percentage of the current
    /// edge count.
    ///
    /// # Examples
    /// ```
    /// use liana_core::EdgeInserterBuilder;
    ///
    /// let builder = EdgeInserterBuilder::new().with_percentage(12.5);
    /// assert_eq!(builder.percentage(), 12.5);
    /// ```
    #[must_use]
    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.percentage = percentage;
        self
    }

    /// Returns the configured percentage.
    #[must_use]
    #[rustfmt::skip]
    pub fn percentage(&self) -> f64 { self.percentage }

    /// Sets the seed of the random source used to break boundary ties.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured seed.
    #[must_use]
    #[rustfmt::skip]
    pub fn seed(&self) -> u64 { self.seed }

    /// Sets which end of the probability ranking is selected.
    #[must_use]
    pub fn with_selection_order(mut self, order: SelectionOrder) -> Self {
        self.order = order;
        self
    }

    /// Returns the configured selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn selection_order(&self) -> SelectionOrder { self.order }

    /// Validates the configuration and constructs an [`EdgeInserter`].
    ///
    /// # Errors
    /// Returns [`InsertionError::InvalidPercentage`] when the percentage is
    /// negative, NaN or infinite.
    ///
    /// # Examples
    /// ```
    /// use liana_core::{EdgeInserterBuilder, InsertionErrorCode};
    ///
    /// let err = EdgeInserterBuilder::new()
    ///     .with_percentage(-1.0)
    ///     .build()
    ///     .expect_err("negative percentages are rejected");
    /// assert_eq!(err.code(), InsertionErrorCode::InvalidPercentage);
    /// ```
    pub fn build(self) -> Result<EdgeInserter> {
        if !self.percentage.is_finite() || self.percentage < 0.0 {
            return Err(InsertionError::InvalidPercentage {
                got: self.percentage,
            });
        }
        Ok(EdgeInserter::new(
            self.heuristic,
            self.percentage,
            self.seed,
            self.order,
        ))
    }
}
