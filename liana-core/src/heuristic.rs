//! Heuristic identifiers.
//!
//! A heuristic is named by a short identifier such as `Deg`, `NbrDeg`,
//! `AssortPageRank` or `SJac`. Identifiers are resolved once into the closed
//! [`Heuristic`] enum; matching is exact so an identifier either names one
//! strategy or is rejected.

use std::{fmt, str::FromStr, sync::Arc};

use crate::error::InsertionError;

/// Node-level measure used by the assortativity heuristics.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeMetric {
    /// Node degree.
    Degree,
    /// Closeness centrality.
    Closeness,
    /// Betweenness centrality.
    Betweenness,
    /// Eigenvector centrality.
    Eigenvector,
    /// PageRank.
    PageRank,
    /// Shell index (k-core number).
    Shell,
}

impl NodeMetric {
    /// Every node metric in identifier order.
    pub const ALL: [Self; 6] = [
        Self::Degree,
        Self::Closeness,
        Self::Betweenness,
        Self::Eigenvector,
        Self::PageRank,
        Self::Shell,
    ];

    /// Returns the identifier suffix used after `Assort`.
    ///
    /// # Examples
    /// ```
    /// use liana_core::NodeMetric;
    ///
    /// assert_eq!(NodeMetric::Closeness.identifier(), "Clos");
    /// ```
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Degree => "Deg",
            Self::Closeness => "Clos",
            Self::Betweenness => "Bet",
            Self::Eigenvector => "Eigen",
            Self::PageRank => "PageRank",
            Self::Shell => "Shell",
        }
    }

    fn from_identifier(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric| metric.identifier() == raw)
    }
}

impl fmt::Display for NodeMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Pairwise similarity score used by the similarity heuristics.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SimilarityMetric {
    /// Number of common neighbours.
    CommonNeighbours,
    /// Common neighbours over the geometric mean of the degrees.
    Salton,
    /// Common neighbours over the size of the neighbourhood union.
    Jaccard,
    /// Twice the common neighbours over the degree sum.
    Sorensen,
    /// Sum of inverse degrees of the common neighbours.
    ResourceAllocation,
    /// Common neighbours over the larger degree.
    HubPromoted,
    /// Common neighbours over the smaller degree.
    HubDepressed,
    /// Common neighbours over the degree product (Leicht-Holme-Newman).
    LeichtHolmeNewman,
}

impl SimilarityMetric {
    /// Every similarity metric in identifier order.
    pub const ALL: [Self; 8] = [
        Self::CommonNeighbours,
        Self::Salton,
        Self::Jaccard,
        Self::Sorensen,
        Self::ResourceAllocation,
        Self::HubPromoted,
        Self::HubDepressed,
        Self::LeichtHolmeNewman,
    ];

    /// Returns the identifier suffix used after `S`.
    ///
    /// # Examples
    /// ```
    /// use liana_core::SimilarityMetric;
    ///
    /// assert_eq!(SimilarityMetric::ResourceAllocation.identifier(), "ResAlloc");
    /// ```
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::CommonNeighbours => "CNbr",
            Self::Salton => "Salt",
            Self::Jaccard => "Jac",
            Self::Sorensen => "Sor",
            Self::ResourceAllocation => "ResAlloc",
            Self::HubPromoted => "HPro",
            Self::HubDepressed => "HDep",
            Self::LeichtHolmeNewman => "LHN",
        }
    }

    fn from_identifier(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric| metric.identifier() == raw)
    }
}

impl fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Strategy used to weight candidate pairs.
///
/// # Examples
/// ```
/// use liana_core::{Heuristic, NodeMetric, SimilarityMetric};
///
/// let parsed: Heuristic = "AssortPageRank".parse()?;
/// assert_eq!(parsed, Heuristic::Assortativity(NodeMetric::PageRank));
///
/// let jaccard: Heuristic = "SJac".parse()?;
/// assert_eq!(jaccard, Heuristic::Similarity(SimilarityMetric::Jaccard));
/// assert_eq!(jaccard.to_string(), "SJac");
///
/// assert!("SDeg".parse::<Heuristic>().is_err());
/// # Ok::<(), liana_core::InsertionError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Heuristic {
    /// `Deg`: candidate degree over the degree sum of the source's non-neighbours.
    Degree,
    /// `NbrDeg`: candidate degree over the degree sum of the source's
    /// friends-of-friends.
    NeighbourDegree,
    /// `Assort<Metric>`: homophily or heterophily on a node-level measure.
    Assortativity(NodeMetric),
    /// `S<Metric>`: a neighbourhood similarity score.
    Similarity(SimilarityMetric),
}

impl Heuristic {
    /// Returns every supported heuristic in a stable order.
    ///
    /// # Examples
    /// ```
    /// use liana_core::Heuristic;
    ///
    /// let all = Heuristic::all();
    /// assert_eq!(all.len(), 16);
    /// assert_eq!(all[0], Heuristic::Degree);
    /// ```
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut heuristics = vec![Self::Degree, Self::NeighbourDegree];
        heuristics.extend(NodeMetric::ALL.into_iter().map(Self::Assortativity));
        heuristics.extend(SimilarityMetric::ALL.into_iter().map(Self::Similarity));
        heuristics
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degree => f.write_str("Deg"),
            Self::NeighbourDegree => f.write_str("NbrDeg"),
            Self::Assortativity(metric) => write!(f, "Assort{metric}"),
            Self::Similarity(metric) => write!(f, "S{metric}"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = InsertionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parsed = match raw {
            "Deg" => Some(Self::Degree),
            "NbrDeg" => Some(Self::NeighbourDegree),
            _ => {
                if let Some(metric) = raw.strip_prefix("Assort") {
                    NodeMetric::from_identifier(metric).map(Self::Assortativity)
                } else if let Some(metric) = raw.strip_prefix('S') {
                    SimilarityMetric::from_identifier(metric).map(Self::Similarity)
                } else {
                    None
                }
            }
        };
        parsed.ok_or_else(|| InsertionError::UnknownHeuristic {
            identifier: Arc::from(raw),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Deg", Heuristic::Degree)]
    #[case("NbrDeg", Heuristic::NeighbourDegree)]
    #[case("AssortDeg", Heuristic::Assortativity(NodeMetric::Degree))]
    #[case("AssortShell", Heuristic::Assortativity(NodeMetric::Shell))]
    #[case("SCNbr", Heuristic::Similarity(SimilarityMetric::CommonNeighbours))]
    #[case("SLHN", Heuristic::Similarity(SimilarityMetric::LeichtHolmeNewman))]
    fn parses_known_identifiers(#[case] raw: &str, #[case] expected: Heuristic) {
        let parsed: Heuristic = raw.parse().expect("identifier must parse");
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case("")]
    #[case("deg")]
    #[case("Degree")]
    #[case("Assort")]
    #[case("AssortJac")]
    #[case("S")]
    #[case("SDeg")]
    #[case("XSJac")]
    #[case("SJac ")]
    fn rejects_unknown_identifiers(#[case] raw: &str) {
        let err = raw
            .parse::<Heuristic>()
            .expect_err("identifier must be rejected");
        match err {
            InsertionError::UnknownHeuristic { identifier } => assert_eq!(&*identifier, raw),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn every_heuristic_round_trips_through_its_identifier() {
        for heuristic in Heuristic::all() {
            let rendered = heuristic.to_string();
            let reparsed: Heuristic = rendered.parse().expect("rendered identifier must parse");
            assert_eq!(reparsed, heuristic, "identifier {rendered}");
        }
    }
}
