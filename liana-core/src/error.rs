//! Error types for the liana core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::heuristic::{Heuristic, NodeMetric};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by a [`crate::MutableNetwork`] while mutating a graph.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum NetworkError {
    /// A node index was outside `[0, node_count)`.
    #[error("node {node} is out of bounds for a network with {node_count} nodes")]
    OutOfBounds {
        /// The offending node index.
        node: usize,
        /// Number of nodes in the network.
        node_count: usize,
    },
    /// An edge would connect a node to itself.
    #[error("self-loop on node {node} is not allowed in a simple graph")]
    SelfLoop {
        /// The node the loop would attach to.
        node: usize,
    },
    /// The edge already exists.
    #[error("edge ({left}, {right}) already exists")]
    DuplicateEdge {
        /// Smaller endpoint.
        left: usize,
        /// Larger endpoint.
        right: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`NetworkError`] variants.
    enum NetworkErrorCode for NetworkError {
        /// A node index was outside `[0, node_count)`.
        OutOfBounds => OutOfBounds { .. } => "NETWORK_OUT_OF_BOUNDS",
        /// An edge would connect a node to itself.
        SelfLoop => SelfLoop { .. } => "NETWORK_SELF_LOOP",
        /// The edge already exists.
        DuplicateEdge => DuplicateEdge { .. } => "NETWORK_DUPLICATE_EDGE",
    }
}

/// Why a heuristic could not produce finite weights for a network.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DegeneracyReason {
    /// Every non-neighbour of `node` has degree zero, so the per-source
    /// normaliser is zero.
    #[error("the candidates of node {node} have a total degree of zero")]
    ZeroDegreeSum {
        /// Source node whose candidate degrees sum to zero.
        node: usize,
    },
    /// A per-pair similarity score divides by zero.
    #[error("pair ({left}, {right}) has a zero denominator")]
    ZeroDenominator {
        /// Smaller endpoint.
        left: usize,
        /// Larger endpoint.
        right: usize,
    },
    /// The network's assortativity coefficient for the metric is NaN or infinite.
    #[error("assortativity coefficient for `{metric}` is not finite")]
    NonFiniteAssortativity {
        /// Metric the coefficient was computed for.
        metric: NodeMetric,
    },
    /// A node-level value is NaN or infinite.
    #[error("`{metric}` value for node {node} is not finite")]
    NonFiniteNodeValue {
        /// Metric that produced the value.
        metric: NodeMetric,
        /// Node carrying the value.
        node: usize,
    },
    /// The collaborator produced a value vector of the wrong length.
    #[error("`{metric}` produced {actual} values for {expected} nodes")]
    ValueCountMismatch {
        /// Metric that produced the vector.
        metric: NodeMetric,
        /// Number of nodes in the network.
        expected: usize,
        /// Number of values returned.
        actual: usize,
    },
}

/// Error type produced when configuring or running an [`crate::EdgeInserter`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InsertionError {
    /// The heuristic identifier does not name a supported strategy.
    #[error("unknown heuristic `{identifier}`")]
    UnknownHeuristic {
        /// The identifier supplied by the caller.
        identifier: Arc<str>,
    },
    /// A heuristic hit a zero denominator or a non-finite value.
    #[error("heuristic `{heuristic}` is undefined for this network: {reason}")]
    DegenerateHeuristic {
        /// Heuristic being evaluated.
        heuristic: Heuristic,
        #[source]
        /// Description of the degenerate case.
        reason: DegeneracyReason,
    },
    /// Every candidate weight was zero so no distribution can be formed.
    #[error("cannot normalise {candidates} candidate weights that sum to zero")]
    ZeroTotalWeight {
        /// Number of candidate pairs that were scored.
        candidates: usize,
    },
    /// Fewer disconnected pairs exist than edges were requested.
    #[error("requested {requested} insertions but only {available} candidate pairs exist")]
    InsufficientCandidates {
        /// Number of insertions requested.
        requested: usize,
        /// Number of candidate pairs available.
        available: usize,
    },
    /// Candidate pairs and probabilities were not parallel sequences.
    #[error("{pairs} candidate pairs were given with {probabilities} probabilities")]
    MismatchedLengths {
        /// Number of candidate pairs.
        pairs: usize,
        /// Number of probabilities.
        probabilities: usize,
    },
    /// A selected pair is already an edge of the network.
    #[error("edge ({left}, {right}) already exists")]
    DuplicateEdge {
        /// Smaller endpoint.
        left: usize,
        /// Larger endpoint.
        right: usize,
    },
    /// The insertion percentage was negative, NaN or infinite.
    #[error("percentage must be finite and non-negative (got {got})")]
    InvalidPercentage {
        /// The rejected percentage.
        got: f64,
    },
    /// A [`crate::MutableNetwork`] operation failed while applying edges.
    #[error("network `{network}` failed: {error}")]
    Network {
        /// Name of the network that produced the error.
        network: Arc<str>,
        #[source]
        /// Underlying network error.
        error: NetworkError,
    },
}

define_error_codes! {
    /// Stable codes describing [`InsertionError`] variants.
    enum InsertionErrorCode for InsertionError {
        /// The heuristic identifier does not name a supported strategy.
        UnknownHeuristic => UnknownHeuristic { .. } => "LIANA_UNKNOWN_HEURISTIC",
        /// A heuristic hit a zero denominator or a non-finite value.
        DegenerateHeuristic => DegenerateHeuristic { .. } => "LIANA_DEGENERATE_HEURISTIC",
        /// Every candidate weight was zero.
        ZeroTotalWeight => ZeroTotalWeight { .. } => "LIANA_ZERO_TOTAL_WEIGHT",
        /// Fewer disconnected pairs exist than edges were requested.
        InsufficientCandidates => InsufficientCandidates { .. } => "LIANA_INSUFFICIENT_CANDIDATES",
        /// Candidate pairs and probabilities were not parallel sequences.
        MismatchedLengths => MismatchedLengths { .. } => "LIANA_MISMATCHED_LENGTHS",
        /// A selected pair is already an edge of the network.
        DuplicateEdge => DuplicateEdge { .. } => "LIANA_DUPLICATE_EDGE",
        /// The insertion percentage was negative, NaN or infinite.
        InvalidPercentage => InvalidPercentage { .. } => "LIANA_INVALID_PERCENTAGE",
        /// A network operation failed while applying edges.
        NetworkFailure => Network { .. } => "LIANA_NETWORK_FAILURE",
    }
}

impl InsertionError {
    /// Retrieve the inner [`NetworkErrorCode`] when the error originated in a
    /// [`crate::MutableNetwork`].
    #[must_use]
    pub const fn network_code(&self) -> Option<NetworkErrorCode> {
        match self {
            Self::Network { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, InsertionError>;
