//! Type definitions for insertion property tests.

use test_strategy::Arbitrary;

use crate::test_utils::TestGraph;

/// Topology family used to generate a fixture network.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Few edges, often leaving isolated nodes.
    #[weight(3)]
    Sparse,
    /// Most pairs connected, leaving few candidates.
    #[weight(2)]
    Dense,
    /// Two components with no edges between them.
    #[weight(2)]
    Disconnected,
    /// A hub joined to every other node plus a few random chords.
    #[weight(1)]
    Hub,
}

/// Generated network together with the parameters that produced it.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// The generated network.
    pub graph: TestGraph,
    /// Topology family.
    pub shape: GraphShape,
    /// Seed the generator was driven by.
    pub seed: u64,
}
