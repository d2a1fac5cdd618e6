//! Type definitions for classification property tests.

use crate::Graph;

/// Weight profile for generated graphs.
///
/// Ties are what make pseudo-critical edges appear, so most profiles draw
/// from narrow weight ranges.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightProfile {
    /// Weights drawn from a wide range; ties are rare.
    Spread,
    /// Weights drawn from `0..=3`; ties are common.
    Clustered,
    /// Every edge carries the same weight.
    Uniform,
}

/// Fixture for classification property tests.
///
/// Keeps the weight profile alongside the graph for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Connected graph under test.
    pub graph: Graph,
    /// Weight profile used during generation.
    pub profile: WeightProfile,
}
