//! Strategy builders for classification property tests.
//!
//! Every generated graph is connected: a random spanning tree is laid down
//! first, extra edges (including occasional self-loops and parallel edges)
//! are added on top, and the edge list is shuffled so tree edges do not
//! cluster at the front.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{Edge, Graph};

use super::oracle::MAX_ORACLE_EDGES;
use super::types::{GraphFixture, WeightProfile};

/// Maximum node count for graphs checked against the exhaustive oracle.
const ORACLE_MAX_NODES: usize = 6;
/// Maximum node count for graphs checked structurally.
const STRUCTURAL_MAX_NODES: usize = 24;
/// Probability that an extra edge is a self-loop.
const SELF_LOOP_PROBABILITY: f64 = 0.05;

/// Size bounds for one generated graph.
#[derive(Clone, Copy, Debug)]
pub(super) struct GraphShape {
    /// Upper bound for the node count (inclusive).
    pub max_nodes: usize,
    /// Upper bound for the total edge count (inclusive).
    pub max_edges: usize,
}

/// Shape of graphs small enough for the exhaustive oracle.
pub(super) const ORACLE_SHAPE: GraphShape = GraphShape {
    max_nodes: ORACLE_MAX_NODES,
    max_edges: MAX_ORACLE_EDGES,
};

/// Shape of graphs used by the structural and invariance properties.
pub(super) const STRUCTURAL_SHAPE: GraphShape = GraphShape {
    max_nodes: STRUCTURAL_MAX_NODES,
    max_edges: STRUCTURAL_MAX_NODES * 3,
};

/// Generates fixtures of the given shape across every weight profile.
pub(super) fn fixture_strategy(shape: GraphShape) -> impl Strategy<Value = GraphFixture> {
    (weight_profile_strategy(), any::<u64>()).prop_map(move |(profile, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, profile, &mut rng)
    })
}

fn weight_profile_strategy() -> impl Strategy<Value = WeightProfile> {
    prop_oneof![
        1 => Just(WeightProfile::Spread),
        2 => Just(WeightProfile::Clustered),
        1 => Just(WeightProfile::Uniform),
    ]
}

/// Generates a connected fixture for a specific profile.
///
/// Useful for targeted rstest cases where the profile and seed are chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(
    shape: GraphShape,
    profile: WeightProfile,
    rng: &mut SmallRng,
) -> GraphFixture {
    let node_count = rng.gen_range(1..=shape.max_nodes);
    let tree_edges = node_count - 1;
    let extra_edges = rng.gen_range(0..=shape.max_edges.saturating_sub(tree_edges));

    let mut edges = Vec::with_capacity(tree_edges + extra_edges);
    for node in 1..node_count {
        let parent = rng.gen_range(0..node);
        edges.push(Edge::new(node, parent, weight(profile, rng)));
    }
    for _ in 0..extra_edges {
        let source = rng.gen_range(0..node_count);
        let target = if rng.gen_bool(SELF_LOOP_PROBABILITY) {
            source
        } else {
            rng.gen_range(0..node_count)
        };
        edges.push(Edge::new(source, target, weight(profile, rng)));
    }
    edges.shuffle(rng);

    let graph = Graph::new(node_count, edges).expect("generated endpoints are in range");
    GraphFixture { graph, profile }
}

fn weight(profile: WeightProfile, rng: &mut SmallRng) -> u32 {
    match profile {
        WeightProfile::Spread => rng.gen_range(0..10_000),
        WeightProfile::Clustered => rng.gen_range(0..=3),
        WeightProfile::Uniform => 1,
    }
}
