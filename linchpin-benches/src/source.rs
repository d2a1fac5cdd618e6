//! Synthetic connected graphs for benchmarking.
//!
//! Every generated graph starts from a random spanning tree so it is always
//! connected; extra edges then add cycles, parallel edges, and the occasional
//! self-loop. Weights are drawn from a narrow range so ties are common and
//! the pseudo-critical path is exercised.

use linchpin_core::{Edge, Graph, LinchpinError};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// The requested maximum weight was zero.
    #[error("maximum weight must be greater than zero")]
    ZeroWeight,
    /// The generated edges were rejected by the graph model.
    #[error("graph construction failed: {0}")]
    Graph(#[from] LinchpinError),
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices to generate.
    pub node_count: usize,
    /// Number of random edges added on top of the spanning tree.
    pub extra_edges: usize,
    /// Inclusive upper bound for edge weights; weights start at 1.
    pub max_weight: u32,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a connected graph from the given configuration.
///
/// # Errors
///
/// Returns [`SyntheticError::ZeroNodes`] if `node_count` is zero, or
/// [`SyntheticError::ZeroWeight`] if `max_weight` is zero.
///
/// # Examples
///
/// ```
/// use linchpin_benches::source::{SyntheticGraphConfig, generate_graph};
///
/// let config = SyntheticGraphConfig { node_count: 10, extra_edges: 5, max_weight: 4, seed: 42 };
/// let graph = generate_graph(&config).expect("valid config");
/// assert_eq!(graph.node_count(), 10);
/// assert_eq!(graph.edge_count(), 14);
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph, SyntheticError> {
    if config.node_count == 0 {
        return Err(SyntheticError::ZeroNodes);
    }
    if config.max_weight == 0 {
        return Err(SyntheticError::ZeroWeight);
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let capacity = config
        .node_count
        .saturating_sub(1)
        .saturating_add(config.extra_edges);
    let mut edges = Vec::with_capacity(capacity);

    for vertex in 1..config.node_count {
        let parent = rng.gen_range(0..vertex);
        let weight = rng.gen_range(1..=config.max_weight);
        edges.push(Edge::new(parent, vertex, weight));
    }
    for _ in 0..config.extra_edges {
        let source = rng.gen_range(0..config.node_count);
        let target = rng.gen_range(0..config.node_count);
        let weight = rng.gen_range(1..=config.max_weight);
        edges.push(Edge::new(source, target, weight));
    }

    Ok(Graph::new(config.node_count, edges)?)
}
