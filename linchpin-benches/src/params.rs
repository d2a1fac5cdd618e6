//! Benchmark parameter types.

use std::fmt;

/// Shape of a graph used in a benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices.
    pub node_count: usize,
    /// Number of edges beyond the random spanning tree.
    pub extra_edges: usize,
}

impl GraphBenchParams {
    /// Returns the total edge count of the generated graph.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.node_count
            .saturating_sub(1)
            .saturating_add(self.extra_edges)
    }
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.node_count, self.edge_count())
    }
}
