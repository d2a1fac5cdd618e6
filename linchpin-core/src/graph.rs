//! Immutable weighted undirected graph description.
//!
//! A [`Graph`] owns its vertex count and edge list. The position of an edge
//! in the list is its identity: every index reported by the crate refers
//! back to that position regardless of how edges are reordered internally.

use crate::{Result, error::LinchpinError};

/// An undirected weighted edge between two vertices.
///
/// # Examples
/// ```
/// use linchpin_core::Edge;
///
/// let edge = Edge::new(2, 0, 7);
/// assert_eq!(edge.source(), 2);
/// assert_eq!(edge.target(), 0);
/// assert_eq!(edge.weight(), 7);
/// assert!(!edge.is_self_loop());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: u32,
}

impl Edge {
    /// Creates an edge joining `source` and `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: u32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    pub const fn source(&self) -> usize {
        self.source
    }

    /// Returns the second endpoint as supplied.
    #[must_use]
    pub const fn target(&self) -> usize {
        self.target
    }

    /// Returns the edge weight.
    #[must_use]
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl From<(usize, usize, u32)> for Edge {
    fn from((source, target, weight): (usize, usize, u32)) -> Self {
        Self::new(source, target, weight)
    }
}

/// A validated graph: every edge endpoint lies in `0..node_count`.
///
/// Self-loops and parallel edges are accepted. Connectivity is not checked
/// here; classification reports a disconnected graph as an error.
///
/// # Examples
/// ```
/// use linchpin_core::Graph;
///
/// let graph = Graph::from_triples(3, &[(0, 1, 4), (1, 2, 2)])
///     .expect("endpoints are in range");
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    node_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph from a vertex count and an edge list.
    ///
    /// # Errors
    /// Returns [`LinchpinError::EmptyGraph`] when `node_count` is zero and
    /// [`LinchpinError::InvalidNodeId`] when an endpoint is out of range.
    pub fn new(node_count: usize, edges: Vec<Edge>) -> Result<Self> {
        if node_count == 0 {
            return Err(LinchpinError::EmptyGraph);
        }

        for (index, edge) in edges.iter().enumerate() {
            for node in [edge.source, edge.target] {
                if node >= node_count {
                    return Err(LinchpinError::InvalidNodeId {
                        edge: index,
                        node,
                        node_count,
                    });
                }
            }
        }

        Ok(Self { node_count, edges })
    }

    /// Builds a graph from `(source, target, weight)` triples.
    ///
    /// # Errors
    /// Same as [`Graph::new`].
    pub fn from_triples(node_count: usize, triples: &[(usize, usize, u32)]) -> Result<Self> {
        Self::new(node_count, triples.iter().copied().map(Edge::from).collect())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edges in their original order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the edge at original index `index`, if any.
    #[must_use]
    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }
}
