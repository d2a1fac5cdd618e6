//! Kruskal spanning-weight evaluation.
//!
//! Every evaluation walks a weight-sorted [`EdgeOrder`] with a fresh
//! [`DisjointSet`], optionally excluding one edge or forcing one edge in
//! first. Infeasibility is reported through [`SpanningWeight::Disconnected`]
//! rather than a sentinel total, so it can never collide with a real weight.

pub(crate) mod union_find;

use tracing::instrument;

use crate::{Graph, Result, error::LinchpinError};

pub use self::union_find::DisjointSet;

/// Edge indices sorted by ascending weight.
///
/// Ties keep their original index order, so the permutation is deterministic
/// for a given graph.
///
/// # Examples
/// ```
/// use linchpin_core::{EdgeOrder, Graph};
///
/// let graph = Graph::from_triples(3, &[(0, 1, 5), (1, 2, 1), (0, 2, 5)])
///     .expect("graph must build");
/// let order = EdgeOrder::by_weight(&graph);
/// assert_eq!(order.as_slice(), &[1, 0, 2]);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EdgeOrder {
    indices: Vec<usize>,
}

impl EdgeOrder {
    /// Sorts the edge indices of `graph` by weight.
    #[must_use]
    pub fn by_weight(graph: &Graph) -> Self {
        let edges = graph.edges();
        let mut indices: Vec<usize> = (0..edges.len()).collect();
        indices.sort_by_key(|&index| edges.get(index).map(|edge| edge.weight()));
        Self { indices }
    }

    /// Returns the sorted indices.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the number of indices in the order.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` when the order is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Perturbation applied to the candidate sequence of one evaluation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Constraint {
    /// Every edge is a candidate.
    Unconstrained,
    /// The edge with this original index is skipped.
    Exclude(usize),
    /// The edge with this original index is accepted before any other.
    Include(usize),
}

/// Outcome of a spanning-weight evaluation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpanningWeight {
    /// The candidates span every vertex with this minimum total weight.
    Spanning(u64),
    /// The candidates leave the vertices split into `components` parts.
    Disconnected {
        /// Number of components remaining after the greedy pass.
        components: usize,
    },
}

impl SpanningWeight {
    /// Returns the total weight when the evaluation spans the graph.
    #[must_use]
    pub const fn weight(self) -> Option<u64> {
        match self {
            Self::Spanning(weight) => Some(weight),
            Self::Disconnected { .. } => None,
        }
    }

    /// Returns `true` when the evaluation spans the graph.
    #[must_use]
    pub const fn is_spanning(self) -> bool {
        matches!(self, Self::Spanning(_))
    }
}

/// One minimum spanning tree of a connected graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    edges: Vec<usize>,
    weight: u64,
}

impl SpanningTree {
    /// Returns the original indices of the tree edges in acceptance order.
    #[must_use]
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    /// Returns the total tree weight.
    #[must_use]
    pub fn weight(&self) -> u64 {
        self.weight
    }
}

/// Computes the minimum spanning weight reachable by greedily accepting the
/// edges of `order` under `constraint`.
///
/// A forced edge is united first on the empty forest; a forced self-loop
/// joins nothing and contributes no weight. Constraint indices beyond the
/// edge list are ignored.
///
/// # Examples
/// ```
/// use linchpin_core::{Constraint, EdgeOrder, Graph, SpanningWeight, spanning_weight};
///
/// let graph = Graph::from_triples(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 3)])
///     .expect("graph must build");
/// let order = EdgeOrder::by_weight(&graph);
///
/// assert_eq!(
///     spanning_weight(&graph, &order, Constraint::Unconstrained),
///     SpanningWeight::Spanning(3),
/// );
/// assert_eq!(
///     spanning_weight(&graph, &order, Constraint::Include(2)),
///     SpanningWeight::Spanning(4),
/// );
/// ```
#[must_use]
#[instrument(level = "trace", skip(graph, order), fields(nodes = graph.node_count()))]
pub fn spanning_weight(
    graph: &Graph,
    order: &EdgeOrder,
    constraint: Constraint,
) -> SpanningWeight {
    #[cfg(feature = "metrics")]
    metrics::counter!("linchpin_spanning_evaluations").increment(1);

    greedy_pass(graph, order, constraint, |_| {})
}

/// Extracts one minimum spanning tree of `graph`.
///
/// # Errors
/// Returns [`LinchpinError::Disconnected`] when the graph does not span.
///
/// # Examples
/// ```
/// use linchpin_core::{Graph, minimum_spanning_tree};
///
/// let graph = Graph::from_triples(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 3)])
///     .expect("graph must build");
/// let tree = minimum_spanning_tree(&graph).expect("graph is connected");
/// assert_eq!(tree.edges(), &[0, 1]);
/// assert_eq!(tree.weight(), 3);
/// ```
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn minimum_spanning_tree(graph: &Graph) -> Result<SpanningTree> {
    let order = EdgeOrder::by_weight(graph);
    let mut edges = Vec::with_capacity(graph.node_count().saturating_sub(1));
    let outcome = greedy_pass(graph, &order, Constraint::Unconstrained, |index| {
        edges.push(index);
    });
    match outcome {
        SpanningWeight::Spanning(weight) => Ok(SpanningTree { edges, weight }),
        SpanningWeight::Disconnected { components } => Err(LinchpinError::Disconnected {
            node_count: graph.node_count(),
            components,
        }),
    }
}

fn greedy_pass(
    graph: &Graph,
    order: &EdgeOrder,
    constraint: Constraint,
    mut on_accept: impl FnMut(usize),
) -> SpanningWeight {
    let node_count = graph.node_count();
    let tree_size = node_count.saturating_sub(1);
    let mut set = DisjointSet::new(node_count);
    let mut total: u64 = 0;
    let mut accepted: usize = 0;

    let mut accept = |set: &mut DisjointSet, index: usize| -> bool {
        let Some(edge) = graph.edge(index) else {
            return false;
        };
        if !set.union(edge.source(), edge.target()) {
            return false;
        }
        total = total.saturating_add(u64::from(edge.weight()));
        on_accept(index);
        true
    };

    let skipped = match constraint {
        Constraint::Unconstrained => None,
        Constraint::Exclude(index) => Some(index),
        Constraint::Include(index) => {
            if accept(&mut set, index) {
                accepted += 1;
            }
            Some(index)
        }
    };

    for &index in order.as_slice() {
        if accepted >= tree_size {
            break;
        }
        if skipped == Some(index) {
            continue;
        }
        if accept(&mut set, index) {
            accepted += 1;
        }
    }

    if set.is_connected() {
        SpanningWeight::Spanning(total)
    } else {
        SpanningWeight::Disconnected {
            components: set.components(),
        }
    }
}
