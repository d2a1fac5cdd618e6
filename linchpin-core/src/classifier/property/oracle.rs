//! Brute-force oracle for classification property verification.
//!
//! Enumerates every `n - 1` edge subset of a small graph, keeps those that
//! form spanning trees, and classifies edges straight from the definitions:
//! critical edges lie in every minimum spanning tree, pseudo-critical edges
//! in some but not all.

use crate::{EdgeClass, Graph};

/// Upper bound on the edge count the oracle accepts.
pub(super) const MAX_ORACLE_EDGES: usize = 14;

/// Result of the exhaustive oracle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct OracleResult {
    /// Minimum spanning weight, `None` when no spanning tree exists.
    pub mst_weight: Option<u64>,
    /// Class of every edge in original order.
    pub classes: Vec<EdgeClass>,
}

/// Classifies the edges of `graph` by enumerating its spanning trees.
///
/// # Panics
/// Panics when the graph has more than [`MAX_ORACLE_EDGES`] edges.
pub(super) fn exhaustive_classification(graph: &Graph) -> OracleResult {
    let edge_count = graph.edge_count();
    assert!(
        edge_count <= MAX_ORACLE_EDGES,
        "oracle is exponential in the edge count"
    );
    let tree_size = graph.node_count().saturating_sub(1);

    let mut best: Option<u64> = None;
    let mut minimal_trees: Vec<u32> = Vec::new();

    for mask in 0u32..(1u32 << edge_count) {
        if mask.count_ones() as usize != tree_size {
            continue;
        }
        let Some(weight) = tree_weight(graph, mask) else {
            continue;
        };
        match best {
            Some(current) if weight > current => {}
            Some(current) if weight == current => minimal_trees.push(mask),
            _ => {
                best = Some(weight);
                minimal_trees.clear();
                minimal_trees.push(mask);
            }
        }
    }

    let classes = (0..edge_count)
        .map(|index| {
            let bit = 1u32 << index;
            let containing = minimal_trees.iter().filter(|&&tree| tree & bit != 0).count();
            if containing == 0 {
                EdgeClass::Redundant
            } else if containing == minimal_trees.len() {
                EdgeClass::Critical
            } else {
                EdgeClass::PseudoCritical
            }
        })
        .collect();

    OracleResult {
        mst_weight: best,
        classes,
    }
}

/// Returns the weight of the edge subset `mask` when it forms a spanning
/// tree, i.e. it has `n - 1` edges and closes no cycle.
fn tree_weight(graph: &Graph, mask: u32) -> Option<u64> {
    let mut parent: Vec<usize> = (0..graph.node_count()).collect();
    let mut weight = 0u64;
    for (index, edge) in graph.edges().iter().enumerate() {
        if mask & (1u32 << index) == 0 {
            continue;
        }
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return None;
        }
        parent[left] = right;
        weight += u64::from(edge.weight());
    }
    Some(weight)
}

fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}
