//! Critical and pseudo-critical edge classification.
//!
//! The baseline minimum spanning weight `W` is computed once. Each edge is
//! then evaluated independently: if excluding it disconnects the graph or
//! raises the weight above `W` it is critical; otherwise, if forcing it in
//! first still achieves `W`, it is pseudo-critical. Every evaluation owns its
//! own disjoint set, so the parallel strategy shares nothing but the graph
//! and the sorted edge order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::{
    Graph, Result,
    builder::ExecutionStrategy,
    error::LinchpinError,
    mst::{Constraint, EdgeOrder, SpanningWeight, spanning_weight},
    result::{Classification, EdgeClass},
};

/// Entry point for classifying the edges of a graph.
///
/// # Examples
/// ```
/// use linchpin_core::{ClassifierBuilder, Graph};
///
/// let graph = Graph::from_triples(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 3, 1)])
///     .expect("graph must build");
/// let classifier = ClassifierBuilder::new().build().expect("builder must succeed");
/// let classification = classifier.classify(&graph).expect("graph is connected");
/// assert!(classification.critical().is_empty());
/// assert_eq!(classification.pseudo_critical(), vec![0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    execution_strategy: ExecutionStrategy,
}

impl Classifier {
    pub(crate) fn new(execution_strategy: ExecutionStrategy) -> Self {
        Self { execution_strategy }
    }

    /// Returns the resolved execution strategy used by [`Classifier::classify`].
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Classifies every edge of `graph`.
    ///
    /// # Errors
    /// Returns [`LinchpinError::Disconnected`] when the graph does not span
    /// all of its vertices, and [`LinchpinError::BackendUnavailable`] when the
    /// parallel strategy is requested without the `parallel` feature.
    #[instrument(
        name = "classifier.classify",
        skip(self, graph),
        fields(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            strategy = ?self.execution_strategy,
        ),
    )]
    pub fn classify(&self, graph: &Graph) -> Result<Classification> {
        let order = EdgeOrder::by_weight(graph);
        let baseline = match spanning_weight(graph, &order, Constraint::Unconstrained) {
            SpanningWeight::Spanning(weight) => weight,
            SpanningWeight::Disconnected { components } => {
                return Err(LinchpinError::Disconnected {
                    node_count: graph.node_count(),
                    components,
                });
            }
        };

        let classes = self.classify_edges(graph, &order, baseline)?;
        let classification = Classification::new(classes, baseline);
        let critical = classification.critical().len();
        let pseudo_critical = classification.pseudo_critical().len();

        #[cfg(feature = "metrics")]
        {
            metrics::counter!("linchpin_critical_edges").increment(critical as u64);
            metrics::counter!("linchpin_pseudo_critical_edges").increment(pseudo_critical as u64);
        }

        info!(
            mst_weight = baseline,
            critical, pseudo_critical, "classified graph edges"
        );
        Ok(classification)
    }

    fn classify_edges(
        &self,
        graph: &Graph,
        order: &EdgeOrder,
        baseline: u64,
    ) -> Result<Vec<EdgeClass>> {
        match self.execution_strategy.resolve() {
            ExecutionStrategy::Parallel => classify_parallel(graph, order, baseline),
            _ => Ok((0..graph.edge_count())
                .map(|index| classify_edge(graph, order, baseline, index))
                .collect()),
        }
    }
}

#[cfg(feature = "parallel")]
fn classify_parallel(graph: &Graph, order: &EdgeOrder, baseline: u64) -> Result<Vec<EdgeClass>> {
    Ok((0..graph.edge_count())
        .into_par_iter()
        .map(|index| classify_edge(graph, order, baseline, index))
        .collect())
}

#[cfg(not(feature = "parallel"))]
fn classify_parallel(_graph: &Graph, _order: &EdgeOrder, _baseline: u64) -> Result<Vec<EdgeClass>> {
    Err(LinchpinError::BackendUnavailable {
        requested: ExecutionStrategy::Parallel,
    })
}

/// Classifies every edge of `graph` on the calling thread.
///
/// # Errors
/// Returns [`LinchpinError::Disconnected`] when the graph does not span all
/// of its vertices.
///
/// # Examples
/// ```
/// use linchpin_core::{Graph, classify};
///
/// let graph = Graph::from_triples(2, &[(0, 1, 5)]).expect("graph must build");
/// let classification = classify(&graph).expect("graph is connected");
/// assert_eq!(classification.critical(), vec![0]);
/// assert_eq!(classification.mst_weight(), 5);
/// ```
pub fn classify(graph: &Graph) -> Result<Classification> {
    Classifier::new(ExecutionStrategy::Sequential).classify(graph)
}

fn classify_edge(graph: &Graph, order: &EdgeOrder, baseline: u64, index: usize) -> EdgeClass {
    if graph.edge(index).is_some_and(|edge| edge.is_self_loop()) {
        debug!(edge = index, "self-loop can never join a spanning tree");
        return EdgeClass::Redundant;
    }

    let class = match spanning_weight(graph, order, Constraint::Exclude(index)) {
        SpanningWeight::Disconnected { .. } => EdgeClass::Critical,
        SpanningWeight::Spanning(weight) if weight > baseline => EdgeClass::Critical,
        SpanningWeight::Spanning(_) => {
            match spanning_weight(graph, order, Constraint::Include(index)) {
                SpanningWeight::Spanning(weight) if weight == baseline => {
                    EdgeClass::PseudoCritical
                }
                _ => EdgeClass::Redundant,
            }
        }
    };

    debug!(edge = index, ?class, "classified edge");
    class
}

#[cfg(test)]
mod property;
