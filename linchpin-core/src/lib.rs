//! Linchpin core library.
//!
//! Classifies the edges of a weighted undirected connected graph by the role
//! they play across its minimum spanning trees: critical edges appear in
//! every MST, pseudo-critical edges in some but not all, and the rest in
//! none.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the crate emits:
//!
//! - `linchpin_spanning_evaluations` (counter)
//! - `linchpin_critical_edges` (counter)
//! - `linchpin_pseudo_critical_edges` (counter)
//!
//! These metric names are stable for downstream crates.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod classifier;
mod error;
mod graph;
mod mst;
mod result;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{ClassifierBuilder, ExecutionStrategy},
    classifier::{Classifier, classify},
    error::{LinchpinError, LinchpinErrorCode, Result},
    graph::{Edge, Graph},
    mst::{
        Constraint, DisjointSet, EdgeOrder, SpanningTree, SpanningWeight, minimum_spanning_tree,
        spanning_weight,
    },
    result::{Classification, EdgeClass},
};
