//! Property 2: structural guarantees of each class.
//!
//! - critical and pseudo-critical sets are disjoint,
//! - excluding a critical edge raises the spanning weight or disconnects,
//! - forcing a pseudo-critical edge keeps the baseline weight,
//! - excluding a pseudo-critical edge also keeps the baseline weight,
//! - every edge of an extracted MST is critical or pseudo-critical.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    Constraint, EdgeOrder, SpanningWeight, classify, minimum_spanning_tree, spanning_weight,
};

use super::types::GraphFixture;

/// Runs the structural property for the given fixture.
pub(super) fn run_structural_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let classification =
        classify(graph).map_err(|err| TestCaseError::fail(format!("classify failed: {err}")))?;
    let baseline = classification.mst_weight();
    let order = EdgeOrder::by_weight(graph);

    let critical: HashSet<usize> = classification.critical().into_iter().collect();
    let pseudo_critical: HashSet<usize> = classification.pseudo_critical().into_iter().collect();
    if let Some(index) = critical.intersection(&pseudo_critical).next() {
        return Err(TestCaseError::fail(format!(
            "edge {index} is both critical and pseudo-critical"
        )));
    }

    for &index in &critical {
        match spanning_weight(graph, &order, Constraint::Exclude(index)) {
            SpanningWeight::Spanning(weight) if weight <= baseline => {
                return Err(TestCaseError::fail(format!(
                    "excluding critical edge {index} kept weight {weight} <= {baseline}"
                )));
            }
            _ => {}
        }
    }

    for &index in &pseudo_critical {
        for constraint in [Constraint::Include(index), Constraint::Exclude(index)] {
            let outcome = spanning_weight(graph, &order, constraint);
            if outcome != SpanningWeight::Spanning(baseline) {
                return Err(TestCaseError::fail(format!(
                    "{constraint:?} on pseudo-critical edge produced {outcome:?}, expected {baseline}"
                )));
            }
        }
    }

    let tree = minimum_spanning_tree(graph)
        .map_err(|err| TestCaseError::fail(format!("MST extraction failed: {err}")))?;
    if tree.weight() != baseline {
        return Err(TestCaseError::fail(format!(
            "extracted tree weight {} differs from baseline {baseline}",
            tree.weight()
        )));
    }
    for index in tree.edges() {
        if !critical.contains(index) && !pseudo_critical.contains(index) {
            return Err(TestCaseError::fail(format!(
                "MST edge {index} is classified redundant"
            )));
        }
    }
    Ok(())
}
