//! Property 1: oracle equivalence.
//!
//! The classifier must agree edge-for-edge with the exhaustive oracle and
//! report the same minimum spanning weight.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::classify;

use super::oracle::exhaustive_classification;
use super::types::GraphFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let classification = classify(graph).map_err(|err| {
        TestCaseError::fail(format!(
            "classify failed: {err} (profile={:?}, nodes={}, edges={})",
            fixture.profile,
            graph.node_count(),
            graph.edge_count(),
        ))
    })?;
    let oracle = exhaustive_classification(graph);

    if oracle.mst_weight != Some(classification.mst_weight()) {
        return Err(TestCaseError::fail(format!(
            "MST weight mismatch: classifier={}, oracle={:?} (profile={:?})",
            classification.mst_weight(),
            oracle.mst_weight,
            fixture.profile,
        )));
    }

    for (index, (actual, expected)) in classification
        .classes()
        .iter()
        .zip(&oracle.classes)
        .enumerate()
    {
        if actual != expected {
            return Err(TestCaseError::fail(format!(
                "edge {index} ({:?}): classifier={actual:?}, oracle={expected:?} (profile={:?})",
                graph.edges()[index],
                fixture.profile,
            )));
        }
    }
    Ok(())
}
