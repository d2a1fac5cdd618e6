//! Property 3: independence from input order and execution strategy.
//!
//! Shuffling the edge list and mapping the resulting indices back must
//! reproduce the original classification, and the parallel strategy must
//! agree with the sequential one.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::{EdgeClass, Graph, classify};

use super::types::GraphFixture;

/// Runs the permutation invariance property for the given fixture.
pub(super) fn run_permutation_property(fixture: &GraphFixture, seed: u64) -> TestCaseResult {
    let graph = &fixture.graph;
    let expected = classify(graph)
        .map_err(|err| TestCaseError::fail(format!("classify failed: {err}")))?;

    let mut permutation: Vec<usize> = (0..graph.edge_count()).collect();
    permutation.shuffle(&mut SmallRng::seed_from_u64(seed));
    let shuffled_edges = permutation.iter().map(|&index| graph.edges()[index]).collect();
    let shuffled = Graph::new(graph.node_count(), shuffled_edges)
        .map_err(|err| TestCaseError::fail(format!("shuffled graph rejected: {err}")))?;
    let actual = classify(&shuffled)
        .map_err(|err| TestCaseError::fail(format!("classify failed: {err}")))?;

    let mut remapped = vec![EdgeClass::Redundant; graph.edge_count()];
    for (position, &original) in permutation.iter().enumerate() {
        remapped[original] = actual.classes()[position];
    }

    if remapped != expected.classes() || actual.mst_weight() != expected.mst_weight() {
        return Err(TestCaseError::fail(format!(
            "shuffling changed the classification: {:?} vs {:?} (profile={:?})",
            remapped,
            expected.classes(),
            fixture.profile,
        )));
    }
    Ok(())
}

/// Runs the strategy agreement property for the given fixture.
#[cfg(feature = "parallel")]
pub(super) fn run_strategy_agreement_property(fixture: &GraphFixture) -> TestCaseResult {
    use crate::{ClassifierBuilder, ExecutionStrategy};

    let sequential = classify(&fixture.graph)
        .map_err(|err| TestCaseError::fail(format!("sequential classify failed: {err}")))?;
    let parallel = ClassifierBuilder::new()
        .with_execution_strategy(ExecutionStrategy::Parallel)
        .build()
        .and_then(|classifier| classifier.classify(&fixture.graph))
        .map_err(|err| TestCaseError::fail(format!("parallel classify failed: {err}")))?;

    if sequential != parallel {
        return Err(TestCaseError::fail(format!(
            "strategies disagree: sequential={:?}, parallel={:?}",
            sequential.classes(),
            parallel.classes(),
        )));
    }
    Ok(())
}
