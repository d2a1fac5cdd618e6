//! Property-based tests for edge classification.
//!
//! Verifies the classifier against a brute-force oracle that enumerates
//! every spanning tree of small graphs, validates the structural guarantees
//! of each class on larger graphs, and checks that the result does not
//! depend on input order or execution strategy.

mod equivalence;
mod invariance;
mod oracle;
mod strategies;
mod structural;
mod types;
