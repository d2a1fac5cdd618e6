//! Benchmark support crate for linchpin.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for edge classification and spanning-weight evaluation.

pub mod error;
pub mod params;
pub mod source;
