//! Benchmark support crate for the block model generators.
//!
//! Provides the parameter types and setup helpers shared by the Criterion
//! benchmarks for graph generation, nested composition and shuffling.

pub mod error;
pub mod params;
